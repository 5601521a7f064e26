mod summary;
pub mod views;

pub use summary::{assemble_report, build_report, checked_footprint, report_from_parts};

use super::domain::{BusinessCategory, SizeBucket};

/// Faults that leave no safe partial report.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    #[error("emission total is not a finite number")]
    NonFiniteTotal,
    #[error("no benchmark row for {category} ({bucket:?}) and no Other fallback")]
    BenchmarkUnavailable {
        category: BusinessCategory,
        bucket: SizeBucket,
    },
}
