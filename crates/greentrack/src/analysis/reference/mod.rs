//! Read-only reference data: emission factors, peer benchmarks and the ROI
//! catalog. Built once at startup and shared behind an `Arc`.

pub(crate) mod defaults;
mod tables;

pub use tables::{BenchmarkRow, BenchmarkTable, CatalogItem, RoiCatalog};

use super::domain::EmissionFactors;
use crate::config::ReferenceDataConfig;
use std::path::{Path, PathBuf};
use tracing::info;

const EMBEDDED_BENCHMARKS: &str = include_str!("../../../data/benchmarks.json");
const EMBEDDED_ROI_CATALOG: &str = include_str!("../../../data/roi_catalog.json");

#[derive(Debug, thiserror::Error)]
pub enum ReferenceDataError {
    #[error("failed to read reference document {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("reference document {document} is not valid JSON: {source}")]
    Parse {
        document: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid reference data: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub factors: EmissionFactors,
    pub benchmarks: BenchmarkTable,
    pub roi_catalog: RoiCatalog,
}

impl ReferenceData {
    /// Loads the two documents, preferring configured paths over the copies
    /// compiled into the binary.
    pub fn load(config: &ReferenceDataConfig) -> Result<Self, ReferenceDataError> {
        let benchmarks = read_document(config.benchmarks_path.as_deref(), EMBEDDED_BENCHMARKS)?;
        let catalog = read_document(config.roi_catalog_path.as_deref(), EMBEDDED_ROI_CATALOG)?;

        let data = Self::from_documents(&benchmarks, &catalog)?;
        info!(
            catalog_entries = data.roi_catalog.len(),
            custom_benchmarks = config.benchmarks_path.is_some(),
            custom_catalog = config.roi_catalog_path.is_some(),
            "reference data loaded"
        );
        Ok(data)
    }

    pub fn embedded() -> Result<Self, ReferenceDataError> {
        Self::from_documents(EMBEDDED_BENCHMARKS, EMBEDDED_ROI_CATALOG)
    }

    pub fn from_documents(benchmarks: &str, roi_catalog: &str) -> Result<Self, ReferenceDataError> {
        let benchmarks: BenchmarkTable =
            serde_json::from_str(benchmarks).map_err(|source| ReferenceDataError::Parse {
                document: "benchmarks".to_string(),
                source,
            })?;
        benchmarks.validate()?;

        let roi_catalog: RoiCatalog =
            serde_json::from_str(roi_catalog).map_err(|source| ReferenceDataError::Parse {
                document: "roi_catalog".to_string(),
                source,
            })?;
        roi_catalog.validate()?;

        Ok(Self {
            factors: EmissionFactors::STANDARD,
            benchmarks,
            roi_catalog,
        })
    }
}

fn read_document(path: Option<&Path>, embedded: &str) -> Result<String, ReferenceDataError> {
    match path {
        Some(path) => std::fs::read_to_string(path).map_err(|source| ReferenceDataError::Io {
            path: path.to_path_buf(),
            source,
        }),
        None => Ok(embedded.to_string()),
    }
}
