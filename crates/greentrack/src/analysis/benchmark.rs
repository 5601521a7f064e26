use super::domain::{BusinessCategory, Provenance, SizeBucket};
use super::reference::BenchmarkTable;
use super::report::views::{BenchmarkResult, Direction};

/// Compares a subject's monthly total with a peer average.
///
/// Returns `None` when the average is not a positive, finite number; there is
/// nothing meaningful to compare against in that case.
pub fn compare(
    subject_total: f64,
    average: f64,
    context: Option<String>,
    employee_range: Option<String>,
    source: Provenance,
) -> Option<BenchmarkResult> {
    if !average.is_finite() || average <= 0.0 {
        return None;
    }

    let difference = ((subject_total - average) / average * 100.0).round();
    if !difference.is_finite() {
        return None;
    }
    let difference = difference as i64;

    Some(BenchmarkResult {
        average_co2: average,
        your_co2: subject_total,
        difference,
        percentage: difference.abs(),
        comparison: if difference > 0 {
            Direction::Above
        } else {
            Direction::Below
        },
        context,
        employee_range,
        source,
    })
}

/// Static path: peer average from the benchmark table, with `Other` as the
/// fallback cohort.
pub fn static_benchmark(
    subject_total: f64,
    category: BusinessCategory,
    bucket: SizeBucket,
    table: &BenchmarkTable,
) -> Option<BenchmarkResult> {
    let (matched, row) = table.lookup(category, bucket)?;
    let cohort = if matched == BusinessCategory::Other {
        "small businesses".to_string()
    } else {
        format!("{} businesses", matched.label().to_ascii_lowercase())
    };
    let context = format!(
        "Compared with the typical monthly footprint of {cohort} with {}",
        row.employee_range
    );

    compare(
        subject_total,
        row.average_co2,
        Some(context),
        Some(row.employee_range.clone()),
        Provenance::Static,
    )
}
