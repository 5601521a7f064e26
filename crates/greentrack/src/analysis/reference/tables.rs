use super::super::domain::{ActionCategory, BusinessCategory, SizeBucket};
use super::ReferenceDataError;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

/// Peer cohort row: average monthly kg CO2 plus a headcount label.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkRow {
    #[serde(rename = "averageCO2")]
    pub average_co2: f64,
    pub employee_range: String,
}

/// Category → size bucket → peer average.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct BenchmarkTable {
    rows: HashMap<BusinessCategory, HashMap<SizeBucket, BenchmarkRow>>,
}

impl BenchmarkTable {
    pub(crate) fn validate(&self) -> Result<(), ReferenceDataError> {
        for bucket in [SizeBucket::Small, SizeBucket::Medium, SizeBucket::Large] {
            let present = self
                .rows
                .get(&BusinessCategory::Other)
                .is_some_and(|sizes| sizes.contains_key(&bucket));
            if !present {
                return Err(ReferenceDataError::Invalid(format!(
                    "benchmark table needs an Other/{} row as the universal fallback",
                    bucket.key()
                )));
            }
        }

        for (category, sizes) in &self.rows {
            for (bucket, row) in sizes {
                if !row.average_co2.is_finite() || row.average_co2 <= 0.0 {
                    return Err(ReferenceDataError::Invalid(format!(
                        "benchmark {}/{} must have a positive averageCO2",
                        category.label(),
                        bucket.key()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Looks up the peer row, falling through to `Other` when the category (or
    /// its size bucket) is missing. Returns the category that actually matched.
    pub fn lookup(
        &self,
        category: BusinessCategory,
        bucket: SizeBucket,
    ) -> Option<(BusinessCategory, &BenchmarkRow)> {
        self.rows
            .get(&category)
            .and_then(|sizes| sizes.get(&bucket))
            .map(|row| (category, row))
            .or_else(|| {
                self.rows
                    .get(&BusinessCategory::Other)
                    .and_then(|sizes| sizes.get(&bucket))
                    .map(|row| (BusinessCategory::Other, row))
            })
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub upfront_cost: f64,
    pub monthly_savings: f64,
    pub description: String,
}

/// Known recommendation titles with their cost and savings figures.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct RoiCatalog {
    domains: HashMap<ActionCategory, BTreeMap<String, CatalogItem>>,
}

impl RoiCatalog {
    pub(crate) fn validate(&self) -> Result<(), ReferenceDataError> {
        for (category, items) in &self.domains {
            for (title, item) in items {
                let valid = item.upfront_cost.is_finite()
                    && item.upfront_cost >= 0.0
                    && item.monthly_savings.is_finite();
                if !valid {
                    return Err(ReferenceDataError::Invalid(format!(
                        "ROI catalog entry {}/'{}' has non-finite or negative figures",
                        category.key(),
                        title
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn get(&self, category: ActionCategory, title: &str) -> Option<&CatalogItem> {
        let items = self.domains.get(&category)?;
        items.get(title).or_else(|| {
            let needle = title.trim();
            items
                .iter()
                .find(|(known, _)| known.eq_ignore_ascii_case(needle))
                .map(|(_, item)| item)
        })
    }

    /// Finds a title in any domain; energy is searched before waste.
    pub fn find(&self, title: &str) -> Option<(ActionCategory, &CatalogItem)> {
        ActionCategory::ordered()
            .into_iter()
            .find_map(|category| self.get(category, title).map(|item| (category, item)))
    }

    pub fn contains(&self, category: ActionCategory, title: &str) -> bool {
        self.get(category, title).is_some()
    }

    pub fn len(&self) -> usize {
        self.domains.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
