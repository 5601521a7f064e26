use super::domain::ActionCategory;
use super::reference::RoiCatalog;
use super::report::views::{RecommendationSet, RoiEntry};
use std::collections::HashSet;

/// An action with cost figures, before ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct RoiCandidate {
    pub title: String,
    pub upfront_cost: f64,
    pub monthly_savings: f64,
    pub category: ActionCategory,
}

/// Months to recoup `upfront_cost`, rounded to one decimal.
///
/// Non-positive savings yield `0.0`. That sorts such actions ahead of every
/// action that does pay back; callers that care should check
/// `monthly_savings` before presenting the figure.
pub fn payback_months(upfront_cost: f64, monthly_savings: f64) -> f64 {
    if monthly_savings > 0.0 {
        round_to_tenth(upfront_cost / monthly_savings)
    } else {
        0.0
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round_currency(value: f64) -> i64 {
    if value.is_finite() {
        value.round() as i64
    } else {
        0
    }
}

/// Ranks candidates fastest payback first. Equal paybacks keep their input
/// order.
pub fn rank_roi(candidates: impl IntoIterator<Item = RoiCandidate>) -> Vec<RoiEntry> {
    let mut entries: Vec<RoiEntry> = candidates
        .into_iter()
        .map(|candidate| {
            let upfront_cost = round_currency(candidate.upfront_cost);
            let monthly_savings = round_currency(candidate.monthly_savings);
            RoiEntry {
                title: candidate.title,
                upfront_cost,
                monthly_savings,
                payback_months: payback_months(upfront_cost as f64, monthly_savings as f64),
                category: candidate.category,
            }
        })
        .collect();

    // `sort_by` is stable, which the tie-break relies on.
    entries.sort_by(|a, b| a.payback_months.total_cmp(&b.payback_months));
    entries
}

/// Joins the selected recommendations against the catalog. Titles the catalog
/// does not know are skipped; a title appearing twice is used once.
pub fn catalog_candidates(
    recommendations: &RecommendationSet,
    catalog: &RoiCatalog,
) -> Vec<RoiCandidate> {
    let mut seen = HashSet::new();
    recommendations
        .iter()
        .filter_map(|recommendation| {
            let (category, item) = catalog
                .get(recommendation.category, &recommendation.title)
                .map(|item| (recommendation.category, item))
                .or_else(|| catalog.find(&recommendation.title))?;

            if !seen.insert(recommendation.title.trim().to_ascii_lowercase()) {
                return None;
            }

            Some(RoiCandidate {
                title: recommendation.title.clone(),
                upfront_cost: item.upfront_cost,
                monthly_savings: item.monthly_savings,
                category,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::reference::ReferenceData;
    use crate::analysis::report::views::{CostSavings, Recommendation};

    fn candidate(title: &str, cost: f64, savings: f64) -> RoiCandidate {
        RoiCandidate {
            title: title.to_string(),
            upfront_cost: cost,
            monthly_savings: savings,
            category: ActionCategory::Energy,
        }
    }

    fn recommendation(category: ActionCategory, title: &str) -> Recommendation {
        Recommendation {
            category,
            title: title.to_string(),
            description: String::new(),
            savings: String::new(),
            impact: String::new(),
        }
    }

    #[test]
    fn keeps_already_ascending_order() {
        let ranked = rank_roi(vec![
            candidate("lighting", 1000.0, 200.0),
            candidate("solar", 3000.0, 100.0),
        ]);

        let paybacks: Vec<f64> = ranked.iter().map(|entry| entry.payback_months).collect();
        assert_eq!(paybacks, vec![5.0, 30.0]);
        assert_eq!(ranked[0].title, "lighting");
    }

    #[test]
    fn sorts_fastest_first_and_keeps_ties_stable() {
        let ranked = rank_roi(vec![
            candidate("slow", 9000.0, 100.0),
            candidate("tie-a", 1000.0, 100.0),
            candidate("fast", 100.0, 100.0),
            candidate("tie-b", 2000.0, 200.0),
        ]);

        let titles: Vec<&str> = ranked.iter().map(|entry| entry.title.as_str()).collect();
        assert_eq!(titles, vec!["fast", "tie-a", "tie-b", "slow"]);
        for pair in ranked.windows(2) {
            assert!(pair[0].payback_months <= pair[1].payback_months);
        }
    }

    #[test]
    fn rounds_figures_and_payback() {
        let ranked = rank_roi(vec![candidate("hvac", 40000.4, 5499.6)]);
        assert_eq!(ranked[0].upfront_cost, 40000);
        assert_eq!(ranked[0].monthly_savings, 5500);
        assert_eq!(ranked[0].payback_months, 7.3);
    }

    #[test]
    fn non_positive_savings_report_zero_payback() {
        assert_eq!(payback_months(5000.0, 0.0), 0.0);
        assert_eq!(payback_months(5000.0, -10.0), 0.0);

        let ranked = rank_roi(vec![
            candidate("pays", 1000.0, 100.0),
            candidate("never", 1000.0, 0.0),
        ]);
        assert_eq!(ranked[0].title, "never");
    }

    #[test]
    fn catalog_join_drops_unknown_titles() {
        let data = ReferenceData::embedded().expect("reference data");
        let set = RecommendationSet {
            energy: vec![
                recommendation(ActionCategory::Energy, "Switch to LED Lighting"),
                recommendation(ActionCategory::Energy, "Paint the Roof White"),
            ],
            waste: vec![
                recommendation(ActionCategory::Waste, "Implement Waste Segregation"),
                recommendation(ActionCategory::Waste, "implement waste segregation"),
            ],
            cost_savings: CostSavings {
                monthly: String::new(),
                yearly: String::new(),
                breakdown: String::new(),
            },
            reduction_potential: 25,
        };

        let candidates = catalog_candidates(&set, &data.roi_catalog);
        let titles: Vec<&str> = candidates.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Switch to LED Lighting", "Implement Waste Segregation"]
        );
        assert_eq!(candidates[1].category, ActionCategory::Waste);
    }
}
