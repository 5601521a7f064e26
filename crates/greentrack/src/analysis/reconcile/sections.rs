use super::super::benchmark::compare;
use super::super::domain::{ActionCategory, Provenance};
use super::super::reference::RoiCatalog;
use super::super::report::views::{
    BenchmarkResult, CostSavings, IncentiveCategory, IncentiveEntry, Recommendation,
    RecommendationSet,
};
use super::super::roi::RoiCandidate;
use super::ParseFailure;
use serde_json::{Map, Value};
use std::collections::HashSet;

type Object = Map<String, Value>;

/// Recommendations as authored by the provider. Either list may be empty.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AiRecommendations {
    pub energy: Vec<Recommendation>,
    pub waste: Vec<Recommendation>,
    pub cost_savings: Option<CostSavings>,
}

pub(crate) fn parse_recommendations(root: &Object) -> Result<AiRecommendations, ParseFailure> {
    // Some replies nest the lists one level down.
    let section = root
        .get("recommendations")
        .and_then(Value::as_object)
        .unwrap_or(root);

    let energy = section.get("energy");
    let waste = section.get("waste");
    if energy.is_none() && waste.is_none() {
        return Err(ParseFailure::MissingSection("recommendations"));
    }

    let energy = recommendation_list(energy, ActionCategory::Energy);
    let waste = recommendation_list(waste, ActionCategory::Waste);
    if energy.is_empty() && waste.is_empty() {
        return Err(ParseFailure::invalid(
            "recommendations",
            "no entry carries title, description, savings and impact",
        ));
    }

    let cost_savings = section
        .get("costSavings")
        .or_else(|| root.get("costSavings"))
        .and_then(Value::as_object)
        .and_then(|savings| {
            Some(CostSavings {
                monthly: text_field(savings, &["monthly"])?,
                yearly: text_field(savings, &["yearly"])?,
                breakdown: text_field(savings, &["breakdown"])?,
            })
        });

    Ok(AiRecommendations {
        energy,
        waste,
        cost_savings,
    })
}

fn recommendation_list(value: Option<&Value>, category: ActionCategory) -> Vec<Recommendation> {
    let mut seen = HashSet::new();
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_object)
                .filter_map(|item| {
                    Some(Recommendation {
                        category,
                        title: text_field(item, &["title"])?,
                        description: text_field(item, &["description"])?,
                        savings: text_field(item, &["savings"])?,
                        impact: text_field(item, &["impact"])?,
                    })
                })
                .filter(|recommendation| seen.insert(title_key(&recommendation.title)))
                .collect()
        })
        .unwrap_or_default()
}

/// Provider-suggested reduction potential, if it sent a number.
pub(crate) fn parse_reduction_potential(root: &Object) -> Option<f64> {
    root.get("recommendations")
        .and_then(Value::as_object)
        .and_then(|section| number_field(section, &["reductionPotential"]))
        .or_else(|| number_field(root, &["reductionPotential"]))
}

pub(crate) fn parse_benchmark(
    root: &Object,
    subject_total: f64,
) -> Result<BenchmarkResult, ParseFailure> {
    let section = root
        .get("benchmark")
        .ok_or(ParseFailure::MissingSection("benchmark"))?
        .as_object()
        .ok_or_else(|| ParseFailure::invalid("benchmark", "expected an object"))?;

    let average = number_field(section, &["averageCO2", "averageCo2", "average"])
        .ok_or_else(|| ParseFailure::invalid("benchmark", "averageCO2 missing or not numeric"))?;

    compare(
        subject_total,
        average,
        text_field(section, &["context", "comparison"]),
        text_field(section, &["employeeRange"]),
        Provenance::AiGenerated,
    )
    .ok_or_else(|| ParseFailure::invalid("benchmark", "averageCO2 must be a positive number"))
}

/// ROI entries with all of `title`, `upfrontCost` and `monthlySavings`.
/// Negative figures count as missing, and a repeated title keeps its first entry.
/// A missing or unknown `category` is inferred from the recommendation with
/// the same title, then from the catalog, then defaults to energy.
pub(crate) fn parse_roi(
    root: &Object,
    recommendations: &RecommendationSet,
    catalog: &RoiCatalog,
) -> Result<Vec<RoiCandidate>, ParseFailure> {
    let items = root
        .get("roi")
        .ok_or(ParseFailure::MissingSection("roi"))?
        .as_array()
        .ok_or_else(|| ParseFailure::invalid("roi", "expected an array"))?;

    let mut seen = HashSet::new();
    let candidates: Vec<RoiCandidate> = items
        .iter()
        .filter_map(Value::as_object)
        .filter_map(|item| {
            let title = text_field(item, &["title"])?;
            let upfront_cost = amount_field(item, &["upfrontCost"])?;
            let monthly_savings = amount_field(item, &["monthlySavings"])?;
            let category = text_field(item, &["category"])
                .and_then(|raw| ActionCategory::parse(&raw))
                .or_else(|| {
                    recommendations
                        .iter()
                        .find(|recommendation| title_key(&recommendation.title) == title_key(&title))
                        .map(|recommendation| recommendation.category)
                })
                .or_else(|| catalog.find(&title).map(|(category, _)| category))
                .unwrap_or(ActionCategory::Energy);

            Some(RoiCandidate {
                title,
                upfront_cost,
                monthly_savings,
                category,
            })
        })
        .filter(|candidate| seen.insert(title_key(&candidate.title)))
        .collect();

    if candidates.is_empty() {
        return Err(ParseFailure::invalid(
            "roi",
            "no entry carries title, upfrontCost and monthlySavings",
        ));
    }
    Ok(candidates)
}

pub(crate) fn parse_incentives(root: &Object) -> Result<Vec<IncentiveEntry>, ParseFailure> {
    let items = root
        .get("incentives")
        .ok_or(ParseFailure::MissingSection("incentives"))?
        .as_array()
        .ok_or_else(|| ParseFailure::invalid("incentives", "expected an array"))?;

    let incentives: Vec<IncentiveEntry> = items
        .iter()
        .filter_map(Value::as_object)
        .filter_map(|item| {
            Some(IncentiveEntry {
                title: text_field(item, &["title"])?,
                description: text_field(item, &["description"])?,
                eligibility: text_field(item, &["eligibility"])?,
                value: text_field(item, &["value"])?,
                category: text_field(item, &["category"])
                    .map(|raw| IncentiveCategory::parse(&raw))
                    .unwrap_or(IncentiveCategory::Other),
                application_url: text_field(item, &["applicationUrl", "url"])
                    .filter(|url| url.starts_with("https://") || url.starts_with("http://")),
            })
        })
        .collect();

    if incentives.is_empty() {
        return Err(ParseFailure::invalid(
            "incentives",
            "no entry carries title, description, eligibility and value",
        ));
    }
    Ok(incentives)
}

pub(crate) fn title_key(title: &str) -> String {
    title.trim().to_ascii_lowercase()
}

/// First non-blank string (or number rendered as text) under any of `keys`.
fn text_field(object: &Object, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match object.get(*key)? {
        Value::String(text) => Some(text.trim().to_string()).filter(|text| !text.is_empty()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    })
}

/// First finite number under any of `keys`. Numeric strings such as
/// `"₹15,000"` or `"Rs. 3,500/month"` are accepted; ranges such as
/// `"5,000-8,000"` are not.
fn number_field(object: &Object, keys: &[&str]) -> Option<f64> {
    keys.iter().find_map(|key| match object.get(*key)? {
        Value::Number(number) => number.as_f64().filter(|value| value.is_finite()),
        Value::String(text) => lenient_number(text),
        _ => None,
    })
}

/// Like [`number_field`], but only non-negative amounts.
fn amount_field(object: &Object, keys: &[&str]) -> Option<f64> {
    number_field(object, keys).filter(|value| *value >= 0.0)
}

/// The single number in `text`, after any currency prefix. Commas and dots
/// only count when a digit follows them. Text holding a second number yields
/// `None`.
fn lenient_number(text: &str) -> Option<f64> {
    let start = text.find(|ch: char| ch.is_ascii_digit())?;
    let mut number = String::new();
    if text[..start].ends_with('-') {
        number.push('-');
    }

    let tail = &text[start..];
    let mut end = tail.len();
    let mut seen_dot = false;
    let mut chars = tail.char_indices().peekable();
    while let Some((index, ch)) = chars.next() {
        let digit_follows = chars.peek().is_some_and(|(_, next)| next.is_ascii_digit());
        match ch {
            '0'..='9' => number.push(ch),
            ',' if digit_follows => {}
            '.' if digit_follows && !seen_dot => {
                seen_dot = true;
                number.push('.');
            }
            _ => {
                end = index;
                break;
            }
        }
    }

    if tail[end..].chars().any(|ch| ch.is_ascii_digit()) {
        return None;
    }
    number.parse::<f64>().ok().filter(|value| value.is_finite())
}
