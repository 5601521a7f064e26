use super::super::report::views::{CostSavings, Recommendation};

const SAVINGS_BREAKDOWN: &str = "Combined savings from energy optimization and waste reduction";
const NOT_ESTIMATED: &str = "Not estimated";

/// Totals the per-recommendation savings strings (`"₹2,000-5,000/month"`)
/// into a monthly and yearly range.
pub(crate) fn summarize_savings<'a>(
    recommendations: impl IntoIterator<Item = &'a Recommendation>,
) -> CostSavings {
    let mut low = 0.0;
    let mut high = 0.0;
    let mut counted = 0usize;

    for recommendation in recommendations {
        if let Some((item_low, item_high)) = savings_range(&recommendation.savings) {
            low += item_low;
            high += item_high;
            counted += 1;
        }
    }

    if counted == 0 {
        return CostSavings {
            monthly: NOT_ESTIMATED.to_string(),
            yearly: NOT_ESTIMATED.to_string(),
            breakdown: SAVINGS_BREAKDOWN.to_string(),
        };
    }

    CostSavings {
        monthly: format_range(low, high),
        yearly: format_range(low * 12.0, high * 12.0),
        breakdown: SAVINGS_BREAKDOWN.to_string(),
    }
}

/// Reads up to two numbers out of a free-form savings string. One number is
/// treated as a point estimate.
fn savings_range(text: &str) -> Option<(f64, f64)> {
    let mut numbers = Vec::with_capacity(2);
    let mut current = String::new();

    for ch in text.chars().chain(std::iter::once(' ')) {
        if ch.is_ascii_digit() || (ch == '.' && !current.is_empty()) {
            current.push(ch);
        } else if ch == ',' && !current.is_empty() {
            continue;
        } else if !current.is_empty() {
            if let Ok(value) = current.trim_end_matches('.').parse::<f64>() {
                numbers.push(value);
            }
            current.clear();
            if numbers.len() == 2 {
                break;
            }
        }
    }

    match numbers.as_slice() {
        [single] => Some((*single, *single)),
        [low, high, ..] => Some((low.min(*high), low.max(*high))),
        _ => None,
    }
}

fn format_range(low: f64, high: f64) -> String {
    let low = low.round() as i64;
    let high = high.round() as i64;
    if low == high {
        format_rupees(low)
    } else {
        format!("{}-{}", format_rupees(low), group_thousands(high))
    }
}

pub(crate) fn format_rupees(amount: i64) -> String {
    format!("₹{}", group_thousands(amount))
}

fn group_thousands(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if amount < 0 {
        grouped.insert(0, '-');
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::domain::ActionCategory;

    fn recommendation(savings: &str) -> Recommendation {
        Recommendation {
            category: ActionCategory::Energy,
            title: "t".to_string(),
            description: "d".to_string(),
            savings: savings.to_string(),
            impact: "i".to_string(),
        }
    }

    #[test]
    fn totals_static_defaults() {
        let items = [
            recommendation("₹2,000-5,000/month"),
            recommendation("₹3,000-8,000/month"),
            recommendation("₹500-1,500/month"),
        ];

        let savings = summarize_savings(&items);
        assert_eq!(savings.monthly, "₹5,500-14,500");
        assert_eq!(savings.yearly, "₹66,000-174,000");
    }

    #[test]
    fn point_estimates_and_unparsable_strings() {
        let items = [
            recommendation("about ₹1,200 per month"),
            recommendation("significant"),
        ];
        let savings = summarize_savings(&items);
        assert_eq!(savings.monthly, "₹1,200");
        assert_eq!(savings.yearly, "₹14,400");

        let none = summarize_savings(&[recommendation("varies")]);
        assert_eq!(none.monthly, "Not estimated");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_rupees(0), "₹0");
        assert_eq!(format_rupees(999), "₹999");
        assert_eq!(format_rupees(1000), "₹1,000");
        assert_eq!(format_rupees(1234567), "₹1,234,567");
    }
}
