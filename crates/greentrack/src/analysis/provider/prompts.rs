use crate::analysis::domain::Resource;
use crate::analysis::footprint::FootprintResult;
use crate::analysis::intake::UsageSubmission;
use crate::analysis::scenario::{reduction_percent, ScenarioInsightRequest};
use std::fmt::Write;

const ANALYSIS_SHAPE: &str = r#"{
  "energy": [
    {"title": "...", "description": "...", "savings": "monthly savings in rupees", "impact": "kg CO2 reduced per month"}
  ],
  "waste": [
    {"title": "...", "description": "...", "savings": "monthly savings in rupees", "impact": "kg CO2 reduced per month"}
  ],
  "costSavings": {"monthly": "...", "yearly": "...", "breakdown": "..."},
  "reductionPotential": <number between 10 and 50>,
  "benchmark": {"averageCO2": <kg per month for similar businesses>, "context": "...", "employeeRange": "..."},
  "roi": [
    {"title": "matching a recommendation title", "upfrontCost": <rupees>, "monthlySavings": <rupees>, "category": "energy|waste"}
  ],
  "incentives": [
    {"title": "...", "description": "...", "eligibility": "...", "value": "...", "category": "solar|energy|waste|tax|other", "applicationUrl": "https://..."}
  ]
}"#;

/// Prompt asking the provider for the structured report sections.
pub fn analysis_prompt(submission: &UsageSubmission, footprint: &FootprintResult) -> String {
    let usage = submission.to_record();
    let business = usage.category.label();
    let mut prompt = String::new();

    let _ = writeln!(
        prompt,
        "You advise small businesses on sustainability. Reply with a single JSON object and nothing else."
    );
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "Business type: {business}");
    let _ = writeln!(prompt, "Employees: {}", usage.employees);
    if let Some(revenue) = usage.yearly_revenue {
        let _ = writeln!(prompt, "Yearly revenue: {revenue:.0}");
    }
    for resource in Resource::ordered() {
        let _ = writeln!(
            prompt,
            "Monthly {}: {} {}",
            resource.label().to_ascii_lowercase(),
            usage.quantity(resource),
            resource.unit()
        );
    }
    let _ = writeln!(prompt, "Monthly footprint: {:.1} kg CO2", footprint.total_co2);
    let _ = writeln!(
        prompt,
        "Footprint score: {}/100 ({})",
        footprint.footprint_score.value(),
        footprint.score_label
    );
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "Use exactly this shape:");
    let _ = writeln!(prompt, "{ANALYSIS_SHAPE}");
    let _ = writeln!(prompt);
    let _ = write!(
        prompt,
        "Tailor every item to {business} businesses in India, keep them practical, and suggest a reductionPotential near {}.",
        footprint.reduction_potential()
    );

    prompt
}

/// Prompt for the short scenario explanation.
pub fn scenario_prompt(request: &ScenarioInsightRequest) -> String {
    let percent = reduction_percent(request.original_footprint, request.new_footprint);
    let business = if request.business_type.trim().is_empty() {
        "small business"
    } else {
        request.business_type.trim()
    };
    let mut prompt = String::new();

    let _ = writeln!(
        prompt,
        "You advise small businesses on sustainability. In two or three sentences, explain what this carbon reduction scenario means."
    );
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "Business type: {business}");
    let _ = writeln!(prompt, "Current monthly CO2: {:.1} kg", request.original_footprint);
    let _ = writeln!(prompt, "Projected monthly CO2: {:.1} kg", request.new_footprint);
    let _ = writeln!(prompt, "Reduction: {percent:.1}%");
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "Planned cuts:");
    for resource in Resource::ordered() {
        let _ = writeln!(
            prompt,
            "- {}: {}%",
            resource.label(),
            request.scenario.knob(resource)
        );
    }
    let _ = writeln!(prompt);
    let _ = write!(
        prompt,
        "Be encouraging, mention the likely benefits and a next step, and stay under 100 words."
    );

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::domain::EmissionFactors;
    use crate::analysis::footprint::assess_footprint;
    use crate::analysis::scenario::ScenarioInput;

    #[test]
    fn analysis_prompt_describes_the_business() {
        let submission = UsageSubmission {
            business_type: "Restaurant".to_string(),
            employees: Some("8".to_string()),
            electricity_usage: Some("1,500".to_string()),
            ..UsageSubmission::default()
        };
        let footprint = assess_footprint(&submission.to_record(), &EmissionFactors::STANDARD);

        let prompt = analysis_prompt(&submission, &footprint);
        assert!(prompt.contains("Business type: Restaurant"));
        assert!(prompt.contains("Monthly electricity: 1500 kWh"));
        assert!(prompt.contains("Monthly footprint: 1230.0 kg CO2"));
        assert!(prompt.contains("\"roi\""));
        assert!(prompt.contains("\"incentives\""));
    }

    #[test]
    fn scenario_prompt_reports_reduction() {
        let request = ScenarioInsightRequest {
            scenario: ScenarioInput {
                electricity: 20.0,
                ..ScenarioInput::default()
            },
            original_footprint: 1000.0,
            new_footprint: 836.0,
            business_type: "Office".to_string(),
        };

        let prompt = scenario_prompt(&request);
        assert!(prompt.contains("Current monthly CO2: 1000.0 kg"));
        assert!(prompt.contains("Projected monthly CO2: 836.0 kg"));
        assert!(prompt.contains("Reduction: 16.4%"));
        assert!(prompt.contains("- Electricity: 20%"));
        assert!(prompt.contains("- Water: 0%"));
    }

    #[test]
    fn zero_original_footprint_does_not_divide_by_zero() {
        let request = ScenarioInsightRequest {
            scenario: ScenarioInput::default(),
            original_footprint: 0.0,
            new_footprint: 0.0,
            business_type: String::new(),
        };
        let prompt = scenario_prompt(&request);
        assert!(prompt.contains("Reduction: 0.0%"));
        assert!(prompt.contains("Business type: small business"));
    }
}
