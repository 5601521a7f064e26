use crate::infra::build_service;
use clap::{ArgGroup, Args};
use greentrack::analysis::intake::{submission_from_json_path, submissions_from_csv_path};
use greentrack::analysis::report::views::{Direction, RecommendationSet};
use greentrack::analysis::scenario::SimulationRequest;
use greentrack::analysis::{
    Resource, ScenarioInput, ScenarioReport, SustainabilityReport, SustainabilityService,
    UsageSubmission,
};
use greentrack::config::AppConfig;
use greentrack::error::AppError;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("source").required(true).args(["input", "csv"])))]
pub(crate) struct AnalyzeArgs {
    /// JSON file holding one usage submission
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// CSV export with one usage submission per row
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
    /// Print the report payload as JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct SimulateArgs {
    /// JSON file holding the baseline usage submission
    #[arg(long)]
    pub(crate) input: PathBuf,
    #[command(flatten)]
    pub(crate) knobs: KnobArgs,
    /// Print the projection as JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default, Clone, Copy)]
pub(crate) struct KnobArgs {
    /// Electricity reduction in percent (capped at 50)
    #[arg(long, default_value_t = 0.0)]
    pub(crate) electricity: f64,
    /// Water reduction in percent (capped at 40)
    #[arg(long, default_value_t = 0.0)]
    pub(crate) water: f64,
    /// Waste reduction in percent (capped at 50)
    #[arg(long, default_value_t = 0.0)]
    pub(crate) waste: f64,
    /// Fuel reduction in percent (capped at 40)
    #[arg(long, default_value_t = 0.0)]
    pub(crate) fuel: f64,
}

impl From<KnobArgs> for ScenarioInput {
    fn from(knobs: KnobArgs) -> Self {
        Self {
            electricity: knobs.electricity,
            water: knobs.water,
            waste: knobs.waste,
            fuel: knobs.fuel,
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Business type for the sample submission
    #[arg(long, default_value = "Restaurant")]
    pub(crate) business_type: String,
    /// Skip the scenario portion of the demo.
    #[arg(long)]
    pub(crate) skip_scenario: bool,
}

fn service_from_env() -> Result<Arc<SustainabilityService>, AppError> {
    let config = AppConfig::load()?;
    build_service(&config)
}

pub(crate) async fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let AnalyzeArgs { input, csv, json } = args;

    let submissions = match (input, csv) {
        (Some(path), _) => vec![submission_from_json_path(path)?],
        (None, Some(path)) => submissions_from_csv_path(path)?,
        (None, None) => {
            return Err(AppError::InvalidRequest(
                "either --input or --csv is required".to_string(),
            ))
        }
    };

    let service = service_from_env()?;
    for (index, submission) in submissions.iter().enumerate() {
        if index > 0 {
            println!();
        }
        let report = service.analyze(submission).await?;
        if json {
            print_json(&report);
        } else {
            render_report(&report);
        }
    }

    Ok(())
}

pub(crate) async fn run_simulate(args: SimulateArgs) -> Result<(), AppError> {
    let SimulateArgs { input, knobs, json } = args;

    let request = SimulationRequest {
        business_data: submission_from_json_path(input)?,
        scenario: knobs.into(),
    };
    let service = service_from_env()?;
    let projection = service.simulate(&request).await?;

    if json {
        print_json(&projection);
    } else {
        render_scenario(&projection);
    }
    Ok(())
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        business_type,
        skip_scenario,
    } = args;

    println!("Sustainability report demo");
    let service = service_from_env()?;
    let submission = demo_submission(business_type);
    let report = service.analyze(&submission).await?;
    render_report(&report);

    if skip_scenario {
        return Ok(());
    }

    println!();
    let request = SimulationRequest {
        business_data: submission,
        scenario: ScenarioInput {
            electricity: 20.0,
            water: 10.0,
            waste: 30.0,
            fuel: 15.0,
        },
    };
    let projection = service.simulate(&request).await?;
    render_scenario(&projection);

    Ok(())
}

fn demo_submission(business_type: String) -> UsageSubmission {
    UsageSubmission {
        business_type,
        employees: Some("10".to_string()),
        yearly_revenue: Some("2400000".to_string()),
        electricity_usage: Some("1500".to_string()),
        water_usage: Some("5000".to_string()),
        waste_generated: Some("200".to_string()),
        fuel_used: Some("100".to_string()),
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(err) => println!("Payload unavailable: {}", err),
    }
}

pub(crate) fn render_report(report: &SustainabilityReport) {
    let business = if report.business_data.business_type.trim().is_empty() {
        "Unspecified business"
    } else {
        report.business_data.business_type.trim()
    };
    println!(
        "{} ({} employees), generated {}",
        business,
        report.business_data.employees.as_deref().unwrap_or("1"),
        report.generated_at.format("%Y-%m-%d %H:%M UTC")
    );

    let footprint = &report.footprint;
    println!(
        "Monthly footprint: {:.1} kg CO2 | score {} ({})",
        footprint.total_co2,
        footprint.footprint_score.value(),
        footprint.score_label
    );
    for resource in Resource::ordered() {
        println!(
            "  - {}: {:.1} kg",
            resource.label(),
            footprint.breakdown.get(resource)
        );
    }
    println!(
        "Badge: {} (reduction potential {}%)",
        report.badge, report.recommendations.reduction_potential
    );

    render_recommendations(&report.recommendations, report.sources.recommendations.label());

    let benchmark = &report.benchmark;
    let direction = match benchmark.comparison {
        Direction::Above => "above",
        Direction::Below => "below",
    };
    println!(
        "\nBenchmark [{}]: {:.1} kg vs {:.1} kg peer average ({}% {})",
        benchmark.source.label(),
        benchmark.your_co2,
        benchmark.average_co2,
        benchmark.percentage,
        direction
    );
    if let Some(context) = &benchmark.context {
        println!("  {}", context);
    }

    println!("\nROI ranking [{}]:", report.sources.roi.label());
    if report.roi.is_empty() {
        println!("  No costed actions");
    }
    for (rank, entry) in report.roi.iter().enumerate() {
        println!(
            "  {}. {} | upfront {} | {} per month | payback {:.1} months",
            rank + 1,
            entry.title,
            entry.upfront_cost,
            entry.monthly_savings,
            entry.payback_months
        );
    }

    println!("\nIncentives [{}]:", report.sources.incentives.label());
    for incentive in &report.incentives {
        println!("  - {} ({})", incentive.title, incentive.value);
        println!("    Eligibility: {}", incentive.eligibility);
        if let Some(url) = &incentive.application_url {
            println!("    Apply: {}", url);
        }
    }
}

fn render_recommendations(recommendations: &RecommendationSet, source: &str) {
    println!("\nRecommendations [{}]:", source);
    for (heading, items) in [
        ("Energy", &recommendations.energy),
        ("Waste", &recommendations.waste),
    ] {
        println!("  {}:", heading);
        for item in items {
            println!("    - {}: {} ({})", item.title, item.savings, item.impact);
        }
    }
    println!(
        "  Estimated savings: {} per month, {} per year",
        recommendations.cost_savings.monthly, recommendations.cost_savings.yearly
    );
}

pub(crate) fn render_scenario(projection: &ScenarioReport) {
    println!("Scenario projection");
    for resource in Resource::ordered() {
        println!(
            "  - {} cut by {}%",
            resource.label(),
            projection.scenario.knob(resource)
        );
    }
    println!(
        "Footprint: {:.1} kg -> {:.1} kg ({:.1} kg, {:.1}% lower)",
        projection.original_footprint.total_co2,
        projection.new_footprint.total_co2,
        projection.reduction,
        projection.reduction_percent
    );
    println!(
        "Score: {} -> {} | projected badge {}",
        projection.original_footprint.footprint_score.value(),
        projection.new_footprint.footprint_score.value(),
        projection.badge
    );
    if let Some(insights) = &projection.insights {
        println!("Insight: {}", insights);
    }
}
