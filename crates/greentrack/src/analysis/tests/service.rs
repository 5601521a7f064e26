use super::common::*;

use crate::analysis::badge::Badge;
use crate::analysis::domain::Provenance;
use crate::analysis::report::{build_report, AnalysisError};
use crate::analysis::scenario::{ScenarioInput, ScenarioInsightRequest, SimulationRequest};
use crate::analysis::service::{FALLBACK_INSIGHT, UNCONFIGURED_INSIGHT};

fn insight_request() -> ScenarioInsightRequest {
    ScenarioInsightRequest {
        scenario: ScenarioInput {
            electricity: 20.0,
            water: 10.0,
            waste: 15.0,
            fuel: 0.0,
        },
        original_footprint: 1842.5,
        new_footprint: 1538.9,
        business_type: "Restaurant".to_string(),
    }
}

#[tokio::test]
async fn static_service_reports_without_provider() {
    let service = static_service();
    let report = service.analyze(&restaurant()).await.expect("report");

    assert!((report.footprint.total_co2 - 1842.5).abs() < 1e-9);
    assert_eq!(report.badge, Badge::Silver);
    assert_eq!(report.sources.recommendations, Provenance::Static);
    assert_eq!(report.sources.incentives, Provenance::Static);
    assert!(!service.provider_enabled());
}

#[tokio::test]
async fn provider_reply_is_reconciled_per_subsection() {
    let (service, provider) = scripted_service(Script::Reply(ANALYSIS_REPLY.to_string()));
    let report = service.analyze(&restaurant()).await.expect("report");

    assert_eq!(report.sources.recommendations, Provenance::AiGenerated);
    assert_eq!(report.sources.benchmark, Provenance::AiGenerated);
    assert_eq!(report.sources.roi, Provenance::Static);
    assert_eq!(report.sources.incentives, Provenance::Static);

    assert_eq!(report.recommendations.reduction_potential, 35);
    assert_eq!(report.badge, Badge::Gold);
    assert_eq!(report.benchmark.difference, -8);

    let titles: Vec<&str> = report.roi.iter().map(|entry| entry.title.as_str()).collect();
    assert_eq!(titles, vec!["Switch to LED Lighting", "Start On-Site Composting"]);

    let prompts = provider.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("Business type: Restaurant"));
}

#[tokio::test]
async fn prompt_and_report_share_one_footprint() {
    let (service, provider) = scripted_service(Script::Reply(ANALYSIS_REPLY.to_string()));
    let submission = restaurant();
    let report = service.analyze(&submission).await.expect("report");

    let offline = build_report(&submission, Some(ANALYSIS_REPLY), &reference()).expect("report");
    assert_eq!(report.footprint, offline.footprint);
    assert_eq!(report.recommendations, offline.recommendations);
    assert_eq!(report.roi, offline.roi);

    let prompts = provider.prompts();
    assert_eq!(prompts.len(), 1);
    let expected = format!("Monthly footprint: {:.1} kg CO2", report.footprint.total_co2);
    assert!(prompts[0].contains(&expected));
}

#[tokio::test]
async fn provider_failure_degrades_to_static() {
    let (service, provider) = scripted_service(Script::Fail);
    let report = service.analyze(&restaurant()).await.expect("report");

    assert_eq!(report.sources.recommendations, Provenance::Static);
    assert_eq!(report.sources.benchmark, Provenance::Static);
    assert_eq!(report.badge, Badge::Silver);
    assert_eq!(provider.prompts().len(), 1, "single attempt, no retry");
}

#[tokio::test]
async fn slow_provider_times_out_to_static() {
    let (service, _) = scripted_service(Script::Hang);
    let report = service.analyze(&restaurant()).await.expect("report");
    assert_eq!(report.sources.recommendations, Provenance::Static);
}

#[tokio::test]
async fn overflowing_usage_skips_the_provider() {
    let (service, provider) = scripted_service(Script::Reply(ANALYSIS_REPLY.to_string()));
    let mut submission = restaurant();
    submission.fuel_used = Some("1e308".to_string());

    let err = service.analyze(&submission).await.expect_err("rejected");
    assert_eq!(err, AnalysisError::NonFiniteTotal);
    assert!(provider.prompts().is_empty());
}

#[tokio::test]
async fn scenario_insight_uses_canned_texts() {
    let insight = static_service().scenario_insight(&insight_request()).await;
    assert_eq!(insight, UNCONFIGURED_INSIGHT);

    let (failing, _) = scripted_service(Script::Fail);
    assert_eq!(failing.scenario_insight(&insight_request()).await, FALLBACK_INSIGHT);

    let (blank, _) = scripted_service(Script::Reply("   ".to_string()));
    assert_eq!(blank.scenario_insight(&insight_request()).await, FALLBACK_INSIGHT);
}

#[tokio::test]
async fn scenario_insight_returns_provider_text() {
    let (service, provider) =
        scripted_service(Script::Reply("  Cutting power use pays off quickly.\n".to_string()));
    let insight = service.scenario_insight(&insight_request()).await;

    assert_eq!(insight, "Cutting power use pays off quickly.");
    assert!(provider.prompts()[0].contains("Reduction: 16.5%"));
}

#[tokio::test]
async fn simulation_annotation_is_optional() {
    let request = SimulationRequest {
        business_data: restaurant(),
        scenario: ScenarioInput {
            electricity: 50.0,
            ..ScenarioInput::default()
        },
    };

    let report = static_service().simulate(&request).await.expect("projection");
    assert!(report.insights.is_none());
    assert!((report.original_footprint.total_co2 - 1842.5).abs() < 1e-9);
    assert!((report.new_footprint.total_co2 - 1227.5).abs() < 1e-9);

    let (failing, _) = scripted_service(Script::Fail);
    let report = failing.simulate(&request).await.expect("projection");
    assert!(report.insights.is_none());

    let (answering, _) = scripted_service(Script::Reply("Halving electricity is a strong start.".to_string()));
    let report = answering.simulate(&request).await.expect("projection");
    assert_eq!(
        report.insights.as_deref(),
        Some("Halving electricity is a strong start.")
    );
}
