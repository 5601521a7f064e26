use super::super::badge::classify;
use super::super::domain::UsageRecord;
use super::super::footprint::{assess_footprint, FootprintResult};
use super::super::intake::UsageSubmission;
use super::super::reconcile::{reconcile, Reconciled};
use super::super::reference::ReferenceData;
use super::views::SustainabilityReport;
use super::AnalysisError;
use chrono::Utc;

/// Runs the full pipeline for one submission: footprint, reconciliation of the
/// provider reply (if any) and badge.
pub fn build_report(
    submission: &UsageSubmission,
    reply: Option<&str>,
    reference: &ReferenceData,
) -> Result<SustainabilityReport, AnalysisError> {
    let usage = submission.to_record();
    let footprint = checked_footprint(&usage, reference)?;
    assemble_report(submission, &usage, footprint, reply, reference)
}

/// Footprint of `usage`, or an error when the total overflowed.
pub fn checked_footprint(
    usage: &UsageRecord,
    reference: &ReferenceData,
) -> Result<FootprintResult, AnalysisError> {
    let footprint = assess_footprint(usage, &reference.factors);
    if !footprint.total_co2.is_finite() {
        return Err(AnalysisError::NonFiniteTotal);
    }
    Ok(footprint)
}

/// Reconciles `reply` against an already computed footprint.
pub fn assemble_report(
    submission: &UsageSubmission,
    usage: &UsageRecord,
    footprint: FootprintResult,
    reply: Option<&str>,
    reference: &ReferenceData,
) -> Result<SustainabilityReport, AnalysisError> {
    let reconciled = reconcile(reply, usage, &footprint, reference)?;
    Ok(report_from_parts(submission.clone(), footprint, reconciled))
}

pub fn report_from_parts(
    business_data: UsageSubmission,
    footprint: FootprintResult,
    reconciled: Reconciled,
) -> SustainabilityReport {
    let Reconciled {
        recommendations,
        benchmark,
        roi,
        incentives,
        sources,
    } = reconciled;

    SustainabilityReport {
        badge: classify(recommendations.reduction_potential as f64),
        footprint,
        recommendations,
        business_data,
        benchmark,
        roi,
        incentives,
        sources,
        generated_at: Utc::now(),
    }
}
