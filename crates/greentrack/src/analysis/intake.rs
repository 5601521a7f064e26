use super::domain::{BusinessCategory, UsageRecord};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::io::Read;
use std::path::Path;

/// Usage form as submitted by the intake collaborator.
///
/// Numbers travel as strings; JSON numbers are accepted too and normalised to
/// their textual form so the echoed `businessData` matches what was sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageSubmission {
    #[serde(default)]
    pub business_type: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub employees: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub yearly_revenue: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub electricity_usage: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub water_usage: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub waste_generated: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub fuel_used: Option<String>,
}

impl UsageSubmission {
    /// Coerces the submission into a [`UsageRecord`]. Never fails: missing or
    /// unparsable quantities become zero, negative quantities are clamped to
    /// zero and a missing headcount counts as a single employee.
    pub fn to_record(&self) -> UsageRecord {
        UsageRecord {
            category: BusinessCategory::from_label(&self.business_type),
            employees: parse_employees(self.employees.as_deref()),
            yearly_revenue: parse_number(self.yearly_revenue.as_deref())
                .filter(|revenue| *revenue >= 0.0),
            electricity_kwh: parse_quantity(self.electricity_usage.as_deref()),
            water_liters: parse_quantity(self.water_usage.as_deref()),
            waste_kg: parse_quantity(self.waste_generated.as_deref()),
            fuel_liters: parse_quantity(self.fuel_used.as_deref()),
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(text)) => Some(text),
        Some(serde_json::Value::Number(number)) => Some(number.to_string()),
        _ => None,
    })
}

/// Parses the finite number a field starts with, tolerating surrounding
/// whitespace, thousands separators ("1,500") and a trailing unit ("1500 kWh").
pub(crate) fn parse_number(raw: Option<&str>) -> Option<f64> {
    let cleaned: String = raw?
        .trim()
        .chars()
        .filter(|ch| *ch != ',' && *ch != '_')
        .collect();
    let prefix = numeric_prefix(&cleaned);
    if prefix.is_empty() {
        return None;
    }
    prefix.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Longest leading slice shaped like `[sign]digits[.digits][e[sign]digits]`.
fn numeric_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let digits_from = |from: usize| {
        bytes
            .get(from..)
            .map_or(0, |rest| rest.iter().take_while(|byte| byte.is_ascii_digit()).count())
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let whole = digits_from(end);
    end += whole;

    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = digits_from(end + 1);
        if whole > 0 || fraction > 0 {
            end += 1 + fraction;
        }
    }
    if whole == 0 && fraction == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let exponent_digits = digits_from(exponent);
        if exponent_digits > 0 {
            end = exponent + exponent_digits;
        }
    }
    &text[..end]
}

pub(crate) fn parse_quantity(raw: Option<&str>) -> f64 {
    parse_number(raw).map(|value| value.max(0.0)).unwrap_or(0.0)
}

fn parse_employees(raw: Option<&str>) -> u32 {
    match parse_number(raw) {
        Some(count) if count >= 1.0 => count.min(u32::MAX as f64).floor() as u32,
        _ => 1,
    }
}

#[derive(Debug)]
pub enum UsageImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Json(serde_json::Error),
}

impl fmt::Display for UsageImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageImportError::Io(err) => write!(f, "failed to read usage export: {err}"),
            UsageImportError::Csv(err) => write!(f, "invalid usage CSV data: {err}"),
            UsageImportError::Json(err) => write!(f, "invalid usage JSON document: {err}"),
        }
    }
}

impl std::error::Error for UsageImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UsageImportError::Io(err) => Some(err),
            UsageImportError::Csv(err) => Some(err),
            UsageImportError::Json(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for UsageImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for UsageImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<serde_json::Error> for UsageImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Reads usage submissions from a CSV export whose header row uses the same
/// field names as the JSON body (`businessType`, `employees`, ...).
pub fn submissions_from_csv<R: Read>(reader: R) -> Result<Vec<UsageSubmission>, UsageImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut submissions = Vec::new();
    for row in csv_reader.deserialize::<CsvUsageRow>() {
        submissions.push(row?.into());
    }
    Ok(submissions)
}

pub fn submissions_from_csv_path(
    path: impl AsRef<Path>,
) -> Result<Vec<UsageSubmission>, UsageImportError> {
    let file = std::fs::File::open(path)?;
    submissions_from_csv(file)
}

pub fn submission_from_json_path(
    path: impl AsRef<Path>,
) -> Result<UsageSubmission, UsageImportError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CsvUsageRow {
    #[serde(default)]
    business_type: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    employees: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    yearly_revenue: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    electricity_usage: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    water_usage: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    waste_generated: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    fuel_used: Option<String>,
}

impl From<CsvUsageRow> for UsageSubmission {
    fn from(row: CsvUsageRow) -> Self {
        Self {
            business_type: row.business_type,
            employees: row.employees,
            yearly_revenue: row.yearly_revenue,
            electricity_usage: row.electricity_usage,
            water_usage: row.water_usage,
            waste_generated: row.waste_generated,
            fuel_used: row.fuel_used,
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|text| !text.trim().is_empty()))
}
