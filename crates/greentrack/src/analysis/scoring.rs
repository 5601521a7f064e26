use serde::{Serialize, Serializer};

/// Per-employee monthly kg CO2 that maps to a raw score of 100.
const SCORE_REFERENCE_KG_PER_EMPLOYEE: f64 = 50.0;

pub const MIN_REDUCTION_POTENTIAL: i64 = 10;
pub const MAX_REDUCTION_POTENTIAL: i64 = 50;

/// Bucketed footprint severity. Only four values exist; consumers rely on the
/// bucket, never on the raw percentage behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FootprintScore {
    Low,
    Moderate,
    Elevated,
    High,
}

impl FootprintScore {
    pub const fn ordered() -> [Self; 4] {
        [Self::Low, Self::Moderate, Self::Elevated, Self::High]
    }

    pub const fn value(self) -> u8 {
        match self {
            Self::Low => 15,
            Self::Moderate => 30,
            Self::Elevated => 50,
            Self::High => 75,
        }
    }

    /// Wording shown next to the score on the report.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Excellent",
            Self::Moderate => "Good",
            Self::Elevated => "Moderate",
            Self::High => "Poor",
        }
    }

    fn from_raw(raw: f64) -> Self {
        if raw < 20.0 {
            Self::Low
        } else if raw < 40.0 {
            Self::Moderate
        } else if raw < 60.0 {
            Self::Elevated
        } else {
            Self::High
        }
    }
}

impl Serialize for FootprintScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.value())
    }
}

/// Continuous score before bucketing, capped at 100.
pub fn raw_score(total_kg: f64, employees: u32) -> f64 {
    let per_employee = total_kg / f64::from(employees.max(1));
    ((per_employee / SCORE_REFERENCE_KG_PER_EMPLOYEE) * 100.0).min(100.0)
}

pub fn score_footprint(total_kg: f64, employees: u32) -> FootprintScore {
    FootprintScore::from_raw(raw_score(total_kg, employees))
}

/// Headroom percentage derived from the score: `100 - score`, clamped to
/// `[10, 50]`.
pub fn reduction_potential(score: FootprintScore) -> i64 {
    clamp_reduction_potential(100 - i64::from(score.value()))
}

pub fn clamp_reduction_potential(value: i64) -> i64 {
    value.clamp(MIN_REDUCTION_POTENTIAL, MAX_REDUCTION_POTENTIAL)
}
