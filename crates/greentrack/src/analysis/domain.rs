use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of business categories offered by the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BusinessCategory {
    #[serde(rename = "Restaurant")]
    Restaurant,
    #[serde(rename = "Retail Shop")]
    RetailShop,
    #[serde(rename = "Small Farm")]
    SmallFarm,
    #[serde(rename = "Small Factory")]
    SmallFactory,
    #[serde(rename = "Office")]
    Office,
    #[serde(rename = "Warehouse")]
    Warehouse,
    #[serde(rename = "Other")]
    Other,
}

impl BusinessCategory {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Restaurant,
            Self::RetailShop,
            Self::SmallFarm,
            Self::SmallFactory,
            Self::Office,
            Self::Warehouse,
            Self::Other,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Restaurant => "Restaurant",
            Self::RetailShop => "Retail Shop",
            Self::SmallFarm => "Small Farm",
            Self::SmallFactory => "Small Factory",
            Self::Office => "Office",
            Self::Warehouse => "Warehouse",
            Self::Other => "Other",
        }
    }

    /// Lenient lookup used at intake; anything outside the closed set is `Other`.
    pub fn from_label(raw: &str) -> Self {
        let needle = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(needle))
            .unwrap_or(Self::Other)
    }
}

impl fmt::Display for BusinessCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Employee-count band used to pick a peer benchmark row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeBucket {
    Small,
    Medium,
    Large,
}

impl SizeBucket {
    pub const fn for_employees(employees: u32) -> Self {
        match employees {
            0..=10 => Self::Small,
            11..=25 => Self::Medium,
            _ => Self::Large,
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

/// The four metered resources that contribute to a footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Electricity,
    Water,
    Waste,
    Fuel,
}

impl Resource {
    pub const fn ordered() -> [Self; 4] {
        [Self::Electricity, Self::Water, Self::Waste, Self::Fuel]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Electricity => "Electricity",
            Self::Water => "Water",
            Self::Waste => "Waste",
            Self::Fuel => "Fuel",
        }
    }

    pub const fn unit(self) -> &'static str {
        match self {
            Self::Electricity => "kWh",
            Self::Water | Self::Fuel => "liters",
            Self::Waste => "kg",
        }
    }
}

/// kg CO2-equivalent emitted per unit of each resource.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmissionFactors {
    pub electricity: f64,
    pub water: f64,
    pub waste: f64,
    pub fuel: f64,
}

impl EmissionFactors {
    /// Grid electricity, treated water, landfilled waste and diesel/petrol.
    pub const STANDARD: Self = Self {
        electricity: 0.82,
        water: 0.0003,
        waste: 1.9,
        fuel: 2.31,
    };

    pub const fn factor(&self, resource: Resource) -> f64 {
        match resource {
            Resource::Electricity => self.electricity,
            Resource::Water => self.water,
            Resource::Waste => self.waste,
            Resource::Fuel => self.fuel,
        }
    }
}

/// Monthly self-reported usage for one business, already coerced to clean numbers.
///
/// Quantities are never negative or non-finite; intake clamps them to zero.
#[derive(Debug, Clone, PartialEq)]
pub struct UsageRecord {
    pub category: BusinessCategory,
    pub employees: u32,
    pub yearly_revenue: Option<f64>,
    pub electricity_kwh: f64,
    pub water_liters: f64,
    pub waste_kg: f64,
    pub fuel_liters: f64,
}

impl UsageRecord {
    pub fn quantity(&self, resource: Resource) -> f64 {
        match resource {
            Resource::Electricity => self.electricity_kwh,
            Resource::Water => self.water_liters,
            Resource::Waste => self.waste_kg,
            Resource::Fuel => self.fuel_liters,
        }
    }

    pub fn size_bucket(&self) -> SizeBucket {
        SizeBucket::for_employees(self.employees)
    }

    /// Returns a copy with each quantity passed through `adjust`. Used by the
    /// scenario simulator; the original record is left untouched.
    pub fn map_quantities(&self, mut adjust: impl FnMut(Resource, f64) -> f64) -> Self {
        Self {
            electricity_kwh: adjust(Resource::Electricity, self.electricity_kwh),
            water_liters: adjust(Resource::Water, self.water_liters),
            waste_kg: adjust(Resource::Waste, self.waste_kg),
            fuel_liters: adjust(Resource::Fuel, self.fuel_liters),
            ..self.clone()
        }
    }
}

/// Domain tag shared by recommendations and ROI entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionCategory {
    Energy,
    Waste,
}

impl ActionCategory {
    pub const fn ordered() -> [Self; 2] {
        [Self::Energy, Self::Waste]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Energy => "energy",
            Self::Waste => "waste",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "energy" => Some(Self::Energy),
            "waste" => Some(Self::Waste),
            _ => None,
        }
    }
}

/// Where a report subsection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provenance {
    #[serde(rename = "ai-generated")]
    AiGenerated,
    #[serde(rename = "static")]
    Static,
}

impl Provenance {
    pub const fn label(self) -> &'static str {
        match self {
            Self::AiGenerated => "ai-generated",
            Self::Static => "static",
        }
    }
}
