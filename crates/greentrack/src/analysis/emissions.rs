use super::domain::{EmissionFactors, Resource, UsageRecord};
use serde::{Deserialize, Serialize};

/// Per-resource kg CO2 for one month.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EmissionBreakdown {
    pub electricity: f64,
    pub water: f64,
    pub waste: f64,
    pub fuel: f64,
}

impl EmissionBreakdown {
    pub fn get(&self, resource: Resource) -> f64 {
        match resource {
            Resource::Electricity => self.electricity,
            Resource::Water => self.water,
            Resource::Waste => self.waste,
            Resource::Fuel => self.fuel,
        }
    }

    pub fn total(&self) -> f64 {
        self.electricity + self.water + self.waste + self.fuel
    }

    /// Largest contributor, if anything was emitted at all.
    pub fn dominant(&self) -> Option<Resource> {
        Resource::ordered()
            .into_iter()
            .filter(|resource| self.get(*resource) > 0.0)
            .max_by(|a, b| self.get(*a).total_cmp(&self.get(*b)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Emissions {
    pub total: f64,
    pub breakdown: EmissionBreakdown,
}

/// Multiplies each reported quantity by its emission factor.
///
/// Quantities on a [`UsageRecord`] are already clamped to be finite and
/// non-negative, so the breakdown entries are too. The total is the sum of the
/// breakdown entries, in resource order.
pub fn compute_emissions(usage: &UsageRecord, factors: &EmissionFactors) -> Emissions {
    let emitted = |resource: Resource| usage.quantity(resource).max(0.0) * factors.factor(resource);

    let breakdown = EmissionBreakdown {
        electricity: emitted(Resource::Electricity),
        water: emitted(Resource::Water),
        waste: emitted(Resource::Waste),
        fuel: emitted(Resource::Fuel),
    };

    Emissions {
        total: breakdown.total(),
        breakdown,
    }
}
