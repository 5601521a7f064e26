use serde::{Deserialize, Serialize};
use std::fmt;

/// Sustainability tier, ordered `Bronze < Silver < Gold < Platinum`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Badge {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl Badge {
    pub const fn ordered() -> [Self; 4] {
        [Self::Bronze, Self::Silver, Self::Gold, Self::Platinum]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Bronze => "Bronze",
            Self::Silver => "Silver",
            Self::Gold => "Gold",
            Self::Platinum => "Platinum",
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Maps a reduction percentage onto a tier. First matching threshold wins.
pub fn classify(reduction_percent: f64) -> Badge {
    if reduction_percent >= 50.0 {
        Badge::Platinum
    } else if reduction_percent >= 30.0 {
        Badge::Gold
    } else if reduction_percent >= 20.0 {
        Badge::Silver
    } else {
        Badge::Bronze
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::scoring::clamp_reduction_potential;

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(classify(50.0), Badge::Platinum);
        assert_eq!(classify(49.9), Badge::Gold);
        assert_eq!(classify(30.0), Badge::Gold);
        assert_eq!(classify(29.9), Badge::Silver);
        assert_eq!(classify(20.0), Badge::Silver);
        assert_eq!(classify(19.9), Badge::Bronze);
        assert_eq!(classify(-5.0), Badge::Bronze);
        assert_eq!(classify(f64::NAN), Badge::Bronze);
    }

    #[test]
    fn classification_is_monotonic() {
        let mut previous = Badge::Bronze;
        for step in 0..=1200 {
            let badge = classify(step as f64 / 10.0);
            assert!(badge >= previous, "tier dropped at {}", step as f64 / 10.0);
            previous = badge;
        }
    }

    #[test]
    fn clamped_potentials_classify_as_documented() {
        assert_eq!(classify(clamp_reduction_potential(55) as f64), Badge::Platinum);
        assert_eq!(classify(clamp_reduction_potential(8) as f64), Badge::Bronze);
        assert_eq!(classify(clamp_reduction_potential(25) as f64), Badge::Silver);
    }
}
