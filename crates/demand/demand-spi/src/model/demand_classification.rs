//! Demand tier and pricing action

use std::fmt;

use serde::{Deserialize, Serialize};

/// Demand level derived from average daily bookings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemandTier {
    Low,
    Stable,
    High,
}

impl fmt::Display for DemandTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DemandTier::Low => "Low",
            DemandTier::Stable => "Stable",
            DemandTier::High => "High",
        };
        write!(f, "{}", s)
    }
}

/// Pricing recommendation for a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandClassification {
    /// Demand tier
    pub tier: DemandTier,
    /// Factor applied to the base price
    pub price_multiplier: f64,
    /// `base_price * price_multiplier`
    pub optimal_price: f64,
    /// Human-readable action
    pub recommendation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_display() {
        assert_eq!(DemandTier::Low.to_string(), "Low");
        assert_eq!(DemandTier::High.to_string(), "High");
    }

    #[test]
    fn test_tier_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&DemandTier::Stable).unwrap(), "\"stable\"");
    }
}
