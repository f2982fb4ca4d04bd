//! Threshold-based demand classification
//!
//! | Average daily bookings | Tier   | Multiplier |
//! |------------------------|--------|------------|
//! | `< 3`                  | Low    | 0.9        |
//! | `3 ..< 5`              | Stable | 1.0        |
//! | `>= 5`                 | High   | 1.1        |

use demand_spi::{DemandClassification, DemandError, DemandTier, Result};

/// Averages below this are low demand.
pub const LOW_DEMAND_THRESHOLD: f64 = 3.0;
/// Averages at or above this are high demand.
pub const HIGH_DEMAND_THRESHOLD: f64 = 5.0;

pub const LOW_DEMAND_MULTIPLIER: f64 = 0.9;
pub const STABLE_DEMAND_MULTIPLIER: f64 = 1.0;
pub const HIGH_DEMAND_MULTIPLIER: f64 = 1.1;

/// Maps average daily bookings to a pricing action.
///
/// # Example
///
/// ```rust
/// use demand_core::pricing::DemandClassifier;
/// use demand_core::DemandTier;
///
/// let classifier = DemandClassifier;
/// let avg = DemandClassifier::average_bookings(24, 4);
/// let result = classifier.classify(avg, 2000.0).unwrap();
/// assert_eq!(result.tier, DemandTier::High);
/// assert!((result.optimal_price - 2200.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DemandClassifier;

impl DemandClassifier {
    /// `total_bookings / days`, treating zero days as one.
    pub fn average_bookings(total_bookings: u64, days: usize) -> f64 {
        total_bookings as f64 / days.max(1) as f64
    }

    /// Tier for an average.
    pub fn tier(avg_bookings: f64) -> DemandTier {
        if avg_bookings < LOW_DEMAND_THRESHOLD {
            DemandTier::Low
        } else if avg_bookings < HIGH_DEMAND_THRESHOLD {
            DemandTier::Stable
        } else {
            DemandTier::High
        }
    }

    /// Multiplier applied to the base price for a tier.
    pub fn price_multiplier(tier: DemandTier) -> f64 {
        match tier {
            DemandTier::Low => LOW_DEMAND_MULTIPLIER,
            DemandTier::Stable => STABLE_DEMAND_MULTIPLIER,
            DemandTier::High => HIGH_DEMAND_MULTIPLIER,
        }
    }

    /// Recommendation text for a tier.
    pub fn recommendation(tier: DemandTier) -> &'static str {
        match tier {
            DemandTier::Low => "Low demand. Consider reducing price or offering promos.",
            DemandTier::Stable => "Stable demand. Maintain current pricing strategy.",
            DemandTier::High => "High demand detected. Consider increasing price slightly.",
        }
    }

    /// Classify `avg_bookings` and price the room from `base_price`.
    ///
    /// # Errors
    ///
    /// [`DemandError::InvalidParameter`] if the average is non-finite, the
    /// price is not positive and finite, or the adjusted price overflows.
    pub fn classify(&self, avg_bookings: f64, base_price: f64) -> Result<DemandClassification> {
        if !avg_bookings.is_finite() {
            return Err(DemandError::invalid_parameter(
                "avg_bookings",
                format!("must be finite, got {}", avg_bookings),
            ));
        }
        if !base_price.is_finite() || base_price <= 0.0 {
            return Err(DemandError::invalid_parameter(
                "price",
                format!("must be positive and finite, got {}", base_price),
            ));
        }

        let tier = Self::tier(avg_bookings);
        let price_multiplier = Self::price_multiplier(tier);
        let optimal_price = base_price * price_multiplier;
        if !optimal_price.is_finite() {
            return Err(DemandError::invalid_parameter(
                "price",
                format!("{} x {} overflows", base_price, price_multiplier),
            ));
        }

        Ok(DemandClassification {
            tier,
            price_multiplier,
            optimal_price,
            recommendation: Self::recommendation(tier).to_string(),
        })
    }
}
