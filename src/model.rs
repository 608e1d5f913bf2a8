//! The hedonic pricing equation: design row, city-tier multiplier, floor.

use std::sync::Arc;

use nalgebra::DVector;

use crate::coefficients::{CoefficientTable, WEIGHT_COUNT};
use crate::features::{FeatureRecord, PropertyType};

/// Minimum price the model will ever quote, in rupees (10 lakhs).
pub const PRICE_FLOOR: f64 = 1_000_000.0;

/// Tier-1 cities trade at a 20% premium on the whole accumulated price.
const TIER_1_MULTIPLIER: f64 = 1.2;
/// Tier-3 cities trade at a 40% discount on the whole accumulated price.
const TIER_3_MULTIPLIER: f64 = 0.6;

/// Hedonic pricing model over a shared coefficient table.
///
/// Estimation is deterministic and side-effect free, and the table behind
/// the [`Arc`] has no mutation path, so one model can serve any number of
/// concurrent callers.
#[derive(Clone, Debug)]
pub struct PriceModel {
    coefficients: Arc<CoefficientTable>,
}

impl PriceModel {
    /// Constructs a model over an existing shared coefficient table.
    pub fn new(coefficients: Arc<CoefficientTable>) -> Self {
        log::info!("hedonic price model ready ({WEIGHT_COUNT} weights, INR output)");
        Self { coefficients }
    }

    /// Accessor for the coefficient table.
    pub fn coefficients(&self) -> &CoefficientTable {
        &self.coefficients
    }

    /// Estimates the price of a property in rupees.
    ///
    /// The regression value is accumulated in canonical term order, scaled
    /// by the city-tier multiplier, and clamped to [`PRICE_FLOOR`].
    pub fn estimate(&self, features: &FeatureRecord) -> f64 {
        let price = self.coefficients.as_vector().dot(&design_row(features));
        let adjusted = match features.city_tier {
            1 => price * TIER_1_MULTIPLIER,
            3 => price * TIER_3_MULTIPLIER,
            _ => price,
        };
        adjusted.max(PRICE_FLOOR)
    }
}

impl Default for PriceModel {
    fn default() -> Self {
        Self::new(Arc::new(CoefficientTable::default()))
    }
}

/// Expands a feature record into its regression design row.
///
/// Entry order mirrors [`CoefficientTable`]: linear terms, the two scaled
/// polynomial terms, the two tier interactions, then the 0/1 categorical
/// indicators. Within each categorical group the indicators are mutually
/// exclusive; across groups they combine freely.
fn design_row(features: &FeatureRecord) -> DVector<f64> {
    let bedrooms = f64::from(features.bedrooms);
    let tier = features.city_tier as f64;
    DVector::from_vec(vec![
        1.0,
        features.size,
        bedrooms,
        f64::from(features.bathrooms),
        features.avg_local_rent,
        features.growth_rate,
        features.size * features.size / 1_000.0,
        features.avg_local_rent * features.avg_local_rent / 1_000.0,
        tier * bedrooms,
        tier * features.growth_rate,
        indicator(features.city_tier == 2),
        indicator(features.property_type == PropertyType::House),
        indicator(features.property_type == PropertyType::Other),
        indicator(features.rera_registered == 1),
        indicator(features.furnishing.is_fully_furnished()),
        indicator(features.furnishing.is_luxury()),
        indicator(features.move_in_ready == 1),
    ])
}

fn indicator(condition: bool) -> f64 {
    if condition {
        1.0
    } else {
        0.0
    }
}
