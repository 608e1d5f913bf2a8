//! The fixed hedonic regression weights and their canonical ordering.

use nalgebra::DVector;
use serde::Serialize;

/// Number of named weights in the pricing equation.
pub const WEIGHT_COUNT: usize = 17;

/// Named weights of the hedonic pricing equation.
///
/// The values were calibrated offline for realistic Indian housing prices
/// (base price around 30-40 lakhs) and are compiled in; nothing in this
/// crate refits them. Declaration order is the canonical term order used by
/// [`as_vector`](CoefficientTable::as_vector),
/// [`named_entries`](CoefficientTable::named_entries), and serialization.
#[derive(Clone, Debug, Serialize)]
pub struct CoefficientTable {
    /// Base price before any adjustment, in rupees.
    intercept: f64,
    /// Rupees per square foot.
    size: f64,
    /// Rupees per bedroom.
    beds: f64,
    /// Rupees per bathroom.
    baths: f64,
    /// Effect of the local rent level on price.
    average_rent: f64,
    /// Effect of the local growth rate on price.
    growth_rate: f64,
    /// Premium on larger floor plans, applied to size² (scaled by 1/1000).
    size_squared: f64,
    /// Diminishing returns in very high-rent areas, applied to rent²
    /// (scaled by 1/1000).
    nearby_rent_squared: f64,
    /// City-tier × bedroom interaction.
    tier_beds: f64,
    /// City-tier × growth-rate interaction.
    tier_growth: f64,
    /// Additive discount for tier-2 cities.
    tier_2: f64,
    /// Additive adjustment for independent houses.
    property_type_house: f64,
    /// Additive adjustment for non-house, non-apartment properties.
    property_type_other: f64,
    /// Premium for RERA-registered projects.
    rera_id_1: f64,
    /// Premium for fully furnished properties (furnishing code 4).
    furnishing_4: f64,
    /// Premium for luxury furnishing (the "other" label).
    furnishing_other: f64,
    /// Premium for move-in-ready properties.
    move_in_1: f64,
}

impl Default for CoefficientTable {
    fn default() -> Self {
        Self {
            intercept: 3_000_000.0,
            size: 2_500.0,
            beds: 800_000.0,
            baths: 400_000.0,
            average_rent: 15.0,
            growth_rate: 8_000_000.0,
            size_squared: 0.5,
            nearby_rent_squared: -0.001,
            tier_beds: -200_000.0,
            tier_growth: 5_000_000.0,
            tier_2: -800_000.0,
            property_type_house: -500_000.0,
            property_type_other: -1_000_000.0,
            rera_id_1: 300_000.0,
            furnishing_4: 500_000.0,
            furnishing_other: 800_000.0,
            move_in_1: 200_000.0,
        }
    }
}

impl CoefficientTable {
    /// Returns the weights as a dense vector in canonical order, ready to be
    /// dotted against a design row.
    pub fn as_vector(&self) -> DVector<f64> {
        DVector::from_vec(self.named_entries().map(|(_, weight)| weight).to_vec())
    }

    /// Returns the named weights in canonical order.
    pub fn named_entries(&self) -> [(&'static str, f64); WEIGHT_COUNT] {
        [
            ("intercept", self.intercept),
            ("size", self.size),
            ("beds", self.beds),
            ("baths", self.baths),
            ("average_rent", self.average_rent),
            ("growth_rate", self.growth_rate),
            ("size_squared", self.size_squared),
            ("nearby_rent_squared", self.nearby_rent_squared),
            ("tier_beds", self.tier_beds),
            ("tier_growth", self.tier_growth),
            ("tier_2", self.tier_2),
            ("property_type_house", self.property_type_house),
            ("property_type_other", self.property_type_other),
            ("rera_id_1", self.rera_id_1),
            ("furnishing_4", self.furnishing_4),
            ("furnishing_other", self.furnishing_other),
            ("move_in_1", self.move_in_1),
        ]
    }
}
