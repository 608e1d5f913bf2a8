//! Property attribute records and the form-field parsing that produces them.

use std::collections::HashMap;
use std::str::FromStr;

use crate::error::{HprsError, Result};

/// Property category reported by the listing form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropertyType {
    /// Independent house.
    House,
    /// Apartment, the unadjusted baseline category.
    Apartment,
    /// Anything else (plots, commercial conversions, ...).
    Other,
}

impl PropertyType {
    /// Maps a raw form value onto a category.
    ///
    /// Unrecognized labels fall back to the apartment baseline rather than
    /// being rejected.
    fn from_form_value(raw: &str) -> Self {
        match raw {
            "house" => Self::House,
            "other" => Self::Other,
            _ => Self::Apartment,
        }
    }
}

/// Furnishing level as received from the listing form.
///
/// The upstream form mixes two domains in one field: integer codes for the
/// standard furnishing levels and free-text labels for everything else. Code
/// 4 (fully furnished) and the label `"other"` (luxury furnishing) carry
/// price adjustments; every other value is unadjusted. The mixed domain is
/// kept as-is instead of being collapsed into one enum of known levels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Furnishing {
    /// Numeric furnishing code.
    Code(i64),
    /// Non-numeric label carried through verbatim.
    Label(String),
}

impl Furnishing {
    /// Parses a raw form value, preferring the numeric domain.
    fn from_form_value(raw: &str) -> Self {
        match raw.trim().parse::<i64>() {
            Ok(code) => Self::Code(code),
            Err(_) => Self::Label(raw.to_string()),
        }
    }

    /// Whether this value denotes a fully furnished property (code 4).
    pub fn is_fully_furnished(&self) -> bool {
        matches!(self, Self::Code(4))
    }

    /// Whether this value denotes luxury furnishing (the `"other"` label).
    pub fn is_luxury(&self) -> bool {
        matches!(self, Self::Label(label) if label == "other")
    }
}

/// A single property's attributes, parsed and ready for estimation.
#[derive(Clone, Debug)]
pub struct FeatureRecord {
    /// Built-up area in square feet.
    pub size: f64,
    /// Number of bedrooms.
    pub bedrooms: u32,
    /// Number of bathrooms.
    pub bathrooms: u32,
    /// Average monthly rent in the locality, in rupees.
    pub avg_local_rent: f64,
    /// Annual price growth rate of the locality, in percent.
    pub growth_rate: f64,
    /// City tier; 1, 2, and 3 are the recognized values.
    pub city_tier: i64,
    /// Property category.
    pub property_type: PropertyType,
    /// Furnishing level (dual-domain, see [`Furnishing`]).
    pub furnishing: Furnishing,
    /// RERA registration flag (0 or 1).
    pub rera_registered: i64,
    /// Move-in-ready flag (0 or 1).
    pub move_in_ready: i64,
}

impl FeatureRecord {
    /// The form field names recognized by [`from_form`](Self::from_form), in
    /// the order the model reports them.
    pub const FIELD_NAMES: [&'static str; 10] = [
        "size",
        "bedrooms",
        "bathrooms",
        "avg_local_rent",
        "growth_rate",
        "city_tier",
        "property_type",
        "furnishing",
        "rera_registered",
        "move_in_ready",
    ];

    /// Parses a raw form submission into a typed record.
    ///
    /// Every field in [`FIELD_NAMES`](Self::FIELD_NAMES) must be present;
    /// numeric fields must parse into their target type. `property_type` and
    /// `furnishing` accept any string (unknown values land in their
    /// unadjusted baselines).
    pub fn from_form(form: &HashMap<String, String>) -> Result<Self> {
        Ok(Self {
            size: parse_field(form, "size", "a number")?,
            bedrooms: parse_field(form, "bedrooms", "a non-negative integer")?,
            bathrooms: parse_field(form, "bathrooms", "a non-negative integer")?,
            avg_local_rent: parse_field(form, "avg_local_rent", "a number")?,
            growth_rate: parse_field(form, "growth_rate", "a number")?,
            city_tier: parse_field(form, "city_tier", "an integer")?,
            property_type: PropertyType::from_form_value(require(form, "property_type")?),
            furnishing: Furnishing::from_form_value(require(form, "furnishing")?),
            rera_registered: parse_field(form, "rera_registered", "an integer")?,
            move_in_ready: parse_field(form, "move_in_ready", "an integer")?,
        })
    }
}

fn require<'a>(form: &'a HashMap<String, String>, field: &'static str) -> Result<&'a str> {
    form.get(field)
        .map(String::as_str)
        .ok_or(HprsError::MissingField { field })
}

fn parse_field<T: FromStr>(
    form: &HashMap<String, String>,
    field: &'static str,
    expected: &'static str,
) -> Result<T> {
    let raw = require(form, field)?;
    raw.trim()
        .parse()
        .map_err(|_| HprsError::invalid(field, raw, expected))
}
