//! Closed-form hedonic price estimation for Indian residential real estate.
//!
//! This crate prices a property from ten listing attributes using a fixed,
//! pre-calibrated regression equation and renders amounts in the Indian
//! Lakhs/Crores convention. It offers tools to
//!
//! - parse raw form submissions into typed records (`features` module),
//! - evaluate the hedonic equation (`model` module),
//! - render rupee amounts for display (`currency` module), and
//! - shape request/response payloads for a web front end (`api` module).
//!
//! The coefficients are compile-time constants; nothing in the crate fits or
//! retrains them. Estimation is pure and side-effect free, so a single
//! [`PriceModel`] behind shared ownership can serve unlimited concurrent
//! callers without synchronization.
//!
//! # Quick start
//!
//! ```
//! use std::collections::HashMap;
//! use hprs::{estimate_form, PriceModel};
//!
//! let model = PriceModel::default();
//! let form: HashMap<String, String> = [
//!     ("size", "1000"),
//!     ("bedrooms", "2"),
//!     ("bathrooms", "2"),
//!     ("avg_local_rent", "20000"),
//!     ("growth_rate", "5"),
//!     ("city_tier", "1"),
//!     ("property_type", "apartment"),
//!     ("furnishing", "2"),
//!     ("rera_registered", "1"),
//!     ("move_in_ready", "1"),
//! ]
//! .into_iter()
//! .map(|(key, value)| (key.to_string(), value.to_string()))
//! .collect();
//!
//! let response = estimate_form(&model, &form);
//! assert!(response.success);
//! println!("Quoted: {:?}", response.prediction);
//! ```
//!
//! Malformed input never panics or escapes the boundary: [`estimate_form`]
//! shapes it into a failure response, while [`try_estimate`] exposes the
//! same pipeline as a [`Result`] for callers that want to branch themselves.

pub mod api;
pub mod coefficients;
pub mod currency;
pub mod error;
pub mod features;
pub mod model;

pub use api::{
    describe_model, estimate_form, try_estimate, DescribeResponse, EstimateResponse, ModelInfo,
    Prediction,
};
pub use coefficients::{CoefficientTable, WEIGHT_COUNT};
pub use currency::{format_inr, format_lakhs};
pub use error::{HprsError, Result};
pub use features::{FeatureRecord, Furnishing, PropertyType};
pub use model::{PriceModel, PRICE_FLOOR};
