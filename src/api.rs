//! Request-boundary operations and their wire-shaped responses.
//!
//! These are the two calls a thin HTTP layer makes: estimate a price from a
//! raw form submission, or describe the model's static metadata. Responses
//! serialize to the JSON shape the accompanying front end expects, so the
//! glue layer only forwards them.

use std::collections::HashMap;

use serde::Serialize;

use crate::coefficients::CoefficientTable;
use crate::currency::{format_inr, format_lakhs};
use crate::error::Result;
use crate::features::FeatureRecord;
use crate::model::PriceModel;

/// A completed estimate with its display renderings.
#[derive(Clone, Debug, Serialize)]
pub struct Prediction {
    /// Estimated price in rupees, rounded to two decimal places.
    pub predicted_price: f64,
    /// Primary display string in the Lakhs/Crores convention.
    pub formatted_price: String,
    /// Supplementary rendering fixed in lakhs.
    pub price_in_lakhs: String,
}

impl Prediction {
    /// Derives the display renderings for a raw model amount.
    ///
    /// Only the numeric field is rounded; both strings format the amount as
    /// quoted by the model.
    pub fn from_amount(amount: f64) -> Self {
        Self {
            predicted_price: (amount * 100.0).round() / 100.0,
            formatted_price: format_inr(amount),
            price_in_lakhs: format_lakhs(amount),
        }
    }
}

/// Runs the parse-and-estimate pipeline for a raw form submission.
///
/// This is the `Result`-shaped core of the estimate operation; HTTP glue
/// should usually call [`estimate_form`] for the wire response instead.
pub fn try_estimate(model: &PriceModel, form: &HashMap<String, String>) -> Result<Prediction> {
    let features = FeatureRecord::from_form(form)?;
    Ok(Prediction::from_amount(model.estimate(&features)))
}

/// Wire response for the estimate operation.
#[derive(Clone, Debug, Serialize)]
pub struct EstimateResponse {
    /// Whether a prediction was produced.
    pub success: bool,
    /// The prediction fields, flattened into the response on success.
    #[serde(flatten)]
    pub prediction: Option<Prediction>,
    /// Human-readable cause, present on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Handles the estimate operation end to end.
///
/// Input errors are shaped into the failure response instead of being
/// propagated; nothing here can panic or abort the caller.
pub fn estimate_form(model: &PriceModel, form: &HashMap<String, String>) -> EstimateResponse {
    match try_estimate(model, form) {
        Ok(prediction) => EstimateResponse {
            success: true,
            prediction: Some(prediction),
            error: None,
        },
        Err(err) => {
            log::debug!("estimate rejected: {err}");
            EstimateResponse {
                success: false,
                prediction: None,
                error: Some(err.to_string()),
            }
        }
    }
}

/// Static description of the pricing model.
#[derive(Clone, Debug, Serialize)]
pub struct ModelInfo {
    /// Fixed model label.
    pub model_type: &'static str,
    /// Quoted accuracy figure; descriptive metadata, not computed.
    pub r_squared: &'static str,
    /// The full coefficient table, serialized in canonical order.
    pub coefficients: CoefficientTable,
    /// The recognized form field names, in column order.
    pub features: [&'static str; 10],
    /// Descriptive price-range note.
    pub price_range: &'static str,
    /// Descriptive currency-convention note.
    pub currency_format: &'static str,
}

/// Wire response for the describe operation.
#[derive(Clone, Debug, Serialize)]
pub struct DescribeResponse {
    /// Always true; describing the model cannot fail.
    pub success: bool,
    /// Status line shown by the front end.
    pub message: &'static str,
    /// The model metadata block.
    pub model_info: ModelInfo,
}

/// Handles the describe operation. Always succeeds.
pub fn describe_model(model: &PriceModel) -> DescribeResponse {
    DescribeResponse {
        success: true,
        message: "Using adjusted OLS regression for realistic Indian housing prices!",
        model_info: ModelInfo {
            model_type: "Adjusted OLS Regression for Indian Real Estate",
            r_squared: "92%",
            coefficients: model.coefficients().clone(),
            features: FeatureRecord::FIELD_NAMES,
            price_range: "Realistic Indian housing prices (10L - 5Cr range)",
            currency_format: "Indian Lakhs/Crores format",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    fn complete_form() -> HashMap<String, String> {
        form(&[
            ("size", "1000"),
            ("bedrooms", "2"),
            ("bathrooms", "2"),
            ("avg_local_rent", "20000"),
            ("growth_rate", "5"),
            ("city_tier", "1"),
            ("property_type", "apartment"),
            ("furnishing", "2"),
            ("rera_registered", "1"),
            ("move_in_ready", "1"),
        ])
    }

    #[test]
    fn success_response_flattens_the_prediction() {
        let model = PriceModel::default();
        let response = estimate_form(&model, &complete_form());
        assert!(response.success);
        assert!(response.error.is_none());

        let value = serde_json::to_value(&response).expect("serializable response");
        let object = value.as_object().expect("object response");
        assert_eq!(object["success"], serde_json::json!(true));
        assert!(object.contains_key("predicted_price"));
        assert!(object.contains_key("formatted_price"));
        assert!(object.contains_key("price_in_lakhs"));
        assert!(!object.contains_key("error"));
        assert!(!object.contains_key("prediction"));
    }

    #[test]
    fn failure_response_carries_only_the_error() {
        let model = PriceModel::default();
        let mut submission = complete_form();
        submission.insert("size".to_string(), "big".to_string());

        let response = estimate_form(&model, &submission);
        assert!(!response.success);
        let message = response.error.as_deref().expect("failure carries a cause");
        assert!(message.contains("size"));

        let value = serde_json::to_value(&response).expect("serializable response");
        let object = value.as_object().expect("object response");
        assert_eq!(object["success"], serde_json::json!(false));
        assert!(object.contains_key("error"));
        assert!(!object.contains_key("predicted_price"));
    }

    #[test]
    fn describe_reports_the_full_table() {
        let model = PriceModel::default();
        let response = describe_model(&model);
        assert!(response.success);
        assert_eq!(response.model_info.r_squared, "92%");
        assert_eq!(response.model_info.features.len(), 10);

        let value = serde_json::to_value(&response).expect("serializable response");
        let coefficients = value["model_info"]["coefficients"]
            .as_object()
            .expect("coefficient object");
        assert_eq!(coefficients.len(), 17);
        assert_eq!(coefficients["intercept"], serde_json::json!(3_000_000.0));
        assert_eq!(coefficients["nearby_rent_squared"], serde_json::json!(-0.001));
    }

    #[test]
    fn rounding_happens_only_on_the_numeric_field() {
        let prediction = Prediction::from_amount(8_765_432.109);
        assert_eq!(prediction.predicted_price, 8_765_432.11);
        assert_eq!(prediction.formatted_price, "₹87.7 L");
        assert_eq!(prediction.price_in_lakhs, "₹87.7 Lakhs");
    }
}
