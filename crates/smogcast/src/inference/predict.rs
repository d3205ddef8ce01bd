//! Prediction path: raw query → encoded feature vector → scalar.

use std::fmt;

use serde::Deserialize;

use crate::dataset::{parse_decimal, N_FEATURES};
use crate::model::ModelBundle;
use crate::registry::ModelRegistry;

/// A numeric query field as it arrives from the boundary: either a JSON
/// number or a piece of text still to be parsed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    /// Already numeric.
    Number(f64),
    /// Text form, parsed on use.
    Text(String),
}

impl RawNumber {
    fn as_decimal(&self) -> Option<f64> {
        match self {
            RawNumber::Number(value) if value.is_finite() => Some(*value),
            RawNumber::Number(_) => None,
            RawNumber::Text(text) => parse_decimal(text),
        }
    }
}

impl fmt::Display for RawNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawNumber::Number(value) => value.fmt(f),
            RawNumber::Text(text) => text.fmt(f),
        }
    }
}

impl From<f64> for RawNumber {
    fn from(value: f64) -> Self {
        RawNumber::Number(value)
    }
}

impl From<&str> for RawNumber {
    fn from(text: &str) -> Self {
        RawNumber::Text(text.to_owned())
    }
}

/// One prediction query, validated field by field before it reaches the
/// model.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PredictQuery {
    /// City name; must be known to the active bundle.
    pub city: String,
    /// State name; must be known to the active bundle.
    pub state: String,
    pub pm10: RawNumber,
    pub no2: RawNumber,
    pub so2: RawNumber,
    pub co: RawNumber,
    pub o3: RawNumber,
}

/// Errors raised on the prediction path.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PredictError {
    /// No bundle has been published yet.
    #[error("model not trained yet")]
    NotTrained,
    /// A categorical value was never seen at training time.
    #[error("unknown {field} {value:?}: not present in the training data")]
    UnknownCategory {
        field: &'static str,
        value: String,
    },
    /// A numeric field failed to parse as a finite decimal.
    #[error("invalid {field} {value:?}: not a finite decimal")]
    InvalidNumber {
        field: &'static str,
        value: String,
    },
}

/// Evaluate the registry's active model against a query.
///
/// # Errors
///
/// [`PredictError::NotTrained`] when nothing has been published;
/// otherwise whatever [`evaluate`] raises.
pub fn predict(registry: &ModelRegistry, query: &PredictQuery) -> Result<f64, PredictError> {
    let bundle = registry.current().ok_or(PredictError::NotTrained)?;
    evaluate(&bundle, query)
}

/// Evaluate one bundle against a query.
///
/// City and state are resolved through read-only lookups in the bundle's
/// own encoders (never inserting), the pollutant fields are parsed, and the
/// feature vector is assembled in the exact training layout. No state is
/// touched.
///
/// # Errors
///
/// [`PredictError::UnknownCategory`] for a city or state the bundle's
/// tables have never seen, [`PredictError::InvalidNumber`] for a pollutant
/// field that is not a finite decimal.
pub fn evaluate(bundle: &ModelBundle, query: &PredictQuery) -> Result<f64, PredictError> {
    let city_id = bundle
        .cities()
        .get(&query.city)
        .ok_or_else(|| PredictError::UnknownCategory {
            field: "city",
            value: query.city.clone(),
        })?;
    let state_id = bundle
        .states()
        .get(&query.state)
        .ok_or_else(|| PredictError::UnknownCategory {
            field: "state",
            value: query.state.clone(),
        })?;

    let features: [f64; N_FEATURES] = [
        city_id as f64,
        state_id as f64,
        decimal_field("pm10", &query.pm10)?,
        decimal_field("no2", &query.no2)?,
        decimal_field("so2", &query.so2)?,
        decimal_field("co", &query.co)?,
        decimal_field("o3", &query.o3)?,
    ];

    Ok(bundle.model().predict_row(&features))
}

fn decimal_field(field: &'static str, value: &RawNumber) -> Result<f64, PredictError> {
    value.as_decimal().ok_or_else(|| PredictError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;
    use crate::dataset::CategoryEncoder;
    use crate::model::{LinearModel, ModelMeta};

    fn test_bundle() -> ModelBundle {
        let mut cities = CategoryEncoder::new();
        cities.lookup_or_insert("Delhi");
        cities.lookup_or_insert("Mumbai");
        let mut states = CategoryEncoder::new();
        states.lookup_or_insert("DL");

        // prediction = 1 + city_id + 10·state_id + pm10 + no2 + so2 + co + o3
        let model = LinearModel::new(1.0, array![1.0, 10.0, 1.0, 1.0, 1.0, 1.0, 1.0]);
        ModelBundle::from_parts(model, cities, states, ModelMeta::new(7, 2))
    }

    fn query(city: &str, state: &str) -> PredictQuery {
        PredictQuery {
            city: city.to_string(),
            state: state.to_string(),
            pm10: RawNumber::from(2.0),
            no2: RawNumber::from("3"),
            so2: RawNumber::from(4.0),
            co: RawNumber::from(" 5 "),
            o3: RawNumber::from(6.0),
        }
    }

    #[test]
    fn evaluates_with_mixed_number_and_text_fields() {
        let bundle = test_bundle();
        let value = evaluate(&bundle, &query("Mumbai", "DL")).unwrap();
        // 1 + 1·1 + 10·0 + 2 + 3 + 4 + 5 + 6
        assert!((value - 22.0).abs() < 1e-12);
    }

    #[test]
    fn unknown_city_names_the_field() {
        let bundle = test_bundle();
        let err = evaluate(&bundle, &query("Pune", "DL")).unwrap_err();
        assert_eq!(
            err,
            PredictError::UnknownCategory {
                field: "city",
                value: "Pune".to_string(),
            }
        );
    }

    #[test]
    fn unknown_state_names_the_field() {
        let bundle = test_bundle();
        let err = evaluate(&bundle, &query("Delhi", "MH")).unwrap_err();
        assert_eq!(
            err,
            PredictError::UnknownCategory {
                field: "state",
                value: "MH".to_string(),
            }
        );
    }

    #[test]
    fn unparsable_pollutant_names_the_field() {
        let bundle = test_bundle();
        let mut q = query("Delhi", "DL");
        q.co = RawNumber::from("n/a");
        let err = evaluate(&bundle, &q).unwrap_err();
        assert_eq!(
            err,
            PredictError::InvalidNumber {
                field: "co",
                value: "n/a".to_string(),
            }
        );
    }

    #[test]
    fn non_finite_number_is_invalid() {
        let bundle = test_bundle();
        let mut q = query("Delhi", "DL");
        q.pm10 = RawNumber::Number(f64::NAN);
        let err = evaluate(&bundle, &q).unwrap_err();
        assert!(matches!(
            err,
            PredictError::InvalidNumber { field: "pm10", .. }
        ));
    }

    #[test]
    fn registry_predict_requires_training() {
        let registry = ModelRegistry::new();
        let err = predict(&registry, &query("Delhi", "DL")).unwrap_err();
        assert_eq!(err, PredictError::NotTrained);

        registry.publish(test_bundle());
        let value = predict(&registry, &query("Delhi", "DL")).unwrap();
        assert!((value - 21.0).abs() < 1e-12);
    }

    #[test]
    fn untagged_number_deserializes_from_both_forms() {
        let q: PredictQuery = serde_json::from_str(
            r#"{"city":"Delhi","state":"DL","pm10":20,"no2":"5","so2":2,"co":0.3,"o3":"15"}"#,
        )
        .unwrap();
        assert_eq!(q.pm10, RawNumber::Number(20.0));
        assert_eq!(q.no2, RawNumber::Text("5".to_string()));
    }
}
