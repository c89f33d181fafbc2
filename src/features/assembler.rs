//! Loosely-typed request payload → validated transaction record → feature vector.

use super::{Category, FeatureVector, FEATURE_DIM};
use crate::error::ScoringError;
use serde_json::{Map, Value};

/// Typed view of one scoring request, produced only by successful validation.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    pub amt: f64,
    pub city_pop: i64,
    pub hour: i64,
    pub distance_km: f64,
    /// `None` when the supplied category is not one of the known 14
    pub category: Option<Category>,
    pub raw_category: String,
}

impl TransactionRecord {
    /// Validate a JSON payload. Unknown fields are ignored.
    pub fn from_payload(payload: &Value) -> Result<Self, ScoringError> {
        let obj = payload
            .as_object()
            .ok_or_else(|| ScoringError::malformed("request body must be a JSON object"))?;

        let raw_category = match required(obj, "category")? {
            Value::String(s) => s.clone(),
            other => {
                return Err(ScoringError::malformed(format!(
                    "field `category` must be a string, got {}",
                    kind(other)
                )))
            }
        };
        let category = Category::from_wire(&raw_category);
        if category.is_none() {
            // No category signal: every one-hot flag stays 0.
            tracing::debug!(category = %raw_category, "unrecognized category; encoding as all zeros");
        }

        Ok(Self {
            amt: float_field(obj, "amt")?,
            city_pop: int_field(obj, "city_pop")?,
            hour: int_field(obj, "hour")?,
            distance_km: float_field(obj, "distance_km")?,
            category,
            raw_category,
        })
    }

    /// Fixed order: amt, city_pop, hour, distance_km, then 14 category flags.
    pub fn to_feature_vector(&self) -> FeatureVector {
        let mut values = Vec::with_capacity(FEATURE_DIM);
        values.push(self.amt as f32);
        values.push(self.city_pop as f32);
        values.push(self.hour as f32);
        values.push(self.distance_km as f32);
        values.extend_from_slice(&Category::one_hot(self.category));
        FeatureVector { values }
    }
}

/// Stateless assembler; `assemble` is validation followed by encoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureAssembler;

impl FeatureAssembler {
    pub fn new() -> Self {
        Self
    }

    pub fn assemble(&self, payload: &Value) -> Result<FeatureVector, ScoringError> {
        Ok(TransactionRecord::from_payload(payload)?.to_feature_vector())
    }
}

fn required<'a>(obj: &'a Map<String, Value>, name: &str) -> Result<&'a Value, ScoringError> {
    match obj.get(name) {
        None | Some(Value::Null) => Err(ScoringError::malformed(format!(
            "missing required field `{}`",
            name
        ))),
        Some(v) => Ok(v),
    }
}

fn float_field(obj: &Map<String, Value>, name: &str) -> Result<f64, ScoringError> {
    let value = required(obj, name)?;
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(f) if f.is_finite() => Ok(f),
        _ => Err(ScoringError::malformed(format!(
            "field `{}` is not a finite number: {}",
            name, value
        ))),
    }
}

fn int_field(obj: &Map<String, Value>, name: &str) -> Result<i64, ScoringError> {
    let value = required(obj, name)?;
    let parsed = match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            // Floats truncate toward zero; out-of-range floats are rejected.
            n.as_f64()
                .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| {
        ScoringError::malformed(format!("field `{}` is not an integer: {}", name, value))
    })
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload() -> Value {
        json!({
            "amt": "12.50",
            "city_pop": "1000",
            "hour": "14",
            "distance_km": "3.2",
            "category": "category_travel"
        })
    }

    #[test]
    fn string_fields_coerce() {
        let fv = FeatureAssembler::new().assemble(&payload()).unwrap();
        let mut expected = vec![12.5f32, 1000.0, 14.0, 3.2];
        expected.extend([0.0f32; 13]);
        expected.push(1.0);
        assert_eq!(fv.values, expected);
    }

    #[test]
    fn numeric_fields_accepted() {
        let p = json!({
            "amt": 99.99,
            "city_pop": 250000,
            "hour": 3,
            "distance_km": 120,
            "category": "category_entertainment"
        });
        let r = TransactionRecord::from_payload(&p).unwrap();
        assert_eq!(r.amt, 99.99);
        assert_eq!(r.city_pop, 250000);
        assert_eq!(r.hour, 3);
        assert_eq!(r.distance_km, 120.0);
        assert_eq!(r.category, Some(Category::Entertainment));
        assert_eq!(r.to_feature_vector().values[4], 1.0);
    }

    #[test]
    fn integer_field_truncates_json_float() {
        let mut p = payload();
        p["hour"] = json!(14.9);
        assert_eq!(TransactionRecord::from_payload(&p).unwrap().hour, 14);
    }

    #[test]
    fn integer_field_rejects_decimal_string() {
        let mut p = payload();
        p["city_pop"] = json!("1000.5");
        let err = TransactionRecord::from_payload(&p).unwrap_err();
        assert!(matches!(err, ScoringError::MalformedRequest(ref m) if m.contains("city_pop")));
    }

    #[test]
    fn whitespace_is_trimmed() {
        let mut p = payload();
        p["amt"] = json!("  7.25 ");
        p["hour"] = json!(" 9");
        let r = TransactionRecord::from_payload(&p).unwrap();
        assert_eq!(r.amt, 7.25);
        assert_eq!(r.hour, 9);
    }

    #[test]
    fn missing_or_null_field_is_malformed() {
        for field in ["amt", "city_pop", "hour", "distance_km", "category"] {
            let mut p = payload();
            p.as_object_mut().unwrap().remove(field);
            let err = TransactionRecord::from_payload(&p).unwrap_err();
            assert!(
                matches!(err, ScoringError::MalformedRequest(ref m) if m.contains(field)),
                "{field}"
            );

            let mut p = payload();
            p[field] = Value::Null;
            assert!(TransactionRecord::from_payload(&p).is_err(), "{field} null");
        }
    }

    #[test]
    fn non_numeric_values_are_malformed() {
        for bad in [json!("abc"), json!(true), json!([1]), json!({"v": 1}), json!("NaN"), json!("inf")] {
            let mut p = payload();
            p["amt"] = bad.clone();
            assert!(TransactionRecord::from_payload(&p).is_err(), "{bad}");
        }
    }

    #[test]
    fn category_must_be_string() {
        let mut p = payload();
        p["category"] = json!(3);
        assert!(TransactionRecord::from_payload(&p).is_err());
    }

    #[test]
    fn non_object_body_is_malformed() {
        assert!(TransactionRecord::from_payload(&json!([1, 2, 3])).is_err());
        assert!(TransactionRecord::from_payload(&json!("amt")).is_err());
    }

    #[test]
    fn unknown_category_encodes_zeros() {
        let mut p = payload();
        p["category"] = json!("category_crypto");
        let r = TransactionRecord::from_payload(&p).unwrap();
        assert_eq!(r.category, None);
        assert_eq!(r.raw_category, "category_crypto");
        let fv = r.to_feature_vector();
        assert_eq!(fv.len(), FEATURE_DIM);
        assert!(fv.category_flags().iter().all(|v| *v == 0.0));
    }

    #[test]
    fn extra_fields_ignored() {
        let mut p = payload();
        p["category_travel"] = json!(1);
        p["note"] = json!("dashboard extras");
        let fv = FeatureAssembler::new().assemble(&p).unwrap();
        assert_eq!(fv.values, FeatureAssembler::new().assemble(&payload()).unwrap().values);
    }
}
