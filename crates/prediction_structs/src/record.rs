//! The single-row patient record fed into the prediction pipeline.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::PredictError;

/// Canonical column order of the training data.
///
/// The preprocessing transform aligns columns by name, but records are always
/// materialized in this order so serialized rows match the training layout.
pub const COLUMN_NAMES: [&str; 9] = [
    "age", "sex", "cp", "trestbps", "restecg", "thalch", "exang", "oldpeak", "slope",
];

/// A single column value, numeric or categorical.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// Numeric column (integers are widened to `f64` for the transform).
    Number(f64),
    /// Categorical column, the exact token submitted by the client.
    Text(&'a str),
}

/// One row of patient attributes, typed per the training schema.
///
/// Categorical fields keep the exact string tokens used at training time.
/// No case-folding or trimming happens here: changing a token would change
/// what the trained encoder sees.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PredictionRecord {
    /// Patient age in years.
    pub age: i64,
    /// Sex, e.g. "Male" / "Female".
    pub sex: String,
    /// Chest-pain type, e.g. "typical angina".
    pub cp: String,
    /// Resting blood pressure (mm Hg).
    pub trestbps: i64,
    /// Resting ECG result, e.g. "normal".
    pub restecg: String,
    /// Maximum heart rate achieved.
    pub thalch: i64,
    /// Exercise-induced angina flag, the literal token "TRUE" or "FALSE".
    pub exang: String,
    /// ST depression induced by exercise relative to rest.
    pub oldpeak: f64,
    /// ST-segment slope, e.g. "flat".
    pub slope: String,
}

impl PredictionRecord {
    /// Normalizes raw string form fields into a typed record.
    ///
    /// Parses `age`, `trestbps` and `thalch` as integers and `oldpeak` as a
    /// float; the five categorical fields pass through verbatim. No range
    /// checking happens here, out-of-range values are left to the
    /// preprocessing transform.
    ///
    /// # Errors
    ///
    /// Returns [`PredictError::Validation`] naming the offending field if any
    /// field is missing or a numeric field fails to parse.
    pub fn from_form(fields: &HashMap<String, String>) -> Result<Self, PredictError> {
        Ok(Self {
            age: parse_int(fields, "age")?,
            sex: required(fields, "sex")?.to_owned(),
            cp: required(fields, "cp")?.to_owned(),
            trestbps: parse_int(fields, "trestbps")?,
            restecg: required(fields, "restecg")?.to_owned(),
            thalch: parse_int(fields, "thalch")?,
            exang: required(fields, "exang")?.to_owned(),
            oldpeak: parse_float(fields, "oldpeak")?,
            slope: required(fields, "slope")?.to_owned(),
        })
    }

    /// Looks up a column value by name.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<FieldValue<'_>> {
        let value = match column {
            "age" => FieldValue::Number(self.age as f64),
            "sex" => FieldValue::Text(&self.sex),
            "cp" => FieldValue::Text(&self.cp),
            "trestbps" => FieldValue::Number(self.trestbps as f64),
            "restecg" => FieldValue::Text(&self.restecg),
            "thalch" => FieldValue::Number(self.thalch as f64),
            "exang" => FieldValue::Text(&self.exang),
            "oldpeak" => FieldValue::Number(self.oldpeak),
            "slope" => FieldValue::Text(&self.slope),
            _ => return None,
        };
        Some(value)
    }

    /// Returns the row as (column, value) pairs in the canonical order.
    #[must_use]
    pub fn columns(&self) -> [(&'static str, FieldValue<'_>); 9] {
        [
            ("age", FieldValue::Number(self.age as f64)),
            ("sex", FieldValue::Text(&self.sex)),
            ("cp", FieldValue::Text(&self.cp)),
            ("trestbps", FieldValue::Number(self.trestbps as f64)),
            ("restecg", FieldValue::Text(&self.restecg)),
            ("thalch", FieldValue::Number(self.thalch as f64)),
            ("exang", FieldValue::Text(&self.exang)),
            ("oldpeak", FieldValue::Number(self.oldpeak)),
            ("slope", FieldValue::Text(&self.slope)),
        ]
    }
}

fn required<'a>(
    fields: &'a HashMap<String, String>,
    field: &'static str,
) -> Result<&'a str, PredictError> {
    fields
        .get(field)
        .map(String::as_str)
        .ok_or_else(|| PredictError::missing_field(field))
}

fn parse_int(fields: &HashMap<String, String>, field: &'static str) -> Result<i64, PredictError> {
    let raw = required(fields, field)?;
    raw.parse()
        .map_err(|_| PredictError::unparsable_field(field, "an integer", raw))
}

fn parse_float(fields: &HashMap<String, String>, field: &'static str) -> Result<f64, PredictError> {
    let raw = required(fields, field)?;
    raw.parse()
        .map_err(|_| PredictError::unparsable_field(field, "a number", raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_form() -> HashMap<String, String> {
        [
            ("age", "54"),
            ("sex", "Male"),
            ("cp", "typical angina"),
            ("trestbps", "130"),
            ("restecg", "normal"),
            ("thalch", "150"),
            ("exang", "FALSE"),
            ("oldpeak", "1.0"),
            ("slope", "flat"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .collect()
    }

    #[test]
    fn test_from_form_parses_typed_fields() {
        let record = PredictionRecord::from_form(&sample_form()).unwrap();

        assert_eq!(record.age, 54);
        assert_eq!(record.trestbps, 130);
        assert_eq!(record.thalch, 150);
        assert!((record.oldpeak - 1.0).abs() < f64::EPSILON);
        assert_eq!(record.sex, "Male");
        assert_eq!(record.exang, "FALSE");
    }

    #[test]
    fn test_columns_follow_canonical_order() {
        // HashMap iteration order is arbitrary; the record must not care.
        let record = PredictionRecord::from_form(&sample_form()).unwrap();
        let columns = record.columns();

        for (i, (name, _)) in columns.iter().enumerate() {
            assert_eq!(*name, COLUMN_NAMES[i]);
        }
    }

    #[test]
    fn test_missing_field_names_the_field() {
        let mut form = sample_form();
        form.remove("age");

        let err = PredictionRecord::from_form(&form).unwrap_err();
        assert!(matches!(err, PredictError::Validation { field: "age", .. }));
    }

    #[test]
    fn test_non_numeric_field_is_rejected() {
        let mut form = sample_form();
        form.insert("trestbps".to_owned(), "high".to_owned());

        let err = PredictionRecord::from_form(&form).unwrap_err();
        assert!(matches!(
            err,
            PredictError::Validation {
                field: "trestbps",
                ..
            }
        ));
    }

    #[test]
    fn test_categorical_tokens_pass_through_verbatim() {
        let mut form = sample_form();
        // Token casing and whitespace must survive untouched.
        form.insert("exang".to_owned(), " true ".to_owned());

        let record = PredictionRecord::from_form(&form).unwrap();
        assert_eq!(record.exang, " true ");
    }

    #[test]
    fn test_get_matches_columns() {
        let record = PredictionRecord::from_form(&sample_form()).unwrap();

        for (name, value) in record.columns() {
            assert_eq!(record.get(name), Some(value));
        }
        assert_eq!(record.get("thal"), None);
    }
}
