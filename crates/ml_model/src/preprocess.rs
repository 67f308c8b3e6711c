//! Deterministic column-wise preprocessing transform.
//!
//! Mirrors the transform fitted at training time: numeric columns are
//! standard-scaled, categorical columns are one-hot encoded against the
//! category list captured during training.

use prediction_structs::{FieldValue, PredictionRecord};
use serde::{Deserialize, Serialize};

/// Error type for the preprocessing transform.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error("record has no column `{column}`")]
    MissingColumn { column: String },
    #[error("column `{column}` has the wrong type (expected {expected})")]
    TypeMismatch {
        column: String,
        expected: &'static str,
    },
    #[error("unknown category `{value}` for column `{column}`")]
    UnknownCategory { column: String, value: String },
}

/// Per-column transform parameters fitted at training time.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColumnTransform {
    /// Standard scaling: `(value - mean) / std_dev`.
    Numeric { mean: f64, std_dev: f64 },
    /// One-hot encoding against the exact training-time category tokens.
    Categorical { categories: Vec<String> },
}

impl ColumnTransform {
    /// Number of output features this column contributes.
    #[must_use]
    pub fn output_width(&self) -> usize {
        match self {
            Self::Numeric { .. } => 1,
            Self::Categorical { categories } => categories.len(),
        }
    }
}

/// One column of the training schema, in training order.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ColumnSpec {
    /// Column name as used at training time.
    pub name: String,
    /// Fitted transform parameters for the column.
    #[serde(flatten)]
    pub transform: ColumnTransform,
}

impl ColumnSpec {
    /// Applies this column's transform, appending features to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if the record lacks the column, the value has the
    /// wrong type, or a categorical token was never seen at training time.
    pub fn apply(&self, record: &PredictionRecord, out: &mut Vec<f64>) -> Result<(), TransformError> {
        let value = record
            .get(&self.name)
            .ok_or_else(|| TransformError::MissingColumn {
                column: self.name.clone(),
            })?;

        match (&self.transform, value) {
            (ColumnTransform::Numeric { mean, std_dev }, FieldValue::Number(v)) => {
                let scale = if *std_dev == 0.0 { 1.0 } else { *std_dev };
                out.push((v - mean) / scale);
                Ok(())
            }
            (ColumnTransform::Categorical { categories }, FieldValue::Text(token)) => {
                let hit = categories.iter().position(|c| c == token).ok_or_else(|| {
                    TransformError::UnknownCategory {
                        column: self.name.clone(),
                        value: token.to_owned(),
                    }
                })?;

                for i in 0..categories.len() {
                    out.push(if i == hit { 1.0 } else { 0.0 });
                }
                Ok(())
            }
            (ColumnTransform::Numeric { .. }, FieldValue::Text(_)) => {
                Err(TransformError::TypeMismatch {
                    column: self.name.clone(),
                    expected: "a number",
                })
            }
            (ColumnTransform::Categorical { .. }, FieldValue::Number(_)) => {
                Err(TransformError::TypeMismatch {
                    column: self.name.clone(),
                    expected: "a category token",
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn record() -> PredictionRecord {
        let form: HashMap<String, String> = [
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
        .collect();
        PredictionRecord::from_form(&form).unwrap()
    }

    #[test]
    fn test_numeric_column_is_standard_scaled() {
        let spec = ColumnSpec {
            name: "age".to_owned(),
            transform: ColumnTransform::Numeric {
                mean: 50.0,
                std_dev: 8.0,
            },
        };

        let mut out = Vec::new();
        spec.apply(&record(), &mut out).unwrap();
        assert_eq!(out, vec![0.5]);
    }

    #[test]
    fn test_categorical_column_is_one_hot() {
        let spec = ColumnSpec {
            name: "exang".to_owned(),
            transform: ColumnTransform::Categorical {
                categories: vec!["TRUE".to_owned(), "FALSE".to_owned()],
            },
        };

        let mut out = Vec::new();
        spec.apply(&record(), &mut out).unwrap();
        assert_eq!(out, vec![0.0, 1.0]);
    }

    #[test]
    fn test_unknown_category_token_is_rejected() {
        // "false" was never seen at training time; no case-folding happens.
        let spec = ColumnSpec {
            name: "exang".to_owned(),
            transform: ColumnTransform::Categorical {
                categories: vec!["TRUE".to_owned(), "false".to_owned()],
            },
        };

        let mut out = Vec::new();
        let err = spec.apply(&record(), &mut out).unwrap_err();
        assert!(matches!(err, TransformError::UnknownCategory { .. }));
    }

    #[test]
    fn test_schema_mismatch_names_the_column() {
        let spec = ColumnSpec {
            name: "thal".to_owned(),
            transform: ColumnTransform::Numeric {
                mean: 0.0,
                std_dev: 1.0,
            },
        };

        let mut out = Vec::new();
        let err = spec.apply(&record(), &mut out).unwrap_err();
        assert!(matches!(err, TransformError::MissingColumn { column } if column == "thal"));
    }
}
