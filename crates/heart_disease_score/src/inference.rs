//! Stateless inference step: transform, classify, map to severity.

use ml_model::ModelArtifact;
use prediction_structs::{PredictError, PredictionRecord, PredictionResult};
use tracing::debug;

/// Runs inference for one record against a loaded artifact.
///
/// Pure function of (artifact, record): preprocess the record through the
/// artifact's transform, classify the resulting feature vector, and map the
/// raw label to a severity category. Labels outside the trained set map to
/// the "Unknown" severity rather than failing.
///
/// # Errors
///
/// Returns [`PredictError::Inference`] if the preprocessing transform rejects
/// the record (missing column, wrong type, unseen category token).
pub fn run_inference(
    artifact: &ModelArtifact,
    record: &PredictionRecord,
) -> Result<PredictionResult, PredictError> {
    let features = artifact
        .preprocess(record)
        .map_err(|err| PredictError::Inference {
            reason: err.to_string(),
        })?;

    let class = artifact.classify(&features);
    let result = PredictionResult::from_class(class);

    debug!(class, severity = result.label(), "Inference complete");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use ml_model::{ColumnSpec, ColumnTransform, LinearClassifier};
    use prediction_structs::COLUMN_NAMES;

    use super::*;

    /// Full nine-column artifact whose classifier always returns `class`.
    fn constant_artifact(class: i64) -> ModelArtifact {
        let schema: Vec<ColumnSpec> = COLUMN_NAMES
            .iter()
            .map(|&name| ColumnSpec {
                name: name.to_owned(),
                transform: match name {
                    "age" | "trestbps" | "thalch" | "oldpeak" => ColumnTransform::Numeric {
                        mean: 0.0,
                        std_dev: 1.0,
                    },
                    "sex" => ColumnTransform::Categorical {
                        categories: vec!["Male".to_owned(), "Female".to_owned()],
                    },
                    "cp" => ColumnTransform::Categorical {
                        categories: vec![
                            "typical angina".to_owned(),
                            "atypical angina".to_owned(),
                            "non-anginal".to_owned(),
                            "asymptomatic".to_owned(),
                        ],
                    },
                    "restecg" => ColumnTransform::Categorical {
                        categories: vec![
                            "normal".to_owned(),
                            "st-t abnormality".to_owned(),
                            "lv hypertrophy".to_owned(),
                        ],
                    },
                    "exang" => ColumnTransform::Categorical {
                        categories: vec!["TRUE".to_owned(), "FALSE".to_owned()],
                    },
                    "slope" => ColumnTransform::Categorical {
                        categories: vec![
                            "upsloping".to_owned(),
                            "flat".to_owned(),
                            "downsloping".to_owned(),
                        ],
                    },
                    other => unreachable!("unexpected column {other}"),
                },
            })
            .collect();

        let width: usize = schema.iter().map(|c| c.transform.output_width()).sum();
        ModelArtifact {
            schema,
            classifier: LinearClassifier {
                classes: vec![class],
                weights: vec![vec![0.0; width]],
                intercepts: vec![0.0],
            },
        }
    }

    fn scenario_record() -> PredictionRecord {
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
    fn test_always_two_classifier_yields_moderate() {
        let artifact = constant_artifact(2);

        let result = run_inference(&artifact, &scenario_record()).unwrap();
        assert_eq!(result.class, 2);
        assert_eq!(result.label(), "Moderate heart disease");
    }

    #[test]
    fn test_each_trained_label_maps_to_its_string() {
        let expected = [
            (0, "No heart disease"),
            (1, "Mild heart disease"),
            (2, "Moderate heart disease"),
            (3, "Severe heart disease"),
            (4, "High-risk heart disease"),
        ];

        for (class, label) in expected {
            let artifact = constant_artifact(class);
            let result = run_inference(&artifact, &scenario_record()).unwrap();
            assert_eq!(result.label(), label);
        }
    }

    #[test]
    fn test_out_of_set_label_maps_to_unknown() {
        let artifact = constant_artifact(7);

        let result = run_inference(&artifact, &scenario_record()).unwrap();
        assert_eq!(result.label(), "Unknown");
    }

    #[test]
    fn test_inference_is_deterministic() {
        let artifact = constant_artifact(2);
        let record = scenario_record();

        let first = run_inference(&artifact, &record).unwrap();
        for _ in 0..10 {
            assert_eq!(run_inference(&artifact, &record).unwrap(), first);
        }
    }

    #[test]
    fn test_unseen_category_is_an_inference_error() {
        let artifact = constant_artifact(2);
        let mut record = scenario_record();
        record.exang = "false".to_owned();

        let err = run_inference(&artifact, &record).unwrap_err();
        assert!(matches!(err, PredictError::Inference { .. }));
    }
}
