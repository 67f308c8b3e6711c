//! Linear multi-class classifier over transformed features.

use serde::{Deserialize, Serialize};

/// Trained linear classifier: one weight vector and intercept per class.
///
/// Decision rule is argmax over `intercept_c + w_c . x`; ties break toward
/// the earlier class, which keeps the output stable for identical inputs.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LinearClassifier {
    /// Class labels, aligned with `weights` and `intercepts`.
    pub classes: Vec<i64>,
    /// Per-class weight vectors over the transformed feature space.
    pub weights: Vec<Vec<f64>>,
    /// Per-class intercepts.
    pub intercepts: Vec<f64>,
}

impl LinearClassifier {
    /// Classifies a transformed feature vector into a raw class label.
    #[must_use]
    pub fn classify(&self, features: &[f64]) -> i64 {
        let mut best_class = 0;
        let mut best_score = f64::NEG_INFINITY;

        for (idx, class) in self.classes.iter().enumerate() {
            let weights = &self.weights[idx];
            let score: f64 = self.intercepts[idx]
                + weights.iter().zip(features).map(|(w, x)| w * x).sum::<f64>();

            if score > best_score {
                best_score = score;
                best_class = *class;
            }
        }

        best_class
    }
}
