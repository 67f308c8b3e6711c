//! Mapping from raw classifier output to human-readable severity.

use serde::Serialize;

/// Heart-disease severity category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    NoDisease,
    Mild,
    Moderate,
    Severe,
    HighRisk,
    /// Classifier produced a label outside the trained set.
    Unknown,
}

impl Severity {
    /// Maps a raw class label to a severity category.
    ///
    /// Labels outside {0..=4} map to [`Severity::Unknown`] rather than
    /// failing: an unexpected label is a reportable outcome, not an error.
    #[must_use]
    pub const fn from_class(class: i64) -> Self {
        match class {
            0 => Self::NoDisease,
            1 => Self::Mild,
            2 => Self::Moderate,
            3 => Self::Severe,
            4 => Self::HighRisk,
            _ => Self::Unknown,
        }
    }

    /// Returns the human-readable label shown to the user.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NoDisease => "No heart disease",
            Self::Mild => "Mild heart disease",
            Self::Moderate => "Moderate heart disease",
            Self::Severe => "Severe heart disease",
            Self::HighRisk => "High-risk heart disease",
            Self::Unknown => "Unknown",
        }
    }
}

/// Outcome of a single prediction request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PredictionResult {
    /// Raw integer class label produced by the classifier.
    pub class: i64,
    /// Severity category derived from the class label.
    pub severity: Severity,
}

impl PredictionResult {
    /// Builds a result from a raw class label.
    #[must_use]
    pub const fn from_class(class: i64) -> Self {
        Self {
            class,
            severity: Severity::from_class(class),
        }
    }

    /// Human-readable severity label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.severity.label()
    }
}
