use serde::{Deserialize, Serialize};

/// Schema of the cleaned measurement dataset: the predicted column plus the
/// candidate feature columns the player can pick from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FeatureCatalog {
    /// Name of the column the precomputed models predict.
    pub target: String,
    /// Candidate feature column names, in dataset order.
    #[serde(default)]
    pub features: Vec<String>,
}

impl FeatureCatalog {
    /// Create an empty catalog (useful for tests)
    #[must_use]
    pub fn empty() -> Self {
        Self {
            target: String::new(),
            features: Vec::new(),
        }
    }

    /// Load a catalog from JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into a valid catalog.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Candidate features sorted alphabetically. Checkbox ordering in the UI.
    #[must_use]
    pub fn sorted_features(&self) -> Vec<String> {
        let mut features = self.features.clone();
        features.sort();
        features
    }

    /// Whether `name` is a known candidate feature.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.features.iter().any(|f| f == name)
    }

    /// Number of candidate features.
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether the catalog has no candidate features.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
