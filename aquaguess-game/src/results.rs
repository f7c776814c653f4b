//! Precomputed regression results keyed by canonical feature subset.
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::FeatureCatalog;

/// Canonical feature-subset key: sorted, deduplicated feature names.
///
/// The derived `Ord` (lexicographic over the sorted names) makes keys usable
/// in a `BTreeMap` and gives the best-subset tie-break a stable order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct SubsetKey(Vec<String>);

impl SubsetKey {
    /// Canonicalize any collection of feature names into a key.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = names.into_iter().map(Into::into).collect();
        names.sort();
        names.dedup();
        Self(names)
    }

    /// The canonical member names, sorted.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.0
    }

    /// Whether `name` is a member of this subset.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.binary_search_by(|n| n.as_str().cmp(name)).is_ok()
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the subset has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SubsetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}

/// One precomputed fit: predicted series, observed series, and its error
/// metric. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub y_pred: Vec<f64>,
    pub y_true: Vec<f64>,
    pub rmse: f64,
}

/// One row of the raw results artifact, before canonicalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultEntry {
    pub features: Vec<String>,
    pub rmse: f64,
    #[serde(default)]
    pub y_true: Vec<f64>,
    #[serde(default)]
    pub y_pred: Vec<f64>,
}

/// The serialized results artifact as produced by the offline search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsArtifact {
    /// Name of the predicted column.
    pub target: String,
    /// Shared sample labels; every series in `entries` has this length.
    pub index: Vec<String>,
    pub entries: Vec<ResultEntry>,
}

/// Errors raised when the results artifact violates its invariants.
#[derive(Debug, Error)]
pub enum ResultsTableError {
    #[error("results artifact contains no entries")]
    Empty,
    #[error("duplicate feature subset: [{0}]")]
    DuplicateSubset(SubsetKey),
    #[error("{series} for [{key}] has {actual} samples, index has {expected}")]
    SeriesLengthMismatch {
        key: SubsetKey,
        series: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("error metric for [{key}] must be finite and non-negative (got {rmse})")]
    InvalidMetric { key: SubsetKey, rmse: f64 },
    #[error("subset [{key}] names unknown feature {feature:?}")]
    UnknownFeature { key: SubsetKey, feature: String },
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validated, immutable mapping from canonical subset key to its precomputed
/// record, with the best subset resolved at construction time. Built from a
/// [`ResultsArtifact`]; never deserialized directly, so every table in
/// circulation has passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsTable {
    target: String,
    index: Vec<String>,
    records: BTreeMap<SubsetKey, ResultRecord>,
    best: SubsetKey,
}

impl ResultsTable {
    /// Build a table from a raw artifact, validating every entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the artifact is empty, contains duplicate
    /// canonical keys, ragged series, or a non-finite or negative metric.
    pub fn from_artifact(artifact: ResultsArtifact) -> Result<Self, ResultsTableError> {
        let ResultsArtifact {
            target,
            index,
            entries,
        } = artifact;

        let mut records = BTreeMap::new();
        for entry in entries {
            let key = SubsetKey::new(entry.features);
            if !entry.rmse.is_finite() || entry.rmse < 0.0 {
                return Err(ResultsTableError::InvalidMetric {
                    key,
                    rmse: entry.rmse,
                });
            }
            for (series, values) in [("y_true", &entry.y_true), ("y_pred", &entry.y_pred)] {
                if values.len() != index.len() {
                    return Err(ResultsTableError::SeriesLengthMismatch {
                        key,
                        series,
                        expected: index.len(),
                        actual: values.len(),
                    });
                }
            }
            let record = ResultRecord {
                y_pred: entry.y_pred,
                y_true: entry.y_true,
                rmse: entry.rmse,
            };
            if records.insert(key.clone(), record).is_some() {
                return Err(ResultsTableError::DuplicateSubset(key));
            }
        }

        let best = find_best(&records).ok_or(ResultsTableError::Empty)?;
        Ok(Self {
            target,
            index,
            records,
            best,
        })
    }

    /// Parse and validate a table from the artifact's JSON form.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the artifact invalid.
    pub fn from_json(json: &str) -> Result<Self, ResultsTableError> {
        let artifact: ResultsArtifact = serde_json::from_str(json)?;
        Self::from_artifact(artifact)
    }

    /// Check that every subset only names features present in `catalog`.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first unknown feature encountered.
    pub fn validate_against(&self, catalog: &FeatureCatalog) -> Result<(), ResultsTableError> {
        for key in self.records.keys() {
            if let Some(feature) = key.names().iter().find(|name| !catalog.contains(name)) {
                return Err(ResultsTableError::UnknownFeature {
                    key: key.clone(),
                    feature: feature.clone(),
                });
            }
        }
        Ok(())
    }

    /// Name of the predicted column.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Shared sample labels for all series.
    #[must_use]
    pub fn index(&self) -> &[String] {
        &self.index
    }

    /// Look up the record for a canonical key.
    #[must_use]
    pub fn get(&self, key: &SubsetKey) -> Option<&ResultRecord> {
        self.records.get(key)
    }

    /// Whether `key` has a precomputed record.
    #[must_use]
    pub fn contains(&self, key: &SubsetKey) -> bool {
        self.records.contains_key(key)
    }

    /// The subset with minimum error metric. Ties resolve to the
    /// lexicographically smallest key.
    #[must_use]
    pub fn best_subset(&self) -> &SubsetKey {
        &self.best
    }

    /// The record behind [`Self::best_subset`].
    #[must_use]
    pub fn best_record(&self) -> &ResultRecord {
        // The best key always comes out of `records` itself.
        &self.records[&self.best]
    }

    /// Number of precomputed subsets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no records. Construction rejects empty
    /// artifacts, so this is false for any table built through the API.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in canonical key order.
    pub fn iter(&self) -> impl Iterator<Item = (&SubsetKey, &ResultRecord)> {
        self.records.iter()
    }
}

/// Scan in key order with a strict comparison so equal metrics keep the
/// lexicographically smallest key.
fn find_best(records: &BTreeMap<SubsetKey, ResultRecord>) -> Option<SubsetKey> {
    let mut best: Option<(&SubsetKey, f64)> = None;
    for (key, record) in records {
        match best {
            Some((_, rmse)) if record.rmse >= rmse => {}
            _ => best = Some((key, record.rmse)),
        }
    }
    best.map(|(key, _)| key.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(features: &[&str], rmse: f64, samples: usize) -> ResultEntry {
        ResultEntry {
            features: features.iter().map(ToString::to_string).collect(),
            rmse,
            y_true: vec![5.0; samples],
            y_pred: vec![5.5; samples],
        }
    }

    fn artifact(entries: Vec<ResultEntry>) -> ResultsArtifact {
        ResultsArtifact {
            target: String::from("DOC (mg/l)"),
            index: vec![String::from("2021-01"), String::from("2021-02")],
            entries,
        }
    }

    #[test]
    fn subset_key_canonicalizes_order_and_duplicates() {
        let key = SubsetKey::new(["pH", "Month", "pH", "Conductivity"]);
        assert_eq!(key.names(), ["Conductivity", "Month", "pH"]);
        assert_eq!(key, SubsetKey::new(["Month", "Conductivity", "pH"]));
        assert!(key.contains("Month"));
        assert!(!key.contains("Year"));
        assert_eq!(key.to_string(), "Conductivity, Month, pH");
    }

    #[test]
    fn table_resolves_best_by_minimum_metric() {
        let table = ResultsTable::from_artifact(artifact(vec![
            entry(&["pH"], 1.2, 2),
            entry(&["Month", "pH"], 0.4, 2),
            entry(&["Month"], 0.9, 2),
        ]))
        .unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(*table.best_subset(), SubsetKey::new(["Month", "pH"]));
        assert!((table.best_record().rmse - 0.4).abs() < f64::EPSILON);
        for (_, record) in table.iter() {
            assert!(table.best_record().rmse <= record.rmse);
        }
    }

    #[test]
    fn best_tie_breaks_to_lexicographically_smallest_key() {
        let table = ResultsTable::from_artifact(artifact(vec![
            entry(&["pH"], 0.5, 2),
            entry(&["Month"], 0.5, 2),
            entry(&["Conductivity", "pH"], 0.5, 2),
        ]))
        .unwrap();
        assert_eq!(*table.best_subset(), SubsetKey::new(["Conductivity", "pH"]));
    }

    #[test]
    fn empty_artifact_is_rejected() {
        let err = ResultsTable::from_artifact(artifact(Vec::new())).unwrap_err();
        assert!(matches!(err, ResultsTableError::Empty));
    }

    #[test]
    fn duplicate_canonical_keys_are_rejected() {
        let err = ResultsTable::from_artifact(artifact(vec![
            entry(&["pH", "Month"], 0.5, 2),
            entry(&["Month", "pH"], 0.6, 2),
        ]))
        .unwrap_err();
        assert!(matches!(err, ResultsTableError::DuplicateSubset(_)));
    }

    #[test]
    fn ragged_series_are_rejected() {
        let err =
            ResultsTable::from_artifact(artifact(vec![entry(&["pH"], 0.5, 3)])).unwrap_err();
        assert!(matches!(
            err,
            ResultsTableError::SeriesLengthMismatch {
                expected: 2,
                actual: 3,
                ..
            }
        ));
    }

    #[test]
    fn negative_and_non_finite_metrics_are_rejected() {
        for rmse in [-0.1, f64::NAN, f64::INFINITY] {
            let err =
                ResultsTable::from_artifact(artifact(vec![entry(&["pH"], rmse, 2)])).unwrap_err();
            assert!(matches!(err, ResultsTableError::InvalidMetric { .. }));
        }
    }

    #[test]
    fn validate_against_rejects_unknown_features() {
        let table =
            ResultsTable::from_artifact(artifact(vec![entry(&["pH", "Salinity"], 0.5, 2)]))
                .unwrap();
        let catalog = FeatureCatalog {
            target: String::from("DOC (mg/l)"),
            features: vec![String::from("pH"), String::from("Month")],
        };
        let err = table.validate_against(&catalog).unwrap_err();
        assert!(matches!(
            err,
            ResultsTableError::UnknownFeature { feature, .. } if feature == "Salinity"
        ));
    }

    #[test]
    fn table_parses_from_json() {
        let json = r#"{
            "target": "DOC (mg/l)",
            "index": ["2021-01", "2021-02"],
            "entries": [
                {
                    "features": ["pH"],
                    "rmse": 0.8,
                    "y_true": [5.1, 5.3],
                    "y_pred": [4.9, 5.6]
                }
            ]
        }"#;
        let table = ResultsTable::from_json(json).unwrap();
        assert_eq!(table.target(), "DOC (mg/l)");
        assert_eq!(table.index().len(), 2);
        assert!(table.contains(&SubsetKey::new(["pH"])));
        assert!(!table.contains(&SubsetKey::new(["Month"])));
    }
}
