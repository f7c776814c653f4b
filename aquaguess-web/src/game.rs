//! Web-specific data loading
//!
//! This module provides the web implementation of the aquaguess-game
//! `DataLoader` trait and re-exports the core game logic types.

// Re-export all types from aquaguess-game
pub use aquaguess_game::*;

/// Web-specific data loader reading the embedded static assets
pub struct WebDataLoader;

#[derive(Debug, thiserror::Error)]
pub enum WebDataError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid results artifact: {0}")]
    Artifact(#[from] aquaguess_game::ResultsTableError),
}

impl DataLoader for WebDataLoader {
    type Error = WebDataError;

    fn load_feature_catalog(&self) -> Result<FeatureCatalog, Self::Error> {
        let json = include_str!("../static/assets/data/features.json");
        FeatureCatalog::from_json(json).map_err(WebDataError::Json)
    }

    fn load_results_table(&self) -> Result<ResultsTable, Self::Error> {
        let json = include_str!("../static/assets/data/results.json");
        ResultsTable::from_json(json).map_err(WebDataError::Artifact)
    }
}

/// Create a web-compatible engine backed by `WebDataLoader`
#[must_use]
pub const fn create_web_engine() -> GuessEngine<WebDataLoader> {
    GuessEngine::new(WebDataLoader)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_assets_load_into_a_round() {
        let round = create_web_engine().load_round().expect("embedded assets");
        assert_eq!(round.catalog().target, "DOC (mg/l)");
        assert!(round.table().len() >= 2);
        assert!(round.table().contains(round.table().best_subset()));
    }

    #[test]
    fn loader_yields_matching_target_names() {
        let loader = WebDataLoader;
        let catalog = loader.load_feature_catalog().unwrap();
        let table = loader.load_results_table().unwrap();
        assert_eq!(catalog.target, table.target());
    }
}
