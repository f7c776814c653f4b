//! AquaGuess Game Engine
//!
//! Platform-agnostic core logic for the AquaGuess feature-guessing demo.
//! This crate provides the data model, the precomputed-results table, and
//! the session state machine without UI or platform-specific dependencies.

pub mod catalog;
pub mod numbers;
pub mod results;
pub mod session;

// Re-export commonly used types
pub use catalog::FeatureCatalog;
pub use numbers::{format_metric, joint_extent, series_extent};
pub use results::{
    ResultEntry, ResultRecord, ResultsArtifact, ResultsTable, ResultsTableError, SubsetKey,
};
pub use session::{
    GuessSession, IgnoreReason, STARTING_ATTEMPTS, SessionPhase, SubmitOutcome, Verdict,
};

/// Trait for abstracting data loading operations
/// Platform-specific implementations should provide this
pub trait DataLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the feature catalog from the platform-specific source
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded or parsed.
    fn load_feature_catalog(&self) -> Result<FeatureCatalog, Self::Error>;

    /// Load and validate the precomputed results table
    ///
    /// # Errors
    ///
    /// Returns an error if the artifact cannot be loaded, parsed, or fails
    /// validation.
    fn load_results_table(&self) -> Result<ResultsTable, Self::Error>;
}

/// One playable round: the immutable catalog and results table a session
/// plays against. Shared read-only across sessions.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRound {
    catalog: FeatureCatalog,
    table: ResultsTable,
}

impl GameRound {
    /// Bind a catalog to a validated results table, cross-checking that
    /// every precomputed subset only names cataloged features.
    ///
    /// # Errors
    ///
    /// Returns an error if a subset references a feature missing from the
    /// catalog.
    pub fn new(catalog: FeatureCatalog, table: ResultsTable) -> Result<Self, ResultsTableError> {
        table.validate_against(&catalog)?;
        Ok(Self { catalog, table })
    }

    /// The feature catalog.
    #[must_use]
    pub const fn catalog(&self) -> &FeatureCatalog {
        &self.catalog
    }

    /// The precomputed results table.
    #[must_use]
    pub const fn table(&self) -> &ResultsTable {
        &self.table
    }

    /// Start a fresh session against this round.
    #[must_use]
    pub fn start_session(&self) -> GuessSession {
        GuessSession::new()
    }
}

/// Main engine assembling playable rounds from a data loader
pub struct GuessEngine<L>
where
    L: DataLoader,
{
    loader: L,
}

impl<L> GuessEngine<L>
where
    L: DataLoader,
{
    /// Create a new engine with the provided data loader
    pub const fn new(loader: L) -> Self {
        Self { loader }
    }

    /// Load both artifacts and assemble a validated round.
    ///
    /// # Errors
    ///
    /// Returns an error if either artifact fails to load or the table does
    /// not match the catalog.
    pub fn load_round(&self) -> Result<GameRound, anyhow::Error>
    where
        L::Error: Into<anyhow::Error>,
    {
        let catalog = self.loader.load_feature_catalog().map_err(Into::into)?;
        let table = self.loader.load_results_table().map_err(Into::into)?;
        Ok(GameRound::new(catalog, table)?)
    }
}
