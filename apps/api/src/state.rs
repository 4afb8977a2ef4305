use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::analysis::skill_extractor::{KeywordSkillExtractor, SkillExtractor};
use crate::catalog::Catalog;
use crate::config::Config;
use crate::random::{RandomSource, SeededRandom, ThreadRandom};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Immutable mock-data tables.
    pub catalog: Arc<Catalog>,
    /// Pluggable skill extractor. Default: KeywordSkillExtractor.
    pub skill_extractor: Arc<dyn SkillExtractor>,
    /// Source for placeholder values (confidence scores, phone numbers).
    pub rng: Arc<dyn RandomSource>,
}

impl AppState {
    /// Builds state from config: loads the catalog file if one is configured
    /// and seeds the random source if `RNG_SEED` is set.
    pub fn from_config(config: Config) -> Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => {
                let catalog = Catalog::load(path)?;
                info!("Catalog loaded from {}", path.display());
                catalog
            }
            None => Catalog::builtin(),
        };

        let rng: Arc<dyn RandomSource> = match config.rng_seed {
            Some(seed) => {
                info!(seed, "Mock randomness seeded");
                Arc::new(SeededRandom::new(seed))
            }
            None => Arc::new(ThreadRandom),
        };

        Ok(Self::new(config, catalog, rng))
    }

    pub fn new(config: Config, catalog: Catalog, rng: Arc<dyn RandomSource>) -> Self {
        let catalog = Arc::new(catalog);
        let skill_extractor: Arc<dyn SkillExtractor> =
            Arc::new(KeywordSkillExtractor::new(catalog.clone(), rng.clone()));
        Self {
            config,
            catalog,
            skill_extractor,
            rng,
        }
    }
}

#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    AppState::new(
        Config::default(),
        Catalog::builtin(),
        Arc::new(SeededRandom::new(7)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_defaults_to_builtin_catalog() {
        let state = AppState::from_config(Config::default()).unwrap();
        assert_eq!(*state.catalog, Catalog::builtin());
    }

    #[test]
    fn test_from_config_fails_on_missing_catalog_file() {
        let config = Config {
            catalog_path: Some("/definitely/not/here.json".into()),
            ..Config::default()
        };
        assert!(AppState::from_config(config).is_err());
    }

    #[test]
    fn test_seeded_state_extracts_deterministically() {
        let config = Config {
            rng_seed: Some(99),
            ..Config::default()
        };
        let a = AppState::from_config(config.clone()).unwrap();
        let b = AppState::from_config(config).unwrap();
        let text = "python docker aws";
        assert_eq!(a.skill_extractor.extract(text), b.skill_extractor.extract(text));
    }
}
