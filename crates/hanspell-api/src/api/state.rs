//! API State Definition

use std::sync::Arc;

use hanspell::SpellChecker;

use crate::config::Config;
use crate::service::SpellcheckApiService;

/// Application State
///
/// State shared across the entire server.
/// Contains configuration and service. Nothing in it is mutated per request.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Spellcheck Service
  ///
  /// - Production: `SpellcheckApiService::from_config(&config)?`
  /// - Test: `SpellcheckApiService::new(Arc::new(StubSpellChecker))`
  pub service: SpellcheckApiService,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: SpellcheckApiService) -> Self {
    Self { config, service }
  }

  /// Creates a new AppState around a checker
  #[must_use]
  pub fn with_checker(config: Config, checker: Arc<dyn SpellChecker>) -> Self {
    Self::new(config, SpellcheckApiService::new(checker))
  }
}
