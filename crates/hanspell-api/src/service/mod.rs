//! Service module

mod spellcheck_api_service;

pub use spellcheck_api_service::SpellcheckApiService;
