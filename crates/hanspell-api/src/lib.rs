//! hanspell-api crate
//!
//! Web server providing Korean spellcheck as HTTP API.
//!
//! ## Endpoints
//! - `POST /check` - Spellcheck (form-urlencoded `text`)
//! - `GET /health` - Health Check
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:5000/check \
//!   --data-urlencode "text=나는 밥을먹었다"
//! ```
//!
//! ```json
//! {"corrected":"나는 밥을 먹었다","original":"나는 밥을먹었다","result":{"errata_count":1}}
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::ApiError;
pub use models::{CheckOutcome, CheckRequest, CorrectedResponse, DegradedResponse};
pub use service::SpellcheckApiService;
