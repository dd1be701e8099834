//! モデルモジュール

mod request;
mod response;

pub use request::CheckRequest;
pub use response::{CheckOutcome, CorrectedResponse, DegradedResponse, ErrataSummary};
