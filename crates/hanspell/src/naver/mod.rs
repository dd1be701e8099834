//! Naver speller backend
//!
//! - `client`: [`NaverSpellChecker`], the production [`SpellChecker`](crate::checker::SpellChecker)
//! - `response`: JSONP parsing
//! - `html`: markup rendering and word classification
//! - `chunk`: splitting input at the speller's length limit

pub mod chunk;
pub mod client;
pub mod html;
pub mod response;

pub use client::{NaverSpellChecker, extract_passport_key};
