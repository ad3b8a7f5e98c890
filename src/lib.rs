//! ya-translate - minimal client for the Yandex Cloud Translate batch API
//!
//! One call translates a batch of texts into a target language and reports
//! the detected source language of each input.

#![forbid(unsafe_code)]

pub mod cli;
pub mod core;

// Re-export key types for convenience
pub use core::{
    client::{TranslationClient, Translator},
    config::{ClientConfig, DEFAULT_ENDPOINT},
    errors::{Result, TranslationError},
    models::{TranslateResponseBody, TranslationRequest, TranslationResponse},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
