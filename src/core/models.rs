//! Wire models for the translate endpoint

use serde::{Deserialize, Serialize};

/// Outbound batch request, built fresh for every call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRequest {
    pub folder_id: String,
    pub texts: Vec<String>,
    pub target_language_code: String,
}

impl TranslationRequest {
    pub fn new(
        folder_id: impl Into<String>,
        texts: Vec<String>,
        target_language_code: impl Into<String>,
    ) -> Self {
        Self {
            folder_id: folder_id.into(),
            texts,
            target_language_code: target_language_code.into(),
        }
    }
}

/// One translated text.
///
/// Results come back in input order: entry `i` is the translation of input `i`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResponse {
    pub text: String,
    pub detected_language_code: String,
}

/// Body of a 200 response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateResponseBody {
    pub translations: Vec<TranslationResponse>,
}
