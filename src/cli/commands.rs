//! CLI command definitions and handlers

use clap::Subcommand;
use std::io::{BufRead, Write};
use tracing::info;

use crate::core::client::Translator;
use crate::core::config::{ClientConfig, ENV_API_TOKEN, ENV_ENDPOINT, ENV_FOLDER_ID};
use crate::core::models::TranslationResponse;

/// Commands for ya-translate
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate texts given as arguments, or stdin lines when none are given
    Translate {
        /// Target language code, e.g. en, ru, de
        #[arg(short, long)]
        to: String,

        /// Print results as a JSON array
        #[arg(long)]
        json: bool,

        /// Texts to translate
        texts: Vec<String>,
    },

    /// Print the resolved configuration (credential redacted)
    ShowConfig,
}

/// Values given on the command line, taking precedence over the environment
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub api_key: Option<String>,
    pub folder_id: Option<String>,
    pub endpoint: Option<String>,
}

/// Resolve configuration from CLI overrides and the process environment
pub fn resolve_config(overrides: &ConfigOverrides) -> anyhow::Result<ClientConfig> {
    resolve_config_with(overrides, |key| std::env::var(key).ok())
}

/// Resolve configuration from CLI overrides and an arbitrary variable lookup
pub fn resolve_config_with<F>(overrides: &ConfigOverrides, lookup: F) -> anyhow::Result<ClientConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let config = ClientConfig::from_lookup(|key| {
        let overridden = match key {
            ENV_API_TOKEN => overrides.api_key.clone(),
            ENV_FOLDER_ID => overrides.folder_id.clone(),
            ENV_ENDPOINT => overrides.endpoint.clone(),
            _ => None,
        };
        overridden.or_else(|| lookup(key))
    })?;

    Ok(config)
}

/// Handle translate command
pub async fn handle_translate<W: Write>(
    translator: &dyn Translator,
    to: &str,
    texts: Vec<String>,
    json: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    let texts = if texts.is_empty() {
        read_lines(std::io::stdin().lock())?
    } else {
        texts
    };

    info!("Translating {} texts to {}", texts.len(), to);

    let results = translator.translate(to, &texts).await?;
    writeln!(out, "{}", render_results(&results, json)?)?;

    Ok(())
}

/// Handle show-config command
pub fn handle_show_config<W: Write>(config: &ClientConfig, out: &mut W) -> anyhow::Result<()> {
    writeln!(out, "{:#?}", config)?;
    Ok(())
}

/// Non-empty lines of `reader`, in order
pub fn read_lines<R: BufRead>(reader: R) -> anyhow::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

/// One translation per line, or a pretty JSON array
pub fn render_results(results: &[TranslationResponse], json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(results)?);
    }

    Ok(results
        .iter()
        .map(|r| r.text.as_str())
        .collect::<Vec<_>>()
        .join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::{Result, TranslationError};
    use async_trait::async_trait;
    use std::collections::HashMap;

    /// Upper-cases every input and reports it as English
    struct ShoutingTranslator;

    #[async_trait]
    impl Translator for ShoutingTranslator {
        async fn translate(
            &self,
            target_language_code: &str,
            texts: &[String],
        ) -> Result<Vec<TranslationResponse>> {
            if target_language_code.is_empty() {
                return Err(TranslationError::Remote {
                    status: 400,
                    body: "targetLanguageCode is required".to_string(),
                });
            }
            Ok(texts
                .iter()
                .map(|t| TranslationResponse {
                    text: t.to_uppercase(),
                    detected_language_code: "en".to_string(),
                })
                .collect())
        }
    }

    fn sample() -> Vec<TranslationResponse> {
        vec![
            TranslationResponse {
                text: "Hallo".to_string(),
                detected_language_code: "en".to_string(),
            },
            TranslationResponse {
                text: "Welt".to_string(),
                detected_language_code: "en".to_string(),
            },
        ]
    }

    #[test]
    fn test_render_plain() {
        assert_eq!(render_results(&sample(), false).unwrap(), "Hallo\nWelt");
    }

    #[test]
    fn test_render_json() {
        let rendered = render_results(&sample(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value[1]["text"], "Welt");
        assert_eq!(value[1]["detectedLanguageCode"], "en");
    }

    #[test]
    fn test_read_lines_skips_blank() {
        let input = "first\n\n  \nsecond\n";
        let lines = read_lines(input.as_bytes()).unwrap();
        assert_eq!(lines, vec!["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn test_overrides_win_over_environment() {
        let env: HashMap<&str, &str> = [
            (ENV_API_TOKEN, "from-env"),
            (ENV_FOLDER_ID, "env-folder"),
        ]
        .into_iter()
        .collect();

        let overrides = ConfigOverrides {
            api_key: Some("from-cli".to_string()),
            endpoint: Some("http://localhost:1234".to_string()),
            ..Default::default()
        };

        let config =
            resolve_config_with(&overrides, |key| env.get(key).map(|v| v.to_string())).unwrap();
        assert_eq!(config.credential, "from-cli");
        assert_eq!(config.folder_id, "env-folder");
        assert_eq!(config.endpoint, "http://localhost:1234");
    }

    #[test]
    fn test_resolve_without_token_fails() {
        let result = resolve_config_with(&ConfigOverrides::default(), |_| None);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_handle_translate_with_substitute_translator() {
        let mut out = Vec::new();
        handle_translate(
            &ShoutingTranslator,
            "en",
            vec!["hi".to_string(), "bye".to_string()],
            false,
            &mut out,
        )
        .await
        .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "HI\nBYE\n");
    }

    #[tokio::test]
    async fn test_handle_translate_propagates_errors() {
        let mut out = Vec::new();
        let result = handle_translate(
            &ShoutingTranslator,
            "",
            vec!["hi".to_string()],
            false,
            &mut out,
        )
        .await;

        let err = result.unwrap_err();
        assert!(err.to_string().contains("400"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_show_config_redacts_credential() {
        let mut out = Vec::new();
        handle_show_config(&ClientConfig::new("hidden-token", "b1g"), &mut out).unwrap();

        let rendered = String::from_utf8(out).unwrap();
        assert!(!rendered.contains("hidden-token"));
        assert!(rendered.contains("b1g"));
    }
}
