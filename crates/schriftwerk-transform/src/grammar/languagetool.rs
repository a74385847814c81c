// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// LanguageTool HTTP client.
//
// Posts the text to `{base_url}/v2/check` as a form and decodes the JSON list
// of matches. The call blocks until the server answers or the timeout fires.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use schriftwerk_core::AppConfig;
use schriftwerk_core::error::{Result, SchriftwerkError};
use tracing::{debug, info, instrument};

use super::{GrammarChecker, GrammarMatch};

/// Client for a LanguageTool server, public or self-hosted.
#[derive(Debug)]
pub struct LanguageToolClient {
    /// Base URL of the server, without a trailing slash.
    base_url: String,
    /// Language code such as `en-US`.
    language: String,
    client: Client,
}

/// Response body of `/v2/check`. Fields we do not use are ignored.
#[derive(Debug, Deserialize)]
struct CheckResponse {
    matches: Vec<ApiMatch>,
}

#[derive(Debug, Deserialize)]
struct ApiMatch {
    #[serde(default)]
    message: String,
    offset: usize,
    length: usize,
    #[serde(default)]
    replacements: Vec<ApiReplacement>,
    #[serde(default)]
    rule: Option<ApiRule>,
}

#[derive(Debug, Deserialize)]
struct ApiReplacement {
    value: String,
}

#[derive(Debug, Deserialize)]
struct ApiRule {
    id: String,
}

impl From<ApiMatch> for GrammarMatch {
    fn from(m: ApiMatch) -> Self {
        Self {
            offset: m.offset,
            length: m.length,
            replacements: m.replacements.into_iter().map(|r| r.value).collect(),
            message: m.message,
            rule_id: m.rule.map(|r| r.id),
        }
    }
}

impl LanguageToolClient {
    pub fn new(
        base_url: impl Into<String>,
        language: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| SchriftwerkError::GrammarService(format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            language: language.into(),
            client,
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(
            config.languagetool_url.clone(),
            config.language.clone(),
            Duration::from_secs(config.grammar_timeout_secs),
        )
    }

    /// Full URL of the check endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/v2/check", self.base_url)
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

impl GrammarChecker for LanguageToolClient {
    #[instrument(skip(self, text), fields(text_len = text.len(), language = %self.language))]
    fn check(&self, text: &str) -> Result<Vec<GrammarMatch>> {
        let endpoint = self.endpoint();
        info!(%endpoint, "Requesting grammar check");

        let response = self
            .client
            .post(&endpoint)
            .form(&[("text", text), ("language", self.language.as_str())])
            .send()
            .map_err(|err| SchriftwerkError::GrammarService(format!("request failed: {err}")))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|err| SchriftwerkError::GrammarService(format!("failed to read response: {err}")))?;

        if !status.is_success() {
            return Err(SchriftwerkError::GrammarService(format!(
                "server responded with {status}: {}",
                body.trim()
            )));
        }

        let matches = parse_check_response(&body)?;
        debug!(matches = matches.len(), "Grammar response decoded");
        Ok(matches)
    }
}

/// Decode a `/v2/check` response body into matches.
pub fn parse_check_response(body: &str) -> Result<Vec<GrammarMatch>> {
    let response: CheckResponse = serde_json::from_str(body)?;
    Ok(response.matches.into_iter().map(GrammarMatch::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "software": {"name": "LanguageTool", "version": "6.4"},
        "language": {"name": "English (US)", "code": "en-US"},
        "matches": [
            {
                "message": "Possible spelling mistake found.",
                "shortMessage": "Spelling mistake",
                "offset": 10,
                "length": 5,
                "replacements": [{"value": "simple"}, {"value": "sample"}],
                "context": {"text": "This is a smple test.", "offset": 10, "length": 5},
                "rule": {"id": "MORFOLOGIK_RULE_EN_US", "description": "Possible spelling mistake"}
            },
            {
                "message": "Consider a shorter alternative.",
                "offset": 0,
                "length": 4,
                "replacements": []
            }
        ]
    }"#;

    #[test]
    fn decodes_matches_and_replacements() {
        let matches = parse_check_response(SAMPLE).unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].offset, 10);
        assert_eq!(matches[0].length, 5);
        assert_eq!(matches[0].replacements, vec!["simple", "sample"]);
        assert_eq!(matches[0].rule_id.as_deref(), Some("MORFOLOGIK_RULE_EN_US"));
        assert!(matches[1].replacements.is_empty());
        assert_eq!(matches[1].rule_id, None);
    }

    #[test]
    fn decoded_matches_correct_the_text() {
        let matches = parse_check_response(SAMPLE).unwrap();
        assert_eq!(
            super::super::apply_corrections("This is a smple test.", &matches),
            "This is a simple test."
        );
    }

    #[test]
    fn malformed_body_is_a_serialization_error() {
        let err = parse_check_response("<html>busy</html>").unwrap_err();
        assert!(matches!(err, SchriftwerkError::Serialization(_)));
    }

    #[test]
    fn endpoint_drops_trailing_slash() {
        let client =
            LanguageToolClient::new("http://localhost:8081/", "en-US", Duration::from_secs(1))
                .unwrap();
        assert_eq!(client.endpoint(), "http://localhost:8081/v2/check");
        assert_eq!(client.language(), "en-US");
    }

    #[test]
    fn config_supplies_url_and_language() {
        let config = AppConfig {
            languagetool_url: "http://lt.internal".into(),
            language: "en-GB".into(),
            ..AppConfig::default()
        };
        let client = LanguageToolClient::from_config(&config).unwrap();
        assert_eq!(client.endpoint(), "http://lt.internal/v2/check");
        assert_eq!(client.language(), "en-GB");
    }

    #[test]
    fn unreachable_server_is_a_grammar_service_error() {
        // Port 9 (discard) on localhost is closed on any sane test machine.
        let client =
            LanguageToolClient::new("http://127.0.0.1:9", "en-US", Duration::from_secs(2)).unwrap();
        let err = client.check("some text").unwrap_err();
        assert!(matches!(err, SchriftwerkError::GrammarService(_)));
    }
}
