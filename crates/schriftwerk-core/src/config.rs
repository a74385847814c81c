// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration, read from the environment at startup.

use serde::{Deserialize, Serialize};

pub const ENV_LANGUAGETOOL_URL: &str = "SCHRIFTWERK_LANGUAGETOOL_URL";
pub const ENV_LANGUAGE: &str = "SCHRIFTWERK_LANGUAGE";
pub const ENV_GRAMMAR_TIMEOUT_SECS: &str = "SCHRIFTWERK_GRAMMAR_TIMEOUT_SECS";
pub const ENV_PAPER_SIZE: &str = "SCHRIFTWERK_PAPER_SIZE";

/// Runtime settings. Nothing is persisted between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the LanguageTool server (without the `/v2/check` path).
    pub languagetool_url: String,
    /// Language code sent with every grammar check, e.g. `en-US`.
    pub language: String,
    /// Request timeout for the grammar service, in seconds.
    pub grammar_timeout_secs: u64,
    /// Paper size for PDF conversion.
    pub paper_size: crate::PaperSize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            languagetool_url: "https://api.languagetool.org".into(),
            language: "en-US".into(),
            grammar_timeout_secs: 30,
            paper_size: crate::PaperSize::Letter,
        }
    }
}

impl AppConfig {
    /// Build the configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup. Missing, blank or
    /// unparsable values keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = non_blank(ENV_LANGUAGETOOL_URL) {
            config.languagetool_url = url.trim().to_string();
        }
        if let Some(language) = non_blank(ENV_LANGUAGE) {
            config.language = language.trim().to_string();
        }
        if let Some(secs) = non_blank(ENV_GRAMMAR_TIMEOUT_SECS).and_then(|v| v.trim().parse().ok()) {
            config.grammar_timeout_secs = secs;
        }
        if let Some(paper) = non_blank(ENV_PAPER_SIZE).and_then(|v| crate::PaperSize::from_name(&v)) {
            config.paper_size = paper;
        }

        config
    }
}
