//! Localized newsletter payloads.
//!
//! The issue text is static content; the API picks one issue from the caller's
//! `Accept-Language` hint and appends a fixed verification hash.

mod issues;

pub use issues::{ENGLISH, FRENCH, SPANISH};

use serde::Serialize;

/// Fixed verification value appended to every newsletter response.
pub const VERIFICATION_HASH: &str =
    "sha256:7b9c1d0f8e3a2b1c4d5e6f7g8h9i0j1k2l3m4n5o6p7q8r9s0t1u2v3w4x5y6z7";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    English,
    Spanish,
    French,
}

impl Language {
    /// Pick a language from a free-form hint such as an `Accept-Language` header.
    ///
    /// Spanish wins if the hint mentions `es` anywhere, then French for `fr`;
    /// anything else (including no hint) is English.
    pub fn from_hint(hint: Option<&str>) -> Self {
        let Some(hint) = hint else {
            return Language::English;
        };
        let hint = hint.to_lowercase();
        if hint.contains("es") {
            Language::Spanish
        } else if hint.contains("fr") {
            Language::French
        } else {
            Language::English
        }
    }

    pub fn issue(self) -> &'static NewsletterIssue {
        match self {
            Language::English => &ENGLISH,
            Language::Spanish => &SPANISH,
            Language::French => &FRENCH,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Section {
    pub title: &'static str,
    pub content: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Debug, Serialize)]
pub struct NewsletterIssue {
    pub month: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub introduction: &'static str,
    pub sections: &'static [Section],
    pub citation: &'static str,
}

/// Body of `GET /api/newsletter`.
#[derive(Debug, Serialize)]
pub struct NewsletterResponse {
    #[serde(flatten)]
    pub issue: &'static NewsletterIssue,
    pub verification_hash: &'static str,
}

impl NewsletterResponse {
    pub fn for_hint(hint: Option<&str>) -> Self {
        Self {
            issue: Language::from_hint(hint).issue(),
            verification_hash: VERIFICATION_HASH,
        }
    }
}
