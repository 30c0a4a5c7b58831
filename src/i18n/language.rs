// SPDX-License-Identifier: PMPL-1.0-or-later

//! Supported display languages and their ISO 639-1 metadata.

use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Languages the display can render.
///
/// The discriminant is the ordinal the settings layer persists, and the
/// index into the bundle table. Never reorder variants; append new ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Language {
    En = 0,
    Es = 1,
    De = 2,
    Fr = 3,
    Tr = 4,
    Sv = 5,
    It = 6,
}

impl Language {
    /// All supported languages, in ordinal order.
    pub fn all() -> &'static [Language] {
        &[
            Language::En,
            Language::Es,
            Language::De,
            Language::Fr,
            Language::Tr,
            Language::Sv,
            Language::It,
        ]
    }

    /// Position of this language in the bundle table.
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Decode a persisted ordinal. Returns `None` outside `0..=6`.
    pub fn from_ordinal(raw: i64) -> Option<Language> {
        usize::try_from(raw)
            .ok()
            .and_then(|index| Language::all().get(index).copied())
    }

    /// Decode a persisted ordinal, falling back to English.
    ///
    /// Settings written by older firmware or damaged flash can hold any
    /// integer; the display must still come up with readable text.
    pub fn from_ordinal_lossy(raw: i64) -> Language {
        match Language::from_ordinal(raw) {
            Some(lang) => lang,
            None => {
                log::warn!("unknown language ordinal {raw}, falling back to English");
                Language::En
            }
        }
    }

    /// ISO 639-1 two-letter code.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::De => "de",
            Language::Fr => "fr",
            Language::Tr => "tr",
            Language::Sv => "sv",
            Language::It => "it",
        }
    }

    /// Parse an ISO 639-1 code. Case-sensitive, lowercase only.
    pub fn from_code(code: &str) -> Option<Language> {
        Language::all().iter().copied().find(|lang| lang.code() == code)
    }

    pub fn english_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Spanish",
            Language::De => "German",
            Language::Fr => "French",
            Language::Tr => "Turkish",
            Language::Sv => "Swedish",
            Language::It => "Italian",
        }
    }

    /// Name of the language written in itself, for the language picker.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Español",
            Language::De => "Deutsch",
            Language::Fr => "Français",
            Language::Tr => "Türkçe",
            Language::Sv => "Svenska",
            Language::It => "Italiano",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Accepts an ISO code, English name or native name, ignoring case.
impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim().to_lowercase();
        Language::all()
            .iter()
            .copied()
            .find(|lang| {
                lang.code() == needle
                    || lang.english_name().to_lowercase() == needle
                    || lang.native_name().to_lowercase() == needle
            })
            .ok_or_else(|| {
                let known: Vec<&str> = Language::all().iter().map(|l| l.code()).collect();
                anyhow!(
                    "unsupported language '{}' (expected one of: {})",
                    value,
                    known.join(", ")
                )
            })
    }
}
