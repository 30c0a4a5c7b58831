// SPDX-License-Identifier: PMPL-1.0-or-later

//! Rendering and export of string bundles and glyph reports

pub mod export;
pub mod formatter;
pub mod output;

use crate::i18n::{get_strings, Language, LocalizedStrings};
use serde::Serialize;

pub use export::export_bundles;
pub use formatter::TextFormatter;
pub use output::OutputFormat;

/// A bundle together with the language metadata it belongs to.
#[derive(Debug, Clone, Serialize)]
pub struct BundleDocument {
    pub language: Language,
    pub ordinal: u8,
    pub name: &'static str,
    pub native_name: &'static str,
    pub strings: &'static LocalizedStrings,
}

impl BundleDocument {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ordinal: language.ordinal(),
            name: language.english_name(),
            native_name: language.native_name(),
            strings: get_strings(language),
        }
    }
}

/// Print the supported-language table to stdout
pub fn print_languages() {
    print!("{}", TextFormatter::new().languages());
}
