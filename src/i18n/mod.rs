// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation module for the Aura display.
//!
//! ## Supported languages
//!
//! | Ordinal | Code | Language | Native name |
//! |---------|------|----------|-------------|
//! | 0       | en   | English  | English     |
//! | 1       | es   | Spanish  | Español     |
//! | 2       | de   | German   | Deutsch     |
//! | 3       | fr   | French   | Français    |
//! | 4       | tr   | Turkish  | Türkçe      |
//! | 5       | sv   | Swedish  | Svenska     |
//! | 6       | it   | Italian  | Italiano    |
//!
//! ## Design
//!
//! Each language owns one complete [`LocalizedStrings`] bundle. There is no
//! per-key fallback: a bundle either exists for a language or the whole
//! English bundle is used instead. Ordinals are persisted by the settings
//! layer, so their order is fixed; new languages are appended.
//!
//! The bundles are `static` data — no file I/O, no allocation, no locking
//! during lookups.

mod language;
mod strings;
mod tables;

pub use language::Language;
pub use strings::{ColorScheme, LocalizedStrings};
pub use tables::{bundles, get_strings, strings_for_ordinal};
