// SPDX-License-Identifier: PMPL-1.0-or-later

//! Aura Strings — localised UI text for the Aura weather display.
//!
//! The display renders every label, prompt and instruction from one of
//! seven compiled-in string bundles. This crate owns those bundles and the
//! selector that maps a language to its bundle.
//!
//! PILLARS:
//! 1. **i18n**: the `Language` enumeration, the fixed-shape
//!    `LocalizedStrings` bundle and the static lookup table.
//! 2. **Glyphs**: non-ASCII character analysis over the table, used to
//!    generate bitmap fonts that can actually draw every translation.
//! 3. **Diagnostics**: self-checks of the table's invariants.

/// Name of the temporary Wi-Fi access point broadcast during setup.
///
/// Expands to a string literal so it can be spliced into the translated
/// instructions with `concat!`. Every bundle's setup and reset text is
/// built from this macro, so renaming the access point here renames it in
/// all languages.
#[macro_export]
macro_rules! captive_ssid {
    () => {
        "Aura"
    };
}

/// The access point name as a constant, for callers outside the tables.
pub const DEFAULT_CAPTIVE_SSID: &str = captive_ssid!();

pub mod diagnostics;
pub mod glyphs;
pub mod i18n;
pub mod report;
