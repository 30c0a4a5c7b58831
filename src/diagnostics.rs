// SPDX-License-Identifier: PMPL-1.0-or-later

//! Self-checks over the compiled-in string tables.

use crate::glyphs::GlyphReport;
use crate::i18n::{bundles, get_strings, strings_for_ordinal, Language};
use crate::DEFAULT_CAPTIVE_SSID;
use anyhow::{anyhow, Result};

/// Identical-to-English values with fewer letters than this are not
/// flagged; "am", "24hr:" and "Wi-Fi" are legitimately shared.
const UNTRANSLATED_MIN_LETTERS: usize = 5;

/// Fields allowed to be empty (German formats hours without a suffix).
const EMPTY_ALLOWED: &[(Language, &str)] = &[(Language::De, "am"), (Language::De, "pm")];

pub fn run_self_diagnostics(font_chars: &str) -> Result<()> {
    println!("aura-strings self-diagnostics");

    let checks = collect_checks(font_chars);

    println!();
    for entry in &checks {
        entry.print();
    }

    if checks.iter().any(|entry| entry.level == Level::Error) {
        Err(anyhow!("self-diagnostics reported issues"))
    } else {
        Ok(())
    }
}

/// Run every check without printing.
pub fn collect_checks(font_chars: &str) -> Vec<Diagnostic> {
    let mut checks = Vec::new();
    checks.push(Diagnostic::ok(
        "version",
        format!("aura-strings {}", env!("CARGO_PKG_VERSION")),
    ));
    checks.push(check_dispatch());
    checks.push(check_fallback());
    for lang in Language::all() {
        checks.push(check_access_point(*lang));
    }
    checks.extend(check_empty_fields());
    checks.extend(check_untranslated());
    checks.push(check_font_coverage(font_chars));
    checks
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Ok,
    Warn,
    Error,
}

impl Level {
    fn tag(&self) -> &'static str {
        match self {
            Level::Ok => "OK",
            Level::Warn => "WARN",
            Level::Error => "ERR",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub label: String,
    pub level: Level,
    pub detail: String,
}

impl Diagnostic {
    fn new(label: impl Into<String>, level: Level, detail: String) -> Self {
        Self {
            label: label.into(),
            level,
            detail,
        }
    }

    fn ok(label: impl Into<String>, detail: String) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn warning(label: impl Into<String>, detail: String) -> Self {
        Self::new(label, Level::Warn, detail)
    }

    fn error(label: impl Into<String>, detail: String) -> Self {
        Self::new(label, Level::Error, detail)
    }

    fn print(&self) {
        println!("  [{}] {:22} {}", self.level.tag(), self.label, self.detail);
    }
}

fn check_dispatch() -> Diagnostic {
    let misrouted: Vec<String> = bundles()
        .filter(|(lang, strings)| {
            !std::ptr::eq(*strings, strings_for_ordinal(lang.ordinal() as i64))
        })
        .map(|(lang, _)| lang.to_string())
        .collect();

    if misrouted.is_empty() {
        Diagnostic::ok(
            "dispatch",
            format!("{} languages map to their own bundle", Language::all().len()),
        )
    } else {
        Diagnostic::error(
            "dispatch",
            format!("ordinal lookup disagrees for: {}", misrouted.join(", ")),
        )
    }
}

fn check_fallback() -> Diagnostic {
    let base = get_strings(Language::En);
    let probe = Language::all().len() as i64;
    if std::ptr::eq(strings_for_ordinal(probe), base) && std::ptr::eq(strings_for_ordinal(-1), base)
    {
        Diagnostic::ok("fallback", "out-of-range ordinals resolve to en".to_string())
    } else {
        Diagnostic::error(
            "fallback",
            "out-of-range ordinals do not resolve to en".to_string(),
        )
    }
}

fn check_access_point(lang: Language) -> Diagnostic {
    let strings = get_strings(lang);
    let label = format!("access point ({})", lang);
    let missing: Vec<&str> = [
        ("wifi_config", strings.wifi_config),
        ("reset_confirmation", strings.reset_confirmation),
    ]
    .iter()
    .filter(|(_, text)| !text.contains(DEFAULT_CAPTIVE_SSID))
    .map(|(name, _)| *name)
    .collect();

    if missing.is_empty() {
        Diagnostic::ok(label, format!("\"{}\" named in setup and reset text", DEFAULT_CAPTIVE_SSID))
    } else {
        Diagnostic::error(
            label,
            format!("\"{}\" missing from {}", DEFAULT_CAPTIVE_SSID, missing.join(", ")),
        )
    }
}

fn check_empty_fields() -> Vec<Diagnostic> {
    let mut out = Vec::new();
    for (lang, strings) in bundles() {
        let empty: Vec<String> = strings
            .fields()
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| name)
            .collect();
        if empty.is_empty() {
            continue;
        }
        let expected = empty
            .iter()
            .all(|name| EMPTY_ALLOWED.iter().any(|(l, n)| *l == lang && *n == name.as_str()));
        let detail = if expected {
            format!("{} empty (expected)", empty.join(", "))
        } else {
            format!("{} empty", empty.join(", "))
        };
        out.push(Diagnostic::warning(format!("empty fields ({})", lang), detail));
    }
    out
}

fn check_untranslated() -> Vec<Diagnostic> {
    let base = get_strings(Language::En).fields();
    let mut out = Vec::new();
    for (lang, strings) in bundles().filter(|(lang, _)| *lang != Language::En) {
        let same: Vec<String> = strings
            .fields()
            .into_iter()
            .zip(base.iter())
            // color names are shared across languages ("Orange")
            .filter(|((name, _), _)| !name.starts_with("color_schemes"))
            .filter(|((_, value), (_, en))| {
                value.chars().filter(|c| c.is_alphabetic()).count() >= UNTRANSLATED_MIN_LETTERS
                    && value == en
            })
            .map(|((name, _), _)| name)
            .collect();
        if !same.is_empty() {
            out.push(Diagnostic::warning(
                format!("untranslated ({})", lang),
                format!("identical to en: {}", same.join(", ")),
            ));
        }
    }
    out
}

fn check_font_coverage(font_chars: &str) -> Diagnostic {
    let report = GlyphReport::analyze();
    let missing = report.missing_from(font_chars);
    if missing.is_empty() {
        Diagnostic::ok(
            "font coverage",
            format!("all {} extended glyphs present", report.len()),
        )
    } else {
        Diagnostic::warning(
            "font coverage",
            format!("{} glyphs missing: {}", missing.chars().count(), missing),
        )
    }
}
