// SPDX-License-Identifier: PMPL-1.0-or-later

//! Human-readable rendering

use super::BundleDocument;
use crate::glyphs::GlyphSummary;
use crate::i18n::Language;
use colored::*;

const FIELD_WIDTH: usize = 22;

/// Renders bundles and glyph reports as terminal text.
///
/// `plain()` disables ANSI styling for files and pipes.
pub struct TextFormatter {
    styled: bool,
}

impl TextFormatter {
    pub fn new() -> Self {
        Self { styled: true }
    }

    pub fn plain() -> Self {
        Self { styled: false }
    }

    fn style(&self, text: &str, paint: impl Fn(&str) -> ColoredString) -> String {
        if self.styled {
            paint(text).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn bundle(&self, doc: &BundleDocument) -> String {
        let mut out = String::new();
        let title = format!(
            "=== AURA STRINGS: {} ({}) ===",
            doc.language, doc.native_name
        );
        out.push_str(&self.style(&title, |s| s.bold().cyan()));
        out.push('\n');

        for (name, value) in doc.strings.fields() {
            let label = self.style(&format!("{:width$}", name, width = FIELD_WIDTH), |s| {
                s.bold()
            });
            if value.is_empty() {
                let empty = self.style("(empty)", |s| s.dimmed());
                out.push_str(&format!("  {} {}\n", label, empty));
                continue;
            }
            let mut lines = value.split('\n');
            let first = lines.next().unwrap_or_default();
            out.push_str(&format!("  {} {}\n", label, first));
            for line in lines {
                out.push_str(&format!("  {:width$} {}\n", "", line, width = FIELD_WIDTH));
            }
        }
        out
    }

    pub fn glyphs(&self, summary: &GlyphSummary) -> String {
        let mut out = String::new();
        let heading = |out: &mut String, text: &str| {
            out.push('\n');
            out.push_str(&self.style(text, |s| s.bold().yellow()));
            out.push('\n');
        };

        out.push_str(&self.style("=== EXTENDED GLYPHS ===", |s| s.bold().cyan()));
        out.push('\n');
        out.push_str(&format!(
            "  {} unique non-ASCII characters\n",
            summary.charset.chars().count()
        ));

        heading(&mut out, "CHARACTER SET");
        out.push_str(&format!("  '{}'\n", summary.charset));

        heading(&mut out, "UNICODE RANGES");
        for range in &summary.ranges {
            out.push_str(&format!("  {}\n", range));
        }

        heading(&mut out, "USAGE");
        for usage in &summary.usages {
            out.push_str(&format!(
                "  '{}'  {:<8} {}\n",
                usage.glyph, usage.code_point, usage.count
            ));
        }

        heading(&mut out, "BY LANGUAGE");
        for entry in &summary.per_language {
            out.push_str(&format!("  {:<3} {}\n", entry.language.code(), entry.chars));
        }

        heading(&mut out, "FONT COVERAGE");
        if summary.missing.is_empty() {
            out.push_str(&format!(
                "  {}\n",
                self.style("all glyphs present in font", |s| s.green())
            ));
        } else {
            out.push_str(&format!(
                "  missing: '{}'\n",
                self.style(&summary.missing, |s| s.red())
            ));
        }

        if let Some(missing) = &summary.missing_location_chars {
            heading(&mut out, "LOCATION NAMES");
            if missing.is_empty() {
                out.push_str("  font covers common European place names\n");
            } else {
                out.push_str(&format!("  characters to add: '{}'\n", missing));
            }
        }
        out
    }

    pub fn languages(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.style("SUPPORTED LANGUAGES", |s| s.bold().yellow()));
        out.push('\n');
        for lang in Language::all() {
            let marker = if *lang == Language::default() {
                self.style(" (fallback)", |s| s.dimmed())
            } else {
                String::new()
            };
            out.push_str(&format!(
                "  {}  {:<3} {:<9} {:<10}{}\n",
                lang.ordinal(),
                lang.code(),
                lang.english_name(),
                lang.native_name(),
                marker
            ));
        }
        out
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}
