// SPDX-License-Identifier: PMPL-1.0-or-later

//! Non-ASCII glyph analysis for bitmap font generation.
//!
//! The display draws text with pre-rendered LVGL fonts that only contain
//! the glyphs they were generated with. Any character a translation uses
//! that the font lacks renders as a blank box, so the font converter must
//! be fed the exact set of extended characters the tables need.

use crate::i18n::{bundles, Language};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Extended characters the shipped fonts were generated with.
pub const DEFAULT_FONT_CHARS: &str = "°¿ÉÊÍÓÜßáäçèéíñóöúûü‐→";

/// Characters common in European place names, by region.
///
/// Location names come from a geocoding service rather than from the
/// string tables, so they are checked separately.
pub fn location_charsets() -> &'static [(&'static str, &'static str)] {
    &[
        ("Scandinavian", "åæøÅÆØ"),
        ("German/Austrian", "äöüßÄÖÜ"),
        ("French", "àâäçéèêëïîôùûüÿÀÂÄÇÉÈÊËÏÎÔÙÛÜŸ"),
        ("Spanish", "ñáéíóúüÑÁÉÍÓÚÜ"),
        ("Italian", "àèéìíîòóùúÀÈÉÌÍÎÒÓÙÚ"),
        ("Eastern European", "ąćęłńóśźżĄĆĘŁŃÓŚŹŻ"),
        ("Czech/Slovak", "áčďéěíňóřšťúůýžÁČĎÉĚÍŇÓŘŠŤÚŮÝŽ"),
    ]
}

/// Union of [`location_charsets`], sorted by code point.
pub fn recommended_location_charset() -> String {
    location_charsets()
        .iter()
        .flat_map(|(_, chars)| chars.chars())
        .collect::<BTreeSet<char>>()
        .into_iter()
        .collect()
}

/// A single extended character and how often the tables use it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlyphUsage {
    pub glyph: char,
    pub code_point: String,
    pub count: usize,
}

/// Extended characters one language needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageGlyphs {
    pub language: Language,
    pub chars: String,
}

/// Serializable snapshot of a [`GlyphReport`] checked against a font.
#[derive(Debug, Clone, Serialize)]
pub struct GlyphSummary {
    pub charset: String,
    pub ranges: Vec<String>,
    pub usages: Vec<GlyphUsage>,
    pub per_language: Vec<LanguageGlyphs>,
    pub font_chars: String,
    pub missing: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_location_chars: Option<String>,
}

/// Extended characters used by the string tables.
#[derive(Debug, Clone, Default)]
pub struct GlyphReport {
    counts: BTreeMap<char, usize>,
    by_language: BTreeMap<Language, BTreeSet<char>>,
}

impl GlyphReport {
    /// Scan every string of every bundle.
    pub fn analyze() -> Self {
        let mut report = GlyphReport::default();
        for (lang, strings) in bundles() {
            let used = report.by_language.entry(lang).or_default();
            for (_, value) in strings.fields() {
                for ch in value.chars().filter(|c| !c.is_ascii()) {
                    *report.counts.entry(ch).or_insert(0) += 1;
                    used.insert(ch);
                }
            }
        }
        report
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct extended characters.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn contains(&self, glyph: char) -> bool {
        self.counts.contains_key(&glyph)
    }

    /// Distinct characters sorted by code point, ready for the font converter.
    pub fn charset(&self) -> String {
        self.counts.keys().collect()
    }

    pub fn usages(&self) -> Vec<GlyphUsage> {
        self.counts
            .iter()
            .map(|(&glyph, &count)| GlyphUsage {
                glyph,
                code_point: code_point(glyph),
                count,
            })
            .collect()
    }

    /// Contiguous code-point runs, e.g. `U+00B0` or `U+00E0-U+00E4`.
    pub fn ranges(&self) -> Vec<String> {
        let mut ranges = Vec::new();
        let mut run: Option<(u32, u32)> = None;
        for &glyph in self.counts.keys() {
            let cp = glyph as u32;
            run = match run {
                Some((start, end)) if cp == end + 1 => Some((start, cp)),
                Some(done) => {
                    ranges.push(format_range(done));
                    Some((cp, cp))
                }
                None => Some((cp, cp)),
            };
        }
        if let Some(done) = run {
            ranges.push(format_range(done));
        }
        ranges
    }

    /// The `n` most frequent characters; ties break by code point.
    pub fn most_common(&self, n: usize) -> Vec<GlyphUsage> {
        let mut usages = self.usages();
        usages.sort_by(|a, b| b.count.cmp(&a.count).then(a.glyph.cmp(&b.glyph)));
        usages.truncate(n);
        usages
    }

    /// Extended characters each language needs.
    pub fn per_language(&self) -> Vec<(Language, String)> {
        self.by_language
            .iter()
            .map(|(lang, chars)| (*lang, chars.iter().collect()))
            .collect()
    }

    /// Characters the tables use that `font_chars` does not provide.
    pub fn missing_from(&self, font_chars: &str) -> String {
        let available: BTreeSet<char> = font_chars.chars().collect();
        self.counts
            .keys()
            .filter(|c| !available.contains(*c))
            .collect()
    }

    pub fn summary(&self, font_chars: &str, include_locations: bool) -> GlyphSummary {
        GlyphSummary {
            charset: self.charset(),
            ranges: self.ranges(),
            usages: self.usages(),
            per_language: self
                .per_language()
                .into_iter()
                .map(|(language, chars)| LanguageGlyphs { language, chars })
                .collect(),
            font_chars: font_chars.to_string(),
            missing: self.missing_from(font_chars),
            missing_location_chars: include_locations.then(|| missing_location_chars(font_chars)),
        }
    }
}

/// Location-name characters that `font_chars` does not provide.
pub fn missing_location_chars(font_chars: &str) -> String {
    let available: BTreeSet<char> = font_chars.chars().collect();
    recommended_location_charset()
        .chars()
        .filter(|c| !available.contains(c))
        .collect()
}

fn code_point(glyph: char) -> String {
    format!("U+{:04X}", glyph as u32)
}

fn format_range((start, end): (u32, u32)) -> String {
    if start == end {
        format!("U+{:04X}", start)
    } else {
        format!("U+{:04X}-U+{:04X}", start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_is_excluded() {
        let report = GlyphReport::analyze();
        assert!(!report.is_empty());
        assert!(report.charset().chars().all(|c| !c.is_ascii()));
    }

    #[test]
    fn degree_sign_counted_in_every_language() {
        let report = GlyphReport::analyze();
        assert!(report.contains('°'));
        let degree = report
            .usages()
            .into_iter()
            .find(|u| u.glyph == '°')
            .expect("degree sign should be used");
        // temp_placeholder and use_fahrenheit, seven languages
        assert_eq!(degree.count, 14);
        assert_eq!(degree.code_point, "U+00B0");
        for (_, chars) in report.per_language() {
            assert!(chars.contains('°'));
        }
    }

    #[test]
    fn english_needs_only_the_degree_sign() {
        let report = GlyphReport::analyze();
        let (_, en) = report
            .per_language()
            .into_iter()
            .find(|(lang, _)| *lang == Language::En)
            .expect("english analysed");
        assert_eq!(en, "°");
    }

    #[test]
    fn charset_sorted_by_code_point() {
        let chars: Vec<char> = GlyphReport::analyze().charset().chars().collect();
        let mut sorted = chars.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(chars, sorted);
    }

    #[test]
    fn ranges_merge_contiguous_runs() {
        let mut report = GlyphReport::default();
        for c in ['°', 'à', 'á', 'â', 'é'] {
            report.counts.insert(c, 1);
        }
        assert_eq!(
            report.ranges(),
            vec!["U+00B0", "U+00E0-U+00E2", "U+00E9"]
        );
    }

    #[test]
    fn most_common_orders_by_count() {
        let report = GlyphReport::analyze();
        let top = report.most_common(3);
        assert_eq!(top.len(), 3);
        assert!(top[0].count >= top[1].count);
        assert!(top[1].count >= top[2].count);
    }

    #[test]
    fn turkish_letters_missing_from_default_font() {
        let missing = GlyphReport::analyze().missing_from(DEFAULT_FONT_CHARS);
        assert!(missing.contains('ş'));
        assert!(missing.contains('İ'));
        assert!(!missing.contains('°'));
        assert!(!missing.contains('ü'));
    }

    #[test]
    fn full_charset_leaves_nothing_missing() {
        let report = GlyphReport::analyze();
        assert_eq!(report.missing_from(&report.charset()), "");
    }

    #[test]
    fn summary_serializes_languages_by_code() {
        let summary = GlyphReport::analyze().summary(DEFAULT_FONT_CHARS, false);
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["per_language"][0]["language"], "en");
        assert_eq!(value["per_language"].as_array().map(|a| a.len()), Some(7));
        assert!(value.get("missing_location_chars").is_none());
    }

    #[test]
    fn location_charset_is_deduplicated() {
        let all = recommended_location_charset();
        let unique: BTreeSet<char> = all.chars().collect();
        assert_eq!(unique.len(), all.chars().count());
        assert!(all.contains('ø'));
        assert!(missing_location_chars(DEFAULT_FONT_CHARS).contains('å'));
        assert!(!missing_location_chars(DEFAULT_FONT_CHARS).contains('ß'));
    }
}
