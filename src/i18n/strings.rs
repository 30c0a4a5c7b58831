// SPDX-License-Identifier: PMPL-1.0-or-later

//! The fixed-shape string bundle every language provides.

use chrono::Weekday;
use serde::Serialize;

/// Number of selectable display color schemes.
pub const COLOR_SCHEME_COUNT: usize = 8;

/// Number of weekday abbreviations (Sunday-first).
pub const WEEKDAY_COUNT: usize = 7;

/// Display color schemes, in the order the bundles list their names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Blue,
    Red,
    Yellow,
    Orange,
    White,
    Black,
    Green,
    Pink,
}

impl ColorScheme {
    pub fn all() -> &'static [ColorScheme; COLOR_SCHEME_COUNT] {
        &[
            ColorScheme::Blue,
            ColorScheme::Red,
            ColorScheme::Yellow,
            ColorScheme::Orange,
            ColorScheme::White,
            ColorScheme::Black,
            ColorScheme::Green,
            ColorScheme::Pink,
        ]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<ColorScheme> {
        ColorScheme::all().get(index).copied()
    }
}

/// Every UI string the display renders, for one language.
///
/// Empty strings are legal: German leaves `am`/`pm` empty because it
/// formats hours without a suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocalizedStrings {
    pub temp_placeholder: &'static str,
    pub feels_like_temp: &'static str,
    pub seven_day_forecast: &'static str,
    pub hourly_forecast: &'static str,
    pub today: &'static str,
    pub now: &'static str,
    pub am: &'static str,
    pub pm: &'static str,
    pub noon: &'static str,
    pub invalid_hour: &'static str,
    pub brightness: &'static str,
    /// "Location:" label on the settings screen.
    pub location: &'static str,
    pub use_fahrenheit: &'static str,
    pub use_24hr: &'static str,
    pub save: &'static str,
    pub cancel: &'static str,
    pub close: &'static str,
    /// Caption of the button that opens the location picker.
    pub location_btn: &'static str,
    pub reset_wifi: &'static str,
    pub reset: &'static str,
    pub change_location: &'static str,
    pub aura_settings: &'static str,
    pub city: &'static str,
    pub search_results: &'static str,
    pub city_placeholder: &'static str,
    /// Setup instructions; names the captive access point.
    pub wifi_config: &'static str,
    /// Reset prompt; names the captive access point.
    pub reset_confirmation: &'static str,
    pub language_label: &'static str,
    pub color_scheme_label: &'static str,
    /// Indexed by [`ColorScheme::index`].
    pub color_schemes: [&'static str; COLOR_SCHEME_COUNT],
    /// Sunday first.
    pub weekdays: [&'static str; WEEKDAY_COUNT],
    pub use_night_mode: &'static str,
}

impl LocalizedStrings {
    pub fn color_scheme_name(&self, scheme: ColorScheme) -> &'static str {
        self.color_schemes[scheme.index()]
    }

    pub fn weekday(&self, day: Weekday) -> &'static str {
        self.weekdays[day.num_days_from_sunday() as usize]
    }

    /// Weekday by Sunday-based index, as the renderer's clock reports it.
    pub fn weekday_by_index(&self, index: usize) -> Option<&'static str> {
        self.weekdays.get(index).copied()
    }

    /// Every string in the bundle with its field name, in declaration order.
    ///
    /// List entries are named `color_schemes[i]` and `weekdays[i]`.
    pub fn fields(&self) -> Vec<(String, &'static str)> {
        let head = [
            ("temp_placeholder", self.temp_placeholder),
            ("feels_like_temp", self.feels_like_temp),
            ("seven_day_forecast", self.seven_day_forecast),
            ("hourly_forecast", self.hourly_forecast),
            ("today", self.today),
            ("now", self.now),
            ("am", self.am),
            ("pm", self.pm),
            ("noon", self.noon),
            ("invalid_hour", self.invalid_hour),
            ("brightness", self.brightness),
            ("location", self.location),
            ("use_fahrenheit", self.use_fahrenheit),
            ("use_24hr", self.use_24hr),
            ("save", self.save),
            ("cancel", self.cancel),
            ("close", self.close),
            ("location_btn", self.location_btn),
            ("reset_wifi", self.reset_wifi),
            ("reset", self.reset),
            ("change_location", self.change_location),
            ("aura_settings", self.aura_settings),
            ("city", self.city),
            ("search_results", self.search_results),
            ("city_placeholder", self.city_placeholder),
            ("wifi_config", self.wifi_config),
            ("reset_confirmation", self.reset_confirmation),
            ("language_label", self.language_label),
            ("color_scheme_label", self.color_scheme_label),
        ];

        let mut out: Vec<(String, &'static str)> = head
            .iter()
            .map(|&(name, value)| (name.to_string(), value))
            .collect();
        out.extend(
            self.color_schemes
                .iter()
                .enumerate()
                .map(|(i, value)| (format!("color_schemes[{i}]"), *value)),
        );
        out.extend(
            self.weekdays
                .iter()
                .enumerate()
                .map(|(i, value)| (format!("weekdays[{i}]"), *value)),
        );
        out.push(("use_night_mode".to_string(), self.use_night_mode));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{get_strings, Language};

    #[test]
    fn color_scheme_indices_are_canonical() {
        for (i, scheme) in ColorScheme::all().iter().enumerate() {
            assert_eq!(scheme.index(), i);
            assert_eq!(ColorScheme::from_index(i), Some(*scheme));
        }
        assert_eq!(ColorScheme::from_index(8), None);
    }

    #[test]
    fn english_color_names_follow_enum_order() {
        let en = get_strings(Language::En);
        let names: Vec<&str> = ColorScheme::all()
            .iter()
            .map(|s| en.color_scheme_name(*s))
            .collect();
        assert_eq!(
            names,
            ["Blue", "Red", "Yellow", "Orange", "White", "Black", "Green", "Pink"]
        );
    }

    #[test]
    fn weekdays_are_sunday_first() {
        let de = get_strings(Language::De);
        assert_eq!(de.weekday(Weekday::Sun), "So");
        assert_eq!(de.weekday(Weekday::Mon), "Mo");
        assert_eq!(de.weekday(Weekday::Sat), "Sa");
        assert_eq!(de.weekday_by_index(0), Some("So"));
        assert_eq!(de.weekday_by_index(7), None);
    }

    #[test]
    fn fields_cover_every_string() {
        let fields = get_strings(Language::En).fields();
        // 29 scalar labels, 8 colors, 7 weekdays, night mode
        assert_eq!(fields.len(), 29 + COLOR_SCHEME_COUNT + WEEKDAY_COUNT + 1);
        assert_eq!(fields[0].0, "temp_placeholder");
        assert_eq!(fields[29].0, "color_schemes[0]");
        assert_eq!(fields[37].0, "weekdays[0]");
        assert_eq!(fields.last().map(|f| f.0.as_str()), Some("use_night_mode"));
    }

    #[test]
    fn fields_shape_identical_across_languages() {
        let names = |lang| -> Vec<String> {
            get_strings(lang).fields().into_iter().map(|(n, _)| n).collect()
        };
        let en = names(Language::En);
        for lang in Language::all() {
            assert_eq!(names(*lang), en, "{lang} field shape differs");
        }
    }

    #[test]
    fn serializes_with_field_names() {
        let value = serde_json::to_value(get_strings(Language::Fr)).unwrap();
        assert_eq!(value["am"], "h");
        assert_eq!(value["weekdays"][0], "Dim");
        assert_eq!(value["color_schemes"].as_array().map(|a| a.len()), Some(8));
    }
}
