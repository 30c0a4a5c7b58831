// SPDX-License-Identifier: PMPL-1.0-or-later

//! Integration tests for the public lookup API

use aura_strings::i18n::{bundles, get_strings, strings_for_ordinal, ColorScheme, Language};
use aura_strings::DEFAULT_CAPTIVE_SSID;

#[test]
fn test_german_bundle() {
    let de = get_strings(Language::De);
    assert_eq!(de.location, "Standort:");
    assert_eq!(de.weekdays[0], "So");
    assert_eq!(de.color_schemes[7], "Rosa");
    assert_eq!(de.color_scheme_name(ColorScheme::Pink), "Rosa");
}

#[test]
fn test_french_hour_suffix() {
    let fr = get_strings(Language::Fr);
    assert_eq!(fr.am, "h");
    assert_eq!(fr.pm, "h");
}

#[test]
fn test_one_past_last_ordinal_is_english() {
    let past_end = Language::all().len() as i64;
    assert_eq!(*strings_for_ordinal(past_end), *get_strings(Language::En));
}

#[test]
fn test_list_lengths() {
    for (lang, strings) in bundles() {
        assert_eq!(strings.color_schemes.len(), 8, "{lang} color schemes");
        assert_eq!(strings.weekdays.len(), 7, "{lang} weekdays");
    }
}

#[test]
fn test_only_german_has_empty_fields() {
    for (lang, strings) in bundles() {
        let empty: Vec<String> = strings
            .fields()
            .into_iter()
            .filter(|(_, v)| v.is_empty())
            .map(|(n, _)| n)
            .collect();
        if lang == Language::De {
            assert_eq!(empty, vec!["am", "pm"]);
        } else {
            assert!(empty.is_empty(), "{lang} has empty fields: {:?}", empty);
        }
    }
}

#[test]
fn test_access_point_name_shared() {
    assert_eq!(DEFAULT_CAPTIVE_SSID, "Aura");
    assert_eq!(DEFAULT_CAPTIVE_SSID, aura_strings::captive_ssid!());
    for (lang, strings) in bundles() {
        assert_eq!(
            strings.wifi_config.matches(DEFAULT_CAPTIVE_SSID).count(),
            1,
            "{lang} setup text should name the access point once"
        );
        assert!(strings.reset_confirmation.contains(DEFAULT_CAPTIVE_SSID));
    }
}

#[test]
fn test_setup_text_points_at_portal_address() {
    for (lang, strings) in bundles() {
        assert!(
            strings.wifi_config.contains("http://192.168.4.1"),
            "{lang} setup text lacks the portal address"
        );
    }
}

#[test]
fn test_bundles_are_distinct() {
    let all: Vec<_> = bundles().map(|(_, s)| s).collect();
    for (i, a) in all.iter().enumerate() {
        for b in &all[i + 1..] {
            assert_ne!(a.save, b.save);
        }
    }
}

#[test]
fn test_bundles_shareable_across_threads() {
    let handles: Vec<_> = Language::all()
        .iter()
        .map(|&lang| std::thread::spawn(move || get_strings(lang).language_label))
        .collect();
    let labels: Vec<&str> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(labels[0], "Language:");
    assert_eq!(labels[6], "Lingua:");
}
