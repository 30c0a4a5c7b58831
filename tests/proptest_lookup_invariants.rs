// SPDX-License-Identifier: PMPL-1.0-or-later

//! Property tests for ordinal decoding and bundle lookup.

use aura_strings::i18n::{get_strings, strings_for_ordinal, Language};
use proptest::prelude::*;

proptest! {
    #[test]
    fn unknown_ordinals_resolve_to_english(raw in any::<i64>()) {
        prop_assume!(!(0..=6).contains(&raw));
        prop_assert_eq!(strings_for_ordinal(raw), get_strings(Language::En));
        prop_assert_eq!(Language::from_ordinal_lossy(raw), Language::En);
        prop_assert_eq!(Language::from_ordinal(raw), None);
    }

    #[test]
    fn known_ordinals_resolve_to_their_language(raw in 0i64..=6) {
        let lang = Language::from_ordinal(raw).expect("in range");
        prop_assert_eq!(i64::from(lang.ordinal()), raw);
        prop_assert_eq!(strings_for_ordinal(raw), get_strings(lang));
    }

    #[test]
    fn lookup_is_deterministic(raw in any::<i64>()) {
        prop_assert!(std::ptr::eq(strings_for_ordinal(raw), strings_for_ordinal(raw)));
    }

    #[test]
    fn language_parsing_never_panics(s in "\\PC*") {
        let _ = s.parse::<Language>();
    }
}
