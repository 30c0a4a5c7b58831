// SPDX-License-Identifier: PMPL-1.0-or-later

//! The compiled-in string bundles and the language selector.
//!
//! ## Adding a language
//!
//! 1. Append a variant to [`Language`] (ordinals are persisted; never reorder)
//! 2. Add its `code()`, `english_name()` and `native_name()` arms
//! 3. Write a `static XX: LocalizedStrings` below, building `wifi_config`
//!    and `reset_confirmation` around `captive_ssid!()`
//! 4. Append it to `TABLE` at the new ordinal
//!
//! Translations are kept verbatim, including known slips (the Italian
//! `close` label is still English).

use super::language::Language;
use super::strings::LocalizedStrings;

/// Bundle for a language. Total and allocation-free.
///
/// # Examples
///
/// ```
/// use aura_strings::i18n::{get_strings, Language};
/// assert_eq!(get_strings(Language::De).location, "Standort:");
/// assert_eq!(get_strings(Language::Fr).am, "h");
/// ```
pub fn get_strings(code: Language) -> &'static LocalizedStrings {
    TABLE.get(code.ordinal() as usize).copied().unwrap_or(&EN)
}

/// Bundle for a raw persisted ordinal; anything outside the table is English.
pub fn strings_for_ordinal(raw: i64) -> &'static LocalizedStrings {
    usize::try_from(raw)
        .ok()
        .and_then(|index| TABLE.get(index).copied())
        .unwrap_or(&EN)
}

/// Every language with its bundle, in ordinal order.
pub fn bundles() -> impl Iterator<Item = (Language, &'static LocalizedStrings)> {
    Language::all()
        .iter()
        .map(|&lang| (lang, get_strings(lang)))
}

/// Indexed by `Language` ordinal; slot 0 is the fallback.
static TABLE: [&LocalizedStrings; 7] = [&EN, &ES, &DE, &FR, &TR, &SV, &IT];

// ─── English (base language) ────────────────────────────────────────

static EN: LocalizedStrings = LocalizedStrings {
    temp_placeholder: "--°C",
    feels_like_temp: "Feels Like",
    seven_day_forecast: "SEVEN DAY FORECAST",
    hourly_forecast: "HOURLY FORECAST",
    today: "Today",
    now: "Now",
    am: "am",
    pm: "pm",
    noon: "Noon",
    invalid_hour: "Invalid hour",
    brightness: "Brightness:",
    location: "Location:",
    use_fahrenheit: "Use °F:",
    use_24hr: "24hr:",
    save: "Save",
    cancel: "Cancel",
    close: "Close",
    location_btn: "Location",
    reset_wifi: "Reset Wi-Fi",
    reset: "Reset",
    change_location: "Change Location",
    aura_settings: "Aura Settings",
    city: "City:",
    search_results: "Search Results",
    city_placeholder: "e.g. London",
    wifi_config: concat!(
        "Wi-Fi Configuration:\n\n",
        "Please connect your\n",
        "phone or laptop to the\n",
        "temporary Wi-Fi access\n point ",
        captive_ssid!(),
        "\n",
        "to configure.\n\n",
        "If you don't see a \n",
        "configuration screen \n",
        "after connecting,\n",
        "visit http://192.168.4.1\n",
        "in your web browser.",
    ),
    reset_confirmation: concat!(
        "Are you sure you want to reset ",
        "Wi-Fi credentials?\n\n",
        "You'll need to reconnect to the Wifi SSID ",
        captive_ssid!(),
        " with your phone or browser to ",
        "reconfigure Wi-Fi credentials.",
    ),
    language_label: "Language:",
    color_scheme_label: "Color scheme:",
    color_schemes: ["Blue", "Red", "Yellow", "Orange", "White", "Black", "Green", "Pink"],
    weekdays: ["Sun", "Mon", "Tues", "Wed", "Thurs", "Fri", "Sat"],
    use_night_mode: "Dim screen at night",
};

// ─── Spanish ────────────────────────────────────────────────────────

static ES: LocalizedStrings = LocalizedStrings {
    temp_placeholder: "--°C",
    feels_like_temp: "Sensación",
    seven_day_forecast: "PRONÓSTICO 7 DÍAS",
    hourly_forecast: "PRONÓSTICO POR HORAS",
    today: "Hoy",
    now: "Ahora",
    am: "am",
    pm: "pm",
    noon: "Mediodía",
    invalid_hour: "Hora inválida",
    brightness: "Brillo:",
    location: "Ubicación:",
    use_fahrenheit: "Usar °F:",
    use_24hr: "24h:",
    save: "Guardar",
    cancel: "Cancelar",
    close: "Cerrar",
    location_btn: "Ubicación",
    reset_wifi: "Wi-Fi",
    reset: "Restablecer",
    change_location: "Cambiar Ubicación",
    aura_settings: "Configuración Aura",
    city: "Ciudad:",
    search_results: "Resultados de Búsqueda",
    city_placeholder: "ej. Madrid",
    wifi_config: concat!(
        "Configuración Wi-Fi:\n\n",
        "Conecte su teléfono\n",
        "o portátil al punto de\n",
        "acceso Wi-Fi temporal\n",
        captive_ssid!(),
        "\n",
        "para configurar.\n\n",
        "Si no ve una pantalla\n",
        "de configuración después\n",
        "de conectarse, visite\n",
        "http://192.168.4.1\n",
        "en su navegador.",
    ),
    reset_confirmation: concat!(
        "¿Está seguro de que desea\n",
        "restablecer las credenciales\n",
        "Wi-Fi?\n\n",
        "Deberá reconectarse al SSID ",
        captive_ssid!(),
        " con su teléfono o navegador\n",
        "para reconfigurar las\n",
        "credenciales Wi-Fi.",
    ),
    language_label: "Idioma:",
    color_scheme_label: "Esquema de color:",
    color_schemes: ["Azul", "Rojo", "Amarillo", "Naranja", "Blanco", "Negro", "Verde", "Rosa"],
    weekdays: ["Dom", "Lun", "Mar", "Mié", "Jue", "Vie", "Sáb"],
    use_night_mode: "Pantalla noche",
};

// ─── German ─────────────────────────────────────────────────────────

static DE: LocalizedStrings = LocalizedStrings {
    temp_placeholder: "--°C",
    feels_like_temp: "Gefühlt",
    seven_day_forecast: "7-TAGE VORHERSAGE",
    hourly_forecast: "STÜNDLICHE VORHERSAGE",
    today: "Heute",
    now: "Jetzt",
    am: "",
    pm: "",
    noon: "Mittag",
    invalid_hour: "Ungültige Stunde",
    brightness: "Helligkeit:",
    location: "Standort:",
    use_fahrenheit: "°F:",
    use_24hr: "24h:",
    save: "Speichern",
    cancel: "Abbrechen",
    close: "Schließen",
    location_btn: "Standort",
    reset_wifi: "Wi-Fi",
    reset: "Zurücksetzen",
    change_location: "Standort ändern",
    aura_settings: "Aura Einstellungen",
    city: "Stadt:",
    search_results: "Suchergebnisse",
    city_placeholder: "z.B. Berlin",
    wifi_config: concat!(
        "Wi-Fi Konfiguration:\n\n",
        "Verbinden Sie Ihr Telefon\n",
        "oder Laptop mit dem\n",
        "temporären Wi-Fi\n",
        "Zugangspunkt ",
        captive_ssid!(),
        "\n",
        "zum Konfigurieren.\n\n",
        "Wenn Sie keinen\n",
        "Konfigurationsbildschirm\n",
        "sehen, besuchen Sie\n",
        "http://192.168.4.1\n",
        "in Ihrem Browser.",
    ),
    reset_confirmation: concat!(
        "Sind Sie sicher, dass Sie\n",
        "die Wi-Fi Zugangsdaten\n",
        "zurücksetzen möchten?\n\n",
        "Sie müssen sich erneut mit\n",
        "der SSID ",
        captive_ssid!(),
        " verbinden, um die\n",
        "Wi-Fi Zugangsdaten\n",
        "neu zu konfigurieren.",
    ),
    language_label: "Sprache:",
    color_scheme_label: "Farbschema:",
    color_schemes: ["Blau", "Rot", "Gelb", "Orange", "Weiß", "Schwarz", "Grün", "Rosa"],
    weekdays: ["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"],
    use_night_mode: "Nacht-Dimmen",
};

// ─── French ─────────────────────────────────────────────────────────

static FR: LocalizedStrings = LocalizedStrings {
    temp_placeholder: "--°C",
    feels_like_temp: "Ressenti",
    seven_day_forecast: "PRÉVISIONS 7 JOURS",
    hourly_forecast: "PRÉVISIONS HORAIRES",
    today: "Aujourd'hui",
    now: "Maintenant",
    // French clocks suffix both halves of the day with "h".
    am: "h",
    pm: "h",
    noon: "Midi",
    invalid_hour: "Heure invalide",
    brightness: "Luminosité:",
    location: "Lieu:",
    use_fahrenheit: "Utiliser °F:",
    use_24hr: "24h:",
    save: "Sauvegarder",
    cancel: "Annuler",
    close: "Fermer",
    location_btn: "Lieu",
    reset_wifi: "Wi-Fi",
    reset: "Réinitialiser",
    change_location: "Changer de lieu",
    aura_settings: "Paramètres Aura",
    city: "Ville:",
    search_results: "Résultats de recherche",
    city_placeholder: "ex. Paris",
    wifi_config: concat!(
        "Configuration Wi-Fi:\n\n",
        "Connectez votre téléphone\n",
        "ou ordinateur portable au\n",
        "point d'accès Wi-Fi\n",
        "temporaire ",
        captive_ssid!(),
        "\n",
        "pour configurer.\n\n",
        "Si vous ne voyez pas\n",
        "d'écran de configuration\n",
        "après connexion, visitez\n",
        "http://192.168.4.1\n",
        "dans votre navigateur.",
    ),
    reset_confirmation: concat!(
        "Êtes-vous sûr de vouloir\n",
        "réinitialiser les\n",
        "identifiants Wi-Fi?\n\n",
        "Vous devrez vous reconnecter\n",
        "au SSID ",
        captive_ssid!(),
        " avec votre téléphone ou\n",
        "navigateur pour reconfigurer\n",
        "les identifiants Wi-Fi.",
    ),
    language_label: "Langue:",
    color_scheme_label: "Schéma de couleur:",
    color_schemes: ["Bleu", "Rouge", "Jaune", "Orange", "Blanc", "Noir", "Vert", "Rose"],
    weekdays: ["Dim", "Lun", "Mar", "Mer", "Jeu", "Ven", "Sam"],
    use_night_mode: "Nuit écran",
};

// ─── Turkish ────────────────────────────────────────────────────────

static TR: LocalizedStrings = LocalizedStrings {
    temp_placeholder: "--°C",
    feels_like_temp: "Hissedilen",
    seven_day_forecast: "YEDI GÜNLÜK TAHMIN",
    hourly_forecast: "SAATLIK TAHMIN",
    today: "Bugün",
    now: "Simdi",
    am: "öö",
    pm: "ös",
    noon: "Öğle",
    invalid_hour: "Geçersiz saat",
    brightness: "Parlaklik:",
    location: "Konum:",
    use_fahrenheit: "°F Kullan:",
    use_24hr: "24 Saat:",
    save: "Kaydet",
    cancel: "İptal",
    close: "Kapat",
    location_btn: "Konum",
    reset_wifi: "Wi-Fi Sifirla",
    reset: "Sifirla",
    change_location: "Konumu Değiştir",
    aura_settings: "Aura Ayarlari",
    city: "Şehir:",
    search_results: "Arama Sonuçları",
    city_placeholder: "örn. Londra",
    wifi_config: concat!(
        "Wi-Fi Yapilandirmasi:\n\n",
        "Lütfen telefonunuzu veya\n",
        "bilgisayarinizi geçici Wi-Fi\n",
        "erişim noktasina bağlayin ",
        captive_ssid!(),
        "\n",
        "yapilandirmak için.\n\n",
        "Bağlandiktan sonra bir\n",
        "yapilandirma ekrani görmezseniz,\n",
        "web tarayicinizda\n",
        "http://192.168.4.1 adresine gidin.",
    ),
    reset_confirmation: concat!(
        "Wi-Fi kimlik bilgilerini sifirlamak\n",
        "istediğinizden emin misiniz?\n\n",
        "Wi-Fi kimlik bilgilerini yeniden\n",
        "yapilandirmak için telefonunuz veya\n",
        "tarayiciniz ile ",
        captive_ssid!(),
        " SSID'sine tekrar bağlanmaniz\n",
        "gerekecek.",
    ),
    language_label: "Dil:",
    color_scheme_label: "Renk şeması:",
    color_schemes: ["Mavi", "Kırmızı", "Sarı", "Turuncu", "Beyaz", "Siyah", "Yeşil", "Pembe"],
    weekdays: ["Paz", "Pzt", "Sal", "Çar", "Per", "Cum", "Cmt"],
    use_night_mode: "Gece kısık",
};

// ─── Swedish ────────────────────────────────────────────────────────

static SV: LocalizedStrings = LocalizedStrings {
    temp_placeholder: "--°C",
    feels_like_temp: "Känns som",
    seven_day_forecast: "7-DAGARS PROGNOS",
    hourly_forecast: "TIMPROGNOS",
    today: "Idag",
    now: "Nu",
    am: "fm",
    pm: "em",
    noon: "Middag",
    invalid_hour: "Ogiltig timme",
    brightness: "Ljusstyrka:",
    location: "Plats:",
    use_fahrenheit: "Använd °F:",
    use_24hr: "24h:",
    save: "Spara",
    cancel: "Avbryt",
    close: "Stäng",
    location_btn: "Plats",
    reset_wifi: "Återställ Wi-Fi",
    reset: "Återställ",
    change_location: "Ändra plats",
    aura_settings: "Aura-inställningar",
    city: "Stad:",
    search_results: "Sökresultat",
    city_placeholder: "t.ex. Stockholm",
    wifi_config: concat!(
        "Wi-Fi-konfiguration:\n\n",
        "Anslut din telefon\n",
        "eller laptop till den\n",
        "tillfälliga Wi-Fi-\n",
        "åtkomstpunkten ",
        captive_ssid!(),
        "\n",
        "för att konfigurera.\n\n",
        "Om du inte ser en\n",
        "konfigurationsskärm\n",
        "efter anslutning, besök\n",
        "http://192.168.4.1\n",
        "i din webbläsare.",
    ),
    reset_confirmation: concat!(
        "Är du säker på att du vill\n",
        "återställa Wi-Fi-\n",
        "autentiseringsuppgifter?\n\n",
        "Du måste återansluta till\n",
        "SSID ",
        captive_ssid!(),
        " med din telefon eller\n",
        "webbläsare för att\n",
        "omkonfigurera Wi-Fi-\n",
        "autentiseringsuppgifter.",
    ),
    language_label: "Språk:",
    color_scheme_label: "Färgschema:",
    color_schemes: ["Blå", "Röd", "Gul", "Orange", "Vit", "Svart", "Grön", "Rosa"],
    weekdays: ["Sön", "Mån", "Tis", "Ons", "Tor", "Fre", "Lör"],
    use_night_mode: "Dimma nattetid",
};

// ─── Italian ────────────────────────────────────────────────────────

static IT: LocalizedStrings = LocalizedStrings {
    temp_placeholder: "--°C",
    feels_like_temp: "Percepita",
    seven_day_forecast: "PREVISIONI A 7 GIORNI",
    hourly_forecast: "PREVISIONI ORARIE",
    today: "Oggi",
    now: "Ora",
    am: "am",
    pm: "pm",
    noon: "Mezzog.",
    invalid_hour: "Ora non valida",
    brightness: "Luminosità:",
    location: "Posizione:",
    use_fahrenheit: "Utilizzo °F:",
    use_24hr: "24hr:",
    save: "Salva",
    cancel: "Cancellare",
    close: "Close",
    location_btn: "Posizione",
    reset_wifi: "Resetta Wi-Fi",
    reset: "Reset",
    change_location: "Cambia posizione",
    aura_settings: "Impostazioni aura",
    city: "Città:",
    search_results: "Risultati di ricerca",
    city_placeholder: "e.s. Londra",
    wifi_config: concat!(
        "Configurazione Wi-Fi:\n\n",
        "Per favore collega il tuo\n",
        "smartphone o laptop\n",
        "al Wi-Fi temporaneo\n ",
        captive_ssid!(),
        "\n",
        "per configurare la rete.\n\n",
        "Se non vedi la \n",
        "Schermata di configurazione \n",
        "dopo il collegamento,\n",
        "visita http://192.168.4.1\n",
        "sul tuo web browser.",
    ),
    reset_confirmation: concat!(
        "Sei sicuro di voler ripristinare ",
        "le credenzili Wi-Fi ?\n\n",
        "Dovrai riconnetterti al WiFi con SSID ",
        captive_ssid!(),
        "con il tuo telefono o browser a ",
        "riconfigurare le credenziali Wi-Fi.",
    ),
    language_label: "Lingua:",
    color_scheme_label: "Schema colore:",
    color_schemes: ["Blu", "Rosso", "Giallo", "Arancione", "Bianco", "Nero", "Verde", "Rosa"],
    weekdays: ["Dom", "Lun", "Mar", "Mer", "Gio", "Ven", "Sab"],
    use_night_mode: "Schermo notte",
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_CAPTIVE_SSID;

    #[test]
    fn every_language_has_its_own_bundle() {
        for (i, lang) in Language::all().iter().enumerate() {
            assert!(
                std::ptr::eq(get_strings(*lang), TABLE[i]),
                "{lang} should map to table slot {i}"
            );
        }
    }

    #[test]
    fn german_scenario() {
        let de = get_strings(Language::De);
        assert_eq!(de.location, "Standort:");
        assert_eq!(de.weekdays[0], "So");
        assert_eq!(de.color_schemes[7], "Rosa");
        assert_eq!(de.am, "");
        assert_eq!(de.pm, "");
    }

    #[test]
    fn french_shares_hour_suffix() {
        let fr = get_strings(Language::Fr);
        assert_eq!(fr.am, "h");
        assert_eq!(fr.pm, "h");
    }

    #[test]
    fn out_of_range_ordinal_is_english() {
        let en = get_strings(Language::En);
        assert_eq!(strings_for_ordinal(7), en);
        assert_eq!(strings_for_ordinal(-1), en);
        assert_eq!(strings_for_ordinal(255), en);
        assert!(std::ptr::eq(strings_for_ordinal(7), en));
    }

    #[test]
    fn in_range_ordinal_matches_language() {
        for lang in Language::all() {
            assert_eq!(strings_for_ordinal(lang.ordinal() as i64), get_strings(*lang));
        }
    }

    #[test]
    fn lookup_is_idempotent() {
        for lang in Language::all() {
            assert_eq!(*get_strings(*lang), *get_strings(*lang));
        }
    }

    #[test]
    fn access_point_named_in_every_language() {
        for (lang, strings) in bundles() {
            assert!(
                strings.wifi_config.contains(DEFAULT_CAPTIVE_SSID),
                "{lang} wifi_config lacks the access point name"
            );
            assert!(
                strings.reset_confirmation.contains(DEFAULT_CAPTIVE_SSID),
                "{lang} reset_confirmation lacks the access point name"
            );
        }
    }

    #[test]
    fn english_setup_text_layout() {
        let en = get_strings(Language::En);
        assert!(en
            .wifi_config
            .contains("temporary Wi-Fi access\n point Aura\nto configure."));
        assert!(en
            .reset_confirmation
            .contains("Wifi SSID Aura with your phone"));
    }

    #[test]
    fn italian_text_kept_verbatim() {
        let it = get_strings(Language::It);
        assert_eq!(it.close, "Close");
        assert_eq!(it.cancel, "Cancellare");
        assert!(it.reset_confirmation.contains("SSID Auracon il tuo"));
    }

    #[test]
    fn bundles_iterates_in_ordinal_order() {
        let langs: Vec<Language> = bundles().map(|(lang, _)| lang).collect();
        assert_eq!(langs, Language::all());
    }
}
