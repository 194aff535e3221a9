//! The catalog of timezones a user can pick from.

use chrono_tz::TZ_VARIANTS;
use std::cmp::Ordering;
use std::sync::LazyLock;

use crate::models::TimezoneConfig;

/// Area prefixes of canonical IANA zone names
const CANONICAL_AREAS: &[&str] = &[
    "Africa",
    "America",
    "Antarctica",
    "Arctic",
    "Asia",
    "Atlantic",
    "Australia",
    "Europe",
    "Indian",
    "Pacific",
];

/// Old spellings and duplicate locations kept by the tz database as links
/// to a canonical zone. Each one would repeat a city already in the catalog.
const BACKWARD_LINKS: &[&str] = &[
    "Africa/Asmera",
    "Africa/Timbuktu",
    "America/Argentina/ComodRivadavia",
    "America/Atka",
    "America/Buenos_Aires",
    "America/Catamarca",
    "America/Coral_Harbour",
    "America/Cordoba",
    "America/Ensenada",
    "America/Fort_Wayne",
    "America/Godthab",
    "America/Indianapolis",
    "America/Jujuy",
    "America/Knox_IN",
    "America/Louisville",
    "America/Mendoza",
    "America/Montreal",
    "America/Nipigon",
    "America/Pangnirtung",
    "America/Porto_Acre",
    "America/Rainy_River",
    "America/Rosario",
    "America/Santa_Isabel",
    "America/Shiprock",
    "America/Thunder_Bay",
    "America/Virgin",
    "America/Yellowknife",
    "Antarctica/South_Pole",
    "Asia/Ashkhabad",
    "Asia/Calcutta",
    "Asia/Chongqing",
    "Asia/Chungking",
    "Asia/Dacca",
    "Asia/Harbin",
    "Asia/Istanbul",
    "Asia/Kashgar",
    "Asia/Katmandu",
    "Asia/Macao",
    "Asia/Rangoon",
    "Asia/Saigon",
    "Asia/Tel_Aviv",
    "Asia/Thimbu",
    "Asia/Ujung_Pandang",
    "Asia/Ulan_Bator",
    "Atlantic/Faeroe",
    "Atlantic/Jan_Mayen",
    "Australia/Canberra",
    "Australia/Currie",
    "Europe/Belfast",
    "Europe/Kiev",
    "Europe/Nicosia",
    "Europe/Tiraspol",
    "Europe/Uzhgorod",
    "Europe/Zaporozhye",
    "Pacific/Enderbury",
    "Pacific/Johnston",
    "Pacific/Ponape",
    "Pacific/Samoa",
    "Pacific/Truk",
    "Pacific/Yap",
];

/// Every selectable timezone, sorted by city name. Computed on first use.
pub static AVAILABLE_TIMEZONES: LazyLock<Vec<TimezoneConfig>> =
    LazyLock::new(available_timezones);

/// Derives a display city name from a timezone identifier.
///
/// `America/New_York` becomes `New York`, `America/St_Johns` becomes
/// `Saint Johns`, and camel case such as `DumontDUrville` is split.
pub fn format_city_name(timezone: &str) -> String {
    let city = timezone.rsplit('/').next().unwrap_or(timezone);
    let spaced = city.replace('_', " ");

    let mut out = String::with_capacity(spaced.len() + 4);
    let mut prev: Option<char> = None;
    for (i, c) in spaced.chars().enumerate() {
        if i == 0 {
            out.extend(c.to_uppercase());
        } else {
            if prev.is_some_and(|p| p.is_ascii_lowercase()) && c.is_ascii_uppercase() {
                out.push(' ');
            }
            out.push(c);
        }
        prev = Some(c);
    }

    expand_abbreviations(&out)
}

/// Replaces the whole words `St` and `Ft`
fn expand_abbreviations(name: &str) -> String {
    let is_word = |c: char| c.is_ascii_alphanumeric() || c == '_';

    let mut out = String::with_capacity(name.len() + 8);
    let mut word = String::new();
    for c in name.chars() {
        if is_word(c) {
            word.push(c);
            continue;
        }
        push_word(&mut out, &word);
        word.clear();
        out.push(c);
    }
    push_word(&mut out, &word);
    out
}

fn push_word(out: &mut String, word: &str) {
    match word {
        "St" => out.push_str("Saint"),
        "Ft" => out.push_str("Fort"),
        _ => out.push_str(word),
    }
}

fn is_canonical(id: &str) -> bool {
    if id == "UTC" {
        return true;
    }
    if BACKWARD_LINKS.contains(&id) {
        return false;
    }
    id.split_once('/')
        .is_some_and(|(area, _)| CANONICAL_AREAS.contains(&area))
}

/// Locale-style ordering: case-insensitive first, then exact
pub fn compare_city_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Builds the catalog from the timezone database
pub fn available_timezones() -> Vec<TimezoneConfig> {
    let mut catalog: Vec<TimezoneConfig> = TZ_VARIANTS
        .iter()
        .map(|tz| tz.name())
        .filter(|id| is_canonical(id))
        .map(|id| TimezoneConfig::new(format_city_name(id), id))
        .collect();

    catalog.sort_by(|a, b| {
        compare_city_names(&a.city, &b.city).then_with(|| a.timezone.cmp(&b.timezone))
    });
    catalog
}

/// Catalog entries whose city or identifier contains `query`, ignoring case
pub fn search_catalog(query: &str) -> Vec<TimezoneConfig> {
    let needle = query.trim().to_lowercase();
    AVAILABLE_TIMEZONES
        .iter()
        .filter(|tz| {
            needle.is_empty()
                || tz.city.to_lowercase().contains(&needle)
                || tz.timezone.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
