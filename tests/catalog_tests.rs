use world_clock::services::catalog::*;

#[cfg(test)]
mod catalog_tests {
    use super::*;

    #[test]
    fn test_format_city_name_basic() {
        assert_eq!(format_city_name("America/New_York"), "New York");
        assert_eq!(format_city_name("Europe/London"), "London");
        assert_eq!(format_city_name("Asia/Tokyo"), "Tokyo");
    }

    #[test]
    fn test_format_city_name_expands_abbreviations() {
        assert_eq!(format_city_name("America/St_Johns"), "Saint Johns");
        assert_eq!(format_city_name("America/St_Barthelemy"), "Saint Barthelemy");
        assert_eq!(format_city_name("America/Fort_Nelson"), "Fort Nelson");
        assert_eq!(format_city_name("Example/Ft_Test"), "Fort Test");
    }

    #[test]
    fn test_format_city_name_only_whole_words() {
        // "St" inside a word is left alone
        assert_eq!(format_city_name("Europe/Stockholm"), "Stockholm");
        assert_eq!(format_city_name("Europe/Istanbul"), "Istanbul");
    }

    #[test]
    fn test_format_city_name_splits_camel_case() {
        assert_eq!(format_city_name("Antarctica/DumontDUrville"), "Dumont DUrville");
        assert_eq!(format_city_name("America/Port-au-Prince"), "Port-au-Prince");
    }

    #[test]
    fn test_format_city_name_uses_last_segment() {
        assert_eq!(format_city_name("America/Argentina/Buenos_Aires"), "Buenos Aires");
        assert_eq!(format_city_name("America/Indiana/Knox"), "Knox");
        assert_eq!(format_city_name("UTC"), "UTC");
    }

    #[test]
    fn test_format_city_name_capitalizes_leading_letter() {
        assert_eq!(format_city_name("Test/lower_case"), "Lower case");
    }

    #[test]
    fn test_catalog_is_sorted_by_city() {
        let catalog = available_timezones();
        assert!(!catalog.is_empty());
        for pair in catalog.windows(2) {
            assert_ne!(
                compare_city_names(&pair[0].city, &pair[1].city),
                std::cmp::Ordering::Greater,
                "{} should not sort after {}",
                pair[0].city,
                pair[1].city
            );
        }
    }

    #[test]
    fn test_catalog_contains_defaults_and_skips_legacy_names() {
        let ids: Vec<&str> = AVAILABLE_TIMEZONES.iter().map(|tz| tz.timezone.as_str()).collect();
        for id in ["Europe/London", "America/New_York", "Asia/Tokyo", "Australia/Sydney", "Asia/Dubai", "UTC"] {
            assert!(ids.contains(&id), "catalog should contain {}", id);
        }
        assert!(!ids.contains(&"US/Eastern"));
        assert!(!ids.contains(&"EST"));
        assert!(!ids.iter().any(|id| id.starts_with("Etc/")));
    }

    #[test]
    fn test_catalog_lists_each_city_once() {
        let mut seen = std::collections::HashSet::new();
        for tz in AVAILABLE_TIMEZONES.iter() {
            assert!(seen.insert(tz.city.as_str()), "{} ({}) listed twice", tz.city, tz.timezone);
        }
    }

    #[test]
    fn test_catalog_skips_backward_links() {
        let ids: Vec<&str> = AVAILABLE_TIMEZONES.iter().map(|tz| tz.timezone.as_str()).collect();
        for alias in ["Asia/Calcutta", "America/Buenos_Aires", "Europe/Kiev", "Asia/Saigon", "Asia/Istanbul"] {
            assert!(!ids.contains(&alias), "catalog should not contain {}", alias);
        }
        for canonical in ["Asia/Kolkata", "America/Argentina/Buenos_Aires", "Europe/Kyiv", "Asia/Ho_Chi_Minh", "Europe/Istanbul", "Europe/Oslo"] {
            assert!(ids.contains(&canonical), "catalog should contain {}", canonical);
        }
    }

    #[test]
    fn test_catalog_entries_use_formatted_names() {
        for tz in AVAILABLE_TIMEZONES.iter() {
            assert_eq!(tz.city, format_city_name(&tz.timezone));
        }
    }

    #[test]
    fn test_compare_city_names_ignores_case_first() {
        use std::cmp::Ordering;
        assert_eq!(compare_city_names("apia", "Berlin"), Ordering::Less);
        assert_eq!(compare_city_names("Berlin", "apia"), Ordering::Greater);
        assert_eq!(compare_city_names("Dublin", "Dublin"), Ordering::Equal);
    }

    #[test]
    fn test_search_catalog() {
        let results = search_catalog("new york");
        assert!(results.iter().any(|tz| tz.timezone == "America/New_York"));

        let results = search_catalog("EUROPE/");
        assert!(!results.is_empty());
        assert!(results.iter().all(|tz| tz.timezone.starts_with("Europe/")));

        assert!(search_catalog("no-such-place-anywhere").is_empty());
        assert_eq!(search_catalog("").len(), AVAILABLE_TIMEZONES.len());
    }
}
