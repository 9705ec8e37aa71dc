use super::*;

fn collection(pairs: &[(&str, &str)]) -> HeaderCollection {
    HeaderCollection::from_headers(
        pairs
            .iter()
            .map(|(name, value)| Header::new(*name, *value))
            .collect(),
    )
}

mod value {
    use super::*;

    #[test]
    fn should_find_header_when_casing_differs_then_return_first_value() {
        let headers = collection(&[("origin", "https://a.test"), ("Origin", "https://b.test")]);

        assert_eq!(headers.value("ORIGIN"), Some("https://a.test"));
    }

    #[test]
    fn should_return_none_when_header_absent_then_report_missing() {
        let headers = collection(&[("Accept", "*/*")]);

        assert_eq!(headers.value("Origin"), None);
    }
}

mod set {
    use super::*;

    #[test]
    fn should_overwrite_first_occurrence_when_header_exists_then_keep_position() {
        let mut headers = collection(&[("Accept", "*/*"), ("X-Test", "1")]);

        headers.set("x-test", "2");

        let entries = headers.into_headers();
        assert_eq!(entries[1], Header::new("X-Test", "2"));
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn should_append_header_when_name_absent_then_preserve_existing_order() {
        let mut headers = collection(&[("Accept", "*/*")]);

        headers.set("X-New", "yes");

        let entries = headers.into_headers();
        assert_eq!(entries.last(), Some(&Header::new("X-New", "yes")));
    }
}

mod remove {
    use super::*;

    #[test]
    fn should_remove_all_occurrences_when_name_repeats_then_count_them() {
        let mut headers = collection(&[("Cookie", "a=1"), ("Accept", "*/*"), ("cookie", "b=2")]);

        let removed = headers.remove("COOKIE");

        assert_eq!(removed, 2);
        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn should_remove_listed_names_when_multiple_given_then_leave_rest_untouched() {
        let mut headers = collection(&[
            ("Authorization", "Bearer x"),
            ("Accept", "*/*"),
            ("Cookie", "a=1"),
        ]);

        let removed = headers.remove_many(&["authorization", "cookie"]);

        assert_eq!(removed, 2);
        assert_eq!(headers.value("Accept"), Some("*/*"));
    }

    #[test]
    fn should_remove_nothing_when_names_absent_then_return_zero() {
        let mut headers = collection(&[("Accept", "*/*")]);

        assert_eq!(headers.remove_many(&["Cookie"]), 0);
        assert_eq!(headers.len(), 1);
    }
}
