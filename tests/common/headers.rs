use cors_override_rs::Header;

pub fn header_value<'a>(headers: &'a [Header], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|header| header.name.eq_ignore_ascii_case(name))
        .map(|header| header.value.as_str())
}

pub fn has_header(headers: &[Header], name: &str) -> bool {
    header_value(headers, name).is_some()
}
