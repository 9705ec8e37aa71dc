/// Splits a comma-separated header list, trimming surrounding whitespace.
///
/// Empty segments are kept: an empty header value parses as one empty
/// element, so intersecting against it still registers as a list change.
pub fn split_list(value: &str) -> Vec<String> {
    value.split(',').map(|part| part.trim().to_string()).collect()
}

/// Elements of `a` that also occur in `b`, compared case-insensitively,
/// preserving `a`'s order and casing. Empty `b` always yields empty.
///
/// Header names and methods are ASCII tokens, so ASCII folding is the
/// whole story here.
pub fn intersect(a: &[String], b: &[String]) -> Vec<String> {
    if b.is_empty() {
        return Vec::new();
    }

    a.iter()
        .filter(|item| b.iter().any(|other| item.eq_ignore_ascii_case(other)))
        .cloned()
        .collect()
}

/// Elements of `u` not present in `s`, compared case-insensitively,
/// preserving `u`'s order. Empty `s` yields a copy of `u`.
pub fn complement(s: &[String], u: &[String]) -> Vec<String> {
    if s.is_empty() {
        return u.to_vec();
    }

    u.iter()
        .filter(|item| !s.iter().any(|other| item.eq_ignore_ascii_case(other)))
        .cloned()
        .collect()
}

/// Lower-cases every element of a header list.
pub(crate) fn lower_all(values: &[String]) -> Vec<String> {
    values.iter().map(|value| value.to_ascii_lowercase()).collect()
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
