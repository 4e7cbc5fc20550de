//! String helpers for identifier display

/// Group characters from the right into chunks of `size`, joined by `separator`.
///
/// Inputs of at most `size` characters come back unchanged. Longer inputs get a
/// leading group of `1..=size` characters followed by full groups, so
/// `group_from_right("123456789", 4, "-")` is `"1-2345-6789"`.
///
/// A `size` of zero disables grouping.
pub fn group_from_right(s: &str, size: usize, separator: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    if size == 0 || chars.len() <= size {
        return s.to_string();
    }

    let lead = (chars.len() - 1) % size + 1;
    let groups = (chars.len() - lead) / size;
    let mut result = String::with_capacity(s.len() + groups * separator.len());

    result.extend(&chars[..lead]);
    for chunk in chars[lead..].chunks(size) {
        result.push_str(separator);
        result.extend(chunk);
    }
    result
}

/// Remove every occurrence of `separator` from `s`
pub fn strip_separator(s: &str, separator: &str) -> String {
    if separator.is_empty() {
        return s.to_string();
    }
    s.replace(separator, "")
}

/// Check that `s` is a non-empty run of ASCII digits
pub fn is_ascii_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

// ==================== Tests ====================
