/// Splits a comma-separated address list, trimming surrounding whitespace.
pub fn split_list(value: &str) -> Vec<String> {
    value.split(',').map(|addr| addr.trim().to_string()).collect()
}

/// An absent or empty field maps to `None`, never to an empty list.
pub fn split_optional(value: Option<&str>) -> Option<Vec<String>> {
    value.filter(|value| !value.is_empty()).map(split_list)
}
