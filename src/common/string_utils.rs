//! String utility functions for report cells.

/// Join items with commas and wrap them in square brackets
///
/// # Examples
/// ```ignore
/// assert_eq!(bracket_list(["a", "b", "c"]), "[a,b,c]");
/// ```
pub fn bracket_list<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = items
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(",");
    format!("[{joined}]")
}

/// Render a boolean as `Yes` / `No`
pub fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}
