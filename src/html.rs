/// Escape `&`, `<`, `>`, `"` and `'` as HTML entities.
///
/// ```
/// use dryutils::html::sanitize_string;
///
/// assert_eq!(sanitize_string("a < b && c"), "a &lt; b &amp;&amp; c");
/// ```
pub fn sanitize_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut last = 0;

    for (i, ch) in s.char_indices() {
        let escaped = match ch {
            '&' => "&amp;",
            '<' => "&lt;",
            '>' => "&gt;",
            '"' => "&quot;",
            '\'' => "&#x27;",
            _ => continue,
        };
        result.push_str(&s[last..i]);
        result.push_str(escaped);
        last = i + ch.len_utf8();
    }

    result.push_str(&s[last..]);
    result
}
