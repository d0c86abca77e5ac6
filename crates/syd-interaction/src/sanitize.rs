//! Sanitation of model output before JSON parsing.
//!
//! Even with a JSON response mime type the model occasionally wraps its
//! output in code fences or leaks prose around the object. Everything that
//! comes back from the API goes through [`clean_to_json_object`] before it
//! reaches a parser.

/// Reduces raw model output to the JSON object it (hopefully) contains.
///
/// Three passes:
/// 1. strip a leading ```` ```json ````/```` ``` ```` fence and a trailing fence,
/// 2. slice from the first `{` to the last `}` to drop surrounding noise,
/// 3. remove control characters that are invalid inside JSON (keeping
///    `\t`, `\n`, `\r`).
pub fn clean_to_json_object(text: &str) -> String {
    let mut s = text.trim();

    for prefix in ["```json", "```JSON", "```"] {
        if let Some(rest) = s.strip_prefix(prefix) {
            s = rest.trim_start();
            break;
        }
    }
    if let Some(rest) = s.strip_suffix("```") {
        s = rest.trim_end();
    }

    let sliced = match (s.find('{'), s.rfind('}')) {
        (Some(start), Some(end)) if end > start => &s[start..=end],
        _ => s,
    };

    sliced
        .chars()
        .filter(|&c| !c.is_control() || matches!(c, '\t' | '\n' | '\r'))
        .collect()
}
