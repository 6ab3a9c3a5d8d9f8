//! Display formatting for treasury figures

/// Format a dollar amount with thousands separators, e.g. `$1,234,568`
pub fn format_currency(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return format!("${:.*}", decimals, 0.0);
    }

    let fixed = format!("{:.*}", decimals, value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let is_zero = fixed.bytes().all(|b| b == b'0' || b == b'.');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    if fraction.is_empty() {
        format!("{}${}", sign, grouped)
    } else {
        format!("{}${}.{}", sign, grouped, fraction)
    }
}

/// Percent-encode everything except the characters URI components leave alone
fn encode_uri_component(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for byte in text.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Link to the subgraph's query explorer preloaded with `query_document`
pub fn subgraph_query_explorer_url(subgraph_url: &str, query_document: &str) -> String {
    format!(
        "{}/graphql?query={}",
        subgraph_url.trim_end_matches('/'),
        encode_uri_component(query_document)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234567.891, 0), "$1,234,568");
        assert_eq!(format_currency(1234.5, 2), "$1,234.50");
        assert_eq!(format_currency(999.0, 0), "$999");
        assert_eq!(format_currency(0.0, 0), "$0");
        assert_eq!(format_currency(-2500.0, 0), "-$2,500");
        assert_eq!(format_currency(-0.001, 2), "$0.00");
        assert_eq!(format_currency(f64::NAN, 0), "$0");
    }

    #[test]
    fn test_encode_uri_component() {
        assert_eq!(encode_uri_component("a b"), "a%20b");
        assert_eq!(encode_uri_component("{x:1}"), "%7Bx%3A1%7D");
        assert_eq!(encode_uri_component("safe-_.!~*'()"), "safe-_.!~*'()");
        assert_eq!(encode_uri_component("é"), "%C3%A9");
    }

    #[test]
    fn test_explorer_url() {
        assert_eq!(
            subgraph_query_explorer_url("https://example.org/subgraph/", "query { x }"),
            "https://example.org/subgraph/graphql?query=query%20%7B%20x%20%7D"
        );
    }
}
