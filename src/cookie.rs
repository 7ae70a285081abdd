//! Cookie header parsing in the `document.cookie` format: `name=value`
//! pairs joined by `"; "`, values percent-escaped.

/// Retrieves the decoded value of the cookie with the specified name,
/// or `None` if no pair matches. Pairs without a `=` are skipped; the
/// first match wins.
pub fn get(header: &str, name: &str) -> Option<String> {
    for pair in header.split("; ") {
        let Some((n, v)) = pair.split_once('=') else {
            continue;
        };
        if n == name {
            return Some(decode(v));
        }
    }
    None
}

/// Rebuilds a header with the named pair created or overwritten, keeping
/// every other pair and the existing order.
pub fn set_pair(header: &str, name: &str, value: &str) -> String {
    let encoded = encode(value);
    let mut pairs: Vec<String> = Vec::new();
    let mut replaced = false;

    for pair in header.split("; ") {
        if pair.is_empty() {
            continue;
        }
        match pair.split_once('=') {
            Some((n, _)) if n == name && !replaced => {
                pairs.push(format!("{name}={encoded}"));
                replaced = true;
            }
            _ => pairs.push(pair.to_string()),
        }
    }

    if !replaced {
        pairs.push(format!("{name}={encoded}"));
    }

    pairs.join("; ")
}

/// Percent-decodes `%XX` escapes; anything malformed passes through
/// literally.
fn decode(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex(bytes[i + 1]), hex(bytes[i + 2])) {
                out.push((hi << 4) | lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for b in value.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

fn hex(b: u8) -> Option<u8> {
    (b as char).to_digit(16).map(|d| d as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_single_cookie() {
        assert_eq!(get("language=de", "language"), Some("de".to_string()));
    }

    #[test]
    fn test_get_among_other_cookies() {
        assert_eq!(
            get("foo=bar; language=de; baz=qux", "language"),
            Some("de".to_string())
        );
        assert_eq!(
            get("language=ru; foo=bar", "language"),
            Some("ru".to_string())
        );
        assert_eq!(
            get("foo=bar; baz=qux; language=fa", "language"),
            Some("fa".to_string())
        );
    }

    #[test]
    fn test_get_missing_cookie() {
        assert_eq!(get("foo=bar; baz=qux", "language"), None);
        assert_eq!(get("", "language"), None);
    }

    #[test]
    fn test_get_first_match_wins() {
        assert_eq!(
            get("language=de; language=ru", "language"),
            Some("de".to_string())
        );
    }

    #[test]
    fn test_get_splits_on_first_equals() {
        assert_eq!(
            get("language=de=extra", "language"),
            Some("de=extra".to_string())
        );
    }

    #[test]
    fn test_get_skips_malformed_pairs() {
        assert_eq!(
            get("garbage; language=en", "language"),
            Some("en".to_string())
        );
    }

    #[test]
    fn test_get_decodes_value() {
        assert_eq!(
            get("note=hello%20world", "note"),
            Some("hello world".to_string())
        );
    }

    #[test]
    fn test_decode_invalid_escape_passes_through() {
        assert_eq!(decode("50%"), "50%");
        assert_eq!(decode("%zz"), "%zz");
    }

    #[test]
    fn test_set_pair_into_empty_header() {
        assert_eq!(set_pair("", "language", "en"), "language=en");
    }

    #[test]
    fn test_set_pair_overwrites_existing() {
        assert_eq!(
            set_pair("foo=bar; language=de; baz=qux", "language", "ru"),
            "foo=bar; language=ru; baz=qux"
        );
    }

    #[test]
    fn test_set_pair_appends_when_absent() {
        assert_eq!(
            set_pair("foo=bar", "language", "fa"),
            "foo=bar; language=fa"
        );
    }

    #[test]
    fn test_set_pair_encodes_value() {
        assert_eq!(set_pair("", "note", "a b"), "note=a%20b");
    }

    #[test]
    fn test_set_then_get_round_trip() {
        let header = set_pair("foo=bar", "language", "de");
        assert_eq!(get(&header, "language"), Some("de".to_string()));
        assert_eq!(get(&header, "foo"), Some("bar".to_string()));
    }
}
