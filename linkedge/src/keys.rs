//! Canonicalization of short-link keys.
//!
//! Link keys are persisted URI-decoded and punycode-encoded. Every lookup
//! that takes a caller-supplied key must run it through [`normalize_key`]
//! before binding it into a query predicate, otherwise keys containing
//! percent-escapes or non-ASCII characters miss rows that are actually
//! present.

use std::borrow::Cow;

/// Canonicalize a caller-supplied key into the stored form:
/// percent-decode first, then punycode-encode.
///
/// Already-canonical keys are fixpoints of this function, so it is safe to
/// apply at every boundary.
pub fn normalize_key(key: &str) -> String {
    let decoded = match urlencoding::decode(key) {
        Ok(decoded) => decoded,
        // Escapes that decode to invalid UTF-8 are left as-is; the lookup
        // will simply not match.
        Err(_) => Cow::Borrowed(key),
    };
    puny_encode(&decoded)
}

/// Punycode-encode each dot-separated label of `input`, leaving ASCII labels
/// untouched. Labels that cannot be encoded are passed through unchanged.
fn puny_encode(input: &str) -> String {
    input
        .split('.')
        .map(encode_label)
        .collect::<Vec<_>>()
        .join(".")
}

fn encode_label(label: &str) -> String {
    if label.is_ascii() {
        return label.to_string();
    }
    match idna::punycode::encode_str(label) {
        Some(encoded) => format!("xn--{encoded}"),
        None => label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_keys_are_unchanged() {
        assert_eq!(normalize_key("github"), "github");
        assert_eq!(normalize_key("foo/bar-baz_7"), "foo/bar-baz_7");
    }

    #[test]
    fn percent_escapes_are_decoded() {
        assert_eq!(normalize_key("hello%20world"), "hello world");
    }

    #[test]
    fn non_ascii_keys_are_punycode_encoded() {
        assert_eq!(normalize_key("bücher"), "xn--bcher-kva");
        assert_eq!(normalize_key("☃"), "xn--n3h");
    }

    #[test]
    fn percent_encoded_and_literal_forms_normalize_identically() {
        // "b%C3%BCcher" percent-decodes to "bücher"
        assert_eq!(normalize_key("b%C3%BCcher"), normalize_key("bücher"));
        assert_eq!(normalize_key("%E2%98%83"), normalize_key("☃"));
    }

    #[test]
    fn canonical_keys_are_fixpoints() {
        let canonical = normalize_key("bücher");
        assert_eq!(normalize_key(&canonical), canonical);
    }

    #[test]
    fn labels_are_encoded_independently() {
        assert_eq!(normalize_key("bücher.shop"), "xn--bcher-kva.shop");
    }
}
