use super::*;

#[test]
fn parse_accepts_hash_prefixed_tags() {
    assert_eq!(parse_language_hash("#java"), Some(Language::Java));
    assert_eq!(parse_language_hash("#python"), Some(Language::Python));
    assert_eq!(parse_language_hash("#js"), Some(Language::Js));
}

#[test]
fn parse_accepts_bare_tags() {
    assert_eq!(parse_language_hash("python"), Some(Language::Python));
}

#[test]
fn parse_rejects_unknown_and_empty_hashes() {
    assert_eq!(parse_language_hash(""), None);
    assert_eq!(parse_language_hash("#"), None);
    assert_eq!(parse_language_hash("#rust"), None);
    assert_eq!(parse_language_hash("#Java"), None);
}
