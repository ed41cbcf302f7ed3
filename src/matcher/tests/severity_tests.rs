use super::*;

fn tokens(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[test]
fn test_explicit_markers() {
    assert_eq!(severity_tag(&tokens(&["moteur", "v1"])), SeverityLevel::V1);
    assert_eq!(severity_tag(&tokens(&["v2", "moteur"])), SeverityLevel::V2);
    assert_eq!(severity_tag(&tokens(&["v3"])), SeverityLevel::V3);
}

#[test]
fn test_bare_digits_map_to_levels() {
    assert_eq!(severity_tag(&tokens(&["moteur", "1"])), SeverityLevel::V1);
    assert_eq!(severity_tag(&tokens(&["2"])), SeverityLevel::V2);
    assert_eq!(severity_tag(&tokens(&["3"])), SeverityLevel::V3);
}

#[test]
fn test_marker_priority_order() {
    // "v2" outranks "3" even when "3" comes first in the token stream.
    assert_eq!(severity_tag(&tokens(&["3", "v2"])), SeverityLevel::V2);
    // "v1" outranks everything.
    assert_eq!(severity_tag(&tokens(&["2", "v3", "v1"])), SeverityLevel::V1);
}

#[test]
fn test_no_marker_is_not_found() {
    assert_eq!(severity_tag(&tokens(&["moteur", "bloqu"])), SeverityLevel::NotFound);
    assert_eq!(severity_tag(&[]), SeverityLevel::NotFound);
}
