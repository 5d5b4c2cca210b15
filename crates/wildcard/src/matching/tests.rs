use rstest::rstest;

use super::*;

const GREEK: [&str; 9] = ["alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta", "iota"];

#[rstest]
#[case("", "", true)]
#[case("", "alphabeta", false)]
#[case("a", "", false)]
#[case("*", "", true)]
#[case("*", "alphabeta", true)]
fn test_special_cases(#[case] pattern: &str, #[case] haystack: &str, #[case] expected: bool) {
    assert_eq!(matches(pattern, haystack), expected);
}

#[rstest]
#[case("alpha", "alphabeta", false)]
#[case("alphabeta", "alphabeta", true)]
#[case("alphabeta", "alpha", false)]
#[case("alphabetx", "alphabeta", false)]
fn test_no_wildcards(#[case] pattern: &str, #[case] haystack: &str, #[case] expected: bool) {
    assert_eq!(matches(pattern, haystack), expected);
}

#[rstest]
#[case("alpha*", "alphabeta", true)]
#[case("alphabeta*", "alphabeta", true)]
#[case("beta*", "alphabeta", false)]
fn test_wildcard_suffix(#[case] pattern: &str, #[case] haystack: &str, #[case] expected: bool) {
    assert_eq!(matches(pattern, haystack), expected);
}

#[rstest]
#[case("*alpha", "alphabeta", false)]
#[case("*alphabeta", "alphabeta", true)]
#[case("*beta", "alphabeta", true)]
fn test_wildcard_prefix(#[case] pattern: &str, #[case] haystack: &str, #[case] expected: bool) {
    assert_eq!(matches(pattern, haystack), expected);
}

#[rstest]
#[case("alpha*beta", "alphabeta", true)]
#[case("a*a", "alphabeta", true)]
#[case("a*a", "aa", true)]
#[case("a*a", "a", false)]
#[case("alpha*gamma", "alphabeta", false)]
fn test_wildcard_middle(#[case] pattern: &str, #[case] haystack: &str, #[case] expected: bool) {
    assert_eq!(matches(pattern, haystack), expected);
}

#[rstest]
#[case("*a*", "alphabeta", true)]
#[case("*c*", "alphabeta", false)]
#[case("a*b*", "alphabeta", true)]
#[case("*a*b", "alphabeta", false)]
#[case("*a*b*", "alphabeta", true)]
#[case("*l*h*b*t*", "alphabeta", true)]
#[case("*t*b*", "alphabeta", false)]
fn test_multiple_wildcards(#[case] pattern: &str, #[case] haystack: &str, #[case] expected: bool) {
    assert_eq!(matches(pattern, haystack), expected);
}

#[rstest]
#[case("ALPHABETA", "alphabeta")]
#[case("alphabeta", "ALPHABETA")]
#[case("*A*B*", "alphabeta")]
#[case("*a*b*", "ALPHABETA")]
fn test_case_sensitivity(#[case] pattern: &str, #[case] haystack: &str) {
    assert!(!matches(pattern, haystack));
    assert!(matches_ci(pattern, haystack));
}

#[test]
fn test_empty_haystack() {
    assert!(matches("*", ""));
    assert!(!matches("**", ""));
    assert!(!matches("a*", ""));
    assert!(!matches("*a", ""));
    assert!(matches("", ""));
}

#[test]
fn test_consecutive_wildcards() {
    assert!(matches("a**b", "ab"));
    assert!(matches("a**b", "axxb"));
    assert!(matches("***", "anything"));
    assert!(matches("***a***", "a"));
    assert!(!matches("***a***", "b"));
}

#[test]
fn test_backtracking() {
    assert!(matches("*ab*cd", "ababcd"));
    assert!(matches("*foo*bar", "foofoofoobar"));
    assert!(matches("*.*", "a.b.c"));
    assert!(matches("a*c*e", "abcde"));
    assert!(!matches("*ab*xy", "ababab"));
    assert!(!matches("*a*a*a", "aa"));
}

#[test]
fn test_wildcard_is_never_literal() {
    assert!(matches("a*", "a*"));
    assert!(matches("*", "*"));
    assert!(matches("a*b", "a*b"));
    assert!(!matches("a*b", "a*"));
}

#[rstest]
#[case("世界", "世界", true)]
#[case("世界", "世", false)]
#[case("*世*界", "hello世test界", true)]
#[case("🔥*💧", "🔥test💧", true)]
#[case("🔥*💧", "🔥test", false)]
#[case("a*ö*z", "aäöüz", true)]
#[case("ä*", "a", false)]
fn test_utf8(#[case] pattern: &str, #[case] haystack: &str, #[case] expected: bool) {
    assert_eq!(matches(pattern, haystack), expected);
}

#[test]
fn test_many_wildcards_terminate() {
    let pattern = "*a".repeat(8);
    let haystack = "a".repeat(7);
    assert!(!matches(&pattern, &haystack));
    assert!(matches(&pattern, &"a".repeat(8)));
}

#[rstest]
#[case("Ärger*", "ärgerlich")]
#[case("ΣΊΣΥΦΟΣ", "σίσυφος")]
#[case("*STRAẞE", "hauptstraße")]
fn test_ci_unicode(#[case] pattern: &str, #[case] haystack: &str) {
    assert!(matches_ci(pattern, haystack));
}

#[test]
fn test_ci_limitations() {
    assert!(!matches_ci("STRASSE", "straße"));
}

#[test]
fn test_ci_is_superset() {
    let patterns = ["", "*", "a*", "*A*", "alpha*beta", "*b*", "ALPHA"];
    for pattern in patterns {
        for haystack in GREEK.iter().copied().chain(["", "alphabeta", "ALPHA"]) {
            if matches(pattern, haystack) {
                assert!(matches_ci(pattern, haystack), "pattern {:?}, haystack {:?}", pattern, haystack);
            }
        }
    }
}

#[test]
fn test_matches_any() {
    assert!(!matches_any("foo", Option::<Vec<&str>>::None.into_iter().flatten()));
    assert!(!matches_any("foo", Vec::<&str>::new()));
    assert!(!matches_any("*", std::iter::empty::<&str>()));

    assert!(matches_any("gamma", GREEK));
    assert!(matches_any("*a", GREEK));
    assert!(matches_any("bet*", GREEK));

    assert!(!matches_any("foo", GREEK));
    assert!(!matches_any("*ETA", GREEK));
    assert!(!matches_any("GAMMA", GREEK));
    assert!(!matches_any("BET*", GREEK));
}

#[test]
fn test_matches_any_owned() {
    let haystacks: Vec<String> = GREEK.iter().map(|s| s.to_string()).collect();
    assert!(matches_any("*silo*", &haystacks));
    assert!(matches_any("*silo*", haystacks));
}

#[test]
fn test_matches_any_ci() {
    let haystacks = ["alpha", "BETA", "gamma", "delta", "epsilon", "zeta", "eta", "theta", "iota"];

    assert!(!matches_any_ci("foo", haystacks));
    assert!(!matches_any_ci("foo", Vec::<&str>::new()));

    assert!(matches_any_ci("*ETA", haystacks));
    assert!(matches_any_ci("GAMMA", haystacks));
    assert!(matches_any_ci("BET*", haystacks));
    assert!(matches_any_ci("bet*", haystacks));
}

#[test]
fn test_matches_any_stops_at_first_match() {
    let mut visited = 0;
    let haystacks = GREEK.iter().inspect(|_| visited += 1);
    assert!(matches_any("beta", haystacks));
    assert_eq!(visited, 2);
}

#[test]
fn test_case() {
    assert_eq!(Case::default(), Case::Sensitive);
    assert_eq!(Case::from_ignore_case(true), Case::Insensitive);
    assert_eq!(Case::from_ignore_case(false), Case::Sensitive);

    assert!(!Case::Sensitive.matches("ALPHA*", "alphabeta"));
    assert!(Case::Insensitive.matches("ALPHA*", "alphabeta"));

    assert!(!Case::Sensitive.matches_any("GAMMA", GREEK));
    assert!(Case::Insensitive.matches_any("GAMMA", GREEK));
}
