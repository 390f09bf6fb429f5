//! Integration tests for the matcher façade: concrete scenarios,
//! property-based tests (`proptest`), and rejection paths, using the
//! `regex` crate as a differential oracle where useful.

use crate::error::RegexError;
use crate::matcher::Regex;
use proptest::prelude::*;
use regex::Regex as LibRegex;

fn m<'a>(re: &Regex, s: &'a str) -> Option<&'a str> {
    re.match_(s).map(|m| m.as_str())
}

fn fm<'a>(re: &Regex, s: &'a str) -> Option<&'a str> {
    re.fullmatch(s).map(|m| m.as_str())
}

fn se<'a>(re: &Regex, s: &'a str) -> Option<&'a str> {
    re.search(s).map(|m| m.as_str())
}

#[test]
fn scenario_alternation_and_star() {
    let re = Regex::compile("a?(b|bc|[de]*)*f+").unwrap();
    assert_eq!(m(&re, "abcdeeff"), Some("abcdeeff"));
    assert_eq!(fm(&re, "abcdeeff"), Some("abcdeeff"));
    assert_eq!(se(&re, "aabbcddeef"), Some("abbcddeef"));
}

#[test]
fn scenario_escaped_set() {
    let re = Regex::compile(r"[.*+?^)(\]\[}{\\abc]+").unwrap();
    assert_eq!(fm(&re, ")}].[{("), Some(")}].[{("));
    assert_eq!(m(&re, "*//*.*"), Some("*"));
    assert_eq!(fm(&re, "*//*.*"), None);
    assert_eq!(se(&re, "*//*.*"), Some("*"));
}

#[test]
fn scenario_negated_set() {
    let re = Regex::compile("[Aa]?[^Ab]+g+").unwrap();
    assert_eq!(m(&re, "aaxxxxxxxgxxxxxxg"), Some("aaxxxxxxxgxxxxxxg"));
    assert_eq!(m(&re, "aAxxxxxxxgxxxxxxg"), None);
    assert_eq!(se(&re, "aAxxxxxxxgxxxxxxg"), Some("Axxxxxxxgxxxxxxg"));
}

#[test]
fn scenario_counted_repetition() {
    let re = Regex::compile("a{2}|[bd]{3,}|(c|ef+){4,6}").unwrap();
    for s in ["aa", "bbd", "bddb", "cceffc", "cccccef"] {
        assert_eq!(fm(&re, s), Some(s), "expected fullmatch on {s}");
    }
    assert_eq!(m(&re, "aaa"), Some("aa"));
    assert_eq!(fm(&re, "aaa"), None);
}

#[test]
fn scenario_sub_literal_and_callable() {
    let re = Regex::compile("a?b+c*").unwrap();
    let out = re.sub("<...>", "abcxcbabcxxbc");
    assert_eq!(out, "<...>xc<...><...>xx<...>");

    let upper = |found: &crate::matcher::Match<'_>| format!("<{}>", found.as_str().to_uppercase());
    let out = re.sub(upper, "abcxcbabcxxbc");
    assert_eq!(out, "<ABC>xc<B><ABC>xx<BC>");
}

#[test]
fn scenario_findall() {
    let re = Regex::compile("a?b+c*").unwrap();
    let found: Vec<&str> = re
        .findall("abccbabcbc")
        .iter()
        .map(|m| m.as_str())
        .collect();
    assert_eq!(found, vec!["abcc", "b", "abc", "bc"]);

    assert!(re.findall("aaaa").is_empty());

    let found: Vec<&str> = re.findall("bbbb").iter().map(|m| m.as_str()).collect();
    assert_eq!(found, vec!["bbbb"]);
}

#[test]
fn fullmatch_iff_match_consumes_everything() {
    let re = Regex::compile("a(b|c)*d").unwrap();
    for s in ["ad", "abcbcd", "abcbc", "xad"] {
        let full = re.fullmatch(s).is_some();
        let partial_end = re.match_(s).map(|m| m.end());
        assert_eq!(full, partial_end == Some(s.len()));
    }
}

#[test]
fn sub_is_identity_when_no_match() {
    let re = Regex::compile("zzz+").unwrap();
    let s = "there are no matches here";
    assert!(re.findall(s).is_empty());
    assert_eq!(re.sub("X", s), s);
}

#[test]
fn finditer_reconstructs_the_input() {
    let re = Regex::compile("a?b+c*").unwrap();
    let s = "abccbabcbc";
    let mut last = 0;
    let mut rebuilt = String::new();
    for found in re.finditer(s) {
        rebuilt.push_str(&s[last..found.start()]);
        rebuilt.push_str(found.as_str());
        last = found.end();
    }
    rebuilt.push_str(&s[last..]);
    assert_eq!(rebuilt, s);
}

#[test]
fn finditer_zero_length_advances_by_one() {
    let re = Regex::compile("a*").unwrap();
    let matches: Vec<_> = re.finditer("baab").map(|m| (m.start(), m.end())).collect();
    let mut starts: Vec<usize> = matches.iter().map(|&(s, _)| s).collect();
    let mut dedup = starts.clone();
    dedup.dedup();
    starts.sort_unstable();
    dedup.sort_unstable();
    assert_eq!(starts.len(), dedup.len());
}

#[test]
fn pathological_prefix_matches_without_blowing_up() {
    // a? repeated many times followed by a fixed tail: the NFA/DFA walk is
    // one scan of the input, not exponential backtracking over the optional
    // prefixes.
    let pattern = "a?a?a?a?a?a?a?a?a?a?aaaaaaaaaa";
    let re = Regex::compile(pattern).unwrap();
    let input = "a".repeat(20);
    assert!(re.match_(&input).is_some());
}

#[test]
fn rejects_invalid_escape() {
    assert_eq!(Regex::compile(r"\d").unwrap_err(), RegexError::InvalidEscape('d'));
}

#[test]
fn rejects_empty_set() {
    assert_eq!(Regex::compile("[]").unwrap_err(), RegexError::EmptySet);
}

#[test]
fn rejects_unmatched_paren() {
    assert_eq!(Regex::compile("(a").unwrap_err(), RegexError::UnmatchedParen);
}

#[test]
fn rejects_unmatched_bracket() {
    assert_eq!(Regex::compile("[a").unwrap_err(), RegexError::UnmatchedBracket);
}

#[test]
fn rejects_unmatched_brace() {
    assert_eq!(Regex::compile("a{2").unwrap_err(), RegexError::UnmatchedBrace);
}

#[test]
fn rejects_malformed_repetition() {
    assert!(matches!(
        Regex::compile("a{}").unwrap_err(),
        RegexError::MalformedRepetition(_)
    ));
}

#[test]
fn rejects_invalid_repetition_range() {
    assert_eq!(
        Regex::compile("a{3,2}").unwrap_err(),
        RegexError::InvalidRepetitionRange { n: 3, m: 2 }
    );
}

#[test]
fn rejects_dangling_modifier() {
    assert_eq!(Regex::compile("*a").unwrap_err(), RegexError::DanglingModifier('*'));
}

#[test]
fn rejects_empty_alternation_arm() {
    assert_eq!(Regex::compile("|a").unwrap_err(), RegexError::EmptyAlternationArm);
    assert_eq!(Regex::compile("a|").unwrap_err(), RegexError::EmptyAlternationArm);
    assert_eq!(Regex::compile("()").unwrap_err(), RegexError::EmptyAlternationArm);
}

#[test]
fn rejects_trailing_input() {
    assert!(matches!(
        Regex::compile("a)").unwrap_err(),
        RegexError::TrailingInput(_)
    ));
}

proptest! {
    /// Property 1: NFA and DFA built from the same pattern agree on the
    /// longest accepting prefix for every input.
    #[test]
    fn nfa_and_dfa_agree(s in "[ab]{0,8}") {
        let ast = crate::parser::regex("a(b|a)*b").unwrap();
        let nfa = ast.to_nfa();
        let dfa = nfa.to_dfa();
        prop_assert_eq!(nfa.accepts(&s), dfa.accepts(&s));
    }

    /// Property 3: fullmatch succeeds iff match succeeds and consumes the
    /// whole string.
    #[test]
    fn fullmatch_matches_spec(s in "[abc]{0,10}") {
        let re = Regex::compile("(a|b)*c").unwrap();
        let full = re.fullmatch(&s).is_some();
        let matched_all = re.match_(&s).map(|m| m.end()) == Some(s.len());
        prop_assert_eq!(full, matched_all);
    }

    /// Literal (metacharacter-free) patterns behave the same as the `regex`
    /// crate for plain containment checks.
    #[test]
    fn literal_concatenation_matches_oracle(s in "[a-z]{1,6}") {
        let pattern: String = s.chars().collect();
        let re = Regex::compile(&pattern).unwrap();
        let oracle = LibRegex::new(&format!("^{}$", regex::escape(&pattern))).unwrap();
        prop_assert_eq!(re.fullmatch(&pattern).is_some(), oracle.is_match(&pattern));
    }

    /// Property 5: sub is the identity exactly when there is nothing to
    /// replace.
    #[test]
    fn sub_identity_matches_finditer_emptiness(s in "[xyz]{0,8}") {
        let re = Regex::compile("xy+").unwrap();
        let unchanged = re.sub("Q", &s) == s;
        let no_matches = re.findall(&s).is_empty();
        prop_assert_eq!(unchanged, no_matches);
    }
}
