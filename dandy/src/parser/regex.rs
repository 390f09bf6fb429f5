//! `nom` combinators turning an already-simplified pattern into a
//! [`RegexTree`]: small `fn(&str) -> PResult<T>` functions, one per grammar
//! production, composed with `alt`/`many1`/`separated_list1`.

use crate::error::RegexError;
use crate::parser::err::{fail, NomError, PResult};
use crate::regex::{wildcard_set, RegexTree, RepeatKind};
use nom::character::complete::{char, one_of};
use nom::Parser;
use std::collections::BTreeSet;

pub(crate) fn parse(input: &str) -> Result<crate::regex::Regex, RegexError> {
    if input.is_empty() {
        return Ok(crate::regex::Regex::new(RegexTree::Epsilon));
    }

    match full_regex(input) {
        Ok((rest, tree)) => {
            if rest.is_empty() {
                Ok(crate::regex::Regex::new(tree))
            } else {
                Err(RegexError::TrailingInput(rest.to_string()))
            }
        }
        Err(nom::Err::Failure(NomError(err, _))) | Err(nom::Err::Error(NomError(err, _))) => {
            Err(err)
        }
        Err(nom::Err::Incomplete(_)) => Err(RegexError::TrailingInput(input.to_string())),
    }
}

fn full_regex(input: &str) -> PResult<RegexTree> {
    alternation(input)
}

fn alternation(input: &str) -> PResult<RegexTree> {
    let (rest, first) = sequence(input)?;
    let mut input = rest;
    let mut arms = vec![first];

    loop {
        match char::<_, NomError>('|').parse(input) {
            Ok((rest, _)) => {
                let (rest, arm) = sequence(rest)?;
                arms.push(arm);
                input = rest;
            }
            Err(_) => break,
        }
    }

    if arms.len() == 1 {
        Ok((input, arms.into_iter().next().unwrap()))
    } else {
        Ok((input, RegexTree::Alt(arms)))
    }
}

/// Parses one `re ::= basic+` arm: at least one basic is required, so a
/// bare `|`, a `)` with nothing before it, or running out of input
/// immediately is a malformed pattern (e.g. `"|a"`, `"a|"`, `"()"`).
fn sequence(input: &str) -> PResult<RegexTree> {
    let start = input;
    let mut input = input;
    let mut parts = Vec::new();
    loop {
        if input.is_empty() || input.starts_with('|') || input.starts_with(')') {
            break;
        }
        let (rest, basic) = basic(input)?;
        parts.push(basic);
        input = rest;
    }

    if parts.is_empty() {
        fail(start, RegexError::EmptyAlternationArm)
    } else if parts.len() == 1 {
        Ok((input, parts.into_iter().next().unwrap()))
    } else {
        Ok((input, RegexTree::Sequence(parts)))
    }
}

fn basic(input: &str) -> PResult<RegexTree> {
    let (input, elem) = atom(input)?;

    match one_of::<_, _, NomError>("*+?").parse(input) {
        Ok((rest, '*')) => Ok((rest, RegexTree::Repeat(Box::new(elem), RepeatKind::Star))),
        Ok((rest, '+')) => Ok((rest, RegexTree::Repeat(Box::new(elem), RepeatKind::Plus))),
        Ok((rest, '?')) => Ok((
            rest,
            RegexTree::Repeat(Box::new(elem), RepeatKind::Optional),
        )),
        _ => Ok((input, elem)),
    }
}

fn atom(input: &str) -> PResult<RegexTree> {
    if let Some(rest) = input.strip_prefix('(') {
        let (rest, inner) = alternation(rest)?;
        return match rest.strip_prefix(')') {
            Some(rest) => Ok((rest, inner)),
            None => fail(rest, RegexError::UnmatchedParen),
        };
    }

    if let Some(rest) = input.strip_prefix('[') {
        return set(rest);
    }

    if let Some(rest) = input.strip_prefix('.') {
        return Ok((rest, RegexTree::Set(wildcard_set())));
    }

    token(input)
}

fn set(input: &str) -> PResult<RegexTree> {
    let mut input = input;
    let mut negate = false;
    if let Some(rest) = input.strip_prefix('^') {
        negate = true;
        input = rest;
    }

    let mut chars = BTreeSet::new();
    loop {
        if input.is_empty() {
            return fail(input, RegexError::UnmatchedBracket);
        }
        if input.starts_with(']') {
            break;
        }
        let (rest, c) = set_char(input)?;
        chars.insert(c);
        input = rest;
    }

    if chars.is_empty() {
        return fail(input, RegexError::EmptySet);
    }

    input = &input[1..];

    let resolved = if negate {
        wildcard_set().difference(&chars).copied().collect()
    } else {
        chars
    };

    Ok((input, RegexTree::Set(resolved)))
}

fn set_char(input: &str) -> PResult<char> {
    let mut it = input.chars();
    let Some(c) = it.next() else {
        return fail(input, RegexError::UnmatchedBracket);
    };
    if c == '\\' {
        let rest = it.as_str();
        let Some(escaped) = rest.chars().next() else {
            return fail(input, RegexError::InvalidEscape('\\'));
        };
        if !crate::constants::is_set_metachar(escaped) {
            return fail(input, RegexError::InvalidEscape(escaped));
        }
        Ok((&rest[escaped.len_utf8()..], escaped))
    } else if crate::constants::is_set_metachar(c) {
        fail(input, RegexError::DanglingModifier(c))
    } else {
        Ok((it.as_str(), c))
    }
}

fn token(input: &str) -> PResult<RegexTree> {
    let mut it = input.chars();
    let Some(c) = it.next() else {
        return fail(input, RegexError::TrailingInput(String::new()));
    };
    if c == '\\' {
        let rest = it.as_str();
        let Some(escaped) = rest.chars().next() else {
            return fail(input, RegexError::InvalidEscape('\\'));
        };
        if !crate::constants::is_metachar(escaped) {
            return fail(input, RegexError::InvalidEscape(escaped));
        }
        Ok((&rest[escaped.len_utf8()..], RegexTree::Char(escaped)))
    } else if crate::constants::is_metachar(c) {
        fail(input, RegexError::DanglingModifier(c))
    } else {
        Ok((it.as_str(), RegexTree::Char(c)))
    }
}
