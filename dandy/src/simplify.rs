//! The desugaring pass: rewrites `{n}`, `{n,}` and `{n,m}` counted
//! repetition into the primitive grammar (`*`, `+`, `?`, concatenation,
//! alternation, grouping, sets) that [`crate::parser::regex`] understands.
//! This is the first of two parsing passes; it operates purely on pattern
//! text and never builds a graph.

use crate::constants;
use crate::error::RegexError;
use crate::parser::err::{fail, NomError, PResult};
use nom::character::complete::char;
use nom::combinator::opt;
use nom::Parser;

/// Rewrites every counted repetition in `pattern` away, returning a pattern
/// built only from `*`, `+`, `?`, groups, sets, the wildcard and literal
/// tokens.
pub fn simplify(pattern: &str) -> Result<String, RegexError> {
    if pattern.is_empty() {
        return Ok(String::new());
    }

    match full(pattern) {
        Ok((rest, out)) => {
            if rest.is_empty() {
                Ok(out)
            } else {
                Err(RegexError::TrailingInput(rest.to_string()))
            }
        }
        Err(nom::Err::Failure(NomError(err, _))) | Err(nom::Err::Error(NomError(err, _))) => {
            Err(err)
        }
        Err(nom::Err::Incomplete(_)) => Err(RegexError::TrailingInput(pattern.to_string())),
    }
}

fn full(input: &str) -> PResult<String> {
    let (mut input, first) = alternative(input)?;
    let mut out = first;
    loop {
        match char::<_, NomError>('|').parse(input) {
            Ok((rest, _)) => {
                let (rest, part) = alternative(rest)?;
                out.push('|');
                out.push_str(&part);
                input = rest;
            }
            Err(_) => break,
        }
    }
    Ok((input, out))
}

/// Parses one `re ::= basic+` arm: at least one basic is required, so a
/// bare `|`, a `)` with nothing before it, or running out of input
/// immediately is a malformed pattern (e.g. `"|a"`, `"a|"`, `"()"`).
fn alternative(mut input: &str) -> PResult<String> {
    let start = input;
    let mut out = String::new();
    loop {
        if input.is_empty() || input.starts_with('|') || input.starts_with(')') {
            break;
        }
        let (rest, basic) = basic(input)?;
        out.push_str(&basic);
        input = rest;
    }
    if out.is_empty() {
        return fail(start, RegexError::EmptyAlternationArm);
    }
    Ok((input, out))
}

fn basic(input: &str) -> PResult<String> {
    let (input, atom) = atom(input)?;

    if let Ok((rest, m)) = nom::character::complete::one_of::<_, _, NomError>("*+?").parse(input) {
        return Ok((rest, format!("{atom}{m}")));
    }

    if input.starts_with('{') {
        return counted(input, &atom);
    }

    Ok((input, atom))
}

enum IterKind {
    Exact,
    Unlimited,
    Range,
}

fn number(input: &str) -> PResult<u32> {
    if let Some(rest) = input.strip_prefix('0') {
        return Ok((rest, 0));
    }
    let digits: String = input.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return fail(input, RegexError::MalformedRepetition(input.to_string()));
    }
    let rest = &input[digits.len()..];
    let n: u32 = digits.parse().unwrap_or(u32::MAX);
    Ok((rest, n))
}

fn opt_number(input: &str) -> (&str, Option<u32>) {
    match number(input) {
        Ok((rest, n)) => (rest, Some(n)),
        Err(_) => (input, None),
    }
}

fn counted<'a>(input: &'a str, atom_src: &str) -> PResult<'a, String> {
    let orig = input;
    let (input, _) = char::<_, NomError>('{').parse(input)?;

    let (input, n) = opt_number(input);
    let (input, comma) = opt(char::<_, NomError>(',')).parse(input)?;

    let (input, kind, n, m) = if comma.is_some() {
        let (input, m) = opt_number(input);
        match (n, m) {
            (Some(n), Some(m)) => {
                if m < n {
                    return fail(
                        orig,
                        RegexError::InvalidRepetitionRange { n, m },
                    );
                }
                (input, IterKind::Range, n, m)
            }
            (Some(n), None) => (input, IterKind::Unlimited, n, 0),
            (None, _) => {
                return fail(
                    orig,
                    RegexError::MalformedRepetition(orig.to_string()),
                )
            }
        }
    } else {
        match n {
            Some(n) => (input, IterKind::Exact, n, 0),
            None => {
                return fail(
                    orig,
                    RegexError::MalformedRepetition(orig.to_string()),
                )
            }
        }
    };

    let (input, _) = match char::<_, NomError>('}').parse(input) {
        Ok(v) => v,
        Err(_) => return fail(orig, RegexError::UnmatchedBrace),
    };

    let mut out = String::new();
    for _ in 0..n {
        out.push_str(atom_src);
    }

    match kind {
        IterKind::Exact => {}
        IterKind::Unlimited => {
            if n == 0 {
                out.push('(');
                out.push_str(atom_src);
                out.push_str(")*");
            } else {
                out.push('(');
                out.push_str(atom_src);
                out.push_str(")+");
            }
        }
        IterKind::Range => {
            for _ in 0..(m - n) {
                out.push('(');
                out.push_str(atom_src);
                out.push_str(")?");
            }
        }
    }

    Ok((input, out))
}

fn atom(input: &str) -> PResult<String> {
    if let Some(rest) = input.strip_prefix('(') {
        let (rest, inner) = full(rest)?;
        return match rest.strip_prefix(')') {
            Some(rest) => Ok((rest, format!("({inner})"))),
            None => fail(rest, RegexError::UnmatchedParen),
        };
    }

    if let Some(rest) = input.strip_prefix('[') {
        return set(rest);
    }

    if let Some(rest) = input.strip_prefix('.') {
        return Ok((rest, ".".to_string()));
    }

    token(input, &constants::METACHARS)
}

fn set(input: &str) -> PResult<String> {
    let mut out = String::from("[");
    let mut input = input;

    if let Some(rest) = input.strip_prefix('^') {
        out.push('^');
        input = rest;
    }

    let mut any = false;
    loop {
        if input.is_empty() {
            return fail(input, RegexError::UnmatchedBracket);
        }
        if input.starts_with(']') {
            break;
        }
        let (rest, tok) = token(input, &constants::SET_METACHARS)?;
        out.push_str(&tok);
        input = rest;
        any = true;
    }

    if !any {
        return fail(input, RegexError::EmptySet);
    }

    input = &input[1..];
    out.push(']');
    Ok((input, out))
}

fn token<'a>(input: &'a str, meta: &[char]) -> PResult<'a, String> {
    let mut chars = input.chars();
    let Some(c) = chars.next() else {
        return fail(input, RegexError::DanglingModifier(' '));
    };

    if c == '\\' {
        let rest = chars.as_str();
        let Some(escaped) = rest.chars().next() else {
            return fail(input, RegexError::InvalidEscape('\\'));
        };
        if !meta.contains(&escaped) {
            return fail(input, RegexError::InvalidEscape(escaped));
        }
        let after = &rest[escaped.len_utf8()..];
        Ok((after, format!("\\{escaped}")))
    } else if meta.contains(&c) {
        fail(input, RegexError::DanglingModifier(c))
    } else {
        let after = chars.as_str();
        Ok((after, c.to_string()))
    }
}
