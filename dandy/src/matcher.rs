//! The matcher façade: `compile`, `match_`, `fullmatch`, `search`,
//! `finditer`, `findall` and `sub` built on top of the compiled DFA.

use crate::dfa::Dfa;
use crate::error::RegexError;
use crate::nfa::Nfa;

/// A compiled pattern. Compilation also performs subset construction
/// eagerly, since every match operation this façade offers needs to
/// re-scan from the start of the automaton at least once, and a DFA walk
/// beats repeated NFA closures for that access pattern.
#[derive(Debug, Clone)]
pub struct Regex {
    pattern: String,
    dfa: Dfa,
}

/// A single match produced by the façade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match<'a> {
    haystack: &'a str,
    start: usize,
    end: usize,
    /// Reserved for capture groups; kept for API stability, but no
    /// construct in this grammar introduces a group boundary, so it is
    /// always empty.
    pub groups: Vec<Option<(usize, usize)>>,
}

impl<'a> Match<'a> {
    pub fn as_str(&self) -> &'a str {
        &self.haystack[self.start..self.end]
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

/// Something a matched substring can be replaced with in [`Regex::sub`].
/// Implemented for string-likes (literal replacement) and for
/// `Fn(&Match) -> String` (computed replacement), so callers don't need to
/// box a closure or branch on a dynamic type to pick between them.
pub trait Replacement {
    fn render(&self, m: &Match<'_>) -> String;
}

impl Replacement for &str {
    fn render(&self, _m: &Match<'_>) -> String {
        self.to_string()
    }
}

impl Replacement for String {
    fn render(&self, _m: &Match<'_>) -> String {
        self.clone()
    }
}

impl<F> Replacement for F
where
    F: Fn(&Match<'_>) -> String,
{
    fn render(&self, m: &Match<'_>) -> String {
        self(m)
    }
}

impl Regex {
    /// Compiles `pattern`: simplify, parse to AST, Thompson-construct an
    /// NFA, then subset-construct a DFA.
    pub fn compile(pattern: &str) -> Result<Regex, RegexError> {
        let ast = crate::parser::regex(pattern)?;
        let nfa: Nfa = ast.to_nfa();
        let dfa = nfa.to_dfa();
        Ok(Regex {
            pattern: pattern.to_string(),
            dfa,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Longest match anchored at the start of `s`.
    pub fn match_<'a>(&self, s: &'a str) -> Option<Match<'a>> {
        let end = self.dfa.accepts(s)?;
        Some(Match {
            haystack: s,
            start: 0,
            end,
            groups: Vec::new(),
        })
    }

    /// Matches only if the whole of `s` is consumed.
    pub fn fullmatch<'a>(&self, s: &'a str) -> Option<Match<'a>> {
        let end = self.dfa.accepts(s)?;
        if end == s.len() {
            Some(Match {
                haystack: s,
                start: 0,
                end,
                groups: Vec::new(),
            })
        } else {
            None
        }
    }

    /// Finds the first match anywhere in `s`, trying every byte offset (at
    /// a `char` boundary) in order until one admits a match.
    pub fn search<'a>(&self, s: &'a str) -> Option<Match<'a>> {
        let boundaries = s.char_indices().map(|(i, _)| i).chain(std::iter::once(s.len()));
        for byte_start in boundaries {
            if let Some(end) = self.dfa.accepts(&s[byte_start..]) {
                return Some(Match {
                    haystack: s,
                    start: byte_start,
                    end: byte_start + end,
                    groups: Vec::new(),
                });
            }
        }
        None
    }

    /// A lazy, non-overlapping iterator over every match in `s`.
    ///
    /// The cursor advances by `max(1, match length)` after each match, so a
    /// zero-length match never repeats at the same position.
    pub fn finditer<'a>(&'a self, s: &'a str) -> FindIter<'a> {
        FindIter {
            regex: self,
            haystack: s,
            pos: 0,
        }
    }

    pub fn findall<'a>(&self, s: &'a str) -> Vec<Match<'a>> {
        self.finditer(s).collect()
    }

    /// Replaces every non-overlapping match of this pattern in `s`, copying
    /// the untouched text between matches through unchanged.
    pub fn sub(&self, replacement: impl Replacement, s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        let mut last = 0;
        for m in self.finditer(s) {
            out.push_str(&s[last..m.start()]);
            out.push_str(&replacement.render(&m));
            last = m.end();
        }
        out.push_str(&s[last..]);
        out
    }
}

pub struct FindIter<'a> {
    regex: &'a Regex,
    haystack: &'a str,
    pos: usize,
}

impl<'a> Iterator for FindIter<'a> {
    type Item = Match<'a>;

    fn next(&mut self) -> Option<Match<'a>> {
        while self.pos <= self.haystack.len() {
            if !self.haystack.is_char_boundary(self.pos) {
                self.pos += 1;
                continue;
            }
            if let Some(end) = self.regex.dfa.accepts(&self.haystack[self.pos..]) {
                let start = self.pos;
                let absolute_end = start + end;
                self.pos = if end == 0 {
                    next_char_boundary(self.haystack, start)
                } else {
                    absolute_end
                };
                return Some(Match {
                    haystack: self.haystack,
                    start,
                    end: absolute_end,
                    groups: Vec::new(),
                });
            }
            self.pos = next_char_boundary(self.haystack, self.pos);
        }
        None
    }
}

fn next_char_boundary(s: &str, pos: usize) -> usize {
    if pos >= s.len() {
        return pos + 1;
    }
    let mut next = pos + 1;
    while next < s.len() && !s.is_char_boundary(next) {
        next += 1;
    }
    next
}
