//! Redis-style glob matching for the in-process store.

#[derive(Debug, Clone, PartialEq)]
enum Token {
    /// `*`: zero or more characters.
    Star,
    /// `?`: exactly one character.
    One,
    Literal(char),
    Class {
        negated: bool,
        ranges: Vec<(char, char)>,
    },
}

/// A glob compiled once and matched against many keys.
///
/// Supports `*`, `?`, `[abc]`, `[a-z]`, `[^abc]` and backslash escapes. An
/// unterminated `[` is taken literally.
#[derive(Debug, Clone)]
pub(crate) struct GlobPattern {
    tokens: Vec<Token>,
}

impl GlobPattern {
    pub(crate) fn new(pattern: &str) -> Self {
        let chars: Vec<char> = pattern.chars().collect();
        let mut tokens = Vec::with_capacity(chars.len());
        let mut i = 0;

        while i < chars.len() {
            match chars[i] {
                '*' => {
                    // consecutive stars behave like one
                    if tokens.last() != Some(&Token::Star) {
                        tokens.push(Token::Star);
                    }
                }
                '?' => tokens.push(Token::One),
                '\\' if i + 1 < chars.len() => {
                    i += 1;
                    tokens.push(Token::Literal(chars[i]));
                }
                '[' => match parse_class(&chars, i + 1) {
                    Some((token, end)) => {
                        tokens.push(token);
                        i = end;
                    }
                    None => tokens.push(Token::Literal('[')),
                },
                c => tokens.push(Token::Literal(c)),
            }
            i += 1;
        }

        Self { tokens }
    }

    pub(crate) fn matches(&self, text: &str) -> bool {
        let text: Vec<char> = text.chars().collect();
        let tokens = &self.tokens;

        let (mut ti, mut xi) = (0, 0);
        let mut backtrack: Option<(usize, usize)> = None;

        while xi < text.len() {
            let step = match tokens.get(ti) {
                Some(Token::Star) => {
                    backtrack = Some((ti, xi));
                    ti += 1;
                    continue;
                }
                Some(token) => token_matches(token, text[xi]),
                None => false,
            };

            if step {
                ti += 1;
                xi += 1;
            } else if let Some((star, consumed)) = backtrack {
                // let the last star swallow one more character
                ti = star + 1;
                xi = consumed + 1;
                backtrack = Some((star, consumed + 1));
            } else {
                return false;
            }
        }

        tokens[ti..].iter().all(|token| *token == Token::Star)
    }
}

/// Parses a class body starting after `[`. Returns the token and the index
/// of the closing `]`.
fn parse_class(chars: &[char], start: usize) -> Option<(Token, usize)> {
    let mut i = start;
    let negated = matches!(chars.get(i), Some('^' | '!'));
    if negated {
        i += 1;
    }

    let mut ranges = Vec::new();
    while i < chars.len() && chars[i] != ']' {
        let mut lo = chars[i];
        if lo == '\\' && i + 1 < chars.len() {
            i += 1;
            lo = chars[i];
        }

        if i + 2 < chars.len() && chars[i + 1] == '-' && chars[i + 2] != ']' {
            let hi = chars[i + 2];
            ranges.push(if lo <= hi { (lo, hi) } else { (hi, lo) });
            i += 3;
        } else {
            ranges.push((lo, lo));
            i += 1;
        }
    }

    (i < chars.len()).then_some((Token::Class { negated, ranges }, i))
}

fn token_matches(token: &Token, c: char) -> bool {
    match token {
        Token::Star | Token::One => true,
        Token::Literal(expected) => *expected == c,
        Token::Class { negated, ranges } => {
            ranges.iter().any(|(lo, hi)| (*lo..=*hi).contains(&c)) != *negated
        }
    }
}
