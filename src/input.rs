//! Validation of user-typed fields and random list generation.
//!
//! The list field is tokenized and checked against a small grammar:
//!
//! ```text
//! list  := "[" items? "]" | items
//! items := INT ("," INT)* ","?
//! ```
//!
//! Text is never evaluated; anything outside the grammar is reported as an
//! [`InputError::MalformedList`] with the column of the offending token.

use rand::Rng;

use crate::error::InputError;
use crate::steps::Value;

pub const MIN_VALUE_FIELD: &str = "Min Value";
pub const MAX_VALUE_FIELD: &str = "Max Value";
pub const NUM_ELEMENTS_FIELD: &str = "Num Elements";
pub const SEARCH_VALUE_FIELD: &str = "Search Value";
pub const LIST_FIELD: &str = "Unsorted Data";

/// Parse a single integer field.
pub fn parse_value(field: &'static str, text: &str) -> Result<Value, InputError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(InputError::Empty { field });
    }

    text.parse().map_err(|_| InputError::NotANumber {
        field,
        value: text.to_string(),
    })
}

/// Validated parameters of the "generate random list" command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RandomSpec {
    pub min: Value,
    pub max: Value,
    pub count: usize,
}

impl RandomSpec {
    /// Parse and validate the three randomizer fields.
    ///
    /// Requires `min < max` and `count > 0`.
    pub fn parse(min: &str, max: &str, count: &str) -> Result<Self, InputError> {
        let min = parse_value(MIN_VALUE_FIELD, min)?;
        let max = parse_value(MAX_VALUE_FIELD, max)?;
        let count = parse_value(NUM_ELEMENTS_FIELD, count)?;

        if min >= max {
            return Err(InputError::InvalidRange { min, max });
        }
        if count <= 0 {
            return Err(InputError::NonPositiveCount(count));
        }

        let count = usize::try_from(count).map_err(|_| InputError::NotANumber {
            field: NUM_ELEMENTS_FIELD,
            value: count.to_string(),
        })?;

        Ok(Self { min, max, count })
    }

    /// Draw `count` values uniformly from `[min, max]`.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Value> {
        (0..self.count)
            .map(|_| rng.random_range(self.min..=self.max))
            .collect()
    }
}

/// Render values the way the list field displays them: `[1, 2, 3]`.
pub fn format_list(values: &[Value]) -> String {
    let items: Vec<String> = values.iter().map(Value::to_string).collect();
    format!("[{}]", items.join(", "))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Token<'a> {
    Open,
    Close,
    Comma,
    Number(&'a str),
}

impl Token<'_> {
    fn describe(&self) -> String {
        match self {
            Token::Open => "'['".to_string(),
            Token::Close => "']'".to_string(),
            Token::Comma => "','".to_string(),
            Token::Number(text) => format!("{:?}", text),
        }
    }
}

/// Split into brackets, commas and runs of anything else. Columns are 1-based.
fn tokenize(text: &str) -> Vec<(Token<'_>, usize)> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().enumerate().peekable();

    while let Some((column, (start, c))) = chars.next() {
        let token = match c {
            '[' => Token::Open,
            ']' => Token::Close,
            ',' => Token::Comma,
            c if c.is_whitespace() => continue,
            _ => {
                let mut end = start + c.len_utf8();
                while let Some(&(_, (offset, next))) = chars.peek() {
                    if next.is_whitespace() || matches!(next, '[' | ']' | ',') {
                        break;
                    }
                    end = offset + next.len_utf8();
                    chars.next();
                }
                Token::Number(&text[start..end])
            }
        };
        tokens.push((token, column + 1));
    }

    tokens
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Expect {
    /// Start of the list: a number or the end of the list
    First,
    /// After a number: a comma or the end of the list
    Separator,
    /// After a comma: a number or the end of the list
    Item,
    /// After the closing bracket: nothing
    Done,
}

fn malformed(reason: impl Into<String>, column: usize) -> InputError {
    InputError::MalformedList {
        reason: reason.into(),
        column,
    }
}

/// Parse the list field into a sequence of integers.
pub fn parse_list(text: &str) -> Result<Vec<Value>, InputError> {
    if text.trim().is_empty() {
        return Err(InputError::Empty { field: LIST_FIELD });
    }

    let mut tokens = tokenize(text).into_iter().peekable();
    let bracketed = matches!(tokens.peek(), Some((Token::Open, _)));
    if bracketed {
        tokens.next();
    }

    let mut values = Vec::new();
    let mut expect = Expect::First;

    for (token, column) in tokens {
        expect = match (expect, token) {
            (Expect::Done, token) => {
                return Err(malformed(
                    format!("unexpected {} after closing ']'", token.describe()),
                    column,
                ));
            }
            (Expect::First | Expect::Item, Token::Number(text)) => {
                let value: Value = text.parse().map_err(|_| {
                    malformed(format!("{:?} is not an integer", text), column)
                })?;
                values.push(value);
                Expect::Separator
            }
            (Expect::Separator, Token::Number(text)) => {
                return Err(malformed(format!("missing ',' before {:?}", text), column));
            }
            (Expect::Separator, Token::Comma) => Expect::Item,
            (Expect::First | Expect::Item, Token::Comma) => {
                return Err(malformed("expected a number before ','", column));
            }
            (_, Token::Close) if bracketed => Expect::Done,
            (_, Token::Close) => return Err(malformed("unmatched ']'", column)),
            (_, Token::Open) => return Err(malformed("nested or misplaced '['", column)),
        };
    }

    if bracketed && expect != Expect::Done {
        return Err(malformed("missing closing ']'", text.chars().count() + 1));
    }

    Ok(values)
}
