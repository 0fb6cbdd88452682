// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Range expressions selecting sub-arrays.
//!
//! An expression has one comma separated item per axis, starting at
//! axis 0:
//!
//! | item | selects |
//! |---|---|
//! | `i` | the single index `i` |
//! | `[i j k]` or `[i, j, k]` | the listed indices, in order |
//! | `a:b` | `a` through `b`, both included |
//! | `a:s:b` | `a` through `b` with step `s > 0` |
//! | `:` | the whole axis |
//!
//! `end` can be written wherever an index can and stands for the last
//! index of the axis. Whitespace is ignored. Axes without an item are
//! selected whole.
//!
//! Parsing ([`Selection::from_str`]) does not need the shape; resolving
//! ([`Selection::resolve`]) checks the items against it and produces one
//! index list per axis.
//!
//! ```
//! use mrarray::Selection;
//!
//! let sel: Selection = "0:2:5, [end 1], 3".parse().unwrap();
//! let lists = sel.resolve(&[6, 4, 5, 2]).unwrap();
//! assert_eq!(lists, vec![vec![0, 2, 4], vec![3, 1], vec![3], vec![0, 1]]);
//! ```

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::{Ix, MAX_RANK};

/// An error from parsing or resolving a range expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RangeError {
    kind: RangeErrorKind,
    pos: usize,
}

/// Error code of a [`RangeError`].
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RangeErrorKind {
    /// the expression has no items
    Empty,
    /// a character that is not part of the syntax
    UnexpectedChar,
    /// a token in a place where it is not allowed
    UnexpectedToken,
    /// the expression stops in the middle of an item
    UnexpectedEnd,
    /// a slice with step zero
    ZeroStep,
    /// more items than axes
    TooManyAxes,
    /// an index beyond the extent of its axis
    OutOfBounds,
    /// a slice whose start is after its end
    EmptySlice,
    /// an index list without indices
    EmptyList,
    /// the selection has too many elements
    TooLarge,
    /// an integer that does not fit in an index
    Overflow,
}

impl RangeError {
    pub fn new(kind: RangeErrorKind, pos: usize) -> Self {
        RangeError { kind, pos }
    }

    /// Return the `RangeErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> RangeErrorKind {
        self.kind
    }

    /// Return where the error was found: the byte offset in the expression
    /// for syntax errors, the axis for errors found while resolving.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }
}

impl Error for RangeError {}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (description, at) = match self.kind {
            RangeErrorKind::Empty => ("empty range expression", "offset"),
            RangeErrorKind::UnexpectedChar => ("unexpected character", "offset"),
            RangeErrorKind::UnexpectedToken => ("unexpected token", "offset"),
            RangeErrorKind::UnexpectedEnd => ("unexpected end of expression", "offset"),
            RangeErrorKind::ZeroStep => ("slice step must be positive", "offset"),
            RangeErrorKind::TooManyAxes => ("more items than axes", "axis"),
            RangeErrorKind::OutOfBounds => ("index out of bounds", "axis"),
            RangeErrorKind::EmptySlice => ("slice start is after its end", "axis"),
            RangeErrorKind::EmptyList => ("empty index list", "offset"),
            RangeErrorKind::TooLarge => ("selection is too large", "axis"),
            RangeErrorKind::Overflow => ("integer too large for an index", "offset"),
        };
        write!(f, "RangeError/{:?} at {} {}: {}", self.kind, at, self.pos, description)
    }
}

/// An index in a range expression.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Bound {
    Index(Ix),
    /// The last index of the axis.
    End,
}

/// The selection for one axis.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AxisSelection {
    /// `:`
    All,
    /// `i`
    Index(Bound),
    /// `[i j k]`
    List(Vec<Bound>),
    /// `a:b` (step 1) or `a:s:b`, both ends included.
    Slice { start: Bound, step: Ix, end: Bound },
}

/// A parsed range expression.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Selection {
    axes: Vec<AxisSelection>,
}

impl Selection {
    /// Return the per-axis items, axis 0 first.
    pub fn axes(&self) -> &[AxisSelection] {
        &self.axes
    }

    /// Resolve the selection against a shape into one ordered index list
    /// per axis.
    ///
    /// **Errors** with `TooManyAxes` if there are more items than axes,
    /// `OutOfBounds` if an index is not below its extent and `EmptySlice`
    /// if a slice starts after its end.
    pub fn resolve(&self, shape: &[Ix]) -> Result<Vec<Vec<Ix>>, RangeError> {
        self.resolve_axes(shape).map_err(|e| {
            debug!(selection = ?self, ?shape, error = %e, "rejected range expression");
            e
        })
    }

    fn resolve_axes(&self, shape: &[Ix]) -> Result<Vec<Vec<Ix>>, RangeError> {
        if self.axes.len() > shape.len() {
            return Err(RangeError::new(RangeErrorKind::TooManyAxes, shape.len()));
        }
        let mut lists = Vec::with_capacity(shape.len());
        for (axis, &extent) in shape.iter().enumerate() {
            let bound = |b: &Bound| match *b {
                Bound::Index(i) if i < extent => Ok(i),
                Bound::Index(_) => Err(RangeError::new(RangeErrorKind::OutOfBounds, axis)),
                Bound::End => Ok(extent - 1),
            };
            let list = match self.axes.get(axis) {
                None | Some(AxisSelection::All) => (0..extent).collect(),
                Some(AxisSelection::Index(b)) => vec![bound(b)?],
                Some(AxisSelection::List(bs)) => bs.iter().map(bound).collect::<Result<_, _>>()?,
                Some(AxisSelection::Slice { start, step, end }) => {
                    let (start, end) = (bound(start)?, bound(end)?);
                    if start > end {
                        return Err(RangeError::new(RangeErrorKind::EmptySlice, axis));
                    }
                    (start..=end).step_by(*step).collect()
                }
            };
            lists.push(list);
        }
        Ok(lists)
    }
}

impl FromStr for Selection {
    type Err = RangeError;

    /// Parse a range expression.
    ///
    /// **Errors** with `Empty`, `UnexpectedChar`, `UnexpectedToken`,
    /// `UnexpectedEnd`, `ZeroStep`, `EmptyList`, `Overflow` or `TooManyAxes`
    /// (more than `MAX_RANK` items).
    fn from_str(expr: &str) -> Result<Self, RangeError> {
        tokenize(expr)
            .and_then(|tokens| Parser::new(tokens, expr.len()).selection())
            .map_err(|e| {
                debug!(expr, error = %e, "rejected range expression");
                e
            })
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Token {
    Int(Ix),
    End,
    Colon,
    Comma,
    Open,
    Close,
}

/// Split an expression into tokens, each with its byte offset.
fn tokenize(expr: &str) -> Result<Vec<(usize, Token)>, RangeError> {
    let bytes = expr.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;
    while pos < bytes.len() {
        let start = pos;
        let token = match bytes[pos] {
            c if c.is_ascii_whitespace() => {
                pos += 1;
                continue;
            }
            b':' => Token::Colon,
            b',' => Token::Comma,
            b'[' => Token::Open,
            b']' => Token::Close,
            b'0'..=b'9' => {
                let mut n: Ix = 0;
                while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                    let digit = (bytes[pos] - b'0') as Ix;
                    n = n
                        .checked_mul(10)
                        .and_then(|n| n.checked_add(digit))
                        .ok_or_else(|| RangeError::new(RangeErrorKind::Overflow, start))?;
                    pos += 1;
                }
                tokens.push((start, Token::Int(n)));
                continue;
            }
            _ if expr[pos..].starts_with("end") => {
                pos += 3;
                if pos < bytes.len() && bytes[pos].is_ascii_alphanumeric() {
                    return Err(RangeError::new(RangeErrorKind::UnexpectedChar, pos));
                }
                tokens.push((start, Token::End));
                continue;
            }
            _ => return Err(RangeError::new(RangeErrorKind::UnexpectedChar, pos)),
        };
        tokens.push((start, token));
        pos += 1;
    }
    Ok(tokens)
}

struct Parser {
    tokens: Vec<(usize, Token)>,
    next: usize,
    // offset reported for errors at the end of input
    len: usize,
}

impl Parser {
    fn new(tokens: Vec<(usize, Token)>, len: usize) -> Self {
        Parser { tokens, next: 0, len }
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.next).map(|&(_, t)| t)
    }

    fn bump(&mut self) -> Result<(usize, Token), RangeError> {
        match self.tokens.get(self.next) {
            Some(&t) => {
                self.next += 1;
                Ok(t)
            }
            None => Err(RangeError::new(RangeErrorKind::UnexpectedEnd, self.len)),
        }
    }

    fn selection(mut self) -> Result<Selection, RangeError> {
        if self.tokens.is_empty() {
            return Err(RangeError::new(RangeErrorKind::Empty, 0));
        }
        let mut axes = Vec::new();
        loop {
            axes.push(self.item()?);
            if axes.len() > MAX_RANK {
                return Err(RangeError::new(RangeErrorKind::TooManyAxes, MAX_RANK));
            }
            match self.tokens.get(self.next) {
                None => break,
                Some(&(_, Token::Comma)) => self.next += 1,
                Some(&(p, _)) => return Err(RangeError::new(RangeErrorKind::UnexpectedToken, p)),
            }
        }
        Ok(Selection { axes })
    }

    fn item(&mut self) -> Result<AxisSelection, RangeError> {
        let (pos, token) = self.bump()?;
        match token {
            Token::Colon => Ok(AxisSelection::All),
            Token::Open => self.list(pos),
            Token::Int(_) | Token::End => {
                let first = to_bound(token);
                if self.peek() != Some(Token::Colon) {
                    return Ok(AxisSelection::Index(first));
                }
                self.next += 1;
                let second = self.bound()?;
                if self.peek() != Some(Token::Colon) {
                    return Ok(AxisSelection::Slice {
                        start: first,
                        step: 1,
                        end: second.1,
                    });
                }
                self.next += 1;
                let step = match second {
                    (p, Bound::End) => {
                        return Err(RangeError::new(RangeErrorKind::UnexpectedToken, p))
                    }
                    (p, Bound::Index(0)) => return Err(RangeError::new(RangeErrorKind::ZeroStep, p)),
                    (_, Bound::Index(s)) => s,
                };
                let (_, end) = self.bound()?;
                Ok(AxisSelection::Slice {
                    start: first,
                    step,
                    end,
                })
            }
            Token::Comma | Token::Close => Err(RangeError::new(RangeErrorKind::UnexpectedToken, pos)),
        }
    }

    fn list(&mut self, open: usize) -> Result<AxisSelection, RangeError> {
        let mut bounds = Vec::new();
        loop {
            match self.bump()? {
                (_, Token::Close) if bounds.is_empty() => {
                    return Err(RangeError::new(RangeErrorKind::EmptyList, open))
                }
                (_, Token::Close) => return Ok(AxisSelection::List(bounds)),
                (_, t @ Token::Int(_)) | (_, t @ Token::End) => bounds.push(to_bound(t)),
                // a separating comma must follow an index and precede one
                (p, Token::Comma) => {
                    if bounds.is_empty() || !matches!(self.peek(), Some(Token::Int(_)) | Some(Token::End)) {
                        return Err(RangeError::new(RangeErrorKind::UnexpectedToken, p));
                    }
                }
                (p, _) => return Err(RangeError::new(RangeErrorKind::UnexpectedToken, p)),
            }
        }
    }

    // the bound with its position
    fn bound(&mut self) -> Result<(usize, Bound), RangeError> {
        match self.bump()? {
            (p, t @ Token::Int(_)) | (p, t @ Token::End) => Ok((p, to_bound(t))),
            (p, _) => Err(RangeError::new(RangeErrorKind::UnexpectedToken, p)),
        }
    }
}

fn to_bound(token: Token) -> Bound {
    match token {
        Token::Int(i) => Bound::Index(i),
        _ => Bound::End,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(expr: &str) -> Result<Selection, RangeError> {
        expr.parse()
    }

    fn kind_at(expr: &str) -> (RangeErrorKind, usize) {
        let e = parse(expr).unwrap_err();
        (e.kind(), e.pos())
    }

    #[test]
    fn tokens_with_offsets() {
        let tokens = tokenize(" 12:end ,[3]").unwrap();
        assert_eq!(
            tokens,
            vec![
                (1, Token::Int(12)),
                (3, Token::Colon),
                (4, Token::End),
                (8, Token::Comma),
                (9, Token::Open),
                (10, Token::Int(3)),
                (11, Token::Close),
            ]
        );
    }

    #[test]
    fn items() {
        let sel = parse("3, :, 1:4, 0:2:end, [1 0, end]").unwrap();
        assert_eq!(
            sel.axes(),
            &[
                AxisSelection::Index(Bound::Index(3)),
                AxisSelection::All,
                AxisSelection::Slice {
                    start: Bound::Index(1),
                    step: 1,
                    end: Bound::Index(4)
                },
                AxisSelection::Slice {
                    start: Bound::Index(0),
                    step: 2,
                    end: Bound::End
                },
                AxisSelection::List(vec![Bound::Index(1), Bound::Index(0), Bound::End]),
            ]
        );
    }

    #[test]
    fn syntax_errors() {
        assert_eq!(kind_at(""), (RangeErrorKind::Empty, 0));
        assert_eq!(kind_at("   "), (RangeErrorKind::Empty, 0));
        assert_eq!(kind_at("1;2"), (RangeErrorKind::UnexpectedChar, 1));
        assert_eq!(kind_at("ending"), (RangeErrorKind::UnexpectedChar, 3));
        assert_eq!(kind_at("1,"), (RangeErrorKind::UnexpectedEnd, 2));
        assert_eq!(kind_at("1:"), (RangeErrorKind::UnexpectedEnd, 2));
        assert_eq!(kind_at("[1 2"), (RangeErrorKind::UnexpectedEnd, 4));
        assert_eq!(kind_at("1 2"), (RangeErrorKind::UnexpectedToken, 2));
        assert_eq!(kind_at(",1"), (RangeErrorKind::UnexpectedToken, 0));
        assert_eq!(kind_at("[1,,2]"), (RangeErrorKind::UnexpectedToken, 2));
        assert_eq!(kind_at("1:end:4"), (RangeErrorKind::UnexpectedToken, 2));
        assert_eq!(kind_at("1:0:4"), (RangeErrorKind::ZeroStep, 2));
        assert_eq!(kind_at("[]"), (RangeErrorKind::EmptyList, 0));
        assert_eq!(kind_at(&vec!["0"; 17].join(",")), (RangeErrorKind::TooManyAxes, 16));
        assert_eq!(kind_at("1:99999999999999999999999"), (RangeErrorKind::Overflow, 2));
    }

    #[test]
    fn resolve_fills_missing_axes() {
        let lists = parse("1").unwrap().resolve(&[3, 2]).unwrap();
        assert_eq!(lists, vec![vec![1], vec![0, 1]]);
    }

    #[test]
    fn resolve_errors() {
        let e = parse("0, 0, 0").unwrap().resolve(&[2, 2]).unwrap_err();
        assert_eq!((e.kind(), e.pos()), (RangeErrorKind::TooManyAxes, 2));
        let e = parse(":, [0 4]").unwrap().resolve(&[2, 4]).unwrap_err();
        assert_eq!((e.kind(), e.pos()), (RangeErrorKind::OutOfBounds, 1));
        let e = parse("3:1").unwrap().resolve(&[5]).unwrap_err();
        assert_eq!(e.kind(), RangeErrorKind::EmptySlice);
    }

    #[test]
    fn stepped_slice() {
        let lists = parse("0:2:5").unwrap().resolve(&[6]).unwrap();
        assert_eq!(lists, vec![vec![0, 2, 4]]);
        let lists = parse("end:end").unwrap().resolve(&[6]).unwrap();
        assert_eq!(lists, vec![vec![5]]);
    }
}
