// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::error::Error;
use std::fmt;

/// An error related to array shape, rank or addressing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShapeError {
    // we want to be able to change this representation later
    repr: ErrorKind,
}

impl ShapeError {
    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.repr
    }

    /// Create a new `ShapeError`
    pub fn from_kind(error: ErrorKind) -> Self {
        from_kind(error)
    }
}

/// Error code for an error related to array shape, rank or addressing.
///
/// This enumeration is not exhaustive. The representation of the enum
/// is not guaranteed.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// the dimension vector has no axes
    EmptyShape,
    /// an axis has extent zero
    ZeroExtent,
    /// more than `MAX_RANK` axes
    TooManyAxes,
    /// the element count overflows `usize`
    Overflow,
    /// incompatible shapes (element count or dimension vectors differ)
    IncompatibleShape,
    /// the operation needs a different rank or rank classification
    WrongRank,
    /// index or coordinate outside of the declared extents
    OutOfBounds,
    /// resolution vector does not match the dimension vector
    ResolutionMismatch,
}

#[inline(always)]
pub fn from_kind(k: ErrorKind) -> ShapeError {
    ShapeError { repr: k }
}

impl Error for ShapeError {}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self.kind() {
            ErrorKind::EmptyShape => "dimension vector has no axes",
            ErrorKind::ZeroExtent => "axis extent must be greater than zero",
            ErrorKind::TooManyAxes => "too many axes (at most 16)",
            ErrorKind::Overflow => "element count overflows usize",
            ErrorKind::IncompatibleShape => "incompatible shapes",
            ErrorKind::WrongRank => "operation not defined for this rank",
            ErrorKind::OutOfBounds => "index out of bounds",
            ErrorKind::ResolutionMismatch => "resolution vector does not match dimension vector",
        };
        write!(f, "ShapeError/{:?}: {}", self.kind(), description)
    }
}

pub fn incompatible_shapes(_a: &[usize], _b: &[usize]) -> ShapeError {
    from_kind(ErrorKind::IncompatibleShape)
}

/// Panic with the error and the shapes involved.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn shape_panic(op: &str, lhs: &[usize], rhs: &[usize]) -> ! {
    panic!(
        "mrarray: could not {} arrays of shape {:?} and {:?}: {}",
        op,
        lhs,
        rhs,
        incompatible_shapes(lhs, rhs)
    )
}
