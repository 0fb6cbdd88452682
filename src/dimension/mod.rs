// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The dimension vector and its derived stride table.

use std::fmt;
use std::hash;
use std::ops::Index;

use crate::error::{from_kind, ErrorKind, ShapeError};
use crate::{Ix, MAX_RANK};

pub use self::conversion::IntoDimension;

mod conversion;

/// Dimension vector of an array: the extent of every axis, the stride table
/// derived from it and the element count.
///
/// Layout is column-major: axis 0 varies fastest, `stride[0] = 1` and
/// `stride[i] = stride[i - 1] * extent[i - 1]`.
///
/// A `Dim` always has between 1 and `MAX_RANK` axes, each with a positive
/// extent, and an element count that fits in `isize`. Axes beyond the
/// declared rank read back as extent 1.
///
/// ```
/// use mrarray::Dim;
///
/// let d = Dim::new(&[4, 3, 2]).unwrap();
/// assert_eq!(d.strides(), &[1, 4, 12]);
/// assert_eq!(d.size(), 24);
/// assert_eq!(d.extent(7), 1);
/// ```
#[derive(Clone)]
pub struct Dim {
    ndim: usize,
    // entries at and beyond `ndim` are 1
    ix: [Ix; MAX_RANK],
    strides: [Ix; MAX_RANK],
    size: usize,
}

impl Dim {
    /// Create a dimension vector from the extents of its axes.
    ///
    /// **Errors** with `EmptyShape` if `shape` is empty, `TooManyAxes` if it
    /// has more than `MAX_RANK` entries, `ZeroExtent` if any extent is zero
    /// and `Overflow` if the element count does not fit in `isize`.
    pub fn new(shape: &[Ix]) -> Result<Dim, ShapeError> {
        if shape.is_empty() {
            return Err(from_kind(ErrorKind::EmptyShape));
        }
        if shape.len() > MAX_RANK {
            return Err(from_kind(ErrorKind::TooManyAxes));
        }
        if shape.contains(&0) {
            return Err(from_kind(ErrorKind::ZeroExtent));
        }
        let size = size_of_shape_checked(shape)?;
        let mut ix = [1; MAX_RANK];
        ix[..shape.len()].copy_from_slice(shape);
        let mut strides = [0; MAX_RANK];
        fill_default_strides(shape, &mut strides[..shape.len()]);
        Ok(Dim {
            ndim: shape.len(),
            ix,
            strides,
            size,
        })
    }

    /// Return the number of axes.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.ndim
    }

    /// Return the extents as a slice.
    #[inline]
    pub fn slice(&self) -> &[Ix] {
        &self.ix[..self.ndim]
    }

    /// Return the stride table as a slice.
    #[inline]
    pub fn strides(&self) -> &[Ix] {
        &self.strides[..self.ndim]
    }

    /// Return the extent of `axis`; axes beyond the rank have extent 1.
    #[inline]
    pub fn extent(&self, axis: usize) -> Ix {
        if axis < self.ndim {
            self.ix[axis]
        } else {
            1
        }
    }

    /// Return the number of elements.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Compute the linear offset of a multi-index.
    ///
    /// Omitted trailing coordinates are zero. Coordinates past the declared
    /// rank are accepted when they are zero.
    ///
    /// **Errors** with `OutOfBounds` if any coordinate is outside its extent.
    pub fn offset(&self, index: &[Ix]) -> Result<usize, ShapeError> {
        if index.len() > MAX_RANK {
            return Err(from_kind(ErrorKind::OutOfBounds));
        }
        let mut offset = 0;
        for (axis, &i) in index.iter().enumerate() {
            if i >= self.extent(axis) {
                return Err(from_kind(ErrorKind::OutOfBounds));
            }
            if axis < self.ndim {
                offset += i * self.strides[axis];
            }
        }
        Ok(offset)
    }

    /// Return the rank classification: the number of axes with extent
    /// greater than one.
    ///
    /// A `[4, 1, 3]` dimension classifies as 2, and `[1, 1]` as 0.
    pub fn classify(&self) -> usize {
        self.slice().iter().filter(|&&d| d > 1).count()
    }

    /// Return `true` if exactly `k` axes have extent greater than one.
    #[inline]
    pub fn is_nd(&self, k: usize) -> bool {
        self.classify() == k
    }

    /// Return the indices of the axes with extent greater than one.
    pub fn occupied_axes(&self) -> impl Iterator<Item = usize> + '_ {
        self.slice()
            .iter()
            .enumerate()
            .filter(|(_, &d)| d > 1)
            .map(|(axis, _)| axis)
    }

    /// Return the index of the highest axis with extent greater than one,
    /// or 0 if every axis is a singleton.
    pub fn hdim(&self) -> usize {
        self.occupied_axes().last().unwrap_or(0)
    }

    /// Return the dimension with every singleton axis removed.
    ///
    /// At least one axis is kept, so an all-singleton dimension squeezes to
    /// `[1]`.
    pub fn squeeze(&self) -> Dim {
        let mut shape = [1; MAX_RANK];
        let mut n = 0;
        for axis in self.occupied_axes() {
            shape[n] = self.ix[axis];
            n += 1;
        }
        self.derived(&shape[..n.max(1)])
    }

    /// Return the dimension with trailing singleton axes removed.
    pub fn trimmed(&self) -> Dim {
        self.derived(trim_trailing_singletons(self.slice()))
    }

    /// Return the dimension made of the extents of `axes`, in that order.
    ///
    /// **Panics** if an axis is not below the rank.
    pub(crate) fn subdim(&self, axes: &[usize]) -> Dim {
        let mut shape = [1; MAX_RANK];
        for (s, &axis) in shape.iter_mut().zip(axes) {
            *s = self.slice()[axis];
        }
        self.derived(&shape[..axes.len()])
    }

    // Build a dimension from a subset or permutation of our extents, so
    // the element count cannot overflow.
    fn derived(&self, shape: &[Ix]) -> Dim {
        let mut ix = [1; MAX_RANK];
        ix[..shape.len()].copy_from_slice(shape);
        let mut strides = [0; MAX_RANK];
        fill_default_strides(shape, &mut strides[..shape.len()]);
        Dim {
            ndim: shape.len(),
            ix,
            strides,
            size: shape.iter().product(),
        }
    }
}

impl Default for Dim {
    /// The one-element, rank-1 dimension `[1]`.
    fn default() -> Self {
        let mut strides = [0; MAX_RANK];
        strides[0] = 1;
        Dim {
            ndim: 1,
            ix: [1; MAX_RANK],
            strides,
            size: 1,
        }
    }
}

impl PartialEq for Dim {
    fn eq(&self, rhs: &Self) -> bool {
        self.slice() == rhs.slice()
    }
}

impl Eq for Dim {}

impl hash::Hash for Dim {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.slice().hash(state)
    }
}

impl PartialEq<[Ix]> for Dim {
    fn eq(&self, rhs: &[Ix]) -> bool {
        self.slice() == rhs
    }
}

impl<const N: usize> PartialEq<[Ix; N]> for Dim {
    fn eq(&self, rhs: &[Ix; N]) -> bool {
        self.slice() == &rhs[..]
    }
}

impl Index<usize> for Dim {
    type Output = Ix;
    /// Extent of `axis`. **Panics** if `axis >= MAX_RANK`.
    #[inline]
    fn index(&self, axis: usize) -> &Ix {
        &self.ix[axis]
    }
}

impl fmt::Debug for Dim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.slice(), f)
    }
}

impl fmt::Display for Dim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, d) in self.slice().iter().enumerate() {
            if i > 0 {
                f.write_str(" x ")?;
            }
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

/// Return the number of elements for a shape, checking that it fits in
/// `isize`.
///
/// **Errors** with `Overflow` otherwise.
pub fn size_of_shape_checked(shape: &[Ix]) -> Result<usize, ShapeError> {
    let size = shape
        .iter()
        .try_fold(1usize, |acc, &d| acc.checked_mul(d))
        .ok_or_else(|| from_kind(ErrorKind::Overflow))?;
    if size > isize::MAX as usize {
        Err(from_kind(ErrorKind::Overflow))
    } else {
        Ok(size)
    }
}

/// Convert `shape` into a `Dim`, panicking with the reason if it is not a
/// valid dimension vector.
#[track_caller]
pub(crate) fn dim_or_panic<Sh: IntoDimension>(shape: Sh) -> Dim {
    match shape.into_dimension() {
        Ok(dim) => dim,
        Err(e) => panic!("mrarray: invalid shape: {}", e),
    }
}

/// Return the column-major stride table of a shape.
pub fn default_strides(shape: &[Ix]) -> Vec<Ix> {
    let mut strides = vec![0; shape.len()];
    fill_default_strides(shape, &mut strides);
    strides
}

fn fill_default_strides(shape: &[Ix], strides: &mut [Ix]) {
    let mut cum = 1;
    for (s, &d) in strides.iter_mut().zip(shape) {
        *s = cum;
        cum *= d;
    }
}

/// Return `shape` without its trailing extents equal to one, keeping at
/// least one axis.
///
/// ```
/// use mrarray::dimension::trim_trailing_singletons;
///
/// assert_eq!(trim_trailing_singletons(&[2, 3, 1, 1]), &[2, 3]);
/// assert_eq!(trim_trailing_singletons(&[1, 1]), &[1]);
/// ```
pub fn trim_trailing_singletons(shape: &[Ix]) -> &[Ix] {
    let n = shape.iter().rposition(|&d| d != 1).map_or(1, |i| i + 1);
    &shape[..n.min(shape.len())]
}
