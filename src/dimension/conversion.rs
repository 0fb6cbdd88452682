// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Tuple, array and slice conversion into `Dim`.

use crate::error::ShapeError;
use crate::{Dim, Ix};

/// Argument conversion into a dimension vector.
///
/// Implemented for a single extent `Ix`, tuples of two to four extents,
/// arrays `[Ix; N]`, slices, `Vec<Ix>` and `Dim` itself. Conversion
/// validates the extents the way [`Dim::new`] does.
pub trait IntoDimension {
    fn into_dimension(self) -> Result<Dim, ShapeError>;
}

impl IntoDimension for Ix {
    #[inline]
    fn into_dimension(self) -> Result<Dim, ShapeError> {
        Dim::new(&[self])
    }
}

impl IntoDimension for Dim {
    #[inline(always)]
    fn into_dimension(self) -> Result<Dim, ShapeError> {
        Ok(self)
    }
}

impl<'a> IntoDimension for &'a Dim {
    #[inline(always)]
    fn into_dimension(self) -> Result<Dim, ShapeError> {
        Ok(self.clone())
    }
}

impl<'a> IntoDimension for &'a [Ix] {
    #[inline]
    fn into_dimension(self) -> Result<Dim, ShapeError> {
        Dim::new(self)
    }
}

impl IntoDimension for Vec<Ix> {
    #[inline]
    fn into_dimension(self) -> Result<Dim, ShapeError> {
        Dim::new(&self)
    }
}

impl<'a> IntoDimension for &'a Vec<Ix> {
    #[inline]
    fn into_dimension(self) -> Result<Dim, ShapeError> {
        Dim::new(self)
    }
}

impl<const N: usize> IntoDimension for [Ix; N] {
    #[inline]
    fn into_dimension(self) -> Result<Dim, ShapeError> {
        Dim::new(&self)
    }
}

impl<'a, const N: usize> IntoDimension for &'a [Ix; N] {
    #[inline]
    fn into_dimension(self) -> Result<Dim, ShapeError> {
        Dim::new(self)
    }
}

macro_rules! tuple_into_dimension {
    ($($ty:ty => [$($index:tt)*];)*) => {
        $(
        impl IntoDimension for $ty {
            #[inline]
            fn into_dimension(self) -> Result<Dim, ShapeError> {
                Dim::new(&[$(self.$index),*])
            }
        }
        )*
    };
}

tuple_into_dimension! {
    (Ix, Ix) => [0 1];
    (Ix, Ix, Ix) => [0 1 2];
    (Ix, Ix, Ix, Ix) => [0 1 2 3];
}
