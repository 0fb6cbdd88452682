// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constructor methods for arrays
//!
use crate::dimension::{self, dim_or_panic};
use crate::error::{self, from_kind, ErrorKind, ShapeError};
use crate::{AlignedVec, Array, Dim, Element, IntoDimension, Ix, Scalar, MAX_RANK};

/// Constructor methods for arrays of any element type.
impl<A> Array<A>
where
    A: Element,
{
    /// Create an array with zeros (`A::default()`), dimension `shape`.
    ///
    /// **Panics** if `shape` is not a valid dimension vector: empty, longer
    /// than `MAX_RANK`, containing a zero extent or with an element count
    /// overflowing `isize`.
    ///
    /// ```
    /// use mrarray::Array;
    ///
    /// let a = Array::<f32>::zeros([3, 4, 2]);
    /// assert_eq!(a.len(), 24);
    /// assert_eq!(a.strides(), &[1, 3, 12]);
    /// assert!(a.iter().all(|&x| x == 0.));
    /// ```
    #[track_caller]
    pub fn zeros<Sh: IntoDimension>(shape: Sh) -> Self {
        Self::from_elem(shape, A::default())
    }

    /// Create an array with copies of `elem`, dimension `shape`.
    ///
    /// **Panics** if `shape` is not a valid dimension vector.
    #[track_caller]
    pub fn from_elem<Sh: IntoDimension>(shape: Sh, elem: A) -> Self {
        let dim = dim_or_panic(shape);
        let data = AlignedVec::from_elem(dim.size(), elem);
        Self::from_parts(data, dim)
    }

    /// Create a zero array and set the resolution of every axis.
    ///
    /// **Errors** if `shape` is not a valid dimension vector, or with
    /// `ResolutionMismatch` if `res` does not have one entry per axis.
    ///
    /// ```
    /// use mrarray::Array;
    ///
    /// let a = Array::<f64>::with_resolution([64, 64], &[0.5, 0.5]).unwrap();
    /// assert_eq!(a.res(), &[0.5, 0.5]);
    /// ```
    pub fn with_resolution<Sh: IntoDimension>(shape: Sh, res: &[f32]) -> Result<Self, ShapeError> {
        let dim = shape.into_dimension()?;
        if res.len() != dim.ndim() {
            return Err(from_kind(ErrorKind::ResolutionMismatch));
        }
        let mut a = Self::from_parts(AlignedVec::from_elem(dim.size(), A::default()), dim);
        a.res.copy_from_slice(res);
        Ok(a)
    }

    /// Create a zero array from up to `MAX_RANK` positional extents.
    ///
    /// Missing trailing extents are 1, and trailing extents equal to 1 are
    /// trimmed, keeping at least one axis.
    ///
    /// **Panics** if an extent is zero or there are more than `MAX_RANK`
    /// extents.
    ///
    /// ```
    /// use mrarray::Array;
    ///
    /// let a = Array::<f64>::from_extents(&[2, 3, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]);
    /// assert_eq!(a.shape(), &[2, 3]);
    /// assert!(a.is_2d());
    /// ```
    #[track_caller]
    pub fn from_extents(extents: &[Ix]) -> Self {
        if extents.len() > MAX_RANK {
            panic!(
                "mrarray: {} extents given, at most {} are supported",
                extents.len(),
                MAX_RANK
            );
        }
        let shape = if extents.is_empty() {
            &[1][..]
        } else {
            dimension::trim_trailing_singletons(extents)
        };
        Self::zeros(shape)
    }

    /// Create a zero column vector with `m` elements.
    #[track_caller]
    pub fn new1(m: Ix) -> Self {
        Self::from_extents(&[m])
    }

    /// Create a zero `m × n` matrix.
    ///
    /// Trailing singletons are trimmed, so `new2(5, 1)` has shape `[5]`.
    #[track_caller]
    pub fn new2(m: Ix, n: Ix) -> Self {
        Self::from_extents(&[m, n])
    }

    /// Create a zero `m × n × k` array.
    #[track_caller]
    pub fn new3(m: Ix, n: Ix, k: Ix) -> Self {
        Self::from_extents(&[m, n, k])
    }

    /// Create a zero `m × n × k × l` array.
    #[track_caller]
    pub fn new4(m: Ix, n: Ix, k: Ix, l: Ix) -> Self {
        Self::from_extents(&[m, n, k, l])
    }

    /// Create a zero `n × n` matrix.
    #[track_caller]
    pub fn square(n: Ix) -> Self {
        Self::from_extents(&[n, n])
    }

    /// Create a rank-1 array from a vector (no copying of the elements
    /// beyond the move into aligned storage).
    ///
    /// **Panics** if `v` is empty.
    ///
    /// ```
    /// use mrarray::Array;
    ///
    /// let a = Array::from_vec(vec![1., 2., 3., 4.]);
    /// assert_eq!(a.shape(), &[4]);
    /// ```
    #[track_caller]
    pub fn from_vec(v: Vec<A>) -> Self {
        let dim = dim_or_panic(v.len());
        Self::from_parts(AlignedVec::from_vec(v), dim)
    }

    /// Create an array from a vector in column-major order.
    ///
    /// **Errors** if `shape` is not a valid dimension vector, or with
    /// `IncompatibleShape` if its element count differs from `v.len()`.
    ///
    /// ```
    /// use mrarray::Array;
    ///
    /// let a = Array::from_shape_vec([2, 2], vec![1, 2, 3, 4]).unwrap();
    /// assert_eq!(a[[0, 1]], 3);
    /// assert!(Array::from_shape_vec([3, 2], vec![1, 2, 3, 4]).is_err());
    /// ```
    pub fn from_shape_vec<Sh: IntoDimension>(shape: Sh, v: Vec<A>) -> Result<Self, ShapeError> {
        let dim = shape.into_dimension()?;
        if dim.size() != v.len() {
            return Err(error::incompatible_shapes(&[v.len()], dim.slice()));
        }
        Ok(Self::from_parts(AlignedVec::from_vec(v), dim))
    }

    /// Create an array with values created by the function `f`.
    ///
    /// `f` is called with the multi-index of each element, in buffer
    /// (column-major) order.
    ///
    /// **Panics** if `shape` is not a valid dimension vector.
    ///
    /// ```
    /// use mrarray::Array;
    ///
    /// let a = Array::from_shape_fn([2, 3], |ix| ix[0] * 10 + ix[1]);
    /// assert_eq!(a.as_slice(), &[0, 10, 1, 11, 2, 12]);
    /// ```
    #[track_caller]
    pub fn from_shape_fn<Sh, F>(shape: Sh, mut f: F) -> Self
    where
        Sh: IntoDimension,
        F: FnMut(&[Ix]) -> A,
    {
        let dim = dim_or_panic(shape);
        let mut v = Vec::with_capacity(dim.size());
        let mut index = vec![0; dim.ndim()];
        for _ in 0..dim.size() {
            v.push(f(&index));
            next_index(dim.slice(), &mut index);
        }
        Self::from_parts(AlignedVec::from_vec(v), dim)
    }

    /// Assemble an array from storage and a dimension of matching size,
    /// with unit resolutions and no name.
    pub(crate) fn from_parts(data: AlignedVec<A>, dim: Dim) -> Self {
        debug_assert_eq!(data.len(), dim.size());
        Array {
            data,
            res: vec![1.; dim.ndim()],
            dim,
            name: String::new(),
        }
    }
}

/// Constructor methods for numeric arrays.
impl<A> Array<A>
where
    A: Scalar,
{
    /// Create an array with ones, dimension `shape`.
    ///
    /// **Panics** if `shape` is not a valid dimension vector.
    #[track_caller]
    pub fn ones<Sh: IntoDimension>(shape: Sh) -> Self {
        Self::from_elem(shape, A::one())
    }

    /// Create an `n × n` identity matrix.
    ///
    /// **Panics** if `n` is zero.
    ///
    /// ```
    /// use mrarray::Array;
    ///
    /// let eye = Array::<i32>::eye(3);
    /// assert_eq!(eye.as_slice(), &[1, 0, 0, 0, 1, 0, 0, 0, 1]);
    /// ```
    #[track_caller]
    pub fn eye(n: Ix) -> Self {
        let mut eye = Self::square(n);
        for i in 0..n {
            eye.data[i * (n + 1)] = A::one();
        }
        eye
    }
}

/// Advance a column-major multi-index by one, wrapping to zero at the end.
pub(crate) fn next_index(shape: &[Ix], index: &mut [Ix]) {
    for (i, &d) in index.iter_mut().zip(shape) {
        *i += 1;
        if *i < d {
            return;
        }
        *i = 0;
    }
}
