// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Methods for two-dimensional arrays.
use std::ops::Not;

use crate::{AlignedVec, Array, Element, Ix};

/// # Methods For 2-D Arrays
///
/// Rows and columns are taken along the two non-singleton axes, so an
/// array of shape `[4, 1, 3]` is the `4 × 3` matrix it classifies as.
/// Transposes need an array with exactly two axes.
impl<A> Array<A>
where
    A: Element,
{
    /// Return the extent of axis 0, the number of rows.
    #[inline]
    pub fn height(&self) -> Ix {
        self.len_of(0)
    }

    /// Return the extent of axis 1, the number of columns; 1 for a rank-1
    /// array.
    #[inline]
    pub fn width(&self) -> Ix {
        self.len_of(1)
    }

    /// Return a copy of row `index` as a rank-1 array.
    ///
    /// **Panics** if the array is not 2-D or `index` is out of bounds.
    ///
    /// ```
    /// use mrarray::Array;
    ///
    /// let a = Array::from_shape_vec([4, 3], (0..12).collect()).unwrap();
    /// assert_eq!(a.row(1).as_slice(), &[1, 5, 9]);
    /// ```
    #[track_caller]
    pub fn row(&self, index: Ix) -> Array<A> {
        let [rows, cols] = self.matrix_axes("row");
        self.check_section_index("row", rows, index);
        self.cross_section(rows, index, &[cols])
    }

    /// Return a copy of column `index` as a rank-1 array.
    ///
    /// **Panics** if the array is not 2-D or `index` is out of bounds.
    ///
    /// ```
    /// use mrarray::Array;
    ///
    /// let a = Array::from_shape_vec([4, 3], (0..12).collect()).unwrap();
    /// assert_eq!(a.column(2).as_slice(), &[8, 9, 10, 11]);
    /// ```
    #[track_caller]
    pub fn column(&self, index: Ix) -> Array<A> {
        let [rows, cols] = self.matrix_axes("column");
        self.check_section_index("column", cols, index);
        self.cross_section(cols, index, &[rows])
    }

    /// Return the transpose of a matrix.
    ///
    /// Resolutions are swapped along with the axes.
    ///
    /// **Panics** unless the array has exactly two axes.
    ///
    /// ```
    /// use mrarray::arr2;
    ///
    /// let a = arr2(&[[1, 2, 3], [4, 5, 6]]);
    /// assert_eq!(a.transpose(), arr2(&[[1, 4], [2, 5], [3, 6]]));
    /// ```
    #[track_caller]
    pub fn transpose(&self) -> Array<A> {
        self.transpose_with(A::clone)
    }

    /// Return the conjugate transpose of a matrix; the plain transpose for
    /// real element types.
    ///
    /// `!a` is the same operation.
    ///
    /// **Panics** unless the array has exactly two axes.
    ///
    /// ```
    /// use mrarray::arr2;
    /// use num_complex::Complex;
    ///
    /// let a = arr2(&[[Complex::new(1., 2.), Complex::new(0., -1.)]]);
    /// let h = a.ctranspose();
    /// assert_eq!(h.shape(), &[2, 1]);
    /// assert_eq!(h[1], Complex::new(0., 1.));
    /// ```
    #[track_caller]
    pub fn ctranspose(&self) -> Array<A> {
        self.transpose_with(A::conj)
    }

    #[track_caller]
    fn transpose_with<F>(&self, mut f: F) -> Array<A>
    where
        F: FnMut(&A) -> A,
    {
        if self.ndim() != 2 {
            panic!(
                "mrarray: transpose needs an array with two axes, got shape {:?}",
                self.shape()
            );
        }
        let (m, n) = (self.shape()[0], self.shape()[1]);
        let mut v = Vec::with_capacity(self.len());
        for i in 0..m {
            for j in 0..n {
                v.push(f(&self.data[i + m * j]));
            }
        }
        Array {
            data: AlignedVec::from_vec(v),
            dim: self.dim.subdim(&[1, 0]),
            res: vec![self.res[1], self.res[0]],
            name: self.name.clone(),
        }
    }

    #[track_caller]
    fn matrix_axes(&self, op: &str) -> [usize; 2] {
        let mut axes = self.dim.occupied_axes();
        match (axes.next(), axes.next(), axes.next()) {
            (Some(rows), Some(cols), None) => [rows, cols],
            _ => panic!(
                "mrarray: {}() needs a 2-D array, got shape {:?}",
                op,
                self.shape()
            ),
        }
    }
}

/// Conjugate transpose, see [`Array::ctranspose`].
impl<A: Element> Not for Array<A> {
    type Output = Array<A>;
    #[track_caller]
    fn not(self) -> Array<A> {
        self.ctranspose()
    }
}

/// Conjugate transpose, see [`Array::ctranspose`].
impl<'a, A: Element> Not for &'a Array<A> {
    type Output = Array<A>;
    #[track_caller]
    fn not(self) -> Array<A> {
        self.ctranspose()
    }
}
