// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Sub-array extraction: slices, volumes and range selections.
//!
//! Every method here returns an independent copy.
use crate::error::{from_kind, ErrorKind, ShapeError};
use crate::impl_constructors::next_index;
use crate::range::{RangeError, RangeErrorKind, Selection};
use crate::{AlignedVec, Array, Dim, Element, Ix};

impl<A> Array<A>
where
    A: Element,
{
    /// Return a copy of the 2-D cross-section at `index` along the outer
    /// axis of a 3-D array.
    ///
    /// **Panics** if the array is not 3-D or `index` is out of bounds.
    ///
    /// ```
    /// use mrarray::Array;
    ///
    /// let a = Array::from_shape_vec([2, 1, 2, 3], (0..12).collect()).unwrap();
    /// let s = a.slice(1);
    /// assert_eq!(s.shape(), &[2, 2]);
    /// assert_eq!(s.as_slice(), &[4, 5, 6, 7]);
    /// ```
    #[track_caller]
    pub fn slice(&self, index: Ix) -> Array<A> {
        let axes = self.section_axes::<3>("slice");
        self.check_section_index("slice", axes[2], index);
        self.cross_section(axes[2], index, &axes[..2])
    }

    /// Return a copy of the 3-D cross-section at `index` along the outer
    /// axis of a 4-D array.
    ///
    /// **Panics** if the array is not 4-D or `index` is out of bounds.
    #[track_caller]
    pub fn volume(&self, index: Ix) -> Array<A> {
        let axes = self.section_axes::<4>("volume");
        self.check_section_index("volume", axes[3], index);
        self.cross_section(axes[3], index, &axes[..3])
    }

    /// Return a new array made of the elements at the given per-axis index
    /// lists.
    ///
    /// The result has one axis per array axis, with extent equal to the
    /// length of its list. Axes without a list keep their whole extent.
    /// Lists may repeat or reorder indices.
    ///
    /// **Errors** with `TooManyAxes` if there are more lists than axes,
    /// `ZeroExtent` if a list is empty, `OutOfBounds` if an index is not
    /// below its extent and `Overflow` if the result would be too large.
    ///
    /// ```
    /// use mrarray::Array;
    ///
    /// let a = Array::from_shape_vec([3, 2], (0..6).collect()).unwrap();
    /// let b = a.select(&[vec![2, 0]]).unwrap();
    /// assert_eq!(b.shape(), &[2, 2]);
    /// assert_eq!(b.as_slice(), &[2, 0, 5, 3]);
    /// ```
    pub fn select(&self, lists: &[Vec<Ix>]) -> Result<Array<A>, ShapeError> {
        if lists.len() > self.ndim() {
            return Err(from_kind(ErrorKind::TooManyAxes));
        }
        for (axis, list) in lists.iter().enumerate() {
            if list.iter().any(|&i| i >= self.len_of(axis)) {
                return Err(from_kind(ErrorKind::OutOfBounds));
            }
        }
        let full = (lists.len()..self.ndim())
            .map(|axis| (0..self.len_of(axis)).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let lists = lists.iter().chain(&full).map(|l| &l[..]).collect::<Vec<_>>();
        let counts = lists.iter().map(|l| l.len()).collect::<Vec<_>>();
        let dim = Dim::new(&counts)?;

        let strides = self.strides();
        let mut index = vec![0; dim.ndim()];
        let mut v = Vec::with_capacity(dim.size());
        for _ in 0..dim.size() {
            let offset = index
                .iter()
                .zip(&lists)
                .zip(strides)
                .map(|((&i, list), &s)| list[i] * s)
                .sum::<usize>();
            v.push(self.data[offset].clone());
            next_index(dim.slice(), &mut index);
        }
        Ok(Array {
            data: AlignedVec::from_vec(v),
            dim,
            res: self.res.clone(),
            name: self.name.clone(),
        })
    }

    /// Return a new array selected by a range expression.
    ///
    /// See the [`range`](crate::range) module for the syntax.
    ///
    /// **Errors** if the expression does not parse or does not fit the
    /// shape of the array.
    ///
    /// ```
    /// use mrarray::Array;
    ///
    /// let a = Array::from_shape_vec([6, 2], (0..12).collect()).unwrap();
    /// let b = a.range("0:2:5, 1").unwrap();
    /// assert_eq!(b.as_slice(), &[6, 8, 10]);
    /// let c = a.range("[end 0], :").unwrap();
    /// assert_eq!(c.as_slice(), &[5, 0, 11, 6]);
    /// ```
    pub fn range(&self, expr: &str) -> Result<Array<A>, RangeError> {
        let lists = expr.parse::<Selection>()?.resolve(self.shape())?;
        // the lists are in bounds, only the element count can be rejected
        self.select(&lists)
            .map_err(|_| RangeError::new(RangeErrorKind::TooLarge, 0))
    }

    /// Copy the elements with `axis` fixed at `index`, iterating the `kept`
    /// axes in the given order.
    pub(crate) fn cross_section(&self, axis: usize, index: Ix, kept: &[usize]) -> Array<A> {
        let dim = self.dim.subdim(kept);
        let strides = self.strides();
        let base = index * strides[axis];
        let mut ix = vec![0; kept.len()];
        let mut v = Vec::with_capacity(dim.size());
        for _ in 0..dim.size() {
            let offset = base
                + ix.iter()
                    .zip(kept)
                    .map(|(&i, &k)| i * strides[k])
                    .sum::<usize>();
            v.push(self.data[offset].clone());
            next_index(dim.slice(), &mut ix);
        }
        Array {
            data: AlignedVec::from_vec(v),
            dim,
            res: kept.iter().map(|&k| self.res[k]).collect(),
            name: self.name.clone(),
        }
    }

    #[track_caller]
    pub(crate) fn check_section_index(&self, op: &str, axis: usize, index: Ix) {
        if index >= self.len_of(axis) {
            panic!(
                "mrarray: {}() index {} is out of bounds for extent {} of shape {:?}",
                op,
                index,
                self.len_of(axis),
                self.shape()
            );
        }
    }

    #[track_caller]
    fn section_axes<const N: usize>(&self, op: &str) -> [usize; N] {
        if !self.is_nd(N) {
            panic!(
                "mrarray: {}() needs a {}-D array, got shape {:?}",
                op,
                N,
                self.shape()
            );
        }
        let mut axes = [0; N];
        for (a, axis) in axes.iter_mut().zip(self.dim.occupied_axes()) {
            *a = axis;
        }
        axes
    }
}
