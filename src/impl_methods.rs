// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::slice;

use num_traits::AsPrimitive;
use tracing::debug;

use crate::dimension::dim_or_panic;
use crate::error::{self, from_kind, ErrorKind, ShapeError};
use crate::{AlignedVec, Array, Dim, Element, IntoDimension, Ix};

impl<A> Array<A>
where
    A: Element,
{
    /// Return the total number of elements in the array.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Return the shape of the array as a slice.
    #[inline]
    pub fn shape(&self) -> &[Ix] {
        self.dim.slice()
    }

    /// Return the dimension vector of the array.
    #[inline]
    pub fn raw_dim(&self) -> &Dim {
        &self.dim
    }

    /// Return the strides of the array as a slice.
    #[inline]
    pub fn strides(&self) -> &[Ix] {
        self.dim.strides()
    }

    /// Return the number of array axes.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.dim.ndim()
    }

    /// Return the extent of `axis`; axes beyond the rank have extent 1.
    #[inline]
    pub fn len_of(&self, axis: usize) -> Ix {
        self.dim.extent(axis)
    }

    /// Return the rank classification, the number of axes with extent
    /// greater than one.
    ///
    /// ```
    /// use mrarray::Array;
    ///
    /// assert_eq!(Array::<f32>::zeros([4, 1, 3]).classify(), 2);
    /// assert_eq!(Array::<f32>::zeros([1, 1]).classify(), 0);
    /// ```
    #[inline]
    pub fn classify(&self) -> usize {
        self.dim.classify()
    }

    /// Return `true` if exactly `k` axes have extent greater than one.
    #[inline]
    pub fn is_nd(&self, k: usize) -> bool {
        self.dim.is_nd(k)
    }

    /// Return `true` if the array is a vector: one non-singleton axis.
    #[inline]
    pub fn is_1d(&self) -> bool {
        self.is_nd(1)
    }

    /// Return `true` if the array is a matrix: two non-singleton axes.
    #[inline]
    pub fn is_2d(&self) -> bool {
        self.is_nd(2)
    }

    #[inline]
    pub fn is_3d(&self) -> bool {
        self.is_nd(3)
    }

    #[inline]
    pub fn is_4d(&self) -> bool {
        self.is_nd(4)
    }

    /// Return the index of the highest axis with extent greater than one.
    #[inline]
    pub fn hdim(&self) -> usize {
        self.dim.hdim()
    }

    /// Return an iterator of references to the elements in buffer order.
    pub fn iter(&self) -> slice::Iter<'_, A> {
        self.data.iter()
    }

    /// Return an iterator of mutable references to the elements in buffer
    /// order.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, A> {
        self.data.iter_mut()
    }

    /// Return a reference to the element at linear index `i`, or `None`
    /// if it is out of bounds.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&A> {
        self.data.get(i)
    }

    /// Return a mutable reference to the element at linear index `i`, or
    /// `None` if it is out of bounds.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut A> {
        self.data.get_mut(i)
    }

    /// Return a reference to the element at a multi-index.
    ///
    /// Omitted trailing coordinates are zero.
    ///
    /// **Errors** with `OutOfBounds` if a coordinate is outside its extent.
    ///
    /// ```
    /// use mrarray::{Array, ErrorKind};
    ///
    /// let a = Array::from_shape_vec([2, 3], (0..6).collect()).unwrap();
    /// assert_eq!(a.get_nd(&[1, 2]), Ok(&5));
    /// assert_eq!(a.get_nd(&[1]), Ok(&1));
    /// assert_eq!(a.get_nd(&[2, 0]).unwrap_err().kind(), ErrorKind::OutOfBounds);
    /// ```
    pub fn get_nd(&self, index: &[Ix]) -> Result<&A, ShapeError> {
        let offset = self.dim.offset(index)?;
        Ok(&self.data[offset])
    }

    /// Return a mutable reference to the element at a multi-index.
    ///
    /// **Errors** with `OutOfBounds` if a coordinate is outside its extent.
    pub fn get_nd_mut(&mut self, index: &[Ix]) -> Result<&mut A, ShapeError> {
        let offset = self.dim.offset(index)?;
        Ok(&mut self.data[offset])
    }

    /// Return the linear index of a multi-index.
    ///
    /// **Errors** with `OutOfBounds` if a coordinate is outside its extent.
    #[inline]
    pub fn offset(&self, index: &[Ix]) -> Result<usize, ShapeError> {
        self.dim.offset(index)
    }

    /// Return the resolution of every axis.
    #[inline]
    pub fn res(&self) -> &[f32] {
        &self.res
    }

    /// Return the resolution of `axis`; 1.0 for axes beyond the rank.
    pub fn res_of(&self, axis: usize) -> f32 {
        self.res.get(axis).copied().unwrap_or(1.)
    }

    /// Set the resolution of `axis`.
    ///
    /// **Errors** with `OutOfBounds` if `axis` is not below the rank.
    pub fn set_res(&mut self, axis: usize, value: f32) -> Result<(), ShapeError> {
        match self.res.get_mut(axis) {
            Some(r) => {
                *r = value;
                Ok(())
            }
            None => Err(from_kind(ErrorKind::OutOfBounds)),
        }
    }

    /// Set the resolution of every axis.
    ///
    /// **Errors** with `ResolutionMismatch` unless `res` has one entry per
    /// axis.
    pub fn set_resolution(&mut self, res: &[f32]) -> Result<(), ShapeError> {
        if res.len() != self.ndim() {
            return Err(from_kind(ErrorKind::ResolutionMismatch));
        }
        self.res.copy_from_slice(res);
        Ok(())
    }

    /// Return the name of the array; empty if unnamed.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    /// Return a copy of the array with a new shape.
    ///
    /// The elements keep their buffer order. Resolutions are kept if the
    /// rank is unchanged and reset to 1.0 otherwise.
    ///
    /// **Errors** if `shape` is not a valid dimension vector, or with
    /// `IncompatibleShape` if the element count differs.
    ///
    /// ```
    /// use mrarray::Array;
    ///
    /// let a = Array::from_vec(vec![1, 2, 3, 4, 5, 6]);
    /// let b = a.reshape([2, 3]).unwrap();
    /// assert_eq!(b[[1, 1]], 4);
    /// assert!(a.reshape([4, 2]).is_err());
    /// ```
    pub fn reshape<Sh: IntoDimension>(&self, shape: Sh) -> Result<Array<A>, ShapeError> {
        self.clone().into_shape(shape)
    }

    /// Change the shape of the array without copying its elements.
    ///
    /// **Errors** as [`reshape`](Array::reshape) does.
    pub fn into_shape<Sh: IntoDimension>(mut self, shape: Sh) -> Result<Array<A>, ShapeError> {
        self.reshape_inplace(shape)?;
        Ok(self)
    }

    /// Change the shape of the array in place, keeping the buffer.
    ///
    /// Resolutions reset to 1.0 per axis when the rank changes.
    ///
    /// **Errors** if `shape` is not a valid dimension vector, or with
    /// `IncompatibleShape` if the element count differs. The array is
    /// unchanged on error.
    pub fn reshape_inplace<Sh: IntoDimension>(&mut self, shape: Sh) -> Result<(), ShapeError> {
        let dim = shape.into_dimension()?;
        if dim.size() != self.len() {
            return Err(error::incompatible_shapes(self.shape(), dim.slice()));
        }
        if dim.ndim() != self.ndim() {
            self.res = vec![1.; dim.ndim()];
        }
        self.dim = dim;
        Ok(())
    }

    /// Replace the shape and set every element to zero.
    ///
    /// The storage is only reallocated if the element count changes.
    /// Resolutions reset to 1.0; the name is kept.
    ///
    /// **Panics** if `shape` is not a valid dimension vector.
    ///
    /// ```
    /// use mrarray::Array;
    ///
    /// let mut a = Array::<f64>::ones([3, 2]);
    /// a.reset([5, 5]);
    /// assert_eq!(a.len(), 25);
    /// assert!(a.iter().all(|&x| x == 0.));
    /// ```
    #[track_caller]
    pub fn reset<Sh: IntoDimension>(&mut self, shape: Sh) {
        let dim = dim_or_panic(shape);
        debug!(from = ?self.dim, to = ?dim, "reset array");
        if dim.size() != self.len() {
            self.data.clear();
        }
        self.data.resize_with(dim.size(), A::default());
        self.res = vec![1.; dim.ndim()];
        self.dim = dim;
    }

    /// Release the storage and return to the one-element, rank-1 state.
    ///
    /// Resolution and name are reset too.
    pub fn clear(&mut self) {
        debug!(shape = ?self.dim, name = %self.name, "clear array");
        self.data.clear();
        self.data.resize(1);
        self.dim = Dim::default();
        self.res = vec![1.];
        self.name.clear();
    }

    /// Remove every singleton axis, keeping at least one.
    ///
    /// Resolutions of the remaining axes are kept.
    pub fn squeeze(&mut self) {
        let res = self
            .dim
            .occupied_axes()
            .map(|axis| self.res[axis])
            .collect::<Vec<_>>();
        self.dim = self.dim.squeeze();
        self.res = if res.is_empty() { vec![1.] } else { res };
    }

    /// Return a copy with every singleton axis removed.
    pub fn squeezed(&self) -> Array<A> {
        let mut a = self.clone();
        a.squeeze();
        a
    }

    /// Copy the elements of `values` into the array in buffer order.
    ///
    /// **Errors** with `IncompatibleShape` if `values.len()` differs from
    /// the element count.
    pub fn assign_slice(&mut self, values: &[A]) -> Result<(), ShapeError> {
        if values.len() != self.len() {
            return Err(error::incompatible_shapes(self.shape(), &[values.len()]));
        }
        self.data.clone_from_slice(values);
        Ok(())
    }

    /// Set every element to `value`.
    pub fn fill(&mut self, value: A) {
        for x in self.iter_mut() {
            *x = value.clone();
        }
    }

    /// Copy the elements of `rhs` into the array.
    ///
    /// **Panics** if the shapes differ.
    #[track_caller]
    pub fn assign(&mut self, rhs: &Array<A>) {
        self.zip_mut_with(rhs, |x, y| *x = y.clone());
    }

    /// Return the elements in buffer order as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[A] {
        self.data.as_slice()
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [A] {
        self.data.as_mut_slice()
    }

    /// Return a pointer to the first element, aligned to
    /// [`ALIGNMENT`](crate::ALIGNMENT) bytes.
    ///
    /// Together with [`shape`](Array::shape) and
    /// [`strides`](Array::strides) this is what numeric kernels need.
    #[inline]
    pub fn as_ptr(&self) -> *const A {
        self.data.as_ptr()
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut A {
        self.data.as_mut_ptr()
    }

    /// Return the elements in buffer order as a `Vec`.
    pub fn into_raw_vec(self) -> Vec<A> {
        self.data.into_vec()
    }

    /// Apply `f` elementwise and return a new array with the results.
    ///
    /// The shape, resolutions and name are kept.
    ///
    /// ```
    /// use mrarray::arr2;
    ///
    /// let a = arr2(&[[0., 1.], [-1., 2.]]);
    /// assert_eq!(a.map(|x| *x >= 1.0), arr2(&[[false, true], [false, true]]));
    /// ```
    pub fn map<'a, B, F>(&'a self, f: F) -> Array<B>
    where
        F: FnMut(&'a A) -> B,
        B: Element,
    {
        let data = AlignedVec::from_vec(self.data.iter().map(f).collect());
        self.with_data(data)
    }

    /// Apply `f` by value elementwise and return a new array with the
    /// results.
    pub fn mapv<B, F>(&self, mut f: F) -> Array<B>
    where
        F: FnMut(A) -> B,
        A: Copy,
        B: Element,
    {
        self.map(move |&x| f(x))
    }

    /// Modify the array in place by calling `f` on a mutable reference to
    /// each element.
    pub fn map_inplace<F>(&mut self, f: F)
    where
        F: FnMut(&mut A),
    {
        self.data.iter_mut().for_each(f);
    }

    /// Modify the array in place by replacing each element with `f` of it.
    pub fn mapv_inplace<F>(&mut self, mut f: F)
    where
        F: FnMut(A) -> A,
        A: Copy,
    {
        self.map_inplace(move |x| *x = f(*x));
    }

    /// Call `f` on mutable references to the elements of `self` and
    /// references to the elements of `rhs` in lock step.
    ///
    /// **Panics** if the shapes differ.
    #[track_caller]
    pub fn zip_mut_with<B, F>(&mut self, rhs: &Array<B>, mut f: F)
    where
        B: Element,
        F: FnMut(&mut A, &B),
    {
        if self.shape() != rhs.shape() {
            error::shape_panic("zip", self.shape(), rhs.shape());
        }
        for (x, y) in self.data.iter_mut().zip(rhs.data.iter()) {
            f(x, y);
        }
    }

    /// Apply `f` to the elements of `self` and `rhs` in lock step and
    /// return a new array with the results.
    ///
    /// **Errors** with `IncompatibleShape` if the shapes differ.
    pub fn zip_map<B, C, F>(&self, rhs: &Array<B>, mut f: F) -> Result<Array<C>, ShapeError>
    where
        B: Element,
        C: Element,
        F: FnMut(&A, &B) -> C,
    {
        self.check_shape(rhs)?;
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(x, y)| f(x, y))
            .collect();
        Ok(self.with_data(AlignedVec::from_vec(data)))
    }

    /// Return a copy of the array with every element cast to `B` by `as`
    /// conversion semantics.
    ///
    /// ```
    /// use mrarray::arr1;
    ///
    /// let a = arr1(&[1.7f64, -2.2, 300.]);
    /// assert_eq!(a.convert::<u8>().as_slice(), &[1, 0, 255]);
    /// ```
    pub fn convert<B>(&self) -> Array<B>
    where
        A: AsPrimitive<B>,
        B: Element + Copy,
    {
        self.mapv(AsPrimitive::as_)
    }

    /// Return `true` if `rhs` has the same dimension vector.
    pub fn is_shape_compatible<B: Element>(&self, rhs: &Array<B>) -> bool {
        self.shape() == rhs.shape()
    }

    /// **Errors** with `IncompatibleShape` unless `rhs` has the same
    /// dimension vector.
    pub fn check_shape<B: Element>(&self, rhs: &Array<B>) -> Result<(), ShapeError> {
        if self.is_shape_compatible(rhs) {
            Ok(())
        } else {
            Err(error::incompatible_shapes(self.shape(), rhs.shape()))
        }
    }

    /// An array with our shape and metadata around `data`.
    pub(crate) fn with_data<B: Element>(&self, data: AlignedVec<B>) -> Array<B> {
        debug_assert_eq!(data.len(), self.len());
        Array {
            data,
            dim: self.dim.clone(),
            res: self.res.clone(),
            name: self.name.clone(),
        }
    }
}
