// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::hash;
use std::iter::FromIterator;
use std::ops::{Index, IndexMut};
use std::slice;
use std::vec;

use crate::numeric_util;
use crate::{AlignedVec, Array, Element, Ix};

#[cold]
#[inline(never)]
#[track_caller]
fn array_out_of_bounds(index: &dyn std::fmt::Debug, shape: &[Ix]) -> ! {
    panic!(
        "mrarray: index {:?} is out of bounds for array of shape {:?}",
        index, shape
    )
}

/// Access the element at linear index `index`, in buffer order.
///
/// **Panics** if index is out of bounds.
impl<A: Element> Index<usize> for Array<A> {
    type Output = A;
    #[inline]
    #[track_caller]
    fn index(&self, index: usize) -> &A {
        match self.data.get(index) {
            Some(x) => x,
            None => array_out_of_bounds(&index, self.shape()),
        }
    }
}

/// Access the element at linear index `index`, in buffer order.
///
/// **Panics** if index is out of bounds.
impl<A: Element> IndexMut<usize> for Array<A> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut A {
        if index >= self.len() {
            array_out_of_bounds(&index, self.shape());
        }
        &mut self.data[index]
    }
}

/// Access the element at a multi-index; omitted trailing coordinates are
/// zero.
///
/// **Panics** if index is out of bounds.
impl<A: Element, const N: usize> Index<[Ix; N]> for Array<A> {
    type Output = A;
    #[inline]
    #[track_caller]
    fn index(&self, index: [Ix; N]) -> &A {
        match self.get_nd(&index) {
            Ok(x) => x,
            Err(_) => array_out_of_bounds(&index, self.shape()),
        }
    }
}

/// Access the element at a multi-index; omitted trailing coordinates are
/// zero.
///
/// **Panics** if index is out of bounds.
impl<A: Element, const N: usize> IndexMut<[Ix; N]> for Array<A> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: [Ix; N]) -> &mut A {
        match self.dim.offset(&index) {
            Ok(offset) => &mut self.data[offset],
            Err(_) => array_out_of_bounds(&index, self.shape()),
        }
    }
}

/// Access the element at a multi-index of up to `MAX_RANK` coordinates.
///
/// **Panics** if index is out of bounds.
impl<'a, A: Element> Index<&'a [Ix]> for Array<A> {
    type Output = A;
    #[inline]
    #[track_caller]
    fn index(&self, index: &[Ix]) -> &A {
        match self.get_nd(index) {
            Ok(x) => x,
            Err(_) => array_out_of_bounds(&index, self.shape()),
        }
    }
}

/// Access the element at a multi-index of up to `MAX_RANK` coordinates.
///
/// **Panics** if index is out of bounds.
impl<'a, A: Element> IndexMut<&'a [Ix]> for Array<A> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: &[Ix]) -> &mut A {
        match self.dim.offset(index) {
            Ok(offset) => &mut self.data[offset],
            Err(_) => array_out_of_bounds(&index, self.shape()),
        }
    }
}

/// Return `true` if the shapes and all elements of `self` and `rhs` are
/// equal. Resolutions and names are not compared.
impl<A> PartialEq for Array<A>
where
    A: Element,
{
    fn eq(&self, rhs: &Array<A>) -> bool {
        self.shape() == rhs.shape() && numeric_util::unrolled_eq(self.as_slice(), rhs.as_slice())
    }
}

impl<A> Eq for Array<A> where A: Element + Eq {}

impl<A> hash::Hash for Array<A>
where
    A: Element + hash::Hash,
{
    fn hash<S: hash::Hasher>(&self, state: &mut S) {
        self.shape().hash(state);
        for elt in self.iter() {
            elt.hash(state)
        }
    }
}

impl<A: Clone> Clone for Array<A> {
    fn clone(&self) -> Array<A> {
        Array {
            data: self.data.clone(),
            dim: self.dim.clone(),
            res: self.res.clone(),
            name: self.name.clone(),
        }
    }

    fn clone_from(&mut self, other: &Self) {
        if self.data.len() == other.data.len() {
            self.data.clone_from_slice(&other.data);
        } else {
            self.data = other.data.clone();
        }
        self.dim = other.dim.clone();
        self.res.clone_from(&other.res);
        self.name.clone_from(&other.name);
    }
}

/// The one-element, rank-1 array holding `A::default()`.
impl<A: Element> Default for Array<A> {
    fn default() -> Self {
        Array::zeros(1)
    }
}

/// Create a rank-1 array from a vector.
///
/// **Panics** if the vector is empty.
impl<A: Element> From<Vec<A>> for Array<A> {
    #[track_caller]
    fn from(v: Vec<A>) -> Self {
        Array::from_vec(v)
    }
}

/// Create a rank-1 array from an iterator.
///
/// **Panics** if the iterator is empty.
///
/// ```
/// use mrarray::Array;
///
/// let a: Array<_> = (0..5).map(|x| x * x).collect();
/// assert_eq!(a.as_slice(), &[0, 1, 4, 9, 16]);
/// ```
impl<A: Element> FromIterator<A> for Array<A> {
    #[track_caller]
    fn from_iter<I>(iterable: I) -> Array<A>
    where
        I: IntoIterator<Item = A>,
    {
        Array::from_vec(iterable.into_iter().collect())
    }
}

impl<'a, A: Element> IntoIterator for &'a Array<A> {
    type Item = &'a A;
    type IntoIter = slice::Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, A: Element> IntoIterator for &'a mut Array<A> {
    type Item = &'a mut A;
    type IntoIter = slice::IterMut<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<A: Element> IntoIterator for Array<A> {
    type Item = A;
    type IntoIter = vec::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_raw_vec().into_iter()
    }
}

impl<A> AsRef<[A]> for Array<A> {
    fn as_ref(&self) -> &[A] {
        self.data.as_slice()
    }
}

impl<A> AsRef<AlignedVec<A>> for Array<A> {
    fn as_ref(&self) -> &AlignedVec<A> {
        &self.data
    }
}
