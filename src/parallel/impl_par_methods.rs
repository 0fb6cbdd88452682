// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use rayon::slice::{Iter, IterMut};

use crate::error;
use crate::parallel::prelude::*;
use crate::{AlignedVec, Array, Element};

/// # Parallel methods
///
/// These methods require crate feature `rayon`.
impl<A> Array<A>
where
    A: Element,
{
    /// Return a parallel iterator over the elements, in buffer order.
    pub fn par_iter(&self) -> Iter<'_, A> {
        self.as_slice().par_iter()
    }

    /// Return a parallel iterator of mutable references to the elements.
    pub fn par_iter_mut(&mut self) -> IterMut<'_, A> {
        self.as_mut_slice().par_iter_mut()
    }

    /// Parallel version of `map_inplace`.
    ///
    /// Modify the array in place by calling `f` by mutable reference on each element.
    ///
    /// Elements are visited in arbitrary order.
    pub fn par_map_inplace<F>(&mut self, f: F)
    where
        F: Fn(&mut A) + Sync + Send,
    {
        self.par_iter_mut().for_each(f)
    }

    /// Parallel version of `mapv_inplace`.
    ///
    /// Modify the array in place by calling `f` by **v**alue on each element.
    /// The array is updated with the new values.
    ///
    /// Elements are visited in arbitrary order.
    pub fn par_mapv_inplace<F>(&mut self, f: F)
    where
        F: Fn(A) -> A + Sync + Send,
    {
        self.par_iter_mut().for_each(move |x| *x = f(x.clone()))
    }

    /// Parallel version of `mapv`.
    ///
    /// The result has the shape, resolutions and name of `self`.
    pub fn par_mapv<B, F>(&self, f: F) -> Array<B>
    where
        B: Element,
        F: Fn(A) -> B + Sync + Send,
    {
        let data: Vec<B> = self.par_iter().map(|x| f(x.clone())).collect();
        self.with_data(AlignedVec::from_vec(data))
    }

    /// Parallel version of `zip_mut_with`.
    ///
    /// **Panics** if the shapes differ.
    #[track_caller]
    pub fn par_zip_mut_with<B, F>(&mut self, rhs: &Array<B>, f: F)
    where
        B: Element,
        F: Fn(&mut A, &B) + Sync + Send,
    {
        if !self.is_shape_compatible(rhs) {
            error::shape_panic("zip", self.shape(), rhs.shape());
        }
        self.par_iter_mut()
            .zip(rhs.par_iter())
            .for_each(|(x, y)| f(x, y));
    }
}
