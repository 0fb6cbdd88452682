// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Parallelization features for mrarray.
//!
//! Parallelization features are based on the crate [rayon] and its parallel
//! iterators. Since an array is one contiguous buffer, every elementwise
//! operation splits into independent chunks of that buffer.
//!
//! This requires the crate feature `rayon` to be enabled.
//!
//! The following parallelized methods exist:
//!
//! - [`Array::par_iter()`] and [`Array::par_iter_mut()`]
//! - [`Array::par_map_inplace()`]
//! - [`Array::par_mapv_inplace()`]
//! - [`Array::par_mapv()`]
//! - [`Array::par_zip_mut_with()`]
//!
//! The array itself is not synchronized; the methods take `&self` or
//! `&mut self` like their sequential counterparts.
//!
//! # Examples
//!
//! Compute the exponential of each element in an array, parallelized.
//!
//! ```
//! use mrarray::Array;
//! use mrarray::parallel::prelude::*;
//!
//! let mut a = Array::<f64>::zeros([128, 128]);
//!
//! // Parallel versions of regular array methods
//! a.par_map_inplace(|x| *x = x.exp());
//! a.par_mapv_inplace(f64::exp);
//!
//! // You can also use the parallel iterator directly
//! a.par_iter_mut().for_each(|x| *x = x.exp());
//! assert!(a.iter().all(|&x| x > 15.));
//! ```
//!
//! [`Array::par_iter()`]: crate::Array::par_iter
//! [`Array::par_iter_mut()`]: crate::Array::par_iter_mut
//! [`Array::par_map_inplace()`]: crate::Array::par_map_inplace
//! [`Array::par_mapv_inplace()`]: crate::Array::par_mapv_inplace
//! [`Array::par_mapv()`]: crate::Array::par_mapv
//! [`Array::par_zip_mut_with()`]: crate::Array::par_zip_mut_with

/// Traits for using the parallel iterators
pub mod prelude {
    #[doc(no_inline)]
    pub use rayon::prelude::{
        IndexedParallelIterator, IntoParallelIterator, IntoParallelRefIterator,
        IntoParallelRefMutIterator, ParallelIterator,
    };
}

mod impl_par_methods;
