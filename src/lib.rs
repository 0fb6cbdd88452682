// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![crate_name = "mrarray"]
#![doc(html_root_url = "https://docs.rs/mrarray/0.1/")]
#![allow(
    clippy::many_single_char_names,
    clippy::deref_addrof,
    clippy::unreadable_literal,
    clippy::manual_map, // is not an error
    clippy::while_let_on_iterator, // is not an error
    clippy::from_iter_instead_of_collect, // using from_iter is good style
    clippy::len_without_is_empty, // an array is never empty
)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! The `mrarray` crate provides [`Array`], the dense n-dimensional array
//! that magnetic resonance reconstruction code builds on: Fourier
//! transforms, solvers and file codecs all read and write the same
//! representation.
//!
//! - An array has between 1 and 16 axes ([`MAX_RANK`]), every axis has a
//!   positive extent, and the elements live in one contiguous buffer in
//!   **column-major** order (axis 0 varies fastest).
//! - The buffer is aligned to [`ALIGNMENT`] bytes and handed to numeric
//!   kernels as a raw pointer plus shape and strides.
//! - The *rank classification* of an array is the number of axes with
//!   extent greater than one: a `4 × 1 × 3` array is 2-D, and row, column,
//!   slice and volume extraction works on those non-singleton axes.
//! - Every axis carries a physical resolution (`f32`, default 1.0) and the
//!   array carries an optional name.
//! - Sub-arrays are selected with a small range language (see [`range`])
//!   and are always independent copies.
//!
//! ## Highlights
//!
//! - Elementwise arithmetic with arrays and scalars, relational and logical
//!   operators producing `Array<bool>`.
//! - Transpose and conjugate transpose for matrices, `!a` being the latter.
//! - Matrix products through `matrixmultiply` for floating point and complex
//!   elements.
//!
//! ## Crate Feature Flags
//!
//! The following crate feature flags are available. They are configured in
//! your `Cargo.toml`.
//!
//! - `std`: Rust standard library (enabled by default)
//! - `serde`: enables serialization support for serde 1.x
//! - `rayon`: enables data-parallel elementwise helpers
//! - `approx`: implementations of traits from version 0.5 of the
//!   [`approx`] crate
//! - `matrixmultiply-threading`: use threading from `matrixmultiply`
//!
//! ## Example
//!
//! ```
//! use mrarray::Array;
//!
//! let mut a = Array::<f64>::new2(4, 3);
//! for (i, x) in a.iter_mut().enumerate() {
//!     *x = i as f64;
//! }
//! assert_eq!(a[[1, 2]], 9.);
//! assert_eq!(a.row(1).as_slice(), &[1., 5., 9.]);
//!
//! let b = a.range("1:end, 0:2:2").unwrap();
//! assert_eq!(b.shape(), &[3, 2]);
//! ```

pub use crate::aligned::{AlignedVec, ALIGNMENT};
pub use crate::dimension::{Dim, IntoDimension};
pub use crate::element::{Element, ElementType, Scalar};
pub use crate::error::{ErrorKind, ShapeError};
pub use crate::free_functions::{arr1, arr2};
pub use crate::impl_linalg::Trans;
pub use crate::impl_ops::ScalarOperand;
pub use crate::range::{RangeError, RangeErrorKind, Selection};

mod aligned;
pub mod dimension;
mod element;
mod error;

#[cfg(feature = "approx")]
mod array_approx;
#[cfg(feature = "serde")]
mod array_serde;
mod arrayformat;
mod arraytraits;
mod free_functions;

mod impl_2d;
mod impl_compare;
mod impl_constructors;
mod impl_linalg;
mod impl_methods;
mod impl_numeric;
mod impl_ops;
mod impl_sections;
mod numeric_util;

#[cfg(feature = "rayon")]
#[cfg_attr(docsrs, doc(cfg(feature = "rayon")))]
pub mod parallel;

pub mod prelude;
pub mod range;

/// Array index type
pub type Ix = usize;

/// The largest number of axes an array can have.
pub const MAX_RANK: usize = 16;

/// A dense, owned, column-major n-dimensional array.
///
/// The array owns an [`AlignedVec`] holding exactly [`len()`](Array::len)
/// elements, its dimension vector [`Dim`] with the derived stride table,
/// one resolution per axis and a name.
///
/// The element type `A` is usually one of the [`Scalar`] types (`f32`,
/// `f64`, `Complex<f32>`, `Complex<f64>`, the primitive integers), or
/// `bool` for the result of comparisons.
///
/// ## Addressing
///
/// Elements are addressed either linearly, `a[i]`, in buffer order, or by a
/// multi-index `a[[x, y, z]]`. The two agree through the strides:
/// the multi-index `[x, y, z]` is the linear index
/// `x + y * stride[1] + z * stride[2]`. Omitted trailing coordinates are
/// zero.
///
/// Indexing out of bounds panics; [`get`](Array::get) and
/// [`get_nd`](Array::get_nd) are the checked variants.
///
/// ## Rank classification
///
/// [`classify`](Array::classify) counts the axes with extent greater than
/// one. Extraction of rows and columns ([`row`](Array::row),
/// [`column`](Array::column)), slices ([`slice`](Array::slice)) and
/// volumes ([`volume`](Array::volume)) requires the classification 2, 3 and
/// 4 respectively and operates on the non-singleton axes.
///
/// ## Arithmetic
///
/// `+`, `-`, `*` and `/` work elementwise on arrays of identical shape,
/// and between an array and a scalar on either side. See the
/// [`ScalarOperand`] trait for the scalar types.
///
/// ```
/// use mrarray::{arr2, Array};
///
/// let a = arr2(&[[1., 2.], [3., 4.]]);
/// let b = &a * 2. - 1.;
/// assert_eq!(b, arr2(&[[1., 3.], [5., 7.]]));
/// assert_eq!((&a + &b)[[1, 0]], 8.);
/// ```
pub struct Array<A> {
    data: AlignedVec<A>,
    dim: Dim,
    /// Physical resolution per axis; `res.len() == dim.ndim()`.
    res: Vec<f32>,
    name: String,
}
