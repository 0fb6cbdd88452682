// Copyright 2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! mrarray prelude.
//!
//! This module contains the most used types, traits and functions that you
//! can import easily as a group.
//!
//! ```
//! use mrarray::prelude::*;
//!
//! let a = arr2(&[[1., 2.], [3., 4.]]);
//! assert_eq!(a.prod(&a, Trans::NoTrans, Trans::NoTrans).unwrap()[[0, 0]], 7.);
//! ```

#[doc(no_inline)]
pub use crate::{Array, Dim, Ix, MAX_RANK};

#[doc(no_inline)]
pub use crate::{Element, ElementType, IntoDimension, Scalar, ScalarOperand};

#[doc(no_inline)]
pub use crate::{arr1, arr2, Trans};

#[doc(no_inline)]
pub use crate::{ErrorKind, RangeError, RangeErrorKind, ShapeError};
