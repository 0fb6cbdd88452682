// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::dimension;
use crate::{AlignedVec, Array, Element};

/// Create a one-dimensional array with elements from `xs`.
///
/// **Panics** if `xs` is empty.
///
/// ```
/// use mrarray::arr1;
///
/// let a = arr1(&[1, 2, 3]);
/// assert_eq!(a.shape(), &[3]);
/// ```
#[track_caller]
pub fn arr1<A: Element>(xs: &[A]) -> Array<A> {
    Array::from_vec(xs.to_vec())
}

/// Create a two-dimensional array from a list of rows.
///
/// The input is read row by row and stored column-major, so `xs[i][j]`
/// ends up at `[i, j]`. The result keeps both axes even when one of them
/// has extent one.
///
/// **Panics** if `xs` is empty or the rows are empty.
///
/// ```
/// use mrarray::arr2;
///
/// let a = arr2(&[[1, 2, 3],
///                [4, 5, 6]]);
/// assert_eq!(a.shape(), &[2, 3]);
/// assert_eq!(a[[1, 0]], 4);
/// assert_eq!(a.as_slice(), &[1, 4, 2, 5, 3, 6]);
///
/// let r = arr2(&[[1, 2, 3]]);
/// assert_eq!(r.shape(), &[1, 3]);
/// ```
#[track_caller]
pub fn arr2<A: Element, const N: usize>(xs: &[[A; N]]) -> Array<A> {
    let dim = dimension::dim_or_panic([xs.len(), N]);
    let mut data = Vec::with_capacity(dim.size());
    for j in 0..N {
        for row in xs {
            data.push(row[j].clone());
        }
    }
    Array::from_parts(AlignedVec::from_vec(data), dim)
}
