// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use crate::{Array, Element, Ix, MAX_RANK};

/// Axes in the order of bracket nesting, outermost first.
///
/// Rows run along axis 0 and the innermost lists along axis 1; higher axes
/// are nested blocks around the matrices, the last axis outermost.
fn nesting_order(ndim: usize) -> Vec<usize> {
    if ndim == 1 {
        return vec![0];
    }
    let mut order: Vec<usize> = (2..ndim).rev().collect();
    order.push(0);
    order.push(1);
    order
}

fn format_array<A, F>(array: &Array<A>, f: &mut fmt::Formatter<'_>, mut format: F) -> fmt::Result
where
    A: Element,
    F: FnMut(&A, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    let order = nesting_order(array.ndim());
    let mut index = [0; MAX_RANK];
    format_level(array, &order, 0, &mut index, f, &mut format)
}

fn format_level<A, F>(
    array: &Array<A>,
    order: &[usize],
    depth: usize,
    index: &mut [Ix; MAX_RANK],
    f: &mut fmt::Formatter<'_>,
    format: &mut F,
) -> fmt::Result
where
    A: Element,
    F: FnMut(&A, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    let axis = order[depth];
    let innermost = depth + 1 == order.len();
    f.write_str("[")?;
    for i in 0..array.len_of(axis) {
        index[axis] = i;
        if i > 0 {
            if innermost {
                f.write_str(", ")?;
            } else {
                f.write_str(",\n")?;
                for _ in 0..=depth {
                    f.write_str(" ")?;
                }
            }
        }
        if innermost {
            let offset: usize = index
                .iter()
                .zip(array.strides())
                .map(|(&i, &s)| i * s)
                .sum();
            format(&array.as_slice()[offset], f)?;
        } else {
            format_level(array, order, depth + 1, index, f, format)?;
        }
    }
    index[axis] = 0;
    f.write_str("]")
}

/// Format the array using `Display` and apply the formatting parameters used
/// to each element.
///
/// Matrices are shown one row (axis 0) per line; higher axes wrap them in
/// further brackets.
///
/// ```
/// use mrarray::arr2;
///
/// let a = arr2(&[[1., 2.], [3., 4.]]);
/// assert_eq!(format!("{:.1}", a), "[[1.0, 2.0],\n [3.0, 4.0]]");
/// ```
impl<A: Element + fmt::Display> fmt::Display for Array<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_array(self, f, <A as fmt::Display>::fmt)
    }
}

/// Format the array using `Debug` and apply the formatting parameters used
/// to each element.
///
/// Shape, strides, resolutions and name follow the elements.
impl<A: Element> fmt::Debug for Array<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_array(self, f, <A as fmt::Debug>::fmt)?;
        write!(
            f,
            " shape={:?}, strides={:?}, res={:?}, name={:?}",
            self.shape(),
            self.strides(),
            self.res(),
            self.name()
        )
    }
}

/// Format the array using `LowerExp` and apply the formatting parameters used
/// to each element.
impl<A: Element + fmt::LowerExp> fmt::LowerExp for Array<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_array(self, f, <A as fmt::LowerExp>::fmt)
    }
}

/// Format the array using `UpperExp` and apply the formatting parameters used
/// to each element.
impl<A: Element + fmt::UpperExp> fmt::UpperExp for Array<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_array(self, f, <A as fmt::UpperExp>::fmt)
    }
}
