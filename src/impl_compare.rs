// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Elementwise relational and logical operators.
//!
//! The results are `Array<bool>` of the operand shape. Ordering uses
//! [`Element::elem_cmp`], so complex values compare by modulus and a NaN
//! compares false with everything.
use std::cmp::Ordering;

use crate::error;
use crate::{AlignedVec, Array, Element};

macro_rules! impl_relational {
    ($($mth:ident, $mth_scalar:ident, $name:expr, |$x:ident, $y:ident| $test:expr;)*) => {
        $(
        #[doc = concat!("Return `x ", $name, " y` for every pair of elements.")]
        ///
        /// **Panics** if the shapes differ.
        #[track_caller]
        pub fn $mth(&self, rhs: &Array<A>) -> Array<bool> {
            self.compare_with(rhs, |$x, $y| $test)
        }

        #[doc = concat!("Return `x ", $name, " value` for every element `x`.")]
        pub fn $mth_scalar(&self, value: A) -> Array<bool> {
            self.map(|$x| {
                let $y = &value;
                $test
            })
        }
        )*
    };
}

// `value op x` is the commuted right-hand form
macro_rules! scalar_lhs_relational {
    ($($mth:ident, $commuted:ident, $name:expr;)*) => {
        $(
        #[doc = concat!("Return `value ", $name, " x` for every element `x`.")]
        pub fn $mth(&self, value: A) -> Array<bool> {
            self.$commuted(value)
        }
        )*
    };
}

impl<A> Array<A>
where
    A: Element,
{
    impl_relational! {
        elem_eq, elem_eq_scalar, "==", |x, y| x == y;
        elem_ne, elem_ne_scalar, "!=", |x, y| x != y;
        elem_lt, elem_lt_scalar, "<", |x, y| x.elem_cmp(y) == Some(Ordering::Less);
        elem_le, elem_le_scalar, "<=",
            |x, y| matches!(x.elem_cmp(y), Some(Ordering::Less) | Some(Ordering::Equal));
        elem_gt, elem_gt_scalar, ">", |x, y| x.elem_cmp(y) == Some(Ordering::Greater);
        elem_ge, elem_ge_scalar, ">=",
            |x, y| matches!(x.elem_cmp(y), Some(Ordering::Greater) | Some(Ordering::Equal));
    }

    scalar_lhs_relational! {
        scalar_eq, elem_eq_scalar, "==";
        scalar_ne, elem_ne_scalar, "!=";
        scalar_lt, elem_gt_scalar, "<";
        scalar_le, elem_ge_scalar, "<=";
        scalar_gt, elem_lt_scalar, ">";
        scalar_ge, elem_le_scalar, ">=";
    }

    /// Return the logical and of every pair of elements, nonzero being
    /// true.
    ///
    /// **Panics** if the shapes differ.
    ///
    /// ```
    /// use mrarray::arr1;
    ///
    /// let a = arr1(&[0., 1., 2., 0.]);
    /// let b = arr1(&[true, true, false, false]);
    /// assert_eq!(a.and(&b), arr1(&[false, true, false, false]));
    /// assert_eq!(a.or(&b), arr1(&[true, true, true, false]));
    /// ```
    #[track_caller]
    pub fn and<B: Element>(&self, rhs: &Array<B>) -> Array<bool> {
        self.compare_with(rhs, |x, y| x.is_nonzero() && y.is_nonzero())
    }

    /// Return the logical or of every pair of elements, nonzero being true.
    ///
    /// **Panics** if the shapes differ.
    #[track_caller]
    pub fn or<B: Element>(&self, rhs: &Array<B>) -> Array<bool> {
        self.compare_with(rhs, |x, y| x.is_nonzero() || y.is_nonzero())
    }

    #[track_caller]
    fn compare_with<B, F>(&self, rhs: &Array<B>, mut f: F) -> Array<bool>
    where
        B: Element,
        F: FnMut(&A, &B) -> bool,
    {
        if !self.is_shape_compatible(rhs) {
            error::shape_panic("compare", self.shape(), rhs.shape());
        }
        let data = self
            .iter()
            .zip(rhs.iter())
            .map(|(x, y)| f(x, y))
            .collect();
        self.with_data(AlignedVec::from_vec(data))
    }
}

impl Array<bool> {
    /// Return `true` if any element is `true`.
    pub fn any(&self) -> bool {
        self.iter().any(|&x| x)
    }

    /// Return `true` if every element is `true`.
    pub fn all(&self) -> bool {
        self.iter().all(|&x| x)
    }

    /// Return the number of `true` elements.
    pub fn count_true(&self) -> usize {
        self.iter().filter(|&&x| x).count()
    }
}
