// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use num_complex::Complex;

use crate::error;
use crate::{Array, Element};

/// Elements that can be used as direct operands in arithmetic with arrays.
///
/// For example, `f64` is a `ScalarOperand` which means that for an array `a`,
/// arithmetic like `a + 1.0`, and, `a * 2.`, and `a += 3.` are allowed.
///
/// In the description below, let `A` be an array or a reference to one,
/// and let `B` be an owned array.
///
/// `ScalarOperand` determines for which scalars `K` operations `&A @ K`, and
/// `B @ K`, and `B @= K` are defined, as ***right hand side operands***, for
/// applicable arithmetic operators (denoted `@`). The scalar need not be the
/// element type: `Array<Complex<f64>> * 2.0` works because
/// `Complex<f64>: Mul<f64>`.
///
/// ***Left hand side*** scalar operands are not related to this trait
/// (they need one `impl` per concrete scalar type); but they are still
/// implemented for the same types, allowing operations
/// `K @ &A`, and `K @ B` for primitive numeric types `K`.
pub trait ScalarOperand: 'static + Clone {}
impl ScalarOperand for i8 {}
impl ScalarOperand for u8 {}
impl ScalarOperand for i16 {}
impl ScalarOperand for u16 {}
impl ScalarOperand for i32 {}
impl ScalarOperand for u32 {}
impl ScalarOperand for i64 {}
impl ScalarOperand for u64 {}
impl ScalarOperand for isize {}
impl ScalarOperand for usize {}
impl ScalarOperand for f32 {}
impl ScalarOperand for f64 {}
impl ScalarOperand for Complex<f32> {}
impl ScalarOperand for Complex<f64> {}

#[track_caller]
fn check_operands<A: Element, B: Element>(op: &str, lhs: &Array<A>, rhs: &Array<B>) {
    if !lhs.is_shape_compatible(rhs) {
        error::shape_panic(op, lhs.shape(), rhs.shape());
    }
}

macro_rules! impl_binary_op(
    ($trt:ident, $operator:tt, $mth:ident, $name:expr, $doc:expr) => (
/// Perform elementwise
#[doc=$doc]
/// between `self` and `rhs`,
/// and return the result (based on `self`).
///
/// **Panics** if their shapes disagree.
impl<A, B> $trt<Array<B>> for Array<A>
where
    A: Element + $trt<B, Output=A>,
    B: Element,
{
    type Output = Array<A>;
    #[track_caller]
    fn $mth(self, rhs: Array<B>) -> Array<A>
    {
        self.$mth(&rhs)
    }
}

/// Perform elementwise
#[doc=$doc]
/// between `self` and reference `rhs`,
/// and return the result (based on `self`).
///
/// **Panics** if their shapes disagree.
impl<'a, A, B> $trt<&'a Array<B>> for Array<A>
where
    A: Element + $trt<B, Output=A>,
    B: Element,
{
    type Output = Array<A>;
    #[track_caller]
    fn $mth(mut self, rhs: &Array<B>) -> Array<A>
    {
        check_operands($name, &self, rhs);
        self.zip_mut_with(rhs, |x, y| *x = x.clone() $operator y.clone());
        self
    }
}

/// Perform elementwise
#[doc=$doc]
/// between reference `self` and `rhs`,
/// and return the result (based on `rhs`).
///
/// **Panics** if their shapes disagree.
impl<'a, A, B> $trt<Array<B>> for &'a Array<A>
where
    A: Element + $trt<B, Output=B>,
    B: Element,
{
    type Output = Array<B>;
    #[track_caller]
    fn $mth(self, mut rhs: Array<B>) -> Array<B>
    {
        check_operands($name, self, &rhs);
        rhs.zip_mut_with(self, |y, x| *y = x.clone() $operator y.clone());
        rhs
    }
}

/// Perform elementwise
#[doc=$doc]
/// between references `self` and `rhs`,
/// and return the result as a new `Array`.
///
/// **Panics** if their shapes disagree.
impl<'a, A, B> $trt<&'a Array<B>> for &'a Array<A>
where
    A: Element + $trt<B, Output=A>,
    B: Element,
{
    type Output = Array<A>;
    #[track_caller]
    fn $mth(self, rhs: &'a Array<B>) -> Array<A> {
        check_operands($name, self, rhs);
        let mut out = self.clone();
        out.zip_mut_with(rhs, |x, y| *x = x.clone() $operator y.clone());
        out
    }
}

/// Perform elementwise
#[doc=$doc]
/// between `self` and the scalar `x`,
/// and return the result (based on `self`).
impl<A, B> $trt<B> for Array<A>
    where A: Element + $trt<B, Output=A>,
          B: ScalarOperand,
{
    type Output = Array<A>;
    fn $mth(mut self, x: B) -> Array<A> {
        self.map_inplace(move |elt| {
            *elt = elt.clone() $operator x.clone();
        });
        self
    }
}

/// Perform elementwise
#[doc=$doc]
/// between the reference `self` and the scalar `x`,
/// and return the result as a new `Array`.
impl<'a, A, B> $trt<B> for &'a Array<A>
    where A: Element + $trt<B, Output=A>,
          B: ScalarOperand,
{
    type Output = Array<A>;
    fn $mth(self, x: B) -> Array<A> {
        self.map(move |elt| elt.clone() $operator x.clone())
    }
}
    );
);

// Pick the expression $a for commutative and $b for ordered binop
macro_rules! if_commutative {
    (Commute { $a:expr } or { $b:expr }) => {
        $a
    };
    (Ordered { $a:expr } or { $b:expr }) => {
        $b
    };
}

macro_rules! impl_scalar_lhs_op {
    // a scalar of type $scalar on the left of an array of $elem
    // $commutative flag. Reuse the self + scalar impl if we can.
    // We can do this safely since these are the primitive numeric types
    ($scalar:ty => $elem:ty, $commutative:ident, $operator:tt, $trt:ident, $mth:ident, $doc:expr) => (
// these have no doc -- they are not visible in rustdoc
// Perform elementwise
// between the scalar `self` and array `rhs`,
// and return the result (based on `self`).
impl $trt<Array<$elem>> for $scalar {
    type Output = Array<$elem>;
    fn $mth(self, rhs: Array<$elem>) -> Array<$elem> {
        if_commutative!($commutative {
            rhs.$mth(self)
        } or {{
            let mut rhs = rhs;
            rhs.map_inplace(move |elt| {
                *elt = self $operator *elt;
            });
            rhs
        }})
    }
}

// Perform elementwise
// between the scalar `self` and array `rhs`,
// and return the result as a new `Array`.
impl<'a> $trt<&'a Array<$elem>> for $scalar {
    type Output = Array<$elem>;
    fn $mth(self, rhs: &Array<$elem>) -> Array<$elem> {
        if_commutative!($commutative {
            rhs.$mth(self)
        } or {
            rhs.map(move |elt| self $operator *elt)
        })
    }
}
    );
    ($scalar:ty, $commutative:ident, $operator:tt, $trt:ident, $mth:ident, $doc:expr) => (
        impl_scalar_lhs_op!($scalar => $scalar, $commutative, $operator, $trt, $mth, $doc);
    );
}

mod arithmetic_ops {
    use super::*;

    use std::ops::*;

    impl_binary_op!(Add, +, add, "add", "addition");
    impl_binary_op!(Sub, -, sub, "subtract", "subtraction");
    impl_binary_op!(Mul, *, mul, "multiply", "multiplication");
    impl_binary_op!(Div, /, div, "divide", "division");

    macro_rules! all_scalar_ops {
        ($scalar:ty => $elem:ty) => (
            impl_scalar_lhs_op!($scalar => $elem, Commute, +, Add, add, "addition");
            impl_scalar_lhs_op!($scalar => $elem, Ordered, -, Sub, sub, "subtraction");
            impl_scalar_lhs_op!($scalar => $elem, Commute, *, Mul, mul, "multiplication");
            impl_scalar_lhs_op!($scalar => $elem, Ordered, /, Div, div, "division");
        );
        ($scalar:ty) => (
            all_scalar_ops!($scalar => $scalar);
        );
    }
    all_scalar_ops!(i8);
    all_scalar_ops!(u8);
    all_scalar_ops!(i16);
    all_scalar_ops!(u16);
    all_scalar_ops!(i32);
    all_scalar_ops!(u32);
    all_scalar_ops!(i64);
    all_scalar_ops!(u64);
    all_scalar_ops!(isize);
    all_scalar_ops!(usize);
    all_scalar_ops!(f32);
    all_scalar_ops!(f64);
    all_scalar_ops!(Complex<f32>);
    all_scalar_ops!(Complex<f64>);
    all_scalar_ops!(f32 => Complex<f32>);
    all_scalar_ops!(f64 => Complex<f64>);

    impl<A> Neg for Array<A>
    where
        A: Element + Neg<Output = A>,
    {
        type Output = Self;
        /// Perform an elementwise negation of `self` and return the result.
        fn neg(mut self) -> Self {
            self.map_inplace(|elt| {
                *elt = -elt.clone();
            });
            self
        }
    }

    impl<'a, A> Neg for &'a Array<A>
    where
        A: Element + Neg<Output = A>,
    {
        type Output = Array<A>;
        /// Perform an elementwise negation of reference `self` and return the
        /// result as a new `Array`.
        fn neg(self) -> Array<A> {
            self.map(|elt| -elt.clone())
        }
    }
}

mod assign_ops {
    use super::*;

    macro_rules! impl_assign_op {
        ($trt:ident, $method:ident, $name:expr, $doc:expr) => {
            use std::ops::$trt;

            #[doc=$doc]
            /// **Panics** if their shapes disagree.
            impl<'a, A, B> $trt<&'a Array<B>> for Array<A>
            where
                A: Element + $trt<B>,
                B: Element,
            {
                #[track_caller]
                fn $method(&mut self, rhs: &Array<B>) {
                    check_operands($name, self, rhs);
                    self.zip_mut_with(rhs, |x, y| {
                        x.$method(y.clone());
                    });
                }
            }

            #[doc=$doc]
            impl<A> $trt<A> for Array<A>
            where
                A: Element + ScalarOperand + $trt<A>,
            {
                fn $method(&mut self, rhs: A) {
                    self.map_inplace(move |elt| {
                        elt.$method(rhs.clone());
                    });
                }
            }
        };
    }

    impl_assign_op!(
        AddAssign,
        add_assign,
        "add",
        "Perform `self += rhs` as elementwise addition (in place).\n"
    );
    impl_assign_op!(
        SubAssign,
        sub_assign,
        "subtract",
        "Perform `self -= rhs` as elementwise subtraction (in place).\n"
    );
    impl_assign_op!(
        MulAssign,
        mul_assign,
        "multiply",
        "Perform `self *= rhs` as elementwise multiplication (in place).\n"
    );
    impl_assign_op!(
        DivAssign,
        div_assign,
        "divide",
        "Perform `self /= rhs` as elementwise division (in place).\n"
    );
}
