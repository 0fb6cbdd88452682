// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Element type traits.
//!
//! Everything that depends on the element type (the serialized type tag,
//! conjugation, ordering, modulus, power, matrix product kernel) is chosen
//! here once per type.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use num_complex::Complex;
use num_traits::{One, Zero};
use rawpointer::PointerExt;

/// Tag naming the element type of an array in serialized form.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ElementType {
    Bool,
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
    C32,
    C64,
}

impl ElementType {
    /// Return the lowercase name of the type, as used in serialized arrays.
    pub fn as_str(&self) -> &'static str {
        match *self {
            ElementType::Bool => "bool",
            ElementType::I8 => "i8",
            ElementType::I16 => "i16",
            ElementType::I32 => "i32",
            ElementType::I64 => "i64",
            ElementType::Isize => "isize",
            ElementType::U8 => "u8",
            ElementType::U16 => "u16",
            ElementType::U32 => "u32",
            ElementType::U64 => "u64",
            ElementType::Usize => "usize",
            ElementType::F32 => "f32",
            ElementType::F64 => "f64",
            ElementType::C32 => "c32",
            ElementType::C64 => "c64",
        }
    }

    /// `true` for the complex types.
    pub fn is_complex(&self) -> bool {
        matches!(*self, ElementType::C32 | ElementType::C64)
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An array element: any type that can be stored, compared and tagged.
///
/// Implemented for `bool`, the primitive integers, `f32`, `f64`,
/// `Complex<f32>` and `Complex<f64>`.
pub trait Element: Clone + Default + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// Serialized type tag.
    const TYPE: ElementType;
    /// `true` if conjugation is not the identity.
    const IS_COMPLEX: bool = false;

    /// Complex conjugate; the identity for real types.
    #[inline]
    fn conj(&self) -> Self {
        self.clone()
    }

    /// Truth value of the element in logical operations.
    fn is_nonzero(&self) -> bool;

    /// Ordering used by the relational operators.
    ///
    /// Complex values are ordered by modulus.
    fn elem_cmp(&self, rhs: &Self) -> Option<Ordering>;
}

/// Numeric elements: the ones arithmetic, reductions and matrix products
/// are defined for.
pub trait Scalar:
    Element
    + Copy
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// The type of the modulus: `Self` for real types, the component type
    /// for complex ones.
    type Real: Scalar + PartialOrd;

    /// Absolute value, or modulus for complex values.
    fn modulus(self) -> Self::Real;

    /// The modulus squared.
    fn modulus_sqr(self) -> Self::Real {
        let m = self.modulus();
        m * m
    }

    /// Widen the real part to `f64`.
    fn real_f64(self) -> f64;

    /// Build an element from an `f64` (truncating and saturating for
    /// integers).
    fn from_f64(x: f64) -> Self;

    /// `self` raised to the power `p`.
    fn powf(self, p: f32) -> Self;

    /// General matrix multiplication, `C ← α A B + β C`, for an `m × k`
    /// matrix `A` and a `k × n` matrix `B`, with row and column strides
    /// given per operand in elements.
    ///
    /// The default is a plain triple loop; floating point types dispatch to
    /// `matrixmultiply`.
    ///
    /// ## Safety
    ///
    /// Every element addressed through the pointers and strides must be
    /// valid, and `c` must not alias `a` or `b`.
    #[allow(clippy::too_many_arguments)]
    unsafe fn gemm(
        m: usize,
        k: usize,
        n: usize,
        alpha: Self,
        a: *const Self,
        rsa: isize,
        csa: isize,
        b: *const Self,
        rsb: isize,
        csb: isize,
        beta: Self,
        c: *mut Self,
        rsc: isize,
        csc: isize,
    ) {
        for j in 0..n {
            for i in 0..m {
                let mut acc = Self::zero();
                for l in 0..k {
                    let x = *a.stride_offset(rsa, i).stride_offset(csa, l);
                    let y = *b.stride_offset(rsb, l).stride_offset(csb, j);
                    acc = acc + x * y;
                }
                let elt = c.stride_offset(rsc, i).stride_offset(csc, j);
                // c is not read when beta is zero
                *elt = if beta.is_zero() {
                    alpha * acc
                } else {
                    alpha * acc + beta * *elt
                };
            }
        }
    }
}

impl Element for bool {
    const TYPE: ElementType = ElementType::Bool;

    #[inline]
    fn is_nonzero(&self) -> bool {
        *self
    }

    #[inline]
    fn elem_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

macro_rules! impl_element_int {
    ($($t:ty => $tag:ident, $modulus:expr;)*) => {
        $(
        impl Element for $t {
            const TYPE: ElementType = ElementType::$tag;

            #[inline]
            fn is_nonzero(&self) -> bool {
                *self != 0
            }

            #[inline]
            fn elem_cmp(&self, rhs: &Self) -> Option<Ordering> {
                Some(self.cmp(rhs))
            }
        }

        impl Scalar for $t {
            type Real = $t;

            #[inline]
            fn modulus(self) -> $t {
                $modulus(self)
            }

            #[inline]
            fn real_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64(x: f64) -> Self {
                x as $t
            }

            #[inline]
            fn powf(self, p: f32) -> Self {
                (self as f64).powf(p as f64) as $t
            }
        }
        )*
    };
}

impl_element_int! {
    i8 => I8, i8::wrapping_abs;
    i16 => I16, i16::wrapping_abs;
    i32 => I32, i32::wrapping_abs;
    i64 => I64, i64::wrapping_abs;
    isize => Isize, isize::wrapping_abs;
    u8 => U8, std::convert::identity;
    u16 => U16, std::convert::identity;
    u32 => U32, std::convert::identity;
    u64 => U64, std::convert::identity;
    usize => Usize, std::convert::identity;
}

macro_rules! impl_element_float {
    ($t:ident, $tag:ident, $gemm:ident) => {
        impl Element for $t {
            const TYPE: ElementType = ElementType::$tag;

            #[inline]
            fn is_nonzero(&self) -> bool {
                *self != 0.
            }

            #[inline]
            fn elem_cmp(&self, rhs: &Self) -> Option<Ordering> {
                self.partial_cmp(rhs)
            }
        }

        impl Scalar for $t {
            type Real = $t;

            #[inline]
            fn modulus(self) -> $t {
                self.abs()
            }

            #[inline]
            fn real_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64(x: f64) -> Self {
                x as $t
            }

            #[inline]
            fn powf(self, p: f32) -> Self {
                self.powf(p as $t)
            }

            unsafe fn gemm(
                m: usize,
                k: usize,
                n: usize,
                alpha: Self,
                a: *const Self,
                rsa: isize,
                csa: isize,
                b: *const Self,
                rsb: isize,
                csb: isize,
                beta: Self,
                c: *mut Self,
                rsc: isize,
                csc: isize,
            ) {
                matrixmultiply::$gemm(m, k, n, alpha, a, rsa, csa, b, rsb, csb, beta, c, rsc, csc);
            }
        }
    };
}

impl_element_float!(f32, F32, sgemm);
impl_element_float!(f64, F64, dgemm);

macro_rules! impl_element_complex {
    ($t:ident, $tag:ident, $gemm:ident) => {
        impl Element for Complex<$t> {
            const TYPE: ElementType = ElementType::$tag;
            const IS_COMPLEX: bool = true;

            #[inline]
            fn conj(&self) -> Self {
                Complex::conj(self)
            }

            #[inline]
            fn is_nonzero(&self) -> bool {
                !self.is_zero()
            }

            #[inline]
            fn elem_cmp(&self, rhs: &Self) -> Option<Ordering> {
                self.norm_sqr().partial_cmp(&rhs.norm_sqr())
            }
        }

        impl Scalar for Complex<$t> {
            type Real = $t;

            #[inline]
            fn modulus(self) -> $t {
                self.norm()
            }

            #[inline]
            fn modulus_sqr(self) -> $t {
                self.norm_sqr()
            }

            #[inline]
            fn real_f64(self) -> f64 {
                self.re as f64
            }

            #[inline]
            fn from_f64(x: f64) -> Self {
                Complex::new(x as $t, 0.)
            }

            #[inline]
            fn powf(self, p: f32) -> Self {
                if p == 0. {
                    Self::one()
                } else {
                    Complex::powf(self, p as $t)
                }
            }

            unsafe fn gemm(
                m: usize,
                k: usize,
                n: usize,
                alpha: Self,
                a: *const Self,
                rsa: isize,
                csa: isize,
                b: *const Self,
                rsb: isize,
                csb: isize,
                beta: Self,
                c: *mut Self,
                rsc: isize,
                csc: isize,
            ) {
                // Complex<T> is repr(C), layout compatible with [T; 2]
                matrixmultiply::$gemm(
                    matrixmultiply::CGemmOption::Standard,
                    matrixmultiply::CGemmOption::Standard,
                    m,
                    k,
                    n,
                    [alpha.re, alpha.im],
                    a as *const [$t; 2],
                    rsa,
                    csa,
                    b as *const [$t; 2],
                    rsb,
                    csb,
                    [beta.re, beta.im],
                    c as *mut [$t; 2],
                    rsc,
                    csc,
                );
            }
        }
    };
}

impl_element_complex!(f32, C32, cgemm);
impl_element_complex!(f64, C64, zgemm);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complex_orders_by_modulus() {
        let a = Complex::new(3., 4.);
        let b = Complex::new(-5.5, 0.);
        assert_eq!(a.elem_cmp(&b), Some(Ordering::Less));
        assert_eq!(a.elem_cmp(&Complex::new(0., 5.)), Some(Ordering::Equal));
    }

    #[test]
    fn generic_gemm_column_major() {
        // a = [[1, 3], [2, 4]] stored column-major, b = identity
        let a = [1, 2, 3, 4];
        let b = [1, 0, 0, 1];
        let mut c = [7; 4];
        unsafe {
            i32::gemm(2, 2, 2, 1, a.as_ptr(), 1, 2, b.as_ptr(), 1, 2, 0, c.as_mut_ptr(), 1, 2);
        }
        assert_eq!(c, a);
    }

    #[test]
    fn integer_power_truncates() {
        assert_eq!(3i32.powf(2.), 9);
        assert_eq!(2u8.powf(0.5), 1);
        assert_eq!(7i16.powf(0.), 1);
    }

    #[test]
    fn type_names() {
        assert_eq!(<Complex<f32> as Element>::TYPE.as_str(), "c32");
        assert_eq!(f64::TYPE.to_string(), "f64");
        assert!(<Complex<f64> as Element>::IS_COMPLEX);
        assert!(!f32::IS_COMPLEX);
    }
}
