// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::cmp::Ordering;

use crate::numeric_util;
use crate::{Array, Element, Scalar};

impl<A> Array<A>
where
    A: Scalar,
{
    /// Return the sum of all elements in the array.
    ///
    /// ```
    /// use mrarray::arr2;
    ///
    /// let a = arr2(&[[1., 2.],
    ///                [3., 4.]]);
    /// assert_eq!(a.sum(), 10.);
    /// ```
    pub fn sum(&self) -> A {
        numeric_util::unrolled_fold(self.as_slice(), A::zero, |a, b| a + b)
    }

    /// Return the arithmetic mean of all elements.
    ///
    /// For integer elements the division truncates.
    pub fn mean(&self) -> A {
        self.sum() / A::from_f64(self.len() as f64)
    }

    /// Return the largest element.
    ///
    /// Complex elements compare by modulus. NaN elements are skipped
    /// unless every element is NaN.
    pub fn max(&self) -> A {
        self.extreme(Ordering::Greater)
    }

    /// Return the smallest element, see [`max`](Array::max).
    pub fn min(&self) -> A {
        self.extreme(Ordering::Less)
    }

    /// Return the largest absolute value (modulus).
    ///
    /// ```
    /// use mrarray::arr1;
    /// use num_complex::Complex;
    ///
    /// let a = arr1(&[Complex::new(3., 4.), Complex::new(-1., 0.)]);
    /// assert_eq!(a.maxabs(), 5.);
    /// assert_eq!(a.minabs(), 1.);
    /// ```
    pub fn maxabs(&self) -> A::Real {
        self.abs().max()
    }

    /// Return the smallest absolute value (modulus).
    pub fn minabs(&self) -> A::Real {
        self.abs().min()
    }

    /// Return the elementwise absolute value (modulus).
    pub fn abs(&self) -> Array<A::Real> {
        self.mapv(A::modulus)
    }

    /// Return the Frobenius norm, the square root of the sum of squared
    /// moduli.
    ///
    /// ```
    /// use mrarray::arr1;
    ///
    /// assert_eq!(arr1(&[3., -4.]).norm(), 5.);
    /// ```
    pub fn norm(&self) -> A::Real {
        let sumsq = self.iter().fold(0., |acc, &x| acc + x.modulus_sqr().real_f64());
        <A::Real as Scalar>::from_f64(sumsq.sqrt())
    }

    /// Return the elementwise complex conjugate; a copy for real element
    /// types.
    pub fn conj(&self) -> Array<A> {
        self.map(Element::conj)
    }

    /// Raise every element to the power `p`.
    ///
    /// `p == 0` yields one everywhere, including for zero elements.
    ///
    /// ```
    /// use mrarray::arr1;
    ///
    /// let a = arr1(&[0., 2., 3.]);
    /// assert_eq!(a.pow(2.), arr1(&[0., 4., 9.]));
    /// assert_eq!(a.pow(0.), arr1(&[1., 1., 1.]));
    /// ```
    pub fn pow(&self, p: f32) -> Array<A> {
        if p == 0. {
            self.mapv(|_| A::one())
        } else {
            self.mapv(|x| x.powf(p))
        }
    }

    fn extreme(&self, wanted: Ordering) -> A {
        let mut best = self.as_slice()[0];
        for &x in self.iter() {
            let replace = match x.elem_cmp(&best) {
                Some(ord) => ord == wanted,
                // the current best is NaN
                None => x.elem_cmp(&x).is_some(),
            };
            if replace {
                best = x;
            }
        }
        best
    }
}
