// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{Array, Element};

impl<A> Array<A>
where
    A: Element,
{
    /// A test for equality that uses the elementwise absolute difference to compute the
    /// approximate equality of two arrays.
    ///
    /// **Requires crate feature `"approx"`**
    pub fn abs_diff_eq(&self, other: &Array<A>, epsilon: A::Epsilon) -> bool
    where
        A: AbsDiffEq,
        A::Epsilon: Clone,
    {
        <Self as AbsDiffEq>::abs_diff_eq(self, other, epsilon)
    }

    /// A test for equality that uses an elementwise relative comparison if the values are far
    /// apart; and the absolute difference otherwise.
    ///
    /// **Requires crate feature `"approx"`**
    pub fn relative_eq(&self, other: &Array<A>, epsilon: A::Epsilon, max_relative: A::Epsilon) -> bool
    where
        A: RelativeEq,
        A::Epsilon: Clone,
    {
        <Self as RelativeEq>::relative_eq(self, other, epsilon, max_relative)
    }
}

/// **Requires crate feature `"approx"`.**
///
/// Arrays of different shapes are never equal.
impl<A> AbsDiffEq for Array<A>
where
    A: Element + AbsDiffEq,
    A::Epsilon: Clone,
{
    type Epsilon = A::Epsilon;

    fn default_epsilon() -> A::Epsilon {
        A::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Array<A>, epsilon: A::Epsilon) -> bool {
        if self.shape() != other.shape() {
            return false;
        }

        self.iter()
            .zip(other.iter())
            .all(move |(a, b)| A::abs_diff_eq(a, b, epsilon.clone()))
    }
}

/// **Requires crate feature `"approx"`.**
impl<A> RelativeEq for Array<A>
where
    A: Element + RelativeEq,
    A::Epsilon: Clone,
{
    fn default_max_relative() -> A::Epsilon {
        A::default_max_relative()
    }

    fn relative_eq(&self, other: &Array<A>, epsilon: A::Epsilon, max_relative: A::Epsilon) -> bool {
        if self.shape() != other.shape() {
            return false;
        }

        self.iter()
            .zip(other.iter())
            .all(move |(a, b)| A::relative_eq(a, b, epsilon.clone(), max_relative.clone()))
    }
}

/// **Requires crate feature `"approx"`.**
impl<A> UlpsEq for Array<A>
where
    A: Element + UlpsEq,
    A::Epsilon: Clone,
{
    fn default_max_ulps() -> u32 {
        A::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Array<A>, epsilon: A::Epsilon, max_ulps: u32) -> bool {
        if self.shape() != other.shape() {
            return false;
        }

        self.iter()
            .zip(other.iter())
            .all(move |(a, b)| A::ulps_eq(a, b, epsilon.clone(), max_ulps))
    }
}

#[cfg(test)]
mod tests {
    use crate::{arr1, arr2, Array};
    use approx::{
        assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq, assert_relative_ne, assert_ulps_eq,
        assert_ulps_ne,
    };

    #[test]
    fn abs_diff_eq() {
        let a: Array<f32> = arr2(&[[0., 2.], [-0.000010001, 100000000.]]);
        let mut b: Array<f32> = arr2(&[[0., 1.], [-0.000010002, 100000001.]]);
        assert_abs_diff_ne!(a, b);
        b[[0, 1]] = 2.;
        assert_abs_diff_eq!(a, b);

        // Check epsilon.
        assert_abs_diff_eq!(arr1(&[0.0f32]), arr1(&[1e-40f32]), epsilon = 1e-40f32);
        assert_abs_diff_ne!(arr1(&[0.0f32]), arr1(&[1e-40f32]), epsilon = 1e-41f32);

        // Make sure we can compare different shapes without failure.
        let c = arr2(&[[1., 2.]]);
        assert_abs_diff_ne!(a, c);
    }

    #[test]
    fn relative_eq() {
        let a: Array<f32> = arr2(&[[1., 2.], [-0.000010001, 100000000.]]);
        let mut b: Array<f32> = arr2(&[[1., 1.], [-0.000010002, 100000001.]]);
        assert_relative_ne!(a, b);
        b[[0, 1]] = 2.;
        assert_relative_eq!(a, b);

        let c = arr2(&[[1., 2.]]);
        assert_relative_ne!(a, c);
    }

    #[test]
    fn ulps_eq() {
        let a: Array<f32> = arr2(&[[1., 2.], [-0.000010001, 100000000.]]);
        let mut b: Array<f32> = arr2(&[[1., 1.], [-0.000010002, 100000001.]]);
        assert_ulps_ne!(a, b);
        b[[0, 1]] = 2.;
        assert_ulps_eq!(a, b);

        let c = arr2(&[[1., 2.]]);
        assert_ulps_ne!(a, c);
    }
}
