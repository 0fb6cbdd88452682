// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Matrix products.
//!
//! The arrays are handed to the gemm kernel of their element type as a
//! pointer plus row and column strides; see [`Scalar::gemm`].
use crate::error::{self, from_kind, ErrorKind, ShapeError};
use crate::numeric_util;
use crate::{Array, Scalar};

/// Operation applied to a matrix operand of [`Array::prod`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Trans {
    /// use the matrix as is
    NoTrans,
    /// use the transpose
    Trans,
    /// use the conjugate transpose
    ConjTrans,
}

impl<A> Array<A>
where
    A: Scalar,
{
    /// Matrix product `op(self) · op(rhs)`.
    ///
    /// Both operands must have at most two axes; a rank-1 array is a
    /// column vector. The result has shape `[m, n]` where `op(self)` is
    /// `m × k` and `op(rhs)` is `k × n`.
    ///
    /// **Errors** with `WrongRank` if an operand has more than two axes and
    /// `IncompatibleShape` if the inner dimensions differ.
    ///
    /// ```
    /// use mrarray::{arr2, Trans};
    ///
    /// let a = arr2(&[[1., 2.], [3., 4.]]);
    /// let b = arr2(&[[1., 0.], [1., 1.]]);
    /// assert_eq!(a.prod(&b, Trans::NoTrans, Trans::NoTrans).unwrap(),
    ///            arr2(&[[3., 2.], [7., 4.]]));
    /// assert_eq!(a.prod(&b, Trans::Trans, Trans::NoTrans).unwrap(),
    ///            arr2(&[[4., 3.], [6., 4.]]));
    /// ```
    pub fn prod(&self, rhs: &Array<A>, ta: Trans, tb: Trans) -> Result<Array<A>, ShapeError> {
        if self.ndim() > 2 || rhs.ndim() > 2 {
            return Err(from_kind(ErrorKind::WrongRank));
        }
        let lhs_conj;
        let lhs = if ta == Trans::ConjTrans {
            lhs_conj = self.conj();
            &lhs_conj
        } else {
            self
        };
        let rhs_conj;
        let rhs = if tb == Trans::ConjTrans {
            rhs_conj = rhs.conj();
            &rhs_conj
        } else {
            rhs
        };
        let (m, k, rsa, csa) = operand(lhs, ta);
        let (k2, n, rsb, csb) = operand(rhs, tb);
        if k != k2 {
            return Err(error::incompatible_shapes(self.shape(), rhs.shape()));
        }
        let mut c = Array::zeros([m, n]);
        unsafe {
            A::gemm(
                m,
                k,
                n,
                A::one(),
                lhs.as_ptr(),
                rsa,
                csa,
                rhs.as_ptr(),
                rsb,
                csb,
                A::zero(),
                c.as_mut_ptr(),
                1,
                m as isize,
            );
        }
        Ok(c)
    }

    /// Return the dot product `Σ self[i] · rhs[i]` over the elements in
    /// buffer order.
    ///
    /// **Panics** if the element counts differ.
    #[track_caller]
    pub fn dot(&self, rhs: &Array<A>) -> A {
        self.check_dot(rhs);
        numeric_util::unrolled_dot(self.as_slice(), rhs.as_slice(), false)
    }

    /// Return the conjugated dot product `Σ conj(self[i]) · rhs[i]`.
    ///
    /// **Panics** if the element counts differ.
    ///
    /// ```
    /// use mrarray::arr1;
    /// use num_complex::Complex;
    ///
    /// let a = arr1(&[Complex::new(0., 1.), Complex::new(2., 0.)]);
    /// assert_eq!(a.dotc(&a), Complex::new(5., 0.));
    /// assert_eq!(a.dot(&a), Complex::new(3., 0.));
    /// ```
    #[track_caller]
    pub fn dotc(&self, rhs: &Array<A>) -> A {
        self.check_dot(rhs);
        numeric_util::unrolled_dot(self.as_slice(), rhs.as_slice(), true)
    }

    #[track_caller]
    fn check_dot(&self, rhs: &Array<A>) {
        if self.len() != rhs.len() {
            error::shape_panic("take the dot product of", self.shape(), rhs.shape());
        }
    }
}

/// Rows, columns, row stride and column stride of `op(a)`.
fn operand<A: Scalar>(a: &Array<A>, t: Trans) -> (usize, usize, isize, isize) {
    let (h, w) = (a.len_of(0), a.len_of(1));
    match t {
        Trans::NoTrans => (h, w, 1, h as isize),
        Trans::Trans | Trans::ConjTrans => (w, h, h as isize, 1),
    }
}
