// Copyright 2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constructors for randomized arrays: `rand` integration for `mrarray`.
//!
//! See **[`RandomExt`]** for usage examples.
//!
//! ## Note
//!
//! `mrarray-rand` depends on [`rand`] and [`rand_distr`], which are
//! re-exported so that matching versions are easy to use:
//!
//! - [`mrarray_rand::rand`](rand) is a re-export of crate [`rand`].
//! - [`mrarray_rand::rand_distr`](rand_distr) is a re-export of crate
//!   [`rand_distr`].

use mrarray::{Array, Element, IntoDimension};
use num_complex::Complex;

use crate::rand::rngs::SmallRng;
use crate::rand::{rng, Rng, SeedableRng};
use crate::rand_distr::Distribution;

/// `rand`, re-exported for convenience and version-compatibility.
pub mod rand {
    pub use rand::*;
}

/// `rand-distr`, re-exported for convenience and version-compatibility.
pub mod rand_distr {
    pub use rand_distr::*;
}

/// Constructors for n-dimensional arrays with random elements.
///
/// This trait extends mrarray’s `Array` and can not be implemented
/// for other types.
///
/// The default RNG is a fast automatically seeded rng (currently
/// [`rand::rngs::SmallRng`], seeded from [`rand::rng`]).
///
/// Note that `SmallRng` is cheap to initialize and fast, but it may generate
/// low-quality random numbers, and reproducibility is not guaranteed. See its
/// documentation for information. You can select a different RNG with
/// [`.random_using()`](Self::random_using).
pub trait RandomExt<A>
where
    A: Element,
{
    /// Create an array with shape `shape` with elements drawn from
    /// `distribution` using the default RNG.
    ///
    /// ***Panics*** if `shape` is not a valid dimension vector.
    ///
    /// ```
    /// use mrarray::Array;
    /// use mrarray_rand::RandomExt;
    /// use mrarray_rand::rand_distr::Uniform;
    ///
    /// let a = Array::random([2, 5], Uniform::new(0., 10.).unwrap());
    /// assert!(a.iter().all(|&x| (0. ..10.).contains(&x)));
    /// ```
    fn random<Sh, IdS>(shape: Sh, distribution: IdS) -> Array<A>
    where
        IdS: Distribution<A>,
        Sh: IntoDimension;

    /// Create an array with shape `shape` with elements drawn from
    /// `distribution`, using a specific Rng `rng`.
    ///
    /// ***Panics*** if `shape` is not a valid dimension vector.
    ///
    /// ```
    /// use mrarray::Array;
    /// use mrarray_rand::RandomExt;
    /// use mrarray_rand::rand::SeedableRng;
    /// use mrarray_rand::rand::rngs::SmallRng;
    /// use mrarray_rand::rand_distr::Uniform;
    ///
    /// let seed = 42;
    /// let a = Array::random_using([2, 5], Uniform::new(0, 10).unwrap(),
    ///                             &mut SmallRng::seed_from_u64(seed));
    /// let b = Array::random_using([2, 5], Uniform::new(0, 10).unwrap(),
    ///                             &mut SmallRng::seed_from_u64(seed));
    /// assert_eq!(a, b);
    /// ```
    fn random_using<Sh, IdS, R>(shape: Sh, distribution: IdS, rng: &mut R) -> Array<A>
    where
        IdS: Distribution<A>,
        R: Rng + ?Sized,
        Sh: IntoDimension;

    /// Create an array with shape `shape` with elements drawn from the
    /// [`Unit`] distribution of the element type.
    ///
    /// ***Panics*** if `shape` is not a valid dimension vector.
    fn random_unit<Sh>(shape: Sh) -> Array<A>
    where
        Unit: Distribution<A>,
        Sh: IntoDimension;

    /// Overwrite every element with a draw from the [`Unit`] distribution,
    /// using the default RNG. Shape, resolutions and name are kept.
    ///
    /// ```
    /// use mrarray::Array;
    /// use mrarray_rand::RandomExt;
    ///
    /// let mut a = Array::<i32>::zeros([4, 4]);
    /// a.set_name("noise");
    /// a.randomize();
    /// assert!(a.iter().all(|x| (-12..=12).contains(x)));
    /// assert_eq!(a.name(), "noise");
    /// ```
    fn randomize(&mut self)
    where
        Unit: Distribution<A>;

    /// Overwrite every element with a draw from the [`Unit`] distribution,
    /// using a specific Rng `rng`.
    fn randomize_using<R>(&mut self, rng: &mut R)
    where
        Unit: Distribution<A>,
        R: Rng + ?Sized;
}

impl<A> RandomExt<A> for Array<A>
where
    A: Element,
{
    fn random<Sh, IdS>(shape: Sh, dist: IdS) -> Array<A>
    where
        IdS: Distribution<A>,
        Sh: IntoDimension,
    {
        Self::random_using(shape, dist, &mut get_rng())
    }

    fn random_using<Sh, IdS, R>(shape: Sh, dist: IdS, rng: &mut R) -> Array<A>
    where
        IdS: Distribution<A>,
        R: Rng + ?Sized,
        Sh: IntoDimension,
    {
        Self::from_shape_fn(shape, |_| dist.sample(rng))
    }

    fn random_unit<Sh>(shape: Sh) -> Array<A>
    where
        Unit: Distribution<A>,
        Sh: IntoDimension,
    {
        Self::random(shape, Unit)
    }

    fn randomize(&mut self)
    where
        Unit: Distribution<A>,
    {
        self.randomize_using(&mut get_rng())
    }

    fn randomize_using<R>(&mut self, rng: &mut R)
    where
        Unit: Distribution<A>,
        R: Rng + ?Sized,
    {
        self.map_inplace(|x| *x = <Unit as Distribution<A>>::sample(&Unit, rng));
    }
}

/// The default random distribution of every element type.
///
/// - `f32`, `f64`: uniform in `[-1, 1)`
/// - `Complex<f32>`, `Complex<f64>`: real and imaginary parts drawn
///   independently, uniform in `[-1, 1)`
/// - signed integers: uniform in `[-12, 12]`
/// - unsigned integers: uniform in `[0, 12]`
/// - `bool`: a fair coin
///
/// ```
/// use mrarray_rand::Unit;
/// use mrarray_rand::rand::rng;
/// use mrarray_rand::rand_distr::Distribution;
///
/// let x: f64 = Unit.sample(&mut rng());
/// assert!((-1. ..1.).contains(&x));
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct Unit;

macro_rules! unit_float {
    ($($t:ty)*) => {
        $(
        impl Distribution<$t> for Unit {
            fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> $t {
                rng.random_range(-1. ..1.)
            }
        }

        impl Distribution<Complex<$t>> for Unit {
            fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Complex<$t> {
                let re = <Unit as Distribution<$t>>::sample(self, rng);
                let im = <Unit as Distribution<$t>>::sample(self, rng);
                Complex::new(re, im)
            }
        }
        )*
    };
}

macro_rules! unit_int {
    ($lo:expr; $($t:ty)*) => {
        $(
        impl Distribution<$t> for Unit {
            fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> $t {
                let lo: $t = $lo;
                rng.random_range(lo..=12)
            }
        }
        )*
    };
}

unit_float!(f32 f64);
unit_int!(-12; i8 i16 i32 i64);
unit_int!(0; u8 u16 u32 u64);

// pointer-sized integers are not `SampleUniform`
impl Distribution<isize> for Unit {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> isize {
        <Unit as Distribution<i64>>::sample(self, rng) as isize
    }
}

impl Distribution<usize> for Unit {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        <Unit as Distribution<u64>>::sample(self, rng) as usize
    }
}

impl Distribution<bool> for Unit {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        rng.random()
    }
}

fn get_rng() -> SmallRng {
    SmallRng::from_rng(&mut rng())
}
