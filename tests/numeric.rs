use mrarray::prelude::*;
use num_complex::Complex;

#[test]
fn test_sum_mean() {
    let a = arr2(&[[1., 2.], [3., 4.]]);
    assert_eq!(a.sum(), 10.);
    assert_eq!(a.mean(), 2.5);

    let b = Array::from_vec((1..=100).collect::<Vec<i64>>());
    assert_eq!(b.sum(), 5050);
    // integer mean truncates
    assert_eq!(arr1(&[1, 2]).mean(), 1);

    let c = arr1(&[Complex::new(1., 2.), Complex::new(3., -4.)]);
    assert_eq!(c.sum(), Complex::new(4., -2.));
    assert_eq!(c.mean(), Complex::new(2., -1.));
}

#[test]
fn test_sum_long() {
    // longer than the unrolled chunk
    let a = Array::<f64>::ones([7, 3, 5]);
    assert_eq!(a.sum(), 105.);
}

#[test]
fn test_min_max() {
    let a = arr2(&[[1., 7.], [-3., 4.]]);
    assert_eq!(a.max(), 7.);
    assert_eq!(a.min(), -3.);
    assert_eq!(a.maxabs(), 7.);
    assert_eq!(a.minabs(), 1.);

    let i = arr1(&[-9i8, 4, 2]);
    assert_eq!(i.max(), 4);
    assert_eq!(i.min(), -9);
    assert_eq!(i.maxabs(), 9);
}

#[test]
fn test_min_max_nan() {
    let a = arr1(&[f32::NAN, 2., -1., f32::NAN]);
    assert_eq!(a.max(), 2.);
    assert_eq!(a.min(), -1.);
    assert!(arr1(&[f32::NAN]).max().is_nan());
}

#[test]
fn test_complex_extremes() {
    let a = arr1(&[Complex::new(3., 4.), Complex::new(-6., 0.), Complex::new(0., 1.)]);
    assert_eq!(a.max(), Complex::new(-6., 0.));
    assert_eq!(a.min(), Complex::new(0., 1.));
    assert_eq!(a.maxabs(), 6.);
    assert_eq!(a.abs(), arr1(&[5., 6., 1.]));
}

#[test]
fn test_norm() {
    assert_eq!(arr1(&[3., -4.]).norm(), 5.);
    assert_eq!(arr1(&[Complex::new(3f32, 4.), Complex::new(0., 0.)]).norm(), 5.);
    assert_eq!(Array::<i32>::ones([3, 3]).norm(), 3);
}

#[test]
fn test_conj() {
    let a = arr1(&[Complex::new(1., 2.), Complex::new(0., -1.)]);
    assert_eq!(a.conj(), arr1(&[Complex::new(1., -2.), Complex::new(0., 1.)]));
    let r = arr1(&[1., -2.]);
    assert_eq!(r.conj(), r);
}

#[test]
fn test_pow() {
    let a = arr1(&[0., 2., 3.]);
    assert_eq!(a.pow(2.), arr1(&[0., 4., 9.]));
    assert_eq!(a.pow(0.), arr1(&[1., 1., 1.]));
    let r = arr1(&[4f64, 9.]).pow(0.5);
    assert!((r[0] - 2.).abs() < 1e-12 && (r[1] - 3.).abs() < 1e-12);
    assert_eq!(arr1(&[2i32, 3]).pow(2.), arr1(&[4, 9]));
    assert_eq!(
        arr1(&[Complex::new(0f64, 0.)]).pow(0.),
        arr1(&[Complex::new(1., 0.)])
    );
}
