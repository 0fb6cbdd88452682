use mrarray::prelude::*;
use num_complex::Complex;

#[test]
fn relational() {
    let a = arr1(&[1, 5, 3, 7]);
    let b = arr1(&[2, 5, 1, 9]);
    assert_eq!(a.elem_eq(&b), arr1(&[false, true, false, false]));
    assert_eq!(a.elem_ne(&b), arr1(&[true, false, true, true]));
    assert_eq!(a.elem_lt(&b), arr1(&[true, false, false, true]));
    assert_eq!(a.elem_le(&b), arr1(&[true, true, false, true]));
    assert_eq!(a.elem_gt(&b), arr1(&[false, false, true, false]));
    assert_eq!(a.elem_ge(&b), arr1(&[false, true, true, false]));
}

#[test]
fn relational_scalar() {
    let a = arr2(&[[1., 2.], [3., 4.]]);
    let m = a.elem_gt_scalar(2.);
    assert_eq!(m.shape(), &[2, 2]);
    assert_eq!(m.count_true(), 2);
    assert_eq!(m, arr2(&[[false, false], [true, true]]));
    assert!(a.elem_ge_scalar(1.).all());
    assert!(!a.elem_eq_scalar(5.).any());
    assert_eq!(a.elem_ne_scalar(2.).count_true(), 3);
    assert_eq!(a.elem_le_scalar(3.).count_true(), 3);
    assert_eq!(a.elem_lt_scalar(3.).count_true(), 2);
}

#[test]
fn relational_scalar_lhs() {
    let a = arr1(&[1, 5, 3, 7]);
    // 3 < x
    assert_eq!(a.scalar_lt(3), arr1(&[false, true, false, true]));
    assert_eq!(a.scalar_le(3), arr1(&[false, true, true, true]));
    assert_eq!(a.scalar_gt(3), arr1(&[true, false, false, false]));
    assert_eq!(a.scalar_ge(3), arr1(&[true, false, true, false]));
    assert_eq!(a.scalar_eq(5), a.elem_eq_scalar(5));
    assert_eq!(a.scalar_ne(5).count_true(), 3);

    let z = arr1(&[Complex::new(3., 4.), Complex::new(0., 1.)]);
    assert_eq!(z.scalar_lt(Complex::new(2., 0.)), arr1(&[true, false]));
}

#[test]
fn nan_compares_false() {
    let a = arr1(&[f64::NAN, 1.]);
    let b = arr1(&[f64::NAN, 1.]);
    assert_eq!(a.elem_eq(&b), arr1(&[false, true]));
    assert_eq!(a.elem_lt(&b), arr1(&[false, false]));
    assert_eq!(a.elem_ge(&b), arr1(&[false, true]));
    assert_eq!(a.elem_ne(&b), arr1(&[true, false]));
}

#[test]
fn complex_orders_by_modulus() {
    let a = arr1(&[Complex::new(3., 4.), Complex::new(1., 0.)]);
    let b = arr1(&[Complex::new(0., 5.), Complex::new(0., -2.)]);
    assert_eq!(a.elem_le(&b), arr1(&[true, true]));
    assert_eq!(a.elem_lt(&b), arr1(&[false, true]));
    assert_eq!(a.elem_eq(&b), arr1(&[false, false]));
}

#[test]
fn logical() {
    let a = arr1(&[0., 1., 2., 0.]);
    let b = arr1(&[true, true, false, false]);
    assert_eq!(a.and(&b), arr1(&[false, true, false, false]));
    assert_eq!(a.or(&b), arr1(&[true, true, true, false]));
    let c = arr1(&[Complex::new(0., 0.), Complex::new(0., 1.), Complex::new(0., 0.), Complex::new(0., 0.)]);
    assert_eq!(c.or(&a), arr1(&[false, true, true, false]));
}

#[test]
fn mask_keeps_metadata() {
    let mut a = Array::<i32>::with_resolution([2, 3], &[0.5, 0.5]).unwrap();
    a.set_name("mask");
    let m = a.elem_eq_scalar(0);
    assert!(m.all());
    assert_eq!(m.res(), &[0.5, 0.5]);
    assert_eq!(m.name(), "mask");
}

#[test]
#[should_panic(expected = "could not compare")]
fn shape_mismatch() {
    let a = Array::<f32>::zeros([2, 3]);
    let b = Array::<f32>::zeros([6]);
    let _ = a.elem_lt(&b);
}

#[test]
#[should_panic(expected = "could not compare")]
fn logical_shape_mismatch() {
    let a = Array::<f32>::zeros([2, 3]);
    let b = Array::<bool>::zeros([3, 2]);
    let _ = a.and(&b);
}
