#![cfg(feature = "rayon")]

use mrarray::parallel::prelude::*;
use mrarray::prelude::*;

const M: usize = 1024;
const N: usize = 100;

#[test]
fn test_par_iter() {
    let a = Array::from_shape_fn([M, N], |ix| ix[1] as f64);
    let s: f64 = a.par_iter().sum();
    assert_eq!(s, a.sum());
    assert_eq!(a.par_iter().len(), M * N);
}

#[test]
fn test_par_map_inplace() {
    let mut a = Array::<f64>::zeros([M, N]);
    a.par_map_inplace(|x| *x += 2.);
    a.par_mapv_inplace(|x| x * x);
    assert!(a.iter().all(|&x| x == 4.));
}

#[test]
fn test_par_mapv() {
    let mut a = Array::from_shape_fn([M, 3], |ix| ix[0] as i64);
    a.set_name("rows");
    let b = a.par_mapv(|x| x % 2 == 0);
    assert_eq!(b.shape(), a.shape());
    assert_eq!(b.count_true(), 3 * M / 2);
    assert_eq!(b.name(), "rows");
    assert_eq!(a.par_mapv(|x| x * 3), &a * 3);
}

#[test]
fn test_par_zip_mut_with() {
    let mut a = Array::<f32>::ones([M, N]);
    let b = Array::from_shape_fn([M, N], |ix| ix[0] as f32);
    a.par_zip_mut_with(&b, |x, y| *x += *y);
    assert_eq!(a, &b + 1.);
}

#[test]
#[should_panic(expected = "could not zip")]
fn test_par_zip_shape_mismatch() {
    let mut a = Array::<f32>::ones([M, N]);
    let b = Array::<f32>::ones([N, M]);
    a.par_zip_mut_with(&b, |x, y| *x += *y);
}
