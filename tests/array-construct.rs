use defmac::defmac;
use mrarray::prelude::*;
use num_complex::Complex;

#[test]
fn test_from_shape_fn() {
    let step = 3.1;
    let h = Array::from_shape_fn([5, 5], |ix| {
        f64::sin(ix[0] as f64 / step) * f64::cos(ix[1] as f64 / step)
    });
    assert_eq!(h.shape(), &[5, 5]);
    assert_eq!(h[[0, 0]], 0.);
    assert_eq!(h[[3, 2]], f64::sin(3. / step) * f64::cos(2. / step));
}

#[test]
fn test_from_shape_fn_visits_buffer_order() {
    let mut seen = Vec::new();
    let a = Array::from_shape_fn([2, 3], |ix| {
        seen.push(ix.to_vec());
        seen.len() - 1
    });
    assert_eq!(a.as_slice(), &[0, 1, 2, 3, 4, 5]);
    assert_eq!(seen[1], vec![1, 0]);
    assert_eq!(seen[2], vec![0, 1]);
}

#[test]
fn zeros() {
    let a = Array::<f32>::zeros([3, 4, 2]);
    assert_eq!(a.len(), 24);
    assert!(a.iter().all(|&x| x == 0.));
    assert_eq!(a.res(), &[1., 1., 1.]);
    assert_eq!(a.name(), "");

    let c = Array::<Complex<f64>>::zeros(7);
    assert!(c.iter().all(|z| *z == Complex::new(0., 0.)));

    let b = Array::<bool>::zeros([2, 2]);
    assert!(!b.any());
}

#[test]
fn from_extents_trims_trailing_singletons() {
    let a = Array::<f64>::from_extents(&[2, 3, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]);
    assert_eq!(a.shape(), &[2, 3]);
    assert!(a.is_2d());
    assert_eq!(a.len(), 6);

    assert_eq!(Array::<u8>::from_extents(&[]).shape(), &[1]);
    assert_eq!(Array::<u8>::from_extents(&[1, 1, 1]).shape(), &[1]);
    assert_eq!(Array::<u8>::from_extents(&[1, 4, 1]).shape(), &[1, 4]);
}

#[test]
fn positional_constructors() {
    defmac!(shape a => Vec::from(a.shape()));
    assert_eq!(shape!(Array::<f32>::new1(5)), vec![5]);
    assert_eq!(shape!(Array::<f32>::new2(5, 4)), vec![5, 4]);
    assert_eq!(shape!(Array::<f32>::new2(5, 1)), vec![5]);
    assert_eq!(shape!(Array::<f32>::new3(2, 3, 4)), vec![2, 3, 4]);
    assert_eq!(shape!(Array::<f32>::new4(2, 1, 1, 3)), vec![2, 1, 1, 3]);
    assert_eq!(shape!(Array::<f32>::square(3)), vec![3, 3]);
}

#[test]
#[should_panic(expected = "at most 16")]
fn from_extents_too_many() {
    let _ = Array::<f32>::from_extents(&[1; 17]);
}

#[test]
#[should_panic(expected = "invalid shape")]
fn zero_extent_panics() {
    let _ = Array::<f32>::zeros([3, 0, 2]);
}

#[test]
#[should_panic(expected = "invalid shape")]
fn empty_vec_panics() {
    let _ = Array::<f32>::from_vec(vec![]);
}

#[test]
fn from_shape_vec() {
    let a = Array::from_shape_vec([2, 3], vec![1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(a[[1, 0]], 2);
    assert_eq!(a[[0, 1]], 3);
    assert_eq!(a[[1, 2]], 6);

    let err = Array::from_shape_vec([2, 2], vec![1, 2, 3]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IncompatibleShape);
    let err = Array::<i32>::from_shape_vec(Vec::<Ix>::new(), vec![]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EmptyShape);
    let err = Array::<i32>::from_shape_vec([1; 17], vec![1]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TooManyAxes);
}

#[test]
fn with_resolution() {
    let a = Array::<f64>::with_resolution([4, 3], &[0.5, 2.]).unwrap();
    assert_eq!(a.res(), &[0.5, 2.]);
    assert_eq!(a.res_of(5), 1.);
    let err = Array::<f64>::with_resolution([4, 3], &[0.5]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ResolutionMismatch);
}

#[test]
fn arr2_is_column_major() {
    let a = arr2(&[[1, 2, 3], [4, 5, 6]]);
    assert_eq!(a.shape(), &[2, 3]);
    assert_eq!(a.as_slice(), &[1, 4, 2, 5, 3, 6]);
    assert_eq!(a[[1, 2]], 6);
    assert_eq!(arr2(&[[1, 2, 3]]).shape(), &[1, 3]);
}

#[test]
fn ones_and_eye() {
    let a = Array::<i64>::ones([2, 2, 2]);
    assert_eq!(a.sum(), 8);
    let eye = Array::<Complex<f32>>::eye(2);
    assert_eq!(eye[[0, 0]], Complex::new(1., 0.));
    assert_eq!(eye[[1, 0]], Complex::new(0., 0.));
    assert_eq!(eye[[1, 1]], Complex::new(1., 0.));
}

#[test]
fn default_and_collect() {
    let a = Array::<f32>::default();
    assert_eq!(a.shape(), &[1]);
    assert_eq!(a[0], 0.);

    let b: Array<i32> = (1..=4).collect();
    assert_eq!(b, arr1(&[1, 2, 3, 4]));
    let c = Array::from(vec![1u8, 2]);
    assert_eq!(c.shape(), &[2]);
}

#[test]
fn storage_is_aligned() {
    for n in 1..40 {
        let a = Array::<u8>::zeros(n);
        assert_eq!(a.as_ptr() as usize % mrarray::ALIGNMENT, 0);
        let c = Array::<Complex<f64>>::zeros([n, 3]);
        assert_eq!(c.as_ptr() as usize % mrarray::ALIGNMENT, 0);
    }
}

#[test]
fn clone_is_deep() {
    let mut a = arr1(&[1., 2., 3.]);
    a.set_name("a");
    let mut b = a.clone();
    b[0] = 10.;
    assert_eq!(a[0], 1.);
    assert_eq!(b.name(), "a");
    assert_ne!(a.as_ptr(), b.as_ptr());

    let mut c = Array::<f64>::zeros([5, 5]);
    c.clone_from(&a);
    assert_eq!(c, a);
}
