use itertools::iproduct;
use mrarray::prelude::*;
use num_complex::Complex;

fn range_mat(m: Ix, n: Ix) -> Array<f32> {
    Array::from_shape_vec([m, n], (0..m * n).map(|x| x as f32).collect()).unwrap()
}

fn reference_prod<A: Scalar>(a: &Array<A>, b: &Array<A>) -> Array<A> {
    let (m, k, n) = (a.len_of(0), a.len_of(1), b.len_of(1));
    let mut c = Array::<A>::zeros([m, n]);
    for (i, j) in iproduct!(0..m, 0..n) {
        let mut acc = A::zero();
        for l in 0..k {
            acc = acc + a[[i, l]] * b[[l, j]];
        }
        c[[i, j]] = acc;
    }
    c
}

fn all_close(a: &Array<f32>, b: &Array<f32>, lim: f32) -> bool {
    a.shape() == b.shape() && a.iter().zip(b.iter()).all(|(x, y)| (*x - *y).abs() < lim)
}

#[test]
fn mat_mul() {
    let a = arr2(&[[1., 2.], [3., 4.]]);
    let b = arr2(&[[1., 0.], [1., 1.]]);
    let nt = Trans::NoTrans;
    assert_eq!(a.prod(&b, nt, nt).unwrap(), arr2(&[[3., 2.], [7., 4.]]));
    assert_eq!(b.prod(&a, nt, nt).unwrap(), arr2(&[[1., 2.], [4., 6.]]));
    assert_eq!(a.prod(&b, Trans::Trans, nt).unwrap(), arr2(&[[4., 3.], [6., 4.]]));
    assert_eq!(
        a.prod(&b, nt, Trans::Trans).unwrap(),
        a.prod(&b.transpose(), nt, nt).unwrap()
    );
}

#[test]
fn mat_mul_shapes() {
    for (m, k, n) in iproduct!(1..6, 1..6, 1..6) {
        let a = range_mat(m, k);
        let b = range_mat(k, n);
        let c = a.prod(&b, Trans::NoTrans, Trans::NoTrans).unwrap();
        assert_eq!(c.shape(), &[m, n]);
        assert!(all_close(&c, &reference_prod(&a, &b), 1e-3));

        let at = a.transpose();
        let c2 = at.prod(&b, Trans::Trans, Trans::NoTrans).unwrap();
        assert!(all_close(&c2, &c, 1e-3));
    }
}

#[test]
fn mat_mul_integer() {
    let a = Array::from_shape_vec([2, 3], vec![1i64, 2, 3, 4, 5, 6]).unwrap();
    let b = Array::from_shape_vec([3, 2], vec![1i64, 0, -1, 2, 0, 1]).unwrap();
    let c = a.prod(&b, Trans::NoTrans, Trans::NoTrans).unwrap();
    assert_eq!(c, reference_prod(&a, &b));
}

#[test]
fn mat_vec() {
    let a = range_mat(3, 4);
    let x = Array::from_vec(vec![1f32, 0., 0., 1.]);
    let y = a.prod(&x, Trans::NoTrans, Trans::NoTrans).unwrap();
    assert_eq!(y.shape(), &[3, 1]);
    assert_eq!(y.as_slice(), &[9., 11., 13.]);
    // xᵀ x
    let s = x.prod(&x, Trans::Trans, Trans::NoTrans).unwrap();
    assert_eq!(s.shape(), &[1, 1]);
    assert_eq!(s[0], 2.);
}

#[test]
fn mat_mul_errors() {
    let a = range_mat(2, 3);
    let nt = Trans::NoTrans;
    let err = a.prod(&a, nt, nt).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IncompatibleShape);
    assert!(a.prod(&a, nt, Trans::Trans).is_ok());
    let cube = Array::<f32>::zeros([2, 2, 2]);
    assert_eq!(cube.prod(&a, nt, nt).unwrap_err().kind(), ErrorKind::WrongRank);
}

#[test]
fn complex_mat_mul() {
    let i = Complex::new(0f64, 1.);
    let one = Complex::new(1f64, 0.);
    let a = arr2(&[[one, i], [i, one]]);
    let c = a.prod(&a, Trans::NoTrans, Trans::NoTrans).unwrap();
    assert_eq!(c, reference_prod(&a, &a));
    assert_eq!(c[[0, 0]], Complex::new(0., 0.));
    assert_eq!(c[[0, 1]], Complex::new(0., 2.));

    // aᴴ a is hermitian with real diagonal
    let h = a.prod(&a, Trans::ConjTrans, Trans::NoTrans).unwrap();
    assert_eq!(h, reference_prod(&!&a, &a));
    assert_eq!(h[[0, 0]], Complex::new(2., 0.));
    assert_eq!(h[[1, 0]], h[[0, 1]].conj());
}

#[test]
fn transposes() {
    let a = arr2(&[[1, 2, 3], [4, 5, 6]]);
    let t = a.transpose();
    assert_eq!(t, arr2(&[[1, 4], [2, 5], [3, 6]]));
    assert_eq!(t.transpose(), a);

    let mut r = Array::<f32>::with_resolution([2, 3], &[0.5, 2.]).unwrap();
    r.set_name("r");
    let rt = r.transpose();
    assert_eq!(rt.res(), &[2., 0.5]);
    assert_eq!(rt.name(), "r");

    let c = arr2(&[[Complex::new(1., 2.), Complex::new(3., -1.)]]);
    let h = c.ctranspose();
    assert_eq!(h, arr2(&[[Complex::new(1., -2.)], [Complex::new(3., 1.)]]));
    assert_eq!(!!c.clone(), c);
    assert_eq!(!&c, h);
    assert_eq!(c.transpose()[1], Complex::new(3., -1.));
}

#[test]
#[should_panic(expected = "transpose needs an array with two axes")]
fn transpose_of_vector() {
    let _ = arr1(&[1., 2.]).transpose();
}

#[test]
fn dot_products() {
    let a = arr1(&[1., 2., 3.]);
    let b = arr2(&[[4.], [5.], [6.]]);
    assert_eq!(a.dot(&b), 32.);

    let long = Array::<i32>::ones([11, 3]);
    assert_eq!(long.dot(&long), 33);

    let z = arr1(&[Complex::new(0., 1.), Complex::new(2., 0.)]);
    assert_eq!(z.dotc(&z), Complex::new(5., 0.));
    assert_eq!(z.dot(&z), Complex::new(3., 0.));
    assert_eq!(a.dotc(&a), a.dot(&a));
}

#[test]
#[should_panic(expected = "could not take the dot product of")]
fn dot_length_mismatch() {
    let _ = arr1(&[1., 2.]).dot(&arr1(&[1., 2., 3.]));
}
