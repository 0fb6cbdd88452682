use mrarray::{arr1, arr2, Array, Dim};
use num_complex::Complex;

#[test]
fn serial_many_dim_serde() {
    {
        let a = arr1::<f32>(&[2.72, 1., 2.]);
        let serial = serde_json::to_string(&a).unwrap();
        println!("Serde encode {:?} => {:?}", a, serial);
        let res = serde_json::from_str::<Array<f32>>(&serial);
        println!("{:?}", res);
        assert_eq!(a, res.unwrap());
    }

    {
        let a = arr2(&[[3., 1., 2.2], [3.1, 4., 7.]]);
        let serial = serde_json::to_string(&a).unwrap();
        println!("Serde encode {:?} => {:?}", a, serial);
        let res = serde_json::from_str::<Array<f32>>(&serial);
        println!("{:?}", res);
        assert_eq!(a, res.unwrap());
        let text = r##"{"v":1,"type":"f32","dim":[2,3],"res":[1,1],"name":"","data":[3,3.1,1,4,2.2,7]}"##;
        let b = serde_json::from_str::<Array<f32>>(text);
        assert_eq!(a, b.unwrap());
    }

    {
        let mut a = Array::from_shape_fn([2, 2, 2, 4], |ix| (ix[0] + 2 * ix[1] + 4 * ix[2] + 8 * ix[3]) as f64);
        a.set_resolution(&[0.5, 0.5, 1., 2.5]).unwrap();
        a.set_name("slab");
        let serial = serde_json::to_string(&a).unwrap();
        println!("Encode {:?} => {:?}", a, serial);
        let res = serde_json::from_str::<Array<f64>>(&serial).unwrap();
        assert_eq!(a, res);
        assert_eq!(res.res(), &[0.5, 0.5, 1., 2.5]);
        assert_eq!(res.name(), "slab");
    }
}

#[test]
fn serial_complex_serde() {
    let a = arr1(&[Complex::new(1.0f64, -1.), Complex::new(0., 2.5)]);
    let serial = serde_json::to_string(&a).unwrap();
    assert!(serial.contains(r#""type":"c64""#));
    let res = serde_json::from_str::<Array<Complex<f64>>>(&serial);
    assert_eq!(a, res.unwrap());
}

#[test]
fn serial_missing_metadata_defaults() {
    let text = r##"{"v":1,"type":"i32","dim":[3],"data":[1,2,3]}"##;
    let a = serde_json::from_str::<Array<i32>>(text).unwrap();
    assert_eq!(a, arr1(&[1, 2, 3]));
    assert_eq!(a.res(), &[1.]);
    assert_eq!(a.name(), "");
}

#[test]
fn serial_wrong_count_serde() {
    // one element too few
    let text = r##"{"v":1,"type":"f32","dim":[2,3],"data":[3,1,2.2,3.1,4]}"##;
    let arr = serde_json::from_str::<Array<f32>>(text);
    println!("{:?}", arr);
    assert!(arr.is_err());

    // future version
    let text = r##"{"v":200,"type":"f32","dim":[2,3],"data":[3,1,2.2,3.1,4,7]}"##;
    let arr = serde_json::from_str::<Array<f32>>(text);
    println!("{:?}", arr);
    assert!(arr.is_err());

    // resolution of the wrong length
    let text = r##"{"v":1,"type":"f32","dim":[2,3],"res":[1],"data":[3,1,2.2,3.1,4,7]}"##;
    assert!(serde_json::from_str::<Array<f32>>(text).is_err());

    // zero extent
    let text = r##"{"v":1,"type":"f32","dim":[2,0],"data":[]}"##;
    assert!(serde_json::from_str::<Array<f32>>(text).is_err());
}

#[test]
fn serial_wrong_type_serde() {
    let a = arr1(&[1.5f64, 2.5]);
    let serial = serde_json::to_string(&a).unwrap();
    let err = serde_json::from_str::<Array<f32>>(&serial).unwrap_err();
    assert!(err.to_string().contains("element type mismatch"), "{}", err);

    let err = serde_json::from_str::<Array<Complex<f64>>>(&serial).unwrap_err();
    assert!(err.to_string().contains("expected c64, found f64"), "{}", err);
}

#[test]
fn serial_dim_serde() {
    let d = Dim::new(&[4, 1, 3]).unwrap();
    let serial = serde_json::to_string(&d).unwrap();
    assert_eq!(serial, "[4,1,3]");
    assert_eq!(serde_json::from_str::<Dim>(&serial).unwrap(), d);
    assert!(serde_json::from_str::<Dim>("[]").is_err());
}

#[test]
fn serial_many_dim_serde_msgpack() {
    {
        let a = arr1::<f32>(&[2.72, 1., 2.]);

        let mut buf = Vec::new();
        serde::Serialize::serialize(&a, &mut rmp_serde::Serializer::new(&mut buf))
            .ok()
            .unwrap();

        let mut deserializer = rmp_serde::Deserializer::new(&buf[..]);
        let a_de: Array<f32> = serde::Deserialize::deserialize(&mut deserializer).unwrap();

        assert_eq!(a, a_de);
    }

    {
        let mut a = arr2(&[[3., 1., 2.2], [3.1, 4., 7.]]);
        a.set_name("msgpack");

        let mut buf = Vec::new();
        serde::Serialize::serialize(&a, &mut rmp_serde::Serializer::new(&mut buf))
            .ok()
            .unwrap();

        let mut deserializer = rmp_serde::Deserializer::new(&buf[..]);
        let a_de: Array<f32> = serde::Deserialize::deserialize(&mut deserializer).unwrap();

        assert_eq!(a, a_de);
        assert_eq!(a_de.name(), "msgpack");
    }
}

#[test]
fn serial_many_dim_ron() {
    use ron::de::from_str as ron_deserialize;
    use ron::ser::to_string as ron_serialize;

    {
        let a = arr1::<f32>(&[2.72, 1., 2.]);

        let a_s = ron_serialize(&a).unwrap();

        let a_de: Array<f32> = ron_deserialize(&a_s).unwrap();

        assert_eq!(a, a_de);
    }

    {
        let mut a = arr2(&[[3., 1., 2.2], [3.1, 4., 7.]]);
        a.set_res(1, 0.25).unwrap();

        let a_s = ron_serialize(&a).unwrap();

        let a_de: Array<f32> = ron_deserialize(&a_s).unwrap();

        assert_eq!(a, a_de);
        assert_eq!(a_de.res(), &[1., 0.25]);
    }
}
