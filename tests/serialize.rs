#![cfg(feature = "serde")]

use ndrecycle::prelude::*;

#[test]
fn serial_many_dim_serde() {
    {
        let a = Array::from_vec(vec![2.72f32]).into_squeezed(None).unwrap();
        let serial = serde_json::to_string(&a).unwrap();
        println!("Encode {:?} => {:?}", a, serial);
        let res = serde_json::from_str::<Array<f32>>(&serial);
        println!("{:?}", res);
        assert_eq!(a, res.unwrap());
    }

    {
        let a = Array::from_vec(vec![2.72f32, 1., 2.]);
        let serial = serde_json::to_string(&a).unwrap();
        println!("Encode {:?} => {:?}", a, serial);
        let res = serde_json::from_str::<Array<f32>>(&serial);
        println!("{:?}", res);
        assert_eq!(a, res.unwrap());
    }

    {
        let a = Array::from_shape_vec([2, 2], vec![3., 1., 2.72, 3.14f32])
            .unwrap()
            .with_axis_names(Axis(1), ["p", "q"])
            .unwrap();
        let serial = serde_json::to_string(&a).unwrap();
        println!("Encode {:?} => {:?}", a, serial);
        let res = serde_json::from_str::<Array<f32>>(&serial);
        println!("{:?}", res);
        assert_eq!(a, res.unwrap());
    }

    {
        // Test an empty array
        let a = Array::<f32>::zeros([0, 3]);
        let serial = serde_json::to_string(&a).unwrap();
        let res = serde_json::from_str::<Array<f32>>(&serial);
        assert_eq!(a, res.unwrap());
    }
}

#[test]
fn serial_layout() {
    let a = Array::from_shape_vec([2, 1], vec![1, 2])
        .unwrap()
        .with_axis_names(Axis(0), ["a", "b"])
        .unwrap();
    let serial = serde_json::to_string(&a).unwrap();
    assert_eq!(
        serial,
        r#"{"v":1,"dim":[2,1],"names":[["a","b"],null],"data":[1,2]}"#
    );
}

#[test]
fn serial_wrong_count_serde() {
    // one element too few
    let text = r##"{"v":1,"dim":[2,3],"data":[3,1,2.2,3.1,4]}"##;
    let arr = serde_json::from_str::<Array<f32>>(text);
    println!("{:?}", arr);
    assert!(arr.is_err());

    // one element too many
    let text = r##"{"v":1,"dim":[2,3],"data":[3,1,2.2,3.1,4,7,1]}"##;
    let arr = serde_json::from_str::<Array<f32>>(text);
    println!("{:?}", arr);
    assert!(arr.is_err());

    // names of the wrong length
    let text = r##"{"v":1,"dim":[2],"names":[["a"]],"data":[1,2]}"##;
    let arr = serde_json::from_str::<Array<f32>>(text);
    assert!(arr.is_err());

    // names are optional
    let text = r##"{"v":1,"dim":[2],"data":[1,2]}"##;
    let arr = serde_json::from_str::<Array<f32>>(text).unwrap();
    assert!(arr.names().is_unnamed());
}

#[test]
fn serial_wrong_version() {
    let text = r##"{"v":2,"dim":[2],"data":[1,2]}"##;
    assert!(serde_json::from_str::<Array<f32>>(text).is_err());
}

#[test]
fn serial_shape() {
    let s = Shape::from([2, 0, 3]);
    let serial = serde_json::to_string(&s).unwrap();
    assert_eq!(serial, "[2,0,3]");
    assert_eq!(serde_json::from_str::<Shape>(&serial).unwrap(), s);
}
