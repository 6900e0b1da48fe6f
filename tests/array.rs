use ndrecycle::prelude::*;
use ndrecycle::{ErrorKind, STORAGE_ORDER};

use itertools::Itertools;

#[test]
fn from_shape_vec_column_major() {
    assert_eq!(STORAGE_ORDER, Order::ColumnMajor);
    let a = Array::from_shape_vec([2, 3], vec![1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(a.ndim(), 2);
    assert_eq!(a.len(), 6);
    assert_eq!(a.len_of(Axis(1)), 3);
    let rows = (0..2)
        .map(|i| (0..3).map(|j| a.get(&[i, j]).unwrap()).join(" "))
        .collect::<Vec<_>>();
    assert_eq!(rows, ["1 3 5", "2 4 6"]);
    assert_eq!(a.get(&[2, 0]), None);
    assert_eq!(a.get(&[0]), None);
}

#[test]
fn from_shape_vec_errors() {
    assert_eq!(
        Array::from_shape_vec([2, 3], vec![1, 2, 3]),
        Err(ArrayError::DataLengthMismatch {
            shape: Shape::from([2, 3]),
            len: 3
        })
    );
    let e = Array::from_shape_vec_order([2], vec![1], Order::RowMajor).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::DataLengthMismatch);
}

#[test]
fn row_major_round_trip() {
    let data = (1..=24).collect::<Vec<i32>>();
    let a = Array::from_shape_vec_order([2, 3, 4], data.clone(), Order::RowMajor).unwrap();
    assert_eq!(a.to_vec_order(Order::RowMajor), data);
    assert_eq!(a.get(&[0, 0, 1]), Some(&2));
    assert_eq!(a.get(&[1, 0, 0]), Some(&13));
    assert_eq!(a.to_vec_order(Order::ColumnMajor), a.as_slice());
}

#[test]
fn get_mut_writes() {
    let mut a = Array::<i32>::zeros([2, 2]);
    *a.get_mut(&[1, 0]).unwrap() = 5;
    assert_eq!(a.as_slice(), &[0, 5, 0, 0]);
    assert!(a.get_mut(&[2, 2]).is_none());
}

#[test]
fn names_are_checked() {
    let a = Array::from_shape_vec([2, 3], (1..=6).collect()).unwrap();
    assert_eq!(
        a.clone().with_axis_names(Axis(1), ["a", "b"]),
        Err(ArrayError::NameLengthMismatch {
            axis: Axis(1),
            names: 2,
            extent: 3
        })
    );
    assert_eq!(
        a.clone().with_axis_names(Axis(2), ["a"]).unwrap_err().kind(),
        ErrorKind::TooManyAxes
    );

    let names = AxisNames::new(
        vec![Some(vec!["r".to_string(), "s".to_string()])],
        a.raw_shape(),
    )
    .unwrap();
    let b = a.clone().with_names(names).unwrap();
    assert_eq!(b.names().position(Axis(0), "s"), Some(1));
    assert_eq!(b.axis_names(Axis(1)), None);
    assert_eq!(b.without_axis_names(Axis(0)), a);
}

#[test]
fn map_keeps_shape_and_names() {
    let a = Array::from_shape_vec([2, 1], vec![1, 2])
        .unwrap()
        .with_axis_names(Axis(0), ["a", "b"])
        .unwrap();
    let b = a.map(|&x| x as f64 / 2.);
    assert_eq!(b.shape(), a.shape());
    assert_eq!(b.names(), a.names());
    assert_eq!(b.as_slice(), &[0.5, 1.0]);
}

#[test]
fn error_display() {
    let e = ArrayError::NonRecyclableShape {
        axis: Axis(1),
        left: 3,
        right: 4,
    };
    assert!(e.to_string().contains("axis 1"), "{}", e);
    let e = ArrayError::IndexOutOfBounds {
        axis: None,
        position: 9,
        extent: 8,
    };
    assert!(e.to_string().contains("flattened"), "{}", e);
}
