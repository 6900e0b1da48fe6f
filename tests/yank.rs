use ndrecycle::prelude::*;
use ndrecycle::ErrorKind;

fn cube() -> Array<i32> {
    Array::from_shape_vec([2, 2, 2], (1..=8).collect()).unwrap()
}

#[test]
fn yank_true_takes_everything() {
    let a = cube();
    let y = a.yank(&IndexSpec::from(true)).unwrap();
    assert_eq!(y.shape(), &[8]);
    assert_eq!(y.as_slice(), a.as_slice());

    let y = a.yank(&IndexSpec::Entire).unwrap();
    assert_eq!(y.shape(), &[8]);
}

#[test]
fn yank_positions_in_storage_order() {
    let a = Array::from_shape_vec([2, 3], vec![10, 20, 30, 40, 50, 60]).unwrap();
    let y = a.yank(&IndexSpec::from(vec![6, 2])).unwrap();
    assert_eq!(y.as_slice(), &[60, 20]);

    let y = a.yank(&IndexSpec::from(vec![-1, -6])).unwrap();
    assert_eq!(y.as_slice(), &[20, 30, 40, 50]);

    assert_eq!(
        a.yank(&IndexSpec::at(7)),
        Err(ArrayError::IndexOutOfBounds {
            axis: None,
            position: 7,
            extent: 6
        })
    );
}

#[test]
fn yank_with_mask_array() {
    let a = cube();
    let mask = a.compare(CmpOp::Gt, &Array::from_vec(vec![5])).unwrap();
    assert_eq!(mask.shape(), &[2, 2, 2]);
    let y = a.yank_mask(&mask).unwrap();
    assert_eq!(y.as_slice(), &[6, 7, 8]);

    let short = Array::from_vec(vec![true, false]);
    assert_eq!(
        a.yank_mask(&short),
        Err(ArrayError::IndexShapeMismatch {
            axis: None,
            len: 2,
            extent: 8
        })
    );
}

#[test]
fn yank_rejects_names() {
    let a = Array::from_vec(vec![1, 2])
        .with_axis_names(Axis(0), ["a", "b"])
        .unwrap();
    assert_eq!(a.yank(&IndexSpec::from("a")), Err(ArrayError::NamedFlatIndex));
}

#[test]
fn yank_names_only_for_vectors() {
    let v = Array::from_vec(vec![1, 2, 3])
        .with_axis_names(Axis(0), ["a", "b", "c"])
        .unwrap();
    let y = v.yank(&IndexSpec::from(vec![3, 1])).unwrap();
    assert_eq!(
        y.axis_names(Axis(0)),
        Some(&["c".to_string(), "a".to_string()][..])
    );

    let m = Array::from_shape_vec([3, 1], vec![1, 2, 3])
        .unwrap()
        .with_axis_names(Axis(0), ["a", "b", "c"])
        .unwrap();
    let y = m.yank(&IndexSpec::from(vec![3, 1])).unwrap();
    assert!(y.names().is_unnamed());
}

#[test]
fn yank_assign_recycles() {
    let mut a = cube();
    a.yank_assign(&IndexSpec::from(vec![1, 3, 5, 7]), &Array::from_vec(vec![0]))
        .unwrap();
    assert_eq!(a.as_slice(), &[0, 2, 0, 4, 0, 6, 0, 8]);

    // any value shape is flattened first
    let mut a = cube();
    let v = Array::from_shape_vec([1, 2], vec![0, -1]).unwrap();
    a.yank_assign(&IndexSpec::from(vec![1, 2]), &v).unwrap();
    assert_eq!(&a.as_slice()[..3], &[0, -1, 3]);

    let mut a = cube();
    let before = a.clone();
    let e = a
        .yank_assign(&IndexSpec::from(vec![1, 2, 3]), &Array::from_vec(vec![0, 0]))
        .unwrap_err();
    assert_eq!(e.kind(), ErrorKind::NonRecyclableShape);
    assert_eq!(a, before);
}

#[test]
fn yank_assign_mask() {
    let mut a = cube();
    let mask = a.compare(CmpOp::Le, &Array::from_vec(vec![2])).unwrap();
    a.yank_assign(&IndexSpec::from(&mask), &Array::from_vec(vec![100]))
        .unwrap();
    assert_eq!(a.as_slice(), &[100, 100, 3, 4, 5, 6, 7, 8]);
}
