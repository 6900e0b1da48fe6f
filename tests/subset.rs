use ndrecycle::prelude::*;
use ndrecycle::ErrorKind;

fn cube() -> Array<i32> {
    Array::from_shape_vec([2, 2, 2], (1..=8).collect()).unwrap()
}

fn strings(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn subset_never_drops_axes() {
    let a = cube();
    let s = a
        .subset(&[IndexSpec::at(1), IndexSpec::Omitted, IndexSpec::Omitted])
        .unwrap();
    assert_eq!(s.shape(), &[1, 2, 2]);
    assert_eq!(s.as_slice(), &[1, 3, 5, 7]);

    let s = a.subset(&idx![2, 1, 2]).unwrap();
    assert_eq!(s.shape(), &[1, 1, 1]);
    assert_eq!(s.as_slice(), &[6]);
}

#[test]
fn subset_short_spec_selects_rest() {
    let a = cube();
    assert_eq!(a.subset(&idx![1]).unwrap(), a.subset(&idx![1, .., ..]).unwrap());
    assert_eq!(a.subset(&[]).unwrap(), a);
}

#[test]
fn subset_reorders_and_repeats() {
    let a = Array::from_vec(vec![10, 20, 30]);
    let s = a.subset(&idx![vec![3, 1, 1]]).unwrap();
    assert_eq!(s.as_slice(), &[30, 10, 10]);
}

#[test]
fn subset_negative_and_zero() {
    let a = Array::from_shape_vec([3, 2], (1..=6).collect()).unwrap();
    let s = a.subset(&idx![-2]).unwrap();
    assert_eq!(s.shape(), &[2, 2]);
    assert_eq!(s.as_slice(), &[1, 3, 4, 6]);

    let s = a.subset(&idx![0]).unwrap();
    assert_eq!(s.shape(), &[0, 2]);

    let s = a.subset(&[IndexSpec::Entire, IndexSpec::Empty]).unwrap();
    assert_eq!(s.shape(), &[3, 0]);
}

#[test]
fn subset_masks() {
    let a = Array::from_shape_vec([3, 2], (1..=6).collect()).unwrap();
    let s = a.subset(&idx![vec![true, false, true], true]).unwrap();
    assert_eq!(s.shape(), &[2, 2]);
    assert_eq!(s.as_slice(), &[1, 3, 4, 6]);

    let s = a.subset(&idx![false]).unwrap();
    assert_eq!(s.shape(), &[0, 2]);

    assert_eq!(
        a.subset(&idx![vec![true, false]]),
        Err(ArrayError::IndexShapeMismatch {
            axis: Some(Axis(0)),
            len: 2,
            extent: 3
        })
    );
}

#[test]
fn subset_by_name() {
    let a = Array::from_shape_vec([3, 2], (1..=6).collect())
        .unwrap()
        .with_axis_names(Axis(0), ["a", "b", "c"])
        .unwrap();
    let s = a.subset(&idx![vec!["c", "a"]]).unwrap();
    assert_eq!(s.as_slice(), &[3, 1, 6, 4]);
    assert_eq!(s.axis_names(Axis(0)), Some(&strings(&["c", "a"])[..]));

    assert_eq!(
        a.subset(&idx!["z"]),
        Err(ArrayError::UnknownName {
            axis: Axis(0),
            name: "z".to_string(),
            named: true
        })
    );
    assert_eq!(
        a.subset(&idx![.., "a"]).unwrap_err().kind(),
        ErrorKind::UnknownName
    );
}

#[test]
fn subset_keeps_selected_names() {
    let a = Array::from_shape_vec([3, 2], (1..=6).collect())
        .unwrap()
        .with_axis_names(Axis(0), ["a", "b", "c"])
        .unwrap()
        .with_axis_names(Axis(1), ["x", "y"])
        .unwrap();
    let s = a.subset(&idx![-2, 2]).unwrap();
    assert_eq!(s.axis_names(Axis(0)), Some(&strings(&["a", "c"])[..]));
    assert_eq!(s.axis_names(Axis(1)), Some(&strings(&["y"])[..]));
}

#[test]
fn subset_errors() {
    let a = cube();
    assert_eq!(
        a.subset(&idx![1, 1, 1, 1]),
        Err(ArrayError::TooManyAxes { supplied: 4, ndim: 3 })
    );
    // trailing omissions do not count
    let specs = [
        IndexSpec::at(1),
        IndexSpec::Omitted,
        IndexSpec::Omitted,
        IndexSpec::Omitted,
    ];
    assert_eq!(a.subset(&specs).unwrap().shape(), &[1, 2, 2]);
    // interior ones do
    let specs = [IndexSpec::Omitted, IndexSpec::at(1)];
    assert_eq!(
        a.subset(&specs),
        Err(ArrayError::InteriorOmission { axis: Axis(0) })
    );
    assert_eq!(
        a.subset(&idx![3]),
        Err(ArrayError::IndexOutOfBounds {
            axis: Some(Axis(0)),
            position: 3,
            extent: 2
        })
    );
    assert_eq!(
        a.subset(&idx![.., vec![1, -2]]),
        Err(ArrayError::MixedSignIndex { axis: Some(Axis(1)) })
    );
}

#[test]
fn subset_huge_position_is_out_of_bounds() {
    let a = Array::from_vec(vec![10, 20, 30]);
    assert_eq!(IndexSpec::from(usize::MAX), IndexSpec::Positions(vec![isize::MAX]));
    assert_eq!(
        a.subset(&[IndexSpec::from(usize::MAX)]),
        Err(ArrayError::IndexOutOfBounds {
            axis: Some(Axis(0)),
            position: isize::MAX,
            extent: 3
        })
    );
    assert_eq!(
        a.subset(&[IndexSpec::from(vec![1usize, usize::MAX])])
            .unwrap_err()
            .kind(),
        ErrorKind::IndexOutOfBounds
    );
}

#[test]
fn slice_one_axis() {
    let a = Array::from_shape_vec([2, 3], (1..=6).collect()).unwrap();
    let s = a.slice(Axis(1), 2..=3).unwrap();
    assert_eq!(s.shape(), &[2, 2]);
    assert_eq!(s.as_slice(), &[3, 4, 5, 6]);
    assert_eq!(s, a.subset(&idx![.., 2..=3]).unwrap());

    let s = a.slice(Axis(0), 2).unwrap();
    assert_eq!(s.shape(), &[1, 3]);
    assert_eq!(s.as_slice(), &[2, 4, 6]);

    assert_eq!(
        a.slice(Axis(2), 1),
        Err(ArrayError::TooManyAxes { supplied: 3, ndim: 2 })
    );
}
