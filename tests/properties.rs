use ndrecycle::prelude::*;
use ndrecycle::{extend_rank, validate_recyclable};

use quickcheck::{quickcheck, Arbitrary, Gen, TestResult};

/// A small shape, so that arrays built from it stay small.
#[derive(Clone, Debug)]
struct SmallShape(Vec<usize>);

impl Arbitrary for SmallShape {
    fn arbitrary(g: &mut Gen) -> Self {
        let ndim = usize::arbitrary(g) % 4;
        SmallShape((0..ndim).map(|_| usize::arbitrary(g) % 4).collect())
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(|v| SmallShape(v.into_iter().map(|n| n % 4).collect())))
    }
}

fn iota(shape: &[usize]) -> Array<i32> {
    let shape = Shape::from(shape);
    let n = shape.size() as i32;
    Array::from_shape_vec(shape, (0..n).collect()).unwrap()
}

/// A shape that `shape` can be broadcast to: every extent 1 is replaced by
/// `k`, and `extra` axes are appended.
fn grown(shape: &[usize], k: usize, extra: usize) -> Vec<usize> {
    shape
        .iter()
        .map(|&n| if n == 1 { k } else { n })
        .chain(std::iter::repeat(k).take(extra))
        .collect()
}

/// Every axis named `"<axis><position>"`, so that names can be selected.
fn named(shape: &[usize]) -> Array<i32> {
    shape.iter().enumerate().fold(iota(shape), |a, (i, &n)| {
        a.with_axis_names(Axis(i), (0..n).map(|j| format!("{}{}", i, j)))
            .unwrap()
    })
}

/// A valid subscript for an axis of extent `n`, chosen by `seed` among
/// entire, repeated positions, exclusions, masks, names and empty.
fn pick_spec(axis: usize, n: usize, seed: u8, salt: &[u8]) -> IndexSpec {
    let at = |k: usize| salt.get(k).copied().unwrap_or(k as u8) as usize;
    if n == 0 {
        return if seed % 2 == 0 { IndexSpec::Entire } else { IndexSpec::Empty };
    }
    match seed % 6 {
        0 => IndexSpec::Entire,
        // duplicates are likely with a short axis
        1 => IndexSpec::Positions((0..3).map(|k| (at(k) % n) as isize + 1).collect()),
        2 => IndexSpec::Positions(vec![-((at(0) % n) as isize + 1)]),
        3 => IndexSpec::Mask((0..n).map(|k| at(k) % 2 == 0).collect()),
        4 => IndexSpec::names([format!("{}{}", axis, at(1) % n), format!("{}{}", axis, at(0) % n)]),
        _ => IndexSpec::Empty,
    }
}

quickcheck! {
    fn read_then_write_back_is_identity(a: SmallShape, seeds: Vec<u8>, salt: Vec<u8>) -> bool {
        let x = named(&a.0);
        let specs: Vec<IndexSpec> = a.0
            .iter()
            .enumerate()
            .map(|(i, &n)| pick_spec(i, n, seeds.get(i).copied().unwrap_or(0), &salt))
            .collect();
        let region = x.subset(&specs).unwrap();
        let mut y = x.clone();
        y.subset_assign(&specs, &region).unwrap();
        y == x
    }

    fn broadcast_output_is_common_shape(a: SmallShape, b: SmallShape) -> TestResult {
        let (sa, sb) = (Shape::from(a.0.clone()), Shape::from(b.0.clone()));
        let common = match common_shape(&sa, &sb) {
            Ok(s) => s,
            Err(_) => return TestResult::discard(),
        };
        let x = iota(&a.0);
        let y = iota(&b.0);
        let (x1, y1) = x.broadcast_with(&y).unwrap();
        TestResult::from_bool(x1.raw_shape() == &common && y1.raw_shape() == &common)
    }

    fn common_shape_is_symmetric(a: SmallShape, b: SmallShape) -> bool {
        let (sa, sb) = (Shape::from(a.0), Shape::from(b.0));
        common_shape(&sa, &sb).ok() == common_shape(&sb, &sa).ok()
    }

    fn rank_never_decreases(a: SmallShape, k: usize, extra: usize) -> bool {
        let k = k % 3 + 1;
        let extra = extra % 3;
        let x = iota(&a.0);
        let target = grown(&a.0, k, extra);
        let b = x.broadcast(target.clone()).unwrap();
        b.ndim() == x.ndim() + extra
            && extend_rank(x.raw_shape(), x.ndim() + extra).is_ok()
            && validate_recyclable(x.raw_shape(), &Shape::from(target)).is_ok()
    }

    fn empty_axes_stay_empty(a: SmallShape, k: usize) -> bool {
        let k = k % 3 + 1;
        let x = iota(&a.0);
        // ask for a non-empty extent everywhere
        let target: Vec<usize> = a.0
            .iter()
            .map(|&n| if n <= 1 { k } else { n })
            .collect();
        let b = x.broadcast(target).unwrap();
        a.0.iter().zip(b.shape()).all(|(&from, &to)| from != 0 || to == 0)
    }

    fn broadcast_reads_source(a: SmallShape, k: usize) -> bool {
        let k = k % 3 + 1;
        let x = iota(&a.0);
        let target = grown(&a.0, k, 1);
        let b = x.broadcast(target.clone()).unwrap();
        // every element of the result comes from the source position with
        // recycled axes pinned to zero
        let mut ok = true;
        for (offset, value) in b.iter().enumerate() {
            let mut rest = offset;
            let mut source = Vec::new();
            for (i, &n) in target.iter().enumerate() {
                let pos = rest % n;
                rest /= n;
                if i < a.0.len() {
                    source.push(if a.0[i] == 1 { 0 } else { pos });
                }
            }
            ok &= x.get(&source) == Some(value);
        }
        ok
    }

    fn write_then_read(a: SmallShape, row: usize, fill: i32) -> TestResult {
        if a.0.is_empty() || a.0[0] == 0 {
            return TestResult::discard();
        }
        let mut x = iota(&a.0);
        let position = (row % a.0[0]) as isize + 1;
        let specs = idx![position];
        let value = Array::from_vec(vec![fill]);
        x.subset_assign(&specs, &value).unwrap();
        let region = x.subset(&specs).unwrap();
        TestResult::from_bool(region.iter().all(|&v| v == fill))
    }

    fn subset_keeps_rank(a: SmallShape, pick: usize) -> TestResult {
        if a.0.iter().any(|&n| n == 0) {
            return TestResult::discard();
        }
        let x = iota(&a.0);
        let specs: Vec<IndexSpec> = a.0
            .iter()
            .map(|&n| IndexSpec::at((pick % n) as isize + 1))
            .collect();
        let s = x.subset(&specs).unwrap();
        TestResult::from_bool(s.ndim() == x.ndim() && s.len() == 1)
    }

    fn reshape_preserves_storage(a: SmallShape) -> bool {
        let x = iota(&a.0);
        let flat = x.reshape(x.len()).unwrap();
        flat.as_slice() == x.as_slice() && flat.reshape(a.0.clone()).unwrap() == x
    }
}
