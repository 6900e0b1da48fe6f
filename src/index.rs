// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Index specifications and their resolution to buffer positions.
//!
//! An [`IndexSpec`] is what a caller writes for one axis. The resolver turns
//! a list of them into one [`ResolvedIndex`] per axis of the array, and the
//! same resolution serves both reads and writes.

use std::ops::{RangeFull, RangeInclusive};

use itertools::Either;

use crate::error::ArrayError;
use crate::names::AxisNames;
use crate::{Array, Axis, Shape};

/// The raw index specification for one axis.
///
/// Positions are **1-based**; a list of negative positions selects every
/// position *except* the listed ones. Zeros in a position list are ignored.
///
/// ## Examples
///
/// `IndexSpec::Entire` selects the whole axis, like leaving a subscript
/// blank. The [`idx!`](crate::idx) macro accepts `..` for it.
///
/// `IndexSpec::Positions(vec![1, 3])` selects the first and third positions.
///
/// `IndexSpec::Positions(vec![-1])` selects everything but the first position.
///
/// `IndexSpec::Mask(vec![true])` selects the whole axis; a mask must either
/// have length one or match the extent of the axis.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum IndexSpec {
    /// Select the entire axis.
    Entire,
    /// 1-based positions, or their negated complement.
    Positions(Vec<isize>),
    /// Logical mask of length 1 or of the axis extent.
    Mask(Vec<bool>),
    /// Names looked up in the axis names.
    Names(Vec<String>),
    /// Select nothing; the axis is kept with extent 0.
    Empty,
    /// A subscript left out of the call entirely.
    ///
    /// Trailing omitted subscripts are ignored; an omitted subscript followed
    /// by a given one is an error.
    Omitted,
}

impl IndexSpec {
    /// A single 1-based position.
    #[inline]
    pub fn at(position: isize) -> Self {
        IndexSpec::Positions(vec![position])
    }

    /// Names from anything string-like.
    pub fn names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        IndexSpec::Names(names.into_iter().map(Into::into).collect())
    }
}

/// Positions past `isize::MAX` saturate, so they stay out of bounds rather
/// than wrapping into exclusions.
#[inline]
fn saturate<T>(position: T) -> isize
where isize: TryFrom<T>
{
    isize::try_from(position).unwrap_or(isize::MAX)
}

macro_rules! impl_spec_from_integer {
    ($($int:ty),*) => {
        $(
            impl From<$int> for IndexSpec {
                #[inline]
                fn from(position: $int) -> IndexSpec {
                    IndexSpec::Positions(vec![saturate(position)])
                }
            }

            impl From<Vec<$int>> for IndexSpec {
                #[inline]
                fn from(positions: Vec<$int>) -> IndexSpec {
                    IndexSpec::Positions(positions.into_iter().map(saturate).collect())
                }
            }

            impl<'a> From<&'a [$int]> for IndexSpec {
                #[inline]
                fn from(positions: &'a [$int]) -> IndexSpec {
                    IndexSpec::Positions(positions.iter().map(|&p| saturate(p)).collect())
                }
            }

            /// An inclusive 1-based range: `1..=3` selects the first three positions.
            impl From<RangeInclusive<$int>> for IndexSpec {
                #[inline]
                fn from(r: RangeInclusive<$int>) -> IndexSpec {
                    IndexSpec::Positions(r.map(saturate).collect())
                }
            }
        )*
    };
}

impl_spec_from_integer!(i32, isize, usize);

impl From<RangeFull> for IndexSpec {
    #[inline]
    fn from(_: RangeFull) -> IndexSpec {
        IndexSpec::Entire
    }
}

impl From<bool> for IndexSpec {
    #[inline]
    fn from(b: bool) -> IndexSpec {
        IndexSpec::Mask(vec![b])
    }
}

impl From<Vec<bool>> for IndexSpec {
    #[inline]
    fn from(mask: Vec<bool>) -> IndexSpec {
        IndexSpec::Mask(mask)
    }
}

/// A logical array used as a mask, read in buffer order.
impl<'a> From<&'a Array<bool>> for IndexSpec {
    #[inline]
    fn from(mask: &'a Array<bool>) -> IndexSpec {
        IndexSpec::Mask(mask.as_slice().to_vec())
    }
}

impl<'a> From<&'a str> for IndexSpec {
    #[inline]
    fn from(name: &'a str) -> IndexSpec {
        IndexSpec::Names(vec![name.to_string()])
    }
}

impl<'a> From<Vec<&'a str>> for IndexSpec {
    #[inline]
    fn from(names: Vec<&'a str>) -> IndexSpec {
        IndexSpec::names(names)
    }
}

impl From<String> for IndexSpec {
    #[inline]
    fn from(name: String) -> IndexSpec {
        IndexSpec::Names(vec![name])
    }
}

/// Build a `Vec<IndexSpec>`, converting each item with `IndexSpec::from`.
///
/// ```
/// use ndrecycle::{idx, IndexSpec};
///
/// let specs = idx![1, .., 2..=3];
/// assert_eq!(specs[0], IndexSpec::Positions(vec![1]));
/// assert_eq!(specs[1], IndexSpec::Entire);
/// assert_eq!(specs[2], IndexSpec::Positions(vec![2, 3]));
/// ```
#[macro_export]
macro_rules! idx {
    () => {
        ::std::vec::Vec::<$crate::IndexSpec>::new()
    };
    ($($spec:expr),+ $(,)?) => {
        ::std::vec![$($crate::IndexSpec::from($spec)),+]
    };
}

/// Zero-based positions along one axis, the result of resolving an
/// [`IndexSpec`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ResolvedIndex {
    /// The whole axis of the given extent, not materialized.
    Entire(usize),
    Positions(Vec<usize>),
}

impl ResolvedIndex {
    /// Number of selected positions.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            ResolvedIndex::Entire(n) => *n,
            ResolvedIndex::Positions(p) => p.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the `i`-th selected position.
    ///
    /// **Panics** if `i` is out of bounds.
    #[inline]
    pub fn get(&self, i: usize) -> usize {
        match self {
            ResolvedIndex::Entire(n) => {
                assert!(i < *n, "position {} out of bounds for extent {}", i, n);
                i
            }
            ResolvedIndex::Positions(p) => p[i],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        match self {
            ResolvedIndex::Entire(n) => Either::Left(0..*n),
            ResolvedIndex::Positions(p) => Either::Right(p.iter().copied()),
        }
    }

    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

/// Resolve per-axis specifications against an array's shape and names.
///
/// Trailing [`IndexSpec::Omitted`] entries are dropped first. What remains
/// must not outnumber the axes; missing axes on the right select the
/// entire axis. Any other `Omitted` entry is an error.
pub fn resolve(
    specs: &[IndexSpec],
    shape: &Shape,
    names: &AxisNames,
) -> Result<Vec<ResolvedIndex>, ArrayError> {
    let given = specs
        .iter()
        .rposition(|spec| *spec != IndexSpec::Omitted)
        .map_or(0, |last| last + 1);
    let specs = &specs[..given];
    if specs.len() > shape.ndim() {
        return Err(ArrayError::TooManyAxes {
            supplied: specs.len(),
            ndim: shape.ndim(),
        });
    }
    let mut resolved = Vec::with_capacity(shape.ndim());
    for (i, &extent) in shape.iter().enumerate() {
        let axis = Axis(i);
        let index = match specs.get(i) {
            None => ResolvedIndex::Entire(extent),
            Some(IndexSpec::Omitted) => return Err(ArrayError::InteriorOmission { axis }),
            Some(spec) => resolve_axis(spec, axis, extent, names.axis(axis))?,
        };
        resolved.push(index);
    }
    Ok(resolved)
}

/// Resolve the specification for a single axis of extent `extent`.
pub fn resolve_axis(
    spec: &IndexSpec,
    axis: Axis,
    extent: usize,
    names: Option<&[String]>,
) -> Result<ResolvedIndex, ArrayError> {
    match spec {
        IndexSpec::Entire | IndexSpec::Omitted => Ok(ResolvedIndex::Entire(extent)),
        IndexSpec::Empty => Ok(ResolvedIndex::Positions(Vec::new())),
        IndexSpec::Positions(positions) => resolve_positions(positions, extent, Some(axis)),
        IndexSpec::Mask(mask) => resolve_mask(mask, extent, Some(axis)),
        IndexSpec::Names(wanted) => {
            let names = match names {
                Some(names) => names,
                None => {
                    return Err(ArrayError::UnknownName {
                        axis,
                        name: wanted.first().cloned().unwrap_or_default(),
                        named: false,
                    })
                }
            };
            let positions = wanted
                .iter()
                .map(|name| {
                    names
                        .iter()
                        .position(|n| n == name)
                        .ok_or_else(|| ArrayError::UnknownName {
                            axis,
                            name: name.clone(),
                            named: true,
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(ResolvedIndex::Positions(positions))
        }
    }
}

/// Resolve a specification against the flattened, buffer-order view of an
/// array with `size` elements.
///
/// Names are never accepted here: a flattened position has no name.
pub fn resolve_flat(spec: &IndexSpec, size: usize) -> Result<ResolvedIndex, ArrayError> {
    match spec {
        IndexSpec::Entire | IndexSpec::Omitted => Ok(ResolvedIndex::Entire(size)),
        IndexSpec::Empty => Ok(ResolvedIndex::Positions(Vec::new())),
        IndexSpec::Positions(positions) => resolve_positions(positions, size, None),
        IndexSpec::Mask(mask) => resolve_mask(mask, size, None),
        IndexSpec::Names(_) => Err(ArrayError::NamedFlatIndex),
    }
}

fn resolve_positions(
    positions: &[isize],
    extent: usize,
    axis: Option<Axis>,
) -> Result<ResolvedIndex, ArrayError> {
    let positions: Vec<isize> = positions.iter().copied().filter(|&p| p != 0).collect();
    let out_of_bounds = |position| ArrayError::IndexOutOfBounds {
        axis,
        position,
        extent,
    };
    if positions.iter().all(|&p| p > 0) {
        positions
            .iter()
            .map(|&p| {
                let zero_based = (p - 1) as usize;
                if zero_based < extent {
                    Ok(zero_based)
                } else {
                    Err(out_of_bounds(p))
                }
            })
            .collect::<Result<Vec<_>, _>>()
            .map(ResolvedIndex::Positions)
    } else if positions.iter().all(|&p| p < 0) {
        let mut keep = vec![true; extent];
        for &p in &positions {
            let zero_based = p.unsigned_abs() - 1;
            match keep.get_mut(zero_based) {
                Some(k) => *k = false,
                None => return Err(out_of_bounds(p)),
            }
        }
        Ok(ResolvedIndex::Positions(
            (0..extent).filter(|&i| keep[i]).collect(),
        ))
    } else {
        Err(ArrayError::MixedSignIndex { axis })
    }
}

fn resolve_mask(
    mask: &[bool],
    extent: usize,
    axis: Option<Axis>,
) -> Result<ResolvedIndex, ArrayError> {
    match *mask {
        [true] => Ok(ResolvedIndex::Entire(extent)),
        [false] => Ok(ResolvedIndex::Positions(Vec::new())),
        _ if mask.len() == extent => Ok(ResolvedIndex::Positions(
            (0..extent).filter(|&i| mask[i]).collect(),
        )),
        _ => Err(ArrayError::IndexShapeMismatch {
            axis,
            len: mask.len(),
            extent,
        }),
    }
}
