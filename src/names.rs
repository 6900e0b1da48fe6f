// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Axis names and how they travel through shape changes.
//!
//! Every transformation uses the same rule per axis:
//!
//! | axis after the operation | names |
//! |---|---|
//! | same extent, same position | kept |
//! | resized (broadcast, reshape) | dropped |
//! | subset by positions | the names at those positions |
//! | new (rank extension) | none |
//! | removed (squeeze) | removed with the axis |

use itertools::izip;

use crate::error::ArrayError;
use crate::index::ResolvedIndex;
use crate::{Axis, Shape};

/// Optional per-position labels, one entry per axis.
///
/// When an axis has names there is exactly one per position along it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AxisNames(Vec<Option<Vec<String>>>);

impl AxisNames {
    /// No names on any of `ndim` axes.
    pub fn unnamed(ndim: usize) -> Self {
        AxisNames(vec![None; ndim])
    }

    /// Create names for an array of shape `shape`, checking that each named
    /// axis has one name per position.
    pub fn new(names: Vec<Option<Vec<String>>>, shape: &Shape) -> Result<Self, ArrayError> {
        if names.len() > shape.ndim() {
            return Err(ArrayError::TooManyAxes {
                supplied: names.len(),
                ndim: shape.ndim(),
            });
        }
        let mut names = names;
        names.resize(shape.ndim(), None);
        let names = AxisNames(names);
        names.check(shape)?;
        Ok(names)
    }

    pub(crate) fn check(&self, shape: &Shape) -> Result<(), ArrayError> {
        if self.0.len() != shape.ndim() {
            return Err(ArrayError::TooManyAxes {
                supplied: self.0.len(),
                ndim: shape.ndim(),
            });
        }
        for (i, names, &extent) in izip!(0.., &self.0, shape.iter()) {
            if let Some(names) = names {
                if names.len() != extent {
                    return Err(ArrayError::NameLengthMismatch {
                        axis: Axis(i),
                        names: names.len(),
                        extent,
                    });
                }
            }
        }
        Ok(())
    }

    #[inline]
    pub fn ndim(&self) -> usize {
        self.0.len()
    }

    /// Names along `axis`, if it has any.
    pub fn axis(&self, axis: Axis) -> Option<&[String]> {
        self.0.get(axis.index()).and_then(|n| n.as_deref())
    }

    /// Zero-based position of `name` along `axis`.
    pub fn position(&self, axis: Axis, name: &str) -> Option<usize> {
        self.axis(axis)?.iter().position(|n| n == name)
    }

    /// Return `true` if no axis is named.
    pub fn is_unnamed(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }

    pub(crate) fn set_axis(&mut self, axis: Axis, names: Option<Vec<String>>) {
        self.0[axis.index()] = names;
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<&[String]>> + '_ {
        self.0.iter().map(|n| n.as_deref())
    }

    /// Unchecked; callers validate against a shape before use.
    #[cfg(feature = "serde")]
    pub(crate) fn from_inner(names: Vec<Option<Vec<String>>>) -> Self {
        AxisNames(names)
    }
}

/// Names after appending unnamed axes up to rank `ndim`.
pub(crate) fn extend(names: &AxisNames, ndim: usize) -> AxisNames {
    let mut out = names.0.clone();
    if ndim > out.len() {
        out.resize(ndim, None);
    }
    AxisNames(out)
}

/// Names after broadcasting from `from` to `to` (equal rank).
pub(crate) fn broadcast(names: &AxisNames, from: &Shape, to: &Shape) -> AxisNames {
    debug_assert_eq!(from.ndim(), to.ndim());
    let names = extend(names, to.ndim());
    AxisNames(
        izip!(names.0, from.iter(), to.iter())
            .map(|(n, f, t)| if f == t { n } else { None })
            .collect(),
    )
}

/// Names of the region addressed by `resolved`.
pub(crate) fn subset(names: &AxisNames, resolved: &[ResolvedIndex]) -> AxisNames {
    AxisNames(
        resolved
            .iter()
            .enumerate()
            .map(|(i, index)| match (names.axis(Axis(i)), index) {
                (None, _) => None,
                (Some(n), ResolvedIndex::Entire(_)) => Some(n.to_vec()),
                (Some(n), ResolvedIndex::Positions(p)) => {
                    Some(p.iter().map(|&p| n[p].clone()).collect())
                }
            })
            .collect(),
    )
}

/// Names after a reshape from `from` to `to`.
///
/// An axis keeps its names only when it and every axis before it have the
/// same extent in both shapes, so that its positions still mean the same
/// buffer offsets.
pub(crate) fn reshape(names: &AxisNames, from: &Shape, to: &Shape) -> AxisNames {
    let mut out = AxisNames::unnamed(to.ndim());
    for (i, (&f, &t)) in from.iter().zip(to.iter()).enumerate() {
        if f != t {
            break;
        }
        out.0[i] = names.0[i].clone();
    }
    out
}

/// Names of the axes that survive a squeeze.
pub(crate) fn squeeze(names: &AxisNames, kept: &[Axis]) -> AxisNames {
    AxisNames(kept.iter().map(|a| names.0[a.index()].clone()).collect())
}

/// Names of a binary operation result: per axis, the left names if present,
/// otherwise the right ones. Both inputs already conform to the result shape.
pub(crate) fn merge(left: &AxisNames, right: &AxisNames) -> AxisNames {
    debug_assert_eq!(left.ndim(), right.ndim());
    AxisNames(
        left.0
            .iter()
            .zip(&right.0)
            .map(|(l, r)| l.clone().or_else(|| r.clone()))
            .collect(),
    )
}
