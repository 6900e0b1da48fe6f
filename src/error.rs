// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use crate::{Axis, Shape};

/// An error related to array shape, indexing or element casting.
///
/// Every variant carries enough context (axis, extents, names) to diagnose
/// the failure without re-deriving it. Axes are zero-based.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ArrayError {
    /// Implicit rank changes may only add axes.
    #[error("cannot decrease rank from {from} to {to}")]
    RankDecrease { from: usize, to: usize },

    /// Two extents along `axis` that cannot be recycled to each other.
    #[error("non-recyclable extents along {axis}: {left} and {right}")]
    NonRecyclableShape { axis: Axis, left: usize, right: usize },

    #[error("{supplied} axis specifications for an array of rank {ndim}")]
    TooManyAxes { supplied: usize, ndim: usize },

    /// Only trailing axis specifications may be left out.
    #[error("specification for {axis} was omitted but a later axis was given")]
    InteriorOmission { axis: Axis },

    #[error("position {position} is out of bounds along {} of extent {extent}", Along(.axis))]
    IndexOutOfBounds {
        axis: Option<Axis>,
        position: isize,
        extent: usize,
    },

    #[error("cannot mix positive and negative positions along {}", Along(.axis))]
    MixedSignIndex { axis: Option<Axis> },

    #[error("mask of length {len} does not fit {} of extent {extent}", Along(.axis))]
    IndexShapeMismatch {
        axis: Option<Axis>,
        len: usize,
        extent: usize,
    },

    #[error("unknown name `{name}` along {axis}{}", unnamed_suffix(.named))]
    UnknownName { axis: Axis, name: String, named: bool },

    #[error("names cannot index a flattened array")]
    NamedFlatIndex,

    #[error("{names} names given for {axis} of extent {extent}")]
    NameLengthMismatch {
        axis: Axis,
        names: usize,
        extent: usize,
    },

    #[error("{len} elements cannot fill shape {shape}")]
    DataLengthMismatch { shape: Shape, len: usize },

    #[error("cannot reshape {from} into {to}: element counts differ")]
    ElementCountMismatch { from: Shape, to: Shape },

    #[error("cannot squeeze {axis} of extent {extent}")]
    CannotSqueeze { axis: Axis, extent: usize },

    /// Each entry is an offending axis together with the number of
    /// positions it resolved to. Axes are zero-based, like every [`Axis`]:
    /// the first axis is reported as `Axis(0)`.
    #[error("subscript must select exactly one position per axis: {}", NonScalar(.axes))]
    NonScalarSubscript { axes: Vec<(Axis, usize)> },

    #[error("cannot cast element {position} from `{from}` to `{to}`")]
    Cast {
        from: &'static str,
        to: &'static str,
        position: usize,
    },
}

/// Error code for an [`ArrayError`], without its context.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    RankDecrease,
    NonRecyclableShape,
    TooManyAxes,
    InteriorOmission,
    IndexOutOfBounds,
    MixedSignIndex,
    IndexShapeMismatch,
    UnknownName,
    NamedFlatIndex,
    NameLengthMismatch,
    DataLengthMismatch,
    ElementCountMismatch,
    CannotSqueeze,
    NonScalarSubscript,
    Cast,
}

impl ArrayError {
    /// Return the `ErrorKind` of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ArrayError::RankDecrease { .. } => ErrorKind::RankDecrease,
            ArrayError::NonRecyclableShape { .. } => ErrorKind::NonRecyclableShape,
            ArrayError::TooManyAxes { .. } => ErrorKind::TooManyAxes,
            ArrayError::InteriorOmission { .. } => ErrorKind::InteriorOmission,
            ArrayError::IndexOutOfBounds { .. } => ErrorKind::IndexOutOfBounds,
            ArrayError::MixedSignIndex { .. } => ErrorKind::MixedSignIndex,
            ArrayError::IndexShapeMismatch { .. } => ErrorKind::IndexShapeMismatch,
            ArrayError::UnknownName { .. } => ErrorKind::UnknownName,
            ArrayError::NamedFlatIndex => ErrorKind::NamedFlatIndex,
            ArrayError::NameLengthMismatch { .. } => ErrorKind::NameLengthMismatch,
            ArrayError::DataLengthMismatch { .. } => ErrorKind::DataLengthMismatch,
            ArrayError::ElementCountMismatch { .. } => ErrorKind::ElementCountMismatch,
            ArrayError::CannotSqueeze { .. } => ErrorKind::CannotSqueeze,
            ArrayError::NonScalarSubscript { .. } => ErrorKind::NonScalarSubscript,
            ArrayError::Cast { .. } => ErrorKind::Cast,
        }
    }
}

// `None` stands for the flattened (yank) view of an array.
struct Along<'a>(&'a Option<Axis>);

impl fmt::Display for Along<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(axis) => fmt::Display::fmt(axis, f),
            None => f.write_str("the flattened array"),
        }
    }
}

fn unnamed_suffix(named: &bool) -> &'static str {
    if *named {
        ""
    } else {
        " (axis is unnamed)"
    }
}

struct NonScalar<'a>(&'a [(Axis, usize)]);

impl fmt::Display for NonScalar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (axis, count)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} selects {}", axis, count)?;
        }
        Ok(())
    }
}
