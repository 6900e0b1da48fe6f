// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Shape algebra: rank extension and recycling rules.
//!
//! Shapes are compared pairwise and left-aligned. A shape of lower rank is
//! treated as if axes of extent 1 were appended on the right, so the output
//! shape of any broadcast is known before touching data.

use itertools::izip;

use crate::error::ArrayError;
use crate::{Axis, Shape};

/// Append axes of extent 1 to `shape` until it has rank `ndim`.
///
/// Rank may only grow implicitly; asking for a lower rank is an error.
///
/// ```
/// use ndrecycle::{extend_rank, Shape};
///
/// let shape = extend_rank(&Shape::from([2, 3]), 4).unwrap();
/// assert_eq!(shape, Shape::from([2, 3, 1, 1]));
/// ```
pub fn extend_rank(shape: &Shape, ndim: usize) -> Result<Shape, ArrayError> {
    if ndim < shape.ndim() {
        return Err(ArrayError::RankDecrease {
            from: shape.ndim(),
            to: ndim,
        });
    }
    let mut extents = shape.to_vec();
    extents.resize(ndim, 1);
    Ok(Shape::new(extents))
}

/// Calculate the common shape for a pair of array shapes, that they can be
/// broadcast to. Return an error if the shapes are not compatible.
///
/// Per axis: equal extents are kept, an empty axis on either side stays
/// empty, and an extent of 1 is recycled to the other side's extent.
pub fn common_shape(a: &Shape, b: &Shape) -> Result<Shape, ArrayError> {
    let ndim = a.ndim().max(b.ndim());
    let a = extend_rank(a, ndim)?;
    let b = extend_rank(b, ndim)?;
    let mut out = Vec::with_capacity(ndim);
    for (i, &ai, &bi) in izip!(0.., a.iter(), b.iter()) {
        let n = if ai == bi {
            ai
        } else if ai == 0 || bi == 0 {
            0
        } else if ai == 1 {
            bi
        } else if bi == 1 {
            ai
        } else {
            return Err(ArrayError::NonRecyclableShape {
                axis: Axis(i),
                left: ai,
                right: bi,
            });
        };
        out.push(n);
    }
    Ok(Shape::new(out))
}

/// Fold [`common_shape`] over any number of shapes.
///
/// The common shape of no shapes is the rank zero shape.
pub fn common_shape_all<'a, I>(shapes: I) -> Result<Shape, ArrayError>
where
    I: IntoIterator<Item = &'a Shape>,
{
    shapes
        .into_iter()
        .try_fold(Shape::scalar(), |acc, shape| common_shape(&acc, shape))
}

/// Check that an array of shape `from` can be recycled to shape `to`.
///
/// `from` is rank-extended first, so it must not have more axes than `to`.
pub fn validate_recyclable(from: &Shape, to: &Shape) -> Result<(), ArrayError> {
    let from = extend_rank(from, to.ndim())?;
    for (i, &f, &t) in izip!(0.., from.iter(), to.iter()) {
        if !is_recyclable(f, t) {
            return Err(ArrayError::NonRecyclableShape {
                axis: Axis(i),
                left: f,
                right: t,
            });
        }
    }
    Ok(())
}

#[inline]
pub(crate) fn is_recyclable(from: usize, to: usize) -> bool {
    from == to || from == 1 || to == 0 || from == 0
}
