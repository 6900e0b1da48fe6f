// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::error::ArrayError;
use crate::{Axis, Shape};

/// Check that `from` can be reshaped into `to` without changing the number of
/// elements. Buffer order is untouched by a reshape, so this is the only
/// requirement.
pub(crate) fn check_reshape(from: &Shape, to: &Shape) -> Result<(), ArrayError> {
    if from.size() != to.size() {
        return Err(ArrayError::ElementCountMismatch {
            from: from.clone(),
            to: to.clone(),
        });
    }
    Ok(())
}

/// Compute the shape left after removing axes of extent 1.
///
/// With `axes == None` every extent-1 axis is removed, otherwise exactly the
/// listed axes are, each of which must have extent 1. Returns the new shape
/// together with the axes that were kept, in order.
pub(crate) fn squeeze_shape(
    shape: &Shape,
    axes: Option<&[Axis]>,
) -> Result<(Shape, Vec<Axis>), ArrayError> {
    let remove: Vec<bool> = match axes {
        None => shape.iter().map(|&n| n == 1).collect(),
        Some(axes) => {
            let mut remove = vec![false; shape.ndim()];
            for &axis in axes {
                if axis.index() >= shape.ndim() {
                    return Err(ArrayError::TooManyAxes {
                        supplied: axis.index() + 1,
                        ndim: shape.ndim(),
                    });
                }
                let extent = shape.len_of(axis);
                if extent != 1 {
                    return Err(ArrayError::CannotSqueeze { axis, extent });
                }
                remove[axis.index()] = true;
            }
            remove
        }
    };
    let kept: Vec<Axis> = (0..shape.ndim())
        .filter(|&i| !remove[i])
        .map(Axis)
        .collect();
    let extents = kept.iter().map(|&axis| shape.len_of(axis)).collect();
    Ok((Shape::new(extents), kept))
}
