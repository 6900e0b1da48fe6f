// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::error::ArrayError;
use crate::index::ResolvedIndex;
use crate::{common_shape, common_shape_all, layout, names, validate_recyclable};
use crate::{Array, Axis, Shape};

/// # Broadcasting
impl<A: Clone> Array<A> {
    /// Broadcast the array to `shape`, repeating axes of extent 1.
    ///
    /// Missing trailing axes are treated as extent 1. An axis that is empty
    /// in the array stays empty whatever `shape` asks for, and an axis that
    /// `shape` makes empty is emptied first. Names survive on axes whose
    /// extent does not change.
    ///
    /// **Errors** if `shape` has lower rank than the array, or if an axis
    /// cannot be recycled.
    ///
    /// ```
    /// use ndrecycle::Array;
    ///
    /// let a = Array::from_shape_vec([2, 1], vec![1, 2]).unwrap();
    /// let b = a.broadcast([2, 3]).unwrap();
    /// assert_eq!(b.as_slice(), &[1, 2, 1, 2, 1, 2]);
    ///
    /// let empty = Array::<i32>::zeros([0, 1]);
    /// assert_eq!(empty.broadcast([5, 4]).unwrap().shape(), &[0, 4]);
    /// ```
    pub fn broadcast<Sh>(&self, shape: Sh) -> Result<Array<A>, ArrayError>
    where
        Sh: Into<Shape>,
    {
        let shape = shape.into();
        if self.shape == shape {
            return Ok(self.clone());
        }
        self.clone().into_broadcast(shape)
    }

    /// Like [`broadcast`](Self::broadcast), consuming the array so that the
    /// identity case needs no copy.
    pub fn into_broadcast<Sh>(self, shape: Sh) -> Result<Array<A>, ArrayError>
    where
        Sh: Into<Shape>,
    {
        let shape = shape.into();
        if self.shape == shape {
            return Ok(self);
        }
        let mut source = self.into_rank(shape.ndim())?;

        // The layout primitive cannot shrink an axis to zero, so empty those
        // axes with a subset before comparing shapes.
        if source
            .shape
            .iter()
            .zip(shape.iter())
            .any(|(&from, &to)| to == 0 && from != 0)
        {
            let resolved: Vec<ResolvedIndex> = source
                .shape
                .iter()
                .zip(shape.iter())
                .map(|(&from, &to)| {
                    if to == 0 {
                        ResolvedIndex::Positions(Vec::new())
                    } else {
                        ResolvedIndex::Entire(from)
                    }
                })
                .collect();
            source = source.select(&resolved);
        }

        // Empty stays empty.
        let target = Shape::new(
            source
                .shape
                .iter()
                .zip(shape.iter())
                .map(|(&from, &to)| if from == 0 { 0 } else { to })
                .collect(),
        );
        validate_recyclable(&source.shape, &target)?;
        if source.shape == target {
            return Ok(source);
        }
        tracing::trace!(from = %source.shape, to = %target, "broadcast");
        let data = layout::expand_layout(&source.data, &source.shape, &target);
        let names = names::broadcast(&source.names, &source.shape, &target);
        Ok(Array::from_parts(data, target, names))
    }

    /// Broadcast `self` and `other` to their common shape.
    ///
    /// ```
    /// use ndrecycle::Array;
    ///
    /// let a = Array::from_shape_vec([3, 1], vec![2, 3, 4]).unwrap();
    /// let b = Array::from_shape_vec([1, 3], vec![5, 6, 7]).unwrap();
    /// let (a1, b1) = a.broadcast_with(&b).unwrap();
    /// assert_eq!(a1.shape(), &[3, 3]);
    /// assert_eq!(b1.as_slice(), &[5, 5, 5, 6, 6, 6, 7, 7, 7]);
    /// ```
    pub fn broadcast_with<B: Clone>(
        &self,
        other: &Array<B>,
    ) -> Result<(Array<A>, Array<B>), ArrayError> {
        let shape = common_shape(&self.shape, &other.shape)?;
        Ok((self.broadcast(&shape)?, other.broadcast(&shape)?))
    }

    /// Broadcast `self` to exactly `shape` for writing into a region of that
    /// shape. Unlike [`broadcast`](Self::broadcast), an empty axis in the
    /// value cannot fill a non-empty region.
    pub(crate) fn conform_to(self, shape: &Shape) -> Result<Array<A>, ArrayError> {
        let from = self.shape.clone();
        let value = self.into_broadcast(shape)?;
        if value.shape != *shape {
            let axis = value
                .shape
                .iter()
                .zip(shape.iter())
                .position(|(v, t)| v != t)
                .unwrap_or(0);
            return Err(ArrayError::NonRecyclableShape {
                axis: Axis(axis),
                left: from.get(axis).copied().unwrap_or(1),
                right: shape[axis],
            });
        }
        Ok(value)
    }
}

/// Broadcast every array to the common shape of all of them.
pub fn broadcast_all<A: Clone>(arrays: &[&Array<A>]) -> Result<Vec<Array<A>>, ArrayError> {
    let shape = common_shape_all(arrays.iter().map(|a| &a.shape))?;
    arrays.iter().map(|a| a.broadcast(&shape)).collect()
}
