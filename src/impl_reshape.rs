// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::dimension::reshape::{check_reshape, squeeze_shape};
use crate::error::ArrayError;
use crate::{layout, names};
use crate::{Array, Axis, AxisNames, Order, Shape};

/// # Reshaping
impl<A> Array<A> {
    /// Transform the array into `shape`; any shape with the same number of
    /// elements is accepted. Storage order is unchanged.
    ///
    /// An axis keeps its names only if it, and every axis before it, has
    /// the same extent before and after.
    ///
    /// **Errors** if the number of elements differs.
    ///
    /// ```
    /// use ndrecycle::Array;
    ///
    /// let a = Array::from_shape_vec([2, 3], vec![1, 2, 3, 4, 5, 6]).unwrap();
    /// let b = a.into_shape([3, 2]).unwrap();
    /// assert_eq!(b.as_slice(), &[1, 2, 3, 4, 5, 6]);
    /// assert!(b.into_shape([4]).is_err());
    /// ```
    pub fn into_shape<Sh>(self, shape: Sh) -> Result<Array<A>, ArrayError>
    where
        Sh: Into<Shape>,
    {
        let shape = shape.into();
        check_reshape(&self.shape, &shape)?;
        tracing::trace!(from = %self.shape, to = %shape, "reshape");
        let names = names::reshape(&self.names, &self.shape, &shape);
        Ok(Array::from_parts(self.data, shape, names))
    }

    /// Remove axes of extent 1.
    ///
    /// With `None`, every axis of extent 1 is removed. Otherwise only the
    /// listed axes are, and each must have extent 1. Names stay on the axes
    /// that remain.
    ///
    /// ```
    /// use ndrecycle::{Array, Axis};
    ///
    /// let a = Array::from_elem([1, 3, 1], 0);
    /// assert_eq!(a.clone().into_squeezed(None).unwrap().shape(), &[3]);
    /// assert_eq!(a.into_squeezed(Some(&[Axis(0)][..])).unwrap().shape(), &[3, 1]);
    /// ```
    pub fn into_squeezed(self, axes: Option<&[Axis]>) -> Result<Array<A>, ArrayError> {
        let (shape, kept) = squeeze_shape(&self.shape, axes)?;
        let names = names::squeeze(&self.names, &kept);
        Ok(Array::from_parts(self.data, shape, names))
    }
}

impl<A: Clone> Array<A> {
    /// Return a copy of the array reshaped to `shape`.
    ///
    /// See [`into_shape`](Self::into_shape).
    pub fn reshape<Sh>(&self, shape: Sh) -> Result<Array<A>, ArrayError>
    where
        Sh: Into<Shape>,
    {
        self.clone().into_shape(shape)
    }

    /// Reshape reading and writing elements in logical `order`.
    ///
    /// With `Order::RowMajor` the elements are taken in row major order of
    /// the current shape and laid out in row major order of the new one;
    /// no axis keeps its names unless the shape is unchanged.
    ///
    /// ```
    /// use ndrecycle::{Array, Order};
    ///
    /// let a = Array::from_shape_vec_order([2, 3], vec![1, 2, 3, 4, 5, 6], Order::RowMajor)
    ///     .unwrap();
    /// let b = a.reshape_order([3, 2], Order::RowMajor).unwrap();
    /// assert_eq!(b.to_vec_order(Order::RowMajor), vec![1, 2, 3, 4, 5, 6]);
    /// ```
    pub fn reshape_order<Sh>(&self, shape: Sh, order: Order) -> Result<Array<A>, ArrayError>
    where
        Sh: Into<Shape>,
    {
        let shape = shape.into();
        match order {
            Order::ColumnMajor => self.reshape(shape),
            Order::RowMajor => {
                check_reshape(&self.shape, &shape)?;
                if self.shape == shape {
                    return Ok(self.clone());
                }
                let logical = self.to_vec_order(Order::RowMajor);
                let data = layout::from_row_major(logical, &shape);
                let names = AxisNames::unnamed(shape.ndim());
                Ok(Array::from_parts(data, shape, names))
            }
        }
    }

    /// Return a copy of the array with axes of extent 1 removed.
    ///
    /// See [`into_squeezed`](Self::into_squeezed).
    pub fn squeeze(&self, axes: Option<&[Axis]>) -> Result<Array<A>, ArrayError> {
        self.clone().into_squeezed(axes)
    }
}
