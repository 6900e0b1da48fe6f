// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constructor methods for arrays.

use num_traits::Zero;

use crate::error::ArrayError;
use crate::layout;
use crate::{Array, Axis, AxisNames, Order, Shape};

impl<A> Array<A> {
    /// Create a one-dimensional array from a vector (no copying needed).
    ///
    /// ```
    /// use ndrecycle::Array;
    ///
    /// let array = Array::from_vec(vec![1., 2., 3., 4.]);
    /// assert_eq!(array.shape(), &[4]);
    /// ```
    pub fn from_vec(v: Vec<A>) -> Self {
        let shape = Shape::from(v.len());
        Array::from_parts(v, shape, AxisNames::unnamed(1))
    }

    /// Create an array with the given shape from a vector in column major
    /// order.
    ///
    /// **Errors** if `v.len()` is not the number of elements in `shape`.
    ///
    /// ```
    /// use ndrecycle::Array;
    ///
    /// let a = Array::from_shape_vec([2, 3], vec![1, 2, 3, 4, 5, 6]).unwrap();
    /// assert_eq!(a.get(&[1, 0]), Some(&2));
    /// assert_eq!(a.get(&[0, 1]), Some(&3));
    /// ```
    pub fn from_shape_vec<Sh>(shape: Sh, v: Vec<A>) -> Result<Self, ArrayError>
    where
        Sh: Into<Shape>,
    {
        Self::from_shape_vec_order(shape, v, Order::ColumnMajor)
    }

    /// Create an array with the given shape from a vector whose elements are
    /// listed in logical `order`.
    ///
    /// ```
    /// use ndrecycle::{Array, Order};
    ///
    /// let a = Array::from_shape_vec_order([2, 3], vec![1, 2, 3, 4, 5, 6], Order::RowMajor)
    ///     .unwrap();
    /// assert_eq!(a.get(&[0, 1]), Some(&2));
    /// assert_eq!(a.as_slice(), &[1, 4, 2, 5, 3, 6]);
    /// ```
    pub fn from_shape_vec_order<Sh>(shape: Sh, v: Vec<A>, order: Order) -> Result<Self, ArrayError>
    where
        Sh: Into<Shape>,
    {
        let shape = shape.into();
        if v.len() != shape.size() {
            return Err(ArrayError::DataLengthMismatch {
                shape,
                len: v.len(),
            });
        }
        let data = match order {
            Order::ColumnMajor => v,
            Order::RowMajor => layout::from_row_major(v, &shape),
        };
        let names = AxisNames::unnamed(shape.ndim());
        Ok(Array::from_parts(data, shape, names))
    }

    /// Replace all axis names.
    ///
    /// **Errors** if a named axis does not have one name per position.
    pub fn with_names(self, names: AxisNames) -> Result<Self, ArrayError> {
        names.check(&self.shape)?;
        Ok(Array { names, ..self })
    }

    /// Name the positions along `axis`.
    ///
    /// ```
    /// use ndrecycle::{Array, Axis};
    ///
    /// let a = Array::from_vec(vec![1, 2, 3])
    ///     .with_axis_names(Axis(0), ["a", "b", "c"])
    ///     .unwrap();
    /// assert_eq!(a.names().position(Axis(0), "b"), Some(1));
    /// ```
    pub fn with_axis_names<I, S>(mut self, axis: Axis, names: I) -> Result<Self, ArrayError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if axis.index() >= self.ndim() {
            return Err(ArrayError::TooManyAxes {
                supplied: axis.index() + 1,
                ndim: self.ndim(),
            });
        }
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let extent = self.len_of(axis);
        if names.len() != extent {
            return Err(ArrayError::NameLengthMismatch {
                axis,
                names: names.len(),
                extent,
            });
        }
        self.names.set_axis(axis, Some(names));
        Ok(self)
    }

    /// Remove the names along `axis`. Out of bounds axes are ignored.
    pub fn without_axis_names(mut self, axis: Axis) -> Self {
        if axis.index() < self.ndim() {
            self.names.set_axis(axis, None);
        }
        self
    }
}

impl<A: Clone> Array<A> {
    /// Create an array with copies of `elem`.
    ///
    /// ```
    /// use ndrecycle::Array;
    ///
    /// let a = Array::from_elem([2, 0], 1.);
    /// assert!(a.is_empty());
    /// ```
    pub fn from_elem<Sh>(shape: Sh, elem: A) -> Self
    where
        Sh: Into<Shape>,
    {
        let shape = shape.into();
        let data = vec![elem; shape.size()];
        let names = AxisNames::unnamed(shape.ndim());
        Array::from_parts(data, shape, names)
    }
}

impl<A: Clone + Zero> Array<A> {
    /// Create an array filled with zeros.
    pub fn zeros<Sh>(shape: Sh) -> Self
    where
        Sh: Into<Shape>,
    {
        Self::from_elem(shape, A::zero())
    }
}

impl<A> From<Vec<A>> for Array<A> {
    fn from(v: Vec<A>) -> Self {
        Array::from_vec(v)
    }
}
