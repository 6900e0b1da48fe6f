// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![crate_name = "ndrecycle"]
#![doc(html_root_url = "https://docs.rs/ndrecycle/0.1/")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(
    clippy::many_single_char_names,
    clippy::deref_addrof,
    clippy::unreadable_literal,
    clippy::len_without_is_empty
)]

//! The `ndrecycle` crate provides an n-dimensional array with broadcasting
//! ("recycling") shape algebra, optional per-axis names, and subset and
//! assignment operations that never drop an axis unless asked to.
//!
//! - [`Array`]: an owned, column-major buffer with a [`Shape`] and
//!   [`AxisNames`].
//! - Shape algebra: [`extend_rank`], [`common_shape`] and
//!   [`validate_recyclable`]. Shapes are compared left-aligned; a shape of
//!   lower rank gets axes of extent 1 appended on the right. An axis of
//!   extent 0 stays empty through every broadcast.
//! - Broadcasting: [`Array::broadcast`] repeats axes of extent 1.
//! - Indexing: per-axis [`IndexSpec`]s (1-based positions, negative
//!   exclusions, logical masks, names) are resolved once and shared by reads
//!   and writes:
//!   - [`Array::subset`] keeps every axis,
//!   - [`Array::slice`] subsets along a single axis,
//!   - [`Array::extract`] returns the selected elements as a flat array,
//!   - [`Array::yank`] indexes the flattened array,
//!   - and each has an `_assign` counterpart that casts and broadcasts the
//!     value before writing.
//! - Reshaping: [`Array::reshape`] and [`Array::squeeze`].
//! - Binary operations: [`Array::apply`], [`Array::compare`] and the
//!   operand dispatch in [`binary`] and [`compare`].
//!
//! ```
//! use ndrecycle::{idx, Array};
//!
//! // 2 x 2, column-major: [[1, 3], [2, 4]]
//! let a = Array::from_shape_vec([2, 2], vec![1, 2, 3, 4]).unwrap();
//!
//! let b = a.broadcast([2, 2, 3]).unwrap();
//! assert_eq!(b.shape(), &[2, 2, 3]);
//!
//! // Subsetting keeps single-element axes
//! let row = a.subset(&idx![1, ..]).unwrap();
//! assert_eq!(row.shape(), &[1, 2]);
//! assert_eq!(row.as_slice(), &[1, 3]);
//! ```
//!
//! ## Crate Feature Flags
//!
//! - `serde`: `Serialize` and `Deserialize` for `Array`, `Shape` and
//!   `AxisNames`.
//! - `approx`: approximate equality (`AbsDiffEq`, `RelativeEq`, `UlpsEq`)
//!   for arrays.

use std::slice;

pub use crate::cast::CastFrom;
pub use crate::dimension::{
    common_shape, common_shape_all, extend_rank, validate_recyclable, Axis, Ix, Shape,
};
pub use crate::error::{ArrayError, ErrorKind};
pub use crate::impl_broadcast::broadcast_all;
pub use crate::impl_ops::{binary, compare, Operand};
pub use crate::index::{resolve, resolve_axis, resolve_flat, IndexSpec, ResolvedIndex};
pub use crate::kernel::{ArithOp, CmpOp, NumElement};
pub use crate::names::AxisNames;
pub use crate::order::Order;

mod cast;
mod dimension;
mod error;
mod index;
mod kernel;
mod layout;
mod names;
mod order;

mod impl_broadcast;
mod impl_constructors;
mod impl_ops;
mod impl_reshape;
mod impl_subset;

mod arraytraits;

#[cfg(feature = "approx")]
mod array_approx;
#[cfg(feature = "serde")]
mod array_serde;

pub mod prelude;

/// The order in which every [`Array`] stores its elements.
pub const STORAGE_ORDER: Order = Order::ColumnMajor;

/// An n-dimensional array.
///
/// The array owns a contiguous buffer of elements stored in column major
/// order (the first axis varies fastest), a [`Shape`], and [`AxisNames`].
/// The buffer length always equals the shape's size, and named axes always
/// have one name per position.
///
/// Operations never mutate the shape or names of an existing array in place;
/// they build a new array. Only the `_assign` methods write into the buffer,
/// and they hold `&mut self` for the whole resolve, cast, broadcast and write
/// sequence.
#[derive(Clone, Debug)]
pub struct Array<A> {
    data: Vec<A>,
    shape: Shape,
    names: AxisNames,
}

impl<A> Array<A> {
    /// Assemble an array from checked parts.
    pub(crate) fn from_parts(data: Vec<A>, shape: Shape, names: AxisNames) -> Self {
        debug_assert_eq!(data.len(), shape.size());
        debug_assert_eq!(names.ndim(), shape.ndim());
        Array { data, shape, names }
    }

    /// Return the shape of the array as a slice.
    #[inline]
    pub fn shape(&self) -> &[Ix] {
        &self.shape
    }

    /// Return the shape of the array as a `Shape`.
    #[inline]
    pub fn raw_shape(&self) -> &Shape {
        &self.shape
    }

    /// Return the number of axes.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.ndim()
    }

    /// Return the total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Return the extent of `axis`.
    ///
    /// **Panics** if `axis` is out of bounds.
    #[inline]
    pub fn len_of(&self, axis: Axis) -> usize {
        self.shape.len_of(axis)
    }

    #[inline]
    pub fn names(&self) -> &AxisNames {
        &self.names
    }

    /// Return the names along `axis`, if it is named.
    #[inline]
    pub fn axis_names(&self, axis: Axis) -> Option<&[String]> {
        self.names.axis(axis)
    }

    /// Return the buffer in storage (column major) order.
    #[inline]
    pub fn as_slice(&self) -> &[A] {
        &self.data
    }

    #[inline]
    pub fn into_vec(self) -> Vec<A> {
        self.data
    }

    /// Iterate over the elements in storage order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, A> {
        self.data.iter()
    }

    /// Return a reference to the element at zero-based `index`, or `None`
    /// if it is out of bounds.
    pub fn get(&self, index: &[Ix]) -> Option<&A> {
        self.shape.offset_of(index).map(|o| &self.data[o])
    }

    /// Return a mutable reference to the element at zero-based `index`.
    pub fn get_mut(&mut self, index: &[Ix]) -> Option<&mut A> {
        let offset = self.shape.offset_of(index)?;
        Some(&mut self.data[offset])
    }

    /// Apply `f` to every element, keeping shape and names.
    pub fn map<B, F>(&self, f: F) -> Array<B>
    where
        F: FnMut(&A) -> B,
    {
        self.with_data(self.data.iter().map(f).collect())
    }

    /// Same shape and names, different buffer.
    pub(crate) fn with_data<B>(&self, data: Vec<B>) -> Array<B> {
        Array::from_parts(data, self.shape.clone(), self.names.clone())
    }

    /// The same array with axes of extent 1 appended up to rank `ndim`.
    /// Column major storage makes this a relabelling of the shape.
    pub(crate) fn into_rank(self, ndim: usize) -> Result<Self, ArrayError> {
        let shape = extend_rank(&self.shape, ndim)?;
        let names = names::extend(&self.names, ndim);
        Ok(Array::from_parts(self.data, shape, names))
    }
}

impl<A: Clone> Array<A> {
    /// Return the elements as a vector in the given logical `order`.
    pub fn to_vec_order(&self, order: Order) -> Vec<A> {
        match order {
            Order::ColumnMajor => self.data.clone(),
            Order::RowMajor => layout::gather(&self.data, &layout::row_major_offsets(&self.shape)),
        }
    }
}

impl<'a, A> IntoIterator for &'a Array<A> {
    type Item = &'a A;
    type IntoIter = slice::Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
