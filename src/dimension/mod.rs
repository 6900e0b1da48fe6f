// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;
use std::ops::Deref;

pub use self::axis::Axis;
pub use self::broadcast::{common_shape, common_shape_all, extend_rank, validate_recyclable};

mod axis;
pub(crate) mod broadcast;
pub(crate) mod reshape;

/// Array index type
pub type Ix = usize;

/// The extents of an array, one per axis.
///
/// A shape may have rank zero, in which case it describes a single element
/// (the empty product is one). An extent of zero means the axis is empty.
///
/// ```
/// use ndrecycle::Shape;
///
/// let shape = Shape::from([2, 3]);
/// assert_eq!(shape.ndim(), 2);
/// assert_eq!(shape.size(), 6);
/// assert_eq!(shape.to_string(), "(2, 3)");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Shape(Vec<Ix>);

impl Shape {
    #[inline]
    pub fn new(extents: Vec<Ix>) -> Self {
        Shape(extents)
    }

    /// The rank zero shape.
    #[inline]
    pub fn scalar() -> Self {
        Shape(Vec::new())
    }

    /// Return the number of axes.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.0.len()
    }

    /// Return the total number of elements.
    #[inline]
    pub fn size(&self) -> usize {
        self.0.iter().product()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Ix] {
        &self.0
    }

    #[inline]
    pub fn into_vec(self) -> Vec<Ix> {
        self.0
    }

    /// Return the extent of `axis`.
    ///
    /// **Panics** if `axis` is out of bounds.
    #[inline]
    pub fn len_of(&self, axis: Axis) -> Ix {
        self.0[axis.index()]
    }

    /// Return `true` if some axis has extent zero.
    pub fn is_empty(&self) -> bool {
        self.0.iter().any(|&n| n == 0)
    }

    /// Column-major strides: the first axis is contiguous.
    pub(crate) fn strides(&self) -> Vec<usize> {
        let mut strides = Vec::with_capacity(self.ndim());
        let mut cum_prod = 1;
        for &n in &self.0 {
            strides.push(cum_prod);
            cum_prod *= n;
        }
        strides
    }

    /// Return the buffer offset of a zero-based multi-index, or `None` if it
    /// does not address an element of this shape.
    pub(crate) fn offset_of(&self, index: &[Ix]) -> Option<usize> {
        if index.len() != self.ndim() {
            return None;
        }
        let mut offset = 0;
        for ((&i, &n), s) in index.iter().zip(&self.0).zip(self.strides()) {
            if i >= n {
                return None;
            }
            offset += i * s;
        }
        Some(offset)
    }
}

impl Deref for Shape {
    type Target = [Ix];

    #[inline]
    fn deref(&self) -> &[Ix] {
        &self.0
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, n) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", n)?;
        }
        f.write_str(")")
    }
}

impl From<Vec<Ix>> for Shape {
    #[inline]
    fn from(extents: Vec<Ix>) -> Self {
        Shape(extents)
    }
}

impl<'a> From<&'a [Ix]> for Shape {
    #[inline]
    fn from(extents: &'a [Ix]) -> Self {
        Shape(extents.to_vec())
    }
}

impl<const N: usize> From<[Ix; N]> for Shape {
    #[inline]
    fn from(extents: [Ix; N]) -> Self {
        Shape(extents.to_vec())
    }
}

impl From<Ix> for Shape {
    #[inline]
    fn from(n: Ix) -> Self {
        Shape(vec![n])
    }
}

impl<'a> From<&'a Shape> for Shape {
    #[inline]
    fn from(shape: &'a Shape) -> Self {
        shape.clone()
    }
}
