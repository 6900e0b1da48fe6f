// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::borrow::Cow;

use crate::error::ArrayError;
use crate::kernel::{compare_apply, elementwise_apply, ArithOp, CmpOp, NumElement};
use crate::{common_shape, names};
use crate::{Array, Shape};

/// One side of a binary operation.
///
/// Plain scalars and slices are treated as one-dimensional arrays.
#[derive(Clone, Debug)]
pub enum Operand<'a, A> {
    Scalar(A),
    Native(&'a [A]),
    Array(&'a Array<A>),
}

impl<'a, A: Clone> Operand<'a, A> {
    fn into_array(self) -> Cow<'a, Array<A>> {
        match self {
            Operand::Scalar(a) => Cow::Owned(Array::from_vec(vec![a])),
            Operand::Native(v) => Cow::Owned(Array::from_vec(v.to_vec())),
            Operand::Array(a) => Cow::Borrowed(a),
        }
    }
}

impl<'a, A> From<&'a Array<A>> for Operand<'a, A> {
    fn from(a: &'a Array<A>) -> Self {
        Operand::Array(a)
    }
}

impl<'a, A> From<&'a [A]> for Operand<'a, A> {
    fn from(v: &'a [A]) -> Self {
        Operand::Native(v)
    }
}

/// Apply an arithmetic operator to two operands, broadcasting them to their
/// common shape.
///
/// **Panics** for integer elements wherever the element operation panics:
/// division or remainder by zero, and overflow in debug builds.
///
/// ```
/// use ndrecycle::{binary, Array, ArithOp, Operand};
///
/// let a = Array::from_shape_vec([2, 2], vec![1, 2, 3, 4]).unwrap();
/// let c = binary(ArithOp::Mul, Operand::Array(&a), Operand::Scalar(10)).unwrap();
/// assert_eq!(c.as_slice(), &[10, 20, 30, 40]);
/// ```
pub fn binary<A>(op: ArithOp, lhs: Operand<'_, A>, rhs: Operand<'_, A>) -> Result<Array<A>, ArrayError>
where
    A: NumElement,
{
    match (lhs, rhs) {
        (Operand::Scalar(a), Operand::Scalar(b)) => Ok(Array::from_vec(vec![op.apply(a, b)])),
        (Operand::Array(a), Operand::Scalar(b)) if a.ndim() > 0 => {
            Ok(a.map(|x| op.apply(x.clone(), b.clone())))
        }
        (Operand::Scalar(a), Operand::Array(b)) if b.ndim() > 0 => {
            Ok(b.map(|y| op.apply(a.clone(), y.clone())))
        }
        (lhs, rhs) => lhs.into_array().apply(op, &rhs.into_array()),
    }
}

/// Compare two operands elementwise, broadcasting them to their common shape.
pub fn compare<A>(op: CmpOp, lhs: Operand<'_, A>, rhs: Operand<'_, A>) -> Result<Array<bool>, ArrayError>
where
    A: Clone + PartialOrd,
{
    match (lhs, rhs) {
        (Operand::Scalar(a), Operand::Scalar(b)) => Ok(Array::from_vec(vec![op.apply(&a, &b)])),
        (Operand::Array(a), Operand::Scalar(b)) if a.ndim() > 0 => Ok(a.map(|x| op.apply(x, &b))),
        (Operand::Scalar(a), Operand::Array(b)) if b.ndim() > 0 => Ok(b.map(|y| op.apply(&a, y))),
        (lhs, rhs) => lhs.into_array().compare(op, &rhs.into_array()),
    }
}

/// Broadcast both arrays to their common shape; the names of the result
/// prefer `lhs` on each axis.
fn conform_pair<A: Clone>(lhs: &Array<A>, rhs: &Array<A>) -> Result<(Array<A>, Array<A>, Shape), ArrayError> {
    let shape = common_shape(&lhs.shape, &rhs.shape)?;
    Ok((lhs.broadcast(&shape)?, rhs.broadcast(&shape)?, shape))
}

/// # Arithmetic
impl<A: NumElement> Array<A> {
    /// Apply `op` elementwise after broadcasting both arrays to their common
    /// shape.
    ///
    /// **Errors** if the shapes are not recyclable to each other.<br>
    /// **Panics** for integer elements on division or remainder by zero, and
    /// on overflow in debug builds.
    ///
    /// ```
    /// use ndrecycle::{Array, ArithOp};
    ///
    /// let a = Array::from_shape_vec([2, 1], vec![1, 2]).unwrap();
    /// let b = Array::from_vec(vec![10, 20]).into_shape([1, 2]).unwrap();
    /// let c = a.apply(ArithOp::Add, &b).unwrap();
    /// assert_eq!(c.shape(), &[2, 2]);
    /// assert_eq!(c.as_slice(), &[11, 12, 21, 22]);
    /// ```
    pub fn apply(&self, op: ArithOp, rhs: &Array<A>) -> Result<Array<A>, ArrayError> {
        let (l, r, shape) = conform_pair(self, rhs)?;
        let data = elementwise_apply(op, &l.data, &r.data);
        Ok(Array::from_parts(data, shape, names::merge(&l.names, &r.names)))
    }
}

/// # Comparison
impl<A: Clone + PartialOrd> Array<A> {
    /// Compare elementwise after broadcasting both arrays to their common
    /// shape.
    pub fn compare(&self, op: CmpOp, rhs: &Array<A>) -> Result<Array<bool>, ArrayError> {
        let (l, r, shape) = conform_pair(self, rhs)?;
        let data = compare_apply(op, &l.data, &r.data);
        Ok(Array::from_parts(data, shape, names::merge(&l.names, &r.names)))
    }
}
