// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Elementwise compute on equally shaped buffers.

use std::fmt;

use itertools::izip;
use num_traits::{Float, Num, One, ToPrimitive, Zero};

/// Arithmetic operators for [`Array::apply`](crate::Array::apply).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
}

/// Comparison operators for [`Array::compare`](crate::Array::compare).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CmpOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

/// Elements that the arithmetic kernel can compute with.
pub trait NumElement: Clone + Num + PartialOrd + fmt::Debug {
    /// Raise `self` to the power `rhs`.
    fn pow(self, rhs: Self) -> Self;
}

macro_rules! impl_num_element_int {
    ($($t:ty),*) => {
        $(
            impl NumElement for $t {
                /// Negative exponents truncate toward zero, as integer
                /// division does; zero to a negative power is zero.
                #[inline]
                fn pow(self, rhs: Self) -> Self {
                    match rhs.to_usize() {
                        Some(exp) => num_traits::pow(self, exp),
                        // only reachable for signed types
                        None if self.is_one() => self,
                        None if (self + <$t>::one()).is_zero() => {
                            if (rhs % 2).is_zero() { <$t>::one() } else { self }
                        }
                        None => <$t>::zero(),
                    }
                }
            }
        )*
    };
}

macro_rules! impl_num_element_float {
    ($($t:ty),*) => {
        $(
            impl NumElement for $t {
                #[inline]
                fn pow(self, rhs: Self) -> Self {
                    Float::powf(self, rhs)
                }
            }
        )*
    };
}

impl_num_element_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_num_element_float!(f32, f64);

impl ArithOp {
    /// Apply the operator to one pair of elements.
    ///
    /// **Panics** if the element operation does, e.g. on integer division
    /// by zero.
    #[inline]
    pub fn apply<A: NumElement>(self, a: A, b: A) -> A {
        match self {
            ArithOp::Add => a + b,
            ArithOp::Sub => a - b,
            ArithOp::Mul => a * b,
            ArithOp::Div => a / b,
            ArithOp::Rem => a % b,
            ArithOp::Pow => a.pow(b),
        }
    }
}

impl CmpOp {
    #[inline]
    pub fn apply<A: PartialOrd>(self, a: &A, b: &A) -> bool {
        match self {
            CmpOp::Eq => a == b,
            CmpOp::Ne => a != b,
            CmpOp::Lt => a < b,
            CmpOp::Le => a <= b,
            CmpOp::Gt => a > b,
            CmpOp::Ge => a >= b,
        }
    }
}

/// Apply `op` pairwise. Both buffers have the same shape.
pub(crate) fn elementwise_apply<A: NumElement>(op: ArithOp, a: &[A], b: &[A]) -> Vec<A> {
    debug_assert_eq!(a.len(), b.len());
    izip!(a, b)
        .map(|(x, y)| op.apply(x.clone(), y.clone()))
        .collect()
}

/// Compare pairwise. Both buffers have the same shape.
pub(crate) fn compare_apply<A: PartialOrd>(op: CmpOp, a: &[A], b: &[A]) -> Vec<bool> {
    debug_assert_eq!(a.len(), b.len());
    izip!(a, b).map(|(x, y)| op.apply(x, y)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arith() {
        let out = elementwise_apply(ArithOp::Sub, &[5, 7], &[1, 2]);
        assert_eq!(out, vec![4, 5]);
        let out = elementwise_apply(ArithOp::Pow, &[2, 3], &[3, 2]);
        assert_eq!(out, vec![8, 9]);
        let out = elementwise_apply(ArithOp::Pow, &[4.0f64], &[0.5]);
        assert_eq!(out, vec![2.0]);
    }

    #[test]
    fn negative_integer_exponent() {
        assert_eq!(NumElement::pow(2i32, -1), 0);
        assert_eq!(NumElement::pow(1i32, -3), 1);
        assert_eq!(NumElement::pow(-1i64, -3), -1);
        assert_eq!(NumElement::pow(-1i64, -2), 1);
        assert_eq!(NumElement::pow(0i8, -1), 0);
    }

    #[test]
    fn compare() {
        let out = compare_apply(CmpOp::Le, &[1, 2, 3], &[2, 2, 2]);
        assert_eq!(out, vec![true, true, false]);
    }
}
