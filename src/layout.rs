// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Low level buffer relayout.
//!
//! Everything here works on plain column-major buffers and trusts its
//! caller: shapes have already been validated by the shape algebra.

use crate::index::ResolvedIndex;
use crate::Shape;

/// Buffer offsets of the region addressed by `resolved`, in column-major
/// order of the region (first axis fastest).
pub(crate) fn region_offsets(shape: &Shape, resolved: &[ResolvedIndex]) -> Vec<usize> {
    debug_assert_eq!(shape.ndim(), resolved.len());
    let mut offsets = vec![0];
    for (index, stride) in resolved.iter().zip(shape.strides()) {
        let mut next = Vec::with_capacity(offsets.len() * index.len());
        for position in index.iter() {
            next.extend(offsets.iter().map(|&o| o + position * stride));
        }
        offsets = next;
    }
    offsets
}

/// Copy the elements at `offsets` out of `data`.
#[inline]
pub(crate) fn gather<A: Clone>(data: &[A], offsets: &[usize]) -> Vec<A> {
    offsets.iter().map(|&o| data[o].clone()).collect()
}

/// Repeat the axes of extent 1 in `data` (shape `from`) to reach shape `to`.
///
/// `from` and `to` must have equal rank and be recyclable, with any axis that
/// is empty in `from` also empty in `to`.
pub(crate) fn expand_layout<A: Clone>(data: &[A], from: &Shape, to: &Shape) -> Vec<A> {
    debug_assert_eq!(from.ndim(), to.ndim());
    let resolved: Vec<ResolvedIndex> = from
        .iter()
        .zip(to.iter())
        .map(|(&f, &t)| {
            if f == t {
                ResolvedIndex::Entire(t)
            } else {
                debug_assert!(f == 1 || t == 0);
                ResolvedIndex::Positions(vec![0; t])
            }
        })
        .collect();
    gather(data, &region_offsets(from, &resolved))
}

/// Buffer offsets of `shape` visited in row-major logical order.
pub(crate) fn row_major_offsets(shape: &Shape) -> Vec<usize> {
    let strides = shape.strides();
    let mut offsets = vec![0];
    for (&n, &stride) in shape.iter().zip(&strides) {
        let mut next = Vec::with_capacity(offsets.len() * n);
        for &o in &offsets {
            next.extend((0..n).map(|i| o + i * stride));
        }
        offsets = next;
    }
    offsets
}

/// Lay out row-major `data` as a column-major buffer of shape `shape`.
pub(crate) fn from_row_major<A>(data: Vec<A>, shape: &Shape) -> Vec<A> {
    let offsets = row_major_offsets(shape);
    let mut slots: Vec<Option<A>> = (0..data.len()).map(|_| None).collect();
    for (elt, o) in data.into_iter().zip(offsets) {
        slots[o] = Some(elt);
    }
    slots.into_iter().flatten().collect()
}
