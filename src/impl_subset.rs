// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Subset, slice, extract and yank, with their assignment counterparts.
//!
//! Reads and writes share one resolution routine per operation, so a write
//! always lands on exactly the region the matching read returns. Writes are
//! staged completely (resolve, cast, broadcast) before the buffer is touched.

use crate::cast::{cast_array, CastFrom};
use crate::error::ArrayError;
use crate::index::{resolve, resolve_flat, IndexSpec, ResolvedIndex};
use crate::{layout, names};
use crate::{Array, Axis, AxisNames, Shape};

/// Exclusive access to the elements of a target region for the duration of
/// one assignment.
struct WriteLease<'a, A> {
    data: &'a mut [A],
    offsets: Vec<usize>,
}

impl<'a, A> WriteLease<'a, A> {
    fn acquire(data: &'a mut [A], offsets: Vec<usize>) -> Self {
        WriteLease { data, offsets }
    }

    /// Store `values`, one per target offset, in order.
    fn commit(self, values: Vec<A>) {
        debug_assert_eq!(self.offsets.len(), values.len());
        tracing::trace!(elements = values.len(), "commit write");
        for (o, v) in self.offsets.into_iter().zip(values) {
            self.data[o] = v;
        }
    }
}

/// Shape of the region addressed by `resolved`.
fn region_shape(resolved: &[ResolvedIndex]) -> Shape {
    Shape::new(resolved.iter().map(ResolvedIndex::len).collect())
}

/// Replace the axis `axis` of an all-`Entire` list with `spec`.
fn single_axis_specs(
    spec: IndexSpec,
    axis: Axis,
    ndim: usize,
) -> Result<Vec<IndexSpec>, ArrayError> {
    if axis.index() >= ndim {
        return Err(ArrayError::TooManyAxes {
            supplied: axis.index() + 1,
            ndim,
        });
    }
    let mut specs = vec![IndexSpec::Entire; ndim];
    specs[axis.index()] = spec;
    Ok(specs)
}

/// # Subsetting
impl<A: Clone> Array<A> {
    /// The region addressed by already resolved indices, keeping every axis.
    pub(crate) fn select(&self, resolved: &[ResolvedIndex]) -> Array<A> {
        let offsets = layout::region_offsets(&self.shape, resolved);
        let data = layout::gather(&self.data, &offsets);
        let names = names::subset(&self.names, resolved);
        Array::from_parts(data, region_shape(resolved), names)
    }

    /// Select a region, keeping every axis, even those with a single
    /// selected position.
    ///
    /// `specs` may be shorter than the number of axes; the remaining axes are
    /// selected entirely. See [`resolve`] for the full rules.
    ///
    /// **Errors** if the specifications do not resolve.
    ///
    /// ```
    /// use ndrecycle::{idx, Array};
    ///
    /// let a = Array::from_shape_vec([2, 2, 2], (1..=8).collect()).unwrap();
    /// let s = a.subset(&idx![1, .., ..]).unwrap();
    /// assert_eq!(s.shape(), &[1, 2, 2]);
    /// assert_eq!(s.as_slice(), &[1, 3, 5, 7]);
    /// ```
    pub fn subset(&self, specs: &[IndexSpec]) -> Result<Array<A>, ArrayError> {
        let resolved = resolve(specs, &self.shape, &self.names)?;
        Ok(self.select(&resolved))
    }

    /// Write `value` into the region [`subset`](Self::subset) would read.
    ///
    /// The value is cast to the element type and broadcast to the shape of
    /// the region. On error the array is left unchanged.
    ///
    /// ```
    /// use ndrecycle::{idx, Array, IndexSpec};
    ///
    /// let mut a = Array::from_shape_vec([3, 2], vec![1, 2, 3, 4, 5, 6]).unwrap();
    /// let v = Array::from_shape_vec([1, 1], vec![0]).unwrap();
    /// a.subset_assign(&[IndexSpec::Entire, IndexSpec::at(1)], &v).unwrap();
    /// assert_eq!(a.as_slice(), &[0, 0, 0, 4, 5, 6]);
    /// ```
    pub fn subset_assign<B>(&mut self, specs: &[IndexSpec], value: &Array<B>) -> Result<(), ArrayError>
    where
        A: CastFrom<B>,
    {
        let resolved = resolve(specs, &self.shape, &self.names)?;
        let offsets = layout::region_offsets(&self.shape, &resolved);
        let lease = WriteLease::acquire(&mut self.data, offsets);
        let value = cast_array::<A, B>(value)?.conform_to(&region_shape(&resolved))?;
        lease.commit(value.data);
        Ok(())
    }

    /// Subset along `axis` only; every other axis is selected entirely.
    ///
    /// ```
    /// use ndrecycle::{Array, Axis};
    ///
    /// let a = Array::from_shape_vec([2, 3], vec![1, 2, 3, 4, 5, 6]).unwrap();
    /// let s = a.slice(Axis(1), -2).unwrap();
    /// assert_eq!(s.shape(), &[2, 2]);
    /// assert_eq!(s.as_slice(), &[1, 2, 5, 6]);
    /// ```
    pub fn slice<I>(&self, axis: Axis, positions: I) -> Result<Array<A>, ArrayError>
    where
        I: Into<IndexSpec>,
    {
        let specs = single_axis_specs(positions.into(), axis, self.ndim())?;
        self.subset(&specs)
    }

    /// Write `value` into the region [`slice`](Self::slice) would read.
    pub fn slice_assign<I, B>(
        &mut self,
        axis: Axis,
        positions: I,
        value: &Array<B>,
    ) -> Result<(), ArrayError>
    where
        I: Into<IndexSpec>,
        A: CastFrom<B>,
    {
        let specs = single_axis_specs(positions.into(), axis, self.ndim())?;
        self.subset_assign(&specs, value)
    }

    /// Index the array as one flat sequence in storage order, returning a
    /// one-dimensional array.
    ///
    /// Positions are 1-based into the flattened array and a mask must have
    /// length 1 or the number of elements. Names are kept only when the
    /// array already was one-dimensional.
    ///
    /// ```
    /// use ndrecycle::{Array, IndexSpec};
    ///
    /// let a = Array::from_shape_vec([2, 2, 2], (1..=8).collect()).unwrap();
    /// let all = a.yank(&IndexSpec::from(true)).unwrap();
    /// assert_eq!(all.shape(), &[8]);
    /// let ends = a.yank(&IndexSpec::Positions(vec![1, 8])).unwrap();
    /// assert_eq!(ends.as_slice(), &[1, 8]);
    /// ```
    pub fn yank(&self, spec: &IndexSpec) -> Result<Array<A>, ArrayError> {
        let resolved = resolve_flat(spec, self.len())?;
        let data: Vec<A> = resolved.iter().map(|o| self.data[o].clone()).collect();
        let names = if self.ndim() == 1 {
            names::subset(&self.names, std::slice::from_ref(&resolved))
        } else {
            AxisNames::unnamed(1)
        };
        let shape = Shape::from(data.len());
        Ok(Array::from_parts(data, shape, names))
    }

    /// [`yank`](Self::yank) with a logical array as the mask.
    ///
    /// The mask is read in storage order, so a mask of the array's own shape
    /// selects the elements where it is `true`.
    pub fn yank_mask(&self, mask: &Array<bool>) -> Result<Array<A>, ArrayError> {
        self.yank(&IndexSpec::from(mask))
    }

    /// Write `value` into the positions [`yank`](Self::yank) would read.
    ///
    /// The value is flattened, cast, and recycled to the number of selected
    /// positions.
    pub fn yank_assign<B>(&mut self, spec: &IndexSpec, value: &Array<B>) -> Result<(), ArrayError>
    where
        A: CastFrom<B>,
    {
        let offsets = resolve_flat(spec, self.len())?.to_vec();
        let target = Shape::from(offsets.len());
        let lease = WriteLease::acquire(&mut self.data, offsets);
        let value = flatten(cast_array::<A, B>(value)?).conform_to(&target)?;
        lease.commit(value.data);
        Ok(())
    }

    /// Select like [`subset`](Self::subset), but return the elements as a
    /// flat, unnamed one-dimensional array.
    ///
    /// ```
    /// use ndrecycle::{idx, Array};
    ///
    /// let a = Array::from_shape_vec([2, 3], vec![1, 2, 3, 4, 5, 6]).unwrap();
    /// let e = a.extract(&idx![2, 2..=3]).unwrap();
    /// assert_eq!(e.shape(), &[2]);
    /// assert_eq!(e.as_slice(), &[4, 6]);
    /// ```
    pub fn extract(&self, specs: &[IndexSpec]) -> Result<Array<A>, ArrayError> {
        Ok(flatten(self.subset(specs)?))
    }

    /// Write `value` into the region [`extract`](Self::extract) would read.
    ///
    /// The value is flattened, cast, and recycled to the number of selected
    /// elements.
    pub fn extract_assign<B>(&mut self, specs: &[IndexSpec], value: &Array<B>) -> Result<(), ArrayError>
    where
        A: CastFrom<B>,
    {
        let resolved = resolve(specs, &self.shape, &self.names)?;
        let offsets = layout::region_offsets(&self.shape, &resolved);
        let target = Shape::from(offsets.len());
        let lease = WriteLease::acquire(&mut self.data, offsets);
        let value = flatten(cast_array::<A, B>(value)?).conform_to(&target)?;
        lease.commit(value.data);
        Ok(())
    }

    /// Return the single element addressed by `specs`.
    ///
    /// **Errors** with [`ArrayError::NonScalarSubscript`] listing every axis
    /// that does not resolve to exactly one position.
    ///
    /// ```
    /// use ndrecycle::{idx, Array, Axis, ArrayError};
    ///
    /// let a = Array::from_shape_vec([2, 2], vec![1, 2, 3, 4]).unwrap();
    /// assert_eq!(a.extract_one(&idx![1, 2]), Ok(&3));
    /// assert_eq!(
    ///     a.extract_one(&idx![1..=2, 1]),
    ///     Err(ArrayError::NonScalarSubscript { axes: vec![(Axis(0), 2)] })
    /// );
    /// ```
    pub fn extract_one(&self, specs: &[IndexSpec]) -> Result<&A, ArrayError> {
        let offset = self.scalar_offset(specs)?;
        Ok(&self.data[offset])
    }

    /// Write a single element at the position
    /// [`extract_one`](Self::extract_one) would read.
    pub fn extract_one_assign<B>(&mut self, specs: &[IndexSpec], value: B) -> Result<(), ArrayError>
    where
        A: CastFrom<B>,
    {
        let offset = self.scalar_offset(specs)?;
        let lease = WriteLease::acquire(&mut self.data, vec![offset]);
        let value = cast_array::<A, B>(&Array::from_vec(vec![value]))?;
        lease.commit(value.data);
        Ok(())
    }

    fn scalar_offset(&self, specs: &[IndexSpec]) -> Result<usize, ArrayError> {
        let resolved = resolve(specs, &self.shape, &self.names)?;
        let offending: Vec<(Axis, usize)> = resolved
            .iter()
            .enumerate()
            .filter(|(_, index)| index.len() != 1)
            .map(|(i, index)| (Axis(i), index.len()))
            .collect();
        if !offending.is_empty() {
            return Err(ArrayError::NonScalarSubscript { axes: offending });
        }
        let offsets = layout::region_offsets(&self.shape, &resolved);
        debug_assert_eq!(offsets.len(), 1);
        Ok(offsets[0])
    }
}

/// The same elements as an unnamed one-dimensional array.
fn flatten<A>(array: Array<A>) -> Array<A> {
    let shape = Shape::from(array.len());
    Array::from_parts(array.data, shape, AxisNames::unnamed(1))
}
