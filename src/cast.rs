// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::any::type_name;

use num_traits::NumCast;

use crate::error::ArrayError;
use crate::Array;

/// Element conversion used before a value is written into an array.
///
/// Numeric conversions are checked: a value that does not fit the target
/// type fails instead of wrapping.
pub trait CastFrom<B>: Sized {
    /// Convert `value`, or return `None` if it cannot be represented.
    fn cast_from(value: &B) -> Option<Self>;
}

macro_rules! impl_cast_numeric {
    (@from [$($from:ty),*] $to:tt) => {
        $(
            impl_cast_numeric!(@to $from, $to);

            impl CastFrom<bool> for $from {
                #[inline]
                fn cast_from(value: &bool) -> Option<$from> {
                    <$from as NumCast>::from(*value as u8)
                }
            }
        )*
    };
    (@to $from:ty, [$($to:ty),*]) => {
        $(
            impl CastFrom<$from> for $to {
                #[inline]
                fn cast_from(value: &$from) -> Option<$to> {
                    <$to as NumCast>::from(*value)
                }
            }
        )*
    };
    ($($t:ty),*) => {
        impl_cast_numeric!(@from [$($t),*] [$($t),*]);
    };
}

impl_cast_numeric!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl CastFrom<bool> for bool {
    #[inline]
    fn cast_from(value: &bool) -> Option<bool> {
        Some(*value)
    }
}

impl CastFrom<String> for String {
    #[inline]
    fn cast_from(value: &String) -> Option<String> {
        Some(value.clone())
    }
}

impl<'a> CastFrom<&'a str> for String {
    #[inline]
    fn cast_from(value: &&'a str) -> Option<String> {
        Some(value.to_string())
    }
}

/// Cast every element of `value`, keeping its shape and names.
pub(crate) fn cast_array<A, B>(value: &Array<B>) -> Result<Array<A>, ArrayError>
where
    A: CastFrom<B>,
{
    let data = value
        .iter()
        .enumerate()
        .map(|(position, elt)| {
            A::cast_from(elt).ok_or_else(|| {
                tracing::debug!(position, from = type_name::<B>(), to = type_name::<A>(), "cast failed");
                ArrayError::Cast {
                    from: type_name::<B>(),
                    to: type_name::<A>(),
                    position,
                }
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(value.with_data(data))
}
