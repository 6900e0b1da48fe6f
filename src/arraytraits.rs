// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::hash;

use crate::Array;

/// Return `true` if the shapes, axis names and all elements of `self` and
/// `other` are equal. Return `false` otherwise.
impl<A, B> PartialEq<Array<B>> for Array<A>
where A: PartialEq<B>
{
    fn eq(&self, other: &Array<B>) -> bool {
        self.shape == other.shape
            && self.names == other.names
            && self.data.len() == other.data.len()
            && self.data.iter().zip(&other.data).all(|(a, b)| a == b)
    }
}

impl<A: Eq> Eq for Array<A> {}

impl<A: hash::Hash> hash::Hash for Array<A> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.shape.hash(state);
        self.names.hash(state);
        self.data.hash(state);
    }
}
