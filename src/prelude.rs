// Copyright 2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! ndrecycle prelude.
//!
//! This module contains the most used types, traits and macros that you can
//! import easily as a group.
//!
//! ```
//! use ndrecycle::prelude::*;
//!
//! let a = Array::from_vec(vec![1, 2, 3]);
//! assert_eq!(a.subset(&idx![-2]).unwrap().as_slice(), &[1, 3]);
//! ```

#[doc(no_inline)]
pub use crate::{Array, ArrayError, Axis, AxisNames, IndexSpec, Ix, Order, Shape};

#[doc(no_inline)]
pub use crate::{ArithOp, CastFrom, CmpOp, NumElement, Operand};

#[doc(no_inline)]
pub use crate::{broadcast_all, common_shape};

pub use crate::idx;
