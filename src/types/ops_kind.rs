// Copyright 2026 text-delta Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use serde_derive::{Deserialize, Serialize};
#[cfg(test)]
use std::fmt;

/// The three operation kinds of the delta format.
///
/// Inserts carry their text; retain and delete carry a length. A stored
/// length is always finite; serialized input with a fractional or negative
/// length is rejected by integer deserialization.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum OpKind {
    #[serde(rename = "insert")]
    Insert(String),
    #[serde(rename = "retain")]
    Retain(usize),
    #[serde(rename = "delete")]
    Delete(usize),
}

impl From<String> for OpKind {
    fn from(s: String) -> Self {
        OpKind::Insert(s)
    }
}

impl From<&str> for OpKind {
    fn from(s: &str) -> Self {
        OpKind::Insert(s.to_owned())
    }
}

#[cfg(test)]
impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpKind::Insert(u) => {
                write!(f, "Insert({u})")
            }
            OpKind::Retain(s) => {
                write!(f, "Retain({s})")
            }
            OpKind::Delete(b) => {
                write!(f, "Delete({b})")
            }
        }
    }
}
