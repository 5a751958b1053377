// Copyright 2026 text-delta Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

#[cfg(test)]
use crate::attributes::display_fmt;
use crate::attributes::Attributes;
use crate::error::Error;
use crate::types::attr_val::AttrVal;
use crate::types::ops_kind::OpKind;
use serde::{Deserialize, Serialize};
#[cfg(test)]
use std::fmt::{Display, Formatter};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub enum OpType {
    Delete,
    Retain,
    Insert,
}

/// # DeltaOperation
///
/// A single operation of the delta format.
///
/// Insert text:
/// ```json
/// { "insert": "Text", "attributes": { "bold": true } }
/// ```
/// Insert a link:
/// ```json
/// { "insert": "Google", "attributes": { "link": "https://www.google.com" } }
/// ```
/// Keep 5 characters, formatting them italic:
/// ```json
/// { "retain": 5, "attributes": { "italic": true } }
/// ```
/// Remove 3 characters:
/// ```json
/// { "delete": 3 }
/// ```
///
/// Exactly one of the keys `insert`, `delete`, `retain` is present; the
/// optional sibling `attributes` carries the formatting map. A delete never
/// carries attributes.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct DeltaOperation {
    #[serde(flatten)]
    pub(crate) kind: OpKind,
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub(crate) attributes: Attributes,
}

impl DeltaOperation {
    pub fn insert<V: Into<String>>(value: V) -> Self {
        DeltaOperation {
            kind: OpKind::Insert(value.into()),
            attributes: Attributes::default(),
        }
    }

    pub fn insert_attr<V: Into<String>>(value: V, attr: Attributes) -> Self {
        DeltaOperation {
            kind: OpKind::Insert(value.into()),
            attributes: attr,
        }
    }

    pub fn retain(value: usize) -> Self {
        DeltaOperation {
            kind: OpKind::Retain(value),
            attributes: Attributes::default(),
        }
    }

    pub fn retain_attr(value: usize, attr: Attributes) -> Self {
        DeltaOperation {
            kind: OpKind::Retain(value),
            attributes: attr,
        }
    }

    pub fn delete(value: usize) -> Self {
        DeltaOperation {
            kind: OpKind::Delete(value),
            attributes: Attributes::default(),
        }
    }

    /// # add_attr()
    /// set one attribute in a shorthand way
    /// ```rust
    /// use text_delta::operations::DeltaOperation;
    /// let mut op = DeltaOperation::insert("Hallo");
    /// op.add_attr("font", "green");
    /// op.add_attr("size", 10);
    /// ```
    pub fn add_attr<K: Into<String>, V: Into<AttrVal>>(&mut self, key: K, value: V) {
        self.attributes.insert(key.into(), value.into());
    }

    /// # set_attributes()
    /// set multiple attributes at once
    pub fn set_attributes<V: Into<Attributes>>(&mut self, values: V) {
        self.attributes = values.into();
    }

    /// # op_len()
    ///
    /// The length of the operation, for an insert measured in bytes of its
    /// text.
    pub fn op_len(&self) -> usize {
        match &self.kind {
            OpKind::Delete(len) | OpKind::Retain(len) => *len,
            OpKind::Insert(val) => val.len(),
        }
    }

    pub fn op_type(&self) -> OpType {
        match self.kind {
            OpKind::Insert(_) => OpType::Insert,
            OpKind::Delete(_) => OpType::Delete,
            OpKind::Retain(_) => OpType::Retain,
        }
    }

    /// # string_val()
    ///
    /// The inserted text of an insert operation.
    ///
    /// # Errors
    /// `GetValueWrongType` when called on a retain or delete
    pub fn string_val(&self) -> Result<&str, Error> {
        if let OpKind::Insert(val) = &self.kind {
            return Ok(val);
        }
        Err(Error::GetValueWrongType {
            tpe: "string".to_string(),
        })
    }

    /// # set_op_kind()
    ///
    /// Sets the operation kind for this delta operation.
    pub fn set_op_kind(&mut self, s: OpKind) {
        self.kind = s;
    }

    /// # remove_attribute()
    ///
    /// Removes the attribute that is associated with the given key value.
    pub fn remove_attribute(&mut self, key: &str) {
        self.attributes.remove(key);
    }

    pub fn get_attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn get_op_kind(&self) -> &OpKind {
        &self.kind
    }

    fn is_same_attributes(&self, other: &DeltaOperation) -> bool {
        self.attributes.is_equal(&other.attributes)
    }

    pub fn is_same_operation(&self, other: &DeltaOperation) -> bool {
        self.kind == other.kind
    }

    /// # is_equal()
    ///
    /// Two delta operations are considered equal if both the operation, and the attributes have the same values.
    /// ```
    /// use text_delta::operations::DeltaOperation;
    /// let a = DeltaOperation::insert("hello");
    /// let b = a.clone();
    /// assert!(a.is_equal(&b));
    /// ```
    pub fn is_equal(&self, other: &DeltaOperation) -> bool {
        self.is_same_operation(other) && self.is_same_attributes(other)
    }

    /// # is_empty()
    /// Returns true when the operation has zero length
    pub fn is_empty(&self) -> bool {
        self.op_len() == 0
    }
}

//Note display is one form of serialization, but we can not read it back.
//Use the json serializer instead
#[cfg(test)]
impl Display for DeltaOperation {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match &self.kind {
            OpKind::Delete(num) => {
                write!(f, "Operation -> Delete[{num}]")
            }
            OpKind::Retain(num) => {
                if self.attributes.is_empty() {
                    write!(f, "Operation -> Retain[{num}]")
                } else {
                    write!(
                        f,
                        "Operation -> Retain[{}], {}",
                        num,
                        display_fmt(&self.attributes)
                    )
                }
            }
            OpKind::Insert(val) => {
                if self.attributes.is_empty() {
                    write!(f, r##"Operation -> Insert[{val}]"##)
                } else {
                    write!(
                        f,
                        r##"Operation -> Insert[{}], {}"##,
                        val,
                        display_fmt(&self.attributes)
                    )
                }
            }
        }
    }
}
