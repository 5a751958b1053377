// Copyright 2026 text-delta Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use crate::attributes::Attributes;
use crate::operations::{DeltaOperation, OpType};
use crate::types::ops_kind::OpKind;
use serde_derive::{Deserialize, Serialize};
use std::cell::Cell;
#[cfg(test)]
use std::fmt::{Display, Formatter};

/// # Delta
///
/// Delta represents a document or a modification of a document as a sequence
/// of insert, delete and retain operations.
///
/// A Delta consisting of only "insert" operations is usually referred to as
/// a "document delta". When a delta also includes "retain" or "delete"
/// operations it is a "change delta".
///
/// The operation sequence is kept in a compact normal form by [`Delta::push`]:
/// no zero-length operations are stored, adjacent operations of the same kind
/// and attributes are merged, and an insert is always placed before an
/// adjacent delete.
///
/// A Delta serializes as a bare JSON array of its operations.
///
/// ```
/// use text_delta::delta::Delta;
/// use text_delta::operations::DeltaOperation;
///
/// let mut delta = Delta::default();
/// delta.retain(2);
/// delta.insert("Hallo World");
///
/// let delta: Delta = vec![
///     DeltaOperation::retain(2),
///     DeltaOperation::insert("Hallo World"),
/// ].into();
/// ```
#[derive(Clone, Default, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Delta {
    ops: Vec<DeltaOperation>,
    // Bumped on every structural mutation; iterators capture it on creation
    // and refuse to run once it moved on.
    #[serde(skip)]
    mod_count: Cell<u64>,
}

impl Delta {
    pub fn new(ops: Vec<DeltaOperation>) -> Self {
        Delta {
            ops,
            mod_count: Cell::new(0),
        }
    }

    pub(crate) fn mod_count(&self) -> u64 {
        self.mod_count.get()
    }

    fn bump(&self) {
        self.mod_count.set(self.mod_count.get() + 1);
    }

    #[cfg(test)]
    pub(crate) fn touch(&self) {
        self.bump();
    }

    /// # trim()
    ///
    /// Removes a trailing retain without attributes. Such a tail does not
    /// change the document the delta applies to.
    pub fn trim(&mut self) -> &mut Delta {
        if let Some(last_op) = self.ops.last() {
            if last_op.op_type() == OpType::Retain && last_op.get_attributes().is_empty() {
                self.ops.pop();
                self.bump();
            }
        }
        self
    }

    /// # insert()
    ///
    /// Append an insert operation without attributes.
    pub fn insert<S: Into<String>>(&mut self, value: S) {
        let op = DeltaOperation::insert(value);
        if op.op_len() == 0 {
            return;
        }
        self.push(op);
    }

    /// # insert_attr()
    ///
    /// Append an insert operation with attributes.
    pub fn insert_attr<S: Into<String>>(&mut self, value: S, attributes: Attributes) {
        let mut op = DeltaOperation::insert(value);
        if op.op_len() == 0 {
            return;
        }
        op.set_attributes(attributes);
        self.push(op);
    }

    /// # retain()
    ///
    /// Append a retain operation without attributes.
    pub fn retain(&mut self, length: usize) {
        if length == 0 {
            return;
        }
        self.push(DeltaOperation::retain(length));
    }

    /// # retain_attr()
    ///
    /// Append a retain operation with attributes.
    pub fn retain_attr(&mut self, length: usize, attributes: Attributes) {
        if length == 0 {
            return;
        }
        let mut op = DeltaOperation::retain(length);
        op.set_attributes(attributes);
        self.push(op);
    }

    /// # delete()
    ///
    /// Append a delete operation.
    pub fn delete(&mut self, length: usize) {
        if length == 0 {
            return;
        }
        self.push(DeltaOperation::delete(length));
    }

    /// # push()
    ///
    /// Add one operation to the end of the operations vector.
    ///
    /// Performs `compaction` by composing the operation with the current tail
    /// operation of this delta, when possible.
    ///
    /// For instance, if the current tail is <br>
    /// `insert('abc')` <br>
    /// and the pushed operation is <br>
    /// `insert('123')` <br>
    /// then the existing tail is replaced with <br>
    /// `insert('abc123')` <br>
    /// which is a compound result of the two operations.
    ///
    /// Zero-length operations are dropped. An insert pushed after a delete is
    /// placed before it; the applied result is identical either way and
    /// repeated insert/delete runs stay compacted.
    pub fn push(&mut self, new_op: DeltaOperation) {
        if new_op.is_empty() {
            return;
        }
        self.bump();
        let Some(last_op) = self.ops.pop() else {
            self.ops.push(new_op);
            return;
        };

        // Merge the new operation into the existing tail if possible
        match &new_op.kind {
            OpKind::Insert(_) => match last_op.op_type() {
                OpType::Delete => {
                    // insert goes before the delete; it may merge with an
                    // insert that sits just before the delete block
                    let Some(prev) = self.ops.pop() else {
                        self.ops.push(new_op);
                        self.ops.push(last_op);
                        return;
                    };
                    if let (Ok(prev_s), Ok(new_s)) = (prev.string_val(), new_op.string_val()) {
                        if prev.attributes.is_equal(&new_op.attributes) {
                            let op = DeltaOperation::insert_attr(
                                [prev_s, new_s].concat(),
                                prev.attributes.clone(),
                            );
                            self.ops.push(op);
                            self.ops.push(last_op);
                            return;
                        }
                    }
                    self.ops.push(prev);
                    self.ops.push(new_op);
                    self.ops.push(last_op);
                    return;
                }
                OpType::Insert => {
                    if let (Ok(last_s), Ok(new_s)) = (last_op.string_val(), new_op.string_val()) {
                        if last_op.attributes.is_equal(&new_op.attributes) {
                            let op = DeltaOperation::insert_attr(
                                [last_s, new_s].concat(),
                                last_op.attributes.clone(),
                            );
                            self.ops.push(op);
                            return;
                        }
                    }
                }
                OpType::Retain => {}
            },
            OpKind::Retain(retain) => {
                if last_op.op_type() == OpType::Retain && last_op.attributes == new_op.attributes {
                    let op =
                        DeltaOperation::retain_attr(last_op.op_len() + retain, last_op.attributes);
                    self.ops.push(op);
                    return;
                }
            }
            OpKind::Delete(delete) => {
                if last_op.op_type() == OpType::Delete {
                    let op = DeltaOperation::delete(last_op.op_len() + delete);
                    self.ops.push(op);
                    return;
                }
            }
        }

        self.ops.push(last_op);
        self.ops.push(new_op);
    }

    /// # append_delta_operation()
    ///
    /// Appends a vector of operations, head/tail-merging the first one.
    pub(crate) fn append_delta_operation(&mut self, mut other: Vec<DeltaOperation>) -> &mut Delta {
        if !other.is_empty() {
            self.push(other.remove(0)); //merges repeated retain, delete, insert
            if !other.is_empty() {
                self.bump();
                self.ops.append(&mut other); //should have no repetitions
            }
        }
        self
    }

    /// # get_ops()
    ///
    /// Converts a Delta document into a vector of Delta operations
    pub fn get_ops(self) -> Vec<DeltaOperation> {
        self.ops
    }

    /// # get_ops_ref()
    ///
    /// Returns a reference to the vector of Delta operations for the Delta document
    pub fn get_ops_ref(&self) -> &Vec<DeltaOperation> {
        &self.ops
    }
}

impl PartialEq for Delta {
    fn eq(&self, other: &Self) -> bool {
        self.ops == other.ops
    }
}

impl std::ops::Deref for Delta {
    type Target = Vec<DeltaOperation>;
    fn deref(&self) -> &Self::Target {
        &self.ops
    }
}

impl From<Vec<DeltaOperation>> for Delta {
    fn from(ops: Vec<DeltaOperation>) -> Delta {
        Delta::new(ops)
    }
}

impl std::iter::FromIterator<DeltaOperation> for Delta {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = DeltaOperation>,
    {
        let res: Vec<_> = iter.into_iter().collect();
        res.into()
    }
}

//Note display is one form of serialization, but we can not read it back.
//Use the json serializer instead
#[cfg(test)]
impl Display for Delta {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Delta --> [[").ok();
        let mut count = 0;
        for o in &self.ops {
            count += 1;
            writeln!(f, "\t{count}: {o}").ok();
        }
        writeln!(f, "]]")
    }
}
