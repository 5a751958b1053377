// Copyright 2026 text-delta Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use crate::delta::Delta;
use crate::error::Error;
use crate::operations::{DeltaOperation, OpType};
use std::cell::Cell;

/// # DeltaIterator
///
/// Iterator iterating over the content IN the DeltaOperations.
///
/// Hence we do not only iterate over the objects of type DeltaOperation,
/// but also inside. There are 2 indexes:
///  - index pointing to a DeltaOperation;
///  - offset pointing to a position inside the DeltaOperation.
///
/// The iterator records the modification count of its Delta when it is
/// created. A structural change to the Delta while the iterator is in use
/// makes every subsequent [`DeltaIterator::next_len`] fail with
/// [`Error::ConcurrentModification`].
#[allow(clippy::module_name_repetitions)]
pub struct DeltaIterator<'a> {
    delta: &'a Delta,
    mod_count: u64,      //modification count of the delta at creation time
    index: Cell<usize>,  //private index in the vector
    offset: Cell<usize>, //position inside the DeltaOperation (in bytes for an insert)
}

impl<'a> DeltaIterator<'a> {
    pub fn new(delta: &'a Delta) -> Self {
        DeltaIterator {
            delta,
            mod_count: delta.mod_count(),
            index: Cell::new(0),
            offset: Cell::new(0),
        }
    }

    fn guard(&self) -> Result<(), Error> {
        if self.delta.mod_count() == self.mod_count {
            Ok(())
        } else {
            Err(Error::ConcurrentModification)
        }
    }

    pub fn has_next(&self) -> bool {
        self.peek_len() < usize::MAX
    }

    /// # peek()
    ///
    /// Returns the delta operation that is next in line to be processed.
    /// But does NOT advance to the next operation.
    pub fn peek(&self) -> Option<&DeltaOperation> {
        self.delta.get_ops_ref().get(self.index.get())
    }

    /// # peek_len()
    ///
    /// Assuming we are on an offset o in a DeltaOperation on operation index i,
    /// we return the remaining length of the operation we point to:
    ///     `op[i].len - offset`
    ///
    /// Past the end of the delta the remaining length is unbounded, returned
    /// as `usize::MAX`.
    pub fn peek_len(&self) -> usize {
        match self.delta.get_ops_ref().get(self.index.get()) {
            Some(op) => op.op_len() - self.offset.get(),
            None => usize::MAX,
        }
    }

    /// # peek_type()
    ///
    /// Returns the `OpType` of the next operation without advancing the
    /// index. Past the end of the delta everything reads as a plain retain.
    pub fn peek_type(&self) -> OpType {
        match self.delta.get_ops_ref().get(self.index.get()) {
            Some(op) => op.op_type(),
            None => OpType::Retain,
        }
    }

    pub fn is_next_insert(&self) -> bool {
        self.peek_type() == OpType::Insert
    }

    pub fn is_next_delete(&self) -> bool {
        self.peek_type() == OpType::Delete
    }

    pub fn is_next_retain(&self) -> bool {
        self.peek_type() == OpType::Retain
    }

    /// # next_len()
    ///
    /// Returns the next DeltaOperation or a slice thereof
    /// depending on the length of the input parameter len:
    ///
    ///  - If len == 0 the remainder of the next operation is returned
    ///  - If len > 0 a slice of at most len is returned
    ///  - Past the end of the delta a retain of the requested length without
    ///    attributes is synthesized; a final `trim` on the receiving delta
    ///    removes what is left of it
    ///
    /// # Errors
    /// `ConcurrentModification` when the underlying Delta was structurally
    /// changed after this iterator was created.
    pub fn next_len(&self, len: usize) -> Result<DeltaOperation, Error> {
        self.guard()?;
        let mut length = len;
        if length == 0 {
            length = usize::MAX;
        }

        let ops = self.delta.get_ops_ref();
        let index = self.index.get();
        if index < ops.len() {
            let offset = self.offset.get();
            let Some(next_op) = ops.get(index) else {
                return Err(Error::IteratorIsEmpty);
            };

            //Determining the slice we need to take
            let op_length = next_op.op_len();
            let mut act_len = op_length - offset;

            //Updating index for the next step
            if length >= act_len {
                //return the full DeltaOperation or its remainder
                self.index.set(index + 1);
                self.offset.set(0);
            } else {
                //return a slice of the current delta operation
                act_len = length;
                self.offset.set(offset + act_len);
            }

            //returning the resulting operation: delete, retain, insert
            match next_op.op_type() {
                OpType::Delete => Ok(DeltaOperation::delete(act_len)),
                OpType::Retain => {
                    let mut op = DeltaOperation::retain(act_len);
                    op.set_attributes(next_op.get_attributes().clone());
                    Ok(op)
                }
                OpType::Insert => {
                    let s = next_op.string_val()?;
                    let mut op = DeltaOperation::insert(&s[offset..offset + act_len]);
                    op.set_attributes(next_op.get_attributes().clone());
                    Ok(op)
                }
            }
        } else {
            Ok(DeltaOperation::retain(length))
        }
    }

    /// # skip()
    ///
    /// Advances over the next len content units (or the remainder of the
    /// current operation for len == 0), discarding the result.
    ///
    /// # Errors
    /// `ConcurrentModification`, like [`DeltaIterator::next_len`].
    pub fn skip(&self, len: usize) -> Result<(), Error> {
        self.next_len(len)?;
        Ok(())
    }

    /// # rest()
    ///
    /// Returns the remainder of the operations stack
    /// to which the iterator points.
    ///
    /// Leaves the current values for offset and index unchanged.
    ///
    /// # Errors
    /// `ConcurrentModification`, like [`DeltaIterator::next_len`].
    pub fn rest(&self) -> Result<Vec<DeltaOperation>, Error> {
        if !self.has_next() {
            return Ok(Vec::new());
        }
        if self.offset.get() == 0 {
            return Ok(self.delta.get_ops_ref()[self.index.get()..].to_vec());
        }

        // finish fetching the last bit if we are pointing into the middle of an operation
        let mut ret = vec![self.next_len(usize::MAX)?];
        if let Some(d) = self.delta.get_ops_ref().get(self.index.get()..) {
            ret.extend_from_slice(d);
        }
        Ok(ret)
    }
}
