// Copyright 2026 text-delta Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use crate::attributes::{compose, transform};
use crate::delta::Delta;
use crate::error::Error;
use crate::iterator::DeltaIterator;
use crate::operations::{DeltaOperation, OpType};

pub trait OpTransform {
    /// Returns a Delta that is equivalent to applying the operations of
    /// this Delta, followed by another Delta.
    ///
    /// `other` - Delta to compose
    ///
    /// # Errors
    /// `ConcurrentModification` when a delta is mutated mid-walk.
    fn compose(&self, other: &Delta) -> Result<Delta, Error>;

    /// Transform the given Delta against this Delta's operations, such that
    /// both deltas started from the same base document and the transformed
    /// one applies after this one.
    ///
    /// `other` - Delta to transform
    /// `priority` - Boolean used to break ties. If `true`, then `this` takes
    /// priority over `other`, that is, its actions are considered to have
    /// happened "first".
    ///
    /// # Errors
    /// `ConcurrentModification` when a delta is mutated mid-walk.
    fn transform(&self, other: &Delta, priority: bool) -> Result<Delta, Error>;

    /// Transform an index against this Delta.
    /// Useful for representing cursor/selection positions.
    ///
    /// `index` - index to transform
    /// `force` - when the index sits exactly on an insert boundary, `true`
    /// pushes it past the inserted content, `false` leaves it in place.
    ///
    /// # Errors
    /// `ConcurrentModification` when the delta is mutated mid-walk.
    fn transform_position(&self, index: usize, force: bool) -> Result<usize, Error>;
}

impl OpTransform for Delta {
    fn compose(&self, other: &Delta) -> Result<Delta, Error> {
        let this_iter = DeltaIterator::new(self);
        let other_iter = DeltaIterator::new(other);
        let mut delta = Delta::default();

        // A leading plain retain in `other` passes the leading inserts of
        // `self` through untouched. Attributed retains must take the main
        // loop so the formatting lands on those inserts.
        if let Some(first_other) = other_iter.peek() {
            if first_other.op_type() == OpType::Retain && first_other.get_attributes().is_empty() {
                let mut first_left = first_other.op_len();
                while this_iter.peek_type() == OpType::Insert && this_iter.peek_len() <= first_left
                {
                    first_left -= this_iter.peek_len();
                    let t = this_iter.next_len(0)?;
                    delta.push(t);
                }
                let consumed = first_other.op_len() - first_left;
                if consumed > 0 {
                    other_iter.skip(consumed)?;
                }
            }
        }

        while this_iter.has_next() || other_iter.has_next() {
            if other_iter.peek_type() == OpType::Insert {
                delta.push(other_iter.next_len(0)?);
            } else if this_iter.peek_type() == OpType::Delete {
                delta.push(this_iter.next_len(0)?);
            } else {
                let v = [this_iter.peek_len(), other_iter.peek_len()];
                let Some(val) = v.iter().min() else {
                    return Err(Error::EmptyVectorMinOp);
                };
                let l = *val;
                let this_op = this_iter.next_len(l)?;
                let other_op = other_iter.next_len(l)?;
                if other_op.op_type() == OpType::Retain {
                    let mut new_op: DeltaOperation = if this_op.op_type() == OpType::Retain {
                        DeltaOperation::retain(l)
                    } else {
                        DeltaOperation::insert(this_op.string_val()?)
                    };
                    // Preserve null when composing two retains; on an insert
                    // the null erases the attribute on the spot
                    let attr = compose(
                        this_op.get_attributes(),
                        other_op.get_attributes(),
                        this_op.op_type() == OpType::Retain,
                    );
                    new_op.set_attributes(attr);
                    delta.push(new_op);

                    // Optimization if the rest of other is just implicit retain
                    if !other_iter.has_next() {
                        let Some(d_last) = delta.last() else {
                            return Err(Error::EmptyVectorLastOp);
                        };
                        if d_last.is_equal(&this_op) {
                            let rest = this_iter.rest()?;
                            return Ok(delta.append_delta_operation(rest).trim().to_owned());
                        }
                    }

                    // Other op should be delete; on a retain it takes effect,
                    // on an insert the two cancel out
                } else if other_op.op_type() == OpType::Delete
                    && this_op.op_type() == OpType::Retain
                {
                    delta.push(other_op);
                }
            }
        }
        Ok(delta.trim().to_owned())
    }

    fn transform(&self, other: &Delta, priority: bool) -> Result<Delta, Error> {
        let this_iter = DeltaIterator::new(self);
        let other_iter = DeltaIterator::new(other);
        let mut delta = Delta::default();
        while this_iter.has_next() || other_iter.has_next() {
            if this_iter.peek_type() == OpType::Insert
                && (priority || other_iter.peek_type() != OpType::Insert)
            {
                delta.retain(this_iter.next_len(0)?.op_len());
            } else if other_iter.peek_type() == OpType::Insert {
                delta.push(other_iter.next_len(0)?);
            } else {
                let v = [this_iter.peek_len(), other_iter.peek_len()];
                let Some(val) = v.iter().min() else {
                    return Err(Error::EmptyVectorMinOp);
                };
                let l = *val;
                let this_op = this_iter.next_len(l)?;
                let other_op = other_iter.next_len(l)?;
                if this_op.op_type() == OpType::Delete {
                    // our delete annihilates their op
                    continue;
                } else if other_op.op_type() == OpType::Delete {
                    delta.push(other_op);
                } else {
                    // We retain either their retain or insert
                    delta.retain_attr(
                        l,
                        transform(this_op.get_attributes(), other_op.get_attributes(), priority),
                    );
                }
            }
        }

        Ok(delta.trim().to_owned())
    }

    fn transform_position(&self, mut index: usize, force: bool) -> Result<usize, Error> {
        let this_iter = DeltaIterator::new(self);
        let mut offset: usize = 0;
        while this_iter.has_next() && offset <= index {
            let l = this_iter.peek_len();
            let next_type = this_iter.peek_type();
            this_iter.skip(0)?;
            if next_type == OpType::Delete {
                let v = [l, index - offset];
                let Some(val) = v.iter().min() else {
                    return Err(Error::EmptyVectorMinOp);
                };
                index -= *val;
                continue;
            } else if next_type == OpType::Insert && (offset < index || force) {
                index += l;
            }
            offset += l;
        }
        Ok(index)
    }
}
