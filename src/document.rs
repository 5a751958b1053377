// Copyright 2026 text-delta Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use crate::attributes::{diff, invert, Attributes};
use crate::delta::Delta;
use crate::error::Error;
use crate::iterator::DeltaIterator;
use crate::operations::{DeltaOperation, OpType};
use crate::utils::DeltaTransformations;
use anyhow::Result;
use diffs::{myers, Diff, Replace};

/// Document-level operations. Some of these methods expect a document Delta
/// (insert-operations only); called on or with non-document Deltas they
/// return `NotADocument` or give an undefined result.
pub trait Document {
    /// Returns a Delta representing the concatenation of
    /// this and another document Delta's operations.
    /// ```
    /// use text_delta::delta::Delta;
    /// use text_delta::document::Document;
    /// use text_delta::attributes::Attributes;
    ///
    /// let mut bold = Attributes::default();
    /// bold.insert("bold".to_string(), true);
    ///
    /// let mut a = Delta::default();
    /// a.insert_attr("Test", bold.clone());
    ///
    /// let mut other = Delta::default();
    /// other.insert_attr("!", bold.clone());
    ///
    /// let mut expected = Delta::default();
    /// expected.insert_attr("Test!", bold.clone());
    ///
    /// assert_eq!(a.concat(&other), expected);
    /// ```
    fn concat(&self, other: &Delta) -> Delta;

    /// Returns a Delta representing the difference between two documents.
    /// Optionally, accepts a suggested index where the change took place,
    /// often representing a cursor position before the change.
    ///
    /// ```
    /// use text_delta::delta::Delta;
    /// use text_delta::document::Document;
    ///
    /// let mut a = Delta::default();
    /// a.insert("Hallo");
    /// let mut b = Delta::default();
    /// b.insert("Hallo!");
    ///
    /// let _diff = a.diff(&b, 0).unwrap();
    /// // result = [{ retain: 5 }, { insert: "!" }]
    /// ```
    ///
    /// # Errors
    /// `NotADocument` when either Delta contains other operations than Insert
    fn diff(&self, other: &Delta, cursor: usize) -> Result<Delta, Error>;

    /// Runs the predicate for each line in the document, where a line is
    /// delimited by the new line character (`'\n'` unless overridden).
    /// Lines are processed until the predicate returns false.
    ///
    /// The predicate `Fn(&Delta, &Attributes, usize) -> bool` receives
    ///  - a Delta containing the line,
    ///  - the attributes of the line-ending character,
    ///  - the line number.
    ///
    /// This method is expected to run on a document, so it stops quietly at
    /// the first non-insert operation.
    ///
    /// # Errors
    /// `ConcurrentModification` when the delta is mutated mid-walk.
    fn each_line<F>(&self, predicate: F, new_line_char: Option<char>) -> Result<(), Error>
    where
        F: Fn(&Delta, &Attributes, usize) -> bool;

    /// Returns an inverted delta that has the opposite effect against a base
    /// document delta. That is `base.compose(delta).compose(inverted) == base`.
    ///
    /// ```
    /// use text_delta::delta::Delta;
    /// use text_delta::document::Document;
    ///
    /// let mut base = Delta::default();
    /// base.insert("Hello World");
    ///
    /// let mut delta = Delta::default();
    /// delta.retain(5);
    /// delta.insert("!");
    /// delta.delete(6);
    ///
    /// let _inverted = delta.invert(&base).unwrap();
    /// // [{ retain: 5 }, { insert: " World" }, { delete: 1 }]
    /// ```
    ///
    /// # Errors
    /// `ConcurrentModification` when a delta is mutated mid-walk.
    fn invert(&self, base: &Delta) -> Result<Delta, Error>;

    /// Net length of the content this delta leaves behind: inserted length
    /// minus deleted length.
    fn document_length(&self) -> usize;
}

impl Document for Delta {
    fn concat(&self, other: &Delta) -> Delta {
        let mut delta = self.clone();
        delta.append_delta_operation(other.get_ops_ref().clone());
        delta
    }

    fn diff(&self, other: &Delta, _cursor: usize) -> Result<Delta, Error> {
        //Collect all inserts into 1 long string each
        let aa = to_diff_string(self)?;
        let bb = to_diff_string(other)?;
        //Diff runs over bytes, so edit lengths agree with op_len everywhere
        let a = aa.as_bytes();
        let b = bb.as_bytes();

        let this_iter = DeltaIterator::new(self);
        let other_iter = DeltaIterator::new(other);
        let mut delta = Delta::default();

        let mut ddd = D {
            res: &mut delta,
            other: &other_iter,
            me: &this_iter,
        };

        let mut diff = Replace::new(&mut ddd);
        myers::diff(&mut diff, a, 0, a.len(), b, 0, b.len())?;

        delta.trim();
        Ok(delta)
    }

    fn each_line<F>(&self, predicate: F, new_line_char: Option<char>) -> Result<(), Error>
    where
        F: Fn(&Delta, &Attributes, usize) -> bool,
    {
        let new_line = new_line_char.unwrap_or('\n');

        //collect a line ... repeatedly
        let iter = DeltaIterator::new(self);
        let mut line = Delta::default();
        let mut i = 0;
        while iter.has_next() {
            if iter.peek_type() != OpType::Insert {
                return Ok(());
            }
            let Some(this_op) = iter.peek() else {
                return Err(Error::IteratorIsEmpty);
            };
            let start = this_op.op_len() - iter.peek_len();
            let newline_found = this_op.string_val()?[start..].find(new_line);
            match newline_found {
                None => {
                    line.push(iter.next_len(0)?);
                }
                Some(len) => {
                    if len > 0 {
                        line.push(iter.next_len(len)?);
                    } else {
                        //len=0 --> we are ON the next line marker
                        let go_on = predicate(&line, iter.next_len(1)?.get_attributes(), i);
                        if !go_on {
                            return Ok(());
                        }
                        i += 1;
                        line = Delta::default();
                    }
                }
            }
        }
        //run the predicate on the remaining line (last char need not be a line break)
        if line.delta_length() > 0 {
            predicate(&line, &Attributes::default(), i);
        }
        Ok(())
    }

    fn invert(&self, base: &Delta) -> Result<Delta, Error> {
        let mut inverted = Delta::default();
        let mut base_index: usize = 0;

        for op in self.iter() {
            match op.op_type() {
                OpType::Insert => {
                    inverted.delete(op.op_len());
                }
                OpType::Retain if op.get_attributes().is_empty() => {
                    inverted.retain(op.op_len());
                    base_index += op.op_len();
                }
                OpType::Delete | OpType::Retain => {
                    //restore the base slice covered by this operation
                    let length = op.op_len();
                    let slice = base.slice(base_index, base_index + length)?;
                    for base_op in slice.iter() {
                        if op.op_type() == OpType::Delete {
                            inverted.push(base_op.clone());
                        } else {
                            inverted.retain_attr(
                                base_op.op_len(),
                                invert(op.get_attributes(), base_op.get_attributes()),
                            );
                        }
                    }
                    base_index += length;
                }
            }
        }
        Ok(inverted.trim().to_owned())
    }

    fn document_length(&self) -> usize {
        let mut len: usize = 0;
        for d in self.iter() {
            match d.op_type() {
                OpType::Insert => len += d.op_len(),
                OpType::Delete => len -= d.op_len(),
                OpType::Retain => {}
            }
        }
        len
    }
}

struct D<'a> {
    pub res: &'a mut Delta,
    pub other: &'a DeltaIterator<'a>,
    pub me: &'a DeltaIterator<'a>,
}

impl<'a> Diff for D<'a> {
    type Error = Error;

    fn equal(&mut self, _o: usize, _new: usize, len: usize) -> Result<(), Error> {
        let mut l = len;
        while l > 0 {
            let v = [self.me.peek_len(), self.other.peek_len(), l];
            let Some(op_len) = v.iter().min().copied() else {
                return Err(Error::EmptyVectorMinOp);
            };
            let this_op = self.me.next_len(op_len)?;
            let other_op = self.other.next_len(op_len)?;
            if this_op.op_type() == OpType::Insert
                && other_op.op_type() == OpType::Insert
                && this_op.is_same_operation(&other_op)
            {
                let mut delta = DeltaOperation::retain(op_len);
                delta.set_attributes(diff(this_op.get_attributes(), other_op.get_attributes()));
                self.res.push(delta);
            } else {
                self.res.push(other_op);
                self.res.delete(op_len);
            }
            l -= op_len;
        }
        Ok(())
    }

    fn delete(&mut self, _o: usize, len: usize, _new: usize) -> Result<(), Error> {
        let mut l = len;
        while l > 0 {
            let v = [self.me.peek_len(), l];
            let Some(op_len) = v.iter().min().copied() else {
                return Err(Error::EmptyVectorMinOp);
            };
            self.me.next_len(op_len)?;
            self.res.push(DeltaOperation::delete(op_len));
            l -= op_len;
        }
        Ok(())
    }

    fn insert(&mut self, _o: usize, _n: usize, len: usize) -> Result<(), Error> {
        let mut l = len;
        while l > 0 {
            let v = [self.other.peek_len(), l];
            let Some(op_len) = v.iter().min().copied() else {
                return Err(Error::EmptyVectorMinOp);
            };
            let op = self.other.next_len(op_len)?;
            self.res.push(op);
            l -= op_len;
        }
        Ok(())
    }
}

/// To convert a document into one single string,
/// regardless of the attributes on each DeltaOperation.
fn to_diff_string(delta: &Delta) -> Result<String, Error> {
    let mut res = String::new();
    for op in delta.iter() {
        if op.op_type() == OpType::Insert {
            res.push_str(op.string_val()?);
        } else {
            //A document is valid when all operations are "insert" operations
            return Err(Error::NotADocument);
        }
    }
    Ok(res)
}
