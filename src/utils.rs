// Copyright 2026 text-delta Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use crate::delta::Delta;
use crate::error::Error;
use crate::iterator::DeltaIterator;
use crate::operations::DeltaOperation;

pub trait DeltaTransformations {
    /// Collect the operations for which the predicate
    /// `f(&DeltaOperation, index) -> bool` returns true into a new Delta.
    fn filter<F>(&self, predicate: F) -> Delta
    where
        F: Fn(&DeltaOperation, usize) -> bool;

    /// Execute `f(&DeltaOperation)` for each operation in the delta.
    fn for_each<F>(&self, predicate: F)
    where
        F: Fn(&DeltaOperation);

    /// Length of the delta operations regardless of the operation kind.
    fn delta_length(&self) -> usize;

    /// Map each operation through `f(&DeltaOperation, index) -> T`,
    /// where index is the position of the operation in the Delta document.
    fn map<T, F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&DeltaOperation, usize) -> T;

    /// Split the delta in the operations that pass the predicate, and the
    /// ones that fail.
    fn partition<F>(&self, predicate: F) -> (Delta, Delta)
    where
        F: Fn(&DeltaOperation) -> bool;

    /// Fold the operations into an accumulator using
    /// `f(&mut T, &DeltaOperation, index)`.
    fn reduce<'a, T, F>(&self, predicate: F, init_val: &'a mut T) -> &'a mut T
    where
        F: Fn(&mut T, &DeltaOperation, usize) -> T;

    /// Returns a copy of the delta covering the content range
    /// `[start, end)`. Use `end = usize::MAX` when the slice goes all the
    /// way up to the end.
    ///
    /// # Errors
    /// `ConcurrentModification` when the delta is mutated mid-walk.
    fn slice(&self, start: usize, end: usize) -> Result<Delta, Error>;
}

impl DeltaTransformations for Delta {
    fn filter<F>(&self, predicate: F) -> Delta
    where
        F: Fn(&DeltaOperation, usize) -> bool,
    {
        self.iter()
            .enumerate()
            .filter(|(i, d)| predicate(d, *i))
            .map(|(_, d)| d.clone())
            .collect()
    }

    fn for_each<F>(&self, predicate: F)
    where
        F: Fn(&DeltaOperation),
    {
        self.iter().for_each(predicate);
    }

    fn delta_length(&self) -> usize {
        self.iter().map(DeltaOperation::op_len).sum()
    }

    fn map<T, F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&DeltaOperation, usize) -> T,
    {
        self.iter()
            .enumerate()
            .map(|(i, d)| predicate(d, i))
            .collect()
    }

    fn partition<F>(&self, predicate: F) -> (Delta, Delta)
    where
        F: Fn(&DeltaOperation) -> bool,
    {
        let mut passed: Delta = Delta::default();
        let mut failed: Delta = Delta::default();
        self.iter().for_each(|d| {
            if predicate(d) {
                passed.push(d.clone());
            } else {
                failed.push(d.clone());
            }
        });
        (passed, failed)
    }

    fn reduce<'a, T, F>(&self, predicate: F, init_val: &'a mut T) -> &'a mut T
    where
        F: Fn(&mut T, &DeltaOperation, usize) -> T,
    {
        self.iter().enumerate().for_each(|(i, d)| {
            predicate(init_val, d, i);
        });
        init_val
    }

    fn slice(&self, start: usize, end: usize) -> Result<Delta, Error> {
        let mut delta = Delta::default();
        let iter = DeltaIterator::new(self);
        let mut index: usize = 0;
        while index < end && iter.has_next() {
            if index < start {
                let skipped = iter.next_len(start - index)?;
                index += skipped.op_len();
            } else {
                let next_op = iter.next_len(end - index)?;
                index += next_op.op_len();
                delta.push(next_op);
            }
        }
        Ok(delta)
    }
}
