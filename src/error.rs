// Copyright 2026 text-delta Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Not a document. Documents only contain Insert-operations.")]
    NotADocument,
    #[error("Programming error: Trying to get the value of an attribute (type = {tpe:?}), but the wrong type is used.")]
    GetValueWrongType { tpe: String },
    #[error("Stale iterator: the underlying Delta was modified after this iterator was created.")]
    ConcurrentModification,
    #[error("Empty vector found when calculating min()")]
    EmptyVectorMinOp,
    #[error("Empty vector found when calculating last()")]
    EmptyVectorLastOp,
    #[error("Iterator has no next element")]
    IteratorIsEmpty,
}
