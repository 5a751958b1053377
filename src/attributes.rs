// Copyright 2026 text-delta Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use serde_derive::{Deserialize, Serialize};
use std::collections::HashMap;
#[cfg(test)]
use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::types::attr_val::AttrVal;

/// Attributes hold the properties that determine how an inserted or retained
/// range is formatted. A key mapping to `AttrVal::Null` means the attribute
/// is to be removed when the change is applied against a base.
///
/// An empty map and an absent map are interchangeable in behavior; the empty
/// map is skipped on serialization, so absence is the canonical external
/// form.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Attributes {
    #[serde(flatten)]
    attr: HashMap<String, AttrVal>,
}

impl Attributes {
    /// # is_equal()
    ///
    /// Returns true when 2 attribute structures contain the identical content.
    pub fn is_equal(&self, other: &Attributes) -> bool {
        diff(other, self).is_empty()
    }

    /// # insert()
    ///
    /// Insert a value for a given key into the attributes
    pub fn insert<K: Into<String>, V: Into<AttrVal>>(&mut self, key: K, value: V) {
        self.attr.insert(key.into(), value.into());
    }

    /// # is_empty()
    ///
    /// Returns true when there is no content in the attributes.
    pub fn is_empty(&self) -> bool {
        self.attr.is_empty()
    }
}

impl Deref for Attributes {
    type Target = HashMap<String, AttrVal>;

    fn deref(&self) -> &Self::Target {
        &self.attr
    }
}

impl DerefMut for Attributes {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.attr
    }
}

/// # compose()
///
/// Overlays `other` on top of `attr`; at shared keys `other` wins.
///
/// When `keep_null` is false, any key of the merged result that maps to
/// `AttrVal::Null` is dropped: the null has done its job of erasing the
/// attribute. When `keep_null` is true the null survives, so that a later
/// compose against a base can still apply the erasure.
pub fn compose(attr: &Attributes, other: &Attributes, keep_null: bool) -> Attributes {
    let mut ret = attr.clone();
    for (key, val) in &**other {
        ret.insert(key, val.clone());
    }
    if !keep_null {
        ret.retain(|_, val| !matches!(val, AttrVal::Null));
    }
    ret
}

/// # transform()
///
/// Transform the attribute set `other` against the concurrently applied set
/// `attr`.
///
/// priority - Boolean used to break ties:<br>
/// If true, then `attr` takes priority over `other`: at shared keys its
/// values suppress those of `other`. If false, `other` wins unconditionally.
pub fn transform(attr: &Attributes, other: &Attributes, priority: bool) -> Attributes {
    if attr.is_empty() {
        return other.clone();
    }
    if other.is_empty() {
        return Attributes::default();
    }

    if !priority {
        // other simply overwrites us without priority
        return other.clone();
    }

    let mut ret = Attributes::default();
    for (key, val) in &**other {
        if attr.get(key).is_none() {
            ret.insert(key, val.clone());
        }
    }
    ret
}

/// # diff()
///
/// Returns the difference between the two attribute sets: the attributes
/// that, applied to `attr`, produce `other`. Keys removed by `other` map to
/// `AttrVal::Null`.
pub fn diff(attr: &Attributes, other: &Attributes) -> Attributes {
    let mut ret = Attributes::default();
    attr.keys().chain(other.keys()).for_each(|key| {
        if attr.get(key) != other.get(key) {
            match other.get(key) {
                None => {
                    ret.insert(key.clone(), AttrVal::Null);
                }
                Some(x) => {
                    ret.insert(key.clone(), x.clone());
                }
            }
        }
    });
    ret
}

/// # invert()
///
/// Returns the attribute set that undoes `attr` against `base`.
///
/// That is:<br>
/// `base.compose(attr).compose(inverted) == base`.
pub fn invert(attr: &Attributes, base: &Attributes) -> Attributes {
    let mut base_inverted = Attributes::default();
    for (key, val) in &**base {
        if base.get(key) != attr.get(key) && attr.get(key).is_some() {
            base_inverted.insert(key, val.clone());
        }
    }

    attr.keys().for_each(|key| {
        if attr.get(key) != base.get(key) && base.get(key).is_none() {
            base_inverted.insert(key.clone(), AttrVal::Null);
        }
    });
    base_inverted
}

impl From<HashMap<String, AttrVal>> for Attributes {
    fn from(m: HashMap<String, AttrVal>) -> Self {
        Attributes { attr: m }
    }
}

#[cfg(test)]
impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", display_fmt(self))
    }
}

//It is not possible to extend a trait defined in another crate
//In this case that is HashMap, so we define a function instead
#[cfg(test)]
pub(crate) fn display_fmt(attr: &Attributes) -> String {
    let mut at = String::new();
    for (k, v) in attr.iter() {
        if at.is_empty() {
            at = format!(r#"{k:?}:{v}"#);
        } else {
            at = format!(r#"{at}; {k:?}:{v}"#);
        }
    }
    format!(r#" Attr[{at}] "#)
}
