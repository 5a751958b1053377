// Copyright 2026 text-delta Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use crate::error::Error;
use crate::error::Error::GetValueWrongType;
use crate::types::attr_map::AttrMap;
use serde_derive::{Deserialize, Serialize};
use serde_json::Number;
#[cfg(test)]
use std::fmt;

/// A single attribute value.
///
/// Any JSON value is admissible; equality is structural over the whole tree.
/// `Null` is data, not absence: when composed or inverted against a base it
/// marks the attribute for removal.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrVal {
    String(String),
    Number(Number),
    Bool(bool),
    Array(Vec<AttrVal>),
    Map(AttrMap),
    Null,
}

impl AttrVal {
    /// # Errors
    /// `GetValueWrongType` when the `AttrVal` does not contain this type
    pub fn str_val(&self) -> anyhow::Result<&str, Error> {
        if let AttrVal::String(s) = self {
            return Ok(s.as_str());
        }
        Err(GetValueWrongType {
            tpe: "string".to_string(),
        })
    }

    /// # Errors
    /// `GetValueWrongType` when the `AttrVal` does not contain an unsigned number
    pub fn number_val(&self) -> Result<usize, Error> {
        if let AttrVal::Number(n) = self {
            if let Some(n) = n.as_u64() {
                #[allow(clippy::cast_possible_truncation)]
                let n = n as usize;
                return Ok(n);
            }
        }
        Err(GetValueWrongType {
            tpe: "number".to_string(),
        })
    }

    /// # Errors
    /// `GetValueWrongType` when the `AttrVal` does not contain this type
    pub fn map_val(&self) -> Result<&AttrMap, Error> {
        if let AttrVal::Map(s) = self {
            return Ok(s);
        }
        Err(GetValueWrongType {
            tpe: "map".to_string(),
        })
    }

    /// # Errors
    /// `GetValueWrongType` when the `AttrVal` does not contain this type
    pub fn bool_val(&self) -> Result<bool, Error> {
        if let AttrVal::Bool(s) = self {
            return Ok(*s);
        }
        Err(GetValueWrongType {
            tpe: "boolean".to_string(),
        })
    }

    /// # Errors
    /// `GetValueWrongType` when the `AttrVal` does not contain this type
    pub fn array_val(&self) -> Result<&Vec<AttrVal>, Error> {
        if let AttrVal::Array(s) = self {
            return Ok(s);
        }
        Err(GetValueWrongType {
            tpe: "array".to_string(),
        })
    }

    pub fn is_string(&self) -> bool {
        matches!(self, AttrVal::String(_))
    }
    pub fn is_number(&self) -> bool {
        matches!(self, AttrVal::Number(_))
    }
    pub fn is_bool(&self) -> bool {
        matches!(self, AttrVal::Bool(_))
    }
    pub fn is_null(&self) -> bool {
        matches!(self, AttrVal::Null)
    }
    pub fn is_array(&self) -> bool {
        matches!(self, AttrVal::Array(_))
    }
    pub fn is_map(&self) -> bool {
        matches!(self, AttrVal::Map(_))
    }
}

impl From<String> for AttrVal {
    fn from(s: String) -> Self {
        AttrVal::String(s)
    }
}

impl From<&str> for AttrVal {
    fn from(s: &str) -> Self {
        AttrVal::String(s.to_string())
    }
}

impl From<usize> for AttrVal {
    fn from(s: usize) -> Self {
        AttrVal::Number(Number::from(s))
    }
}

impl From<bool> for AttrVal {
    fn from(s: bool) -> Self {
        AttrVal::Bool(s)
    }
}

impl From<AttrMap> for AttrVal {
    fn from(s: AttrMap) -> Self {
        AttrVal::Map(s)
    }
}

impl From<Vec<AttrVal>> for AttrVal {
    fn from(s: Vec<AttrVal>) -> Self {
        AttrVal::Array(s)
    }
}

#[cfg(test)]
impl fmt::Display for AttrVal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrVal::Null => {
                write!(f, "Null")
            }
            AttrVal::Number(u) => {
                write!(f, "{u}")
            }
            AttrVal::String(s) => {
                write!(f, "{s}")
            }
            AttrVal::Bool(b) => {
                write!(f, "{b}")
            }
            AttrVal::Array(a) => {
                let mut out = String::new();
                for v in a {
                    out.push_str(&format!("{v}, "));
                }
                write!(f, "[{out}]")
            }
            AttrVal::Map(m) => {
                let mut out = String::new();
                for (k, v) in &**m {
                    out.push_str(&format!("({k}->{v}), "));
                }
                write!(f, "{out}")
            }
        }
    }
}
