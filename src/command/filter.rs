//! Filter invocations
//!
//! A filter renders as `name(arg1,arg2,...)`. Arguments are written
//! verbatim: Thumbor's own filters accept nested URLs and colour names
//! (`watermark(http://host/wm.png,10,10,50)`), so no escaping is applied
//! beyond what the caller does to the string arguments themselves.

use std::fmt;

use crate::constants::FILTER_ARG_SEPARATOR;

/// A single positional filter argument
#[derive(Debug, Clone, PartialEq)]
pub enum FilterArg {
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for FilterArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterArg::Int(value) => write!(f, "{}", value),
            FilterArg::Float(value) => write!(f, "{}", value),
            FilterArg::Text(value) => f.write_str(value),
        }
    }
}

impl From<i32> for FilterArg {
    fn from(value: i32) -> Self {
        FilterArg::Int(value.into())
    }
}

impl From<i64> for FilterArg {
    fn from(value: i64) -> Self {
        FilterArg::Int(value)
    }
}

impl From<u8> for FilterArg {
    fn from(value: u8) -> Self {
        FilterArg::Int(value.into())
    }
}

impl From<u32> for FilterArg {
    fn from(value: u32) -> Self {
        FilterArg::Int(value.into())
    }
}

impl From<f64> for FilterArg {
    fn from(value: f64) -> Self {
        FilterArg::Float(value)
    }
}

impl From<&str> for FilterArg {
    fn from(value: &str) -> Self {
        FilterArg::Text(value.to_string())
    }
}

impl From<String> for FilterArg {
    fn from(value: String) -> Self {
        FilterArg::Text(value)
    }
}

/// One filter invocation, e.g. `brightness(42)`
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    name: String,
    args: Vec<FilterArg>,
}

impl Filter {
    pub fn new<I, A>(name: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<FilterArg>,
    {
        Self {
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[FilterArg] {
        &self.args
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", FILTER_ARG_SEPARATOR)?;
            }
            write!(f, "{}", arg)?;
        }
        f.write_str(")")
    }
}
