//! Name-based dispatch onto the command set
//!
//! Scripts and the CLI describe operations as strings. This adapter
//! resolves them against the fixed set of command set operations; any
//! other name is rejected with [`BuilderError::MethodNotFound`].
//!
//! Names are matched ignoring case, `-` and `_`, so `fitIn`, `fit_in` and
//! `fit-in` all resolve to the same operation.

use std::str::FromStr;

use crate::command::{CommandSet, FilterArg, HAlign, TrimSource, VAlign};
use crate::constants::COMMAND_TARGET;
use crate::error::BuilderError;

use super::Builder;

/// One operation call parsed from `name[:arg,arg,...]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub method: String,
    pub args: Vec<String>,
}

impl Call {
    pub fn new<I, S>(method: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method: method.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl FromStr for Call {
    type Err = BuilderError;

    /// Split on the first `:` only, so filter arguments may contain `:`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (method, rest) = match s.split_once(':') {
            Some((method, rest)) => (method, Some(rest)),
            None => (s, None),
        };

        if method.is_empty() {
            return Err(BuilderError::invalid_argument(s, "empty operation name"));
        }

        let args = match rest {
            Some(rest) if !rest.is_empty() => rest.split(',').map(str::to_string).collect(),
            _ => Vec::new(),
        };

        Ok(Call {
            method: method.to_string(),
            args,
        })
    }
}

impl Builder {
    /// Apply an operation by name, consuming the builder
    pub fn call(mut self, call: &Call) -> Result<Self, BuilderError> {
        self.try_call(call)?;
        Ok(self)
    }

    /// Apply an operation by name in place
    ///
    /// On error the command set is left exactly as it was, so a script can
    /// report the bad operation and keep going.
    pub fn try_call(&mut self, call: &Call) -> Result<&mut Self, BuilderError> {
        apply(self.commands_mut(), call)?;
        Ok(self)
    }
}

/// Apply `call` to `commands`
pub fn apply(commands: &mut CommandSet, call: &Call) -> Result<(), BuilderError> {
    let method = call.method.as_str();
    let args = call.args.as_slice();

    match normalize(method).as_str() {
        "trim" => {
            expect_at_most(method, args, 1)?;
            let source = args
                .first()
                .map(|s| s.parse::<TrimSource>())
                .transpose()?;
            commands.trim(source);
        }
        "crop" => {
            expect_exactly(method, args, 4)?;
            commands.crop(
                parse_number(method, &args[0])?,
                parse_number(method, &args[1])?,
                parse_number(method, &args[2])?,
                parse_number(method, &args[3])?,
            );
        }
        "fitin" => {
            expect_exactly(method, args, 2)?;
            commands.fit_in(
                parse_number(method, &args[0])?,
                parse_number(method, &args[1])?,
            );
        }
        "resize" => {
            expect_exactly(method, args, 2)?;
            commands.resize(
                parse_number(method, &args[0])?,
                parse_number(method, &args[1])?,
            );
        }
        "halign" | "horizontalalign" => {
            expect_exactly(method, args, 1)?;
            commands.halign(args[0].parse::<HAlign>()?);
        }
        "valign" | "verticalalign" => {
            expect_exactly(method, args, 1)?;
            commands.valign(args[0].parse::<VAlign>()?);
        }
        "smartcrop" | "smart" => {
            expect_at_most(method, args, 1)?;
            commands.smart_crop(parse_flag(method, args.first())?);
        }
        "metadataonly" | "meta" => {
            expect_at_most(method, args, 1)?;
            commands.metadata_only(parse_flag(method, args.first())?);
        }
        "addfilter" | "filter" => {
            let (name, filter_args) = args.split_first().ok_or_else(|| {
                BuilderError::invalid_argument(method, "expected a filter name")
            })?;
            if name.is_empty() {
                return Err(BuilderError::invalid_argument(method, "empty filter name"));
            }
            commands.add_filter(
                name.as_str(),
                filter_args.iter().map(|arg| FilterArg::Text(arg.clone())),
            );
        }
        _ => return Err(BuilderError::method_not_found(method, COMMAND_TARGET)),
    }

    Ok(())
}

fn normalize(method: &str) -> String {
    method
        .chars()
        .filter(|c| *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

fn expect_exactly(method: &str, args: &[String], count: usize) -> Result<(), BuilderError> {
    if args.len() != count {
        return Err(BuilderError::invalid_argument(
            method,
            format!("expected {} arguments, got {}", count, args.len()),
        ));
    }
    Ok(())
}

fn expect_at_most(method: &str, args: &[String], count: usize) -> Result<(), BuilderError> {
    if args.len() > count {
        return Err(BuilderError::invalid_argument(
            method,
            format!("expected at most {} arguments, got {}", count, args.len()),
        ));
    }
    Ok(())
}

fn parse_number<T: FromStr>(method: &str, raw: &str) -> Result<T, BuilderError> {
    raw.trim()
        .parse()
        .map_err(|_| BuilderError::invalid_argument(method, format!("not an integer: {}", raw)))
}

/// A missing flag argument means "enabled"
fn parse_flag(method: &str, raw: Option<&String>) -> Result<bool, BuilderError> {
    let Some(raw) = raw else {
        return Ok(true);
    };

    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(BuilderError::invalid_argument(
            method,
            format!("not a boolean: {}", raw),
        )),
    }
}
