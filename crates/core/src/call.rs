//! Function call marshaling.
//!
//! A call's arguments arrive as a positional list of values. Generated
//! `Params` types read them in declared parameter order through an [`Args`]
//! cursor. Return values go the other way through [`result`].

use serde_json::Value;

use crate::convert::{FromValue, ToValue};
use crate::error::ConvertError;

/// A cursor over a positional argument list.
#[derive(Debug)]
pub struct Args<'a> {
    function: &'static str,
    args: &'a [Value],
    position: usize,
}

impl<'a> Args<'a> {
    /// Fails when `args` holds more values than the function declares.
    pub fn new(
        function: &'static str,
        args: &'a [Value],
        max_arity: usize,
    ) -> Result<Self, ConvertError> {
        if args.len() > max_arity {
            return Err(ConvertError::TooManyArguments {
                function: function.to_owned(),
                max: max_arity,
                found: args.len(),
            });
        }
        Ok(Args {
            function,
            args,
            position: 0,
        })
    }

    pub fn function(&self) -> &'static str {
        self.function
    }

    fn advance(&mut self) -> Option<&'a Value> {
        let value = self.args.get(self.position);
        self.position += 1;
        value
    }

    /// Decode the next parameter. An absent position is a failure; a null
    /// is handed to the decoder like any other value.
    pub fn required<T: FromValue>(&mut self, name: &str) -> Result<T, ConvertError> {
        let value = self
            .advance()
            .ok_or_else(|| ConvertError::MissingArgument {
                function: self.function.to_owned(),
                name: name.to_owned(),
            })?;
        T::from_value(value).map_err(|e| e.in_param(name))
    }

    /// Decode the next parameter if supplied. Absent and null both mean
    /// "not supplied".
    pub fn optional<T: FromValue>(&mut self, name: &str) -> Result<Option<T>, ConvertError> {
        match self.advance() {
            None | Some(Value::Null) => Ok(None),
            Some(value) => T::from_value(value)
                .map(Some)
                .map_err(|e| e.in_param(name)),
        }
    }
}

/// The decoded argument bundle of one function.
pub trait Params: Sized {
    /// Qualified function name, e.g. `"arrays.integerArray"`.
    const FUNCTION: &'static str;
    /// Number of declared parameters.
    const MAX_ARITY: usize;

    /// Read each parameter in declared order.
    fn from_args(args: &mut Args<'_>) -> Result<Self, ConvertError>;

    fn try_create(args: &[Value]) -> Result<Self, ConvertError> {
        let mut cursor = Args::new(Self::FUNCTION, args, Self::MAX_ARITY)?;
        Self::from_args(&mut cursor)
    }

    /// Validate the argument list, returning `None` if it is malformed.
    fn create(args: &[Value]) -> Option<Self> {
        match Self::try_create(args) {
            Ok(params) => Some(params),
            Err(e) => {
                tracing::debug!(function = Self::FUNCTION, error = %e, "call arguments rejected");
                None
            }
        }
    }

    /// Like [`Params::create`], for an argument list that may itself be
    /// missing or not a list.
    fn create_from_value(args: Option<&Value>) -> Option<Self> {
        match args {
            Some(Value::Array(list)) => Self::create(list),
            other => {
                tracing::debug!(
                    function = Self::FUNCTION,
                    found = ?other.map(crate::ValueKind::of),
                    "argument list missing or not a list"
                );
                None
            }
        }
    }
}

/// Encode a function's return value.
pub fn result<T: ToValue + ?Sized>(value: &T) -> Value {
    value.to_value()
}
