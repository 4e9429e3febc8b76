use serde::Serialize;
use serde_json::Value;
use std::fmt;

use crate::value::ValueKind;

/// One step from an enclosing value to a nested one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// A named function parameter. Only ever the first segment.
    Param(String),
    /// A dictionary key.
    Field(String),
    /// A list position.
    Index(usize),
}

/// Location of a failing value inside the tree handed to a converter.
///
/// Displayed as `$.refs[1].val` for record paths and `nums[2]` for
/// call arguments. Built innermost-first as errors propagate outwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValuePath(Vec<PathSegment>);

impl ValuePath {
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    fn prepend(&mut self, segment: PathSegment) {
        self.0.insert(0, segment);
    }
}

impl fmt::Display for ValuePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut segments = self.0.iter().peekable();
        match segments.peek() {
            Some(PathSegment::Param(name)) => {
                f.write_str(name)?;
                segments.next();
            }
            _ => f.write_str("$")?,
        }
        for segment in segments {
            match segment {
                PathSegment::Param(name) => write!(f, "({})", name)?,
                PathSegment::Field(name) => write!(f, ".{}", name)?,
                PathSegment::Index(i) => write!(f, "[{}]", i)?,
            }
        }
        Ok(())
    }
}

/// The two ways a decode can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The value's runtime tag (or content) does not match the declared type.
    ShapeMismatch,
    /// A required field or parameter is missing entirely.
    Absent,
}

/// Errors produced while decoding a value tree into typed structures.
///
/// Encoding never fails, so every variant describes malformed input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConvertError {
    /// The value at `path` has the wrong runtime tag.
    #[error("{path}: expected {expected}, found {found}")]
    TypeMismatch {
        path: ValuePath,
        expected: &'static str,
        found: ValueKind,
    },

    /// A required dictionary key is absent.
    #[error("{path}: missing required field '{field}'")]
    MissingField { path: ValuePath, field: String },

    /// A required positional argument is absent.
    #[error("{function}: missing required argument '{name}'")]
    MissingArgument { function: String, name: String },

    /// The argument list is longer than the declared parameter list.
    #[error("{function}: expected at most {max} arguments, found {found}")]
    TooManyArguments {
        function: String,
        max: usize,
        found: usize,
    },

    /// A string is not one of the enumeration's declared values.
    #[error("{path}: '{value}' is not one of {allowed:?}")]
    InvalidEnum {
        path: ValuePath,
        value: String,
        allowed: &'static [&'static str],
    },

    /// An integer does not fit the declared integer type.
    #[error("{path}: integer {value} is out of range")]
    OutOfRange { path: ValuePath, value: String },
}

impl ConvertError {
    /// A shape mismatch at the current (root) position.
    pub fn mismatch(expected: &'static str, found: &Value) -> Self {
        ConvertError::TypeMismatch {
            path: ValuePath::default(),
            expected,
            found: ValueKind::of(found),
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        ConvertError::MissingField {
            path: ValuePath::default(),
            field: field.into(),
        }
    }

    pub fn invalid_enum(value: impl Into<String>, allowed: &'static [&'static str]) -> Self {
        ConvertError::InvalidEnum {
            path: ValuePath::default(),
            value: value.into(),
            allowed,
        }
    }

    pub fn out_of_range(value: impl fmt::Display) -> Self {
        ConvertError::OutOfRange {
            path: ValuePath::default(),
            value: value.to_string(),
        }
    }

    /// Which of the two failure kinds this error belongs to.
    pub fn kind(&self) -> FailureKind {
        match self {
            ConvertError::MissingField { .. } | ConvertError::MissingArgument { .. } => {
                FailureKind::Absent
            }
            ConvertError::TypeMismatch { .. }
            | ConvertError::TooManyArguments { .. }
            | ConvertError::InvalidEnum { .. }
            | ConvertError::OutOfRange { .. } => FailureKind::ShapeMismatch,
        }
    }

    /// The location of the failing value, if the error has one.
    pub fn path(&self) -> Option<&ValuePath> {
        match self {
            ConvertError::TypeMismatch { path, .. }
            | ConvertError::MissingField { path, .. }
            | ConvertError::InvalidEnum { path, .. }
            | ConvertError::OutOfRange { path, .. } => Some(path),
            ConvertError::MissingArgument { .. } | ConvertError::TooManyArguments { .. } => None,
        }
    }

    /// Annotate the error as having occurred under dictionary key `field`.
    pub fn in_field(self, field: &str) -> Self {
        self.prepend(PathSegment::Field(field.to_owned()))
    }

    /// Annotate the error as having occurred at list position `index`.
    pub fn at_index(self, index: usize) -> Self {
        self.prepend(PathSegment::Index(index))
    }

    /// Annotate the error as having occurred in parameter `name`.
    pub fn in_param(self, name: &str) -> Self {
        self.prepend(PathSegment::Param(name.to_owned()))
    }

    fn prepend(mut self, segment: PathSegment) -> Self {
        match &mut self {
            ConvertError::TypeMismatch { path, .. }
            | ConvertError::MissingField { path, .. }
            | ConvertError::InvalidEnum { path, .. }
            | ConvertError::OutOfRange { path, .. } => path.prepend(segment),
            ConvertError::MissingArgument { .. } | ConvertError::TooManyArguments { .. } => {}
        }
        self
    }

    /// Serialize to a JSON object for machine-readable error output.
    /// Always includes every key (null for missing).
    pub fn to_json_value(&self) -> Value {
        serde_json::json!({
            "kind":    self.kind(),
            "path":    self.path().map(|p| p.to_string()),
            "message": self.to_string(),
        })
    }
}
