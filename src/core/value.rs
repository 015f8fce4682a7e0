//! Message and context values
//!
//! This module provides:
//! - `Value`: the closed set of things a caller can log or attach as context
//! - `Exception`: an error captured with its cause chain
//! - `LogContext`: per-call key-value fields used for interpolation

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::error::Error;
use std::fmt::{self, Write as _};

/// Context key whose [`Value::Exception`] is appended to the message
pub const EXCEPTION_KEY: &str = "exception";

const DUMP_INDENT: &str = "    ";

/// An error captured as text, together with the chain of its sources.
///
/// ```
/// use rotating_logger::Exception;
///
/// let e = Exception::new("ParseError", "unexpected token").with_cause("line 3");
/// assert_eq!(e.to_string(), "ParseError: unexpected token\nCaused by: line 3");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Exception {
    kind: String,
    message: String,
    causes: Vec<String>,
}

impl Exception {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
            causes: Vec::new(),
        }
    }

    /// Capture an error, walking its `source()` chain.
    pub fn from_error<E: Error + ?Sized>(err: &E) -> Self {
        let mut causes = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            causes.push(cause.to_string());
            source = cause.source();
        }
        Self {
            kind: std::any::type_name::<E>().to_string(),
            message: err.to_string(),
            causes,
        }
    }

    #[must_use]
    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.causes.push(cause.into());
        self
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn causes(&self) -> &[String] {
        &self.causes
    }
}

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)?;
        for cause in &self.causes {
            write!(f, "\nCaused by: {}", cause)?;
        }
        Ok(())
    }
}

/// A loggable value.
///
/// Scalars, [`Value::Display`] and [`Value::Exception`] can be turned into
/// text; lists and maps are rendered as a structural dump; opaque values
/// have no text at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// An object rendered through its `Display` implementation
    Display(String),
    Exception(Exception),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
    /// An object without a string conversion; holds its type name
    Opaque(String),
}

impl Value {
    /// Capture any `Display` type as text
    pub fn display<T: fmt::Display + ?Sized>(value: &T) -> Self {
        Value::Display(value.to_string())
    }

    /// Capture an error as an [`Exception`]
    pub fn exception<E: Error + ?Sized>(err: &E) -> Self {
        Value::Exception(Exception::from_error(err))
    }

    /// A value of type `T` that has no text representation
    pub fn opaque<T: ?Sized>() -> Self {
        Value::Opaque(std::any::type_name::<T>().to_string())
    }

    pub fn is_stringifiable(&self) -> bool {
        !matches!(self, Value::List(_) | Value::Map(_) | Value::Opaque(_))
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, Value::List(_) | Value::Map(_))
    }

    /// Text form of a stringifiable value, `None` otherwise
    pub fn as_text(&self) -> Option<String> {
        match self {
            Value::Null => Some(String::new()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Int(i) => Some(i.to_string()),
            Value::Float(f) => Some(f.to_string()),
            Value::String(s) | Value::Display(s) => Some(s.clone()),
            Value::Exception(e) => Some(e.to_string()),
            Value::List(_) | Value::Map(_) | Value::Opaque(_) => None,
        }
    }

    /// Human-readable dump of the value's structure
    ///
    /// An empty list or map dumps to the empty string.
    pub fn dump(&self) -> String {
        match self {
            Value::List(items) if items.is_empty() => String::new(),
            Value::Map(entries) if entries.is_empty() => String::new(),
            _ => {
                let mut out = String::new();
                self.dump_into(&mut out, 0);
                out
            }
        }
    }

    fn dump_into(&self, out: &mut String, depth: usize) {
        let pad = DUMP_INDENT.repeat(depth + 1);
        match self {
            Value::Null => out.push_str("null"),
            Value::Bool(b) => {
                let _ = write!(out, "{}", b);
            }
            Value::Int(i) => {
                let _ = write!(out, "{}", i);
            }
            Value::Float(f) => {
                let _ = write!(out, "{:?}", f);
            }
            Value::String(s) => {
                let _ = write!(out, "{:?}", s);
            }
            Value::Display(s) => {
                let _ = write!(out, "display({:?})", s);
            }
            Value::Exception(e) => {
                let _ = write!(out, "exception({}: {:?})", e.kind(), e.message());
            }
            Value::Opaque(type_name) => {
                let _ = write!(out, "object({})", type_name);
            }
            Value::List(items) => {
                out.push_str("list(");
                out.push_str(&items.len().to_string());
                out.push_str(") [\n");
                for (idx, item) in items.iter().enumerate() {
                    let _ = write!(out, "{}{} => ", pad, idx);
                    item.dump_into(out, depth + 1);
                    out.push_str(",\n");
                }
                out.push_str(&DUMP_INDENT.repeat(depth));
                out.push(']');
            }
            Value::Map(entries) => {
                out.push_str("map(");
                out.push_str(&entries.len().to_string());
                out.push_str(") {\n");
                for (key, item) in entries {
                    let _ = write!(out, "{}{:?} => ", pad, key);
                    item.dump_into(out, depth + 1);
                    out.push_str(",\n");
                }
                out.push_str(&DUMP_INDENT.repeat(depth));
                out.push('}');
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(s.clone())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

macro_rules! int_into_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(i: $ty) -> Self {
                    Value::Int(i64::from(i))
                }
            }
        )*
    };
}

int_into_value!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Value {
    fn from(i: u64) -> Self {
        i64::try_from(i)
            .map(Value::Int)
            .unwrap_or_else(|_| Value::Display(i.to_string()))
    }
}

impl From<usize> for Value {
    fn from(i: usize) -> Self {
        Value::from(i as u64)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float(f64::from(f))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<Exception> for Value {
    fn from(e: Exception) -> Self {
        Value::Exception(e)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Value>> From<&[T]> for Value {
    fn from(items: &[T]) -> Self {
        Value::List(items.iter().cloned().map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(entries: BTreeMap<K, V>) -> Self {
        Value::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<Value>> From<HashMap<K, V>> for Value {
    fn from(entries: HashMap<K, V>) -> Self {
        Value::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Per-call fields used for `{key}` interpolation and exception attachment
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LogContext {
    fields: HashMap<String, Value>,
}

impl LogContext {
    /// Create a new empty log context
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field to the context
    #[must_use]
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Attach an error under the `exception` key
    #[must_use]
    pub fn with_exception<E: Error + ?Sized>(self, err: &E) -> Self {
        self.with_field(EXCEPTION_KEY, Value::exception(err))
    }

    /// Add a field to the context (mutable version)
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The exception attached under the `exception` key, if it is one
    pub fn exception(&self) -> Option<&Exception> {
        match self.fields.get(EXCEPTION_KEY) {
            Some(Value::Exception(e)) => Some(e),
            _ => None,
        }
    }

    /// Get all fields
    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for LogContext {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
