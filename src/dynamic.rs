//! Runtime-typed values and helpers that check their arguments at runtime.
//!
//! [`Value`] models heterogeneous data: a list may hold integers next to
//! strings next to nested lists. Because nothing is known statically here, the
//! helpers verify that their collection argument is a [`Value::List`] and that a
//! transformer was actually supplied, reporting [`Error::NotASequence`] and
//! [`Error::NilFunction`] otherwise.
//!
//! # Example
//! ```rust
//! use list_utils::dynamic::{self, Value};
//! use list_utils::Error;
//!
//! let names = Value::from(vec!["Value A", "Value B"]);
//! let lengths = dynamic::map(&names, Some(&|v: &Value| match v {
//!     Value::Str(s) => Value::from(s.len() as i64),
//!     _ => Value::Nil,
//! }))?;
//!
//! assert_eq!(lengths, [Value::Int(7), Value::Int(7)]);
//! assert_eq!(dynamic::map(&Value::from("not a list"), None), Err(Error::NotASequence));
//! # Ok::<(), Error>(())
//! ```

use std::fmt;

use crate::{Error, Result, helpers};

/// A dynamically typed value.
///
/// Equality is deep: two lists are equal when their elements are pairwise equal.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// The absent marker, dropped by [`compact`].
    #[default]
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
}

/// Transformer accepted by [`map`].
pub type MapFn<'a> = &'a dyn Fn(&Value) -> Value;

/// Predicate accepted by [`select`].
pub type SelectFn<'a> = &'a dyn Fn(&Value) -> bool;

impl Value {
    /// Returns the elements when this value is a list.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(values) => Some(values),
            _ => None,
        }
    }

    /// Checks whether this value is the absent marker.
    #[inline]
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Checks whether this value is ordered, indexable and has a length.
    #[inline]
    pub fn is_sequence(&self) -> bool {
        self.as_list().is_some()
    }

    fn expect_list(&self) -> Result<&[Value]> {
        self.as_list().ok_or(Error::NotASequence)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("nil"),
            Value::Bool(value) => write!(f, "{value}"),
            Value::Int(value) => write!(f, "{value}"),
            Value::Float(value) => write!(f, "{value}"),
            Value::Str(value) => write!(f, "{value:?}"),
            Value::List(values) => {
                f.write_str("[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl<V> From<Vec<V>> for Value
where
    V: Into<Value>,
{
    fn from(values: Vec<V>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

impl<V> From<Option<V>> for Value
where
    V: Into<Value>,
{
    fn from(value: Option<V>) -> Self {
        value.map_or(Value::Nil, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::List(iter.into_iter().collect())
    }
}

/// Checks whether `collection` holds a value deeply equal to `value`.
///
/// # Errors
/// - [`Error::NotASequence`] if `collection` is not a list.
pub fn contains(collection: &Value, value: &Value) -> Result<bool> {
    let values = collection.expect_list()?;
    Ok(helpers::contains(values, value))
}

/// Membership test that reports absence as an error.
///
/// # Errors
/// - [`Error::NotASequence`] if `collection` is not a list.
/// - [`Error::ElementNotFound`] if no element equals `value`.
pub fn is_included(collection: &Value, value: &Value) -> Result<()> {
    let values = collection.expect_list()?;
    helpers::is_included(values, value)
}

/// Applies `f` to every element of `collection`.
///
/// # Errors
/// - [`Error::NotASequence`] if `collection` is not a list.
/// - [`Error::NilFunction`] if `f` is `None`.
pub fn map(collection: &Value, f: Option<MapFn<'_>>) -> Result<Vec<Value>> {
    let values = collection.expect_list()?;
    let f = f.ok_or(Error::NilFunction("map"))?;
    Ok(helpers::map(values, f))
}

/// Keeps the elements of `collection` for which `predicate` holds.
///
/// # Errors
/// - [`Error::NotASequence`] if `collection` is not a list.
/// - [`Error::NilFunction`] if `predicate` is `None`.
pub fn select(collection: &Value, predicate: Option<SelectFn<'_>>) -> Result<Vec<Value>> {
    let values = collection.expect_list()?;
    let predicate = predicate.ok_or(Error::NilFunction("select"))?;
    Ok(helpers::select(values, predicate))
}

/// Cartesian product of the given lists, each tuple a [`Value::List`].
///
/// Element kinds may differ between lists.
///
/// # Errors
/// - [`Error::NotASequence`] if any argument is not a list.
///
/// # Example
/// ```rust
/// use list_utils::dynamic::{self, Value};
///
/// let tuples = dynamic::combination(&[
///     Value::from(vec![1, 2]),
///     Value::from(vec!["a"]),
/// ])?;
///
/// assert_eq!(tuples, [
///     Value::List(vec![Value::Int(1), Value::from("a")]),
///     Value::List(vec![Value::Int(2), Value::from("a")]),
/// ]);
/// # Ok::<(), list_utils::Error>(())
/// ```
pub fn combination(collections: &[Value]) -> Result<Vec<Value>> {
    let lists = collections
        .iter()
        .map(Value::expect_list)
        .collect::<Result<Vec<_>>>()?;

    Ok(helpers::combination(&lists)
        .into_iter()
        .map(Value::List)
        .collect())
}

/// Drops every [`Value::Nil`] entry of `collection`, keeping order.
///
/// # Errors
/// - [`Error::NotASequence`] if `collection` is not a list.
pub fn compact(collection: &Value) -> Result<Vec<Value>> {
    let values = collection.expect_list()?;
    Ok(helpers::select(values, |value| !value.is_nil()))
}
