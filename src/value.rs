//! Values bound to route parameters.

use std::collections::HashMap;
use std::collections::hash_map;
use std::fmt;

use uuid::Uuid;

/// A single value bound to a route parameter.
///
/// Path matching always produces [`RouteValue::Str`]. Defaults and values
/// supplied for URL generation may already be typed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RouteValue {
    Str(String),
    Int(i64),
    Uuid(Uuid),
}

impl RouteValue {
    /// Returns the string payload, if this is a [`RouteValue::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

/// Strings verbatim, integers in decimal, UUIDs lowercase hyphenated.
impl fmt::Display for RouteValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
            Self::Uuid(u) => write!(f, "{}", u.hyphenated()),
        }
    }
}

impl From<String> for RouteValue {
    fn from(s: String) -> Self { Self::Str(s) }
}

impl From<&str> for RouteValue {
    fn from(s: &str) -> Self { Self::Str(s.to_owned()) }
}

impl From<i64> for RouteValue {
    fn from(i: i64) -> Self { Self::Int(i) }
}

impl From<i32> for RouteValue {
    fn from(i: i32) -> Self { Self::Int(i64::from(i)) }
}

impl From<Uuid> for RouteValue {
    fn from(u: Uuid) -> Self { Self::Uuid(u) }
}

/// The parameter bindings of one route match: defaults overridden by the
/// values extracted from the path.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RouteValues {
    inner: HashMap<String, RouteValue>,
}

impl RouteValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<RouteValue>) {
        self.inner.insert(name.into(), value.into());
    }

    /// Chaining form of [`insert`](RouteValues::insert).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<RouteValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&RouteValue> {
        self.inner.get(name)
    }

    /// Returns the binding for `name` only when it holds a string.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(RouteValue::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.inner.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, RouteValue> {
        self.inner.iter()
    }

    /// Copies every binding of `other` into `self`, overriding on conflict.
    pub(crate) fn extend_from(&mut self, other: &RouteValues) {
        self.inner.extend(other.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
}

impl<K, V> FromIterator<(K, V)> for RouteValues
where
    K: Into<String>,
    V: Into<RouteValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { inner: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

impl<'a> IntoIterator for &'a RouteValues {
    type Item = (&'a String, &'a RouteValue);
    type IntoIter = hash_map::Iter<'a, String, RouteValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Empty or whitespace-only.
pub(crate) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
