use std::collections::HashSet;

use crate::constraint::Constraint;
use crate::value::RouteValues;

/// Restricts a parameter to an explicit list of literals.
///
/// The bound value is compared through its `Display` form, exactly and
/// case-sensitively, so an integer `5` matches the literal `"5"`.
///
/// ```rust
/// use tsu_constraints::{Constraint, RouteValues, ValueListConstraint};
///
/// let constraint = ValueListConstraint::new(["one", "two"]);
/// assert!(constraint.matches("n", &RouteValues::new().with("n", "one")));
/// assert!(!constraint.matches("n", &RouteValues::new().with("n", "One")));
/// ```
#[derive(Clone, Debug)]
pub struct ValueListConstraint {
    allowed: HashSet<String>,
}

impl ValueListConstraint {
    pub fn new<I>(allowed: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self { allowed: allowed.into_iter().map(Into::into).collect() }
    }

    /// Number of distinct allowed literals.
    pub fn len(&self) -> usize {
        self.allowed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }
}

impl Constraint for ValueListConstraint {
    fn matches(&self, name: &str, values: &RouteValues) -> bool {
        values
            .get(name)
            .is_some_and(|value| self.allowed.contains(&value.to_string()))
    }
}
