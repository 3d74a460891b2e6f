use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;
use std::str::FromStr;

use crate::constraint::Constraint;
use crate::enumeration::RouteEnum;
use crate::value::{RouteValue, RouteValues};

/// Restricts a parameter to the defined underlying values of an enum.
///
/// The raw value is coerced to `R` first: strings are trimmed and parsed as
/// decimal text, integers are range-checked. A value that cannot be coerced
/// simply does not match.
///
/// ```rust
/// use tsu_constraints::{Constraint, EnumValueConstraint, RouteValues, route_enum};
///
/// route_enum! {
///     enum Color: u8 { Red = 1, Green = 2 }
/// }
///
/// let constraint = EnumValueConstraint::new::<Color>();
/// assert!(constraint.matches("color", &RouteValues::new().with("color", "2")));
/// assert!(!constraint.matches("color", &RouteValues::new().with("color", "300")));
/// assert!(!constraint.matches("color", &RouteValues::new().with("color", "Red")));
/// ```
#[derive(Clone, Debug)]
pub struct EnumValueConstraint<R> {
    values: HashSet<R>,
}

impl<R> EnumValueConstraint<R>
where
    R: Copy + Eq + Hash + FromStr + TryFrom<i64>,
{
    pub fn new<E: RouteEnum<Repr = R>>() -> Self {
        Self { values: E::values().collect() }
    }

    fn coerce(value: &RouteValue) -> Option<R> {
        match value {
            RouteValue::Str(s) => s.trim().parse().ok(),
            RouteValue::Int(i) => R::try_from(*i).ok(),
            RouteValue::Uuid(_) => None,
        }
    }
}

impl<R> Constraint for EnumValueConstraint<R>
where
    R: Copy + Eq + Hash + Debug + FromStr + TryFrom<i64> + Send + Sync + 'static,
{
    fn matches(&self, name: &str, values: &RouteValues) -> bool {
        values
            .get(name)
            .and_then(Self::coerce)
            .is_some_and(|v| self.values.contains(&v))
    }
}
