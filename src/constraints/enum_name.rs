use std::collections::HashSet;

use crate::constraint::Constraint;
use crate::enumeration::RouteEnum;
use crate::value::{RouteValues, is_blank};

/// Restricts a parameter to the member names of an enum, compared
/// case-insensitively.
///
/// ```rust
/// use tsu_constraints::{Constraint, EnumNameConstraint, RouteValues, route_enum};
///
/// route_enum! {
///     enum Color: u8 { Red = 1, Green = 2 }
/// }
///
/// let constraint = EnumNameConstraint::new::<Color>();
/// assert!(constraint.matches("color", &RouteValues::new().with("color", "gREEN")));
/// assert!(!constraint.matches("color", &RouteValues::new().with("color", "1")));
/// ```
#[derive(Clone, Debug)]
pub struct EnumNameConstraint {
    names: HashSet<String>,
}

impl EnumNameConstraint {
    pub fn new<E: RouteEnum>() -> Self {
        Self { names: E::names().map(str::to_lowercase).collect() }
    }
}

impl Constraint for EnumNameConstraint {
    fn matches(&self, name: &str, values: &RouteValues) -> bool {
        match values.get_str(name) {
            Some(value) if !is_blank(value) => self.names.contains(&value.to_lowercase()),
            _ => false,
        }
    }
}
