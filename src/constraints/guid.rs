use uuid::Uuid;

use crate::constraint::Constraint;
use crate::value::{RouteValue, RouteValues, is_blank};

/// Restricts a parameter to a GUID/UUID.
///
/// Accepts an already typed [`RouteValue::Uuid`], or a string in any form
/// [`Uuid::try_parse`] understands: 32 bare hex digits, hyphenated, braced,
/// or `urn:uuid:` prefixed. Surrounding whitespace is ignored.
#[derive(Clone, Copy, Debug, Default)]
pub struct GuidConstraint;

impl GuidConstraint {
    pub fn new() -> Self {
        Self
    }
}

impl Constraint for GuidConstraint {
    fn matches(&self, name: &str, values: &RouteValues) -> bool {
        match values.get(name) {
            Some(RouteValue::Uuid(_)) => true,
            Some(RouteValue::Str(s)) if !is_blank(s) => Uuid::try_parse(s.trim()).is_ok(),
            _ => false,
        }
    }
}
