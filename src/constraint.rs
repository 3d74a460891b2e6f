//! The constraint trait and its shared, type-erased form.
//!
//! # How constraints are stored
//!
//! A route may carry constraints of *different* types, one per parameter.
//! They are kept behind `Arc<dyn Constraint>` so every route stores them
//! uniformly and a single constraint instance can be attached to many
//! routes:
//!
//! ```text
//! EnumNameConstraint::new::<Color>()          ← built once at startup
//!        ↓ Route::constrain("color", …)
//! Arc::new(constraint)                        ← BoxedConstraint
//!        ↓  at recognition time
//! constraint.matches("color", &values)        ← one vtable dispatch
//! ```

use std::sync::Arc;

use crate::value::RouteValues;

/// A predicate attached to a route parameter.
///
/// The router calls [`matches`](Constraint::matches) once per candidate
/// route, per constrained parameter. Implementations must be pure and total:
/// read `values`, never panic, and fold every conversion failure into
/// `false`. A missing key is a non-match, not an error.
///
/// Closures with the right signature are constraints too:
///
/// ```rust
/// use tsu_constraints::{Constraint, RouteValues};
///
/// let even = |name: &str, values: &RouteValues| {
///     values.get_str(name)
///         .and_then(|s| s.parse::<u32>().ok())
///         .is_some_and(|n| n % 2 == 0)
/// };
///
/// let values = RouteValues::new().with("page", "4");
/// assert!(even.matches("page", &values));
/// ```
pub trait Constraint: Send + Sync + 'static {
    fn matches(&self, name: &str, values: &RouteValues) -> bool;
}

/// A constraint shared across routes and threads.
pub type BoxedConstraint = Arc<dyn Constraint>;

impl<F> Constraint for F
where
    F: Fn(&str, &RouteValues) -> bool + Send + Sync + 'static,
{
    fn matches(&self, name: &str, values: &RouteValues) -> bool {
        self(name, values)
    }
}
