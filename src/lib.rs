//! # tsu-constraints
//!
//! Route constraints for Rust web services, and a small router that honors
//! them.
//!
//! A route constraint is a predicate attached to a template parameter. The
//! router matches a path against each candidate route in registration
//! order and asks every declared constraint whether the bound value is
//! acceptable. The first candidate that passes them all wins; a path no
//! candidate accepts is simply "no route found".
//!
//! Built-in constraints:
//!
//! - [`EnumNameConstraint`]: a member name of an enum, any casing
//! - [`EnumValueConstraint`]: a defined underlying value of an enum
//! - [`GuidConstraint`]: a GUID/UUID
//! - [`ValueListConstraint`]: one of an explicit list of literals
//!
//! Any `Fn(&str, &RouteValues) -> bool` is a constraint as well.
//!
//! What this crate does not do: serve HTTP, parse requests, write
//! responses. Hand the router a method and a path (or an
//! [`http::Request`]), dispatch on the target it gives back.
//!
//! ## Quick start
//!
//! ```rust
//! use http::Method;
//! use tsu_constraints::{EnumNameConstraint, GuidConstraint, Route, Router, route_enum};
//!
//! route_enum! {
//!     enum Number: i32 { One = 1, Two = 2 }
//! }
//!
//! let router = Router::new()
//!     .on(Route::new(Method::GET, "/home/{value}")
//!             .with_default("action", "index")
//!             .constrain("value", EnumNameConstraint::new::<Number>()),
//!         "home")
//!     .on(Route::new(Method::GET, "/guids/{id}")
//!             .constrain("id", GuidConstraint::new()),
//!         "guid");
//!
//! let hit = router.recognize(&Method::GET, "/home/One").unwrap();
//! assert_eq!(*hit.target(), "home");
//! assert_eq!(hit.values().get_str("value"), Some("One"));
//! assert_eq!(hit.values().get_str("action"), Some("index"));
//!
//! assert!(router.recognize(&Method::GET, "/home/1").is_none());
//! ```

mod constraint;
mod enumeration;
mod error;
mod route;
mod router;
mod value;

pub mod constraints;

pub use constraint::{BoxedConstraint, Constraint};
pub use constraints::{EnumNameConstraint, EnumValueConstraint, GuidConstraint, ValueListConstraint};
pub use enumeration::RouteEnum;
pub use error::Error;
pub use route::Route;
pub use router::{RouteMatch, Router};
pub use value::{RouteValue, RouteValues};
