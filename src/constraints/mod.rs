//! Built-in route constraints.
//!
//! | Constraint | Accepts |
//! |---|---|
//! | [`EnumNameConstraint`] | a member name of an enum, any casing |
//! | [`EnumValueConstraint`] | a defined underlying value of an enum |
//! | [`GuidConstraint`] | a UUID in any textual form `uuid` parses |
//! | [`ValueListConstraint`] | one of an explicit list of literals |
//!
//! Each is immutable after construction. Build them once at startup and
//! attach them to as many routes as needed.

mod enum_name;
mod enum_value;
mod guid;
mod value_list;

pub use enum_name::EnumNameConstraint;
pub use enum_value::EnumValueConstraint;
pub use guid::GuidConstraint;
pub use value_list::ValueListConstraint;
