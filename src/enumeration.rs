//! Enumerations usable as route constraint sources.
//!
//! Rust enums carry no runtime reflection, so the member names and
//! underlying values a constraint needs are exposed through [`RouteEnum`].
//! The [`route_enum!`](crate::route_enum) macro declares a fieldless enum
//! and implements the trait in one go.

use std::fmt::Debug;
use std::hash::Hash;
use std::str::FromStr;

/// A closed set of named integral constants.
pub trait RouteEnum: 'static {
    /// The underlying integer type (`#[repr(..)]`).
    type Repr: Copy + Eq + Hash + Debug + FromStr + TryFrom<i64> + Send + Sync + 'static;

    /// Every member as `(name, value)`, in declaration order.
    const MEMBERS: &'static [(&'static str, Self::Repr)];

    fn names() -> impl Iterator<Item = &'static str> {
        Self::MEMBERS.iter().map(|&(name, _)| name)
    }

    fn values() -> impl Iterator<Item = Self::Repr> {
        Self::MEMBERS.iter().map(|&(_, value)| value)
    }
}

/// Declares a fieldless enum with an explicit integer representation and
/// implements [`RouteEnum`] for it.
///
/// ```rust
/// tsu_constraints::route_enum! {
///     #[derive(Clone, Copy, Debug, PartialEq, Eq)]
///     pub enum Size: i32 {
///         Small = 1,
///         Medium,
///         Large = 10,
///     }
/// }
///
/// use tsu_constraints::RouteEnum;
/// assert_eq!(Size::MEMBERS, &[("Small", 1), ("Medium", 2), ("Large", 10)]);
/// ```
#[macro_export]
macro_rules! route_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $repr:ident {
            $( $(#[$vmeta:meta])* $variant:ident $(= $value:expr)? ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr($repr)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant $(= $value)? ),+
        }

        impl $crate::RouteEnum for $name {
            type Repr = $repr;
            const MEMBERS: &'static [(&'static str, $repr)] = &[
                $( (::core::stringify!($variant), $name::$variant as $repr) ),+
            ];
        }
    };
}
