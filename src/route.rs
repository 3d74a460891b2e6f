//! A single route: method, path template, defaults and constraints.

use std::fmt;
use std::sync::Arc;

use http::Method;

use crate::constraint::{BoxedConstraint, Constraint};
use crate::value::{RouteValue, RouteValues};

/// A candidate route, built once at startup and registered on a
/// [`Router`](crate::Router).
///
/// Templates use matchit syntax: `{name}` binds one segment, `{*name}` binds
/// the rest of the path, `{{` and `}}` are literal braces.
///
/// ```rust
/// use http::Method;
/// use tsu_constraints::{GuidConstraint, Route};
///
/// let route = Route::new(Method::GET, "/guids/{id}")
///     .named("guid")
///     .with_default("controller", "guid")
///     .with_default("action", "index")
///     .constrain("id", GuidConstraint::new());
/// ```
pub struct Route {
    method: Method,
    template: String,
    name: Option<String>,
    defaults: RouteValues,
    constraints: Vec<(String, BoxedConstraint)>,
}

impl Route {
    pub fn new(method: Method, template: impl Into<String>) -> Self {
        Self {
            method,
            template: template.into(),
            name: None,
            defaults: RouteValues::new(),
            constraints: Vec::new(),
        }
    }

    /// Names the route so [`Router::url_for`](crate::Router::url_for) can find it.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Binds `name` to `value` unless the path supplies it.
    pub fn with_default(mut self, name: impl Into<String>, value: impl Into<RouteValue>) -> Self {
        self.defaults.insert(name, value);
        self
    }

    /// Attaches a constraint to parameter `name`. Constraints run in the
    /// order they were attached.
    pub fn constrain(self, name: impl Into<String>, constraint: impl Constraint) -> Self {
        self.constrain_shared(name, Arc::new(constraint))
    }

    /// Attaches a constraint that is also used by other routes.
    pub fn constrain_shared(mut self, name: impl Into<String>, constraint: BoxedConstraint) -> Self {
        self.constraints.push((name.into(), constraint));
        self
    }

    pub fn method(&self) -> &Method { &self.method }
    pub fn template(&self) -> &str { &self.template }
    pub fn name(&self) -> Option<&str> { self.name.as_deref() }
    pub fn defaults(&self) -> &RouteValues { &self.defaults }

    /// Runs every constraint against `values`; on rejection returns the name
    /// of the first parameter whose constraint failed.
    pub(crate) fn accepts(&self, values: &RouteValues) -> Result<(), &str> {
        match self.constraints.iter().find(|(name, c)| !c.matches(name, values)) {
            Some((name, _)) => Err(name.as_str()),
            None => Ok(()),
        }
    }

    /// Substitutes every template parameter with its value's `Display` form,
    /// percent-encoded. A catch-all value keeps its `/` separators.
    ///
    /// `None` when a parameter has no value, a value is empty, or a
    /// single-segment value contains `/`.
    pub(crate) fn expand(&self, values: &RouteValues) -> Option<String> {
        let mut out = String::with_capacity(self.template.len());
        let mut chars = self.template.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    out.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    out.push('}');
                }
                '{' => {
                    let mut param = String::new();
                    loop {
                        match chars.next()? {
                            '}' => break,
                            ch => param.push(ch),
                        }
                    }
                    let (name, catch_all) = match param.strip_prefix('*') {
                        Some(rest) => (rest, true),
                        None => (param.as_str(), false),
                    };
                    let value = values.get(name)?.to_string();
                    if value.is_empty() || (!catch_all && value.contains('/')) {
                        return None;
                    }
                    if catch_all {
                        let segments: Vec<_> = value.split('/').map(urlencoding::encode).collect();
                        out.push_str(&segments.join("/"));
                    } else {
                        out.push_str(&urlencoding::encode(&value));
                    }
                }
                c => out.push(c),
            }
        }

        Some(out)
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("method", &self.method)
            .field("template", &self.template)
            .field("name", &self.name)
            .field("defaults", &self.defaults)
            .field("constrained", &self.constraints.iter().map(|(n, _)| n).collect::<Vec<_>>())
            .finish()
    }
}
