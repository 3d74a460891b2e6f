//! Constraint-aware request router.
//!
//! Candidates are tried in registration order, one list per HTTP method.
//! Each candidate's template is matched by its own radix tree; the bound
//! values are then checked against the route's constraints in declaration
//! order. The first candidate that passes every constraint wins. A path
//! that no candidate accepts yields `None`: no route found.

use std::collections::HashMap;

use http::Method;
use matchit::Router as MatchitRouter;
use tracing::{debug, trace};

use crate::error::Error;
use crate::route::Route;
use crate::value::RouteValues;

/// The route table.
///
/// `T` is whatever the caller dispatches to on a match: a handler, an enum
/// of controller actions, a plain name. Build the table once at startup;
/// a built `Router<T>` is `Send + Sync` whenever `T` is, so it can be
/// shared behind an `Arc` without locking.
pub struct Router<T> {
    routes: HashMap<Method, Vec<Candidate<T>>>,
    names: HashMap<String, (Method, usize)>,
}

struct Candidate<T> {
    route: Route,
    tree: MatchitRouter<()>,
    target: T,
}

/// A successful recognition: the winning route, its target and the values
/// bound for this request.
#[derive(Debug)]
pub struct RouteMatch<'r, T> {
    route: &'r Route,
    target: &'r T,
    values: RouteValues,
}

impl<'r, T> RouteMatch<'r, T> {
    pub fn route(&self) -> &'r Route { self.route }
    pub fn target(&self) -> &'r T { self.target }
    pub fn values(&self) -> &RouteValues { &self.values }
    pub fn into_values(self) -> RouteValues { self.values }
}

impl<T> Router<T> {
    pub fn new() -> Self {
        Self { routes: HashMap::new(), names: HashMap::new() }
    }

    /// Registers `route` with its dispatch `target`. Returns `self` for
    /// chaining.
    ///
    /// ```rust
    /// use http::Method;
    /// use tsu_constraints::{Route, Router, ValueListConstraint};
    ///
    /// let router = Router::new()
    ///     .on(Route::new(Method::GET, "/home/{value}")
    ///             .constrain("value", ValueListConstraint::new(["one", "two"])),
    ///         "home")
    ///     .on(Route::new(Method::GET, "/{*rest}"), "fallback");
    ///
    /// let hit = router.recognize(&Method::GET, "/home/three").unwrap();
    /// assert_eq!(*hit.target(), "fallback");
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the template is invalid or the route's name is already
    /// taken. Use [`try_on`](Router::try_on) to handle these as errors.
    pub fn on(mut self, route: Route, target: T) -> Self {
        if let Err(e) = self.try_on(route, target) {
            panic!("{e}");
        }
        self
    }

    /// Fallible form of [`on`](Router::on). On error the router is left
    /// unchanged, so routes registered so far are kept.
    pub fn try_on(&mut self, route: Route, target: T) -> Result<&mut Self, Error> {
        if let Some(name) = route.name() {
            if self.names.contains_key(name) {
                return Err(Error::DuplicateName(name.to_owned()));
            }
        }

        let mut tree = MatchitRouter::new();
        tree.insert(route.template(), ())
            .map_err(|source| Error::InvalidTemplate {
                template: route.template().to_owned(),
                source,
            })?;

        let candidates = self.routes.entry(route.method().clone()).or_default();
        if let Some(name) = route.name() {
            self.names.insert(name.to_owned(), (route.method().clone(), candidates.len()));
        }
        candidates.push(Candidate { route, tree, target });
        Ok(self)
    }

    /// Finds the first route registered for `method` that matches `path`
    /// and whose constraints all accept the bound values.
    ///
    /// `path` is the raw, percent-encoded request path. Each bound segment
    /// is percent-decoded before constraints see it; a segment that does not
    /// decode to UTF-8 makes the candidate a non-match.
    pub fn recognize(&self, method: &Method, path: &str) -> Option<RouteMatch<'_, T>> {
        let candidates = self.routes.get(method).map(Vec::as_slice).unwrap_or_default();

        for candidate in candidates {
            let Ok(matched) = candidate.tree.at(path) else { continue };

            let Some(values) = bind(candidate.route.defaults(), matched.params.iter()) else {
                debug!(%method, path, route = candidate.route.template(), "undecodable path segment");
                continue;
            };

            if let Err(param) = candidate.route.accepts(&values) {
                debug!(
                    %method,
                    path,
                    route = candidate.route.template(),
                    param,
                    "constraint rejected candidate route"
                );
                continue;
            }

            trace!(%method, path, route = candidate.route.template(), "route recognized");
            return Some(RouteMatch {
                route: &candidate.route,
                target: &candidate.target,
                values,
            });
        }

        trace!(%method, path, "no route found");
        None
    }

    /// [`recognize`](Router::recognize) using the request's method and URI path.
    pub fn recognize_request<B>(&self, req: &http::Request<B>) -> Option<RouteMatch<'_, T>> {
        self.recognize(req.method(), req.uri().path())
    }

    /// Generates a URL for the route registered under `name`.
    ///
    /// `values` override the route's defaults; the route's constraints are
    /// checked against the merged values exactly as during recognition.
    /// Substituted values are percent-encoded, so the result recognizes back
    /// to the same values. Returns `None` for an unknown name, a missing
    /// template parameter, or a value a constraint rejects.
    pub fn url_for(&self, name: &str, values: &RouteValues) -> Option<String> {
        let (method, index) = self.names.get(name)?;
        let route = &self.routes.get(method)?.get(*index)?.route;

        let mut merged = route.defaults().clone();
        merged.extend_from(values);

        if let Err(param) = route.accepts(&merged) {
            debug!(route = name, param, "constraint rejected url generation");
            return None;
        }

        route.expand(&merged)
    }

    /// Total number of registered routes.
    pub fn len(&self) -> usize {
        self.routes.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Defaults overridden by the decoded path parameters.
fn bind<'k, 'v>(
    defaults: &RouteValues,
    params: impl Iterator<Item = (&'k str, &'v str)>,
) -> Option<RouteValues> {
    let mut values = defaults.clone();
    for (name, raw) in params {
        values.insert(name, urlencoding::decode(raw).ok()?.into_owned());
    }
    Some(values)
}

impl<T> Default for Router<T> {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::{EnumNameConstraint, GuidConstraint, ValueListConstraint};
    use crate::value::RouteValue;

    crate::route_enum! {
        enum Number: i32 { One = 1, Two = 2 }
    }

    #[test]
    fn first_accepted_candidate_wins() {
        let router = Router::new()
            .on(Route::new(Method::GET, "/home/{value}")
                    .constrain("value", EnumNameConstraint::new::<Number>()), "by-name")
            .on(Route::new(Method::GET, "/home/{value}"), "any");

        assert_eq!(*router.recognize(&Method::GET, "/home/two").unwrap().target(), "by-name");
        assert_eq!(*router.recognize(&Method::GET, "/home/3").unwrap().target(), "any");
    }

    #[test]
    fn registration_order_beats_specificity() {
        let router = Router::new()
            .on(Route::new(Method::GET, "/{*rest}"), "catch-all")
            .on(Route::new(Method::GET, "/users/{id}"), "user");

        assert_eq!(*router.recognize(&Method::GET, "/users/1").unwrap().target(), "catch-all");
    }

    #[test]
    fn methods_are_separate_tables() {
        let router = Router::new()
            .on(Route::new(Method::GET, "/items/{id}"), "get")
            .on(Route::new(Method::DELETE, "/items/{id}"), "delete");

        assert_eq!(*router.recognize(&Method::DELETE, "/items/1").unwrap().target(), "delete");
        assert!(router.recognize(&Method::POST, "/items/1").is_none());
        assert_eq!(router.len(), 2);
    }

    #[test]
    fn path_values_override_defaults() {
        let router = Router::new().on(
            Route::new(Method::GET, "/{controller}/{action}")
                .with_default("action", "index")
                .with_default("area", "public"),
            (),
        );

        let hit = router.recognize(&Method::GET, "/home/about").unwrap();
        assert_eq!(hit.values().get_str("controller"), Some("home"));
        assert_eq!(hit.values().get_str("action"), Some("about"));
        assert_eq!(hit.values().get_str("area"), Some("public"));
    }

    #[test]
    fn constraints_see_defaults() {
        let router = Router::new().on(
            Route::new(Method::GET, "/static")
                .with_default("kind", "img")
                .constrain("kind", ValueListConstraint::new(["css"])),
            (),
        );

        assert!(router.recognize(&Method::GET, "/static").is_none());
    }

    #[test]
    fn recognize_request_uses_method_and_path() {
        let router = Router::new()
            .on(Route::new(Method::GET, "/guids/{id}").constrain("id", GuidConstraint::new()), 1);

        let req = http::Request::get("/guids/550e8400-e29b-41d4-a716-446655440000?x=1")
            .body(())
            .unwrap();
        assert_eq!(*router.recognize_request(&req).unwrap().target(), 1);

        let req = http::Request::post("/guids/550e8400-e29b-41d4-a716-446655440000")
            .body(())
            .unwrap();
        assert!(router.recognize_request(&req).is_none());
    }

    #[test]
    fn url_for_checks_constraints() {
        let router = Router::new().on(
            Route::new(Method::GET, "/home/{value}")
                .named("home")
                .constrain("value", EnumNameConstraint::new::<Number>()),
            (),
        );

        let values = RouteValues::new().with("value", "One");
        assert_eq!(router.url_for("home", &values).as_deref(), Some("/home/One"));

        let values = RouteValues::new().with("value", "Three");
        assert_eq!(router.url_for("home", &values), None);
        assert_eq!(router.url_for("missing", &RouteValues::new()), None);
    }

    #[test]
    fn url_for_falls_back_to_defaults() {
        let router = Router::new().on(
            Route::new(Method::GET, "/{controller}/{action}")
                .named("default")
                .with_default("action", "index"),
            (),
        );

        let values = RouteValues::new().with("controller", "home");
        assert_eq!(router.url_for("default", &values).as_deref(), Some("/home/index"));
        assert!(matches!(values.get("controller"), Some(RouteValue::Str(_))));
    }

    #[test]
    fn invalid_template_is_an_error() {
        let mut router = Router::new().on(Route::new(Method::GET, "/users/{id}"), ());
        let err = router.try_on(Route::new(Method::GET, "/users/{id}{ext}"), ()).err().unwrap();
        assert!(matches!(err, Error::InvalidTemplate { .. }));
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(router.len(), 1);
        assert!(router.recognize(&Method::GET, "/users/7").is_some());
    }

    #[test]
    fn duplicate_names_are_an_error() {
        let mut router = Router::new().on(Route::new(Method::GET, "/a").named("x"), ());
        let err = router.try_on(Route::new(Method::GET, "/b").named("x"), ()).err().unwrap();
        assert_eq!(err.to_string(), "duplicate route name `x`");

        router.try_on(Route::new(Method::GET, "/b").named("y"), ()).unwrap();
        assert_eq!(router.len(), 2);
        assert_eq!(router.url_for("x", &RouteValues::new()).as_deref(), Some("/a"));
        assert_eq!(router.url_for("y", &RouteValues::new()).as_deref(), Some("/b"));
    }

    #[test]
    fn path_segments_are_decoded() {
        let router = Router::new().on(
            Route::new(Method::GET, "/home/{value}")
                .constrain("value", ValueListConstraint::new(["a b", "x/y"])),
            (),
        );

        let hit = router.recognize(&Method::GET, "/home/a%20b").unwrap();
        assert_eq!(hit.values().get_str("value"), Some("a b"));
        assert!(router.recognize(&Method::GET, "/home/x%2Fy").is_some());
    }

    #[test]
    fn invalid_utf8_segment_is_a_non_match() {
        let router = Router::new().on(Route::new(Method::GET, "/home/{value}"), ());
        assert!(router.recognize(&Method::GET, "/home/%FF").is_none());
    }

    #[test]
    #[should_panic(expected = "invalid route")]
    fn on_panics_on_invalid_template() {
        let _ = Router::new().on(Route::new(Method::GET, "/{a}{b}"), ());
    }
}
