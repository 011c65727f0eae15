#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

/// Top-level pages selectable from the URL path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Home,
    Auth,
    Dashboard,
    Contact,
}

impl Route {
    /// Resolve a URL path to a route.
    ///
    /// Exact match on the four known paths; anything else, including the
    /// empty string, falls back to the landing page. Total — there is no
    /// "not found" outcome.
    pub fn from_path(path: &str) -> Self {
        match path {
            "/auth" => Self::Auth,
            "/dashboard" => Self::Dashboard,
            "/contact" => Self::Contact,
            _ => Self::Home,
        }
    }

    /// Canonical path used for navigation.
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Auth => "/auth",
            Self::Dashboard => "/dashboard",
            Self::Contact => "/contact",
        }
    }
}
