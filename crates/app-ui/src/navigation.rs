//! Navigation system for Z-Bazzar
//!
//! Type-safe routes, a keyed navigation stack, and a URL router for mapping
//! paths back to routes. The stack supports the two transitions the app
//! relies on: pushing (back always returns to the prior screen) and
//! resetting (used after sign-in/sign-up, which clears the back-stack).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Route Parameters
// =============================================================================

/// Parameters for a route
pub type RouteParams = HashMap<String, String>;

// =============================================================================
// Route Definitions
// =============================================================================

/// All possible routes in the application
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(tag = "route", content = "params")]
pub enum Route {
    // Authenticated group
    /// Storefront home (authenticated group entry)
    #[default]
    Home,
    /// Product detail, parameterized by an opaque product identifier
    ProductDetail {
        /// Product identifier
        id: String,
    },
    /// Settings
    Settings,

    // Unauthenticated group
    /// Sign-in screen (unauthenticated group entry)
    SignIn,
    /// Sign-up screen
    SignUp,

    // Error
    /// Not found
    NotFound,
}

impl Route {
    /// Get the URL path for this route
    pub fn to_path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::ProductDetail { id } => format!("/product/{}", urlencoding::encode(id)),
            Route::Settings => "/settings".to_string(),
            Route::SignIn => "/sign-in".to_string(),
            Route::SignUp => "/sign-up".to_string(),
            Route::NotFound => "/not-found".to_string(),
        }
    }

    /// Check if this route requires authentication
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Route::Home | Route::ProductDetail { .. } | Route::Settings
        )
    }

    /// Get a display title for this route
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Z-Bazzar",
            Route::ProductDetail { .. } => "Product",
            Route::Settings => "Settings",
            Route::SignIn => "Sign In",
            Route::SignUp => "Create Account",
            Route::NotFound => "Not Found",
        }
    }
}

// =============================================================================
// Navigation Stack
// =============================================================================

/// A navigation stack entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackEntry {
    /// The route
    pub route: Route,
    /// Unique key for this entry
    pub key: String,
    /// Scroll position to restore
    #[serde(default)]
    pub scroll_position: f32,
}

impl StackEntry {
    /// Create a new stack entry
    pub fn new(route: Route) -> Self {
        Self {
            route,
            key: uuid::Uuid::new_v4().to_string(),
            scroll_position: 0.0,
        }
    }
}

/// Navigation stack for a screen group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationStack {
    /// Stack entries (bottom to top)
    entries: Vec<StackEntry>,
    /// Root route for this stack
    root: Route,
}

impl NavigationStack {
    /// Create a new navigation stack with a root route
    pub fn new(root: Route) -> Self {
        Self {
            entries: vec![StackEntry::new(root.clone())],
            root,
        }
    }

    /// Push a route onto the stack
    pub fn push(&mut self, route: Route) {
        self.entries.push(StackEntry::new(route));
    }

    /// Pop the top route (returns true if popped, false if at root)
    pub fn pop(&mut self) -> bool {
        if self.entries.len() > 1 {
            self.entries.pop();
            true
        } else {
            false
        }
    }

    /// Pop to root
    pub fn pop_to_root(&mut self) {
        self.entries.truncate(1);
    }

    /// Replace the top route, keeping the entries beneath it
    pub fn replace(&mut self, route: Route) {
        if let Some(last) = self.entries.last_mut() {
            *last = StackEntry::new(route);
        }
    }

    /// Reset to a new root, clearing the back-stack entirely
    pub fn reset(&mut self, route: Route) {
        self.root = route.clone();
        self.entries = vec![StackEntry::new(route)];
    }

    /// Get the current (top) route
    pub fn current(&self) -> &Route {
        &self
            .entries
            .last()
            .expect("Stack should never be empty")
            .route
    }

    /// Get the current stack entry
    pub fn current_entry(&self) -> &StackEntry {
        self.entries.last().expect("Stack should never be empty")
    }

    /// Get mutable reference to current entry
    pub fn current_entry_mut(&mut self) -> &mut StackEntry {
        self.entries
            .last_mut()
            .expect("Stack should never be empty")
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }

    /// Get stack depth
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Get all entries
    pub fn entries(&self) -> &[StackEntry] {
        &self.entries
    }
}

// =============================================================================
// Router
// =============================================================================

/// Route pattern for matching
struct RoutePattern {
    /// Pattern segments
    segments: Vec<PatternSegment>,
    /// Route builder
    builder: fn(RouteParams) -> Option<Route>,
}

/// Segment type in a pattern
#[derive(Debug, Clone)]
enum PatternSegment {
    /// Literal segment
    Literal(String),
    /// Parameter segment
    Param(String),
}

/// URL Router for parsing paths to routes
pub struct Router {
    /// Route patterns
    patterns: Vec<RoutePattern>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Create a new router with all routes
    pub fn new() -> Self {
        let mut router = Self {
            patterns: Vec::new(),
        };

        router.add_route("/", |_| Some(Route::Home));
        router.add_route("/product/:id", |params| {
            Some(Route::ProductDetail {
                id: params.get("id")?.clone(),
            })
        });
        router.add_route("/settings", |_| Some(Route::Settings));
        router.add_route("/sign-in", |_| Some(Route::SignIn));
        router.add_route("/sign-up", |_| Some(Route::SignUp));

        router
    }

    /// Add a route pattern
    fn add_route(&mut self, pattern: &str, builder: fn(RouteParams) -> Option<Route>) {
        let segments = pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| {
                if let Some(param) = s.strip_prefix(':') {
                    PatternSegment::Param(param.to_string())
                } else {
                    PatternSegment::Literal(s.to_string())
                }
            })
            .collect();

        self.patterns.push(RoutePattern { segments, builder });
    }

    /// Match a path to a route
    pub fn match_path(&self, path: &str) -> Route {
        let (pathname, query) = if let Some(idx) = path.find('?') {
            (&path[..idx], Some(&path[idx + 1..]))
        } else {
            (path, None)
        };

        let path_segments: Vec<&str> = pathname.split('/').filter(|s| !s.is_empty()).collect();

        for pattern in &self.patterns {
            if let Some(params) = Self::match_pattern(&pattern.segments, &path_segments, query) {
                if let Some(route) = (pattern.builder)(params) {
                    return route;
                }
            }
        }

        Route::NotFound
    }

    /// Match a pattern against path segments
    fn match_pattern(
        pattern: &[PatternSegment],
        path: &[&str],
        query: Option<&str>,
    ) -> Option<RouteParams> {
        if pattern.len() != path.len() {
            return None;
        }

        let mut params = RouteParams::new();

        for (segment, actual) in pattern.iter().zip(path.iter()) {
            match segment {
                PatternSegment::Literal(expected) => {
                    if expected != *actual {
                        return None;
                    }
                }
                PatternSegment::Param(name) => {
                    params.insert(
                        name.clone(),
                        urlencoding::decode(actual).ok()?.into_owned(),
                    );
                }
            }
        }

        Self::parse_query(query, &mut params);

        Some(params)
    }

    /// Parse query string into params
    fn parse_query(query: Option<&str>, params: &mut RouteParams) {
        if let Some(query) = query {
            for pair in query.split('&') {
                if let Some((key, value)) = pair.split_once('=') {
                    if let Ok(decoded) = urlencoding::decode(value) {
                        params.insert(key.to_string(), decoded.into_owned());
                    }
                }
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
