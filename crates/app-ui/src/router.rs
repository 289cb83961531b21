//! Root router for Z-Bazzar
//!
//! Chooses between the unauthenticated and authenticated screen groups from
//! the current auth state, with a neutral loading placeholder while the auth
//! store is still resolving. Exactly one group is mounted at any time after
//! loading, and switching groups drops the outgoing group's local state
//! (form fields, selections, navigation stack) entirely.
//!
//! The router derives its group synchronously from the state it is handed,
//! so there is no stale-render window between an auth store change and
//! re-evaluation.

use serde::{Deserialize, Serialize};

use app_state::{AuthState, ThemeStore};

use crate::navigation::{NavigationStack, Route};
use crate::screens::{ProductDetailScreen, SettingsScreen, SignInScreen, SignUpScreen};

// =============================================================================
// Screen Groups
// =============================================================================

/// Which disjoint set of screens is (or should be) mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenGroup {
    /// Auth store still resolving: neutral placeholder, no screens mounted
    Loading,
    /// Signed out: sign-in/sign-up screens
    Unauthenticated,
    /// Signed in: storefront screens
    Authenticated,
}

impl ScreenGroup {
    /// The group for an auth state. Pure; the three cases are exhaustive
    /// and mutually exclusive.
    pub fn for_state(state: &AuthState) -> Self {
        if state.loading {
            ScreenGroup::Loading
        } else if state.identity.is_none() {
            ScreenGroup::Unauthenticated
        } else {
            ScreenGroup::Authenticated
        }
    }
}

// =============================================================================
// Mounted Groups
// =============================================================================

/// Screens of the unauthenticated group.
#[derive(Debug, Clone)]
pub struct UnauthenticatedScreens {
    /// Sign-in form
    pub sign_in: SignInScreen,
    /// Sign-up form
    pub sign_up: SignUpScreen,
    /// Group navigation stack, rooted at sign-in
    pub stack: NavigationStack,
}

impl UnauthenticatedScreens {
    fn new() -> Self {
        Self {
            sign_in: SignInScreen::new(),
            sign_up: SignUpScreen::new(),
            stack: NavigationStack::new(Route::SignIn),
        }
    }
}

/// Screens of the authenticated group.
#[derive(Debug, Clone)]
pub struct AuthenticatedScreens {
    /// Settings screen
    pub settings: SettingsScreen,
    /// Product detail screen, present while one is open
    pub product_detail: Option<ProductDetailScreen>,
    /// Group navigation stack, rooted at home
    pub stack: NavigationStack,
}

impl AuthenticatedScreens {
    fn new(theme: &ThemeStore) -> Self {
        Self {
            settings: SettingsScreen::new(theme),
            product_detail: None,
            stack: NavigationStack::new(Route::Home),
        }
    }

    /// Open the product detail screen for a product id.
    pub fn open_product(&mut self, id: impl Into<String>) {
        let id = id.into();
        self.product_detail = Some(ProductDetailScreen::new(id.clone()));
        self.stack.push(Route::ProductDetail { id });
    }

    /// Open the settings screen.
    pub fn open_settings(&mut self) {
        self.stack.push(Route::Settings);
    }

    /// Pop back to the prior screen. Returns false at the stack root.
    pub fn go_back(&mut self) -> bool {
        let popped = self.stack.pop();
        if popped && !matches!(self.stack.current(), Route::ProductDetail { .. }) {
            self.product_detail = None;
        }
        popped
    }
}

/// What the root router currently has mounted.
#[derive(Debug, Clone)]
pub enum Mounted {
    /// Neutral loading placeholder
    Loading,
    /// The unauthenticated group
    Unauthenticated(UnauthenticatedScreens),
    /// The authenticated group
    Authenticated(AuthenticatedScreens),
}

impl Mounted {
    /// The group this mount belongs to.
    pub fn group(&self) -> ScreenGroup {
        match self {
            Mounted::Loading => ScreenGroup::Loading,
            Mounted::Unauthenticated(_) => ScreenGroup::Unauthenticated,
            Mounted::Authenticated(_) => ScreenGroup::Authenticated,
        }
    }
}

// =============================================================================
// Root Router
// =============================================================================

/// Mounts exactly one screen group for the current auth state.
#[derive(Debug)]
pub struct RootRouter {
    theme: ThemeStore,
    mounted: Mounted,
}

impl RootRouter {
    /// Create a router showing the loading placeholder.
    pub fn new(theme: ThemeStore) -> Self {
        Self {
            theme,
            mounted: Mounted::Loading,
        }
    }

    /// The currently mounted group.
    pub fn group(&self) -> ScreenGroup {
        self.mounted.group()
    }

    /// Borrow the mounted screens.
    pub fn mounted(&self) -> &Mounted {
        &self.mounted
    }

    /// Mutably borrow the mounted screens.
    pub fn mounted_mut(&mut self) -> &mut Mounted {
        &mut self.mounted
    }

    /// The route currently on top of the mounted group's stack, if any.
    pub fn current_route(&self) -> Option<&Route> {
        match &self.mounted {
            Mounted::Loading => None,
            Mounted::Unauthenticated(group) => Some(group.stack.current()),
            Mounted::Authenticated(group) => Some(group.stack.current()),
        }
    }

    /// Re-evaluate against the given auth state.
    ///
    /// If the group changed, the previous group's screens are dropped and a
    /// fresh group is mounted (unauthenticated rooted at sign-in,
    /// authenticated rooted at home). Returns true on a remount.
    pub fn sync(&mut self, state: &AuthState) -> bool {
        let target = ScreenGroup::for_state(state);
        if target == self.mounted.group() {
            return false;
        }

        tracing::debug!(prev = ?self.mounted.group(), next = ?target, "screen group switch");
        self.mounted = match target {
            ScreenGroup::Loading => Mounted::Loading,
            ScreenGroup::Unauthenticated => {
                Mounted::Unauthenticated(UnauthenticatedScreens::new())
            }
            ScreenGroup::Authenticated => {
                Mounted::Authenticated(AuthenticatedScreens::new(&self.theme))
            }
        };
        true
    }

    /// Convenience view of the unauthenticated group, if mounted.
    pub fn unauthenticated_mut(&mut self) -> Option<&mut UnauthenticatedScreens> {
        match &mut self.mounted {
            Mounted::Unauthenticated(group) => Some(group),
            _ => None,
        }
    }

    /// Convenience view of the authenticated group, if mounted.
    pub fn authenticated_mut(&mut self) -> Option<&mut AuthenticatedScreens> {
        match &mut self.mounted {
            Mounted::Authenticated(group) => Some(group),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_state::{AuthStore, Identity};

    fn signed_in_state() -> AuthState {
        AuthState {
            identity: Some(Identity::new("1", "a@b.com", "Test User")),
            loading: false,
        }
    }

    fn signed_out_state() -> AuthState {
        AuthState {
            identity: None,
            loading: false,
        }
    }

    #[test]
    fn loading_wins_regardless_of_identity() {
        let loading_signed_out = AuthState {
            identity: None,
            loading: true,
        };
        let loading_signed_in = AuthState {
            identity: Some(Identity::new("1", "a@b.com", "Test User")),
            loading: true,
        };

        assert_eq!(
            ScreenGroup::for_state(&loading_signed_out),
            ScreenGroup::Loading
        );
        assert_eq!(
            ScreenGroup::for_state(&loading_signed_in),
            ScreenGroup::Loading
        );
    }

    #[test]
    fn resolved_states_split_on_identity() {
        assert_eq!(
            ScreenGroup::for_state(&signed_out_state()),
            ScreenGroup::Unauthenticated
        );
        assert_eq!(
            ScreenGroup::for_state(&signed_in_state()),
            ScreenGroup::Authenticated
        );
    }

    #[tokio::test]
    async fn starts_on_loading_placeholder() {
        let router = RootRouter::new(ThemeStore::new());
        assert_eq!(router.group(), ScreenGroup::Loading);
        assert!(router.current_route().is_none());
    }

    #[tokio::test]
    async fn mounts_groups_at_their_roots() {
        let mut router = RootRouter::new(ThemeStore::new());

        assert!(router.sync(&signed_out_state()));
        assert_eq!(router.group(), ScreenGroup::Unauthenticated);
        assert_eq!(router.current_route(), Some(&Route::SignIn));

        assert!(router.sync(&signed_in_state()));
        assert_eq!(router.group(), ScreenGroup::Authenticated);
        assert_eq!(router.current_route(), Some(&Route::Home));
    }

    #[tokio::test]
    async fn sync_without_group_change_preserves_local_state() {
        let mut router = RootRouter::new(ThemeStore::new());
        router.sync(&signed_in_state());

        router.authenticated_mut().unwrap().open_settings();
        assert!(!router.sync(&signed_in_state()));
        assert_eq!(router.current_route(), Some(&Route::Settings));
    }

    #[tokio::test]
    async fn group_switch_drops_local_screen_state() {
        let mut router = RootRouter::new(ThemeStore::new());
        router.sync(&signed_out_state());

        router
            .unauthenticated_mut()
            .unwrap()
            .sign_in
            .set_email("a@b.com");

        // Across the auth boundary and back: the form starts clean.
        router.sync(&signed_in_state());
        router.sync(&signed_out_state());
        assert_eq!(router.unauthenticated_mut().unwrap().sign_in.email, "");
    }

    #[tokio::test]
    async fn product_detail_lifecycle_follows_stack() {
        let mut router = RootRouter::new(ThemeStore::new());
        router.sync(&signed_in_state());

        let group = router.authenticated_mut().unwrap();
        group.open_product("sku-1");
        assert_eq!(
            *group.stack.current(),
            Route::ProductDetail {
                id: "sku-1".to_string()
            }
        );
        assert!(group.product_detail.is_some());

        assert!(group.go_back());
        assert_eq!(*group.stack.current(), Route::Home);
        assert!(group.product_detail.is_none());

        // At the root, back is refused.
        assert!(!group.go_back());
    }

    #[tokio::test]
    async fn sign_out_remounts_unauthenticated_group() {
        let store = AuthStore::new();
        let mut router = RootRouter::new(ThemeStore::new());

        router.sync(&store.state());
        assert_eq!(router.group(), ScreenGroup::Loading);

        store.resolve();
        router.sync(&store.state());
        assert_eq!(router.group(), ScreenGroup::Unauthenticated);

        store.sign_in(Identity::new("1", "a@b.com", "Test User")).await;
        router.sync(&store.state());
        assert_eq!(router.group(), ScreenGroup::Authenticated);

        store.sign_out();
        router.sync(&store.state());
        assert_eq!(router.group(), ScreenGroup::Unauthenticated);
    }
}
