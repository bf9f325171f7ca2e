//! Routing definitions for the Credfolio UI.
use yew_router::prelude::*;

/// Top-level pages of the web app.
#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    /// Application root: the credential list.
    #[at("/")]
    Home,
    /// Sign-in page wrapped in the auth shell.
    #[at("/sign-in")]
    SignIn,
    /// Fallback for unknown paths.
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::Route;
    use yew_router::Routable;

    #[test]
    fn home_is_the_application_root() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::recognize("/sign-in"), Some(Route::SignIn));
    }

    #[test]
    fn not_found_route_is_declared() {
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
    }
}
