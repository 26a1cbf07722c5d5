use crate::models::user::User;
use crate::Route;

/// Where a user goes right after signing in.
pub fn landing_route(user: &User) -> Route {
    if user.is_admin() {
        Route::Admin
    } else {
        Route::Dashboard
    }
}

/// Returns the route to redirect to when `user` may not view `route`.
pub fn redirect_for(route: &Route, user: Option<&User>) -> Option<Route> {
    match (route, user) {
        (Route::Dashboard | Route::Tools | Route::Admin, None) => Some(Route::Login),
        (Route::Admin, Some(user)) if !user.is_admin() => Some(Route::Dashboard),
        (Route::Login | Route::Signup, Some(user)) => Some(landing_route(user)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::session::SeedAccounts;

    fn admin() -> User {
        SeedAccounts::demo().users[0].clone()
    }

    fn member() -> User {
        SeedAccounts::demo().users[1].clone()
    }

    #[test]
    fn test_guests_are_sent_to_login() {
        assert_eq!(redirect_for(&Route::Dashboard, None), Some(Route::Login));
        assert_eq!(redirect_for(&Route::Tools, None), Some(Route::Login));
        assert_eq!(redirect_for(&Route::Admin, None), Some(Route::Login));
    }

    #[test]
    fn test_public_routes_are_open() {
        assert_eq!(redirect_for(&Route::Home, None), None);
        assert_eq!(redirect_for(&Route::Login, None), None);
        assert_eq!(redirect_for(&Route::Signup, None), None);
        assert_eq!(redirect_for(&Route::Home, Some(&member())), None);
    }

    #[test]
    fn test_admin_route_requires_admin_role() {
        assert_eq!(redirect_for(&Route::Admin, Some(&member())), Some(Route::Dashboard));
        assert_eq!(redirect_for(&Route::Admin, Some(&admin())), None);
        assert_eq!(redirect_for(&Route::Tools, Some(&member())), None);
    }

    #[test]
    fn test_signed_in_users_skip_auth_pages() {
        assert_eq!(redirect_for(&Route::Login, Some(&admin())), Some(Route::Admin));
        assert_eq!(redirect_for(&Route::Signup, Some(&member())), Some(Route::Dashboard));
    }
}
