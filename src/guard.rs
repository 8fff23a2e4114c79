//! Access decisions for guarded routes
//!
//! Both checks are pure functions of the session so they can be reasoned about
//! apart from the router; the layouts in `views::guards` only act on the result.

use crate::Route;
use crate::session::Session;

#[derive(Debug, Clone, PartialEq)]
pub enum Access {
    /// Session not resolved yet, show a spinner and decide later
    Pending,
    Render,
    Redirect(Route),
}

/// Members-only pages: anonymous visitors are sent to the login page
pub fn protected_access(session: &Session) -> Access {
    match (session.loading, &session.user) {
        (true, _) => Access::Pending,
        (false, Some(_)) => Access::Render,
        (false, None) => Access::Redirect(Route::Login {}),
    }
}

/// Login and registration: signed-in users are sent to their dashboard
pub fn public_access(session: &Session) -> Access {
    match (session.loading, &session.user) {
        (true, _) => Access::Pending,
        (false, None) => Access::Render,
        (false, Some(_)) => Access::Redirect(Route::Dashboard {}),
    }
}
