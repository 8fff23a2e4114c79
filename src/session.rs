//! Session store and the identity seam
//!
//! A [`SessionStore`] is created once when the app mounts and handed to the view
//! layer through a context signal. Credentials are checked by an
//! [`IdentityService`]; the bundled [`StubIdentity`] only checks the shape of
//! the input and accepts anything well formed.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Customer,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Password must be at least 8 characters")]
    PasswordTooShort,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Whoever vouches for a user's identity
pub trait IdentityService {
    /// User of an already established session, if any
    fn current_user(&self) -> Option<User>;
    fn sign_in(&self, credentials: &Credentials) -> Result<User, AuthError>;
    fn sign_up(&self, registration: &Registration) -> Result<User, AuthError>;
    fn sign_out(&self, _user: &User) {}
}

/// Accepts any well-formed input; nothing is checked against a directory
#[derive(Debug, Default)]
pub struct StubIdentity {
    demo_email: Option<String>,
    next_id: Cell<u32>,
}

impl StubIdentity {
    pub fn new(demo_email: Option<String>) -> Self {
        Self {
            demo_email,
            next_id: Cell::new(0),
        }
    }

    fn issue(&self, name: String, email: &str) -> User {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        User {
            id: format!("usr-{:04}", id),
            name,
            email: email.to_string(),
            role: role_for(email),
        }
    }
}

impl IdentityService for StubIdentity {
    fn current_user(&self) -> Option<User> {
        let email = self.demo_email.as_deref()?;
        check_email(email).ok()?;
        Some(self.issue(name_from_email(email), email.trim()))
    }

    fn sign_in(&self, credentials: &Credentials) -> Result<User, AuthError> {
        let email = credentials.email.trim();
        require(email, "Email")?;
        require(&credentials.password, "Password")?;
        check_email(email)?;
        Ok(self.issue(name_from_email(email), email))
    }

    fn sign_up(&self, registration: &Registration) -> Result<User, AuthError> {
        let name = registration.name.trim();
        let email = registration.email.trim();
        require(name, "Full name")?;
        require(email, "Email")?;
        require(&registration.password, "Password")?;
        check_email(email)?;
        if registration.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::PasswordTooShort);
        }
        if registration.password != registration.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }
        Ok(self.issue(name.to_string(), email))
    }
}

fn require(value: &str, field: &'static str) -> Result<(), AuthError> {
    if value.trim().is_empty() {
        Err(AuthError::MissingField(field))
    } else {
        Ok(())
    }
}

fn check_email(email: &str) -> Result<(), AuthError> {
    match email.trim().split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(AuthError::InvalidEmail),
    }
}

fn role_for(email: &str) -> Role {
    match email.trim().split_once('@') {
        Some((local, _)) if local.eq_ignore_ascii_case("admin") => Role::Admin,
        _ => Role::Customer,
    }
}

/// `jane.doe@bank.test` -> `Jane Doe`
fn name_from_email(email: &str) -> String {
    let local = email.trim().split('@').next().unwrap_or_default();
    local
        .split(['.', '_', '-'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Current user and whether the session is still being resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

pub struct SessionStore {
    session: Session,
    identity: Rc<dyn IdentityService>,
}

impl SessionStore {
    /// Starts in the loading state; call [`SessionStore::resolve`] once mounted
    pub fn new(identity: Rc<dyn IdentityService>) -> Self {
        Self {
            session: Session::default(),
            identity,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn user(&self) -> Option<&User> {
        self.session.user.as_ref()
    }

    /// Ends the loading phase with whatever session the identity service reports
    pub fn resolve(&mut self) {
        if !self.session.loading {
            return;
        }
        self.session.user = self.identity.current_user();
        self.session.loading = false;
        match &self.session.user {
            Some(user) => log::info!("Session resumed for {}", user.email),
            None => log::debug!("Session resolved without a user"),
        }
    }

    pub fn login(&mut self, credentials: &Credentials) -> Result<User, AuthError> {
        let user = self.identity.sign_in(credentials)?;
        log::info!("{} signed in", user.email);
        Ok(self.establish(user))
    }

    pub fn register(&mut self, registration: &Registration) -> Result<User, AuthError> {
        let user = self.identity.sign_up(registration)?;
        log::info!("{} registered as {}", user.email, user.id);
        Ok(self.establish(user))
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.session.user.take() {
            self.identity.sign_out(&user);
            log::info!("{} signed out", user.email);
        }
        self.session.loading = false;
    }

    fn establish(&mut self, user: User) -> User {
        self.session.user = Some(user.clone());
        self.session.loading = false;
        user
    }
}

/// Session signal provided by the app root
pub fn use_session() -> Signal<SessionStore> {
    use_context::<Signal<SessionStore>>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(demo: Option<&str>) -> SessionStore {
        SessionStore::new(Rc::new(StubIdentity::new(demo.map(str::to_string))))
    }

    fn credentials(email: &str, password: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    fn registration(name: &str, email: &str, password: &str, confirm: &str) -> Registration {
        Registration {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn test_store_starts_loading() {
        let store = store(None);
        assert!(store.session().loading);
        assert!(store.user().is_none());
    }

    #[test]
    fn test_resolve_without_demo_user() {
        let mut store = store(None);
        store.resolve();
        assert!(!store.session().loading);
        assert!(store.user().is_none());
    }

    #[test]
    fn test_resolve_with_demo_user() {
        let mut store = store(Some("jane.doe@securebank.test"));
        store.resolve();
        let user = store.user().unwrap();
        assert_eq!(user.name, "Jane Doe");
        assert_eq!(user.role, Role::Customer);
    }

    #[test]
    fn test_resolve_only_once() {
        let mut store = store(Some("jane@securebank.test"));
        store.resolve();
        store.logout();
        store.resolve();
        assert!(store.user().is_none());
    }

    #[test]
    fn test_login_sets_user_and_clears_loading() {
        let mut store = store(None);
        let user = store
            .login(&credentials("john_smith@securebank.test", "hunter22"))
            .unwrap();
        assert_eq!(user.name, "John Smith");
        assert_eq!(store.user(), Some(&user));
        assert!(!store.session().loading);
    }

    #[test]
    fn test_login_errors_leave_session_untouched() {
        let mut store = store(None);
        store.resolve();
        assert_eq!(
            store.login(&credentials("", "secret")),
            Err(AuthError::MissingField("Email"))
        );
        assert_eq!(
            store.login(&credentials("john@x.test", "")),
            Err(AuthError::MissingField("Password"))
        );
        assert_eq!(
            store.login(&credentials("not-an-email", "secret")),
            Err(AuthError::InvalidEmail)
        );
        assert!(store.user().is_none());
    }

    #[test]
    fn test_admin_role_from_email() {
        let mut store = store(None);
        let user = store.login(&credentials("Admin@securebank.test", "pw")).unwrap();
        assert!(user.is_admin());
    }

    #[test]
    fn test_register_validations() {
        let mut store = store(None);
        assert_eq!(
            store.register(&registration("", "a@b.c", "longenough", "longenough")),
            Err(AuthError::MissingField("Full name"))
        );
        assert_eq!(
            store.register(&registration("Ann", "a@b.c", "short", "short")),
            Err(AuthError::PasswordTooShort)
        );
        assert_eq!(
            store.register(&registration("Ann", "a@b.c", "longenough", "different")),
            Err(AuthError::PasswordMismatch)
        );
        let user = store
            .register(&registration(" Ann Lee ", "ann@b.c", "longenough", "longenough"))
            .unwrap();
        assert_eq!(user.name, "Ann Lee");
        assert_eq!(store.user().map(|u| u.email.as_str()), Some("ann@b.c"));
    }

    #[test]
    fn test_issued_ids_are_unique() {
        let mut store = store(None);
        let first = store.login(&credentials("a@b.c", "pw")).unwrap();
        let second = store.login(&credentials("a@b.c", "pw")).unwrap();
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_logout_clears_user() {
        let mut store = store(None);
        store.login(&credentials("a@b.c", "pw")).unwrap();
        store.logout();
        assert!(store.user().is_none());
        assert!(!store.session().loading);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AuthError::MissingField("Email").to_string(),
            "Email is required"
        );
        assert_eq!(
            AuthError::PasswordTooShort.to_string(),
            "Password must be at least 8 characters"
        );
    }
}
