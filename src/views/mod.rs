//! Web interface components for the SecureBank portal
//!
//! This module contains the Dioxus components that make up the web interface:
//! the application shell, route guards, pages and the banking widgets they share.

/// Header, sidebar and page outlet
mod shell;
pub use shell::Shell;

/// Route guard layouts
mod guards;
pub use guards::{ProtectedRoute, PublicRoute};

/// Marketing page
mod home;
pub use home::Home;

/// Sign-on and account opening
mod auth;
pub use auth::{Login, Register};

/// Account overview
mod dashboard;
pub use dashboard::Dashboard;

/// Money transfer form
mod transfer;
pub use transfer::Transfer;

/// Pages that are not built yet
mod placeholder;
pub use placeholder::{Admin, Bills, NotFound, Profile, Settings, Transactions};

/// Account, transaction and quick action cards
mod widgets;
