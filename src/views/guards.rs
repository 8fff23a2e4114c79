use crate::Route;
use crate::guard::{Access, protected_access, public_access};
use crate::session::{Session, use_session};
use dioxus::prelude::*;

#[component]
pub fn ProtectedRoute() -> Element {
    guarded(protected_access)
}

#[component]
pub fn PublicRoute() -> Element {
    guarded(public_access)
}

// Redirects happen in an effect so they re-run whenever the session changes
fn guarded(decide: fn(&Session) -> Access) -> Element {
    let session = use_session();
    let navigator = use_navigator();

    use_effect(move || {
        if let Access::Redirect(target) = decide(session.read().session()) {
            log::debug!("Guard redirecting to {}", target);
            let _ = navigator.replace(target);
        }
    });

    match decide(session.read().session()) {
        Access::Pending => rsx! {
            div { class: "guard-pending",
                div { class: "spinner" }
            }
        },
        Access::Render => rsx! {
            Outlet::<Route> {}
        },
        Access::Redirect(_) => rsx! {},
    }
}
