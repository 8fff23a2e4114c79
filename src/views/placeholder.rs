use crate::Route;
use dioxus::prelude::*;

#[component]
fn ComingSoon(title: &'static str, blurb: &'static str) -> Element {
    rsx! {
        div { class: "coming-soon",
            h1 { "{title}" }
            p { "Coming soon! {blurb}" }
        }
    }
}

#[component]
pub fn Bills() -> Element {
    rsx! {
        ComingSoon { title: "Bill Payments", blurb: "Pay all your bills in one place." }
    }
}

#[component]
pub fn Transactions() -> Element {
    rsx! {
        ComingSoon { title: "Transaction History", blurb: "View and analyze all your transactions." }
    }
}

#[component]
pub fn Profile() -> Element {
    rsx! {
        ComingSoon { title: "Profile", blurb: "Manage your profile and preferences." }
    }
}

#[component]
pub fn Settings() -> Element {
    rsx! {
        ComingSoon { title: "Settings", blurb: "Customize your banking experience." }
    }
}

#[component]
pub fn Admin() -> Element {
    rsx! {
        ComingSoon { title: "Admin Panel", blurb: "Admin features for account management." }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    log::debug!("No page at {}", path);

    rsx! {
        div { class: "coming-soon",
            h1 { "Page not found" }
            p { "There is nothing at {path}." }
            Link { class: "button primary", to: Route::Home {}, "Back to home" }
        }
    }
}
