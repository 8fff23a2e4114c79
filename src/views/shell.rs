use crate::Route;
use crate::config::use_config;
use crate::session::{User, use_session};
use dioxus::prelude::*;

/// Entry of the signed-in sidebar
#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub icon: &'static str,
    pub route: Route,
}

/// Sidebar entries for `user`; the admin panel is listed for admins only
pub fn navigation_for(user: &User) -> Vec<NavItem> {
    let mut items = vec![
        NavItem { label: "Dashboard", icon: "▦", route: Route::Dashboard {} },
        NavItem { label: "Transfer Money", icon: "⇄", route: Route::Transfer {} },
        NavItem { label: "Bill Payments", icon: "💳", route: Route::Bills {} },
        NavItem { label: "Transactions", icon: "🧾", route: Route::Transactions {} },
        NavItem { label: "Profile", icon: "👤", route: Route::Profile {} },
        NavItem { label: "Settings", icon: "⚙", route: Route::Settings {} },
    ];
    if user.is_admin() {
        items.push(NavItem { label: "Admin Panel", icon: "🛡", route: Route::Admin {} });
    }
    items
}

fn nav_link_class(route: &Route, current: &Route) -> &'static str {
    if route == current {
        "nav-link active"
    } else {
        "nav-link"
    }
}

#[component]
pub fn Shell() -> Element {
    let session = use_session();
    let sidebar_open = use_signal(|| false);
    let user = session.read().user().cloned();

    rsx! {
        div { class: "app-shell",
            Header { sidebar_open }
            match user {
                Some(user) => rsx! {
                    div { class: "shell-body",
                        Sidebar { user, open: sidebar_open }
                        main { class: "shell-main",
                            div { class: "page", Outlet::<Route> {} }
                        }
                    }
                },
                None => rsx! {
                    main { Outlet::<Route> {} }
                },
            }
        }
    }
}

#[component]
fn Brand(name: String) -> Element {
    rsx! {
        div { class: "brand",
            div { class: "brand-mark", "🛡" }
            div { class: "brand-text",
                span { class: "brand-name", "{name}" }
                span { class: "brand-tagline", "Established 1852" }
            }
        }
    }
}

#[component]
fn Header(sidebar_open: Signal<bool>) -> Element {
    let mut sidebar_open = sidebar_open;
    let config = use_config();
    let mut session = use_session();
    let navigator = use_navigator();
    let route = use_route::<Route>();
    let mut show_menu = use_signal(|| false);

    let Some(user) = session.read().user().cloned() else {
        return rsx! {
            header { class: "app-header public",
                Link { to: Route::Home {},
                    Brand { name: config.bank_name.clone() }
                }
                nav { class: "public-nav",
                    Link { to: Route::Home {}, "Personal" }
                    Link { to: Route::Home {}, "Business" }
                    Link { to: Route::Home {}, "Wealth Management" }
                    Link { class: "sign-on", to: Route::Login {}, "Sign On" }
                    Link { class: "button primary", to: Route::Register {}, "Open Account" }
                }
            }
        };
    };

    let title = route.title().unwrap_or(config.bank_name.as_str()).to_string();

    rsx! {
        header { class: "app-header",
            div { class: "header-left",
                button {
                    class: "menu-toggle",
                    onclick: move |_| sidebar_open.set(!sidebar_open()),
                    if sidebar_open() { "✕" } else { "☰" }
                }
                Brand { name: config.bank_name.clone() }
                h1 { class: "page-title", "{title}" }
            }
            div { class: "header-right",
                button { class: "notifications",
                    "🔔"
                    span { class: "badge", "3" }
                }
                div { class: "user-menu",
                    button {
                        class: "user-button",
                        onclick: move |_| show_menu.set(!show_menu()),
                        span { class: "avatar", "👤" }
                        span { class: "user-name", "{user.name}" }
                    }
                    if show_menu() {
                        div { class: "menu-dropdown",
                            Link {
                                to: Route::Profile {},
                                onclick: move |_| show_menu.set(false),
                                "Profile"
                            }
                            button {
                                onclick: move |_| {
                                    show_menu.set(false);
                                    session.write().logout();
                                    let _ = navigator.push(Route::Home {});
                                },
                                "Sign Out"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Sidebar(user: User, open: Signal<bool>) -> Element {
    let mut open = open;
    let config = use_config();
    let current = use_route::<Route>();
    let items = navigation_for(&user);
    let sidebar_class = if open() { "sidebar open" } else { "sidebar" };

    rsx! {
        if open() {
            div { class: "sidebar-backdrop", onclick: move |_| open.set(false) }
        }
        aside { class: "{sidebar_class}",
            div { class: "sidebar-mobile-head",
                span { class: "brand-name", "{config.bank_name}" }
                button { onclick: move |_| open.set(false), "✕" }
            }
            nav { class: "sidebar-nav",
                for item in items {
                    Link {
                        key: "{item.label}",
                        class: "{nav_link_class(&item.route, &current)}",
                        to: item.route.clone(),
                        onclick: move |_| open.set(false),
                        span { class: "nav-icon", "{item.icon}" }
                        "{item.label}"
                    }
                }
            }
            div { class: "sidebar-user",
                div { class: "avatar large", "👤" }
                div {
                    p { class: "user-name", "{user.name}" }
                    p { class: "user-email", "{user.email}" }
                    p { class: "online",
                        span { class: "online-dot" }
                        "Online"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Role;

    fn user(role: Role) -> User {
        User {
            id: "usr-0001".to_string(),
            name: "Jane Doe".to_string(),
            email: "jane@securebank.test".to_string(),
            role,
        }
    }

    #[test]
    fn test_customer_navigation() {
        let items = navigation_for(&user(Role::Customer));
        assert_eq!(items.len(), 6);
        assert_eq!(items[0].route, Route::Dashboard {});
        assert!(items.iter().all(|i| i.route != Route::Admin {}));
    }

    #[test]
    fn test_admin_navigation_has_admin_panel() {
        let items = navigation_for(&user(Role::Admin));
        assert_eq!(items.last().map(|i| i.label), Some("Admin Panel"));
    }
}
