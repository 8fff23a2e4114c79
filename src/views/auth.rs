use crate::Route;
use crate::config::use_config;
use crate::session::{Credentials, Registration, use_session};
use dioxus::prelude::*;

#[component]
pub fn Login() -> Element {
    let config = use_config();
    let mut session = use_session();
    let navigator = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let credentials = Credentials {
            email: email(),
            password: password(),
        };
        let result = session.write().login(&credentials);
        match result {
            Ok(_) => {
                error.set(None);
                let _ = navigator.replace(Route::Dashboard {});
            }
            Err(e) => {
                log::warn!("Sign on rejected: {}", e);
                error.set(Some(e.to_string()));
            }
        }
    };

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                h2 { "Sign on to {config.bank_name}" }
                p { class: "auth-subtitle", "Access your accounts securely" }
                if let Some(message) = error() {
                    div { class: "form-error", "{message}" }
                }
                form { onsubmit: handle_login,
                    label { r#for: "login-email", "Email" }
                    input {
                        id: "login-email",
                        r#type: "email",
                        placeholder: "you@example.com",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                    label { r#for: "login-password", "Password" }
                    input {
                        id: "login-password",
                        r#type: "password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                    button { class: "button primary wide", r#type: "submit", "Sign On" }
                }
                p { class: "auth-switch",
                    "New to {config.bank_name}? "
                    Link { to: Route::Register {}, "Open an account" }
                }
            }
        }
    }
}

#[component]
pub fn Register() -> Element {
    let config = use_config();
    let mut session = use_session();
    let navigator = use_navigator();
    let mut form = use_signal(Registration::default);
    let mut error = use_signal(|| None::<String>);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let result = session.write().register(&form.read());
        match result {
            Ok(_) => {
                error.set(None);
                let _ = navigator.replace(Route::Dashboard {});
            }
            Err(e) => {
                log::warn!("Registration rejected: {}", e);
                error.set(Some(e.to_string()));
            }
        }
    };

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                h2 { "Open your {config.bank_name} account" }
                p { class: "auth-subtitle", "It only takes a few minutes" }
                if let Some(message) = error() {
                    div { class: "form-error", "{message}" }
                }
                form { onsubmit: handle_register,
                    label { r#for: "register-name", "Full name" }
                    input {
                        id: "register-name",
                        value: "{form.read().name}",
                        oninput: move |evt| form.write().name = evt.value(),
                    }
                    label { r#for: "register-email", "Email" }
                    input {
                        id: "register-email",
                        r#type: "email",
                        value: "{form.read().email}",
                        oninput: move |evt| form.write().email = evt.value(),
                    }
                    label { r#for: "register-password", "Password" }
                    input {
                        id: "register-password",
                        r#type: "password",
                        value: "{form.read().password}",
                        oninput: move |evt| form.write().password = evt.value(),
                    }
                    label { r#for: "register-confirm", "Confirm password" }
                    input {
                        id: "register-confirm",
                        r#type: "password",
                        value: "{form.read().confirm_password}",
                        oninput: move |evt| form.write().confirm_password = evt.value(),
                    }
                    button { class: "button primary wide", r#type: "submit", "Open Account" }
                }
                p { class: "auth-switch",
                    "Already a customer? "
                    Link { to: Route::Login {}, "Sign on" }
                }
            }
        }
    }
}
