mod bank;
mod chart;
mod config;
mod fixtures;
mod guard;
mod money;
mod session;
mod transfer;
mod views;

use crate::config::{PortalConfig, portal_config};
use crate::money::Currency;
use crate::session::{SessionStore, StubIdentity};
use crate::transfer::{PaymentsGateway, StubPayments};
use dioxus::prelude::*;
use std::rc::Rc;
use views::{
    Admin, Bills, Dashboard, Home, Login, NotFound, Profile, ProtectedRoute, PublicRoute,
    Register, Settings, Shell, Transactions, Transfer,
};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[layout(PublicRoute)]
            #[route("/login")]
            Login {},
            #[route("/register")]
            Register {},
        #[end_layout]
        #[layout(ProtectedRoute)]
            #[route("/dashboard")]
            Dashboard {},
            #[route("/transfer")]
            Transfer {},
            #[route("/bills")]
            Bills {},
            #[route("/transactions")]
            Transactions {},
            #[route("/profile")]
            Profile {},
            #[route("/settings")]
            Settings {},
            #[route("/admin")]
            Admin {},
        #[end_layout]
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    /// Heading shown in the signed-in header, `None` falls back to the bank name
    pub fn title(&self) -> Option<&'static str> {
        match self {
            Route::Dashboard {} => Some("Dashboard"),
            Route::Transfer {} => Some("Transfer Money"),
            Route::Bills {} => Some("Bill Payments"),
            Route::Transactions {} => Some("Transaction History"),
            Route::Profile {} => Some("Profile"),
            Route::Settings {} => Some("Settings"),
            Route::Admin {} => Some("Admin Panel"),
            Route::Home {} | Route::Login {} | Route::Register {} | Route::NotFound { .. } => None,
        }
    }
}

#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[cfg_attr(not(feature = "server"), allow(dead_code))]
struct Args {
    #[arg(long, env = "SECUREBANK_BANK_NAME", default_value_t = String::from("SecureBank"))]
    bank_name: String,
    #[arg(long, env = "SECUREBANK_CURRENCY", default_value_t = Currency::Usd)]
    currency: Currency,
    /// Resume a session for this email instead of starting signed out
    #[arg(long, env = "SECUREBANK_DEMO_USER")]
    demo_user: Option<String>,
}

impl From<Args> for PortalConfig {
    fn from(args: Args) -> Self {
        PortalConfig {
            bank_name: args.bank_name,
            currency: args.currency,
            demo_user: args.demo_user,
        }
    }
}

fn main() {
    #[cfg(feature = "server")]
    {
        use clap::Parser;
        env_logger::init();
        let config = PortalConfig::from(Args::parse());
        log::info!(
            "Starting {} portal (currency {})",
            config.bank_name,
            config.currency
        );
        config::install(config);
    }
    dioxus::LaunchBuilder::new().launch(App);
}

#[component]
fn App() -> Element {
    let mut config = use_context_provider(|| Signal::new(PortalConfig::default()));
    let mut session = use_context_provider(|| {
        Signal::new(SessionStore::new(Rc::new(StubIdentity::default())))
    });
    use_context_provider(|| Rc::new(StubPayments::default()) as Rc<dyn PaymentsGateway>);

    // The session stays loading (guards show a spinner) until the served config
    // has replaced the placeholder identity
    use_future(move || async move {
        match portal_config().await {
            Ok(served) => {
                session.set(SessionStore::new(Rc::new(StubIdentity::new(
                    served.demo_user.clone(),
                ))));
                config.set(served);
            }
            Err(e) => log::warn!("Using default portal config: {}", e),
        }
        session.write().resolve();
    });

    rsx! {
        document::Title { "{config.read().bank_name}" }
        document::Stylesheet { href: MAIN_CSS }
        Router::<Route> {}
    }
}
