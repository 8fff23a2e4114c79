use crate::Route;
use crate::config::use_config;
use dioxus::prelude::*;

// (icon, title, description)
const FEATURES: &[(&str, &str, &str)] = &[
    (
        "🛡",
        "Security & Protection",
        "Your accounts are protected by advanced security measures and FDIC insurance up to $250,000.",
    ),
    (
        "📱",
        "Mobile & Online Banking",
        "Bank anytime, anywhere with our award-winning mobile app and online platform.",
    ),
    (
        "📈",
        "Financial Planning",
        "Get personalized insights and tools to help you reach your financial goals.",
    ),
    (
        "👥",
        "Customer Support",
        "Access 24/7 customer service and visit over 4,700 locations nationwide.",
    ),
];

// (title, description, highlights)
const PRODUCTS: &[(&str, &str, [&str; 3])] = &[
    (
        "Checking Accounts",
        "Everyday banking made simple with no monthly fees and convenient access.",
        ["No minimum balance", "Free online banking", "Mobile check deposit"],
    ),
    (
        "Savings Accounts",
        "Grow your money with competitive rates and flexible savings options.",
        ["High yield options", "Automatic savings", "Goal tracking tools"],
    ),
    (
        "Credit Cards",
        "Earn rewards and build credit with our range of credit card options.",
        ["Cash back rewards", "No annual fee options", "Credit monitoring"],
    ),
    (
        "Home Loans",
        "Make homeownership possible with competitive rates and expert guidance.",
        ["Low down payment", "First-time buyer programs", "Online pre-approval"],
    ),
];

const STATS: &[(&str, &str)] = &[
    ("70M+", "Customers Served"),
    ("4,700+", "Locations"),
    ("150+", "Years of Service"),
    ("#1", "Small Business Lender"),
];

#[component]
pub fn Home() -> Element {
    let config = use_config();

    rsx! {
        div { id: "home-page",
            section { class: "hero",
                div { class: "hero-copy",
                    h1 {
                        "Banking that puts"
                        span { class: "accent", " customers first" }
                    }
                    p {
                        "For over 150 years, we've been helping customers achieve their financial goals. "
                        "Experience banking built around your needs."
                    }
                    div { class: "hero-actions",
                        Link { class: "button accent", to: Route::Register {}, "Open Account Today" }
                        Link { class: "button outline", to: Route::Login {}, "Sign On" }
                    }
                    div { class: "hero-badges",
                        span { "🏅 FDIC Insured" }
                        span { "🛡 Bank-Grade Security" }
                    }
                }
                div { class: "hero-card",
                    h3 { "{config.bank_name}" }
                    p { "Online banking, wherever you are." }
                }
            }

            section { class: "products",
                h2 { "Banking products for every stage of life" }
                div { class: "product-grid",
                    for (title , description , highlights) in PRODUCTS.iter() {
                        div { key: "{title}", class: "product-card",
                            h3 { "{title}" }
                            p { "{description}" }
                            ul {
                                for highlight in highlights.iter() {
                                    li { key: "{highlight}", "✔ {highlight}" }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "features",
                h2 { "Why choose {config.bank_name}?" }
                div { class: "feature-grid",
                    for (icon , title , description) in FEATURES.iter() {
                        div { key: "{title}", class: "feature",
                            div { class: "feature-icon", "{icon}" }
                            h3 { "{title}" }
                            p { "{description}" }
                        }
                    }
                }
            }

            section { class: "stats",
                for (value , label) in STATS.iter() {
                    div { key: "{label}", class: "stat",
                        span { class: "stat-value", "{value}" }
                        span { class: "stat-label", "{label}" }
                    }
                }
            }

            section { class: "cta",
                h2 { "Ready to get started?" }
                p { "Join millions of customers who trust us with their financial future." }
                Link { class: "button accent", to: Route::Register {}, "Open Your Account" }
            }
        }
    }
}
