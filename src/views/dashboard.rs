use crate::Route;
use crate::bank::{holding_currency, total_balance};
use crate::chart::{bar_heights, polyline_points};
use crate::fixtures::Ledger;
use crate::money::BalanceVisibility;
use crate::session::use_session;
use crate::views::widgets::{AccountCard, QuickActions, TransactionCard};
use dioxus::prelude::*;

const CHART_WIDTH: f64 = 600.0;
const CHART_HEIGHT: f64 = 240.0;

// (label, value, detail)
const METRICS: &[(&str, &str, &str)] = &[
    ("Monthly Spending", "$3,400", "+12% from last month"),
    ("Savings Goal", "68%", "$6,800 of $10,000"),
    ("Credit Score", "785", "Excellent · +5 this month"),
];

#[component]
pub fn Dashboard() -> Element {
    let session = use_session();
    let mut visibility = use_signal(BalanceVisibility::default);
    let ledger = Ledger::load_or_empty();

    let first_name = session
        .read()
        .user()
        .and_then(|u| u.name.split_whitespace().next().map(str::to_string))
        .unwrap_or_default();
    let total = visibility().display(
        total_balance(&ledger.accounts),
        holding_currency(&ledger.accounts),
    );
    let heights = bar_heights(&ledger.monthly_spending);
    let points = polyline_points(&ledger.balance_history, CHART_WIDTH, CHART_HEIGHT);

    rsx! {
        div { id: "dashboard",
            section { class: "welcome-banner",
                div {
                    h2 { "Good to see you, {first_name}" }
                    p { "Here's what's happening with your accounts today." }
                }
                div { class: "total-balance",
                    p { class: "card-label", "Total Balance" }
                    p { class: "card-balance", "{total}" }
                    p { class: "trend up", "+2.5% from last month" }
                }
            }

            div { class: "metrics",
                for (label , value , detail) in METRICS.iter() {
                    div { key: "{label}", class: "metric",
                        p { class: "metric-label", "{label}" }
                        p { class: "metric-value", "{value}" }
                        p { class: "metric-detail", "{detail}" }
                    }
                }
            }

            QuickActions {}

            section { class: "accounts",
                div { class: "section-head",
                    h3 { "Your Accounts" }
                    button {
                        class: "link-button",
                        onclick: move |_| visibility.write().toggle(),
                        "{visibility().toggle_label()} balances"
                    }
                }
                div { class: "account-grid",
                    for account in ledger.accounts.iter().cloned() {
                        AccountCard {
                            key: "{account.id}",
                            account,
                            visibility: visibility(),
                            on_toggle: move |_| visibility.write().toggle(),
                        }
                    }
                }
            }

            div { class: "charts",
                section { class: "chart-card",
                    h3 { "Monthly Spending" }
                    div { class: "bar-chart",
                        for (month , height) in ledger.monthly_spending.iter().zip(heights) {
                            div { key: "{month.month}", class: "bar-column",
                                div { class: "bar", style: "height: {height}%" }
                                span { class: "bar-label", "{month.month}" }
                            }
                        }
                    }
                }
                section { class: "chart-card",
                    h3 { "Balance History" }
                    svg {
                        class: "line-chart",
                        view_box: "0 0 {CHART_WIDTH} {CHART_HEIGHT}",
                        preserve_aspect_ratio: "none",
                        polyline {
                            fill: "none",
                            stroke: "currentColor",
                            stroke_width: "3",
                            points: "{points}",
                        }
                    }
                    div { class: "line-labels",
                        for point in ledger.balance_history.iter() {
                            span { key: "{point.label}", "{point.label}" }
                        }
                    }
                }
            }

            section { class: "recent-transactions",
                div { class: "section-head",
                    h3 { "Recent Transactions" }
                    Link { to: Route::Transactions {}, "View all" }
                }
                for transaction in ledger.recent_transactions.iter().cloned() {
                    TransactionCard { key: "{transaction.id}", transaction }
                }
            }
        }
    }
}
