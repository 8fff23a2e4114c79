use crate::Route;
use crate::bank::{Account, AccountKind, Transaction, TransactionKind};
use crate::money::{BalanceVisibility, format_currency};
use dioxus::prelude::*;

#[component]
pub fn AccountCard(
    account: Account,
    visibility: BalanceVisibility,
    on_toggle: EventHandler<()>,
) -> Element {
    let kind = account.kind;
    let balance = visibility.display(account.balance.abs(), account.currency);
    let owed = visibility.display_masked(account.balance, account.currency, 6);
    let last = account.last_transaction.clone().map(|last| {
        let arrow = if last.is_inflow() { "↗" } else { "↘" };
        let trend_class = if last.is_inflow() { "trend up" } else { "trend down" };
        let amount = visibility.display_masked(last.amount.abs(), account.currency, 4);
        let date = last.date.format("%b %d").to_string();
        (arrow, trend_class, amount, date)
    });

    rsx! {
        div { class: "{kind.css_class()}",
            div { class: "card-head",
                div {
                    span { class: "card-icon", "{kind.icon()}" }
                    h3 { "{account.name}" }
                    p { class: "card-subtitle", "{kind.subtitle()}" }
                }
                button {
                    class: "visibility-toggle",
                    title: "{visibility.toggle_label()} balance",
                    onclick: move |_| on_toggle.call(()),
                    if visibility.is_shown() { "👁" } else { "🙈" }
                }
            }
            p { class: "card-label", "{kind.balance_label()}" }
            p { class: "card-balance", "{balance}" }
            if kind == AccountKind::Credit {
                p { class: "card-owed",
                    "Current balance: {owed}"
                }
            }
            div { class: "card-foot",
                span { class: "card-number", "{account.masked_number()}" }
                if let Some((arrow, trend_class, amount, date)) = last {
                    span { class: "{trend_class}", "{arrow} {amount} · {date}" }
                }
            }
        }
    }
}

#[component]
pub fn TransactionCard(transaction: Transaction) -> Element {
    let kind = transaction.kind;
    let icon = transaction.category().icon(kind);
    let amount = format_currency(transaction.amount.abs(), transaction.currency);
    let amount_class = match kind {
        TransactionKind::Credit => "amount credit",
        TransactionKind::Debit => "amount debit",
    };

    rsx! {
        div { class: "transaction-card",
            div { class: "transaction-icon", "{icon}" }
            div { class: "transaction-body",
                p { class: "transaction-description", "{transaction.description}" }
                p { class: "transaction-meta",
                    "{transaction.counterparty()} · {transaction.display_date()}"
                }
            }
            div { class: "transaction-side",
                p { class: "{amount_class}", "{kind.sign()}{amount}" }
                span { class: "status {transaction.status.css_class()}", "{transaction.status.label()}" }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum QuickTarget {
    Navigate(Route),
    ComingSoon(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuickAction {
    pub label: &'static str,
    pub icon: &'static str,
    pub target: QuickTarget,
}

/// Shortcut tiles of the dashboard, in display order
pub fn quick_actions() -> Vec<QuickAction> {
    vec![
        QuickAction {
            label: "Transfer Money",
            icon: "⇄",
            target: QuickTarget::Navigate(Route::Transfer {}),
        },
        QuickAction {
            label: "Pay Bills",
            icon: "💳",
            target: QuickTarget::Navigate(Route::Bills {}),
        },
        QuickAction {
            label: "Mobile Deposit",
            icon: "📷",
            target: QuickTarget::ComingSoon("Mobile check deposit coming soon!"),
        },
        QuickAction {
            label: "View Statements",
            icon: "📄",
            target: QuickTarget::Navigate(Route::Transactions {}),
        },
        QuickAction {
            label: "Wire Transfer",
            icon: "🌐",
            target: QuickTarget::Navigate(Route::Transfer {}),
        },
        QuickAction {
            label: "ATM Locator",
            icon: "📍",
            target: QuickTarget::ComingSoon("ATM locator coming soon!"),
        },
    ]
}

#[component]
pub fn QuickActions() -> Element {
    let navigator = use_navigator();
    let mut notice = use_signal(|| None::<&'static str>);

    rsx! {
        div { class: "quick-actions",
            h3 { "Quick Actions" }
            div { class: "quick-grid",
                for QuickAction { label , icon , target } in quick_actions() {
                    button {
                        key: "{label}",
                        class: "quick-action",
                        onclick: move |_| match &target {
                            QuickTarget::Navigate(route) => {
                                notice.set(None);
                                let _ = navigator.push(route.clone());
                            }
                            QuickTarget::ComingSoon(message) => notice.set(Some(*message)),
                        },
                        span { class: "quick-icon", "{icon}" }
                        span { "{label}" }
                    }
                }
            }
            if let Some(message) = notice() {
                div { class: "notice",
                    span { "{message}" }
                    button { onclick: move |_| notice.set(None), "✕" }
                }
            }
        }
    }
}
