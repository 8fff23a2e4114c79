use crate::bank::Account;
use crate::config::use_config;
use crate::fixtures::Ledger;
use crate::money::{Currency, format_currency};
use crate::transfer::{
    Destination, PaymentsGateway, RoutingCode, TransferField, TransferForm,
    TransferReceipt, TransferSnapshot, TransferStage, TransferType, remaining_balance,
};
use dioxus::prelude::*;
use std::rc::Rc;

#[component]
pub fn Transfer() -> Element {
    let currency = use_config().currency;
    let mut form = use_signal(move || TransferForm::with_currency(currency));
    let accounts = use_hook(|| Ledger::load_or_empty().transfer_accounts);
    let payments = use_context::<Rc<dyn PaymentsGateway>>();
    let mut payment_error = use_signal(|| None::<String>);

    let stage = form.read().stage().clone();

    rsx! {
        div { id: "transfer-page",
            div { class: "page-head",
                h2 { "Transfer Money" }
                p { "Move money between your accounts or send it to someone else." }
            }
            match stage {
                TransferStage::Editing => rsx! {
                    TransferEditor { form, accounts: accounts.clone() }
                },
                TransferStage::Reviewing(snapshot) => rsx! {
                    if let Some(message) = payment_error() {
                        div { class: "form-error", "{message}" }
                    }
                    TransferReview {
                        snapshot,
                        on_back: move |_| {
                            payment_error.set(None);
                            let _ = form.write().go_back();
                        },
                        on_confirm: move |_| {
                            let result = form.write().confirm(payments.as_ref());
                            match result {
                                Ok(_) => payment_error.set(None),
                                Err(e) => {
                                    log::error!("Transfer failed: {}", e);
                                    payment_error.set(Some(e.to_string()));
                                }
                            }
                        },
                    }
                },
                TransferStage::Completed(receipt) => rsx! {
                    TransferComplete { receipt, on_new: move |_| form.write().start_new() }
                },
            }
        }
    }
}

#[component]
fn TransferEditor(form: Signal<TransferForm>, accounts: Vec<Account>) -> Element {
    let mut form = form;
    let draft = form.read().draft().clone();
    let errors = form.read().errors().clone();
    let transfer_type = draft.transfer_type;
    let remaining = remaining_balance(&draft, &accounts);
    let submit_accounts = accounts.clone();

    rsx! {
        form {
            class: "transfer-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                if let Err(e) = form.write().submit(&submit_accounts) {
                    log::debug!("{}", e);
                }
            },
            div { class: "type-picker",
                for kind in TransferType::ALL {
                    button {
                        key: "{kind.title()}",
                        r#type: "button",
                        class: "{type_option_class(kind == transfer_type)}",
                        onclick: move |_| form.write().select_type(kind),
                        span { class: "type-icon", "{kind.icon()}" }
                        span { class: "type-title", "{kind.title()}" }
                        span { class: "type-description", "{kind.description()}" }
                    }
                }
            }

            div { class: "form-section",
                h3 { "From" }
                select {
                    value: "{draft.from_account}",
                    onchange: move |evt| form.write().draft_mut().from_account = evt.value(),
                    option { value: "", "Select an account" }
                    for account in accounts.iter() {
                        option {
                            key: "{account.id}",
                            value: "{account.id}",
                            selected: account.id == draft.from_account,
                            "{account.name} ({format_currency(account.balance, account.currency)})"
                        }
                    }
                }
                FieldMessage { message: errors.message(TransferField::FromAccount) }
            }

            if transfer_type.needs_recipient() {
                div { class: "form-section",
                    h3 { "Recipient" }
                    TextField {
                        label: "Recipient name",
                        value: draft.recipient.name.clone(),
                        error: errors.message(TransferField::RecipientName),
                        oninput: move |v: String| form.write().draft_mut().recipient.name = v,
                    }
                    TextField {
                        label: "Email (optional)",
                        value: draft.recipient.email.clone(),
                        oninput: move |v: String| form.write().draft_mut().recipient.email = v,
                    }
                    TextField {
                        label: "Bank name",
                        value: draft.recipient.bank_name.clone(),
                        error: errors.message(TransferField::BankName),
                        oninput: move |v: String| form.write().draft_mut().recipient.bank_name = v,
                    }
                    TextField {
                        label: "Account number",
                        value: draft.recipient.account_number.clone(),
                        error: errors.message(TransferField::AccountNumber),
                        oninput: move |v: String| form.write().draft_mut().recipient.account_number = v,
                    }
                    if transfer_type == TransferType::International {
                        TextField {
                            label: "SWIFT code",
                            value: draft.recipient.swift_code.clone(),
                            error: errors.message(TransferField::SwiftCode),
                            oninput: move |v: String| form.write().draft_mut().recipient.swift_code = v,
                        }
                    } else {
                        TextField {
                            label: "Routing number",
                            value: draft.recipient.routing_number.clone(),
                            error: errors.message(TransferField::RoutingNumber),
                            oninput: move |v: String| form.write().draft_mut().recipient.routing_number = v,
                        }
                    }
                }
            } else {
                div { class: "form-section",
                    h3 { "To" }
                    select {
                        value: "{draft.to_account}",
                        onchange: move |evt| form.write().draft_mut().to_account = evt.value(),
                        option { value: "", "Select an account" }
                        for account in accounts.iter().filter(|a| a.id != draft.from_account) {
                            option {
                                key: "{account.id}",
                                value: "{account.id}",
                                selected: account.id == draft.to_account,
                                "{account.name}"
                            }
                        }
                    }
                    FieldMessage { message: errors.message(TransferField::ToAccount) }
                }
            }

            div { class: "form-section",
                h3 { "Amount" }
                div { class: "amount-row",
                    input {
                        class: "amount-input",
                        r#type: "number",
                        step: "0.01",
                        min: "0",
                        placeholder: "0.00",
                        value: "{draft.amount}",
                        oninput: move |evt| form.write().draft_mut().amount = evt.value(),
                    }
                    select {
                        value: "{draft.currency}",
                        onchange: move |evt| {
                            if let Ok(currency) = evt.value().parse::<Currency>() {
                                form.write().draft_mut().currency = currency;
                            }
                        },
                        for currency in Currency::ALL {
                            option {
                                key: "{currency}",
                                value: "{currency}",
                                selected: currency == draft.currency,
                                "{currency.code()}"
                            }
                        }
                    }
                }
                FieldMessage { message: errors.message(TransferField::Amount) }
                if let Some((left, source_currency)) = remaining {
                    p { class: "remaining",
                        "Remaining balance: {format_currency(left, source_currency)}"
                    }
                }
            }

            div { class: "form-section",
                label { r#for: "transfer-description", "Description (optional)" }
                textarea {
                    id: "transfer-description",
                    value: "{draft.description}",
                    oninput: move |evt| form.write().draft_mut().description = evt.value(),
                }
            }

            div { class: "form-actions",
                button {
                    r#type: "button",
                    class: "button outline",
                    onclick: move |_| form.write().cancel(),
                    "Clear"
                }
                button { r#type: "submit", class: "button primary", "Review Transfer" }
            }
        }
    }
}

fn type_option_class(selected: bool) -> &'static str {
    if selected {
        "type-option selected"
    } else {
        "type-option"
    }
}

#[component]
fn TextField(
    label: &'static str,
    value: String,
    #[props(default)] error: Option<String>,
    oninput: EventHandler<String>,
) -> Element {
    let input_class = if error.is_some() { "invalid" } else { "" };

    rsx! {
        div { class: "text-field",
            label { "{label}" }
            input {
                class: "{input_class}",
                value: "{value}",
                oninput: move |evt| oninput.call(evt.value()),
            }
            FieldMessage { message: error }
        }
    }
}

#[component]
fn FieldMessage(message: Option<String>) -> Element {
    match message {
        Some(message) => rsx! {
            p { class: "field-error", "{message}" }
        },
        None => rsx! {},
    }
}

#[component]
fn TransferReview(
    snapshot: TransferSnapshot,
    on_back: EventHandler<()>,
    on_confirm: EventHandler<()>,
) -> Element {
    let amount = format_currency(snapshot.amount, snapshot.currency);
    let description = snapshot.description.clone();
    let recipient = snapshot.recipient().cloned();

    rsx! {
        div { class: "transfer-review",
            h3 { "Review Transfer" }
            p { class: "review-type", "{snapshot.transfer_type.title()}" }
            dl {
                dt { "From" }
                dd { "{snapshot.from.name}" }
                dt { "To" }
                dd { "{snapshot.destination_name()}" }
                dt { "Amount" }
                dd { class: "review-amount", "{amount} {snapshot.currency.code()}" }
                if let Some(description) = description {
                    dt { "Description" }
                    dd { "{description}" }
                }
            }
            if let Some(recipient) = recipient {
                div { class: "recipient-details",
                    h4 { "Recipient Details" }
                    dl {
                        dt { "Name" }
                        dd { "{recipient.name}" }
                        if let Some(email) = recipient.email.clone() {
                            dt { "Email" }
                            dd { "{email}" }
                        }
                        dt { "Bank" }
                        dd { "{recipient.bank_name}" }
                        dt { "Account" }
                        dd { "{recipient.account_number}" }
                        match recipient.routing.clone() {
                            RoutingCode::RoutingNumber(code) => rsx! {
                                dt { "Routing number" }
                                dd { "{code}" }
                            },
                            RoutingCode::Swift(code) => rsx! {
                                dt { "SWIFT code" }
                                dd { "{code}" }
                            },
                        }
                    }
                }
            }
            div { class: "form-actions",
                button { class: "button outline", onclick: move |_| on_back.call(()), "Go Back" }
                button { class: "button primary", onclick: move |_| on_confirm.call(()), "Confirm Transfer" }
            }
        }
    }
}

#[component]
fn TransferComplete(receipt: TransferReceipt, on_new: EventHandler<()>) -> Element {
    let snapshot = &receipt.snapshot;
    let amount = format_currency(snapshot.amount, snapshot.currency);
    let own_transfer = matches!(snapshot.to, Destination::Own(_));
    let submitted = receipt.submitted_at.format("%b %d, %Y %H:%M UTC").to_string();

    rsx! {
        div { class: "transfer-complete",
            div { class: "success-mark", "✔" }
            h3 { "Transfer Submitted" }
            p {
                "{amount} from {snapshot.from.name} to {snapshot.destination_name()} "
                if own_transfer { "is on its way." } else { "has been sent for processing." }
            }
            p { class: "receipt-reference", "Reference {receipt.reference} · {submitted}" }
            button { class: "button primary", onclick: move |_| on_new.call(()), "Make Another Transfer" }
        }
    }
}
