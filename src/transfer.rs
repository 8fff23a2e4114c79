//! Money transfer form
//!
//! A transfer is edited as a [`TransferDraft`] of raw form values. Submitting runs
//! every field validator in one pass; if they all pass, the draft is frozen into
//! a [`TransferSnapshot`] that the customer reviews before it is handed to a
//! [`PaymentsGateway`].
//!
//! ```text
//! Editing --submit--> Reviewing --confirm--> Completed
//!    ^                    |                      |
//!    +------go_back-------+                      |
//!    +------------------start_new----------------+
//! ```
//! `cancel` returns to a fresh `Editing` from any stage.

use crate::bank::{Account, find_account};
use crate::money::Currency;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::cell::Cell;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransferType {
    /// Between two of the customer's own accounts
    #[default]
    Internal,
    /// To another domestic bank, identified by routing number
    External,
    /// To a foreign bank, identified by SWIFT code
    International,
}

impl TransferType {
    pub const ALL: [TransferType; 3] = [
        TransferType::Internal,
        TransferType::External,
        TransferType::International,
    ];

    pub fn title(self) -> &'static str {
        match self {
            TransferType::Internal => "Between My Accounts",
            TransferType::External => "To Another Bank",
            TransferType::International => "International Transfer",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            TransferType::Internal => "Transfer between your SecureBank accounts",
            TransferType::External => "Transfer to accounts at other banks",
            TransferType::International => "Send money worldwide with competitive rates",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            TransferType::Internal => "⇄",
            TransferType::External => "🏢",
            TransferType::International => "🌐",
        }
    }

    pub fn needs_recipient(self) -> bool {
        !matches!(self, TransferType::Internal)
    }

    /// Fields the customer must fill for this kind of transfer
    pub fn required_fields(self) -> &'static [TransferField] {
        use TransferField::*;
        match self {
            TransferType::Internal => &[FromAccount, ToAccount, Amount],
            TransferType::External => &[
                FromAccount,
                RecipientName,
                BankName,
                AccountNumber,
                RoutingNumber,
                Amount,
            ],
            TransferType::International => &[
                FromAccount,
                RecipientName,
                BankName,
                AccountNumber,
                SwiftCode,
                Amount,
            ],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipientDraft {
    pub name: String,
    pub email: String,
    pub bank_name: String,
    pub account_number: String,
    pub routing_number: String,
    pub swift_code: String,
}

/// Raw form values, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferDraft {
    pub transfer_type: TransferType,
    pub from_account: String,
    pub to_account: String,
    pub recipient: RecipientDraft,
    pub amount: String,
    pub currency: Currency,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TransferField {
    FromAccount,
    ToAccount,
    RecipientName,
    BankName,
    AccountNumber,
    RoutingNumber,
    SwiftCode,
    Amount,
}

impl TransferField {
    pub fn applies_to(self, transfer_type: TransferType) -> bool {
        transfer_type.required_fields().contains(&self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Please select an account")]
    AccountNotSelected,
    #[error("Selected account is not available")]
    UnknownAccount,
    #[error("Cannot transfer to the same account")]
    SameAccount,
    #[error("Recipient name is required")]
    RecipientNameRequired,
    #[error("Bank name is required")]
    BankNameRequired,
    #[error("Account number is required")]
    AccountNumberRequired,
    #[error("Routing number is required")]
    RoutingNumberRequired,
    #[error("SWIFT code is required")]
    SwiftCodeRequired,
    #[error("Amount is required")]
    AmountRequired,
    #[error("Amount must be a number")]
    AmountNotNumeric,
    #[error("Amount must be greater than 0")]
    AmountNotPositive,
    #[error("Amount cannot have more than 2 decimal places")]
    SubCentAmount,
    #[error("Amount cannot exceed account balance")]
    ExceedsBalance { balance: Decimal },
}

/// Errors of one validation pass, at most one per field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<TransferField, FieldError>);

impl FieldErrors {
    pub fn get(&self, field: TransferField) -> Option<&FieldError> {
        self.0.get(&field)
    }

    /// Display message for a field, if it failed
    pub fn message(&self, field: TransferField) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn check<T>(&mut self, field: TransferField, result: Result<T, FieldError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.0.insert(field, e);
                None
            }
        }
    }

    fn retain_for(&mut self, transfer_type: TransferType) {
        self.0.retain(|field, _| field.applies_to(transfer_type));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRef {
    pub id: String,
    pub name: String,
}

impl From<&Account> for AccountRef {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.clone(),
            name: account.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutingCode {
    RoutingNumber(String),
    Swift(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    pub name: String,
    pub email: Option<String>,
    pub bank_name: String,
    pub account_number: String,
    pub routing: RoutingCode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Own(AccountRef),
    Recipient(Recipient),
}

/// Validated, frozen copy of a draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferSnapshot {
    pub transfer_type: TransferType,
    pub from: AccountRef,
    pub to: Destination,
    pub amount: Decimal,
    pub currency: Currency,
    pub description: Option<String>,
}

impl TransferSnapshot {
    /// Name shown on the "To" side of the review
    pub fn destination_name(&self) -> &str {
        match &self.to {
            Destination::Own(account) => &account.name,
            Destination::Recipient(recipient) => &recipient.name,
        }
    }

    pub fn recipient(&self) -> Option<&Recipient> {
        match &self.to {
            Destination::Own(_) => None,
            Destination::Recipient(recipient) => Some(recipient),
        }
    }
}

pub fn validate_source<'a>(id: &str, accounts: &'a [Account]) -> Result<&'a Account, FieldError> {
    if id.trim().is_empty() {
        return Err(FieldError::AccountNotSelected);
    }
    find_account(accounts, id).ok_or(FieldError::UnknownAccount)
}

pub fn validate_required(value: &str, missing: FieldError) -> Result<String, FieldError> {
    let value = value.trim();
    if value.is_empty() {
        Err(missing)
    } else {
        Ok(value.to_string())
    }
}

/// Own account receiving an internal transfer; it must differ from the source
pub fn validate_destination<'a>(
    id: &str,
    from_id: &str,
    accounts: &'a [Account],
) -> Result<&'a Account, FieldError> {
    let destination = validate_source(id, accounts)?;
    if destination.id == from_id.trim() {
        return Err(FieldError::SameAccount);
    }
    Ok(destination)
}

/// Parses the amount and bounds it by `balance` when the source is known.
///
/// Amounts are whole cents: at least 0.01 and no more than two decimal places.
pub fn validate_amount(raw: &str, balance: Option<Decimal>) -> Result<Decimal, FieldError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FieldError::AmountRequired);
    }
    let amount: Decimal = raw.parse().map_err(|_| FieldError::AmountNotNumeric)?;
    if amount < Decimal::new(1, 2) {
        return Err(FieldError::AmountNotPositive);
    }
    if amount.normalize().scale() > 2 {
        return Err(FieldError::SubCentAmount);
    }
    match balance {
        Some(balance) if amount > balance => Err(FieldError::ExceedsBalance { balance }),
        _ => Ok(amount),
    }
}

/// Recipient banking details; only external and international transfers get here
fn validate_recipient(
    recipient: &RecipientDraft,
    transfer_type: TransferType,
    errors: &mut FieldErrors,
) -> Option<Recipient> {
    use TransferField::*;
    let name = errors.check(
        RecipientName,
        validate_required(&recipient.name, FieldError::RecipientNameRequired),
    );
    let bank_name = errors.check(
        BankName,
        validate_required(&recipient.bank_name, FieldError::BankNameRequired),
    );
    let account_number = errors.check(
        AccountNumber,
        validate_required(&recipient.account_number, FieldError::AccountNumberRequired),
    );
    let routing = if transfer_type == TransferType::International {
        errors
            .check(
                SwiftCode,
                validate_required(&recipient.swift_code, FieldError::SwiftCodeRequired),
            )
            .map(RoutingCode::Swift)
    } else {
        errors
            .check(
                RoutingNumber,
                validate_required(&recipient.routing_number, FieldError::RoutingNumberRequired),
            )
            .map(RoutingCode::RoutingNumber)
    };
    let email = Some(recipient.email.trim())
        .filter(|e| !e.is_empty())
        .map(str::to_string);

    Some(Recipient {
        name: name?,
        email,
        bank_name: bank_name?,
        account_number: account_number?,
        routing: routing?,
    })
}

/// Runs every field check once and freezes the draft if none failed
pub fn validate(draft: &TransferDraft, accounts: &[Account]) -> Result<TransferSnapshot, FieldErrors> {
    let mut errors = FieldErrors::default();

    let source = errors.check(
        TransferField::FromAccount,
        validate_source(&draft.from_account, accounts),
    );
    let destination = match draft.transfer_type {
        TransferType::Internal => errors
            .check(
                TransferField::ToAccount,
                validate_destination(&draft.to_account, &draft.from_account, accounts),
            )
            .map(|account| Destination::Own(account.into())),
        TransferType::External | TransferType::International => {
            validate_recipient(&draft.recipient, draft.transfer_type, &mut errors)
                .map(Destination::Recipient)
        }
    };
    let amount = errors.check(
        TransferField::Amount,
        validate_amount(&draft.amount, source.map(|a| a.balance)),
    );

    match (source, destination, amount) {
        (Some(source), Some(to), Some(amount)) if errors.is_empty() => Ok(TransferSnapshot {
            transfer_type: draft.transfer_type,
            from: source.into(),
            to,
            amount,
            currency: draft.currency,
            description: Some(draft.description.trim())
                .filter(|d| !d.is_empty())
                .map(str::to_string),
        }),
        _ => Err(errors),
    }
}

/// Balance left on the source account if the typed amount went through, in the
/// source account's own currency
pub fn remaining_balance(draft: &TransferDraft, accounts: &[Account]) -> Option<(Decimal, Currency)> {
    let source = find_account(accounts, &draft.from_account)?;
    let amount: Decimal = draft.amount.trim().parse().ok()?;
    (amount > Decimal::ZERO).then(|| (source.balance - amount, source.currency))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferReceipt {
    pub reference: String,
    pub snapshot: TransferSnapshot,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaymentError {
    #[error("Payment service rejected the transfer: {0}")]
    Rejected(String),
}

/// Executes confirmed transfers
pub trait PaymentsGateway {
    fn submit(&self, snapshot: &TransferSnapshot) -> Result<TransferReceipt, PaymentError>;
}

/// Accepts every transfer without moving any money
#[derive(Debug, Default)]
pub struct StubPayments {
    issued: Cell<u64>,
}

impl PaymentsGateway for StubPayments {
    fn submit(&self, snapshot: &TransferSnapshot) -> Result<TransferReceipt, PaymentError> {
        if snapshot.amount <= Decimal::ZERO {
            log::warn!("Refusing transfer of {} {}", snapshot.amount, snapshot.currency);
            return Err(PaymentError::Rejected(format!(
                "amount {} is not positive",
                snapshot.amount
            )));
        }
        let sequence = self.issued.get() + 1;
        self.issued.set(sequence);
        let reference = format!("TRF-{:06}", sequence);
        log::info!(
            "Transfer {} accepted: {} {} from {} to {}",
            reference,
            snapshot.amount,
            snapshot.currency,
            snapshot.from.name,
            snapshot.destination_name()
        );
        Ok(TransferReceipt {
            reference,
            snapshot: snapshot.clone(),
            submitted_at: Utc::now(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferStage {
    Editing,
    Reviewing(TransferSnapshot),
    Completed(TransferReceipt),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransferError {
    #[error("{0} field(s) need attention")]
    Invalid(usize),
    #[error("Transfer is not being edited")]
    NotEditing,
    #[error("No transfer is awaiting confirmation")]
    NotReviewing,
    #[error(transparent)]
    Payment(#[from] PaymentError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferForm {
    draft: TransferDraft,
    stage: TransferStage,
    errors: FieldErrors,
}

impl Default for TransferForm {
    fn default() -> Self {
        Self::new()
    }
}

impl TransferForm {
    pub fn new() -> Self {
        Self {
            draft: TransferDraft::default(),
            stage: TransferStage::Editing,
            errors: FieldErrors::default(),
        }
    }

    /// Empty form with `currency` preselected
    pub fn with_currency(currency: Currency) -> Self {
        let mut form = Self::new();
        form.draft.currency = currency;
        form
    }

    pub fn draft(&self) -> &TransferDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut TransferDraft {
        &mut self.draft
    }

    pub fn stage(&self) -> &TransferStage {
        &self.stage
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Switches the transfer type, dropping errors of fields it no longer asks for
    pub fn select_type(&mut self, transfer_type: TransferType) {
        self.draft.transfer_type = transfer_type;
        self.errors.retain_for(transfer_type);
    }

    pub fn submit(&mut self, accounts: &[Account]) -> Result<TransferSnapshot, TransferError> {
        if !matches!(self.stage, TransferStage::Editing) {
            return Err(TransferError::NotEditing);
        }
        match validate(&self.draft, accounts) {
            Ok(snapshot) => {
                log::debug!("Transfer draft valid, moving to review");
                self.errors = FieldErrors::default();
                self.stage = TransferStage::Reviewing(snapshot.clone());
                Ok(snapshot)
            }
            Err(errors) => {
                let count = errors.len();
                log::warn!("Transfer draft rejected with {} error(s)", count);
                self.errors = errors;
                Err(TransferError::Invalid(count))
            }
        }
    }

    /// Back to editing with every entered value kept
    pub fn go_back(&mut self) -> Result<(), TransferError> {
        match self.stage {
            TransferStage::Reviewing(_) => {
                self.stage = TransferStage::Editing;
                Ok(())
            }
            TransferStage::Editing | TransferStage::Completed(_) => Err(TransferError::NotReviewing),
        }
    }

    /// Hands the reviewed snapshot to `gateway` and clears the form on success
    pub fn confirm(&mut self, gateway: &dyn PaymentsGateway) -> Result<TransferReceipt, TransferError> {
        let TransferStage::Reviewing(snapshot) = &self.stage else {
            return Err(TransferError::NotReviewing);
        };
        let receipt = gateway.submit(snapshot)?;
        self.clear_draft();
        self.stage = TransferStage::Completed(receipt.clone());
        Ok(receipt)
    }

    /// Throws away the draft and any pending snapshot
    pub fn cancel(&mut self) {
        log::debug!("Transfer draft discarded");
        self.clear_draft();
        self.stage = TransferStage::Editing;
    }

    /// Leaves the completion notice for a fresh form
    pub fn start_new(&mut self) {
        self.clear_draft();
        self.stage = TransferStage::Editing;
    }

    /// Empties the typed values; the selected type and currency stay
    fn clear_draft(&mut self) {
        self.draft = TransferDraft {
            transfer_type: self.draft.transfer_type,
            currency: self.draft.currency,
            ..TransferDraft::default()
        };
        self.errors = FieldErrors::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::AccountKind;

    fn accounts() -> Vec<Account> {
        [
            ("1", "Primary Checking", Decimal::new(2459050, 2)),
            ("2", "High Yield Savings", Decimal::new(10286925, 2)),
        ]
        .into_iter()
        .map(|(id, name, balance)| Account {
            id: id.to_string(),
            name: name.to_string(),
            kind: AccountKind::Checking,
            balance,
            currency: Currency::Usd,
            last_transaction: None,
        })
        .collect()
    }

    fn internal(amount: &str) -> TransferDraft {
        TransferDraft {
            from_account: "1".to_string(),
            to_account: "2".to_string(),
            amount: amount.to_string(),
            ..TransferDraft::default()
        }
    }

    fn full_recipient() -> RecipientDraft {
        RecipientDraft {
            name: "Marie Curie".to_string(),
            email: String::new(),
            bank_name: "Banque de France".to_string(),
            account_number: "FR7630001007941234567890185".to_string(),
            routing_number: "021000021".to_string(),
            swift_code: "BDFEFRPP".to_string(),
        }
    }

    #[test]
    fn test_amount_over_balance_is_rejected() {
        let mut form = TransferForm::new();
        *form.draft_mut() = internal("25000");
        let err = form.submit(&accounts()).unwrap_err();
        assert_eq!(err, TransferError::Invalid(1));
        assert_eq!(
            form.errors().message(TransferField::Amount).as_deref(),
            Some("Amount cannot exceed account balance")
        );
        assert_eq!(form.stage(), &TransferStage::Editing);
    }

    #[test]
    fn test_amount_equal_to_balance_is_accepted() {
        assert_eq!(
            validate_amount("24590.50", Some(Decimal::new(2459050, 2))),
            Ok(Decimal::new(2459050, 2))
        );
    }

    #[test]
    fn test_amount_must_be_positive_number() {
        assert_eq!(validate_amount("", None), Err(FieldError::AmountRequired));
        assert_eq!(validate_amount("abc", None), Err(FieldError::AmountNotNumeric));
        assert_eq!(validate_amount("0", None), Err(FieldError::AmountNotPositive));
        assert_eq!(validate_amount("-5", None), Err(FieldError::AmountNotPositive));
        assert_eq!(validate_amount(" 0.01 ", None), Ok(Decimal::new(1, 2)));
    }

    #[test]
    fn test_amount_is_whole_cents() {
        let balance = Some(Decimal::new(2459050, 2));
        assert_eq!(validate_amount("0.001", balance), Err(FieldError::AmountNotPositive));
        assert_eq!(validate_amount("0.009", balance), Err(FieldError::AmountNotPositive));
        assert_eq!(validate_amount("100.005", balance), Err(FieldError::SubCentAmount));
        assert_eq!(validate_amount("100.500", balance), Ok(Decimal::new(10050, 2)));
        assert_eq!(
            FieldError::SubCentAmount.to_string(),
            "Amount cannot have more than 2 decimal places"
        );
    }

    #[test]
    fn test_internal_transfer_to_same_account_is_rejected() {
        let mut draft = internal("100");
        draft.to_account = "1".to_string();
        let errors = validate(&draft, &accounts()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(TransferField::ToAccount), Some(&FieldError::SameAccount));

        let mut form = TransferForm::new();
        *form.draft_mut() = draft;
        assert_eq!(form.submit(&accounts()), Err(TransferError::Invalid(1)));
        assert_eq!(form.stage(), &TransferStage::Editing);
    }

    #[test]
    fn test_internal_transfer_reaches_review() {
        let mut form = TransferForm::new();
        *form.draft_mut() = internal("100");
        let snapshot = form.submit(&accounts()).unwrap();
        assert_eq!(snapshot.from.name, "Primary Checking");
        assert_eq!(snapshot.destination_name(), "High Yield Savings");
        assert!(snapshot.recipient().is_none());
        assert_eq!(snapshot.amount, Decimal::from(100));
        assert_eq!(form.stage(), &TransferStage::Reviewing(snapshot));
    }

    #[test]
    fn test_internal_ignores_recipient_fields() {
        let draft = internal("10");
        assert!(draft.recipient.name.is_empty());
        assert!(validate(&draft, &accounts()).is_ok());
        assert!(!TransferField::RoutingNumber.applies_to(TransferType::Internal));
        assert!(!TransferField::SwiftCode.applies_to(TransferType::Internal));
        assert!(!TransferField::RecipientName.applies_to(TransferType::Internal));
    }

    #[test]
    fn test_external_requires_routing_number() {
        let mut draft = internal("10");
        draft.transfer_type = TransferType::External;
        draft.recipient = RecipientDraft {
            routing_number: String::new(),
            ..full_recipient()
        };
        let errors = validate(&draft, &accounts()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(TransferField::RoutingNumber),
            Some(&FieldError::RoutingNumberRequired)
        );
    }

    #[test]
    fn test_international_requires_swift_code() {
        let mut draft = internal("10");
        draft.transfer_type = TransferType::International;
        draft.recipient = RecipientDraft {
            swift_code: "  ".to_string(),
            routing_number: String::new(),
            ..full_recipient()
        };
        let errors = validate(&draft, &accounts()).unwrap_err();
        assert_eq!(
            errors.get(TransferField::SwiftCode),
            Some(&FieldError::SwiftCodeRequired)
        );
        assert!(errors.get(TransferField::RoutingNumber).is_none());
    }

    #[test]
    fn test_international_snapshot_has_swift_only() {
        let mut form = TransferForm::new();
        form.select_type(TransferType::International);
        let draft = form.draft_mut();
        draft.from_account = "1".to_string();
        draft.recipient = full_recipient();
        draft.amount = "50".to_string();
        let snapshot = form.submit(&accounts()).unwrap();
        let recipient = snapshot.recipient().unwrap();
        assert_eq!(recipient.name, "Marie Curie");
        assert_eq!(recipient.bank_name, "Banque de France");
        assert_eq!(recipient.routing, RoutingCode::Swift("BDFEFRPP".to_string()));
        assert!(recipient.email.is_none());
    }

    #[test]
    fn test_missing_fields_reported_together() {
        let mut draft = TransferDraft::default();
        draft.transfer_type = TransferType::External;
        let errors = validate(&draft, &accounts()).unwrap_err();
        assert_eq!(errors.get(TransferField::FromAccount), Some(&FieldError::AccountNotSelected));
        assert_eq!(errors.get(TransferField::RecipientName), Some(&FieldError::RecipientNameRequired));
        assert_eq!(errors.get(TransferField::BankName), Some(&FieldError::BankNameRequired));
        assert_eq!(errors.get(TransferField::AccountNumber), Some(&FieldError::AccountNumberRequired));
        assert_eq!(errors.get(TransferField::RoutingNumber), Some(&FieldError::RoutingNumberRequired));
        assert_eq!(errors.get(TransferField::Amount), Some(&FieldError::AmountRequired));
        assert!(errors.get(TransferField::ToAccount).is_none());
    }

    #[test]
    fn test_balance_bound_skipped_without_source() {
        let mut draft = internal("999999999");
        draft.from_account = "9".to_string();
        let errors = validate(&draft, &accounts()).unwrap_err();
        assert_eq!(errors.get(TransferField::FromAccount), Some(&FieldError::UnknownAccount));
        assert!(errors.get(TransferField::Amount).is_none());
    }

    #[test]
    fn test_go_back_keeps_values() {
        let mut form = TransferForm::new();
        *form.draft_mut() = internal("100");
        form.draft_mut().description = "Rent".to_string();
        form.submit(&accounts()).unwrap();
        form.go_back().unwrap();
        assert_eq!(form.stage(), &TransferStage::Editing);
        assert_eq!(form.draft().amount, "100");
        assert_eq!(form.draft().description, "Rent");
        assert_eq!(form.go_back(), Err(TransferError::NotReviewing));
    }

    #[test]
    fn test_confirm_resets_form() {
        let payments = StubPayments::default();
        let mut form = TransferForm::new();
        form.select_type(TransferType::Internal);
        *form.draft_mut() = internal("100");
        form.submit(&accounts()).unwrap();
        let receipt = form.confirm(&payments).unwrap();
        assert_eq!(receipt.reference, "TRF-000001");
        assert_eq!(receipt.snapshot.amount, Decimal::from(100));
        assert_eq!(form.stage(), &TransferStage::Completed(receipt));
        assert_eq!(form.draft(), &TransferDraft::default());

        form.start_new();
        assert_eq!(form.stage(), &TransferStage::Editing);
        assert_eq!(form.confirm(&payments), Err(TransferError::NotReviewing));
    }

    #[test]
    fn test_submit_only_while_editing() {
        let mut form = TransferForm::new();
        *form.draft_mut() = internal("1");
        form.submit(&accounts()).unwrap();
        assert_eq!(form.submit(&accounts()).unwrap_err(), TransferError::NotEditing);
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut form = TransferForm::with_currency(Currency::Gbp);
        form.select_type(TransferType::External);
        form.draft_mut().amount = "5".to_string();
        form.submit(&accounts()).unwrap_err();
        form.cancel();
        assert!(form.errors().is_empty());
        assert!(form.draft().amount.is_empty());
        assert_eq!(form.draft().transfer_type, TransferType::External);
        assert_eq!(form.draft().currency, Currency::Gbp);
    }

    #[test]
    fn test_select_type_drops_stale_errors() {
        let mut form = TransferForm::new();
        form.select_type(TransferType::External);
        form.submit(&accounts()).unwrap_err();
        assert!(form.errors().get(TransferField::RoutingNumber).is_some());
        form.select_type(TransferType::Internal);
        assert!(form.errors().get(TransferField::RoutingNumber).is_none());
        assert!(form.errors().get(TransferField::Amount).is_some());
    }

    struct RefusingGateway;

    impl PaymentsGateway for RefusingGateway {
        fn submit(&self, _snapshot: &TransferSnapshot) -> Result<TransferReceipt, PaymentError> {
            Err(PaymentError::Rejected("daily limit reached".to_string()))
        }
    }

    #[test]
    fn test_failed_payment_stays_in_review() {
        let mut form = TransferForm::new();
        *form.draft_mut() = internal("100");
        form.submit(&accounts()).unwrap();
        assert_eq!(
            form.confirm(&RefusingGateway),
            Err(TransferError::Payment(PaymentError::Rejected(
                "daily limit reached".to_string()
            )))
        );
        assert!(matches!(form.stage(), TransferStage::Reviewing(_)));
        assert_eq!(form.draft().amount, "100");
    }

    #[test]
    fn test_remaining_balance_preview() {
        let accounts = accounts();
        assert_eq!(
            remaining_balance(&internal("590.50"), &accounts),
            Some((Decimal::from(24000), Currency::Usd))
        );
        let mut in_euros = internal("590.50");
        in_euros.currency = Currency::Eur;
        assert_eq!(
            remaining_balance(&in_euros, &accounts).map(|(_, currency)| currency),
            Some(Currency::Usd)
        );
        assert_eq!(remaining_balance(&internal("0"), &accounts), None);
        assert_eq!(remaining_balance(&internal("x"), &accounts), None);
        let mut no_source = internal("10");
        no_source.from_account.clear();
        assert_eq!(remaining_balance(&no_source, &accounts), None);
        assert_eq!(accounts[0].balance, Decimal::new(2459050, 2));
    }

    #[test]
    fn test_stub_gateway_refuses_non_positive_amount() {
        let mut form = TransferForm::new();
        *form.draft_mut() = internal("100");
        let mut snapshot = form.submit(&accounts()).unwrap();
        snapshot.amount = Decimal::ZERO;
        let payments = StubPayments::default();
        assert!(matches!(payments.submit(&snapshot), Err(PaymentError::Rejected(_))));
    }

    #[test]
    fn test_shared_gateway_keeps_reference_sequence() {
        let payments = StubPayments::default();
        let mut references = Vec::new();
        for _ in 0..2 {
            let mut form = TransferForm::new();
            *form.draft_mut() = internal("100");
            form.submit(&accounts()).unwrap();
            references.push(form.confirm(&payments).unwrap().reference);
        }
        assert_eq!(references, vec!["TRF-000001", "TRF-000002"]);
    }
}
