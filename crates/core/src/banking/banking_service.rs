use std::sync::Arc;

use log::info;
use rust_decimal::Decimal;

use super::banking_model::{
    BillPaymentRequest, DepositRequest, TopUpRequest, TransferRequest, WithdrawRequest,
};
use crate::accounts::Account;
use crate::constants::HOME_BANK_NAME;
use crate::errors::{Error, Result};
use crate::store::BankStoreTrait;
use crate::transactions::{NewTransaction, Transaction, TransactionType};

/// Validated money movements against the current account.
///
/// Every action checks its input first and then commits through
/// [`BankStoreTrait::apply_ledger_entry`], so a rejected request leaves the
/// store untouched and an accepted one moves balance and history together.
pub struct BankingService {
    store: Arc<dyn BankStoreTrait>,
}

impl BankingService {
    pub fn new(store: Arc<dyn BankStoreTrait>) -> Self {
        Self { store }
    }

    /// Sends money to another bank account.
    pub fn transfer(&self, request: TransferRequest) -> Result<Transaction> {
        request.validate()?;
        let account = self.funded_account(request.amount)?;

        let draft = NewTransaction::new(
            request.amount,
            TransactionType::Sent,
            request.description_or_default(),
        )
        .with_receiver(request.receiver_account.trim())
        .with_receiver_bank(request.receiver_bank.trim());

        self.commit(&account, draft)
    }

    /// Withdraws to an external account number.
    pub fn withdraw(&self, request: WithdrawRequest) -> Result<Transaction> {
        request.validate()?;
        let account = self.funded_account(request.amount)?;

        let draft = NewTransaction::new(
            request.amount,
            TransactionType::Withdrawal,
            request.description_or_default(),
        )
        .with_receiver(request.account_no.trim())
        .with_receiver_bank(HOME_BANK_NAME);

        self.commit(&account, draft)
    }

    /// Credits the current account.
    pub fn deposit(&self, request: DepositRequest) -> Result<Transaction> {
        request.validate()?;
        let account = self.current_account()?;

        let draft = NewTransaction::new(
            request.amount,
            TransactionType::Deposit,
            request.description_or_default(),
        );

        self.commit(&account, draft)
    }

    /// Recharges a mobile number.
    pub fn mobile_top_up(&self, request: TopUpRequest) -> Result<Transaction> {
        request.validate()?;
        let account = self.funded_account(request.amount)?;
        let number = request.mobile_number.trim();

        let draft = NewTransaction::new(
            request.amount,
            TransactionType::Payment,
            format!("Mobile Recharge to {}", number),
        )
        .with_receiver(number)
        .with_receiver_bank(request.operator.display_name());

        self.commit(&account, draft)
    }

    /// Pays a bill to a named biller.
    pub fn pay_bill(&self, request: BillPaymentRequest) -> Result<Transaction> {
        request.validate()?;
        let account = self.funded_account(request.amount)?;
        let biller = request.biller.trim();

        let mut draft = NewTransaction::new(
            request.amount,
            TransactionType::Payment,
            format!("{} Bill", biller),
        )
        .with_receiver(biller);
        if let Some(reference) = request
            .customer_reference
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
        {
            draft.description = format!("{} Bill ({})", biller, reference);
        }

        self.commit(&account, draft)
    }

    fn current_account(&self) -> Result<Account> {
        self.store
            .get_current_account()
            .ok_or(Error::NoCurrentAccount)
    }

    fn funded_account(&self, amount: Decimal) -> Result<Account> {
        let account = self.current_account()?;
        if amount > account.balance {
            return Err(Error::InsufficientFunds {
                requested: amount,
                available: account.balance,
            });
        }
        Ok(account)
    }

    fn commit(&self, account: &Account, draft: NewTransaction) -> Result<Transaction> {
        let transaction = self.store.apply_ledger_entry(&account.id, draft)?;
        info!(
            "{} {} on {}: {}",
            transaction.kind,
            account.format_amount(transaction.amount),
            account.id,
            transaction.description
        );
        Ok(transaction)
    }
}
