use std::io::Write;
use std::sync::Arc;
use std::thread;

use anyhow::{bail, Context};
use chrono::{Datelike, Utc};
use rust_decimal::Decimal;
use skylet_core::accounts::Account;
use skylet_core::banking::{
    BankingService, BillPaymentRequest, DepositRequest, TopUpRequest, TransferRequest,
    WithdrawRequest,
};
use skylet_core::reports;
use skylet_core::transactions::TransactionQuery;
use skylet_core::{BankContext, BankStore, BankStoreTrait, Transaction};

use crate::cli::Command;
use crate::config::Config;

pub fn run(
    command: Command,
    ctx: &BankContext,
    config: &Config,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match command {
        Command::Login { username, password } => {
            if !ctx.login(&username, &password) {
                bail!("Invalid username or password");
            }
            let user = ctx.current_user().context("Session was not stored")?;
            writeln!(out, "Signed in as {} ({})", user.name, user.username)?;
        }
        Command::Logout => {
            ctx.logout();
            writeln!(out, "Signed out")?;
        }
        Command::Whoami => match ctx.current_user() {
            Some(user) => writeln!(out, "{} ({}, id {})", user.name, user.username, user.id)?,
            None => writeln!(out, "Not signed in")?,
        },
        Command::Balance => {
            let store = require_store(ctx)?;
            let account = current_account(&store)?;
            write_account(out, &account)?;
        }
        Command::Recent { count } => {
            let store = require_store(ctx)?;
            let account = store.get_current_account();
            write_transactions(out, account.as_ref(), &store.get_recent_transactions(count))?;
        }
        Command::History { kind, search, sort } => {
            let store = require_store(ctx)?;
            let mut query = TransactionQuery::new().sort(sort);
            if let Some(kind) = kind {
                query = query.kind(kind);
            }
            if let Some(search) = search {
                query = query.search(search);
            }
            let account = store.get_current_account();
            write_transactions(out, account.as_ref(), &query.apply(&store.transactions()))?;
        }
        Command::Transfer {
            network,
            receiver_account,
            receiver_bank,
            amount,
            description,
        } => {
            let request = TransferRequest {
                network,
                receiver_account,
                receiver_bank,
                amount,
                description,
            };
            banking_action(ctx, config, out, |service| service.transfer(request))?;
        }
        Command::Withdraw {
            account_no,
            amount,
            description,
        } => {
            let request = WithdrawRequest {
                account_no,
                amount,
                description,
            };
            banking_action(ctx, config, out, |service| service.withdraw(request))?;
        }
        Command::Deposit {
            amount,
            description,
        } => {
            let request = DepositRequest {
                amount,
                description,
            };
            banking_action(ctx, config, out, |service| service.deposit(request))?;
        }
        Command::TopUp {
            operator,
            number,
            amount,
        } => {
            let request = TopUpRequest {
                operator,
                mobile_number: number,
                amount,
            };
            banking_action(ctx, config, out, |service| service.mobile_top_up(request))?;
        }
        Command::PayBill {
            biller,
            reference,
            amount,
        } => {
            let request = BillPaymentRequest {
                biller,
                customer_reference: reference,
                amount,
            };
            banking_action(ctx, config, out, |service| service.pay_bill(request))?;
        }
        Command::Report { months } => {
            let store = require_store(ctx)?;
            write_report(out, &store, months)?;
        }
        Command::Reset => {
            let store = require_store(ctx)?;
            store.reset();
            writeln!(out, "Banking data restored to the initial accounts and history")?;
        }
    }
    Ok(())
}

fn require_store(ctx: &BankContext) -> anyhow::Result<Arc<BankStore>> {
    ctx.store()
        .context("Not signed in. Run `skylet login` first")
}

fn current_account(store: &BankStore) -> anyhow::Result<Account> {
    store
        .get_current_account()
        .context("No account is available")
}

fn banking_action<F>(
    ctx: &BankContext,
    config: &Config,
    out: &mut dyn Write,
    action: F,
) -> anyhow::Result<()>
where
    F: FnOnce(&BankingService) -> skylet_core::Result<Transaction>,
{
    let store = require_store(ctx)?;
    let service = BankingService::new(store.clone());

    if !config.simulated_delay.is_zero() {
        tracing::debug!("Simulating {:?} of processing time", config.simulated_delay);
        thread::sleep(config.simulated_delay);
    }

    let transaction = action(&service)?;
    let account = current_account(&store)?;
    writeln!(
        out,
        "{} {}: {}",
        transaction.description,
        transaction.status.as_str(),
        account.format_amount(transaction.amount)
    )?;
    writeln!(out, "Reference: {}", transaction.id)?;
    writeln!(out, "New balance: {}", account.format_amount(account.balance))?;
    Ok(())
}

fn write_account(out: &mut dyn Write, account: &Account) -> anyhow::Result<()> {
    writeln!(out, "{}", account.name)?;
    writeln!(
        out,
        "{} card ending {}",
        account.card_type.as_str(),
        account.last_four().unwrap_or("----")
    )?;
    writeln!(out, "Account: {}", account.account_no)?;
    writeln!(out, "Balance: {}", account.format_amount(account.balance))?;
    Ok(())
}

fn write_transactions(
    out: &mut dyn Write,
    account: Option<&Account>,
    transactions: &[Transaction],
) -> anyhow::Result<()> {
    if transactions.is_empty() {
        writeln!(out, "No transactions")?;
        return Ok(());
    }
    for tx in transactions {
        let counterparty = match (&tx.receiver, &tx.receiver_bank) {
            (Some(receiver), Some(bank)) => format!("  [{} @ {}]", receiver, bank),
            (Some(receiver), None) => format!("  [{}]", receiver),
            _ => String::new(),
        };
        writeln!(
            out,
            "{}  {:<10}  {:>14}  {}{}",
            tx.date.format("%Y-%m-%d %H:%M"),
            tx.kind.as_str(),
            money(account, tx.signed_amount()),
            tx.description,
            counterparty
        )?;
    }
    Ok(())
}

fn write_report(out: &mut dyn Write, store: &BankStore, months: u32) -> anyhow::Result<()> {
    let account = store.get_current_account();
    let transactions = store.transactions();
    let today = Utc::now().date_naive();

    writeln!(out, "Monthly income and expenses")?;
    for month in reports::monthly_summaries(&transactions, today, months) {
        writeln!(
            out,
            "  {:<9} income {:>12}  expenses {:>12}  net {:>12}",
            month.label,
            money(account.as_ref(), month.summary.income),
            money(account.as_ref(), month.summary.expenses),
            money(account.as_ref(), month.summary.net())
        )?;
    }

    let overview = reports::weekly_overview(&transactions, today.year(), today.month());
    writeln!(out, "This month by week")?;
    for (i, week) in overview.weeks.iter().enumerate() {
        writeln!(
            out,
            "  Week {}    income {:>12}  expenses {:>12}",
            i + 1,
            money(account.as_ref(), week.income),
            money(account.as_ref(), week.expenses)
        )?;
    }
    writeln!(
        out,
        "  Total     income {:>12}  expenses {:>12}",
        money(account.as_ref(), overview.total.income),
        money(account.as_ref(), overview.total.expenses)
    )?;

    writeln!(out, "Transactions by type")?;
    for (kind, count) in reports::type_breakdown(&transactions) {
        writeln!(out, "  {:<10} {}", kind.as_str(), count)?;
    }

    writeln!(out, "Spending by category")?;
    for (category, total) in reports::spending_categories(&transactions) {
        writeln!(
            out,
            "  {:<10} {}",
            category.as_str(),
            money(account.as_ref(), total)
        )?;
    }
    Ok(())
}

fn money(account: Option<&Account>, amount: Decimal) -> String {
    match account {
        Some(account) => account.format_amount(amount),
        None => format!("{:.2}", amount),
    }
}
