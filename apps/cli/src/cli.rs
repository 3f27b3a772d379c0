use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use skylet_core::banking::{MobileOperator, TransferNetwork};
use skylet_core::transactions::{TransactionSort, TransactionType};

#[derive(Parser, Debug)]
#[command(name = "skylet", version, about = "Simulated online banking in the terminal")]
pub struct Cli {
    /// Data file holding accounts, history and the signed-in user
    #[arg(long = "data-file", global = true)]
    pub data_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sign in with the demo credentials
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
    },

    /// Sign out
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Show the current account and its balance
    Balance,

    /// List the most recent transactions
    Recent {
        #[arg(short = 'n', long, default_value_t = 5)]
        count: usize,
    },

    /// Search and sort the full transaction history
    History {
        /// sent, received, payment, withdrawal or deposit
        #[arg(long = "type")]
        kind: Option<TransactionType>,
        /// Case-insensitive text matched against descriptions
        #[arg(long)]
        search: Option<String>,
        /// date-desc, date-asc, amount-desc or amount-asc
        #[arg(long, default_value = "date-desc")]
        sort: TransactionSort,
    },

    /// Send money to another bank account
    Transfer {
        /// BEFTN or NPSB
        #[arg(long, default_value = "BEFTN")]
        network: TransferNetwork,
        /// Receiving account number
        #[arg(long = "to")]
        receiver_account: String,
        /// Receiving bank name
        #[arg(long = "bank")]
        receiver_bank: String,
        #[arg(long)]
        amount: Decimal,
        #[arg(long)]
        description: Option<String>,
    },

    /// Withdraw to an external account
    Withdraw {
        #[arg(long = "account")]
        account_no: String,
        #[arg(long)]
        amount: Decimal,
        #[arg(long)]
        description: Option<String>,
    },

    /// Deposit into the current account
    Deposit {
        #[arg(long)]
        amount: Decimal,
        #[arg(long)]
        description: Option<String>,
    },

    /// Recharge a mobile number
    TopUp {
        /// grameenphone, banglalink, robi or airtel
        #[arg(long)]
        operator: MobileOperator,
        /// 11-digit mobile number
        #[arg(long)]
        number: String,
        #[arg(long)]
        amount: Decimal,
    },

    /// Pay a utility or service bill
    PayBill {
        #[arg(long)]
        biller: String,
        /// Customer or meter reference
        #[arg(long)]
        reference: Option<String>,
        #[arg(long)]
        amount: Decimal,
    },

    /// Income and spending reports
    Report {
        /// Number of calendar months to summarize
        #[arg(long, default_value_t = 6)]
        months: u32,
    },

    /// Restore the seed accounts and history
    Reset,
}
