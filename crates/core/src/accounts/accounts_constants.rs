use rust_decimal_macros::dec;

use super::accounts_model::{Account, CardNetwork};

/// Identifier of the built-in primary account
pub const SEED_ACCOUNT_ID: &str = "acc1";

/// Currency symbol used by the seed account (Bangladeshi taka)
pub const SEED_CURRENCY: &str = "৳";

/// Returns the fixed account list used when nothing has been persisted yet.
pub fn seed_accounts() -> Vec<Account> {
    vec![Account {
        id: SEED_ACCOUNT_ID.to_string(),
        name: "Test User".to_string(),
        account_no: "4012 XXXX XXXX 9081".to_string(),
        card_type: CardNetwork::Visa,
        balance: dec!(15000.00),
        currency: SEED_CURRENCY.to_string(),
    }]
}
