/// Storage key holding the serialized account list
pub const ACCOUNTS_STORAGE_KEY: &str = "skylet_accounts";

/// Storage key holding the serialized transaction list
pub const TRANSACTIONS_STORAGE_KEY: &str = "skylet_transactions";

/// Storage key holding the signed-in user record
pub const USER_STORAGE_KEY: &str = "skylet_user";

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Bank name used when a flow does not name a receiving institution
pub const HOME_BANK_NAME: &str = "Skylet Bank";
