//! Input models for the simulated banking actions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Institutions a transfer can target.
pub const KNOWN_BANKS: [&str; 11] = [
    "Skylet Bank",
    "Bangladesh Bank",
    "Sonali Bank",
    "Rupali Bank",
    "Janata Bank",
    "Agrani Bank",
    "Islami Bank",
    "Dutch-Bangla Bank",
    "BRAC Bank",
    "Eastern Bank",
    "City Bank",
];

/// Length of a valid mobile number, including the leading zero.
pub const MOBILE_NUMBER_LENGTH: usize = 11;

/// Interbank rail used for a transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransferNetwork {
    #[default]
    Beftn,
    Npsb,
}

impl TransferNetwork {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferNetwork::Beftn => "BEFTN",
            TransferNetwork::Npsb => "NPSB",
        }
    }
}

impl std::str::FromStr for TransferNetwork {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BEFTN" => Ok(TransferNetwork::Beftn),
            "NPSB" => Ok(TransferNetwork::Npsb),
            other => Err(format!("Unknown transfer network: {}", other)),
        }
    }
}

/// Mobile operators available for top-ups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MobileOperator {
    Grameenphone,
    Banglalink,
    Robi,
    Airtel,
}

impl MobileOperator {
    pub fn display_name(&self) -> &'static str {
        match self {
            MobileOperator::Grameenphone => "Grameenphone",
            MobileOperator::Banglalink => "Banglalink",
            MobileOperator::Robi => "Robi",
            MobileOperator::Airtel => "Airtel",
        }
    }
}

impl std::str::FromStr for MobileOperator {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grameenphone" => Ok(MobileOperator::Grameenphone),
            "banglalink" => Ok(MobileOperator::Banglalink),
            "robi" => Ok(MobileOperator::Robi),
            "airtel" => Ok(MobileOperator::Airtel),
            other => Err(format!("Unknown mobile operator: {}", other)),
        }
    }
}

/// Input model for sending money to another bank account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    #[serde(default)]
    pub network: TransferNetwork,
    pub receiver_account: String,
    pub receiver_bank: String,
    pub amount: Decimal,
    pub description: Option<String>,
}

impl TransferRequest {
    /// Validates the transfer data.
    pub fn validate(&self) -> Result<()> {
        require("receiverAccount", &self.receiver_account)?;
        require("receiverBank", &self.receiver_bank)?;
        if !KNOWN_BANKS.contains(&self.receiver_bank.trim()) {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown receiver bank: {}",
                self.receiver_bank
            ))));
        }
        require_positive(self.amount)
    }

    pub fn description_or_default(&self) -> String {
        non_blank(&self.description).unwrap_or_else(|| {
            format!(
                "{} Transfer to {}",
                self.network.as_str(),
                self.receiver_account.trim()
            )
        })
    }
}

/// Input model for withdrawing to an external account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawRequest {
    pub account_no: String,
    pub amount: Decimal,
    pub description: Option<String>,
}

impl WithdrawRequest {
    /// Validates the withdrawal data.
    pub fn validate(&self) -> Result<()> {
        require("accountNo", &self.account_no)?;
        require_positive(self.amount)
    }

    pub fn description_or_default(&self) -> String {
        non_blank(&self.description)
            .unwrap_or_else(|| format!("Withdrawal to {}", self.account_no.trim()))
    }
}

/// Input model for crediting the account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositRequest {
    pub amount: Decimal,
    pub description: Option<String>,
}

impl DepositRequest {
    pub fn validate(&self) -> Result<()> {
        require_positive(self.amount)
    }

    pub fn description_or_default(&self) -> String {
        non_blank(&self.description).unwrap_or_else(|| "Deposit".to_string())
    }
}

/// Input model for recharging a mobile number.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopUpRequest {
    pub operator: MobileOperator,
    pub mobile_number: String,
    pub amount: Decimal,
}

impl TopUpRequest {
    /// Validates the top-up data.
    pub fn validate(&self) -> Result<()> {
        let number = require("mobileNumber", &self.mobile_number)?;
        if number.len() != MOBILE_NUMBER_LENGTH || !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Mobile number must be {} digits",
                MOBILE_NUMBER_LENGTH
            ))));
        }
        require_positive(self.amount)
    }
}

/// Input model for paying a utility or service bill.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillPaymentRequest {
    pub biller: String,
    pub customer_reference: Option<String>,
    pub amount: Decimal,
}

impl BillPaymentRequest {
    pub fn validate(&self) -> Result<()> {
        require("biller", &self.biller)?;
        require_positive(self.amount)
    }
}

fn require<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation(ValidationError::MissingField(
            field.to_string(),
        )));
    }
    Ok(trimmed)
}

fn require_positive(amount: Decimal) -> Result<()> {
    if amount <= Decimal::ZERO {
        return Err(Error::Validation(ValidationError::NonPositiveAmount(amount)));
    }
    Ok(())
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
