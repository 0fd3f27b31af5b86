//! JSON documents exchanged with the finance API

use std::fmt;

use serde::{Deserialize, Serialize};

/// Money value.
///
/// Serialized resources carry decimals as strings (`"12.5000"`), while
/// aggregated balances arrive as plain JSON numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Text(String),
    Number(f64),
}

impl Default for Amount {
    fn default() -> Self {
        Amount::Number(0.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Text(text) => f.write_str(text),
            Amount::Number(number) => write!(f, "{}", number),
        }
    }
}

/// Kind of money holder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetKind {
    #[serde(rename = "CA")]
    Cash,
    #[serde(rename = "BC")]
    BankCard,
    #[serde(rename = "CC")]
    CreditCard,
    #[default]
    #[serde(rename = "")]
    Unspecified,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub pk: u64,
    pub description: String,
    pub balance: Amount,
    #[serde(rename = "type", default)]
    pub kind: AssetKind,
    #[serde(default)]
    pub explained_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeSource {
    pub pk: u64,
    pub description: String,
    /// Income received this month; only present in the common-info summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<Amount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseCategory {
    pub pk: u64,
    pub description: String,
    #[serde(default)]
    pub monthly_limit: Option<f64>,
    /// Spending this month; only present in the common-info summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<Amount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeTransaction {
    pub id: u64,
    pub asset: Asset,
    pub income: IncomeSource,
    pub amount: Amount,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseTransaction {
    pub id: u64,
    pub asset: Asset,
    pub expense: ExpenseCategory,
    pub amount: Amount,
    pub created_at: String,
    #[serde(default)]
    pub tags: Option<String>,
}

/// Account summary: assets plus this month's incomes and expenses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommonInfo {
    #[serde(default)]
    pub assets: Vec<Asset>,
    #[serde(default)]
    pub incomes: Vec<IncomeSource>,
    #[serde(default)]
    pub expenses: Vec<ExpenseCategory>,
}

/// One page of a paginated list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// Primary key of a freshly created record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Created {
    pub pk: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub pk: u64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Token issued on login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub username: String,
    pub email: String,
    pub password1: String,
    pub password2: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAsset {
    pub description: String,
    pub balance: String,
    #[serde(rename = "type")]
    pub kind: AssetKind,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewIncome {
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewExpense {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_limit: Option<f64>,
}

/// Reference to an existing record by primary key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ref {
    pub pk: u64,
}

/// Money moved from an income source into an asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewIncomeTransaction {
    pub income: Ref,
    pub asset: Ref,
    pub amount: String,
}

/// Money spent from an asset on an expense category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewExpenseTransaction {
    pub asset: Ref,
    pub expense: Ref,
    pub amount: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}
