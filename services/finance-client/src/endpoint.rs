//! Action names and the REST endpoints they resolve to

use std::fmt;
use std::str::FromStr;

use reqwest::Method;

use crate::ClientError;

/// Logical action understood by the finance API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    CommonInfo,

    CreateAsset,
    DetailAsset,
    IncomingAsset,
    OutgoingAsset,

    CreateIncome,
    DetailIncome,

    CreateExpense,
    DetailExpense,
    IncomingExpense,

    CreateIncomeTransaction,
    DetailIncomeTransaction,

    CreateExpenseTransaction,
    DetailExpenseTransaction,

    CreateUser,
    ShowUser,
    LoginUser,
    LogoutUser,
}

/// Placeholder substituted with the path parameter
const PARAM_SLOT: &str = "{id}";

const READ_WRITE: &[Method] = &[Method::GET, Method::POST];
const CREATE: &[Method] = &[Method::POST];
const DETAIL: &[Method] = &[Method::GET, Method::PATCH];
const READ: &[Method] = &[Method::GET];

impl Action {
    /// Every action, in catalog order
    pub const ALL: [Action; 18] = [
        Action::CommonInfo,
        Action::CreateAsset,
        Action::DetailAsset,
        Action::IncomingAsset,
        Action::OutgoingAsset,
        Action::CreateIncome,
        Action::DetailIncome,
        Action::CreateExpense,
        Action::DetailExpense,
        Action::IncomingExpense,
        Action::CreateIncomeTransaction,
        Action::DetailIncomeTransaction,
        Action::CreateExpenseTransaction,
        Action::DetailExpenseTransaction,
        Action::CreateUser,
        Action::ShowUser,
        Action::LoginUser,
        Action::LogoutUser,
    ];

    /// The camelCase name used by the web front end
    pub fn name(self) -> &'static str {
        match self {
            Action::CommonInfo => "commonInfo",
            Action::CreateAsset => "createAsset",
            Action::DetailAsset => "detailAsset",
            Action::IncomingAsset => "incomingAsset",
            Action::OutgoingAsset => "outgoingAsset",
            Action::CreateIncome => "createIncome",
            Action::DetailIncome => "detailIncome",
            Action::CreateExpense => "createExpense",
            Action::DetailExpense => "detailExpense",
            Action::IncomingExpense => "incomingExpense",
            Action::CreateIncomeTransaction => "createIncomeTransaction",
            Action::DetailIncomeTransaction => "detailIncomeTransaction",
            Action::CreateExpenseTransaction => "createExpenseTransaction",
            Action::DetailExpenseTransaction => "detailExpenseTransaction",
            Action::CreateUser => "createUser",
            Action::ShowUser => "showUser",
            Action::LoginUser => "loginUser",
            Action::LogoutUser => "logoutUser",
        }
    }

    /// Endpoint template; parameterised templates contain a single `{id}` slot
    pub fn template(self) -> &'static str {
        match self {
            Action::CommonInfo => "/api/common-info/",

            Action::CreateAsset => "/api/assets/",
            Action::DetailAsset => "/api/assets/{id}/",
            Action::IncomingAsset => "/api/assets/{id}/incoming/",
            Action::OutgoingAsset => "/api/assets/{id}/outgoing/",

            Action::CreateIncome => "/api/incomes/",
            Action::DetailIncome => "/api/incomes/{id}/",

            Action::CreateExpense => "/api/expenses/",
            Action::DetailExpense => "/api/expenses/{id}/",
            Action::IncomingExpense => "/api/expenses/{id}/incoming/",

            Action::CreateIncomeTransaction => "/api/income-transactions/",
            Action::DetailIncomeTransaction => "/api/income-transactions/{id}/",

            Action::CreateExpenseTransaction => "/api/expense-transactions/",
            Action::DetailExpenseTransaction => "/api/expense-transactions/{id}/",

            Action::CreateUser => "/rest-auth/registration/",
            Action::ShowUser => "/rest-auth/user/",
            Action::LoginUser => "/rest-auth/login/",
            Action::LogoutUser => "/rest-auth/logout/",
        }
    }

    pub fn requires_param(self) -> bool {
        self.template().contains(PARAM_SLOT)
    }

    /// HTTP methods the API accepts on this endpoint.
    ///
    /// Informational only: [`Action::path`] does not check the method a caller
    /// ends up using.
    pub fn allowed_methods(self) -> &'static [Method] {
        match self {
            Action::CommonInfo => READ_WRITE,

            Action::CreateAsset
            | Action::CreateIncome
            | Action::CreateExpense
            | Action::CreateIncomeTransaction
            | Action::CreateExpenseTransaction
            | Action::CreateUser
            | Action::LoginUser
            | Action::LogoutUser => CREATE,

            Action::DetailAsset
            | Action::DetailIncome
            | Action::DetailExpense
            | Action::DetailIncomeTransaction
            | Action::DetailExpenseTransaction => DETAIL,

            Action::IncomingAsset
            | Action::OutgoingAsset
            | Action::IncomingExpense
            | Action::ShowUser => READ,
        }
    }

    /// Resolve the endpoint path.
    ///
    /// A parameter passed to a static endpoint is ignored.
    pub fn path(self, param: Option<&dyn fmt::Display>) -> crate::Result<String> {
        let template = self.template();
        if !self.requires_param() {
            return Ok(template.to_string());
        }
        match param {
            Some(param) => Ok(template.replace(PARAM_SLOT, &param.to_string())),
            None => Err(ClientError::MissingParameter(self)),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.name() == s)
            .ok_or_else(|| ClientError::UnknownAction(s.to_string()))
    }
}

/// Resolve an action name to its endpoint path.
///
/// Unknown names and parameterised actions called without a parameter have no
/// URL; both are logged and give `None`.
pub fn get_url(name: &str, param: Option<&str>) -> Option<String> {
    let resolved = name
        .parse::<Action>()
        .and_then(|action| action.path(param.as_ref().map(|p| p as &dyn fmt::Display)));
    match resolved {
        Ok(path) => Some(path),
        Err(e) => {
            tracing::warn!("No URL for action '{}': {}", name, e);
            None
        }
    }
}
