use std::sync::LazyLock;

use serde::Serialize;

/// Implementation requirements attached to a problem statement.
#[derive(Clone, Debug, Serialize, utoipa::ToSchema)]
pub struct Requirements {
    /// Tables expected in the database layer.
    pub db_layer: Vec<String>,
    /// Expected PL/SQL package contents.
    pub plsql: String,
    /// REST endpoints the solution must expose.
    pub rest_apis: Vec<String>,
}

/// A fixed hackathon problem statement.
#[derive(Clone, Debug, Serialize, utoipa::ToSchema)]
pub struct Problem {
    #[schema(example = "problem_2")]
    pub id: String,
    pub title: String,
    pub theme: String,
    pub description: String,
    pub requirements: Requirements,
    pub business_rules: Vec<String>,
    #[schema(example = "30-35 minutes")]
    pub estimated_time: String,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The selected problems for the event (sized for a 90 minute session).
static PROBLEMS: LazyLock<Vec<Problem>> = LazyLock::new(|| {
    vec![
        Problem {
            id: "problem_2".into(),
            title: "Fund Transfer & Transaction Orchestrator".into(),
            theme: "Implement secure fund transfer system with validation and limits".into(),
            description: "Customers need to transfer funds between accounts (same bank, \
                inter-bank). System must validate balances, check limits, apply fees, and \
                maintain audit trail."
                .into(),
            requirements: Requirements {
                db_layer: strings(&["ACCOUNT", "TRANSACTION", "TRANSFER", "TRANSFER_LIMIT tables"]),
                plsql: "Package for balance validation, limit checks, fee calculation, transfer \
                    execution"
                    .into(),
                rest_apis: strings(&[
                    "POST /transfers - Initiate transfer",
                    "GET /transfers/{id} - Get transfer status",
                    "GET /transfers?accountId=&dateFrom=&dateTo= - List transfers",
                    "POST /transfers/{id}/reverse - Reverse failed transfer",
                    "GET /accounts/{id}/balance - Get account balance",
                ]),
            },
            business_rules: strings(&[
                "Daily transfer limit: \u{20b9}50,000 (configurable per account type)",
                "Minimum balance check before transfer",
                "Transfer fee: 0.5% for inter-bank, free for same bank",
                "Transaction must be atomic (all-or-nothing)",
            ]),
            estimated_time: "30-35 minutes".into(),
        },
        Problem {
            id: "problem_4".into(),
            title: "Fixed Deposit & Interest Calculator".into(),
            theme: "Implement FD management with interest calculation and maturity handling".into(),
            description: "Customers open fixed deposits with various tenures. System calculates \
                interest (simple/compound), handles premature withdrawal, and processes maturity."
                .into(),
            requirements: Requirements {
                db_layer: strings(&["FIXED_DEPOSIT", "FD_INTEREST_RATE", "FD_TRANSACTION tables"]),
                plsql: "Package for interest calculation, maturity processing, premature \
                    withdrawal"
                    .into(),
                rest_apis: strings(&[
                    "POST /fixed-deposits - Open FD",
                    "GET /fixed-deposits/{id} - Get FD details",
                    "POST /fixed-deposits/{id}/premature-withdraw - Premature withdrawal",
                    "POST /fixed-deposits/{id}/mature - Process maturity",
                    "GET /fixed-deposits/interest-calculator - Calculate interest",
                ]),
            },
            business_rules: strings(&[
                "Interest rates: 1 year (6%), 2 years (6.5%), 3+ years (7%)",
                "Premature withdrawal penalty: 1% of principal",
                "Minimum FD amount: \u{20b9}10,000",
                "Compound interest calculated quarterly",
            ]),
            estimated_time: "25-30 minutes".into(),
        },
        Problem {
            id: "problem_10".into(),
            title: "Account Freeze & Unfreeze Workflow Manager".into(),
            theme: "Implement account freeze/unfreeze system with authorization and audit".into(),
            description: "Bank needs to freeze accounts (fraud suspicion, legal order, customer \
                request). System validates authorization, maintains audit trail, and handles \
                unfreeze requests."
                .into(),
            requirements: Requirements {
                db_layer: strings(&["ACCOUNT", "ACCOUNT_FREEZE", "FREEZE_REASON", "AUDIT_LOG tables"]),
                plsql: "Package for freeze validation, authorization check, freeze/unfreeze \
                    processing"
                    .into(),
                rest_apis: strings(&[
                    "POST /accounts/{id}/freeze - Freeze account",
                    "POST /accounts/{id}/unfreeze - Unfreeze account",
                    "GET /accounts/{id}/freeze-status - Get freeze status",
                    "GET /accounts/{id}/freeze-history - Get freeze history",
                    "POST /accounts/{id}/freeze/approve - Approve freeze request",
                ]),
            },
            business_rules: strings(&[
                "Freeze reasons: FRAUD, LEGAL_ORDER, CUSTOMER_REQUEST, SUSPICIOUS_ACTIVITY",
                "Freeze requires manager approval (except customer request)",
                "Frozen accounts: no debits allowed, credits allowed",
                "Unfreeze requires same authorization level as freeze",
            ]),
            estimated_time: "25-30 minutes".into(),
        },
    ]
});

/// All problems, in catalog order.
pub fn all() -> &'static [Problem] {
    &PROBLEMS
}

/// Look up a problem by ID.
pub fn get(id: &str) -> Option<&'static Problem> {
    PROBLEMS.iter().find(|p| p.id == id)
}

/// Whether `id` references a catalog problem.
pub fn contains(id: &str) -> bool {
    get(id).is_some()
}
