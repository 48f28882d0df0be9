//! Applies the rubric to raw evaluator input.
//!
//! Raw fields arrive as a flat JSON object. Coercion is lenient by design:
//! evaluators routinely leave bonus fields blank, so missing or non-numeric
//! values count as 0 rather than failing the evaluation. Rubric maxima and
//! weights are advisory only and are not applied here.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Coerce one raw evaluation field to a number, defaulting to 0.
pub fn raw_score(fields: &Map<String, Value>, key: &str) -> f64 {
    match fields.get(key) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Database layer scores (30 points declared).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DatabaseLayer {
    pub schema_design: f64,
    pub plsql_packages: f64,
    pub procedures_functions: f64,
    pub total: f64,
}

/// REST API layer scores (25 points declared).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RestApiLayer {
    pub api_design: f64,
    pub integration: f64,
    pub documentation: f64,
    pub total: f64,
}

/// Code quality scores (20 points declared).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CodeQuality {
    pub architecture: f64,
    pub error_handling: f64,
    pub code_organization: f64,
    pub total: f64,
}

/// Testing and documentation scores (15 points declared).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TestingDocumentation {
    pub unit_tests: f64,
    pub integration_tests: f64,
    pub readme: f64,
    pub total: f64,
}

/// Bonus scores (10 points declared).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Bonus {
    pub docker_setup: f64,
    pub ui_implementation: f64,
    pub total: f64,
}

/// Per-submission structured scores: five category blocks, each holding its
/// sub-criterion values and an unweighted category total.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ScoreSheet {
    pub database_layer: DatabaseLayer,
    pub rest_api_layer: RestApiLayer,
    pub code_quality: CodeQuality,
    pub testing_documentation: TestingDocumentation,
    pub bonus: Bonus,
}

impl ScoreSheet {
    /// Group the fourteen raw fields into category blocks.
    ///
    /// Each category total is the plain sum of its sub-criteria. Negative or
    /// over-maximum values pass through untouched.
    pub fn from_raw(fields: &Map<String, Value>) -> Self {
        let schema_design = raw_score(fields, "db_schema");
        let plsql_packages = raw_score(fields, "db_plsql");
        let procedures_functions = raw_score(fields, "db_procedures");

        let api_design = raw_score(fields, "api_design");
        let integration = raw_score(fields, "api_integration");
        let documentation = raw_score(fields, "api_docs");

        let architecture = raw_score(fields, "code_architecture");
        let error_handling = raw_score(fields, "code_error_handling");
        let code_organization = raw_score(fields, "code_organization");

        let unit_tests = raw_score(fields, "test_unit");
        let integration_tests = raw_score(fields, "test_integration");
        let readme = raw_score(fields, "test_readme");

        let docker_setup = raw_score(fields, "bonus_docker");
        let ui_implementation = raw_score(fields, "bonus_ui");

        ScoreSheet {
            database_layer: DatabaseLayer {
                schema_design,
                plsql_packages,
                procedures_functions,
                total: schema_design + plsql_packages + procedures_functions,
            },
            rest_api_layer: RestApiLayer {
                api_design,
                integration,
                documentation,
                total: api_design + integration + documentation,
            },
            code_quality: CodeQuality {
                architecture,
                error_handling,
                code_organization,
                total: architecture + error_handling + code_organization,
            },
            testing_documentation: TestingDocumentation {
                unit_tests,
                integration_tests,
                readme,
                total: unit_tests + integration_tests + readme,
            },
            bonus: Bonus {
                docker_setup,
                ui_implementation,
                total: docker_setup + ui_implementation,
            },
        }
    }

    /// Overall score: sum of the five category totals, rounded to two
    /// decimal places.
    pub fn total(&self) -> f64 {
        round2(
            self.database_layer.total
                + self.rest_api_layer.total
                + self.code_quality.total
                + self.testing_documentation.total
                + self.bonus.total,
        )
    }
}
