use std::sync::LazyLock;

use serde::Serialize;

/// A single scored sub-criterion.
///
/// `max` and `weight` are carried over from the rubric document as advisory
/// metadata for evaluators. The scoring engine neither clamps a raw value to
/// `max` nor multiplies it by `weight`.
#[derive(Clone, Debug, Serialize, utoipa::ToSchema)]
pub struct Criterion {
    /// Field name evaluators submit, e.g. `db_schema`.
    pub field: String,
    /// Name under which the value appears in the score sheet.
    pub label: String,
    pub max: f64,
    pub weight: f64,
}

/// A scoring category grouping related sub-criteria.
#[derive(Clone, Debug, Serialize, utoipa::ToSchema)]
pub struct Category {
    #[schema(example = "database_layer")]
    pub key: String,
    pub criteria: Vec<Criterion>,
}

fn criterion(field: &str, label: &str, max: f64, weight: f64) -> Criterion {
    Criterion {
        field: field.into(),
        label: label.into(),
        max,
        weight,
    }
}

/// The fixed evaluation rubric: five categories, fourteen sub-criteria.
static RUBRIC: LazyLock<Vec<Category>> = LazyLock::new(|| {
    vec![
        Category {
            key: "database_layer".into(),
            criteria: vec![
                criterion("db_schema", "schema_design", 10.0, 0.33),
                criterion("db_plsql", "plsql_packages", 10.0, 0.33),
                criterion("db_procedures", "procedures_functions", 10.0, 0.34),
            ],
        },
        Category {
            key: "rest_api_layer".into(),
            criteria: vec![
                criterion("api_design", "api_design", 10.0, 0.40),
                criterion("api_integration", "integration", 10.0, 0.40),
                criterion("api_docs", "documentation", 5.0, 0.20),
            ],
        },
        Category {
            key: "code_quality".into(),
            criteria: vec![
                criterion("code_architecture", "architecture", 8.0, 0.40),
                criterion("code_error_handling", "error_handling", 6.0, 0.30),
                criterion("code_organization", "code_organization", 6.0, 0.30),
            ],
        },
        Category {
            key: "testing_documentation".into(),
            criteria: vec![
                criterion("test_unit", "unit_tests", 5.0, 0.33),
                criterion("test_integration", "integration_tests", 5.0, 0.33),
                criterion("test_readme", "readme", 5.0, 0.34),
            ],
        },
        Category {
            key: "bonus".into(),
            criteria: vec![
                criterion("bonus_docker", "docker_setup", 5.0, 0.50),
                criterion("bonus_ui", "ui_implementation", 5.0, 0.50),
            ],
        },
    ]
});

/// All rubric categories, in score-sheet order.
pub fn categories() -> &'static [Category] {
    &RUBRIC
}
