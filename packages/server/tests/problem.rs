mod common;

use common::{TestApp, routes};

mod catalog {
    use super::*;

    #[tokio::test]
    async fn lists_the_three_problems() {
        let app = TestApp::spawn().await;

        let res = app.get_without_token(routes::PROBLEMS).await;

        assert_eq!(res.status, 200, "{}", res.text);
        let problems = res.body.as_array().expect("problem list");
        assert_eq!(problems.len(), 3);

        let ids: Vec<&str> = problems
            .iter()
            .map(|p| p["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, ["problem_2", "problem_4", "problem_10"]);
    }

    #[tokio::test]
    async fn problem_detail_includes_requirements() {
        let app = TestApp::spawn().await;

        let res = app.get_without_token(&routes::problem("problem_4")).await;

        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.body["id"], "problem_4");
        assert_eq!(res.body["title"], "Fixed Deposit & Interest Calculator");
        assert!(res.body["requirements"]["db_layer"].as_array().is_some());
        assert!(res.body["requirements"]["rest_apis"].as_array().is_some());
        assert!(res.body["business_rules"].as_array().is_some());
    }

    #[tokio::test]
    async fn unknown_problem_is_not_found() {
        let app = TestApp::spawn().await;

        let res = app.get_without_token(&routes::problem("problem_99")).await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"], "NOT_FOUND");
    }
}

mod rubric {
    use super::*;

    #[tokio::test]
    async fn has_five_categories_and_fourteen_criteria() {
        let app = TestApp::spawn().await;

        let res = app.get_without_token(routes::RUBRIC).await;

        assert_eq!(res.status, 200, "{}", res.text);
        let categories = res.body.as_array().expect("rubric categories");
        assert_eq!(categories.len(), 5);

        let criteria: usize = categories
            .iter()
            .map(|c| c["criteria"].as_array().unwrap().len())
            .sum();
        assert_eq!(criteria, 14);
    }

    #[tokio::test]
    async fn criteria_carry_maxima_and_weights() {
        let app = TestApp::spawn().await;

        let res = app.get_without_token(routes::RUBRIC).await;
        let categories = res.body.as_array().expect("rubric categories");

        let database = categories
            .iter()
            .find(|c| c["key"] == "database_layer")
            .expect("database_layer category");
        let schema = database["criteria"]
            .as_array()
            .unwrap()
            .iter()
            .find(|c| c["field"] == "db_schema")
            .expect("db_schema criterion");

        assert_eq!(schema["max"], 10.0);
        assert_eq!(schema["weight"], 0.33);
        assert_eq!(schema["label"], "schema_design");
    }
}
