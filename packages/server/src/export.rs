//! Renders the full submission list into an Excel workbook.
//!
//! Every submission in the store appears as one row, whether or not it has
//! been evaluated yet; unevaluated score cells render as 0, not blank. The
//! status cell is tinted green for evaluated rows and red for pending ones.

use std::path::{Path, PathBuf};

use chrono::Utc;
use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook};

use common::submission::{Submission, SubmissionStatus};

pub const SHEET_NAME: &str = "Hackathon Scores";

/// Header row, one entry per column.
pub const HEADERS: [&str; 29] = [
    "Candidate ID",
    "Candidate Name",
    "Email",
    "Problem ID",
    "GitHub Link",
    "Submission Time",
    "Status",
    "DB Schema",
    "DB PL/SQL",
    "DB Procedures",
    "DB Total",
    "API Design",
    "API Integration",
    "API Docs",
    "API Total",
    "Code Architecture",
    "Code Error Handling",
    "Code Organization",
    "Code Total",
    "Unit Tests",
    "Integration Tests",
    "README",
    "Testing Total",
    "Docker Bonus",
    "UI Bonus",
    "Bonus Total",
    "Total Score",
    "Evaluator",
    "Notes",
];

/// Column index of the tinted status cell.
pub const STATUS_COLUMN: usize = 6;
/// Column index of the overall total.
pub const TOTAL_SCORE_COLUMN: usize = 26;

const HEADER_BG: Color = Color::RGB(0x366092);
const EVALUATED_BG: Color = Color::RGB(0xC6EFCE);
const PENDING_BG: Color = Color::RGB(0xFFC7CE);

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to build workbook: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
    #[error("failed to write export file: {0}")]
    Io(#[from] std::io::Error),
}

/// One spreadsheet cell.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
}

/// Flatten one submission into its 29 export cells.
pub fn submission_row(sub: &Submission) -> Vec<Cell> {
    // Pending rows render zeroed score blocks.
    let scores = sub.scores.clone().unwrap_or_default();

    vec![
        Cell::Text(sub.candidate_id.clone()),
        Cell::Text(sub.candidate_name.clone()),
        Cell::Text(sub.candidate_email.clone()),
        Cell::Text(sub.problem_id.clone()),
        Cell::Text(sub.github_link.clone()),
        Cell::Text(sub.submission_time.to_rfc3339()),
        Cell::Text(sub.status.to_string()),
        Cell::Number(scores.database_layer.schema_design),
        Cell::Number(scores.database_layer.plsql_packages),
        Cell::Number(scores.database_layer.procedures_functions),
        Cell::Number(scores.database_layer.total),
        Cell::Number(scores.rest_api_layer.api_design),
        Cell::Number(scores.rest_api_layer.integration),
        Cell::Number(scores.rest_api_layer.documentation),
        Cell::Number(scores.rest_api_layer.total),
        Cell::Number(scores.code_quality.architecture),
        Cell::Number(scores.code_quality.error_handling),
        Cell::Number(scores.code_quality.code_organization),
        Cell::Number(scores.code_quality.total),
        Cell::Number(scores.testing_documentation.unit_tests),
        Cell::Number(scores.testing_documentation.integration_tests),
        Cell::Number(scores.testing_documentation.readme),
        Cell::Number(scores.testing_documentation.total),
        Cell::Number(scores.bonus.docker_setup),
        Cell::Number(scores.bonus.ui_implementation),
        Cell::Number(scores.bonus.total),
        Cell::Number(sub.total_score),
        Cell::Text(sub.evaluator_name.clone()),
        Cell::Text(sub.evaluator_notes.clone()),
    ]
}

/// Write every submission into a timestamped workbook under `dir` and return
/// its path. Prior export files are left in place.
pub fn write_workbook(submissions: &[Submission], dir: &Path) -> Result<PathBuf, ExportError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(HEADER_BG)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);

    for (col, header) in HEADERS.iter().enumerate() {
        let col = col as u16;
        sheet.write_string_with_format(0, col, *header, &header_format)?;
        sheet.set_column_width(col, (header.len() + 2).max(15) as f64)?;
    }

    let evaluated_format = Format::new().set_background_color(EVALUATED_BG);
    let pending_format = Format::new().set_background_color(PENDING_BG);

    for (i, sub) in submissions.iter().enumerate() {
        let row = (i + 1) as u32;
        let status_format = match sub.status {
            SubmissionStatus::Evaluated => &evaluated_format,
            SubmissionStatus::Pending => &pending_format,
        };

        for (col, cell) in submission_row(sub).into_iter().enumerate() {
            let col = col as u16;
            match cell {
                Cell::Text(s) if col as usize == STATUS_COLUMN => {
                    sheet.write_string_with_format(row, col, &s, status_format)?;
                }
                Cell::Text(s) => {
                    sheet.write_string(row, col, &s)?;
                }
                Cell::Number(n) => {
                    sheet.write_number(row, col, n)?;
                }
            }
        }
    }

    std::fs::create_dir_all(dir)?;
    let filename = format!(
        "hackathon_scores_{}.xlsx",
        Utc::now().format("%Y%m%d_%H%M%S")
    );
    let path = dir.join(filename);
    workbook.save(&path)?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    use common::scoring::ScoreSheet;
    use common::submission::SubmissionMethod;

    fn pending(name: &str) -> Submission {
        Submission {
            candidate_id: format!("id-{name}"),
            candidate_name: name.into(),
            candidate_email: String::new(),
            problem_id: "problem_2".into(),
            submission_type: SubmissionMethod::Github,
            github_link: "http://x".into(),
            file_path: None,
            submission_time: Utc::now(),
            status: SubmissionStatus::Pending,
            scores: None,
            total_score: 0.0,
            evaluator_name: String::new(),
            evaluator_notes: String::new(),
            evaluation_time: None,
        }
    }

    fn evaluated(name: &str) -> Submission {
        let raw = match json!({
            "db_schema": 8, "db_plsql": 7, "db_procedures": 9,
            "api_design": 9, "api_integration": 8, "api_docs": 4,
            "code_architecture": 7, "code_error_handling": 5, "code_organization": 5,
            "test_unit": 4, "test_integration": 4, "test_readme": 4,
            "bonus_docker": 3, "bonus_ui": 2,
        }) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        };
        let sheet = ScoreSheet::from_raw(&raw);
        let total = sheet.total();

        let mut sub = pending(name);
        sub.status = SubmissionStatus::Evaluated;
        sub.total_score = total;
        sub.scores = Some(sheet);
        sub.evaluator_name = "Priya".into();
        sub.evaluation_time = Some(Utc::now());
        sub
    }

    #[test]
    fn rows_have_one_cell_per_header() {
        assert_eq!(submission_row(&pending("a")).len(), HEADERS.len());
        assert_eq!(submission_row(&evaluated("b")).len(), HEADERS.len());
    }

    #[test]
    fn total_score_cell_matches_the_record() {
        let sub = evaluated("a");
        let row = submission_row(&sub);

        assert_eq!(HEADERS[TOTAL_SCORE_COLUMN], "Total Score");
        assert_eq!(row[TOTAL_SCORE_COLUMN], Cell::Number(79.0));
        assert_eq!(row[STATUS_COLUMN], Cell::Text("evaluated".into()));
    }

    #[test]
    fn pending_rows_render_zero_scores_not_blanks() {
        let row = submission_row(&pending("a"));

        for cell in &row[7..=25] {
            assert_eq!(*cell, Cell::Number(0.0));
        }
        assert_eq!(row[TOTAL_SCORE_COLUMN], Cell::Number(0.0));
    }

    #[test]
    fn workbook_lands_in_the_export_dir_with_a_timestamped_name() {
        let dir = tempfile::tempdir().expect("tempdir");
        let subs = vec![pending("a"), evaluated("b")];

        let path = write_workbook(&subs, dir.path()).expect("write workbook");

        let name = path.file_name().and_then(|n| n.to_str()).expect("file name");
        assert!(name.starts_with("hackathon_scores_"));
        assert!(name.ends_with(".xlsx"));
        // xlsx is a zip container.
        let bytes = std::fs::read(&path).expect("read workbook");
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn empty_store_still_produces_a_workbook() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_workbook(&[], dir.path()).expect("write workbook");
        assert!(path.exists());
    }
}
