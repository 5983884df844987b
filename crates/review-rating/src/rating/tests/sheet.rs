use super::common::*;
use crate::rating::{Band, RatingDiagnostic, ScoreSheetError, ScoreSheetImporter};

#[test]
fn importer_scores_each_row_with_its_profile() {
    let csv = "review,profile,performance,stability,coverage,software,value\n\
router-ax55,gaming,9,8,7,6,5\n\
mesh-m5,,9,8,7,6,5\n\
budget-r1,home, 2 ,3,3,4,\n";

    let reviews = ScoreSheetImporter::from_reader(csv.as_bytes(), &engine(), "general")
        .expect("sheet imports");

    assert_eq!(reviews.len(), 3);
    assert_eq!(reviews[0].review, "router-ax55");
    assert_close(reviews[0].outcome.total, 7.8);

    assert_eq!(reviews[1].requested_profile, "general");
    assert_close(reviews[1].outcome.total, 7.65);

    let budget = &reviews[2];
    assert_eq!(budget.outcome.breakdown.get("value"), Some(&0.0));
    assert_eq!(budget.outcome.classification.band, Band::Weak);
}

#[test]
fn importer_reports_unknown_columns_as_diagnostics() {
    let csv = "review,performance,battery\nphone-x,8,9\n";

    let reviews = ScoreSheetImporter::from_reader(csv.as_bytes(), &engine(), "general")
        .expect("sheet imports");

    assert_eq!(
        reviews[0].outcome.diagnostics,
        vec![RatingDiagnostic::UnknownCriterion {
            criterion: "battery".into()
        }]
    );
}

#[test]
fn importer_requires_review_column() {
    let csv = "name,performance\nrouter,8\n";

    let error = ScoreSheetImporter::from_reader(csv.as_bytes(), &engine(), "general")
        .expect_err("missing column rejected");

    assert!(matches!(error, ScoreSheetError::MissingColumn("review")));
}

#[test]
fn importer_rejects_non_numeric_scores() {
    let csv = "review,performance\nrouter,8\nmodem,fast\n";

    let error = ScoreSheetImporter::from_reader(csv.as_bytes(), &engine(), "general")
        .expect_err("bad score rejected");

    match error {
        ScoreSheetError::InvalidScore {
            line,
            criterion,
            value,
        } => {
            assert_eq!(line, 3);
            assert_eq!(criterion.as_str(), "performance");
            assert_eq!(value, "fast");
        }
        other => panic!("expected invalid score, got {other:?}"),
    }
}
