use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::domain::{CriterionId, ScoreVector};
use super::{RatingEngine, RatingOutcome};

const REVIEW_COLUMN: &str = "review";
const PROFILE_COLUMN: &str = "profile";

#[derive(Debug, thiserror::Error)]
pub enum ScoreSheetError {
    #[error("failed to read score sheet: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid score sheet CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("score sheet is missing the '{0}' column")]
    MissingColumn(&'static str),
    #[error("line {line}: '{value}' is not a number for criterion '{criterion}'")]
    InvalidScore {
        line: u64,
        criterion: CriterionId,
        value: String,
    },
}

/// One scored row of a score sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredReview {
    pub review: String,
    pub requested_profile: String,
    pub outcome: RatingOutcome,
}

/// Scores a CSV export with a `review` column, an optional `profile` column, and one column
/// per criterion id. Blank cells count as missing scores.
pub struct ScoreSheetImporter;

impl ScoreSheetImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        engine: &RatingEngine,
        default_profile: &str,
    ) -> Result<Vec<ScoredReview>, ScoreSheetError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, engine, default_profile)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        engine: &RatingEngine,
        default_profile: &str,
    ) -> Result<Vec<ScoredReview>, ScoreSheetError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        if !headers.iter().any(|header| header == REVIEW_COLUMN) {
            return Err(ScoreSheetError::MissingColumn(REVIEW_COLUMN));
        }

        let mut reviews = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            let line = record
                .position()
                .map(|position| position.line())
                .unwrap_or_default();
            let mut row: BTreeMap<String, String> = record.deserialize(Some(&headers))?;

            let review = row.remove(REVIEW_COLUMN).unwrap_or_default();
            let requested_profile = row
                .remove(PROFILE_COLUMN)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default_profile.to_string());
            let scores = parse_scores(row, line)?;

            let outcome = engine.compute_total(&scores, &requested_profile);
            reviews.push(ScoredReview {
                review,
                requested_profile,
                outcome,
            });
        }

        Ok(reviews)
    }
}

fn parse_scores(row: BTreeMap<String, String>, line: u64) -> Result<ScoreVector, ScoreSheetError> {
    let mut scores = ScoreVector::new();
    for (column, value) in row {
        if value.is_empty() {
            continue;
        }
        let criterion = CriterionId::new(column);
        let score = value
            .parse::<f64>()
            .map_err(|_| ScoreSheetError::InvalidScore {
                line,
                criterion: criterion.clone(),
                value: value.clone(),
            })?;
        scores.set(criterion, score);
    }
    Ok(scores)
}
