//! Axum route handlers for the Scoring API.

use axum::Json;

use crate::models::resume::NormalizedResume;
use crate::scoring::{score, ScoreResult};

/// POST /api/v1/resumes/score
///
/// Scores any `NormalizedResume`-shaped record, parsed or hand-edited.
/// Pure computation; call it as often as the record changes.
pub async fn handle_score(Json(record): Json<NormalizedResume>) -> Json<ScoreResult> {
    Json(score(&record))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_handler_scores_partial_record() {
        let record: NormalizedResume =
            serde_json::from_str(r#"{"skills":["Rust","Go","SQL","AWS","TLS"]}"#).unwrap();
        let Json(result) = handle_score(Json(record)).await;
        assert!(result.value >= 10);
        assert!(result.value <= 100);
    }
}
