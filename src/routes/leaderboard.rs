use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;

use crate::{db, models::LeaderboardEntry, AppState};

/// A score submission that passed validation
#[derive(Debug, PartialEq)]
struct NewEntry {
    username: String,
    score: i64,
}

/// Pull a valid (username, score) pair out of the request body.
/// The body is taken loosely typed so a missing username or a non-numeric
/// score maps to a 400, not a framework-level rejection.
fn parse_entry(body: &Value) -> Option<NewEntry> {
    let username = body.get("username")?.as_str()?.trim();
    if username.is_empty() {
        return None;
    }
    let score = body.get("score")?.as_i64()?;

    Some(NewEntry {
        username: username.to_string(),
        score,
    })
}

/// POST /leaderboard - persist a finished round's score as a new row
pub async fn create_entry(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<StatusCode, StatusCode> {
    let entry = parse_entry(&body).ok_or(StatusCode::BAD_REQUEST)?;

    db::queries::insert_entry(&state.db, &entry.username, entry.score)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert leaderboard entry: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    tracing::info!("Recorded score {} for {}", entry.score, entry.username);
    Ok(StatusCode::CREATED)
}

/// GET /leaderboard - top 10 entries, highest score first
pub async fn top_entries(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<LeaderboardEntry>>, StatusCode> {
    let entries = db::queries::top_entries(&state.db).await.map_err(|e| {
        tracing::error!("Failed to fetch leaderboard: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Json(entries))
}
