use axum::{extract::State, Json};

use crate::models::quote::QuoteResponse;
use crate::AppState;

/// Always answers; generator trouble is absorbed by the fallback pool.
pub async fn next_quote(State(state): State<AppState>) -> Json<QuoteResponse> {
    Json(state.quotes.next_quote().await)
}
