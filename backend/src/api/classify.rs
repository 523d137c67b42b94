use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    classify::classify_input,
    error::Result,
    models::classification::{ClassifyParams, ClassifyResponse},
    AppState,
};

/// `GET /api/classify-number?number=<token>`. Malformed numbers are reported in
/// the body with status 200, never as an HTTP error.
pub async fn classify_number(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<ClassifyResponse>> {
    let params = ClassifyParams::from_pairs(pairs);

    let resp = classify_input(params.number.as_deref(), state.fun_facts.as_ref()).await?;

    Ok(Json(resp))
}
