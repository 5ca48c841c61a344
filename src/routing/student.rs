//! Student detail route.

use axum::{
    extract::{Path, State},
    response::Html,
};
use serde_json::Value;

use crate::directory::{PERSON, SQUAD};
use crate::http::response::AppError;
use crate::routing::AppState;
use crate::views::{Template, ViewModel};

/// GET /student/{id}
///
/// The id goes to the content service as-is. A 2xx answer without a record
/// renders the page with a null `person`; a non-2xx answer is a failure.
pub async fn show_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let squads_query = state.scope.squad_query();

    let (person, squads) = tokio::try_join!(
        state.directory.fetch::<Value>(PERSON, &id),
        state.directory.list::<Value>(SQUAD, &squads_query),
    )?;

    if person.is_none() {
        tracing::info!(id = %id, "Content service has no person with this id");
    }

    let model = ViewModel::new()
        .with("person", &person)?
        .with("squads", &squads)?;
    state.render(Template::Student, &model)
}
