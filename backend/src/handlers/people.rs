//! Handlers for the `/api/people` resource.
//!
//! Each handler makes a single repository call and maps the outcome onto a
//! response. Single-record lookups that come back empty answer 404 with an
//! empty body. Repository failures propagate as `AppError` (500).

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use validator::Validate;

use crate::{error::AppError, models::person::Person, state::AppState, types::PersonId};

pub const DELETED_MESSAGE: &str = "successfully deleted!";

pub async fn list_people(State(state): State<AppState>) -> Result<Json<Vec<Person>>, AppError> {
    let people = state.people().find_all().await?;
    Ok(Json(people))
}

pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<PersonId>,
) -> Result<Response, AppError> {
    let person = state.people().find_by_id(id).await?;
    Ok(found_or_not_found(person))
}

pub async fn get_first_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response, AppError> {
    let person = state.people().find_first_by_name(&name).await?;
    Ok(found_or_not_found(person))
}

/// Looks the record up first and deletes it only when it exists. An unknown id
/// answers 404 and nothing is deleted.
pub async fn delete_person(
    State(state): State<AppState>,
    Path(id): Path<PersonId>,
) -> Result<Response, AppError> {
    let Some(person) = state.people().find_by_id(id).await? else {
        tracing::debug!(%id, "Delete skipped, person not found");
        return Ok(StatusCode::NOT_FOUND.into_response());
    };

    state.people().delete(&person).await?;
    tracing::info!(%id, "Person deleted");
    Ok(Json(DELETED_MESSAGE).into_response())
}

pub async fn save_person(
    State(state): State<AppState>,
    Json(person): Json<Person>,
) -> Result<Json<Person>, AppError> {
    validate_person(&person)?;
    let saved = state.people().save(person).await?;
    Ok(Json(saved))
}

fn validate_person(person: &Person) -> Result<(), AppError> {
    tracing::debug!(?person, "Validating person");
    person.validate().map_err(|errors| {
        let err = AppError::from(errors);
        tracing::info!(?person, error = %err, "Person rejected");
        err
    })
}

fn found_or_not_found(person: Option<Person>) -> Response {
    match person {
        Some(person) => Json(person).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
