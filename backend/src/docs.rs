#![allow(dead_code)] // OpenAPI doc stubs are only referenced by utoipa macros.

use crate::{error::ErrorResponse, models::person::Person};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        list_people_doc,
        get_person_doc,
        get_first_by_name_doc,
        delete_person_doc,
        save_person_doc
    ),
    components(schemas(Person, ErrorResponse)),
    tags((name = "People", description = "Person CRUD API"))
)]
pub struct ApiDoc;

#[utoipa::path(
    get,
    path = "/api/people",
    responses((status = 200, description = "All stored people", body = [Person])),
    tag = "People"
)]
fn list_people_doc() {}

#[utoipa::path(
    get,
    path = "/api/people/{id}",
    params(("id" = i64, Path, description = "Person id")),
    responses(
        (status = 200, description = "Person found", body = Person),
        (status = 400, description = "Id is not an integer"),
        (status = 404, description = "No person with that id")
    ),
    tag = "People"
)]
fn get_person_doc() {}

#[utoipa::path(
    get,
    path = "/api/people/firstByName/{name}",
    params(("name" = String, Path, description = "Exact name to match")),
    responses(
        (status = 200, description = "First person with that name", body = Person),
        (status = 404, description = "No person with that name")
    ),
    tag = "People"
)]
fn get_first_by_name_doc() {}

#[utoipa::path(
    delete,
    path = "/api/people/{id}",
    params(("id" = i64, Path, description = "Person id")),
    responses(
        (status = 200, description = "Person deleted", body = String),
        (status = 400, description = "Id is not an integer"),
        (status = 404, description = "No person with that id")
    ),
    tag = "People"
)]
fn delete_person_doc() {}

#[utoipa::path(
    post,
    path = "/api/people",
    request_body = Person,
    responses(
        (status = 200, description = "Person as persisted", body = Person),
        (status = 400, description = "Validation failed", body = ErrorResponse)
    ),
    tag = "People"
)]
fn save_person_doc() {}
