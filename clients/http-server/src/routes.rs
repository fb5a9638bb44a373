use actix_web::{
    delete, error::BlockingError, get, http::StatusCode, post, put, web, HttpResponse,
    ResponseError,
};
use people_database::{
    consts::consts::PersonId,
    database::{
        request_manager::{RequestManager, RequestManagerError},
        table::table::ApplyErrors,
    },
    model::person::PersonData,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body of every error response
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct ErrorMessage {
    pub message: String,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("The person is already in the list!")]
    PersonAlreadyExists,

    /// Carries the id exactly as it appeared in the path
    #[error("The id {0} cannot be found")]
    IdNotFound(String),

    #[error("{0}")]
    Database(RequestManagerError),

    #[error("Request could not be handed to the database: {0}")]
    Blocking(#[from] BlockingError),
}

impl ApiError {
    /// Same as the `From` conversion, but reports a missing person with the id as the client sent it
    fn for_path_id(err: RequestManagerError, raw_id: &str) -> Self {
        match err {
            RequestManagerError::Rejected(ApplyErrors::CannotFindId(_)) => {
                ApiError::IdNotFound(raw_id.to_string())
            }
            err => ApiError::from(err),
        }
    }
}

impl From<RequestManagerError> for ApiError {
    fn from(err: RequestManagerError) -> Self {
        match err {
            RequestManagerError::Rejected(ApplyErrors::PersonAlreadyExists) => {
                ApiError::PersonAlreadyExists
            }
            RequestManagerError::Rejected(ApplyErrors::CannotFindId(id)) => {
                ApiError::IdNotFound(id.to_string())
            }
            err => ApiError::Database(err),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::PersonAlreadyExists => StatusCode::CONFLICT,
            ApiError::IdNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database(_) | ApiError::Blocking(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorMessage {
            message: self.to_string(),
        })
    }
}

/// A path id that is not a number cannot belong to anyone
fn parse_path_id(raw_id: &str) -> Result<PersonId, ApiError> {
    raw_id
        .parse::<PersonId>()
        .map_err(|_| ApiError::IdNotFound(raw_id.to_string()))
}

// Request managers block while waiting on the database thread, so calls are moved off the
//  async workers with `web::block`

#[get("/")]
async fn list_people(
    request_manager: web::Data<RequestManager>,
) -> Result<HttpResponse, ApiError> {
    let request_manager = request_manager.get_ref().clone();

    let people = web::block(move || request_manager.send_list()).await??;

    Ok(HttpResponse::Ok().json(people))
}

#[post("/")]
async fn create_person(
    request_manager: web::Data<RequestManager>,
    person: web::Json<PersonData>,
) -> Result<HttpResponse, ApiError> {
    let request_manager = request_manager.get_ref().clone();
    let person = person.into_inner();

    let created = web::block(move || request_manager.send_add(person)).await??;

    Ok(HttpResponse::Created().json(created))
}

#[put("/{id}")]
async fn update_person(
    request_manager: web::Data<RequestManager>,
    path: web::Path<String>,
    person: web::Json<PersonData>,
) -> Result<HttpResponse, ApiError> {
    let raw_id = path.into_inner();
    let id = parse_path_id(&raw_id)?;

    let request_manager = request_manager.get_ref().clone();
    let person = person.into_inner();

    let updated = web::block(move || request_manager.send_update(id, person))
        .await?
        .map_err(|err| ApiError::for_path_id(err, &raw_id))?;

    Ok(HttpResponse::Ok().json(updated))
}

#[delete("/{id}")]
async fn delete_person(
    request_manager: web::Data<RequestManager>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let raw_id = path.into_inner();
    let id = parse_path_id(&raw_id)?;

    let request_manager = request_manager.get_ref().clone();

    let removed = web::block(move || request_manager.send_remove(id))
        .await?
        .map_err(|err| ApiError::for_path_id(err, &raw_id))?;

    Ok(HttpResponse::Ok().json(removed))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_people)
        .service(create_person)
        .service(update_person)
        .service(delete_person);
}
