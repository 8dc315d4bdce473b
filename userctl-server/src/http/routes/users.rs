//! User endpoints
//!
//! | Method | Path           | Success |
//! |--------|----------------|---------|
//! | GET    | `/`            | 200     |
//! | GET    | `/{username}`  | 202     |
//! | POST   | `/`            | 202     |
//! | PUT    | `/`            | 202     |
//! | DELETE | `/{username}`  | 202     |

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use tracing::{error, info};

use crate::http::error::ApiError;
use crate::http::extractors::{LookupName, NewUser, RemovalName, UserUpdate};
use crate::models::{InfoResponse, User};
use crate::state::AppState;

/// GET / - every stored user
async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.users().list().await.map_err(|e| {
        error!(error = %e, "failed to collect user information from db");
        ApiError::internal("failed to collect user information from db")
    })?;

    Ok(Json(users))
}

/// GET /{username} - a single user
async fn get_user(
    State(state): State<AppState>,
    LookupName(name): LookupName,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = state.users().get_by_name(&name).await?;
    Ok((StatusCode::ACCEPTED, Json(user)))
}

/// POST / - add a new user
async fn create_user(
    State(state): State<AppState>,
    NewUser(user): NewUser,
) -> Result<(StatusCode, Json<InfoResponse>), ApiError> {
    info!(username = %user.name, email = %user.email, location = %user.location, "adding user");

    if let Err(e) = state.users().insert(&user).await {
        error!(username = %user.name, error = %e, "create handler: insert failed");
        return Err(ApiError::internal(
            "failed to update user details in db, please contact admin",
        ));
    }

    Ok((
        StatusCode::ACCEPTED,
        Json(InfoResponse::new(format!(
            "new user `{}` added successfully!",
            user.name
        ))),
    ))
}

/// PUT / - overwrite the user matching the body's name
async fn update_user(
    State(state): State<AppState>,
    UserUpdate(user): UserUpdate,
) -> Result<(StatusCode, Json<InfoResponse>), ApiError> {
    state.users().update_by_name(&user).await?;

    Ok((
        StatusCode::ACCEPTED,
        Json(InfoResponse::new(format!(
            "given user `{}` detail has been updated",
            user.name
        ))),
    ))
}

/// DELETE /{username} - remove a user
async fn remove_user(
    State(state): State<AppState>,
    RemovalName(name): RemovalName,
) -> Result<(StatusCode, Json<InfoResponse>), ApiError> {
    state.users().delete_by_name(&name).await?;

    Ok((
        StatusCode::ACCEPTED,
        Json(InfoResponse::new(format!("given user `{name}` removed"))),
    ))
}

/// User routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user).put(update_user))
        .route("/{username}", get(get_user).delete(remove_user))
}
