use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::db;
use crate::error::AppError;
use crate::models::{CreateUser, PatchUser, ReplaceUser, User};
use crate::state::SharedState;

pub async fn get(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<User>, AppError> {
    let user = db::users::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    Ok(Json(user))
}

pub async fn create(
    State(state): State<SharedState>,
    Json(req): Json<CreateUser>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let email = req.validate()?;

    let user = db::users::create(
        &state.pool,
        email,
        req.name.as_deref(),
        req.phone.as_deref(),
        req.address.as_deref(),
        req.birth_date,
    )
    .await
    .map_err(conflict_on_duplicate_email)?;

    tracing::debug!(user_id = user.id, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn replace(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    Json(req): Json<ReplaceUser>,
) -> Result<Json<User>, AppError> {
    let email = req.validate()?;

    let user = db::users::replace(
        &state.pool,
        id,
        email,
        req.name(),
        req.phone(),
        req.address(),
        req.birth_date(),
    )
    .await
    .map_err(conflict_on_duplicate_email)?
    .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(user))
}

pub async fn partial_update(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    Json(req): Json<PatchUser>,
) -> Result<Json<User>, AppError> {
    // Rejects the empty patch before any query runs.
    req.validate()?;

    let user = db::users::update_partial(&state.pool, id, &req)
        .await
        .map_err(conflict_on_duplicate_email)?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(user))
}

pub async fn delete(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if !db::users::delete(&state.pool, id).await? {
        return Err(AppError::NotFound("User not found".to_string()));
    }
    tracing::debug!(user_id = id, "user deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Unique violations on `users.email` become 409; every other database
/// error stays a database error and surfaces as 500.
fn conflict_on_duplicate_email(e: sqlx::Error) -> AppError {
    match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::Conflict("User with this email already exists".to_string())
        }
        _ => AppError::Database(e),
    }
}
