use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::owner::{CreateOwnerDto, OwnerDto},
    server::{
        error::AppError, model::owner::CreateOwnerParam, service::owner::OwnerService,
        state::AppState,
    },
};

/// List all owners.
///
/// Owners are returned ordered by ID, each at most once. The car collection is
/// omitted from list entries.
///
/// # Returns
/// - `200 OK` - List of owners
/// - `500 Internal Server Error` - Database error
pub async fn get_all_owners(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = OwnerService::new(&state.db);

    let owners: Vec<OwnerDto> = service
        .get_all()
        .await?
        .into_iter()
        .map(|owner| owner.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(owners)))
}

/// Get an owner by ID, including the cars it holds.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Owner ID
///
/// # Returns
/// - `200 OK` - The owner with its `voitures`
/// - `404 Not Found` - No owner exists with the provided ID
/// - `500 Internal Server Error` - Database error
pub async fn get_owner_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = OwnerService::new(&state.db);

    let owner = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Owner not found".to_string()))?;

    Ok((StatusCode::OK, Json(owner.into_dto())))
}

/// Create a new owner.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Owner surname (`nom`) and name (`prenom`)
///
/// # Returns
/// - `201 Created` - The stored owner with its generated ID
/// - `400 Bad Request` - Body is not valid JSON or lacks `nom` or `prenom`
/// - `409 Conflict` - An owner with the same surname and name already exists
/// - `500 Internal Server Error` - Database error
pub async fn create_owner(
    State(state): State<AppState>,
    payload: Result<Json<CreateOwnerDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let service = OwnerService::new(&state.db);

    let owner = service.create(CreateOwnerParam::from(payload)).await?;

    tracing::info!("Created owner {}", owner.id);

    Ok((StatusCode::CREATED, Json(owner.into_dto())))
}
