use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::car::{CarDto, CarRequestDto},
    server::{
        error::AppError,
        model::car::{CarFilter, CreateCarParam, UpdateCarParam},
        service::car::CarService,
        state::AppState,
    },
};

/// Query parameters accepted when listing cars
#[derive(Debug, Default, Deserialize)]
pub struct CarFilterParams {
    pub marque: Option<String>,
    pub modele: Option<String>,
    pub couleur: Option<String>,
    pub annee: Option<i32>,
}

impl From<CarFilterParams> for CarFilter {
    fn from(params: CarFilterParams) -> Self {
        Self {
            brand: params.marque,
            model: params.modele,
            color: params.couleur,
            year: params.annee,
        }
    }
}

/// List cars with their owners.
///
/// Every query parameter is optional; the ones provided must all match.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Optional `marque`, `modele`, `couleur` and `annee` filters
///
/// # Returns
/// - `200 OK` - Cars ordered by ID
/// - `500 Internal Server Error` - Database error
pub async fn get_all_cars(
    State(state): State<AppState>,
    Query(params): Query<CarFilterParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = CarService::new(&state.db);

    let cars: Vec<CarDto> = service
        .get_all(CarFilter::from(params))
        .await?
        .into_iter()
        .map(|car| car.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(cars)))
}

/// Get a car by ID with its owner.
///
/// # Returns
/// - `200 OK` - The car
/// - `404 Not Found` - No car exists with the provided ID
/// - `500 Internal Server Error` - Database error
pub async fn get_car_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CarService::new(&state.db);

    let car = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Car not found".to_string()))?;

    Ok((StatusCode::OK, Json(car.into_dto())))
}

/// Create a new car.
///
/// The body must reference an existing owner through `proprietaire.id`.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Car fields and owner reference
///
/// # Returns
/// - `201 Created` - The stored car with its resolved owner
/// - `400 Bad Request` - Malformed body, or owner reference missing, invalid, or unknown
/// - `500 Internal Server Error` - Database error
pub async fn create_car(
    State(state): State<AppState>,
    payload: Result<Json<CarRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let service = CarService::new(&state.db);

    let car = service.create(CreateCarParam::from(payload)).await?;

    tracing::info!("Created car {} for owner {}", car.car.id, car.owner.id);

    Ok((StatusCode::CREATED, Json(car.into_dto())))
}

/// Replace an existing car.
///
/// The ID from the path is authoritative; an `id` in the body is ignored. The owner
/// reference is validated as on creation.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Car ID
/// - `payload` - New car fields and owner reference
///
/// # Returns
/// - `200 OK` - The updated car
/// - `400 Bad Request` - Malformed body, or owner reference missing, invalid, or unknown
/// - `404 Not Found` - No car exists with the provided ID
/// - `500 Internal Server Error` - Database error
pub async fn update_car(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<CarRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let service = CarService::new(&state.db);

    let car = service
        .update(UpdateCarParam::from_dto(id, payload))
        .await?
        .ok_or_else(|| AppError::NotFound("Car not found".to_string()))?;

    Ok((StatusCode::OK, Json(car.into_dto())))
}

/// Delete a car.
///
/// # Returns
/// - `204 No Content` - The car was deleted
/// - `404 Not Found` - No car exists with the provided ID
/// - `500 Internal Server Error` - Database error
pub async fn delete_car(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CarService::new(&state.db);

    if !service.delete(id).await? {
        return Err(AppError::NotFound("Car not found".to_string()));
    }

    tracing::info!("Deleted car {}", id);

    Ok(StatusCode::NO_CONTENT)
}
