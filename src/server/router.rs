use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::server::{
    controller::{
        car::{create_car, delete_car, get_all_cars, get_car_by_id, update_car},
        owner::{create_owner, get_all_owners, get_owner_by_id},
    },
    state::AppState,
};

/// Builds the application router.
///
/// Every route is reachable both under `/api` and without prefix.
pub fn router() -> Router<AppState> {
    let routes = Router::new()
        .route("/proprietaires", get(get_all_owners).post(create_owner))
        .route("/proprietaires/{id}", get(get_owner_by_id))
        .route("/voitures", get(get_all_cars).post(create_car))
        .route(
            "/voitures/{id}",
            get(get_car_by_id).put(update_car).delete(delete_car),
        );

    Router::new()
        .nest("/api", routes.clone())
        .merge(routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
