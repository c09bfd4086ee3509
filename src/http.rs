use crate::backend::AppointmentBackend;
use crate::errors::BookingError;
use crate::types::{BookingRequest, DATE_FORMAT, TIME_FORMAT};
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{self, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SlotsRequest {
    date: Option<String>,
    service_id: Option<u32>,
}

pub fn router<T: AppointmentBackend>(state: AppState<T>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(cors::Any)
        .allow_methods(cors::Any)
        .allow_headers(cors::Any);

    Router::new()
        .route("/api/services", get(get_services))
        .route("/api/available-slots", post(get_available_slots))
        .route("/api/book", post(book_appointment))
        .route("/api/appointments", get(get_appointments))
        .route(
            "/api/appointments/:id",
            get(get_appointment).delete(cancel_appointment),
        )
        .fallback(endpoint_not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
}

pub async fn start_server<T: AppointmentBackend>(state: AppState<T>, host: &str, port: u16) {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(format!("{host}:{port}"))
        .await
        .unwrap();
    tracing::info!(
        "appointment booking service listening on {}",
        listener.local_addr().unwrap()
    );
    axum::serve(listener, app).await.unwrap();
}

fn handle_panic(_err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    tracing::error!("handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"error": "Internal server error"})),
    )
        .into_response()
}

/// Failure shape shared by booking and cancellation.
fn failure(err: BookingError) -> Response {
    (
        err.status_code(),
        Json(json!({"success": false, "message": err.to_string()})),
    )
        .into_response()
}

async fn get_services<T: AppointmentBackend>(State(state): State<AppState<T>>) -> impl IntoResponse {
    Json(state.catalog.list().to_vec())
}

async fn get_available_slots<T: AppointmentBackend>(
    State(state): State<AppState<T>>,
    Json(request): Json<SlotsRequest>,
) -> Response {
    // An empty date counts as missing. The service id only has to be present;
    // unknown ids fall through to the full grid.
    let date = request.date.as_deref().filter(|date| !date.is_empty());
    let (Some(date), Some(_service_id)) = (date, request.service_id) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Date and service_id are required"})),
        )
            .into_response();
    };

    let Ok(date) = NaiveDate::parse_from_str(date, DATE_FORMAT) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Invalid date format"})),
        )
            .into_response();
    };

    let slots: Vec<String> = state
        .appointments
        .available_slots(date)
        .iter()
        .map(|slot| slot.format(TIME_FORMAT).to_string())
        .collect();
    Json(slots).into_response()
}

async fn book_appointment<T: AppointmentBackend>(
    State(state): State<AppState<T>>,
    Json(request): Json<BookingRequest>,
) -> Response {
    match state.appointments.book(&state.catalog, request) {
        Ok(appointment) => (
            StatusCode::CREATED,
            Json(json!({
                "success": true,
                "appointment_id": appointment.id,
                "appointment": appointment,
            })),
        )
            .into_response(),
        Err(err) => failure(err),
    }
}

async fn get_appointments<T: AppointmentBackend>(
    State(state): State<AppState<T>>,
) -> impl IntoResponse {
    let appointments = state.appointments.appointments();
    Json(json!({"total": appointments.len(), "appointments": appointments}))
}

async fn get_appointment<T: AppointmentBackend>(
    State(state): State<AppState<T>>,
    Path(id): Path<u32>,
) -> Response {
    match state.appointments.appointment(id) {
        Some(appointment) => Json(appointment).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Appointment not found"})),
        )
            .into_response(),
    }
}

async fn cancel_appointment<T: AppointmentBackend>(
    State(state): State<AppState<T>>,
    Path(id): Path<u32>,
) -> Response {
    match state.appointments.cancel(id) {
        Ok(_) => Json(json!({"success": true, "message": "Appointment cancelled"})).into_response(),
        Err(err) => failure(err),
    }
}

async fn endpoint_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"error": "Endpoint not found"})),
    )
}
