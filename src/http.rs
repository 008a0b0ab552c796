use crate::backend::BookingBackend;
use crate::error::BookingError;
use crate::grid::Slot;
use crate::interval::TimeInterval;
use crate::types::{Booking, BookingStatus};
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PeriodQuery {
    room_id: i32,
    start: NaiveDateTime,
    finish: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct BookingRequest {
    room_id: i32,
    user_id: i32,
    start: NaiveDateTime,
    finish: NaiveDateTime,
    #[serde(default)]
    comment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CancelRequest {
    id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct UserQuery {
    user_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AvailabilityResponse {
    available: bool,
}

pub fn create_app<T: BookingBackend>(state: AppState<T>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/calendar", get(get_calendar))
        .route("/availability", get(get_availability))
        .route("/bookings", get(get_bookings_by_user))
        .route("/book", post(book_room))
        .route("/cancel", post(cancel_booking))
        .with_state(state)
        .layer(cors)
}

pub async fn start_server<T: BookingBackend>(listener: TcpListener, state: AppState<T>) {
    axum::serve(listener, create_app(state)).await.unwrap();
}

fn error_response(err: BookingError) -> (StatusCode, String) {
    let status = match err {
        BookingError::InvalidRange(_) => StatusCode::BAD_REQUEST,
        BookingError::RoomNotAvailable { .. } => StatusCode::CONFLICT,
        BookingError::BookingNotFound(_) => StatusCode::NOT_FOUND,
        BookingError::SlotAlignment(_) => StatusCode::UNPROCESSABLE_ENTITY,
        // Schedule problems are caught at startup; seeing one here is a bug.
        BookingError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, err.to_string())
}

async fn get_calendar<T: BookingBackend>(
    State(state): State<AppState<T>>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<Vec<Slot>>, (StatusCode, String)> {
    let period = TimeInterval::new(query.start, query.finish).map_err(error_response)?;
    let slots = state
        .resolver
        .build_calendar(query.room_id, &period, &state.backend)
        .map_err(error_response)?;
    Ok(Json(slots))
}

async fn get_availability<T: BookingBackend>(
    State(state): State<AppState<T>>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<AvailabilityResponse>, (StatusCode, String)> {
    let interval = TimeInterval::new(query.start, query.finish).map_err(error_response)?;
    let available =
        state
            .resolver
            .is_room_free_during_interval(query.room_id, &interval, &state.backend);
    Ok(Json(AvailabilityResponse { available }))
}

async fn book_room<T: BookingBackend>(
    State(state): State<AppState<T>>,
    Json(request): Json<BookingRequest>,
) -> Result<(StatusCode, Json<Booking>), (StatusCode, String)> {
    let interval = TimeInterval::new(request.start, request.finish).map_err(error_response)?;
    if !interval.is_slot_aligned() {
        return Err(error_response(BookingError::InvalidRange(format!(
            "booking must start and finish on the hour or half-hour: {} - {}",
            request.start, request.finish
        ))));
    }

    if !state
        .resolver
        .is_room_free_during_interval(request.room_id, &interval, &state.backend)
    {
        return Err(error_response(BookingError::RoomNotAvailable {
            room: request.room_id,
            start: request.start,
            finish: request.finish,
        }));
    }

    let booking = Booking {
        id: Uuid::new_v4(),
        room_id: request.room_id,
        user_id: request.user_id,
        start: request.start,
        finish: request.finish,
        created_at: Local::now().naive_local(),
        comment: request.comment,
        status: BookingStatus::Active,
    };
    state.backend.add_booking(booking.clone());
    Ok((StatusCode::CREATED, Json(booking)))
}

async fn cancel_booking<T: BookingBackend>(
    State(state): State<AppState<T>>,
    Json(request): Json<CancelRequest>,
) -> Result<(StatusCode, String), (StatusCode, String)> {
    state
        .backend
        .cancel_booking(request.id)
        .map_err(error_response)?;
    Ok((StatusCode::OK, "Booking cancelled successfully".to_string()))
}

async fn get_bookings_by_user<T: BookingBackend>(
    State(state): State<AppState<T>>,
    Query(query): Query<UserQuery>,
) -> Json<Vec<Booking>> {
    Json(state.backend.bookings_by_user(query.user_id))
}
