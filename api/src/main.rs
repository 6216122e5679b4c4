//! Clinic API Server
//!
//! Backend for a clinic's scheduling: doctors, patients, rooms and the
//! appointments that tie them together. Uses hexagonal (ports & adapters)
//! architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{
    PostgresAppointmentRepository, PostgresDoctorRepository, PostgresPatientRepository,
    PostgresRoomRepository,
};
use app::SchedulingService;
use config::Config;
use domain::ports::{AppointmentRepository, DoctorRepository, PatientRepository, RoomRepository};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub doctors: Arc<dyn DoctorRepository>,
    pub patients: Arc<dyn PatientRepository>,
    pub rooms: Arc<dyn RoomRepository>,
    pub appointments: Arc<dyn AppointmentRepository>,
    pub scheduling: Arc<SchedulingService>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the API router. Separate from `main` so tests can mount the same
/// routes on in-memory state.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Doctors
        .route(
            "/api/doctors",
            get(handlers::list_doctors).delete(handlers::delete_all_doctors),
        )
        .route(
            "/api/doctors/:id",
            get(handlers::get_doctor).delete(handlers::delete_doctor),
        )
        .route("/api/doctor", post(handlers::create_doctor))
        // Patients
        .route(
            "/api/patients",
            get(handlers::list_patients).delete(handlers::delete_all_patients),
        )
        .route(
            "/api/patients/:id",
            get(handlers::get_patient).delete(handlers::delete_patient),
        )
        .route("/api/patient", post(handlers::create_patient))
        // Rooms (addressed by name)
        .route(
            "/api/rooms",
            get(handlers::list_rooms).delete(handlers::delete_all_rooms),
        )
        .route(
            "/api/rooms/:name",
            get(handlers::get_room).delete(handlers::delete_room),
        )
        .route("/api/room", post(handlers::create_room))
        // Appointments
        .route(
            "/api/appointments",
            get(handlers::list_appointments).delete(handlers::delete_all_appointments),
        )
        .route(
            "/api/appointments/:id",
            get(handlers::get_appointment).delete(handlers::delete_appointment),
        )
        .route("/api/appointment", post(handlers::create_appointment))
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,clinic_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting clinic API...");

    // Load configuration
    let config = Config::from_env();

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connected");

    // Create adapters
    let doctors: Arc<dyn DoctorRepository> = Arc::new(PostgresDoctorRepository::new(db.clone()));
    let patients: Arc<dyn PatientRepository> = Arc::new(PostgresPatientRepository::new(db.clone()));
    let rooms: Arc<dyn RoomRepository> = Arc::new(PostgresRoomRepository::new(db.clone()));
    let appointments: Arc<dyn AppointmentRepository> =
        Arc::new(PostgresAppointmentRepository::new(db));

    // Create application services
    let scheduling = Arc::new(SchedulingService::new(appointments.clone()));

    // Create app state
    let state = AppState {
        doctors,
        patients,
        rooms,
        appointments,
        scheduling,
    };

    // Build router
    let app = api_router(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
