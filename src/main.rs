use crate::availability::AvailabilityResolver;
use crate::backend::BookingBackend;
use crate::configuration::Configuration;
use crate::configuration_handler::ConfigurationHandler;
use crate::http::start_server;
use crate::local_bookings::LocalBookings;
use crate::schedule::WeeklySchedule;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod align;
mod availability;
mod backend;
mod configuration;
mod configuration_handler;
mod error;
mod grid;
mod http;
mod interval;
mod local_bookings;
mod schedule;
#[cfg(test)]
mod testutils;
mod types;

#[derive(Clone)]
struct AppState<T: BookingBackend> {
    backend: T,
    resolver: Arc<AvailabilityResolver>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("#############################");
    println!("# Classroom Booking Service #");
    println!("#############################");

    let configuration = ConfigurationHandler::parse_arguments();

    // A broken schedule must never serve traffic.
    let schedule = match WeeklySchedule::parse(&configuration.weekly_hours()) {
        Ok(schedule) => schedule,
        Err(err) => {
            error!(?err, "Invalid weekly opening hours, refusing to start");
            std::process::exit(1);
        }
    };
    if !schedule.has_open_day() {
        error!("Every weekday is closed, refusing to start");
        std::process::exit(1);
    }

    let state = AppState {
        backend: LocalBookings::default(),
        resolver: Arc::new(AvailabilityResolver::new(schedule)),
    };

    // Past bookings are marked completed every 6 hours.
    let sweeper = state.backend.clone();
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(std::time::Duration::from_secs(6 * 60 * 60));
        loop {
            ticker.tick().await;
            sweeper.mark_completed_bookings(chrono::Local::now().naive_local());
        }
    });

    let address = format!("0.0.0.0:{}", configuration.port());
    info!("Accessible at {address}");
    let listener = tokio::net::TcpListener::bind(address).await.unwrap();
    start_server(listener, state).await;
}
