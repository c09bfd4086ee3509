use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::backend::AppointmentBackend;
use crate::catalog::ServiceCatalog;
use crate::http::start_server;
use crate::local_appointments::LocalAppointments;

mod availability;
mod backend;
mod catalog;
mod errors;
mod http;
mod local_appointments;
#[cfg(test)]
mod testutils;
mod types;

#[derive(Debug, Parser)]
#[command(about = "Single-provider appointment booking API")]
struct Args {
    /// Address to bind.
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to listen on.
    #[arg(long, default_value_t = 5000)]
    port: u16,
}

#[derive(Clone)]
struct AppState<T: AppointmentBackend> {
    catalog: ServiceCatalog,
    appointments: T,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let state = AppState {
        catalog: ServiceCatalog::default(),
        appointments: LocalAppointments::default(),
    };
    start_server(state, &args.host, args.port).await;
}
