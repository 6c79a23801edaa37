//! Terminal dashboard for a community blood donation network.

mod pages;

use tracing_subscriber::EnvFilter;
use waypoint::{Application, Result, RouteTable};

use crate::pages::{DonorDashboard, HospitalDashboard, IndexPage, NotFoundPage, SosPage};

fn routes() -> Result<RouteTable> {
    RouteTable::builder()
        .route("/", IndexPage::default)
        .route("/donor-dashboard", DonorDashboard::default)
        .route("/hospital-dashboard", HospitalDashboard::default)
        .route("/sos", SosPage::default)
        .build()
}

fn init_tracing() -> anyhow::Result<()> {
    // The terminal belongs to the UI, so logs go to a file.
    let file = std::fs::File::create("lifeline.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(file)
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_tracing()?;

    // Deep-link support: start at the path given on the command line.
    let initial = std::env::args().nth(1).unwrap_or_else(|| "/".to_string());
    tracing::info!(%initial, "starting lifeline");

    Application::new(routes()?, initial)
        .with_fallback(NotFoundPage::default)
        .run()
}
