/// Field validation and JSON shape tests
pub mod validation_tests;

/// Entity round trips against an in-memory SQLite schema
pub mod crud_tests;

use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::flight::FlightPayload;

/// Fresh in-memory database with the flight schema applied.
/// A single pooled connection keeps every query on the same memory database.
pub async fn memory_db() -> Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opt).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

pub fn sample_payload() -> FlightPayload {
    FlightPayload {
        id: None,
        aircraft_name: "Boeing737".into(),
        flight_number: "AB123".into(),
        origin: "MDE".into(),
        destination: "BOG".into(),
        capacity: 180,
        rating: 5,
        flight_plan_id: 42,
        completed: None,
    }
}
