#![cfg(test)]
use migration::MigratorTrait;
use models::flight::FlightPayload;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// In-memory SQLite database with migrations applied; one per test.
pub async fn memory_db() -> Result<DatabaseConnection, anyhow::Error> {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    // every pooled connection would otherwise open its own empty database
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opt).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

pub fn payload(flight_number: &str, rating: i32) -> FlightPayload {
    FlightPayload {
        id: None,
        aircraft_name: "Boeing737".into(),
        flight_number: flight_number.into(),
        origin: "MDE".into(),
        destination: "BOG".into(),
        capacity: 180,
        rating,
        flight_plan_id: 42,
        completed: None,
    }
}
