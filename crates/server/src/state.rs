use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::flight::{FlightService, SeaOrmFlightRepository};

pub type Flights = FlightService<SeaOrmFlightRepository>;

#[derive(Clone)]
pub struct ServerState {
    pub flights: Arc<Flights>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        let repo = SeaOrmFlightRepository { db };
        Self { flights: Arc::new(FlightService::new(Arc::new(repo))) }
    }
}
