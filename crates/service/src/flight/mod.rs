//! Flight store and service: the store trait is the persistence seam,
//! the service is what the HTTP layer talks to.

pub mod repository;
pub mod service;

pub use repository::{FlightRepository, SeaOrmFlightRepository};
pub use service::FlightService;
