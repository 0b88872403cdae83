use std::sync::Arc;
use tracing::{info, instrument};

use models::flight::{FlightPayload, Model};

use crate::errors::ServiceError;
use crate::flight::repository::FlightRepository;

/// Application service over the flight store. Everything but `delete`
/// is a passthrough; `delete` turns absence into a status message.
pub struct FlightService<R: FlightRepository> {
    repo: Arc<R>,
}

impl<R: FlightRepository> FlightService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip_all, fields(rating = payload.rating))]
    pub async fn save(&self, payload: FlightPayload) -> Result<i64, ServiceError> {
        let id = self.repo.insert(payload).await?;
        info!(id, "flight saved");
        Ok(id)
    }

    pub async fn list(&self) -> Result<Vec<Model>, ServiceError> { self.repo.find_all().await }

    pub async fn list_id(&self, id: i64) -> Result<Option<Model>, ServiceError> { self.repo.find_by_id(id).await }

    pub async fn view_best_flight(&self) -> Result<Vec<Model>, ServiceError> { self.repo.find_top_rated().await }

    #[instrument(skip_all, fields(id = ?payload.id))]
    pub async fn update(&self, payload: FlightPayload) -> Result<Model, ServiceError> {
        self.repo.update(payload).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<String, ServiceError> {
        if self.repo.delete_by_id(id).await? {
            info!(id, "flight deleted");
            Ok(format!("Flight {id} deleted"))
        } else {
            Ok(format!("Flight {id} not found"))
        }
    }
}
