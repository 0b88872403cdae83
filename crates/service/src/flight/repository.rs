use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::flight::{FlightPayload, Model};

use crate::errors::ServiceError;

#[async_trait]
pub trait FlightRepository: Send + Sync {
    async fn insert(&self, payload: FlightPayload) -> Result<i64, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Model>, ServiceError>;
    async fn find_all(&self) -> Result<Vec<Model>, ServiceError>;
    async fn find_top_rated(&self) -> Result<Vec<Model>, ServiceError>;
    async fn update(&self, payload: FlightPayload) -> Result<Model, ServiceError>;
    async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmFlightRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl FlightRepository for SeaOrmFlightRepository {
    async fn insert(&self, payload: FlightPayload) -> Result<i64, ServiceError> {
        crate::db::flight_store::insert_flight(&self.db, payload).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Model>, ServiceError> {
        crate::db::flight_store::get_flight(&self.db, id).await
    }

    async fn find_all(&self) -> Result<Vec<Model>, ServiceError> {
        crate::db::flight_store::list_flights(&self.db).await
    }

    async fn find_top_rated(&self) -> Result<Vec<Model>, ServiceError> {
        crate::db::flight_store::list_top_rated_flights(&self.db).await
    }

    async fn update(&self, payload: FlightPayload) -> Result<Model, ServiceError> {
        crate::db::flight_store::update_flight(&self.db, payload).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        crate::db::flight_store::delete_flight(&self.db, id).await
    }
}
