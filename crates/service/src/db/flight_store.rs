use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use models::flight::{self, Entity as FlightEntity, FlightPayload};
use crate::errors::ServiceError;

/// Insert a validated flight; any id in the payload is ignored. Returns the new id.
pub async fn insert_flight(db: &DatabaseConnection, payload: FlightPayload) -> Result<i64, ServiceError> {
    flight::validate_payload(&payload)?;
    let res = FlightEntity::insert(payload.into_new_active_model())
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(res.last_insert_id)
}

/// Get a flight by id.
pub async fn get_flight(db: &DatabaseConnection, id: i64) -> Result<Option<flight::Model>, ServiceError> {
    FlightEntity::find_by_id(id).one(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// All flights, id ascending.
pub async fn list_flights(db: &DatabaseConnection) -> Result<Vec<flight::Model>, ServiceError> {
    FlightEntity::find()
        .order_by_asc(flight::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Every flight sharing the highest stored rating, id ascending. Empty table yields an empty list.
pub async fn list_top_rated_flights(db: &DatabaseConnection) -> Result<Vec<flight::Model>, ServiceError> {
    let max_rating: Option<i32> = FlightEntity::find()
        .select_only()
        .column_as(flight::Column::Rating.max(), "max_rating")
        .into_tuple::<Option<i32>>()
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .flatten();
    let Some(max_rating) = max_rating else { return Ok(Vec::new()); };
    FlightEntity::find()
        .filter(flight::Column::Rating.eq(max_rating))
        .order_by_asc(flight::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Replace every mutable column of an existing flight.
pub async fn update_flight(db: &DatabaseConnection, payload: FlightPayload) -> Result<flight::Model, ServiceError> {
    let Some(id) = payload.id else {
        return Err(ServiceError::Validation("idFlight is required for update".into()));
    };
    flight::validate_payload(&payload)?;
    let current = FlightEntity::find_by_id(id).one(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let Some(existing) = current else { return Err(ServiceError::not_found("flight")); };
    let mut am: flight::ActiveModel = existing.into();
    payload.apply_to(&mut am);
    let updated = am.update(db).await.map_err(update_error)?;
    Ok(updated)
}

/// A row deleted between the lookup and the write surfaces as `RecordNotUpdated`.
fn update_error(e: DbErr) -> ServiceError {
    match e {
        DbErr::RecordNotUpdated => ServiceError::not_found("flight"),
        other => ServiceError::Db(other.to_string()),
    }
}

/// Delete a flight; returns true if a row was removed.
pub async fn delete_flight(db: &DatabaseConnection, id: i64) -> Result<bool, ServiceError> {
    let res = FlightEntity::delete_by_id(id).exec(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{memory_db, payload};

    #[tokio::test]
    async fn flight_crud_store() -> Result<(), anyhow::Error> {
        let db = memory_db().await?;

        let id = insert_flight(&db, payload("AB123", 5)).await?;
        let found = get_flight(&db, id).await?.unwrap();
        assert_eq!(found.flight_number, "AB123");

        let mut replacement = payload("AB124", 3);
        replacement.id = Some(id);
        let updated = update_flight(&db, replacement).await?;
        assert_eq!(updated.flight_number, "AB124");
        assert_eq!(updated.rating, 3);

        assert!(delete_flight(&db, id).await?);
        assert!(get_flight(&db, id).await?.is_none());
        assert!(!delete_flight(&db, id).await?);
        Ok(())
    }

    #[tokio::test]
    async fn insert_ignores_supplied_id() -> Result<(), anyhow::Error> {
        let db = memory_db().await?;
        let mut p = payload("AB123", 4);
        p.id = Some(99);
        let id = insert_flight(&db, p).await?;
        assert_eq!(id, 1);
        assert!(get_flight(&db, 99).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn top_rated_includes_ties() -> Result<(), anyhow::Error> {
        let db = memory_db().await?;
        assert!(list_top_rated_flights(&db).await?.is_empty());

        let a = insert_flight(&db, payload("A1", 4)).await?;
        insert_flight(&db, payload("A2", 2)).await?;
        let c = insert_flight(&db, payload("A3", 4)).await?;

        let top: Vec<i64> = list_top_rated_flights(&db).await?.into_iter().map(|f| f.id).collect();
        assert_eq!(top, vec![a, c]);
        Ok(())
    }

    #[tokio::test]
    async fn storage_boundary_validates() -> Result<(), anyhow::Error> {
        let db = memory_db().await?;
        let err = insert_flight(&db, payload("AB123", 6)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Model(_)));
        assert!(list_flights(&db).await?.is_empty());

        let id = insert_flight(&db, payload("AB123", 5)).await?;
        let mut bad = payload("AB123", 7);
        bad.id = Some(id);
        assert!(matches!(update_flight(&db, bad).await, Err(ServiceError::Model(_))));
        assert_eq!(get_flight(&db, id).await?.unwrap().rating, 5);
        Ok(())
    }

    #[test]
    fn vanished_row_on_update_is_not_found() {
        assert!(matches!(update_error(DbErr::RecordNotUpdated), ServiceError::NotFound(_)));
        assert!(matches!(update_error(DbErr::Custom("boom".into())), ServiceError::Db(_)));
    }

    #[tokio::test]
    async fn wide_ids_are_plain_misses() -> Result<(), anyhow::Error> {
        let db = memory_db().await?;
        let wide = i64::from(i32::MAX) + 1;
        assert!(get_flight(&db, wide).await?.is_none());
        assert!(!delete_flight(&db, wide).await?);
        Ok(())
    }

    #[tokio::test]
    async fn update_requires_existing_id() -> Result<(), anyhow::Error> {
        let db = memory_db().await?;
        assert!(matches!(update_flight(&db, payload("X", 3)).await, Err(ServiceError::Validation(_))));

        let mut ghost = payload("X", 3);
        ghost.id = Some(404);
        assert!(matches!(update_flight(&db, ghost).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
