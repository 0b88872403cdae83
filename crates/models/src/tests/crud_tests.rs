use anyhow::Result;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryFilter, ColumnTrait, Set};

use super::{memory_db, sample_payload};
use crate::flight;

#[tokio::test]
async fn insert_assigns_sequential_ids() -> Result<()> {
    let db = memory_db().await?;

    let first = sample_payload().into_new_active_model().insert(&db).await?;
    let second = sample_payload().into_new_active_model().insert(&db).await?;

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(first.aircraft_name, "Boeing737");
    assert_eq!(first.completed, None);
    Ok(())
}

#[tokio::test]
async fn apply_to_replaces_every_column() -> Result<()> {
    let db = memory_db().await?;
    let created = sample_payload().into_new_active_model().insert(&db).await?;

    let mut am: flight::ActiveModel = created.clone().into();
    let mut replacement = sample_payload();
    replacement.aircraft_name = "A320".into();
    replacement.origin = "CLO".into();
    replacement.rating = 2;
    replacement.completed = Some(false);
    replacement.apply_to(&mut am);
    let updated = am.update(&db).await?;

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.aircraft_name, "A320");
    assert_eq!(updated.origin, "CLO");
    assert_eq!(updated.rating, 2);
    assert_eq!(updated.completed, Some(false));
    Ok(())
}

#[tokio::test]
async fn schema_rejects_out_of_range_rating() -> Result<()> {
    let db = memory_db().await?;
    let mut am = sample_payload().into_new_active_model();
    am.rating = Set(6);
    assert!(am.insert(&db).await.is_err());

    let rows = flight::Entity::find()
        .filter(flight::Column::Rating.gt(5))
        .all(&db)
        .await?;
    assert!(rows.is_empty());
    Ok(())
}
