//! Create `flight` table.
//!
//! Column names are the legacy lowercase ones; `rating` carries its 1..=5 range as a CHECK.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Flight::Table)
                    .if_not_exists()
                    .col(big_integer(Flight::Id).primary_key().auto_increment())
                    .col(string_len(Flight::AircraftName, 80).not_null())
                    .col(string_len(Flight::FlightNumber, 80).not_null())
                    .col(string_len(Flight::Origin, 80).not_null())
                    .col(string_len(Flight::Destination, 80).not_null())
                    .col(integer(Flight::Capacity).not_null())
                    .col(
                        integer(Flight::Rating)
                            .not_null()
                            .check(Expr::col(Flight::Rating).between(1, 5)),
                    )
                    .col(big_integer(Flight::FlightPlanId).not_null())
                    .col(ColumnDef::new(Flight::Completed).boolean().null())
                    .to_owned(),
            )
            .await?;

        // topFlights filters on the max rating
        manager
            .create_index(
                Index::create()
                    .name("idx_flight_rating")
                    .table(Flight::Table)
                    .col(Flight::Rating)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Flight::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Flight {
    Table,
    #[sea_orm(iden = "idflight")]
    Id,
    #[sea_orm(iden = "nombreavion")]
    AircraftName,
    #[sea_orm(iden = "numerovuelo")]
    FlightNumber,
    #[sea_orm(iden = "origen")]
    Origin,
    #[sea_orm(iden = "destino")]
    Destination,
    #[sea_orm(iden = "capacidad")]
    Capacity,
    Rating,
    #[sea_orm(iden = "planvuelo")]
    FlightPlanId,
    #[sea_orm(iden = "cumplido")]
    Completed,
}
