use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_owner_table::Owner;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Car::Table)
                    .if_not_exists()
                    .col(pk_auto(Car::Id))
                    .col(integer(Car::OwnerId))
                    .col(string(Car::Brand))
                    .col(string(Car::Model))
                    .col(string(Car::Color))
                    .col(string(Car::Plate))
                    .col(integer(Car::Year))
                    .col(integer(Car::Price))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_car_owner_id")
                            .from(Car::Table, Car::OwnerId)
                            .to(Owner::Table, Owner::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Car::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Car {
    Table,
    Id,
    OwnerId,
    Brand,
    Model,
    Color,
    Plate,
    Year,
    Price,
}
