use sea_orm_migration::prelude::*;

use crate::datatype::ColumnDefExt;

#[derive(DeriveMigrationName)]
pub struct Migration;

pub const HISTORY_PLACE_USER_ACCESSED_AT_INDEX: &str = "index-HistoryPlace-UserId-AccessedAt";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HistoryPlace::Table)
                    .col(
                        ColumnDef::new(HistoryPlace::Id)
                            .char_len(36)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(HistoryPlace::UserId).string().not_null())
                    .col(ColumnDef::new(HistoryPlace::PlaceId).string().not_null())
                    .col(ColumnDef::new(HistoryPlace::Name).string().not_null())
                    .col(ColumnDef::new(HistoryPlace::Address).string().null())
                    .col(ColumnDef::new(HistoryPlace::LocationLat).double().not_null())
                    .col(ColumnDef::new(HistoryPlace::LocationLng).double().not_null())
                    .col(ColumnDef::new(HistoryPlace::Rating).double().null())
                    .col(ColumnDef::new(HistoryPlace::Photo).text().null())
                    .col(ColumnDef::new(HistoryPlace::Types).json().null())
                    .col(
                        ColumnDef::new(HistoryPlace::AccessedAt)
                            .datetime_millisecond_precision(manager)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(HISTORY_PLACE_USER_ACCESSED_AT_INDEX)
                    .table(HistoryPlace::Table)
                    .col(HistoryPlace::UserId)
                    .col(HistoryPlace::AccessedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HistoryPlace::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum HistoryPlace {
    Table,
    Id,
    UserId,
    PlaceId,
    Name,
    Address,
    LocationLat,
    LocationLng,
    Rating,
    Photo,
    Types,
    AccessedAt,
}
