use sea_orm::entity::prelude::*;
use shared_types::HistoryPlaceId;
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "history_place")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: HistoryPlaceId,
    pub user_id: String,
    pub place_id: String,
    pub name: String,
    pub address: Option<String>,
    pub location_lat: f64,
    pub location_lng: f64,
    pub rating: Option<f64>,
    pub photo: Option<String>,
    /// JSON array of place type tags.
    pub types: Option<Json>,
    pub accessed_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
