use shared_types::HistoryPlaceId;

use super::error::DataLayerError;
use crate::model::history_place::{
    HistoryPlace, HistoryPlaceFilter, HistoryPlacePagination, UpdateHistoryPlaceRequest,
};

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait HistoryPlaceRepository: Send + Sync {
    async fn create_history_place(
        &self,
        request: HistoryPlace,
    ) -> Result<HistoryPlaceId, DataLayerError>;

    async fn get_history_place(
        &self,
        id: &HistoryPlaceId,
    ) -> Result<Option<HistoryPlace>, DataLayerError>;

    /// Newest `accessed_at` first.
    async fn find_history_places(
        &self,
        filter: HistoryPlaceFilter,
        pagination: HistoryPlacePagination,
    ) -> Result<Vec<HistoryPlace>, DataLayerError>;

    async fn count_history_places(&self, filter: HistoryPlaceFilter)
    -> Result<u64, DataLayerError>;

    async fn update_history_place(
        &self,
        request: UpdateHistoryPlaceRequest,
    ) -> Result<(), DataLayerError>;

    async fn delete_history_place(&self, id: &HistoryPlaceId) -> Result<(), DataLayerError>;
}
