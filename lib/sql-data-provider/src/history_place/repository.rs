use autometrics::autometrics;
use foodie_core::model::history_place::{
    HistoryPlace, HistoryPlaceFilter, HistoryPlacePagination, UpdateHistoryPlaceRequest,
};
use foodie_core::repository::error::DataLayerError;
use foodie_core::repository::history_place_repository::HistoryPlaceRepository;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use shared_types::HistoryPlaceId;

use super::HistoryPlaceProvider;
use crate::entity::history_place;
use crate::mapper::{to_data_layer_error, to_update_data_layer_error};

#[autometrics]
#[async_trait::async_trait]
impl HistoryPlaceRepository for HistoryPlaceProvider {
    async fn create_history_place(
        &self,
        request: HistoryPlace,
    ) -> Result<HistoryPlaceId, DataLayerError> {
        let id = request.id;

        history_place::Entity::insert::<history_place::ActiveModel>(request.into())
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(id)
    }

    async fn get_history_place(
        &self,
        id: &HistoryPlaceId,
    ) -> Result<Option<HistoryPlace>, DataLayerError> {
        history_place::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?
            .map(HistoryPlace::try_from)
            .transpose()
    }

    async fn find_history_places(
        &self,
        filter: HistoryPlaceFilter,
        pagination: HistoryPlacePagination,
    ) -> Result<Vec<HistoryPlace>, DataLayerError> {
        history_place::Entity::find()
            .filter(history_place::Column::UserId.eq(filter.user_id))
            .order_by_desc(history_place::Column::AccessedAt)
            .order_by_desc(history_place::Column::Id)
            .offset(pagination.skip)
            .limit(pagination.limit)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?
            .into_iter()
            .map(HistoryPlace::try_from)
            .collect()
    }

    async fn count_history_places(
        &self,
        filter: HistoryPlaceFilter,
    ) -> Result<u64, DataLayerError> {
        history_place::Entity::find()
            .filter(history_place::Column::UserId.eq(filter.user_id))
            .count(&self.db)
            .await
            .map_err(to_data_layer_error)
    }

    async fn update_history_place(
        &self,
        request: UpdateHistoryPlaceRequest,
    ) -> Result<(), DataLayerError> {
        let id = request.id;
        let model = history_place::ActiveModel::from(request);

        if !model.is_changed() {
            return match self.get_history_place(&id).await? {
                Some(_) => Ok(()),
                None => Err(DataLayerError::RecordNotUpdated),
            };
        }

        model
            .update(&self.db)
            .await
            .map_err(to_update_data_layer_error)?;

        Ok(())
    }

    async fn delete_history_place(&self, id: &HistoryPlaceId) -> Result<(), DataLayerError> {
        let result = history_place::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        if result.rows_affected == 0 {
            return Err(DataLayerError::RecordNotUpdated);
        }

        Ok(())
    }
}
