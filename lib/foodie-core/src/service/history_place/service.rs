use shared_types::HistoryPlaceId;
use time::OffsetDateTime;

use super::HistoryPlaceService;
use super::dto::{
    CreateHistoryPlaceRequestDTO, GetHistoryPlaceListResponseDTO, GetHistoryPlaceResponseDTO,
    UpdateHistoryPlaceRequestDTO,
};
use super::mapper::{history_place_from_create_request, list_response, update_request_from_dto};
use super::validator::{validate_create_request, validate_update_request, validate_user_id};
use crate::model::common::PageRequest;
use crate::model::history_place::{HistoryPlace, HistoryPlaceFilter, HistoryPlacePagination};
use crate::repository::error::DataLayerError;
use crate::service::error::{EntityNotFoundError, ServiceError, ValidationError};

impl HistoryPlaceService {
    /// Records a visited place for `user_id`, stamped with the current time.
    #[tracing::instrument(level = "debug", skip(self, request), err(Debug))]
    pub async fn create_history_place(
        &self,
        user_id: &str,
        request: CreateHistoryPlaceRequestDTO,
    ) -> Result<GetHistoryPlaceResponseDTO, ServiceError> {
        validate_user_id(user_id)?;
        validate_create_request(&request)?;

        let history_place =
            history_place_from_create_request(user_id, request, OffsetDateTime::now_utc());
        let id = self
            .history_place_repository
            .create_history_place(history_place)
            .await?;

        self.get_stored_history_place(&id).await
    }

    /// Newest first page of the user's history.
    ///
    /// # Arguments
    ///
    /// * `page` - 1-based, `0` is read as `1`
    /// * `page_size` - clamped to `1..=history.maxPageSize`
    #[tracing::instrument(level = "debug", skip(self), err(Debug))]
    pub async fn get_history_place_list(
        &self,
        user_id: &str,
        page: u32,
        page_size: u32,
    ) -> Result<GetHistoryPlaceListResponseDTO, ServiceError> {
        validate_user_id(user_id)?;

        let page_request = PageRequest { page, page_size }.normalized(self.config.max_page_size);
        let filter = HistoryPlaceFilter {
            user_id: user_id.to_string(),
        };
        let pagination = HistoryPlacePagination {
            skip: page_request.offset(),
            limit: u64::from(page_request.page_size),
        };

        let query_timeout = self.config.query_timeout;
        let (values, total) = tokio::time::timeout(query_timeout, async {
            tokio::try_join!(
                self.history_place_repository
                    .find_history_places(filter.clone(), pagination),
                self.history_place_repository.count_history_places(filter),
            )
        })
        .await
        .map_err(|_| DataLayerError::Timeout(query_timeout))??;

        Ok(list_response(values, total, page_request))
    }

    /// Single entry, only visible to its owner.
    #[tracing::instrument(level = "debug", skip(self), err(Debug))]
    pub async fn get_history_place(
        &self,
        user_id: &str,
        id: &HistoryPlaceId,
    ) -> Result<GetHistoryPlaceResponseDTO, ServiceError> {
        validate_user_id(user_id)?;

        self.get_owned_history_place(user_id, id)
            .await
            .map(Into::into)
    }

    /// Patches an entry owned by `user_id` and returns the stored result.
    #[tracing::instrument(level = "debug", skip(self, request), err(Debug))]
    pub async fn update_history_place(
        &self,
        user_id: &str,
        id: &HistoryPlaceId,
        request: UpdateHistoryPlaceRequestDTO,
    ) -> Result<GetHistoryPlaceResponseDTO, ServiceError> {
        validate_user_id(user_id)?;
        self.get_owned_history_place(user_id, id).await?;
        validate_update_request(&request)?;

        self.history_place_repository
            .update_history_place(update_request_from_dto(*id, request))
            .await
            .map_err(|error| match error {
                DataLayerError::RecordNotUpdated => EntityNotFoundError::HistoryPlace(*id).into(),
                error => ServiceError::from(error),
            })?;

        self.get_stored_history_place(id).await
    }

    #[tracing::instrument(level = "debug", skip(self), err(Debug))]
    pub async fn delete_history_place(
        &self,
        user_id: &str,
        id: &HistoryPlaceId,
    ) -> Result<(), ServiceError> {
        validate_user_id(user_id)?;
        self.get_owned_history_place(user_id, id).await?;

        self.history_place_repository
            .delete_history_place(id)
            .await
            .map_err(|error| match error {
                DataLayerError::RecordNotUpdated => EntityNotFoundError::HistoryPlace(*id).into(),
                error => ServiceError::from(error),
            })
    }

    async fn get_stored_history_place(
        &self,
        id: &HistoryPlaceId,
    ) -> Result<GetHistoryPlaceResponseDTO, ServiceError> {
        self.history_place_repository
            .get_history_place(id)
            .await?
            .map(Into::into)
            .ok_or(EntityNotFoundError::HistoryPlace(*id).into())
    }

    async fn get_owned_history_place(
        &self,
        user_id: &str,
        id: &HistoryPlaceId,
    ) -> Result<HistoryPlace, ServiceError> {
        let history_place = self
            .history_place_repository
            .get_history_place(id)
            .await?
            .ok_or(EntityNotFoundError::HistoryPlace(*id))?;

        if history_place.user_id != user_id {
            return Err(ValidationError::Forbidden(*id).into());
        }

        Ok(history_place)
    }
}
