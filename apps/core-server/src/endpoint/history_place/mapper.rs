use foodie_core::service::error::{ServiceError, ValidationError};

use super::dto::HistoryPlaceListQueryParams;

const DEFAULT_PAGE: i64 = 1;
const DEFAULT_PAGE_SIZE: i64 = 10;

/// Page and page size of a list request. Values below 1 are rejected, oversized
/// values are left to the service to clamp.
pub(crate) fn list_pagination(
    query: &HistoryPlaceListQueryParams,
) -> Result<(u32, u32), ServiceError> {
    let page = query.page_no.unwrap_or(DEFAULT_PAGE);
    let page_size = query.page_size.unwrap_or(DEFAULT_PAGE_SIZE);

    if page < 1 || page_size < 1 {
        return Err(ValidationError::InvalidPagination { page, page_size }.into());
    }

    Ok((saturating_u32(page), saturating_u32(page_size)))
}

fn saturating_u32(value: i64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
