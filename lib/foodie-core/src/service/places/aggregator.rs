//! Walks the token-paginated nearby search and re-paginates the deduplicated results.

use std::time::Duration;

use itertools::Itertools;

use super::RESTAURANT_TYPE;
use super::dto::SearchPage;
use crate::config::core_config::{BufferStrategy, PlacesConfig};
use crate::model::common::PageRequest;
use crate::model::place::Location;
use crate::provider::places::error::PlacesProviderError;
use crate::provider::places::{NearbyPlace, NearbySearchRequest, PlacesProvider};

pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Clone, Debug, PartialEq)]
pub struct AggregationRequest {
    pub location: Location,
    pub keyword: Option<String>,
    pub page: u32,
    pub page_size: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AggregationOptions {
    pub radius: u32,
    pub place_type: Option<String>,
    pub page_cooldown: Duration,
    pub max_iterations: u32,
    pub buffer_strategy: BufferStrategy,
}

impl From<&PlacesConfig> for AggregationOptions {
    fn from(config: &PlacesConfig) -> Self {
        Self {
            radius: config.browse_radius,
            place_type: Some(RESTAURANT_TYPE.to_string()),
            page_cooldown: config.page_cooldown,
            max_iterations: config.max_iterations,
            buffer_strategy: config.buffer_strategy,
        }
    }
}

/// Follows page tokens until the requested page is reached, the provider runs
/// out of tokens or `max_iterations` is hit.
///
/// The provider only honours a fresh page token after a short delay, so every
/// follow-up call is preceded by `page_cooldown`.
pub async fn aggregate(
    provider: &dyn PlacesProvider,
    request: AggregationRequest,
    options: &AggregationOptions,
) -> Result<SearchPage<NearbyPlace>, PlacesProviderError> {
    let page_request = PageRequest {
        page: request.page,
        page_size: request.page_size,
    }
    .normalized(MAX_PAGE_SIZE);
    let target_iteration = page_request.page - 1;

    let mut buffer: Vec<NearbyPlace> = vec![];
    let mut page_token: Option<String> = None;
    let mut iterations: u32 = 0;

    loop {
        let batch = provider
            .nearby_search(NearbySearchRequest {
                location: request.location,
                radius: options.radius,
                keyword: request.keyword.clone(),
                place_type: options.place_type.clone(),
                rank_by: None,
                page_token: page_token.take(),
            })
            .await?;

        match options.buffer_strategy {
            BufferStrategy::LastPage => buffer = batch.results,
            BufferStrategy::Accumulate => buffer.extend(batch.results),
        }
        page_token = batch.next_page_token;

        if iterations == target_iteration {
            break;
        }
        iterations += 1;
        if page_token.is_none() || iterations >= options.max_iterations {
            break;
        }

        tracing::debug!(iterations, "Waiting before requesting next nearby page");
        tokio::time::sleep(options.page_cooldown).await;
    }

    let unique: Vec<NearbyPlace> = buffer
        .into_iter()
        .unique_by(|place| place.place_id.clone())
        .collect();

    let total_results = unique.len() as u64;
    let items = unique
        .into_iter()
        .skip(usize::try_from(page_request.offset()).unwrap_or(usize::MAX))
        .take(page_request.page_size as usize)
        .collect();

    Ok(SearchPage {
        page: page_request.page,
        page_size: page_request.page_size,
        items,
        total_results,
        total_pages: page_request.total_pages(total_results),
    })
}
