use futures::future::{join_all, try_join_all};
use itertools::Itertools;

use super::PlacesService;
use super::RESTAURANT_TYPE;
use super::aggregator::{AggregationOptions, AggregationRequest, aggregate};
use super::dto::{
    BrowsePlacesRequestDTO, BrowsePlacesResponseDTO, CityResponseDTO, CityTopRestaurantsDTO,
    CityTopRestaurantsOutcome, PlaceSearchResultDTO, RestaurantDetailDTO, TopRestaurantDTO,
};
use super::mapper::{
    city_display_name, photo_url, photos_from_references, reviews_from_provider,
    search_page_to_summaries, top_restaurant_from_nearby,
};
use super::validator::{parse_coordinates, validate_search_term};
use crate::model::place::{Location, price_level_label};
use crate::provider::places::{
    AutocompleteKind, NearbySearchRequest, PlaceField, PlacePrediction, RankBy,
};
use crate::service::error::{EntityNotFoundError, ServiceError};

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_PAGE_SIZE: u32 = 60;

const SEARCH_PLACE_FIELDS: [PlaceField; 5] = [
    PlaceField::FormattedAddress,
    PlaceField::Geometry,
    PlaceField::Type,
    PlaceField::Rating,
    PlaceField::Photo,
];

const RESTAURANT_CANDIDATE_FIELDS: [PlaceField; 4] = [
    PlaceField::PlaceId,
    PlaceField::Name,
    PlaceField::FormattedAddress,
    PlaceField::Types,
];

const RESTAURANT_DETAIL_FIELDS: [PlaceField; 11] = [
    PlaceField::Name,
    PlaceField::FormattedAddress,
    PlaceField::Geometry,
    PlaceField::Types,
    PlaceField::Rating,
    PlaceField::Photos,
    PlaceField::Reviews,
    PlaceField::PriceLevel,
    PlaceField::Website,
    PlaceField::OpeningHours,
    PlaceField::UserRatingsTotal,
];

impl PlacesService {
    /// Paginated nearby restaurants around a city or explicit coordinates.
    ///
    /// # Arguments
    ///
    /// * `request` - city (`@lat@lng` or free text), optional keyword and page
    #[tracing::instrument(level = "debug", skip(self), err(Debug))]
    pub async fn browse_places(
        &self,
        request: BrowsePlacesRequestDTO,
    ) -> Result<BrowsePlacesResponseDTO, ServiceError> {
        let city = validate_search_term(Some(request.city.as_str()))?;
        let location = self.resolve_location(city).await?;

        let keyword = request
            .place
            .map(|place| place.trim().to_string())
            .filter(|place| !place.is_empty());

        let page = aggregate(
            self.places_provider.as_ref(),
            AggregationRequest {
                location,
                keyword,
                page: request.page.unwrap_or(DEFAULT_PAGE),
                page_size: request.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            },
            &AggregationOptions::from(self.config.as_ref()),
        )
        .await?;

        search_page_to_summaries(&self.config, page)
    }

    /// Cities matching `search`, or the configured default cities when no term is given.
    #[tracing::instrument(level = "debug", skip(self), err(Debug))]
    pub async fn search_cities(
        &self,
        search: Option<String>,
    ) -> Result<Vec<CityResponseDTO>, ServiceError> {
        let predictions: Vec<PlacePrediction> = match validate_search_term(search.as_deref()) {
            Ok(term) => {
                self.places_provider
                    .autocomplete(term, AutocompleteKind::Cities)
                    .await?
            }
            Err(_) => {
                let default_city_predictions =
                    try_join_all(self.config.default_cities.iter().map(|city| {
                        self.places_provider
                            .autocomplete(city, AutocompleteKind::Cities)
                    }))
                    .await?;

                default_city_predictions
                    .into_iter()
                    .filter_map(|predictions| predictions.into_iter().next())
                    .collect()
            }
        };

        Ok(predictions.into_iter().map(Into::into).collect())
    }

    /// Any kind of place matching `search`, each enriched with its details.
    #[tracing::instrument(level = "debug", skip(self), err(Debug))]
    pub async fn search_places(
        &self,
        search: Option<String>,
    ) -> Result<Vec<PlaceSearchResultDTO>, ServiceError> {
        let term = validate_search_term(search.as_deref())?;

        let predictions = self
            .places_provider
            .autocomplete(term, AutocompleteKind::Any)
            .await?;

        try_join_all(
            predictions
                .into_iter()
                .map(|prediction| self.search_place_result(prediction)),
        )
        .await
    }

    /// Best rated restaurants of the first configured cities.
    ///
    /// A failing city is reported in place and does not affect the others.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn top_restaurants(&self) -> Vec<CityTopRestaurantsDTO> {
        let cities = self
            .config
            .default_cities
            .iter()
            .take(self.config.top_cities_count);

        join_all(cities.map(|city| async move {
            let outcome = match self.city_top_restaurants(city).await {
                Ok(restaurants) => CityTopRestaurantsOutcome::Success { restaurants },
                Err(error) => {
                    tracing::warn!(%city, %error, "Failed to fetch top restaurants");
                    CityTopRestaurantsOutcome::Failure {
                        reason: error.to_string(),
                    }
                }
            };

            CityTopRestaurantsDTO {
                city: city_display_name(city),
                outcome,
            }
        }))
        .await
    }

    /// Restaurant details by place id, falling back to a text search.
    #[tracing::instrument(level = "debug", skip(self), err(Debug))]
    pub async fn search_restaurant(
        &self,
        search: Option<String>,
    ) -> Result<RestaurantDetailDTO, ServiceError> {
        let term = validate_search_term(search.as_deref())?;

        let place_id = match self
            .places_provider
            .place_details(term, &[PlaceField::PlaceId])
            .await
        {
            Ok(_) => term.to_string(),
            Err(error) => {
                tracing::debug!(%error, "Not a place id, searching by text");

                self.places_provider
                    .find_place_from_text(term, &RESTAURANT_CANDIDATE_FIELDS)
                    .await?
                    .into_iter()
                    .next()
                    .ok_or_else(|| EntityNotFoundError::Restaurant(term.to_string()))?
                    .place_id
            }
        };

        let details = self
            .places_provider
            .place_details(&place_id, &RESTAURANT_DETAIL_FIELDS)
            .await?;

        Ok(RestaurantDetailDTO {
            photos: photos_from_references(&self.config, details.photo_references)?,
            reviews: reviews_from_provider(details.reviews),
            price_level: price_level_label(details.price_level).to_string(),
            place_id,
            name: details.name,
            address: details.formatted_address,
            location: details.location,
            types: details.types,
            rating: details.rating,
            total_ratings: details.user_ratings_total,
            website: details.website,
            opening_hours: details.opening_hours,
        })
    }

    async fn resolve_location(&self, city: &str) -> Result<Location, ServiceError> {
        if let Some(location) = parse_coordinates(city)? {
            return Ok(location);
        }

        let prediction = self
            .places_provider
            .autocomplete(city, AutocompleteKind::Cities)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| EntityNotFoundError::City(city.to_string()))?;

        self.places_provider
            .place_details(&prediction.place_id, &[PlaceField::Geometry])
            .await?
            .location
            .ok_or_else(|| EntityNotFoundError::City(city.to_string()).into())
    }

    async fn search_place_result(
        &self,
        prediction: PlacePrediction,
    ) -> Result<PlaceSearchResultDTO, ServiceError> {
        let details = self
            .places_provider
            .place_details(&prediction.place_id, &SEARCH_PLACE_FIELDS)
            .await?;

        let photo = details
            .photo_references
            .first()
            .map(|reference| photo_url(&self.config, reference))
            .transpose()?;

        Ok(PlaceSearchResultDTO {
            place_id: prediction.place_id,
            name: prediction.main_text,
            address: details.formatted_address,
            location: details.location,
            types: details.types,
            rating: details.rating,
            photo,
            full_description: prediction.description,
        })
    }

    async fn city_top_restaurants(
        &self,
        city: &str,
    ) -> Result<Vec<TopRestaurantDTO>, ServiceError> {
        let location = self.resolve_location(city).await?;

        let page = self
            .places_provider
            .nearby_search(NearbySearchRequest {
                location,
                radius: self.config.top_restaurants_radius,
                keyword: None,
                place_type: Some(RESTAURANT_TYPE.to_string()),
                rank_by: Some(RankBy::Prominence),
                page_token: None,
            })
            .await?;

        page.results
            .into_iter()
            .filter_map(|place| match place.rating {
                Some(rating) if rating > 0.0 => Some((rating, place)),
                _ => None,
            })
            .sorted_by(|(a, _), (b, _)| b.total_cmp(a))
            .take(self.config.top_restaurants_per_city)
            .map(|(rating, place)| top_restaurant_from_nearby(&self.config, rating, place))
            .collect()
    }
}
