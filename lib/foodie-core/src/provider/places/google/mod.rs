use std::sync::Arc;

use itertools::Itertools;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use url::Url;

use self::dto::{
    GoogleAutocompleteResponseDTO, GoogleDetailsResponseDTO, GoogleFindPlaceResponseDTO,
    GoogleNearbySearchResponseDTO,
};
use self::mapper::{candidate_from_dto, ensure_ok, nearby_place_from_dto};
use super::error::PlacesProviderError;
use super::{
    AutocompleteKind, NearbySearchPage, NearbySearchRequest, PlaceCandidate, PlaceDetails,
    PlaceField, PlacePrediction, PlacesProvider,
};
use crate::provider::http_client::HttpClient;

mod dto;
mod mapper;


/// Google Places web service (legacy JSON endpoints).
pub struct GooglePlacesProvider {
    client: Arc<dyn HttpClient>,
    base_url: String,
    api_key: SecretString,
    language: String,
}

impl GooglePlacesProvider {
    pub fn new(
        client: Arc<dyn HttpClient>,
        base_url: String,
        api_key: SecretString,
        language: String,
    ) -> Self {
        Self {
            client,
            base_url,
            api_key,
            language,
        }
    }

    fn endpoint_url(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<Url, PlacesProviderError> {
        let mut url = Url::parse(&format!(
            "{}/place/{endpoint}/json",
            self.base_url.trim_end_matches('/')
        ))?;

        url.query_pairs_mut()
            .extend_pairs(params.iter().map(|(key, value)| (*key, value.as_str())))
            .append_pair("key", self.api_key.expose_secret());

        Ok(url)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T, PlacesProviderError> {
        let url = self.endpoint_url(endpoint, params)?;

        let response = self
            .client
            .get(url.as_str())
            .header("Accept", "application/json")
            .send()
            .await?
            .error_for_status()?
            .json()?;

        Ok(response)
    }
}

fn join_fields(fields: &[PlaceField]) -> String {
    fields.iter().map(ToString::to_string).join(",")
}

#[async_trait::async_trait]
impl PlacesProvider for GooglePlacesProvider {
    #[tracing::instrument(level = "debug", skip(self), err(Debug))]
    async fn autocomplete(
        &self,
        input: &str,
        kind: AutocompleteKind,
    ) -> Result<Vec<PlacePrediction>, PlacesProviderError> {
        let mut params = vec![
            ("input", input.to_string()),
            ("language", self.language.clone()),
        ];
        if kind == AutocompleteKind::Cities {
            params.push(("types", "(cities)".to_string()));
        }

        let response: GoogleAutocompleteResponseDTO = self.fetch("autocomplete", &params).await?;
        ensure_ok(response.status)?;

        Ok(response.predictions.into_iter().map(Into::into).collect())
    }

    #[tracing::instrument(level = "debug", skip(self), err(Debug))]
    async fn place_details(
        &self,
        place_id: &str,
        fields: &[PlaceField],
    ) -> Result<PlaceDetails, PlacesProviderError> {
        let mut params = vec![
            ("place_id", place_id.to_string()),
            ("language", self.language.clone()),
        ];
        if !fields.is_empty() {
            params.push(("fields", join_fields(fields)));
        }

        let response: GoogleDetailsResponseDTO = self.fetch("details", &params).await?;
        ensure_ok(response.status)?;

        response
            .result
            .map(Into::into)
            .ok_or(PlacesProviderError::MissingResult)
    }

    #[tracing::instrument(level = "debug", skip(self), err(Debug))]
    async fn nearby_search(
        &self,
        request: NearbySearchRequest,
    ) -> Result<NearbySearchPage, PlacesProviderError> {
        let mut params = vec![
            ("location", request.location.to_string()),
            ("radius", request.radius.to_string()),
            ("language", self.language.clone()),
        ];
        if let Some(keyword) = request.keyword {
            params.push(("keyword", keyword));
        }
        if let Some(place_type) = request.place_type {
            params.push(("type", place_type));
        }
        if let Some(rank_by) = request.rank_by {
            params.push(("rankby", rank_by.to_string()));
        }
        if let Some(page_token) = request.page_token {
            params.push(("pagetoken", page_token));
        }

        let response: GoogleNearbySearchResponseDTO = self.fetch("nearbysearch", &params).await?;
        ensure_ok(response.status)?;

        Ok(NearbySearchPage {
            results: response
                .results
                .into_iter()
                .filter_map(nearby_place_from_dto)
                .collect(),
            next_page_token: response.next_page_token,
        })
    }

    #[tracing::instrument(level = "debug", skip(self), err(Debug))]
    async fn find_place_from_text(
        &self,
        input: &str,
        fields: &[PlaceField],
    ) -> Result<Vec<PlaceCandidate>, PlacesProviderError> {
        let params = vec![
            ("input", input.to_string()),
            ("inputtype", "textquery".to_string()),
            ("fields", join_fields(fields)),
            ("language", self.language.clone()),
        ];

        let response: GoogleFindPlaceResponseDTO =
            self.fetch("findplacefromtext", &params).await?;
        ensure_ok(response.status)?;

        Ok(response
            .candidates
            .into_iter()
            .filter_map(candidate_from_dto)
            .collect())
    }
}
