use foodie_core::service::places::dto::{CityTopRestaurantsDTO, CityTopRestaurantsOutcome};
use one_dto_mapper::convert_inner;

use super::dto::{CityTopRestaurantsOutcomeRestEnum, CityTopRestaurantsRestDTO};

impl From<CityTopRestaurantsDTO> for CityTopRestaurantsRestDTO {
    fn from(value: CityTopRestaurantsDTO) -> Self {
        Self {
            city: value.city,
            outcome: value.outcome.into(),
        }
    }
}

impl From<CityTopRestaurantsOutcome> for CityTopRestaurantsOutcomeRestEnum {
    fn from(value: CityTopRestaurantsOutcome) -> Self {
        match value {
            CityTopRestaurantsOutcome::Success { restaurants } => Self::Success {
                restaurants: convert_inner(restaurants),
            },
            CityTopRestaurantsOutcome::Failure { reason } => Self::Failure { reason },
        }
    }
}
