use st_core::{CityId, CoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CityError {
    #[error("no valid friend for {city} after {attempts} attempts")]
    NoValidFriend { city: CityId, attempts: u32 },

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type CityResult<T> = Result<T, CityError>;
