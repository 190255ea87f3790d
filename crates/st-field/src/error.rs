use st_city::CityError;
use st_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FieldError {
    #[error("field configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("surface is {got_width}x{got_height}, configuration expects {width}x{height}")]
    SurfaceMismatch {
        width:      u32,
        height:     u32,
        got_width:  u32,
        got_height: u32,
    },

    #[error("city setup failed: {0}")]
    City(#[from] CityError),
}

pub type FieldResult<T> = Result<T, FieldError>;
