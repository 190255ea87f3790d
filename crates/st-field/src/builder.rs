//! Fluent builder for constructing a [`Field`].

use st_core::{FieldConfig, SimRng};
use st_surface::PixelSurface;

use crate::field::check_surface;
use crate::{Field, FieldResult};

/// Fluent builder for [`Field<S>`].
///
/// # Required inputs
///
/// - [`FieldConfig`] — canvas size, population, painters, seed, …
/// - `S: PixelSurface` — the canvas, sized `config.width × config.height`
///
/// # Optional inputs (have defaults)
///
/// | Method      | Default                                  |
/// |-------------|------------------------------------------|
/// | `.started()`| Uninitialized; the first `tick` starts it |
///
/// # Example
///
/// ```rust
/// use st_core::{Color, FieldConfig};
/// use st_field::FieldBuilder;
/// use st_surface::PixelBuffer;
///
/// let config = FieldConfig { width: 100, height: 100, city_count: 10, ..FieldConfig::default() };
/// let surface = PixelBuffer::new(100, 100, Color::BLACK).unwrap();
/// let field = FieldBuilder::new(config, surface).started().build().unwrap();
/// assert_eq!(field.run(), Some(0));
/// ```
pub struct FieldBuilder<S: PixelSurface> {
    config:  FieldConfig,
    surface: S,
    start:   bool,
}

impl<S: PixelSurface> FieldBuilder<S> {
    pub fn new(config: FieldConfig, surface: S) -> Self {
        Self { config, surface, start: false }
    }

    /// Start the first run during `build` instead of on the first tick.
    pub fn started(mut self) -> Self {
        self.start = true;
        self
    }

    /// Validate the configuration and the surface, seed the root RNG, and
    /// return the field.
    pub fn build(self) -> FieldResult<Field<S>> {
        self.config.validate()?;

        check_surface(&self.config, &self.surface)?;

        let rng = SimRng::new(self.config.seed.expand());
        let mut field = Field::new(self.config, self.surface, rng);
        if self.start {
            field.start()?;
        }
        Ok(field)
    }
}
