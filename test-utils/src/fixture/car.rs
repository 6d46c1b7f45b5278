//! Car fixtures for creating in-memory test data.
//!
//! Provides fixture functions for creating car entity models without database insertion.
//! These are useful for unit testing domain conversions and as factory defaults.

use entity::car;

/// Default test car brand.
pub const DEFAULT_BRAND: &str = "Toyota";

/// Default test car model.
pub const DEFAULT_MODEL: &str = "Corolla";

/// Default test car color.
pub const DEFAULT_COLOR: &str = "Grise";

/// Default test licence plate.
pub const DEFAULT_PLATE: &str = "A-1-9090";

/// Default test model year.
pub const DEFAULT_YEAR: i32 = 2018;

/// Default test price.
pub const DEFAULT_PRICE: i32 = 95000;

/// Default owner ID for cars.
pub const DEFAULT_OWNER_ID: i32 = 1;

/// Creates a car entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - owner_id: `1`
/// - brand: `"Toyota"`
/// - model: `"Corolla"`
/// - color: `"Grise"`
/// - plate: `"A-1-9090"`
/// - year: `2018`
/// - price: `95000`
///
/// # Returns
/// - `car::Model` - In-memory car entity
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let car = fixture::car::entity();
/// assert_eq!(car.brand, "Toyota");
/// ```
pub fn entity() -> car::Model {
    entity_builder().build()
}

/// Creates a car entity builder for customization.
///
/// # Returns
/// - `CarEntityBuilder` - Builder instance with default values
pub fn entity_builder() -> CarEntityBuilder {
    CarEntityBuilder::default()
}

/// Builder for creating customized car entity models.
///
/// All fields have sensible defaults that can be overridden.
pub struct CarEntityBuilder {
    id: i32,
    owner_id: i32,
    brand: String,
    model: String,
    color: String,
    plate: String,
    year: i32,
    price: i32,
}

impl Default for CarEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            owner_id: DEFAULT_OWNER_ID,
            brand: DEFAULT_BRAND.to_string(),
            model: DEFAULT_MODEL.to_string(),
            color: DEFAULT_COLOR.to_string(),
            plate: DEFAULT_PLATE.to_string(),
            year: DEFAULT_YEAR,
            price: DEFAULT_PRICE,
        }
    }
}

impl CarEntityBuilder {
    /// Sets the car ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the ID of the owning owner.
    pub fn owner_id(mut self, owner_id: i32) -> Self {
        self.owner_id = owner_id;
        self
    }

    /// Sets the brand.
    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    /// Sets the model.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the color.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Sets the licence plate.
    pub fn plate(mut self, plate: impl Into<String>) -> Self {
        self.plate = plate.into();
        self
    }

    /// Sets the model year.
    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Sets the price.
    pub fn price(mut self, price: i32) -> Self {
        self.price = price;
        self
    }

    /// Builds and returns the car entity model.
    pub fn build(self) -> car::Model {
        car::Model {
            id: self.id,
            owner_id: self.owner_id,
            brand: self.brand,
            model: self.model,
            color: self.color,
            plate: self.plate,
            year: self.year,
            price: self.price,
        }
    }
}
