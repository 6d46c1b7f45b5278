//! Owner fixtures for creating in-memory test data.

use entity::owner;

/// Default test owner surname.
pub const DEFAULT_SURNAME: &str = "Hassan";

/// Default test owner name.
pub const DEFAULT_NAME: &str = "Ali";

/// Creates an owner entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - surname: `"Hassan"`
/// - name: `"Ali"`
///
/// # Returns
/// - `owner::Model` - In-memory owner entity
pub fn entity() -> owner::Model {
    owner::Model {
        id: 1,
        surname: DEFAULT_SURNAME.to_string(),
        name: DEFAULT_NAME.to_string(),
    }
}

/// Creates an owner entity builder for customization.
///
/// # Returns
/// - `OwnerEntityBuilder` - Builder instance with default values
pub fn entity_builder() -> OwnerEntityBuilder {
    OwnerEntityBuilder::default()
}

/// Builder for creating customized owner entity models.
pub struct OwnerEntityBuilder {
    id: i32,
    surname: String,
    name: String,
}

impl Default for OwnerEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            surname: DEFAULT_SURNAME.to_string(),
            name: DEFAULT_NAME.to_string(),
        }
    }
}

impl OwnerEntityBuilder {
    /// Sets the owner ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the owner surname.
    pub fn surname(mut self, surname: impl Into<String>) -> Self {
        self.surname = surname.into();
        self
    }

    /// Sets the owner name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and returns the owner entity model.
    pub fn build(self) -> owner::Model {
        owner::Model {
            id: self.id,
            surname: self.surname,
            name: self.name,
        }
    }
}
