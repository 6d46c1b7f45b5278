pub use super::car::Entity as Car;
pub use super::owner::Entity as Owner;
