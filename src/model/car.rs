use serde::{Deserialize, Serialize};

use crate::model::owner::OwnerDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarDto {
    pub id: i32,
    #[serde(rename = "marque")]
    pub brand: String,
    #[serde(rename = "modele")]
    pub model: String,
    #[serde(rename = "couleur")]
    pub color: String,
    #[serde(rename = "immatricule")]
    pub plate: String,
    #[serde(rename = "annee")]
    pub year: i32,
    #[serde(rename = "prix")]
    pub price: i32,
    #[serde(rename = "proprietaire")]
    pub owner: OwnerDto,
}

/// A car listed under its owner, without the back-reference to the owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnedCarDto {
    pub id: i32,
    #[serde(rename = "marque")]
    pub brand: String,
    #[serde(rename = "modele")]
    pub model: String,
    #[serde(rename = "couleur")]
    pub color: String,
    #[serde(rename = "immatricule")]
    pub plate: String,
    #[serde(rename = "annee")]
    pub year: i32,
    #[serde(rename = "prix")]
    pub price: i32,
}

/// Reference to the owning owner inside a car request body.
///
/// Clients usually send the whole owner object; only the `id` is read and any
/// other field is ignored. A missing `id` deserializes to `0`, which is rejected
/// as an invalid reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerReferenceDto {
    #[serde(default)]
    pub id: i32,
}

/// Request body for both car creation and car update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarRequestDto {
    #[serde(rename = "marque")]
    pub brand: String,
    #[serde(rename = "modele")]
    pub model: String,
    #[serde(rename = "couleur")]
    pub color: String,
    #[serde(rename = "immatricule")]
    pub plate: String,
    #[serde(rename = "annee", default)]
    pub year: i32,
    #[serde(rename = "prix", default)]
    pub price: i32,
    #[serde(rename = "proprietaire", default)]
    pub owner: Option<OwnerReferenceDto>,
}
