use serde::{Deserialize, Serialize};

use crate::model::car::OwnedCarDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnerDto {
    pub id: i32,
    #[serde(rename = "nom")]
    pub surname: String,
    #[serde(rename = "prenom")]
    pub name: String,
    /// Cars held by the owner, only present on single-owner lookups.
    #[serde(rename = "voitures", default, skip_serializing_if = "Option::is_none")]
    pub cars: Option<Vec<OwnedCarDto>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOwnerDto {
    #[serde(rename = "nom")]
    pub surname: String,
    #[serde(rename = "prenom")]
    pub name: String,
}
