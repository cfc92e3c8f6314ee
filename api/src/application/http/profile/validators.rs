use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProfileValidator {
    #[validate(length(min = 1, max = 100, message = "name is required"))]
    pub name: String,

    #[validate(length(min = 1, max = 20, message = "age is required"))]
    #[schema(example = "8")]
    pub age: String,

    #[serde(default)]
    pub allergies: Vec<String>,

    #[serde(default)]
    pub conditions: Vec<String>,

    #[serde(default)]
    pub weight: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileValidator {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "name must not be empty"))]
    pub name: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, max = 20, message = "age must not be empty"))]
    pub age: Option<String>,

    #[serde(default)]
    pub allergies: Option<Vec<String>>,

    #[serde(default)]
    pub conditions: Option<Vec<String>>,

    #[serde(default)]
    pub weight: Option<String>,
}
