use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateProfileInput {
    pub name: String,
    pub age: String,
    pub allergies: Vec<String>,
    pub conditions: Vec<String>,
    pub weight: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateProfileInput {
    pub profile_id: Uuid,
    pub name: Option<String>,
    pub age: Option<String>,
    pub allergies: Option<Vec<String>>,
    pub conditions: Option<Vec<String>>,
    pub weight: Option<String>,
}
