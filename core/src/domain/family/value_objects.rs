use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateFamilyInput {
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct RenameFamilyInput {
    pub family_id: Uuid,
    pub name: String,
}
