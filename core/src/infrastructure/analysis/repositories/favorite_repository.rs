use crate::domain::{
    analysis::{entities::Favorite, ports::FavoriteRepository},
    common::entities::app_errors::CoreError,
};
use crate::infrastructure::store::{FAVORITES_KEY, JsonStore};

#[derive(Debug, Clone)]
pub struct StoreFavoriteRepository {
    pub store: JsonStore,
}

impl StoreFavoriteRepository {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }
}

impl FavoriteRepository for StoreFavoriteRepository {
    async fn list_favorites(&self) -> Result<Vec<Favorite>, CoreError> {
        self.store.get_or_default(FAVORITES_KEY).await
    }

    async fn toggle_favorite(&self, favorite: Favorite) -> Result<bool, CoreError> {
        self.store
            .update(FAVORITES_KEY, |favorites: &mut Vec<Favorite>| {
                if let Some(index) = favorites.iter().position(|f| f.id == favorite.id) {
                    favorites.remove(index);
                    Ok(false)
                } else {
                    favorites.push(favorite);
                    Ok(true)
                }
            })
            .await
    }
}
