pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod view;

pub use api::{MealDb, RecipeApi, SearchOutcome};
pub use app::App;
pub use config::AppConfig;
pub use error::SearchError;
pub use model::{Ingredient, Meal, SearchResponse, INGREDIENT_SLOTS};
pub use view::{Card, ResultSet, SearchView, ViewPhase};

/// Search recipes by name against the default endpoint.
pub async fn search_meals(query: &str) -> Result<SearchOutcome, SearchError> {
    let api = MealDb::new(&AppConfig::default())?;
    search_meals_with_client(&api, query).await
}

/// Search recipes by name with a caller-provided backend.
pub async fn search_meals_with_client(
    api: &dyn RecipeApi,
    query: &str,
) -> Result<SearchOutcome, SearchError> {
    api.search_by_name(query).await
}
