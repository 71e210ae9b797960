mod mealdb;

pub use mealdb::MealDb;

use async_trait::async_trait;

use crate::error::SearchError;
use crate::model::Meal;

/// Outcome of a name search. The endpoint distinguishes "no matches" (a
/// `null` meals field) from failure, and so does this type.
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    /// At least one matching recipe, in endpoint order
    Found(Vec<Meal>),
    /// Well-formed response with no matches
    NoMatches,
}

/// Unified trait for recipe search backends
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// Search recipes by name.
    ///
    /// Implementations must reject queries that are empty after trimming
    /// with [`SearchError::EmptyQuery`] without issuing a request.
    async fn search_by_name(&self, query: &str) -> Result<SearchOutcome, SearchError>;
}
