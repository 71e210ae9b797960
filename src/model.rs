use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;
use serde_json::Value;

/// Highest ingredient/measure slot the API exposes.
pub const INGREDIENT_SLOTS: usize = 20;

/// Body of a search response. The endpoint signals "no matches" with a
/// literal `null` in the `meals` field, so the field is an `Option` rather
/// than an empty list.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub meals: Option<Vec<Meal>>,
}

/// A single recipe record as returned by the search endpoint.
///
/// Ingredients arrive as twenty parallel `strIngredientN`/`strMeasureN`
/// string fields; those are captured in `fields` and read back positionally
/// by [`Meal::ingredients`].
#[derive(Debug, Clone, Deserialize)]
pub struct Meal {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    #[serde(flatten)]
    fields: HashMap<String, Value>,
}

impl Meal {
    /// Collect the populated ingredient slots in ascending position order.
    ///
    /// All slots from 1 through [`INGREDIENT_SLOTS`] are checked; a slot
    /// contributes an entry only when its ingredient name is non-blank after
    /// trimming. A blank slot mid-sequence is skipped, it does not terminate
    /// the walk.
    pub fn ingredients(&self) -> Vec<Ingredient> {
        let mut ingredients = Vec::new();

        for i in 1..=INGREDIENT_SLOTS {
            let name = self.slot("strIngredient", i);
            if name.trim().is_empty() {
                continue;
            }
            ingredients.push(Ingredient {
                name: name.trim().to_string(),
                measure: self.slot("strMeasure", i).trim().to_string(),
            });
        }

        ingredients
    }

    /// Read one positional string field, treating missing and `null` as "".
    fn slot(&self, prefix: &str, index: usize) -> &str {
        self.fields
            .get(&format!("{prefix}{index}"))
            .and_then(Value::as_str)
            .unwrap_or("")
    }
}

/// One populated ingredient slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    pub measure: String,
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.measure.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} {}", self.measure, self.name)
        }
    }
}
