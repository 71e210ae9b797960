//! Projection of [`SearchView`] state to the text that replaces the display.
//!
//! Rendering is a pure function of the view state: every call rebuilds the
//! whole output, nothing is patched incrementally.

use crate::view::{Card, ResultSet, SearchView, ViewPhase};

/// Results-area placeholder while a request is in flight.
pub const LOADING: &str = "Loading...";
/// Results-area message when a search matches nothing.
pub const NO_RESULTS: &str = "No recipes found. Try another search!";
/// Usage hint shown before the first search.
pub const IDLE_HINT: &str =
    "Type a recipe name to search, a card number to toggle details, q to quit.";
/// Hint line on a collapsed card.
pub const HINT_EXPAND: &str = "▼ Select to show details";
/// Hint line on an expanded card.
pub const HINT_COLLAPSE: &str = "▲ Select to hide details";

/// Render the whole view: the error line (when set) followed by the
/// results area.
pub fn render(view: &SearchView) -> String {
    let mut out = String::new();

    if let Some(message) = view.error {
        out.push_str(message);
        out.push('\n');
    }

    match &view.phase {
        ViewPhase::Idle => {
            out.push_str(IDLE_HINT);
            out.push('\n');
        }
        ViewPhase::Loading => {
            out.push_str(LOADING);
            out.push('\n');
        }
        ViewPhase::Empty => {
            out.push_str(NO_RESULTS);
            out.push('\n');
        }
        ViewPhase::Error => {}
        ViewPhase::Results(set) => out.push_str(&render_results(set)),
    }

    out
}

fn render_results(set: &ResultSet) -> String {
    set.cards
        .iter()
        .enumerate()
        .map(|(i, card)| render_card(i + 1, card))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_card(number: usize, card: &Card) -> String {
    let meal = &card.meal;
    let mut out = String::new();

    match meal.category.as_deref() {
        Some(category) if !category.is_empty() => {
            out.push_str(&format!("{number}. {} ({category})\n", meal.name));
        }
        _ => out.push_str(&format!("{number}. {}\n", meal.name)),
    }

    if let Some(thumbnail) = meal.thumbnail.as_deref() {
        out.push_str(&format!("   {thumbnail}\n"));
    }

    let hint = if card.expanded {
        HINT_COLLAPSE
    } else {
        HINT_EXPAND
    };
    out.push_str(&format!("   {hint}\n"));

    if card.expanded {
        out.push_str("   Ingredients:\n");
        for ingredient in meal.ingredients() {
            out.push_str(&format!("     - {ingredient}\n"));
        }
        out.push_str("   Instructions:\n");
        for line in meal.instructions.as_deref().unwrap_or("").lines() {
            out.push_str(&format!("     {line}\n"));
        }
    }

    out
}
