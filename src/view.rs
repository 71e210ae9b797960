use crate::api::SearchOutcome;
use crate::model::Meal;

/// One recipe card plus its detail visibility.
#[derive(Debug, Clone)]
pub struct Card {
    pub meal: Meal,
    pub expanded: bool,
}

/// The ordered cards from one completed search. A new set fully replaces
/// the previous one; expansion state starts collapsed on every card.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    pub cards: Vec<Card>,
}

impl ResultSet {
    fn new(meals: Vec<Meal>) -> Self {
        ResultSet {
            cards: meals
                .into_iter()
                .map(|meal| Card {
                    meal,
                    expanded: false,
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Flip the expanded flag of the card with the given meal id.
    /// Returns the new state, or `None` when no card has that id.
    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        let card = self.cards.iter_mut().find(|card| card.meal.id == id)?;
        card.expanded = !card.expanded;
        Some(card.expanded)
    }
}

/// What the results area is currently showing.
#[derive(Debug, Clone)]
pub enum ViewPhase {
    /// Nothing searched yet; the usage hint is visible
    Idle,
    /// A request is in flight; the loading placeholder is visible
    Loading,
    /// Cards from the latest completed search
    Results(ResultSet),
    /// The latest search completed with no matches
    Empty,
    /// The latest search failed; the results area is cleared
    Error,
}

/// Explicit view state. The display is a pure projection of this struct,
/// nothing is kept in rendered output.
///
/// Every search takes a monotonically increasing sequence number from
/// [`SearchView::begin_search`]; [`SearchView::apply`] and
/// [`SearchView::fail`] ignore any sequence that is no longer the latest,
/// so a late response from a superseded search cannot overwrite newer state.
#[derive(Debug)]
pub struct SearchView {
    /// Results area
    pub phase: ViewPhase,
    /// Error line shown above the results area
    pub error: Option<&'static str>,
    latest_seq: u64,
}

impl SearchView {
    pub fn new() -> Self {
        SearchView {
            phase: ViewPhase::Idle,
            error: None,
            latest_seq: 0,
        }
    }

    /// Start a new search: clear any prior error, show the loading
    /// placeholder and hand out this search's sequence number.
    pub fn begin_search(&mut self) -> u64 {
        self.latest_seq += 1;
        self.error = None;
        self.phase = ViewPhase::Loading;
        self.latest_seq
    }

    /// Record a validation failure. No sequence number is consumed since
    /// no request goes out; the results area is left as it was.
    pub fn reject_input(&mut self, message: &'static str) {
        self.error = Some(message);
    }

    /// Apply a completed search outcome. Stale sequences are ignored.
    pub fn apply(&mut self, seq: u64, outcome: SearchOutcome) {
        if seq != self.latest_seq {
            return;
        }
        self.phase = match outcome {
            SearchOutcome::Found(meals) => ViewPhase::Results(ResultSet::new(meals)),
            SearchOutcome::NoMatches => ViewPhase::Empty,
        };
    }

    /// Record a failed search: show the message and clear the results
    /// area. Stale sequences are ignored.
    pub fn fail(&mut self, seq: u64, message: &'static str) {
        if seq != self.latest_seq {
            return;
        }
        self.error = Some(message);
        self.phase = ViewPhase::Error;
    }

    /// Flip detail visibility for the card with the given meal id.
    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        match &mut self.phase {
            ViewPhase::Results(set) => set.toggle(id),
            _ => None,
        }
    }

    /// Resolve a 1-based display index to a meal id.
    pub fn id_at(&self, index: usize) -> Option<&str> {
        match &self.phase {
            ViewPhase::Results(set) => set
                .cards
                .get(index.checked_sub(1)?)
                .map(|card| card.meal.id.as_str()),
            _ => None,
        }
    }
}

impl Default for SearchView {
    fn default() -> Self {
        Self::new()
    }
}
