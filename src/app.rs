use log::{debug, error};

use crate::api::RecipeApi;
use crate::error::SearchError;
use crate::view::SearchView;

/// Ties input validation, the search backend and the view state together.
pub struct App {
    api: Box<dyn RecipeApi>,
    pub view: SearchView,
}

impl App {
    pub fn new(api: Box<dyn RecipeApi>) -> Self {
        App {
            api,
            view: SearchView::new(),
        }
    }

    /// Run one search action: trim and validate the raw input, flip the
    /// view into loading, query the backend and apply whatever comes back.
    ///
    /// A query that is empty after trimming shows the validation message
    /// and never reaches the backend.
    pub async fn submit(&mut self, raw: &str) {
        let query = raw.trim();
        if query.is_empty() {
            self.view.reject_input(SearchError::EmptyQuery.user_message());
            return;
        }

        let seq = self.view.begin_search();
        match self.api.search_by_name(query).await {
            Ok(outcome) => {
                debug!("search '{query}' completed");
                self.view.apply(seq, outcome);
            }
            Err(err) => {
                error!("search '{query}' failed: {err}");
                self.view.fail(seq, err.user_message());
            }
        }
    }

    /// Toggle a card's detail visibility. The selector is either the
    /// card's 1-based display number or a raw meal id.
    pub fn toggle(&mut self, selector: &str) -> Option<bool> {
        if let Ok(number) = selector.parse::<usize>() {
            if let Some(id) = self.view.id_at(number) {
                let id = id.to_string();
                return self.view.toggle(&id);
            }
        }
        self.view.toggle(selector)
    }
}
