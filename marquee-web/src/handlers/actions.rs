//! Form-driven state transitions.
//!
//! Every action runs the same shape: take the channel's lock for the
//! synchronous begin transition, release it, run the catalog call,
//! then re-take the lock to apply the sequenced outcome. The response
//! is always a redirect back to the search page, which renders
//! whatever state the machines are in.

use axum::extract::{Form, Path, State};
use axum::response::Redirect;
use marquee_search::client::CatalogClient;
use serde::Deserialize;

use crate::server::AppState;

/// Search form fields as posted by the UI.
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    /// Free-text search terms.
    #[serde(default)]
    pub query: String,
    /// Kind filter; empty string means no filter.
    #[serde(default)]
    pub kind: String,
    /// Year filter; empty string means no filter.
    #[serde(default)]
    pub year: String,
}

/// Applies form edits and submits the search.
pub async fn submit_search(State(state): State<AppState>, Form(form): Form<SearchForm>) -> Redirect {
    let request = {
        let mut list = state.list().write().await;
        list.edit_text(form.query);
        list.edit_kind(form.kind.parse().ok());
        let year = form.year.trim();
        list.edit_year((!year.is_empty()).then(|| year.to_string()));
        list.submit()
    };

    // A blank query is a no-op; the page re-renders unchanged.
    if let Some(request) = request {
        let outcome = state.catalog().search(&request.query, request.page).await;
        state.list().write().await.apply(request.seq, outcome);
    }

    Redirect::to("/")
}

/// Requests another page of the committed query.
pub async fn change_page(State(state): State<AppState>, Path(n): Path<u32>) -> Redirect {
    let request = { state.list().write().await.change_page(n) };

    if let Some(request) = request {
        let outcome = state.catalog().search(&request.query, request.page).await;
        state.list().write().await.apply(request.seq, outcome);
    }

    Redirect::to("/")
}

/// Opens the detail modal for one title.
pub async fn select_title(State(state): State<AppState>, Path(imdb_id): Path<String>) -> Redirect {
    let request = { state.detail().write().await.select(imdb_id) };

    let outcome = state.catalog().detail(&request.imdb_id).await;
    state.detail().write().await.apply(request.seq, outcome);

    Redirect::to("/")
}

/// Closes the detail modal. Escape in the browser posts here too.
pub async fn close_modal(State(state): State<AppState>) -> Redirect {
    state.detail().write().await.close();
    Redirect::to("/")
}

/// Dismisses the shared error banner for both channels.
pub async fn dismiss_error(State(state): State<AppState>) -> Redirect {
    state.list().write().await.dismiss_error();
    state.detail().write().await.dismiss_error();
    Redirect::to("/")
}
