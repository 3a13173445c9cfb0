//! Test support: fixtures and a scripted catalog client.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::client::CatalogClient;
use crate::errors::CatalogError;
use crate::types::{MediaKind, SearchPage, SearchQuery, TitleDetail, TitleSummary};

/// Builds `count` distinct result rows.
pub fn summaries(count: usize) -> Vec<TitleSummary> {
    (0..count)
        .map(|i| TitleSummary {
            imdb_id: format!("tt{i:07}"),
            title: format!("Title {i}"),
            year: "1999".to_string(),
            kind: MediaKind::Movie,
            poster_url: None,
        })
        .collect()
}

/// Builds a result page.
pub fn page_of(items: Vec<TitleSummary>, total_count: u32, page: u32) -> SearchPage {
    SearchPage {
        items,
        total_count,
        page,
    }
}

/// Builds a minimal detail record for `imdb_id`.
pub fn detail_of(imdb_id: &str) -> TitleDetail {
    TitleDetail {
        imdb_id: imdb_id.to_string(),
        title: "The Matrix".to_string(),
        year: "1999".to_string(),
        kind: MediaKind::Movie,
        poster_url: None,
        plot: Some("A hacker learns the truth.".to_string()),
        genre: Some("Sci-Fi".to_string()),
        director: Some("The Wachowskis".to_string()),
        actors: Some("Keanu Reeves".to_string()),
        runtime: Some("136 min".to_string()),
        released: Some("31 Mar 1999".to_string()),
        rating: Some("8.7".to_string()),
        votes: Some("1,900,000".to_string()),
    }
}

/// Catalog client that replays scripted outcomes in order.
#[derive(Debug, Default)]
pub struct ScriptedCatalog {
    searches: Mutex<VecDeque<Result<SearchPage, CatalogError>>>,
    details: Mutex<VecDeque<Result<TitleDetail, CatalogError>>>,
}

impl ScriptedCatalog {
    /// Creates a catalog with empty scripts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the outcome of the next search call.
    pub fn push_search(&self, outcome: Result<SearchPage, CatalogError>) {
        self.searches.lock().unwrap().push_back(outcome);
    }

    /// Queues the outcome of the next detail call.
    pub fn push_detail(&self, outcome: Result<TitleDetail, CatalogError>) {
        self.details.lock().unwrap().push_back(outcome);
    }
}

#[async_trait]
impl CatalogClient for ScriptedCatalog {
    async fn search(&self, _query: &SearchQuery, _page: u32) -> Result<SearchPage, CatalogError> {
        self.searches
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(CatalogError::Transport {
                    reason: "no scripted search outcome".to_string(),
                })
            })
    }

    async fn detail(&self, _imdb_id: &str) -> Result<TitleDetail, CatalogError> {
        self.details.lock().unwrap().pop_front().unwrap_or_else(|| {
            Err(CatalogError::Transport {
                reason: "no scripted detail outcome".to_string(),
            })
        })
    }
}

mod flow_tests {
    use super::*;
    use crate::controller::{ListPhase, SearchController};
    use crate::detail::{DetailLoader, DetailPhase};

    /// Runs the full begin -> fetch -> apply flow the way the UI does.
    async fn run_list_fetch(controller: &mut SearchController, catalog: &ScriptedCatalog) {
        let Some(request) = controller.submit() else {
            return;
        };
        let outcome = catalog.search(&request.query, request.page).await;
        controller.apply(request.seq, outcome);
    }

    #[tokio::test]
    async fn submit_flow_reaches_loaded_through_the_client() {
        let catalog = ScriptedCatalog::new();
        catalog.push_search(Ok(page_of(summaries(10), 30, 1)));

        let mut controller = SearchController::new();
        controller.edit_text("Matrix");
        run_list_fetch(&mut controller, &catalog).await;

        assert_eq!(controller.phase(), ListPhase::Loaded);
        assert_eq!(controller.total_pages(), 3);
    }

    #[tokio::test]
    async fn page_change_flow_requests_the_same_query() {
        let catalog = ScriptedCatalog::new();
        catalog.push_search(Ok(page_of(summaries(10), 30, 1)));
        catalog.push_search(Ok(page_of(summaries(10), 30, 2)));

        let mut controller = SearchController::new();
        controller.edit_text("Matrix");
        run_list_fetch(&mut controller, &catalog).await;

        let request = controller.change_page(2).expect("page 2 of 3");
        assert_eq!(request.query.text, "Matrix");
        let outcome = catalog.search(&request.query, request.page).await;
        controller.apply(request.seq, outcome);

        assert_eq!(controller.current_page(), 2);
        assert_eq!(controller.phase(), ListPhase::Loaded);
    }

    #[tokio::test]
    async fn detail_flow_is_independent_of_list_state() {
        let catalog = ScriptedCatalog::new();
        catalog.push_detail(Ok(detail_of("tt0133093")));

        // List channel is mid-flight; the detail channel proceeds anyway.
        let mut controller = SearchController::new();
        controller.edit_text("Matrix");
        let list_request = controller.submit().unwrap();
        assert_eq!(controller.phase(), ListPhase::Loading);

        let mut loader = DetailLoader::new();
        let request = loader.select("tt0133093");
        let outcome = catalog.detail(&request.imdb_id).await;
        loader.apply(request.seq, outcome);

        assert_eq!(loader.phase(), DetailPhase::Ready);
        assert_eq!(controller.phase(), ListPhase::Loading, "list untouched");

        controller.apply(list_request.seq, Ok(page_of(summaries(1), 1, 1)));
        assert_eq!(loader.phase(), DetailPhase::Ready, "detail untouched");
    }
}
