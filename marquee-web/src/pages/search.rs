//! The search page: form, banner, result grid, pager, and modal.

use axum::extract::State;
use axum::response::Html;
use marquee_search::controller::ListPhase;
use marquee_search::types::{KindFilter, SearchQuery};

use crate::components::{detail_modal, error_banner, escape, page_shell, pagination_bar, result_grid};
use crate::server::AppState;

/// Renders the search page from the current state of both channels.
pub async fn search_page(State(state): State<AppState>) -> Html<String> {
    let list = state.list().read().await;
    let detail = state.detail().read().await;

    let banner = list
        .error()
        .or_else(|| detail.error())
        .map(error_banner)
        .unwrap_or_default();

    let results = match list.phase() {
        ListPhase::Idle => welcome_block(),
        ListPhase::Loading => loading_block(),
        ListPhase::Loaded => list
            .results()
            .map(|page| {
                format!(
                    "{}{}{}",
                    results_header(page.total_count, list.current_page(), list.total_pages()),
                    result_grid(&page.items),
                    pagination_bar(list.current_page(), list.total_pages(), list.is_loading()),
                )
            })
            .unwrap_or_default(),
        ListPhase::Empty => empty_block(),
        // The banner already carries the message.
        ListPhase::Failed => String::new(),
    };

    let content = format!(
        "{}\n{}\n{}\n{}",
        search_form(list.draft()),
        banner,
        results,
        detail_modal(&detail),
    );

    Html(page_shell("Marquee", &content))
}

fn search_form(draft: &SearchQuery) -> String {
    let selected = |kind: KindFilter| {
        if draft.kind == Some(kind) { " selected" } else { "" }
    };

    format!(
        r#"<form method="post" action="/search" class="bg-gray-800 border border-gray-700 rounded-lg p-6 mb-6">
            <div class="flex flex-col md:flex-row gap-4">
                <input name="query" type="text" value="{query}" placeholder="Search for movies, TV series..."
                       class="flex-1 bg-gray-900 border border-gray-600 rounded-lg px-4 py-2 text-white">
                <select name="kind" class="bg-gray-900 border border-gray-600 rounded-lg px-4 py-2 text-white">
                    <option value="">All types</option>
                    <option value="movie"{movie_selected}>Movies</option>
                    <option value="series"{series_selected}>Series</option>
                </select>
                <input name="year" type="text" value="{year}" placeholder="Year" maxlength="4" inputmode="numeric"
                       class="w-24 bg-gray-900 border border-gray-600 rounded-lg px-4 py-2 text-white">
                <button type="submit" class="bg-indigo-600 hover:bg-indigo-500 text-white font-medium rounded-lg px-6 py-2">Search</button>
            </div>
        </form>"#,
        query = escape(&draft.text),
        year = escape(draft.year.as_deref().unwrap_or_default()),
        movie_selected = selected(KindFilter::Movie),
        series_selected = selected(KindFilter::Series),
    )
}

fn results_header(total_count: u32, current_page: u32, total_pages: u32) -> String {
    let plural = if total_count == 1 { "" } else { "s" };
    format!(
        r#"<div class="flex items-center justify-between mb-6">
            <p class="text-gray-300">Found {total_count} result{plural}</p>
            <span class="bg-indigo-900/50 text-indigo-200 text-sm px-4 py-1 rounded-full">Page {current_page} of {total_pages}</span>
        </div>"#
    )
}

fn welcome_block() -> String {
    r#"<div class="text-center py-16 text-gray-400">
        <div class="text-5xl mb-4">🔍</div>
        <h2 class="text-xl font-semibold text-white mb-2">Start exploring</h2>
        <p>Enter a movie or TV series name to begin your search</p>
    </div>"#
        .to_string()
}

fn loading_block() -> String {
    r#"<div class="text-center py-16 text-gray-400">Searching…</div>"#.to_string()
}

fn empty_block() -> String {
    r#"<div class="text-center py-16 text-gray-400">
        <h2 class="text-xl font-semibold text-white mb-2">No results found</h2>
        <p>Try adjusting your search terms or filters</p>
    </div>"#
        .to_string()
}
