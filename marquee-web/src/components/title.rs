//! Result cards and the detail modal.

use marquee_search::detail::{DetailLoader, DetailPhase};
use marquee_search::types::{TitleDetail, TitleSummary};

use super::layout::escape;

/// Poster placeholder shown when the catalog has no image.
fn poster_placeholder(height_class: &str) -> String {
    format!(
        r#"<div class="{height_class} bg-gray-700 rounded-t-lg flex items-center justify-center">
            <span class="text-gray-500 text-sm font-medium">No image</span>
        </div>"#
    )
}

/// Renders one result card linking to its detail view.
pub fn result_card(item: &TitleSummary) -> String {
    // A sentinel poster is absent in the model; render the
    // placeholder instead of an image element.
    let poster = match &item.poster_url {
        Some(url) => format!(
            r#"<img src="{}" alt="{}" class="h-64 w-full object-cover rounded-t-lg">"#,
            escape(url),
            escape(&item.title)
        ),
        None => poster_placeholder("h-64"),
    };

    format!(
        r#"<a href="/title/{id}" class="block bg-gray-800 border border-gray-700 rounded-lg hover:border-indigo-500 transition-colors">
            {poster}
            <div class="p-4">
                <h3 class="text-white font-semibold truncate">{title}</h3>
                <p class="text-gray-400 text-sm mt-1">{year} · {kind}</p>
            </div>
        </a>"#,
        id = escape(&item.imdb_id),
        title = escape(&item.title),
        year = escape(&item.year),
        kind = item.kind.label(),
    )
}

/// Renders the result grid.
pub fn result_grid(items: &[TitleSummary]) -> String {
    let cards: String = items.iter().map(result_card).collect();
    format!(
        r#"<div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-5 gap-6">{cards}</div>"#
    )
}

/// Renders the detail modal for the loader's current phase.
///
/// Empty when the modal is closed. While `Opening` a spinner shows in
/// place of the record; after a failed fetch the modal stays open with
/// no record (the message lives in the shared banner).
pub fn detail_modal(loader: &DetailLoader) -> String {
    if !loader.is_open() {
        return String::new();
    }

    let body = match loader.phase() {
        DetailPhase::Opening => {
            r#"<div class="p-12 text-center text-gray-300">Loading details…</div>"#.to_string()
        }
        DetailPhase::Ready => match loader.record() {
            Some(record) => detail_body(record),
            None => String::new(),
        },
        DetailPhase::OpenFailed => {
            r#"<div class="p-12 text-center text-gray-400">Details could not be loaded.</div>"#
                .to_string()
        }
        DetailPhase::Closed => String::new(),
    };

    format!(
        r#"<div id="detail-modal" class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/60">
            <div class="relative bg-gray-800 rounded-lg shadow-2xl max-w-3xl w-full max-h-[90vh] overflow-y-auto">
                <form method="post" action="/close" class="absolute top-3 right-3">
                    <button type="submit" class="bg-gray-700 hover:bg-gray-600 text-white rounded-full w-8 h-8" aria-label="Close">✕</button>
                </form>
                {body}
            </div>
        </div>"#
    )
}

/// Fields shown unconditionally render a missing value as "N/A";
/// long-form sections are skipped entirely when absent.
fn detail_body(record: &TitleDetail) -> String {
    let poster = match &record.poster_url {
        Some(url) => format!(
            r#"<img src="{}" alt="{}" class="w-full rounded-lg object-cover">"#,
            escape(url),
            escape(&record.title)
        ),
        None => poster_placeholder("h-80"),
    };

    let rating = match &record.rating {
        Some(rating) => {
            let votes = record
                .votes
                .as_ref()
                .map(|votes| format!(r#" <span class="text-gray-500 text-sm">({} votes)</span>"#, escape(votes)))
                .unwrap_or_default();
            format!(
                r#"<p class="text-yellow-400 font-semibold mb-4">★ {}/10{votes}</p>"#,
                escape(rating)
            )
        }
        None => String::new(),
    };

    let fact = |label: &str, value: Option<&str>| {
        format!(
            r#"<div><span class="text-gray-500 text-sm">{label}</span>
                <p class="text-white font-medium">{}</p></div>"#,
            escape(value.unwrap_or("N/A"))
        )
    };

    let section = |label: &str, value: &Option<String>| match value {
        Some(text) => format!(
            r#"<div class="mt-4"><span class="text-gray-500 text-sm">{label}</span>
                <p class="text-gray-100">{}</p></div>"#,
            escape(text)
        ),
        None => String::new(),
    };

    format!(
        r#"<div class="flex flex-col md:flex-row">
            <div class="md:w-1/3 p-6">{poster}</div>
            <div class="md:w-2/3 p-6">
                <h2 class="text-2xl font-bold text-white mb-2">{title}</h2>
                {rating}
                <div class="grid grid-cols-2 gap-4">
                    {year}
                    {released}
                    {runtime}
                    {kind}
                </div>
                {genre}
                {plot}
                {actors}
                {director}
            </div>
        </div>"#,
        title = escape(&record.title),
        year = fact("Year", Some(&record.year)),
        released = fact("Released", record.released.as_deref()),
        runtime = fact("Runtime", record.runtime.as_deref()),
        kind = fact("Type", Some(record.kind.label())),
        genre = section("Genre", &record.genre),
        plot = section("Plot", &record.plot),
        actors = section("Cast", &record.actors),
        director = section("Director", &record.director),
    )
}

#[cfg(test)]
mod tests {
    use marquee_search::types::MediaKind;

    use super::*;

    fn summary(poster_url: Option<&str>) -> TitleSummary {
        TitleSummary {
            imdb_id: "tt0133093".to_string(),
            title: "The Matrix".to_string(),
            year: "1999".to_string(),
            kind: MediaKind::Movie,
            poster_url: poster_url.map(String::from),
        }
    }

    fn detail_fixture() -> TitleDetail {
        TitleDetail {
            imdb_id: "tt0133093".to_string(),
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

    #[test]
    fn card_without_poster_renders_placeholder() {
        let card = result_card(&summary(None));
        assert!(!card.contains("<img"));
        assert!(card.contains("No image"));
    }

    #[test]
    fn card_with_poster_renders_image() {
        let card = result_card(&summary(Some("https://example.com/matrix.jpg")));
        assert!(card.contains(r#"src="https://example.com/matrix.jpg""#));
    }

    #[test]
    fn closed_loader_renders_no_modal() {
        let loader = DetailLoader::new();
        assert_eq!(detail_modal(&loader), "");
    }

    #[test]
    fn opening_loader_renders_spinner_not_stale_record() {
        let mut loader = DetailLoader::new();
        loader.select("tt0133093");
        let modal = detail_modal(&loader);
        assert!(modal.contains("detail-modal"));
        assert!(modal.contains("Loading details"));
        assert!(!modal.contains("The Matrix"));
    }

    #[test]
    fn missing_long_form_fields_are_skipped_but_facts_show_na() {
        let mut loader = DetailLoader::new();
        let request = loader.select("tt0133093");
        let mut record = detail_fixture();
        record.director = None;
        record.runtime = None;
        loader.apply(request.seq, Ok(record));

        let modal = detail_modal(&loader);
        assert!(!modal.contains("Director"), "absent section is skipped");
        assert!(modal.contains("N/A"), "unconditional fact shows N/A");
    }
}
