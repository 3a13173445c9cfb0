//! Data types for catalog search.

use serde::{Deserialize, Serialize};

/// Results per page, fixed by the catalog service.
pub const PAGE_SIZE: u32 = 10;

/// The two kinds the catalog accepts as a search filter.
///
/// Result items can carry other kinds (see [`MediaKind`]), but the
/// search endpoint only filters on these.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum KindFilter {
    /// Feature films
    Movie,
    /// TV series
    Series,
}

impl KindFilter {
    /// Value sent as the `type` query parameter.
    pub fn as_param(self) -> &'static str {
        match self {
            KindFilter::Movie => "movie",
            KindFilter::Series => "series",
        }
    }
}

impl std::str::FromStr for KindFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "movie" => Ok(KindFilter::Movie),
            "series" => Ok(KindFilter::Series),
            _ => Err(format!("unknown kind filter: {s}")),
        }
    }
}

impl std::fmt::Display for KindFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_param())
    }
}

/// Media kind classification as reported by the catalog.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MediaKind {
    /// Feature film
    Movie,
    /// TV series
    Series,
    /// Single episode of a series
    Episode,
    /// Anything else the catalog reports (games, etc.)
    Other,
}

impl MediaKind {
    /// Maps the catalog's `Type` string onto a kind.
    pub fn from_wire(value: &str) -> Self {
        match value {
            "movie" => MediaKind::Movie,
            "series" => MediaKind::Series,
            "episode" => MediaKind::Episode,
            _ => MediaKind::Other,
        }
    }

    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            MediaKind::Movie => "Movie",
            MediaKind::Series => "Series",
            MediaKind::Episode => "Episode",
            MediaKind::Other => "Other",
        }
    }
}

/// A text search with optional filters.
///
/// A query whose trimmed text is empty is never submitted; the page is
/// not part of the query, it travels with each request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchQuery {
    /// Free-text search terms.
    pub text: String,
    /// Optional kind filter; omitted from the request when unset.
    pub kind: Option<KindFilter>,
    /// Optional 4-digit release year; omitted from the request when unset.
    pub year: Option<String>,
}

impl SearchQuery {
    /// Creates a query from search text, no filters.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Whether the query may be submitted at all.
    pub fn is_submittable(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// Returns a copy with trimmed text and blank filters dropped.
    pub fn normalized(&self) -> Self {
        Self {
            text: self.text.trim().to_string(),
            kind: self.kind,
            year: self
                .year
                .as_ref()
                .map(|y| y.trim().to_string())
                .filter(|y| !y.is_empty()),
        }
    }
}

/// One row of a search result page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TitleSummary {
    /// Catalog-unique identifier, used for detail lookup.
    pub imdb_id: String,
    /// Title of the media item.
    pub title: String,
    /// Release year as reported, possibly a range for series.
    pub year: String,
    /// Kind classification.
    pub kind: MediaKind,
    /// Poster image URL; `None` when the catalog has none.
    pub poster_url: Option<String>,
}

/// One page of search results in catalog-supplied order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchPage {
    /// Items on this page, never re-sorted.
    pub items: Vec<TitleSummary>,
    /// Total matches across all pages.
    pub total_count: u32,
    /// The page these items belong to, 1-based.
    pub page: u32,
}

impl SearchPage {
    /// Number of pages the full result set spans.
    pub fn total_pages(&self) -> u32 {
        self.total_count.div_ceil(PAGE_SIZE)
    }
}

/// Full record for a single title.
///
/// Long-form fields the catalog marks "N/A" are `None`; views that
/// always show a field render `None` back as "N/A".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TitleDetail {
    /// Catalog-unique identifier.
    pub imdb_id: String,
    /// Title of the media item.
    pub title: String,
    /// Release year as reported.
    pub year: String,
    /// Kind classification.
    pub kind: MediaKind,
    /// Poster image URL; `None` when the catalog has none.
    pub poster_url: Option<String>,
    /// Full-length plot synopsis.
    pub plot: Option<String>,
    /// Comma-separated genre list.
    pub genre: Option<String>,
    /// Director name(s).
    pub director: Option<String>,
    /// Main cast, comma-separated.
    pub actors: Option<String>,
    /// Runtime as reported, e.g. "136 min".
    pub runtime: Option<String>,
    /// Release date as reported.
    pub released: Option<String>,
    /// Rating on the catalog's 0-10 scale, as reported.
    pub rating: Option<String>,
    /// Vote count behind the rating.
    pub votes: Option<String>,
}
