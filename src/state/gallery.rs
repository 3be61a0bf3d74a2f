//! State for the Batmobile gallery: universe filter, search, sort, and the
//! detail-overlay selection.
//!
//! The derived (displayed) list is a pure function of the fetched items and
//! the three controls; nothing here mutates the source list.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use std::cmp::Reverse;

use crate::net::types::Batmobile;

/// Universe filter chips shown above the gallery.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UniverseFilter {
    #[default]
    All,
    Film,
    Animated,
    Game,
    Tv,
}

impl UniverseFilter {
    /// Chip row order.
    pub const CHIPS: [Self; 5] = [Self::All, Self::Film, Self::Animated, Self::Game, Self::Tv];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Film => "Film",
            Self::Animated => "Animated",
            Self::Game => "Game",
            Self::Tv => "TV",
        }
    }

    /// Case-insensitive exact match against a record's universe field.
    /// `All` keeps everything.
    pub fn matches(self, universe: &str) -> bool {
        match self {
            Self::All => true,
            _ => universe.eq_ignore_ascii_case(self.label()),
        }
    }
}

/// Sort order for the gallery grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    YearDesc,
    YearAsc,
    NameAsc,
}

impl SortKey {
    /// Value used by the `<select>` control.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::YearDesc => "year-desc",
            Self::YearAsc => "year-asc",
            Self::NameAsc => "name-asc",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "year-desc" => Some(Self::YearDesc),
            "year-asc" => Some(Self::YearAsc),
            "name-asc" => Some(Self::NameAsc),
            _ => None,
        }
    }
}

/// Batmobile gallery state.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryState {
    pub items: Vec<Batmobile>,
    pub filter: UniverseFilter,
    pub query: String,
    pub sort: SortKey,
    pub selected: Option<Batmobile>,
    pub loading: bool,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            filter: UniverseFilter::All,
            query: String::new(),
            sort: SortKey::YearDesc,
            selected: None,
            loading: true,
        }
    }
}

impl GalleryState {
    /// Apply a fetch outcome; a failed fetch leaves the list unchanged.
    pub fn finish_load(&mut self, fetched: Option<Vec<Batmobile>>) {
        if let Some(items) = fetched {
            self.items = items;
        }
        self.loading = false;
    }

    pub fn set_filter(&mut self, filter: UniverseFilter) {
        self.filter = filter;
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    /// Open the detail overlay for one record. At most one selection.
    pub fn select(&mut self, batmobile: Batmobile) {
        self.selected = Some(batmobile);
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Compute the displayed list: universe filter, then search, then a
    /// stable sort by the active key. Operates on a copy of the items.
    pub fn derived(&self) -> Vec<Batmobile> {
        let needle = self.query.trim().to_lowercase();
        let mut view: Vec<Batmobile> = self
            .items
            .iter()
            .filter(|b| self.filter.matches(&b.universe))
            .filter(|b| needle.is_empty() || matches_query(b, &needle))
            .cloned()
            .collect();
        match self.sort {
            SortKey::YearDesc => view.sort_by_key(|b| Reverse(b.year.unwrap_or(0))),
            SortKey::YearAsc => view.sort_by_key(|b| b.year.unwrap_or(0)),
            SortKey::NameAsc => view.sort_by_key(|b| b.name.to_lowercase()),
        }
        view
    }
}

/// True if `needle` (already trimmed and lowercased) is a substring of the
/// record's name, title, or era.
fn matches_query(b: &Batmobile, needle: &str) -> bool {
    [Some(b.name.as_str()), b.title.as_deref(), b.era.as_deref()]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(needle))
}
