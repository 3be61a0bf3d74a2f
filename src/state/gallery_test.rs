use super::*;

fn bm(name: &str, universe: &str, year: Option<i32>) -> Batmobile {
    Batmobile {
        name: name.to_owned(),
        title: None,
        universe: universe.to_owned(),
        media: String::new(),
        year,
        era: None,
        description: None,
        image_url: None,
        specs: Vec::new(),
    }
}

fn sample() -> Vec<Batmobile> {
    vec![
        bm("Tumbler", "Film", Some(2005)),
        bm("1966 Batmobile", "TV", Some(1966)),
        bm("Batman: TAS Batmobile", "Animated", Some(1992)),
        bm("Arkham Knight Batmobile", "Game", Some(2015)),
    ]
}

fn state(items: Vec<Batmobile>) -> GalleryState {
    GalleryState {
        items,
        ..GalleryState::default()
    }
}

fn names(view: &[Batmobile]) -> Vec<&str> {
    view.iter().map(|b| b.name.as_str()).collect()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_shows_all_newest_first() {
    let s = GalleryState::default();
    assert_eq!(s.filter, UniverseFilter::All);
    assert_eq!(s.sort, SortKey::YearDesc);
    assert!(s.query.is_empty());
    assert!(s.selected.is_none());
    assert!(s.loading);
}

// =============================================================
// Universe filter
// =============================================================

#[test]
fn filter_all_keeps_every_item() {
    let s = state(sample());
    assert_eq!(s.derived().len(), 4);
}

#[test]
fn filter_film_keeps_only_film_items() {
    let mut s = state(sample());
    s.set_filter(UniverseFilter::Film);
    assert_eq!(names(&s.derived()), ["Tumbler"]);
}

#[test]
fn filter_is_exact_and_complete() {
    let mut items = sample();
    items.push(bm("Beware the Batman ride", "animated", Some(2013)));
    let mut s = state(items);
    s.set_filter(UniverseFilter::Animated);
    let view = s.derived();
    // Every kept item matches, and every matching item is kept.
    assert!(view.iter().all(|b| b.universe.eq_ignore_ascii_case("Animated")));
    assert_eq!(view.len(), 2);
}

#[test]
fn filter_matches_case_insensitively() {
    let mut s = state(vec![bm("Batwing", "FILM", None)]);
    s.set_filter(UniverseFilter::Film);
    assert_eq!(s.derived().len(), 1);
}

#[test]
fn filter_excludes_unknown_universes() {
    let mut s = state(vec![bm("Lego Batmobile", "Toy", Some(2017))]);
    s.set_filter(UniverseFilter::Game);
    assert!(s.derived().is_empty());
}

// =============================================================
// Search
// =============================================================

#[test]
fn search_matches_name_substring() {
    let mut s = state(sample());
    s.set_query("batmobile".to_owned());
    let view = s.derived();
    assert_eq!(view.len(), 3);
    assert!(view.iter().all(|b| b.name.to_lowercase().contains("batmobile")));
}

#[test]
fn search_matches_title_and_era() {
    let mut tumbler = bm("Tumbler", "Film", Some(2005));
    tumbler.era = Some("Nolanverse".to_owned());
    let mut adam_west = bm("1966 Batmobile", "TV", Some(1966));
    adam_west.title = Some("Lincoln Futura".to_owned());
    let mut s = state(vec![tumbler, adam_west]);

    s.set_query("nolan".to_owned());
    assert_eq!(names(&s.derived()), ["Tumbler"]);

    s.set_query("futura".to_owned());
    assert_eq!(names(&s.derived()), ["1966 Batmobile"]);
}

#[test]
fn search_trims_whitespace_and_ignores_case() {
    let mut s = state(sample());
    s.set_query("  TUMBLER  ".to_owned());
    assert_eq!(names(&s.derived()), ["Tumbler"]);
}

#[test]
fn blank_query_keeps_every_item() {
    let mut s = state(sample());
    s.set_query("   ".to_owned());
    assert_eq!(s.derived().len(), 4);
}

#[test]
fn search_result_is_a_subset_of_items() {
    let mut s = state(sample());
    s.set_query("arkham".to_owned());
    let view = s.derived();
    assert!(view.iter().all(|b| s.items.contains(b)));
}

// =============================================================
// Sort
// =============================================================

#[test]
fn year_desc_orders_newest_first() {
    let s = state(sample());
    assert_eq!(
        names(&s.derived()),
        ["Arkham Knight Batmobile", "Tumbler", "Batman: TAS Batmobile", "1966 Batmobile"]
    );
}

#[test]
fn year_asc_orders_oldest_first() {
    let mut s = state(vec![bm("A", "Film", Some(2000)), bm("B", "Film", Some(1990))]);
    s.set_sort(SortKey::YearAsc);
    assert_eq!(names(&s.derived()), ["B", "A"]);
}

#[test]
fn year_desc_reversed_equals_year_asc_without_ties() {
    let mut s = state(sample());
    s.set_sort(SortKey::YearAsc);
    let asc = s.derived();
    s.set_sort(SortKey::YearDesc);
    let mut desc = s.derived();
    desc.reverse();
    assert_eq!(asc, desc);
}

#[test]
fn missing_year_sorts_as_zero() {
    let mut s = state(vec![bm("Unknown", "Film", None), bm("Tumbler", "Film", Some(2005))]);
    s.set_sort(SortKey::YearAsc);
    assert_eq!(names(&s.derived()), ["Unknown", "Tumbler"]);
}

#[test]
fn name_sort_is_alphabetical_and_case_insensitive() {
    let mut s = state(vec![
        bm("batwing", "Film", None),
        bm("Arkham Knight Batmobile", "Game", None),
        bm("Tumbler", "Film", None),
    ]);
    s.set_sort(SortKey::NameAsc);
    assert_eq!(names(&s.derived()), ["Arkham Knight Batmobile", "batwing", "Tumbler"]);
}

#[test]
fn sort_is_stable_for_equal_years() {
    let mut s = state(vec![
        bm("First", "Film", Some(1989)),
        bm("Second", "Film", Some(1989)),
        bm("Third", "Film", Some(1989)),
    ]);
    s.set_sort(SortKey::YearDesc);
    assert_eq!(names(&s.derived()), ["First", "Second", "Third"]);
    s.set_sort(SortKey::YearAsc);
    assert_eq!(names(&s.derived()), ["First", "Second", "Third"]);
}

#[test]
fn derivation_never_mutates_the_source_list() {
    let mut s = state(sample());
    let before = s.items.clone();
    s.set_filter(UniverseFilter::Tv);
    s.set_query("bat".to_owned());
    s.set_sort(SortKey::NameAsc);
    let _ = s.derived();
    assert_eq!(s.items, before);
}

#[test]
fn derivation_is_idempotent() {
    let mut s = state(sample());
    s.set_filter(UniverseFilter::Film);
    s.set_query("tum".to_owned());
    s.set_sort(SortKey::NameAsc);
    assert_eq!(s.derived(), s.derived());
}

// =============================================================
// Selection
// =============================================================

#[test]
fn select_replaces_any_previous_selection() {
    let mut s = state(sample());
    s.select(s.items[0].clone());
    s.select(s.items[1].clone());
    assert_eq!(s.selected.as_ref().map(|b| b.name.as_str()), Some("1966 Batmobile"));
}

#[test]
fn deselect_closes_the_overlay() {
    let mut s = state(sample());
    s.select(s.items[0].clone());
    s.deselect();
    assert!(s.selected.is_none());
}

// =============================================================
// Load
// =============================================================

#[test]
fn failed_load_leaves_items_unchanged() {
    let mut s = state(sample());
    s.finish_load(None);
    assert_eq!(s.items.len(), 4);
    assert!(!s.loading);
}

// =============================================================
// SortKey / UniverseFilter controls
// =============================================================

#[test]
fn sort_key_round_trips_through_control_values() {
    for key in [SortKey::YearDesc, SortKey::YearAsc, SortKey::NameAsc] {
        assert_eq!(SortKey::parse(key.as_str()), Some(key));
    }
    assert_eq!(SortKey::parse("bogus"), None);
}

#[test]
fn chip_row_starts_with_all() {
    assert_eq!(UniverseFilter::CHIPS[0], UniverseFilter::All);
    assert_eq!(UniverseFilter::CHIPS.len(), 5);
}

#[test]
fn tv_chip_label_is_uppercase() {
    assert_eq!(UniverseFilter::Tv.label(), "TV");
    assert!(UniverseFilter::Tv.matches("tv"));
}
