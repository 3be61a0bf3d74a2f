use super::*;

// =============================================================
// Gadget
// =============================================================

#[test]
fn gadget_parses_full_record() {
    let g: Gadget = serde_json::from_str(
        r#"{"name":"Batarang","category":"Thrown","description":"Folding bat-shaped blade.","image_url":"https://img/batarang.png"}"#,
    )
    .unwrap();
    assert_eq!(g.name, "Batarang");
    assert_eq!(g.category, "Thrown");
    assert_eq!(g.image_url.as_deref(), Some("https://img/batarang.png"));
}

#[test]
fn gadget_parses_sparse_record() {
    let g: Gadget = serde_json::from_str(r#"{"name":"Grapple Gun"}"#).unwrap();
    assert_eq!(g.name, "Grapple Gun");
    assert!(g.category.is_empty());
    assert!(g.description.is_empty());
    assert!(g.image_url.is_none());
}

#[test]
fn gadget_without_name_is_rejected() {
    let res = serde_json::from_str::<Gadget>(r#"{"category":"Thrown"}"#);
    assert!(res.is_err());
}

// =============================================================
// Batmobile
// =============================================================

#[test]
fn batmobile_parses_sparse_record() {
    let b: Batmobile = serde_json::from_str(r#"{"name":"Tumbler"}"#).unwrap();
    assert_eq!(b.name, "Tumbler");
    assert!(b.universe.is_empty());
    assert!(b.media.is_empty());
    assert!(b.year.is_none());
    assert!(b.era.is_none());
    assert!(b.specs.is_empty());
}

#[test]
fn batmobile_parses_full_record() {
    let b: Batmobile = serde_json::from_str(
        r#"{
            "name": "Tumbler",
            "title": "The Tumbler",
            "universe": "Film",
            "media": "The Dark Knight Trilogy",
            "year": 2005,
            "era": "Nolanverse",
            "description": "Military prototype bridging vehicle.",
            "image_url": "https://img/tumbler.png",
            "specs": ["Jet turbine boost", "Ejectable Batpod"]
        }"#,
    )
    .unwrap();
    assert_eq!(b.title.as_deref(), Some("The Tumbler"));
    assert_eq!(b.year, Some(2005));
    assert_eq!(b.specs.len(), 2);
    assert_eq!(b.specs[0], "Jet turbine boost");
}

// =============================================================
// SeedOutcome
// =============================================================

#[test]
fn seed_outcome_parses_inserted_count() {
    let s: SeedOutcome = serde_json::from_str(r#"{"inserted":5}"#).unwrap();
    assert_eq!(s.inserted, 5);
}
