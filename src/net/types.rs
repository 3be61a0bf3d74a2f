//! Records returned by the backend API.
//!
//! The backend guarantees very little: most fields are optional and sparse
//! rows are common, so everything beyond a name deserializes with defaults.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// A gadget from `GET /api/gadgets`.
///
/// The API assigns no unique identifier; display keys are derived from
/// content plus list position.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Gadget {
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// A Batmobile variant from `GET /api/batmobiles`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Batmobile {
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    /// Continuity category: Film, Animated, Game, TV, or anything else.
    #[serde(default)]
    pub universe: String,
    #[serde(default)]
    pub media: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub era: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Ordered spec lines for the detail overlay.
    #[serde(default)]
    pub specs: Vec<String>,
}

/// Response body of `POST /api/seed/gadgets`.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct SeedOutcome {
    pub inserted: u64,
}
