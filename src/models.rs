use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub theme: String, // "dark" | "light"
    #[serde(default)]
    pub font_scale: f32,
    #[serde(default)]
    pub active_profile_index: usize, // startup default only, never written on switch
}

/// A single browsable media item. Immutable for the session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub background_image: String,
    pub year: i32,
    pub rating: String, // match label, e.g. "98%"
    pub duration: String,
    pub genre: Vec<String>,
    pub cast: Vec<String>,
    pub director: String,
    pub language: String,
    pub maturity_rating: String,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_leaving: bool,
    #[serde(default)]
    pub has_new_episode: bool,
    #[serde(default)]
    pub trailer_url: Option<String>,
}

/// A named, ordered grouping of content shown as one carousel row.
/// Content may appear in several categories; rows hold their own copies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub content: Vec<Content>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub avatar: String, // short glyph, rendered in the profile chip
    pub is_kids: bool,
}

// Portfolio page records.

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Service {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub image: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Stat {
    pub number: String,
    pub label: String,
}
