//! Core types for Hearthshare

use serde::{Deserialize, Serialize};

/// The authoritative user record held by the application root.
///
/// Created once with seed defaults at startup. Mutated only by onboarding
/// completion (name, country) and upload completion (points, recipe count).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub country: String,
    pub avatar: String,
    pub points: u32,
    pub recipes_uploaded: u32,
    pub badges: Vec<String>,
}

/// One entry in the community recipe feed.
///
/// Invariant: `likes` and `is_liked` stay consistent. Toggling `is_liked`
/// from false to true increments `likes` by exactly 1, and the reverse
/// decrements by exactly 1.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub author: String,
    pub author_avatar: String,
    pub image: String,
    pub cuisine: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub likes: u32,
    pub comments: u32,
    pub timestamp: String,
    #[serde(default)]
    pub is_liked: bool,
}

/// A recommended product in the ingredient store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub store: String,
    pub price: String,
    pub discount: Option<String>,
    pub image: String,
    pub category: String,
    pub link: String,
}

/// A nearby grocery store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreLocation {
    pub name: String,
    pub distance: String,
    pub address: String,
}

/// A profile achievement.
///
/// `earned` and `progress` are placeholder catalog values, not derived
/// from the live user record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Achievement {
    pub title: String,
    pub description: String,
    pub earned: bool,
    pub progress: Option<u8>,
}

/// A thumbnail entry in the profile's "My Recipes" grid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRecipe {
    pub id: String,
    pub title: String,
    pub image: String,
    pub likes: u32,
    pub points: u32,
}

/// One feature-highlight slide shown during onboarding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSlide {
    pub title: &'static str,
    pub description: &'static str,
}
