//! The community recipe feed
//!
//! The feed is an ordered, locally mutable list seeded from the fixed
//! initial set. Like-toggling mutates a record in place; entries are never
//! created or deleted.

use crate::data;
use crate::types::Recipe;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feed {
    recipes: Vec<Recipe>,
}

impl Feed {
    /// Create a feed seeded with the fixed initial recipe set.
    pub fn seeded() -> Self {
        Self {
            recipes: data::seed_recipes(),
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Recipe> {
        self.recipes.get(index)
    }

    /// Toggle the like state of the recipe with the given id.
    ///
    /// Flips `is_liked` and adjusts `likes` by exactly one, preserving
    /// ordering. An unknown id is a silent no-op; returns whether a recipe
    /// was found.
    pub fn toggle_like(&mut self, recipe_id: &str) -> bool {
        match self.recipes.iter_mut().find(|r| r.id == recipe_id) {
            Some(recipe) => {
                if recipe.is_liked {
                    recipe.likes = recipe.likes.saturating_sub(1);
                } else {
                    recipe.likes += 1;
                }
                recipe.is_liked = !recipe.is_liked;
                tracing::debug!(recipe_id, likes = recipe.likes, liked = recipe.is_liked, "like toggled");
                true
            }
            None => {
                tracing::debug!(recipe_id, "like toggle ignored, unknown recipe");
                false
            }
        }
    }
}

impl Default for Feed {
    fn default() -> Self {
        Self::seeded()
    }
}
