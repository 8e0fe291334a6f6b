//! Upload wizard state machine
//!
//! Three form steps (photo/title/cuisine, ingredients, cooking steps) with
//! guarded forward transitions, then a terminal celebration state. The
//! draft exists only for the wizard's lifetime; on completion only the
//! point award survives.

use crate::photo::Photo;
use crate::rewards::UPLOAD_AWARD_POINTS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    /// Photo, title, and cuisine.
    Basics,
    /// Ingredient list.
    Ingredients,
    /// Cooking step list.
    Steps,
    /// Terminal celebration display after submission.
    Celebration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadWizard {
    pub step: WizardStep,
    pub photo: Option<Photo>,
    /// Path the user typed for the photo to load.
    pub photo_path: String,
    pub title: String,
    pub cuisine: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

impl UploadWizard {
    /// A fresh draft: both lists start with one blank entry.
    pub fn new() -> Self {
        Self {
            step: WizardStep::Basics,
            photo: None,
            photo_path: String::new(),
            title: String::new(),
            cuisine: String::new(),
            ingredients: vec![String::new()],
            steps: vec![String::new()],
        }
    }

    /// Whether the current step's forward control is enabled.
    pub fn can_advance(&self) -> bool {
        match self.step {
            WizardStep::Basics => {
                self.photo.is_some() && !self.title.is_empty() && !self.cuisine.is_empty()
            }
            WizardStep::Ingredients => self.ingredients.iter().any(|i| !i.trim().is_empty()),
            WizardStep::Steps => self.steps.iter().any(|s| !s.trim().is_empty()),
            WizardStep::Celebration => false,
        }
    }

    /// Move forward one step if the guard passes. Submission from the final
    /// form step goes through [`submit`](Self::submit) instead.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        match self.step {
            WizardStep::Basics => {
                self.step = WizardStep::Ingredients;
                true
            }
            WizardStep::Ingredients => {
                self.step = WizardStep::Steps;
                true
            }
            WizardStep::Steps | WizardStep::Celebration => false,
        }
    }

    /// Move back one step. Field values are retained.
    pub fn back(&mut self) {
        match self.step {
            WizardStep::Ingredients => self.step = WizardStep::Basics,
            WizardStep::Steps => self.step = WizardStep::Ingredients,
            WizardStep::Basics | WizardStep::Celebration => {}
        }
    }

    /// Submit the draft: enter the celebration state and return the fixed
    /// point award. Refused unless on the final form step with its guard
    /// satisfied.
    pub fn submit(&mut self) -> Option<u32> {
        if self.step == WizardStep::Steps && self.can_advance() {
            self.step = WizardStep::Celebration;
            tracing::info!(points = UPLOAD_AWARD_POINTS, "recipe submitted");
            Some(UPLOAD_AWARD_POINTS)
        } else {
            None
        }
    }

    pub fn add_ingredient(&mut self) {
        self.ingredients.push(String::new());
    }

    pub fn update_ingredient(&mut self, index: usize, value: String) {
        if let Some(entry) = self.ingredients.get_mut(index) {
            *entry = value;
        }
    }

    /// Remove is only offered while more than one entry exists, so the
    /// list can never become empty.
    pub fn can_remove_ingredient(&self) -> bool {
        self.ingredients.len() > 1
    }

    pub fn remove_ingredient(&mut self, index: usize) -> bool {
        if self.can_remove_ingredient() && index < self.ingredients.len() {
            self.ingredients.remove(index);
            true
        } else {
            false
        }
    }

    pub fn add_step(&mut self) {
        self.steps.push(String::new());
    }

    pub fn update_step(&mut self, index: usize, value: String) {
        if let Some(entry) = self.steps.get_mut(index) {
            *entry = value;
        }
    }

    pub fn can_remove_step(&self) -> bool {
        self.steps.len() > 1
    }

    pub fn remove_step(&mut self, index: usize) -> bool {
        if self.can_remove_step() && index < self.steps.len() {
            self.steps.remove(index);
            true
        } else {
            false
        }
    }
}

impl Default for UploadWizard {
    fn default() -> Self {
        Self::new()
    }
}
