//! Onboarding flow state machine
//!
//! Welcome splash, three feature-highlight slides, then a name/country
//! form. "Skip" exists only on the slides and completes immediately with
//! defaults substituted for empty fields. There is no backward path.

pub const SLIDE_COUNT: u8 = 3;

pub const DEFAULT_NAME: &str = "Guest";
pub const DEFAULT_COUNTRY: &str = "International";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingStep {
    /// Welcome splash with the "Get Started" control.
    Welcome,
    /// Feature-highlight slide, 1-based index in `1..=SLIDE_COUNT`.
    Slide(u8),
    /// Name and country form.
    Details,
}

/// The values onboarding hands to the root on completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingOutcome {
    pub name: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingFlow {
    pub step: OnboardingStep,
    pub name: String,
    pub country: String,
}

impl OnboardingFlow {
    pub fn new() -> Self {
        Self {
            step: OnboardingStep::Welcome,
            name: String::new(),
            country: String::new(),
        }
    }

    /// Whether the "Start Cooking" control on the details form is enabled.
    pub fn can_submit(&self) -> bool {
        !self.name.is_empty() && !self.country.is_empty()
    }

    /// Whether the current step offers a "Skip" control.
    pub fn can_skip(&self) -> bool {
        matches!(self.step, OnboardingStep::Slide(_))
    }

    /// Advance to the next step.
    ///
    /// From the details form this completes the flow, but only when both
    /// fields are filled in; otherwise the flow stays put and `None` is
    /// returned.
    pub fn advance(&mut self) -> Option<OnboardingOutcome> {
        match self.step {
            OnboardingStep::Welcome => {
                self.step = OnboardingStep::Slide(1);
                None
            }
            OnboardingStep::Slide(i) if i < SLIDE_COUNT => {
                self.step = OnboardingStep::Slide(i + 1);
                None
            }
            OnboardingStep::Slide(_) => {
                self.step = OnboardingStep::Details;
                None
            }
            OnboardingStep::Details => {
                if self.can_submit() {
                    Some(OnboardingOutcome {
                        name: self.name.clone(),
                        country: self.country.clone(),
                    })
                } else {
                    None
                }
            }
        }
    }

    /// Complete immediately from a slide, keeping whatever has been typed
    /// so far and substituting the guest defaults for empty fields.
    pub fn skip(&self) -> Option<OnboardingOutcome> {
        if !self.can_skip() {
            return None;
        }

        let name = if self.name.is_empty() {
            DEFAULT_NAME.to_string()
        } else {
            self.name.clone()
        };
        let country = if self.country.is_empty() {
            DEFAULT_COUNTRY.to_string()
        } else {
            self.country.clone()
        };

        Some(OnboardingOutcome { name, country })
    }
}

impl Default for OnboardingFlow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flow_starts_at_welcome() {
        let flow = OnboardingFlow::new();
        assert_eq!(flow.step, OnboardingStep::Welcome);
        assert!(flow.name.is_empty());
        assert!(flow.country.is_empty());
    }

    #[test]
    fn test_advance_walks_welcome_slides_details() {
        let mut flow = OnboardingFlow::new();

        assert!(flow.advance().is_none());
        assert_eq!(flow.step, OnboardingStep::Slide(1));
        assert!(flow.advance().is_none());
        assert_eq!(flow.step, OnboardingStep::Slide(2));
        assert!(flow.advance().is_none());
        assert_eq!(flow.step, OnboardingStep::Slide(3));
        assert!(flow.advance().is_none());
        assert_eq!(flow.step, OnboardingStep::Details);
    }

    #[test]
    fn test_submit_disabled_until_both_fields_filled() {
        let mut flow = OnboardingFlow::new();
        flow.step = OnboardingStep::Details;

        assert!(!flow.can_submit());
        assert!(flow.advance().is_none());
        assert_eq!(flow.step, OnboardingStep::Details);

        flow.name = "Mei".to_string();
        assert!(!flow.can_submit());
        assert!(flow.advance().is_none());

        flow.country = "China".to_string();
        assert!(flow.can_submit());

        let outcome = flow.advance().expect("completion");
        assert_eq!(outcome.name, "Mei");
        assert_eq!(outcome.country, "China");
    }

    #[test]
    fn test_skip_only_available_on_slides() {
        let mut flow = OnboardingFlow::new();
        assert!(!flow.can_skip());
        assert!(flow.skip().is_none());

        flow.advance();
        assert!(flow.can_skip());

        flow.step = OnboardingStep::Details;
        assert!(!flow.can_skip());
        assert!(flow.skip().is_none());
    }

    #[test]
    fn test_skip_with_empty_fields_uses_defaults() {
        let mut flow = OnboardingFlow::new();
        flow.advance();

        let outcome = flow.skip().expect("skip from slide");
        assert_eq!(outcome.name, "Guest");
        assert_eq!(outcome.country, "International");
    }

    #[test]
    fn test_skip_keeps_partially_entered_fields() {
        let mut flow = OnboardingFlow::new();
        flow.advance();
        flow.name = "Mei".to_string();

        let outcome = flow.skip().expect("skip from slide");
        assert_eq!(outcome.name, "Mei");
        assert_eq!(outcome.country, "International");
    }
}
