//! Wizard Step Model
//!
//! Closed enumeration of onboarding states with a transition table, so
//! invalid positions are unrepresentable. The active step is persisted to
//! local storage as an integer index and rehydrated on load; an index
//! outside the defined range rehydrates as the terminal state.

use crate::state::session::Provider;
use crate::storage::{local_get, local_set};

/// Local storage key for the active wizard step
pub const STEP_KEY: &str = "trimly_wizard_step";

/// Onboarding wizard position
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WizardStep {
    /// Pre-wizard welcome screen
    Entry,
    ConnectMail,
    ConnectMessaging,
    Pricing,
    Schedule,
    Policy,
    Preferences,
    /// Terminal "setup complete" state
    Complete,
}

/// All steps in wizard order
pub const STEPS: [WizardStep; 8] = [
    WizardStep::Entry,
    WizardStep::ConnectMail,
    WizardStep::ConnectMessaging,
    WizardStep::Pricing,
    WizardStep::Schedule,
    WizardStep::Policy,
    WizardStep::Preferences,
    WizardStep::Complete,
];

/// Number of real setup steps between the entry screen and completion
pub const SETUP_STEP_COUNT: u32 = 6;

impl WizardStep {
    /// Move one step forward; a no-op at the terminal step
    pub fn advance(self) -> Self {
        match self {
            WizardStep::Entry => WizardStep::ConnectMail,
            WizardStep::ConnectMail => WizardStep::ConnectMessaging,
            WizardStep::ConnectMessaging => WizardStep::Pricing,
            WizardStep::Pricing => WizardStep::Schedule,
            WizardStep::Schedule => WizardStep::Policy,
            WizardStep::Policy => WizardStep::Preferences,
            WizardStep::Preferences => WizardStep::Complete,
            WizardStep::Complete => WizardStep::Complete,
        }
    }

    /// Move one step back; from the first real step this returns to the
    /// entry screen, never below
    pub fn retreat(self) -> Self {
        match self {
            WizardStep::Entry => WizardStep::Entry,
            WizardStep::ConnectMail => WizardStep::Entry,
            WizardStep::ConnectMessaging => WizardStep::ConnectMail,
            WizardStep::Pricing => WizardStep::ConnectMessaging,
            WizardStep::Schedule => WizardStep::Pricing,
            WizardStep::Policy => WizardStep::Schedule,
            WizardStep::Preferences => WizardStep::Policy,
            WizardStep::Complete => WizardStep::Preferences,
        }
    }

    /// Persisted integer index of this step
    pub fn index(self) -> u32 {
        STEPS.iter().position(|s| *s == self).unwrap() as u32
    }

    /// Step for a persisted index; anything outside the defined range maps
    /// to the terminal state so the wizard renders "complete" rather than
    /// throwing
    pub fn from_index(index: u32) -> Self {
        STEPS
            .get(index as usize)
            .copied()
            .unwrap_or(WizardStep::Complete)
    }

    /// Which of the real setup steps this is, 1-based; `None` for the entry
    /// and terminal screens
    pub fn setup_number(self) -> Option<u32> {
        match self {
            WizardStep::Entry | WizardStep::Complete => None,
            _ => Some(self.index()),
        }
    }

    /// Progress through the setup steps as a percentage; agrees with the
    /// step counter, so the last real step reads 100%
    pub fn progress_percent(self) -> u32 {
        match self.setup_number() {
            Some(n) => n * 100 / SETUP_STEP_COUNT,
            None if self == WizardStep::Entry => 0,
            None => 100,
        }
    }

    /// The step that waits for the given provider's connection
    pub fn awaiting_connection(provider: Provider) -> Self {
        match provider {
            Provider::Mail => WizardStep::ConnectMail,
            Provider::Messaging => WizardStep::ConnectMessaging,
        }
    }

    /// Card title shown above the step
    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Entry => "Welcome to Trimly",
            WizardStep::ConnectMail => "Connect Gmail",
            WizardStep::ConnectMessaging => "Connect WhatsApp Business",
            WizardStep::Pricing => "Services & Pricing",
            WizardStep::Schedule => "Weekly Schedule",
            WizardStep::Policy => "Booking Policies",
            WizardStep::Preferences => "Advanced Preferences",
            WizardStep::Complete => "All Set!",
        }
    }
}

/// Read the persisted step; missing or unparsable values start at the entry
/// screen
pub fn load_step() -> WizardStep {
    match local_get(STEP_KEY).and_then(|v| v.parse::<u32>().ok()) {
        Some(index) => WizardStep::from_index(index),
        None => WizardStep::Entry,
    }
}

/// Persist the active step
pub fn store_step(step: WizardStep) {
    local_set(STEP_KEY, &step.index().to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_walks_the_full_sequence() {
        let mut step = WizardStep::Entry;
        let mut seen = vec![step];
        while step != WizardStep::Complete {
            step = step.advance();
            seen.push(step);
        }
        assert_eq!(seen, STEPS.to_vec());
    }

    #[test]
    fn advance_is_a_noop_at_the_terminal_step() {
        assert_eq!(WizardStep::Complete.advance(), WizardStep::Complete);
    }

    #[test]
    fn retreat_from_first_step_returns_to_entry() {
        assert_eq!(WizardStep::ConnectMail.retreat(), WizardStep::Entry);
        assert_eq!(WizardStep::Entry.retreat(), WizardStep::Entry);
    }

    #[test]
    fn retreat_inverts_advance_for_real_steps() {
        for step in &STEPS[..STEPS.len() - 1] {
            assert_eq!(step.advance().retreat(), *step);
        }
    }

    #[test]
    fn index_roundtrips() {
        for step in STEPS {
            assert_eq!(WizardStep::from_index(step.index()), step);
        }
        assert_eq!(WizardStep::Pricing.index(), 3);
        assert_eq!(WizardStep::from_index(3), WizardStep::Pricing);
    }

    #[test]
    fn out_of_range_index_renders_complete() {
        assert_eq!(WizardStep::from_index(8), WizardStep::Complete);
        assert_eq!(WizardStep::from_index(u32::MAX), WizardStep::Complete);
    }

    #[test]
    fn progress_is_monotonic() {
        let mut last = 0;
        for step in STEPS {
            let p = step.progress_percent();
            assert!(p >= last, "{:?} regressed: {} < {}", step, p, last);
            last = p;
        }
        assert_eq!(WizardStep::Entry.progress_percent(), 0);
        assert_eq!(WizardStep::Complete.progress_percent(), 100);
    }

    #[test]
    fn counter_and_percentage_agree_on_the_last_real_step() {
        assert_eq!(WizardStep::Preferences.setup_number(), Some(SETUP_STEP_COUNT));
        assert_eq!(WizardStep::Preferences.progress_percent(), 100);
    }

    #[test]
    fn connection_steps_match_their_provider() {
        assert_eq!(
            WizardStep::awaiting_connection(Provider::Mail),
            WizardStep::ConnectMail
        );
        assert_eq!(
            WizardStep::awaiting_connection(Provider::Messaging),
            WizardStep::ConnectMessaging
        );
    }
}
