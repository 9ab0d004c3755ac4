//! Global Session Store
//!
//! One writable slot holding the fetched user/business profile, plus the
//! toast message signals. Any component can read the profile through context
//! without prop threading; `None` means "no initial values yet".

use leptos::*;

/// Global session state provided to all components
#[derive(Clone, Copy)]
pub struct SessionState {
    /// Profile of the authenticated user, replaced wholesale on every fetch
    pub profile: RwSignal<Option<Profile>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Profile returned by `GET /users/me`
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Profile {
    pub user: UserAccount,
    #[serde(default)]
    pub business_info: BusinessInfo,
}

/// Identity of the authenticated user
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UserAccount {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Business configuration nested in the profile
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct BusinessInfo {
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub work_schedule: Option<WeekSchedule>,
    #[serde(default)]
    pub policies: Option<BookingPolicies>,
    #[serde(default)]
    pub preferences: Option<Preferences>,
    #[serde(default)]
    pub integrations: Vec<IntegrationConnection>,
}

/// A priced service as the API stores it
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Service {
    pub name: String,
    pub duration: String,
    pub price: f64,
    pub currency: String,
}

/// Weekly schedule keyed by lowercase weekday name
pub type WeekSchedule = std::collections::BTreeMap<String, DaySchedule>;

/// One day of the weekly schedule. Hours are absent on days off; break
/// fields are absent when the day has no break.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct DaySchedule {
    pub day_off: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub break_start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub break_end: Option<String>,
}

/// Booking policies configured in the policy step
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct BookingPolicies {
    /// "none", "12h" or "24h"
    pub cancellation_policy: String,
    pub appointment_gap_minutes: u32,
}

/// Advanced preferences configured in the preferences step
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Preferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_bundle: Option<ServiceBundle>,
    /// "no", "same-day", "next-day" or "three-days"
    pub follow_up: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_fee: Option<ServiceFee>,
    /// "no", "all" or "returning"
    pub invoicing: String,
}

/// A discounted multi-session bundle
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ServiceBundle {
    pub name: String,
    pub sessions: u32,
    pub discount_percent: u32,
}

/// Tax or service fee added on top of prices
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ServiceFee {
    /// "percentage" or "fixed"
    pub kind: String,
    pub value: f64,
}

/// Evidence that a third-party integration is authorized
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct IntegrationConnection {
    pub provider: Provider,
    #[serde(default)]
    pub connected_at: Option<String>,
}

/// Kind of third-party integration
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Mail,
    Messaging,
}

impl Provider {
    /// Path segment used by the connect endpoints and the redirect flag
    pub fn as_str(self) -> &'static str {
        match self {
            Provider::Mail => "mail",
            Provider::Messaging => "messaging",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "mail" => Some(Provider::Mail),
            "messaging" => Some(Provider::Messaging),
            _ => None,
        }
    }

    /// Human-readable name for cards and toasts
    pub fn label(self) -> &'static str {
        match self {
            Provider::Mail => "Gmail",
            Provider::Messaging => "WhatsApp Business",
        }
    }
}

/// Provide session state to the component tree
pub fn provide_session_state() {
    let state = SessionState {
        profile: create_rw_signal(None),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl SessionState {
    /// Replace the stored profile wholesale
    pub fn set_profile(&self, profile: Profile) {
        self.profile.set(Some(profile));
    }

    /// Clear the profile on logout
    pub fn clear_profile(&self) {
        self.profile.set(None);
    }

    /// Id of the authenticated user, if the profile has been fetched
    pub fn user_id(&self) -> Option<String> {
        self.profile.with(|p| p.as_ref().map(|p| p.user.id.clone()))
    }

    /// Whether the given provider already has a connection record
    pub fn is_connected(&self, provider: Provider) -> bool {
        self.profile.with(|p| {
            p.as_ref()
                .map(|p| {
                    p.business_info
                        .integrations
                        .iter()
                        .any(|c| c.provider == provider)
                })
                .unwrap_or(false)
        })
    }

    /// When the provider's connection was authorized, as stored by the API
    pub fn connected_at(&self, provider: Provider) -> Option<String> {
        self.profile.with(|p| {
            p.as_ref().and_then(|p| {
                p.business_info
                    .integrations
                    .iter()
                    .find(|c| c.provider == provider)
                    .and_then(|c| c.connected_at.clone())
            })
        })
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_roundtrips_through_path_segment() {
        for p in [Provider::Mail, Provider::Messaging] {
            assert_eq!(Provider::from_str(p.as_str()), Some(p));
        }
        assert_eq!(Provider::from_str("calendar"), None);
    }

    #[test]
    fn provider_serializes_lowercase() {
        let v = serde_json::to_value(Provider::Messaging).unwrap();
        assert_eq!(v, serde_json::json!("messaging"));
    }

    #[test]
    fn profile_tolerates_missing_business_info() {
        let profile: Profile = serde_json::from_value(serde_json::json!({
            "user": { "id": "u-1", "email": "owner@example.com" }
        }))
        .unwrap();
        assert!(profile.business_info.services.is_empty());
        assert!(profile.business_info.work_schedule.is_none());
    }

    #[test]
    fn day_schedule_omits_absent_hours() {
        let day = DaySchedule {
            day_off: true,
            ..Default::default()
        };
        let v = serde_json::to_value(&day).unwrap();
        assert_eq!(v, serde_json::json!({ "day_off": true }));
    }
}
