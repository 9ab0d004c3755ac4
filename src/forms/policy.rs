//! Policy Form
//!
//! Booking policy step: cancellation notice and the gap kept between
//! appointments. The custom gap field is shown only for the "custom"
//! selection.

use leptos::*;

use crate::api::{ApiClient, BusinessInfoPatch};
use crate::forms::draft::FormDraft;
use crate::state::session::{BookingPolicies, Profile, SessionState};

/// Cancellation policy choices
pub const CANCELLATION_OPTIONS: [(&str, &str); 3] = [
    ("none", "No policy"),
    ("12h", "12 hours notice"),
    ("24h", "24 hours notice"),
];

/// Appointment gap choices; "custom" reveals a minutes input
pub const GAP_OPTIONS: [(&str, &str); 5] = [
    ("0", "No gap"),
    ("5", "5 minutes"),
    ("10", "10 minutes"),
    ("15", "15 minutes"),
    ("custom", "Custom"),
];

/// Draft state of the policy step. Empty strings mean "not selected yet".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PolicyDraft {
    pub cancellation: String,
    pub gap: String,
    pub custom_gap: String,
}

impl PolicyDraft {
    /// Seed from stored policies, mapping gap minutes back onto the presets
    pub fn seed(profile: Option<&Profile>) -> Self {
        let policies = match profile.and_then(|p| p.business_info.policies.as_ref()) {
            Some(policies) => policies,
            None => return Self::default(),
        };

        let minutes = policies.appointment_gap_minutes;
        let preset = GAP_OPTIONS
            .iter()
            .any(|(value, _)| *value == minutes.to_string());

        Self {
            cancellation: policies.cancellation_policy.clone(),
            gap: if preset {
                minutes.to_string()
            } else {
                "custom".to_string()
            },
            custom_gap: if preset {
                String::new()
            } else {
                minutes.to_string()
            },
        }
    }
}

/// Transform the draft into the API's policy shape.
///
/// Both selections are required; the custom gap must parse as 1-60 minutes.
pub fn validate_policy(draft: &PolicyDraft) -> Result<BookingPolicies, String> {
    if draft.cancellation.is_empty() || draft.gap.is_empty() {
        return Err("Select a cancellation policy and an appointment gap".to_string());
    }

    let appointment_gap_minutes = if draft.gap == "custom" {
        match draft.custom_gap.trim().parse::<u32>() {
            Ok(minutes) if (1..=60).contains(&minutes) => minutes,
            _ => return Err("Enter a custom gap between 1 and 60 minutes".to_string()),
        }
    } else {
        // Preset values are known-good integers
        draft.gap.parse().unwrap_or(0)
    };

    Ok(BookingPolicies {
        cancellation_policy: draft.cancellation.clone(),
        appointment_gap_minutes,
    })
}

/// Policy step form
#[component]
pub fn PolicyForm(
    #[prop(into)] on_next: Callback<()>,
    #[prop(into)] on_back: Callback<()>,
) -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");
    let api = use_context::<ApiClient>().expect("ApiClient not found");

    let form = create_rw_signal(FormDraft::new(PolicyDraft::seed(
        session.profile.get_untracked().as_ref(),
    )));
    let clean = create_memo(move |_| form.with(|f| f.is_clean()));
    let (saving, set_saving) = create_signal(false);

    let save = move |_| {
        let draft = form.with_untracked(|f| f.draft.clone());
        let policies = match validate_policy(&draft) {
            Ok(policies) => policies,
            Err(e) => {
                session.show_error(&e);
                return;
            }
        };
        let user_id = match session.user_id() {
            Some(id) => id,
            None => {
                session.show_error("Your session has expired. Please reload the page.");
                return;
            }
        };

        set_saving.set(true);
        spawn_local(async move {
            let patch = BusinessInfoPatch {
                policies: Some(policies),
                ..Default::default()
            };
            match api.update_business_info(&user_id, &patch).await {
                Ok(()) => {
                    form.update(|f| f.commit_saved());
                    session.show_success("Policies saved");
                }
                Err(e) => {
                    session.show_error(&e.to_string());
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="space-y-6">
            // Cancellation policy
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Cancellation Policy"</label>
                <select
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.edit(|d| d.cancellation = value));
                    }
                    prop:value=move || form.with(|f| f.draft.cancellation.clone())
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                >
                    <option value="" disabled=true>"Select a policy"</option>
                    {CANCELLATION_OPTIONS.into_iter().map(|(value, label)| view! {
                        <option value=value>{label}</option>
                    }).collect_view()}
                </select>
            </div>

            // Appointment gap
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Gap Between Appointments"</label>
                <select
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.edit(|d| d.gap = value));
                    }
                    prop:value=move || form.with(|f| f.draft.gap.clone())
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                >
                    <option value="" disabled=true>"Select a gap"</option>
                    {GAP_OPTIONS.into_iter().map(|(value, label)| view! {
                        <option value=value>{label}</option>
                    }).collect_view()}
                </select>

                {move || {
                    if form.with(|f| f.draft.gap == "custom") {
                        view! {
                            <input
                                type="number"
                                min="1"
                                max="60"
                                placeholder="Minutes"
                                prop:value=move || form.with(|f| f.draft.custom_gap.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.edit(|d| d.custom_gap = value));
                                }
                                class="mt-2 w-32 bg-gray-700 rounded-lg px-3 py-2
                                       border border-gray-600 focus:border-primary-500 focus:outline-none"
                            />
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>

            <div class="flex gap-2 pt-2">
                <button
                    type="button"
                    on:click=move |_| on_back.call(())
                    class="w-1/3 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                >
                    "Back"
                </button>
                {move || {
                    if clean.get() {
                        view! {
                            <button
                                type="button"
                                on:click=move |_| on_next.call(())
                                class="flex-1 py-3 bg-primary-600 hover:bg-primary-700
                                       rounded-lg font-semibold transition-colors"
                            >
                                "Next"
                            </button>
                        }.into_view()
                    } else {
                        view! {
                            <button
                                type="button"
                                on:click=move |_| form.update(|f| f.discard())
                                class="w-1/3 py-3 bg-gray-700 hover:bg-gray-600
                                       rounded-lg font-medium transition-colors"
                            >
                                "Discard"
                            </button>
                            <button
                                type="button"
                                on:click=save
                                disabled=move || saving.get()
                                class="flex-1 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                                       rounded-lg font-semibold transition-colors"
                            >
                                {move || if saving.get() { "Saving..." } else { "Save Policies" }}
                            </button>
                        }.into_view()
                    }
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::session::{BusinessInfo, UserAccount};

    #[test]
    fn both_selections_are_required() {
        assert!(validate_policy(&PolicyDraft::default()).is_err());
        assert!(validate_policy(&PolicyDraft {
            cancellation: "24h".to_string(),
            ..Default::default()
        })
        .is_err());
    }

    #[test]
    fn preset_gap_coerces_to_minutes() {
        let policies = validate_policy(&PolicyDraft {
            cancellation: "24h".to_string(),
            gap: "15".to_string(),
            custom_gap: String::new(),
        })
        .unwrap();
        assert_eq!(policies.cancellation_policy, "24h");
        assert_eq!(policies.appointment_gap_minutes, 15);
    }

    #[test]
    fn custom_gap_requires_a_value_in_range() {
        let mut draft = PolicyDraft {
            cancellation: "12h".to_string(),
            gap: "custom".to_string(),
            custom_gap: String::new(),
        };
        assert!(validate_policy(&draft).is_err());

        draft.custom_gap = "90".to_string();
        assert!(validate_policy(&draft).is_err());

        draft.custom_gap = "25".to_string();
        assert_eq!(validate_policy(&draft).unwrap().appointment_gap_minutes, 25);
    }

    #[test]
    fn seed_maps_stored_minutes_back_onto_presets() {
        let profile = Profile {
            user: UserAccount::default(),
            business_info: BusinessInfo {
                policies: Some(BookingPolicies {
                    cancellation_policy: "24h".to_string(),
                    appointment_gap_minutes: 10,
                }),
                ..Default::default()
            },
        };
        let draft = PolicyDraft::seed(Some(&profile));
        assert_eq!(draft.gap, "10");
        assert!(draft.custom_gap.is_empty());
    }

    #[test]
    fn seed_falls_back_to_custom_for_other_minutes() {
        let profile = Profile {
            user: UserAccount::default(),
            business_info: BusinessInfo {
                policies: Some(BookingPolicies {
                    cancellation_policy: "none".to_string(),
                    appointment_gap_minutes: 25,
                }),
                ..Default::default()
            },
        };
        let draft = PolicyDraft::seed(Some(&profile));
        assert_eq!(draft.gap, "custom");
        assert_eq!(draft.custom_gap, "25");
    }

    #[test]
    fn seed_without_policies_starts_unselected() {
        let draft = PolicyDraft::seed(None);
        assert!(draft.cancellation.is_empty());
        assert!(draft.gap.is_empty());
    }
}
