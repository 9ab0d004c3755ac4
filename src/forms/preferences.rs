//! Advanced Preferences Form
//!
//! Optional business preferences: discounted bundles, follow-up messages,
//! taxes or service fees, and invoicing. Conditional fields appear only for
//! the "yes" answers.

use leptos::*;

use crate::api::{ApiClient, BusinessInfoPatch};
use crate::forms::draft::FormDraft;
use crate::state::session::{Preferences, Profile, ServiceBundle, ServiceFee, SessionState};

/// Follow-up message timing choices
pub const FOLLOW_UP_OPTIONS: [(&str, &str); 4] = [
    ("no", "No follow-up"),
    ("same-day", "Same day"),
    ("next-day", "Next day"),
    ("three-days", "After three days"),
];

/// Invoicing audience choices
pub const INVOICING_OPTIONS: [(&str, &str); 3] = [
    ("no", "No invoices"),
    ("all", "All clients"),
    ("returning", "Returning clients only"),
];

/// Draft state of the preferences step
#[derive(Clone, Debug, PartialEq)]
pub struct PreferencesDraft {
    pub bundles: String,
    pub bundle_name: String,
    pub bundle_sessions: String,
    pub bundle_discount: String,
    pub follow_up: String,
    pub tax_or_fee: String,
    pub fee_type: String,
    pub fee_value: String,
    pub invoicing: String,
}

impl Default for PreferencesDraft {
    fn default() -> Self {
        Self {
            bundles: "no".to_string(),
            bundle_name: String::new(),
            bundle_sessions: "3".to_string(),
            bundle_discount: "10".to_string(),
            follow_up: "no".to_string(),
            tax_or_fee: "no".to_string(),
            fee_type: "percentage".to_string(),
            fee_value: "10".to_string(),
            invoicing: "no".to_string(),
        }
    }
}

impl PreferencesDraft {
    /// Seed from stored preferences, or the defaults
    pub fn seed(profile: Option<&Profile>) -> Self {
        let stored = match profile.and_then(|p| p.business_info.preferences.as_ref()) {
            Some(preferences) => preferences,
            None => return Self::default(),
        };
        let defaults = Self::default();

        let (bundles, bundle_name, bundle_sessions, bundle_discount) = match &stored.service_bundle
        {
            Some(bundle) => (
                "yes".to_string(),
                bundle.name.clone(),
                bundle.sessions.to_string(),
                bundle.discount_percent.to_string(),
            ),
            None => (
                "no".to_string(),
                defaults.bundle_name,
                defaults.bundle_sessions,
                defaults.bundle_discount,
            ),
        };

        let (tax_or_fee, fee_type, fee_value) = match &stored.service_fee {
            Some(fee) => ("yes".to_string(), fee.kind.clone(), fee.value.to_string()),
            None => ("no".to_string(), defaults.fee_type, defaults.fee_value),
        };

        Self {
            bundles,
            bundle_name,
            bundle_sessions,
            bundle_discount,
            follow_up: stored.follow_up.clone(),
            tax_or_fee,
            fee_type,
            fee_value,
            invoicing: stored.invoicing.clone(),
        }
    }
}

/// Transform the draft into the API's preference shape.
///
/// Bundles need a name; fees need a numeric value. The "no" answers drop
/// their conditional fields entirely.
pub fn validate_preferences(draft: &PreferencesDraft) -> Result<Preferences, String> {
    let service_bundle = if draft.bundles == "yes" {
        let name = draft.bundle_name.trim();
        if name.is_empty() {
            return Err("Give your bundle a name".to_string());
        }
        let sessions: u32 = draft
            .bundle_sessions
            .trim()
            .parse()
            .map_err(|_| "Invalid number of sessions".to_string())?;
        let discount_percent: u32 = match draft.bundle_discount.trim().parse() {
            Ok(discount) if discount <= 100 => discount,
            _ => return Err("Discount must be between 0 and 100".to_string()),
        };
        Some(ServiceBundle {
            name: name.to_string(),
            sessions,
            discount_percent,
        })
    } else {
        None
    };

    let service_fee = if draft.tax_or_fee == "yes" {
        let value: f64 = draft
            .fee_value
            .trim()
            .parse()
            .map_err(|_| "Enter a numeric fee value".to_string())?;
        Some(ServiceFee {
            kind: draft.fee_type.clone(),
            value,
        })
    } else {
        None
    };

    Ok(Preferences {
        service_bundle,
        follow_up: draft.follow_up.clone(),
        service_fee,
        invoicing: draft.invoicing.clone(),
    })
}

/// Preferences step form
#[component]
pub fn PreferencesForm(
    #[prop(into)] on_next: Callback<()>,
    #[prop(into)] on_back: Callback<()>,
) -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");
    let api = use_context::<ApiClient>().expect("ApiClient not found");

    let form = create_rw_signal(FormDraft::new(PreferencesDraft::seed(
        session.profile.get_untracked().as_ref(),
    )));
    let clean = create_memo(move |_| form.with(|f| f.is_clean()));
    let (saving, set_saving) = create_signal(false);

    let save = move |_| {
        let draft = form.with_untracked(|f| f.draft.clone());
        let preferences = match validate_preferences(&draft) {
            Ok(preferences) => preferences,
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
                preferences: Some(preferences),
                ..Default::default()
            };
            match api.update_business_info(&user_id, &patch).await {
                Ok(()) => {
                    form.update(|f| f.commit_saved());
                    session.show_success("Preferences saved");
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
            // Service bundles
            <div class="p-4 bg-gray-800 rounded-lg border border-gray-700 space-y-3">
                <YesNo
                    label="Do you offer discounted multi-session bundles?"
                    value=Signal::derive(move || form.with(|f| f.draft.bundles.clone()))
                    on_change=move |v| form.update(|f| f.edit(|d| d.bundles = v))
                />
                {move || {
                    if form.with(|f| f.draft.bundles == "yes") {
                        view! {
                            <div class="pl-4 border-l-2 border-gray-600 space-y-3">
                                <div>
                                    <label class="block text-sm text-gray-400 mb-2">"Bundle Name"</label>
                                    <input
                                        type="text"
                                        placeholder="e.g. 5 Haircuts Pack"
                                        prop:value=move || form.with(|f| f.draft.bundle_name.clone())
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            form.update(|f| f.edit(|d| d.bundle_name = value));
                                        }
                                        class="w-full bg-gray-700 rounded-lg px-3 py-2
                                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                                    />
                                </div>
                                <div class="grid grid-cols-2 gap-3">
                                    <div>
                                        <label class="block text-sm text-gray-400 mb-2">"Sessions"</label>
                                        <select
                                            on:change=move |ev| {
                                                let value = event_target_value(&ev);
                                                form.update(|f| f.edit(|d| d.bundle_sessions = value));
                                            }
                                            prop:value=move || form.with(|f| f.draft.bundle_sessions.clone())
                                            class="w-full bg-gray-700 rounded-lg px-3 py-2
                                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                                        >
                                            {[2u32, 3, 4, 5, 6, 8, 10, 12].into_iter().map(|n| view! {
                                                <option value=n.to_string()>{n}</option>
                                            }).collect_view()}
                                        </select>
                                    </div>
                                    <div>
                                        <label class="block text-sm text-gray-400 mb-2">"Discount %"</label>
                                        <input
                                            type="number"
                                            min="0"
                                            max="100"
                                            prop:value=move || form.with(|f| f.draft.bundle_discount.clone())
                                            on:input=move |ev| {
                                                let value = event_target_value(&ev);
                                                form.update(|f| f.edit(|d| d.bundle_discount = value));
                                            }
                                            class="w-full bg-gray-700 rounded-lg px-3 py-2
                                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                                        />
                                    </div>
                                </div>
                            </div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>

            // Follow-up messages
            <div class="p-4 bg-gray-800 rounded-lg border border-gray-700">
                <label class="block text-sm text-gray-400 mb-2">"Follow-up message after a visit"</label>
                <select
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.edit(|d| d.follow_up = value));
                    }
                    prop:value=move || form.with(|f| f.draft.follow_up.clone())
                    class="w-full bg-gray-700 rounded-lg px-3 py-2
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                >
                    {FOLLOW_UP_OPTIONS.into_iter().map(|(value, label)| view! {
                        <option value=value>{label}</option>
                    }).collect_view()}
                </select>
            </div>

            // Tax or service fee
            <div class="p-4 bg-gray-800 rounded-lg border border-gray-700 space-y-3">
                <YesNo
                    label="Do you add tax or a service fee on top of prices?"
                    value=Signal::derive(move || form.with(|f| f.draft.tax_or_fee.clone()))
                    on_change=move |v| form.update(|f| f.edit(|d| d.tax_or_fee = v))
                />
                {move || {
                    if form.with(|f| f.draft.tax_or_fee == "yes") {
                        view! {
                            <div class="pl-4 border-l-2 border-gray-600 grid grid-cols-2 gap-3">
                                <div>
                                    <label class="block text-sm text-gray-400 mb-2">"Fee Type"</label>
                                    <select
                                        on:change=move |ev| {
                                            let value = event_target_value(&ev);
                                            form.update(|f| f.edit(|d| d.fee_type = value));
                                        }
                                        prop:value=move || form.with(|f| f.draft.fee_type.clone())
                                        class="w-full bg-gray-700 rounded-lg px-3 py-2
                                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                                    >
                                        <option value="percentage">"Percentage"</option>
                                        <option value="fixed">"Fixed amount"</option>
                                    </select>
                                </div>
                                <div>
                                    <label class="block text-sm text-gray-400 mb-2">"Value"</label>
                                    <input
                                        type="number"
                                        min="0"
                                        prop:value=move || form.with(|f| f.draft.fee_value.clone())
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            form.update(|f| f.edit(|d| d.fee_value = value));
                                        }
                                        class="w-full bg-gray-700 rounded-lg px-3 py-2
                                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                                    />
                                </div>
                            </div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>

            // Invoicing
            <div class="p-4 bg-gray-800 rounded-lg border border-gray-700">
                <label class="block text-sm text-gray-400 mb-2">"Send invoices automatically?"</label>
                <select
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.edit(|d| d.invoicing = value));
                    }
                    prop:value=move || form.with(|f| f.draft.invoicing.clone())
                    class="w-full bg-gray-700 rounded-lg px-3 py-2
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                >
                    {INVOICING_OPTIONS.into_iter().map(|(value, label)| view! {
                        <option value=value>{label}</option>
                    }).collect_view()}
                </select>
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
                                {move || if saving.get() { "Saving..." } else { "Save Preferences" }}
                            </button>
                        }.into_view()
                    }
                }}
            </div>
        </div>
    }
}

/// Two-button yes/no selector
#[component]
fn YesNo(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    on_change: impl Fn(String) + 'static + Copy,
) -> impl IntoView {
    view! {
        <div>
            <span class="block text-sm font-medium mb-2">{label}</span>
            <div class="flex space-x-2">
                {["yes", "no"].into_iter().map(|choice| view! {
                    <button
                        type="button"
                        on:click=move |_| on_change(choice.to_string())
                        class=move || {
                            let base = "px-4 py-2 rounded-lg text-sm font-medium transition-colors";
                            if value.get() == choice {
                                format!("{} bg-primary-600 text-white", base)
                            } else {
                                format!("{} bg-gray-700 text-gray-400 hover:text-white", base)
                            }
                        }
                    >
                        {if choice == "yes" { "Yes" } else { "No" }}
                    </button>
                }).collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::session::{BusinessInfo, UserAccount};

    #[test]
    fn defaults_validate_to_all_no() {
        let preferences = validate_preferences(&PreferencesDraft::default()).unwrap();
        assert!(preferences.service_bundle.is_none());
        assert!(preferences.service_fee.is_none());
        assert_eq!(preferences.follow_up, "no");
        assert_eq!(preferences.invoicing, "no");
    }

    #[test]
    fn bundle_requires_a_name() {
        let draft = PreferencesDraft {
            bundles: "yes".to_string(),
            ..Default::default()
        };
        assert!(validate_preferences(&draft).is_err());
    }

    #[test]
    fn bundle_fields_are_coerced() {
        let draft = PreferencesDraft {
            bundles: "yes".to_string(),
            bundle_name: "5 Haircuts Pack".to_string(),
            bundle_sessions: "5".to_string(),
            bundle_discount: "15".to_string(),
            ..Default::default()
        };
        let bundle = validate_preferences(&draft).unwrap().service_bundle.unwrap();
        assert_eq!(bundle.sessions, 5);
        assert_eq!(bundle.discount_percent, 15);
    }

    #[test]
    fn discount_above_100_is_rejected() {
        let draft = PreferencesDraft {
            bundles: "yes".to_string(),
            bundle_name: "Pack".to_string(),
            bundle_discount: "120".to_string(),
            ..Default::default()
        };
        assert!(validate_preferences(&draft).is_err());
    }

    #[test]
    fn fee_requires_a_numeric_value() {
        let mut draft = PreferencesDraft {
            tax_or_fee: "yes".to_string(),
            fee_value: "abc".to_string(),
            ..Default::default()
        };
        assert!(validate_preferences(&draft).is_err());

        draft.fee_value = "17.5".to_string();
        let fee = validate_preferences(&draft).unwrap().service_fee.unwrap();
        assert_eq!(fee.kind, "percentage");
        assert_eq!(fee.value, 17.5);
    }

    #[test]
    fn seed_roundtrips_through_the_wire_shape() {
        let draft = PreferencesDraft {
            bundles: "yes".to_string(),
            bundle_name: "Pack".to_string(),
            bundle_sessions: "4".to_string(),
            bundle_discount: "20".to_string(),
            follow_up: "next-day".to_string(),
            ..Default::default()
        };
        let preferences = validate_preferences(&draft).unwrap();

        let profile = Profile {
            user: UserAccount::default(),
            business_info: BusinessInfo {
                preferences: Some(preferences),
                ..Default::default()
            },
        };
        let reseeded = PreferencesDraft::seed(Some(&profile));
        assert_eq!(reseeded, draft);
    }
}
