//! Wizard Controller
//!
//! Owns the current step, persists it on every change, and renders exactly
//! one step component. A connection-success flag in the query string (set by
//! the provider redirect) force-advances the step index once, exactly when
//! the wizard is on the step awaiting that connection.

use leptos::*;
use leptos_router::A;

use crate::components::{ConnectStep, WizardProgress};
use crate::forms::{PolicyForm, PreferencesForm, PricingForm, ScheduleForm};
use crate::state::session::Provider;
use crate::wizard::step::{load_step, store_step, WizardStep};

/// Parse the connection-success flag (`connected=<provider>`) out of a
/// query string
pub fn connection_flag(search: &str) -> Option<Provider> {
    search
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| pair.strip_prefix("connected="))
        .and_then(Provider::from_str)
}

/// Query string with the connection-success flag removed; empty when no
/// other parameters remain
pub fn strip_connection_flag(search: &str) -> String {
    let remaining: Vec<&str> = search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty() && !pair.starts_with("connected="))
        .collect();

    if remaining.is_empty() {
        String::new()
    } else {
        format!("?{}", remaining.join("&"))
    }
}

/// Read the flag from the current URL and strip it from the visible URL
fn take_connection_flag() -> Option<Provider> {
    let window = web_sys::window()?;
    let location = window.location();
    let search = location.search().ok()?;
    let provider = connection_flag(&search)?;

    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    let url = format!("{}{}", path, strip_connection_flag(&search));
    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url));
    }
    Some(provider)
}

/// Onboarding wizard
#[component]
pub fn Wizard() -> impl IntoView {
    let step = create_rw_signal(load_step());

    // Redirect return from a provider authorization flow: advance exactly
    // once, only when this is the step waiting for that provider
    if let Some(provider) = take_connection_flag() {
        if step.get_untracked() == WizardStep::awaiting_connection(provider) {
            step.update(|s| *s = s.advance());
        }
    }

    // Persist position so a reload resumes at the same step
    create_effect(move |_| store_step(step.get()));

    let on_next = Callback::new(move |()| step.update(|s| *s = s.advance()));
    let on_back = Callback::new(move |()| step.update(|s| *s = s.retreat()));

    view! {
        <div class="w-full max-w-xl mx-auto space-y-4">
            {move || {
                let current = step.get();
                match current {
                    WizardStep::Entry => view! {
                        <EntryCard on_start=on_next />
                    }.into_view(),
                    WizardStep::Complete => view! {
                        <WizardProgress step=step />
                        <CompleteCard />
                    }.into_view(),
                    _ => view! {
                        <WizardProgress step=step />
                        <div class="bg-gray-800 rounded-xl p-6 space-y-4">
                            <h2 class="text-xl font-bold">{current.title()}</h2>
                            <StepBody step=current on_next=on_next on_back=on_back />
                        </div>
                    }.into_view(),
                }
            }}
        </div>
    }
}

/// Body of one real setup step
#[component]
fn StepBody(
    step: WizardStep,
    #[prop(into)] on_next: Callback<()>,
    #[prop(into)] on_back: Callback<()>,
) -> impl IntoView {
    match step {
        WizardStep::ConnectMail => view! {
            <ConnectStep provider=Provider::Mail on_next=on_next on_back=on_back />
        }
        .into_view(),
        WizardStep::ConnectMessaging => view! {
            <ConnectStep provider=Provider::Messaging on_next=on_next on_back=on_back />
        }
        .into_view(),
        WizardStep::Pricing => view! {
            <PricingForm on_next=on_next on_back=on_back />
        }
        .into_view(),
        WizardStep::Schedule => view! {
            <ScheduleForm on_next=on_next on_back=on_back />
        }
        .into_view(),
        WizardStep::Policy => view! {
            <PolicyForm on_next=on_next on_back=on_back />
        }
        .into_view(),
        WizardStep::Preferences => view! {
            <PreferencesForm on_next=on_next on_back=on_back />
        }
        .into_view(),
        // Entry and Complete are rendered by the controller itself
        WizardStep::Entry | WizardStep::Complete => view! {}.into_view(),
    }
}

/// Pre-wizard welcome screen
#[component]
fn EntryCard(#[prop(into)] on_start: Callback<()>) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl overflow-hidden">
            <div class="bg-primary-700 p-6">
                <h2 class="text-2xl font-bold">"Welcome to Trimly"</h2>
                <p class="text-primary-100 mt-1">"The booking assistant for service professionals"</p>
            </div>
            <div class="p-6 space-y-4">
                <p class="text-gray-300">
                    "Connect your accounts, set your prices and working hours, and let "
                    "Trimly handle bookings for you."
                </p>
                <ul class="text-sm text-gray-400 space-y-1">
                    <li>"• Hairdressers and barbers"</li>
                    <li>"• Beauty and wellness studios"</li>
                    <li>"• Any appointment-based business"</li>
                </ul>
                <button
                    type="button"
                    on:click=move |_| on_start.call(())
                    class="w-full py-3 bg-primary-600 hover:bg-primary-700
                           rounded-lg font-semibold transition-colors"
                >
                    "Get Started →"
                </button>
            </div>
        </div>
    }
}

/// Terminal "setup complete" view
#[component]
fn CompleteCard() -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-6 text-center space-y-4">
            <div class="text-5xl">"✓"</div>
            <h2 class="text-2xl font-bold text-green-400">"All Set!"</h2>
            <p class="text-gray-300">
                "Your Trimly assistant is ready. It can now manage your clients, "
                "appointments and reminders."
            </p>
            <A
                href="/dashboard"
                class="inline-block px-6 py-3 bg-primary-600 hover:bg-primary-700
                       rounded-lg font-semibold transition-colors"
            >
                "Go to Dashboard →"
            </A>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_is_parsed_among_other_params() {
        assert_eq!(connection_flag("?connected=mail"), Some(Provider::Mail));
        assert_eq!(
            connection_flag("?code=xyz&connected=messaging"),
            Some(Provider::Messaging)
        );
    }

    #[test]
    fn unknown_or_missing_flag_is_ignored() {
        assert_eq!(connection_flag(""), None);
        assert_eq!(connection_flag("?connected=calendar"), None);
        assert_eq!(connection_flag("?other=1"), None);
    }

    #[test]
    fn strip_removes_only_the_flag() {
        assert_eq!(strip_connection_flag("?connected=mail"), "");
        assert_eq!(
            strip_connection_flag("?code=xyz&connected=mail&state=1"),
            "?code=xyz&state=1"
        );
        assert_eq!(strip_connection_flag(""), "");
    }

    #[test]
    fn flag_only_advances_the_matching_step() {
        // The controller checks the current step against the provider's
        // connect step before advancing; verify the mapping it relies on.
        let provider = Provider::Messaging;
        let awaiting = WizardStep::awaiting_connection(provider);
        assert_eq!(awaiting, WizardStep::ConnectMessaging);
        assert_ne!(WizardStep::awaiting_connection(Provider::Mail), awaiting);
    }
}
