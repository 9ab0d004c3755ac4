//! Index Page
//!
//! Entry point of the app. Anonymous visitors get the landing screen with
//! the login options; authenticated users get their profile loaded and the
//! onboarding wizard.

use leptos::*;

use crate::api::ApiClient;
use crate::auth::{self, AuthSession, AuthStatus};
use crate::components::Loading;
use crate::state::language::{LanguagePref, LANGUAGES};
use crate::state::session::SessionState;
use crate::wizard::Wizard;

/// Index page component
#[component]
pub fn Index() -> impl IntoView {
    let auth = use_context::<AuthSession>().expect("AuthSession not found");

    view! {
        {move || match auth.status.get() {
            AuthStatus::Loading => view! { <Loading /> }.into_view(),
            AuthStatus::Anonymous => view! { <Landing /> }.into_view(),
            AuthStatus::Authenticated => view! { <Onboarding /> }.into_view(),
        }}
    }
}

/// Authenticated branch: load the profile once, then run the wizard
#[component]
fn Onboarding() -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");
    let api = use_context::<ApiClient>().expect("ApiClient not found");

    let (loaded, set_loaded) = create_signal(false);

    // Fetch the profile on mount
    create_effect(move |_| {
        spawn_local(async move {
            match api.fetch_profile().await {
                Ok(profile) => session.set_profile(profile),
                Err(e) => session.show_error(&e.to_string()),
            }
            set_loaded.set(true);
        });
    });

    view! {
        {move || {
            if loaded.get() {
                view! { <Wizard /> }.into_view()
            } else {
                view! { <Loading /> }.into_view()
            }
        }}
    }
}

/// Landing screen for anonymous visitors
#[component]
fn Landing() -> impl IntoView {
    let (email, set_email) = create_signal(String::new());
    let (sending, set_sending) = create_signal(false);
    let (sent, set_sent) = create_signal(false);
    let (error, set_error) = create_signal(Option::<String>::None);

    let send_link = move |_| {
        let address = email.get();
        if address.trim().is_empty() || !address.contains('@') {
            set_error.set(Some("Enter a valid email address".to_string()));
            return;
        }
        set_error.set(None);
        set_sending.set(true);
        spawn_local(async move {
            match auth::send_magic_link(address.trim()).await {
                Ok(()) => set_sent.set(true),
                Err(e) => set_error.set(Some(e)),
            }
            set_sending.set(false);
        });
    };

    view! {
        <div class="w-full max-w-md mx-auto space-y-6">
            <div class="text-center space-y-2">
                <div class="text-5xl">"✂️"</div>
                <h1 class="text-3xl font-bold">"Trimly"</h1>
                <p class="text-gray-400">
                    "Your booking assistant for hairdressers, barbers and beauty studios."
                </p>
            </div>

            <div class="bg-gray-800 rounded-xl p-6 space-y-4">
                <button
                    type="button"
                    on:click=move |_| auth::login()
                    class="w-full py-3 bg-primary-600 hover:bg-primary-700
                           rounded-lg font-semibold transition-colors"
                >
                    "Log In / Sign Up"
                </button>

                <div class="flex items-center gap-3 text-gray-500 text-sm">
                    <div class="flex-1 h-px bg-gray-700" />
                    "or"
                    <div class="flex-1 h-px bg-gray-700" />
                </div>

                {move || {
                    if sent.get() {
                        view! {
                            <div class="p-3 bg-green-900/40 border border-green-700 rounded-lg
                                        text-green-400 text-sm text-center">
                                "Check your inbox for the login link"
                            </div>
                        }.into_view()
                    } else {
                        view! {
                            <div class="space-y-2">
                                <input
                                    type="email"
                                    placeholder="you@example.com"
                                    prop:value=move || email.get()
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                    class="w-full px-3 py-2 bg-gray-700 rounded-lg focus:outline-none
                                           focus:ring-2 focus:ring-primary-500"
                                />
                                <button
                                    type="button"
                                    on:click=send_link
                                    disabled=move || sending.get()
                                    class="w-full py-2 bg-gray-700 hover:bg-gray-600 disabled:bg-gray-600
                                           rounded-lg font-medium transition-colors"
                                >
                                    {move || if sending.get() { "Sending..." } else { "Email me a login link" }}
                                </button>
                            </div>
                        }.into_view()
                    }
                }}

                {move || error.get().map(|message| view! {
                    <p class="text-red-400 text-sm text-center">{message}</p>
                })}
            </div>

            <LanguageSwitcher />
        </div>
    }
}

/// Language selector shown on the landing screen
#[component]
fn LanguageSwitcher() -> impl IntoView {
    let pref = use_context::<LanguagePref>().expect("LanguagePref not found");

    view! {
        <div class="flex justify-center">
            <select
                on:change=move |ev| pref.set(&event_target_value(&ev))
                class="px-3 py-1 bg-gray-800 text-gray-400 text-sm rounded-lg
                       border border-gray-700 focus:outline-none"
            >
                {LANGUAGES.iter().map(|(code, label)| {
                    let code = *code;
                    view! {
                        <option
                            value=code
                            selected=move || pref.language.with(|l| l == code)
                        >
                            {*label}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
