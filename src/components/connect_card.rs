//! Connection Step Component
//!
//! Card for the provider connect steps. "Connect" fetches an authorization
//! URL from the API and sends the browser there; the redirect return is
//! handled by the wizard controller. A provider that already has a
//! connection record renders as satisfied.

use leptos::*;

use crate::api::ApiClient;
use crate::state::session::{Provider, SessionState};

/// Render an RFC 3339 connection timestamp as a short date
fn connected_since(timestamp: &str) -> Option<String> {
    chrono::DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|dt| dt.format("%b %d, %Y").to_string())
}

/// Benefit bullets shown on a provider's connect card
fn benefits(provider: Provider) -> [&'static str; 3] {
    match provider {
        Provider::Mail => [
            "Send booking confirmations from your own address",
            "Keep client correspondence in one inbox",
            "Deliver invoices and receipts automatically",
        ],
        Provider::Messaging => [
            "Automated appointment confirmations",
            "Reminders that reach clients where they already are",
            "Promotional messages to regular clients",
        ],
    }
}

/// Provider connect step
#[component]
pub fn ConnectStep(
    provider: Provider,
    #[prop(into)] on_next: Callback<()>,
    #[prop(into)] on_back: Callback<()>,
) -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");
    let api = use_context::<ApiClient>().expect("ApiClient not found");

    let connected = create_memo(move |_| session.is_connected(provider));
    let (connecting, set_connecting) = create_signal(false);

    let connect = move |_| {
        set_connecting.set(true);
        spawn_local(async move {
            match api.connect_url(provider).await {
                Ok(url) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().assign(&url);
                    }
                }
                Err(e) => {
                    session.show_error(&e.to_string());
                    set_connecting.set(false);
                }
            }
        });
    };

    view! {
        <div class="space-y-4">
            <p class="text-gray-400">
                {format!(
                    "Connect {} so Trimly can talk to your clients on your behalf.",
                    provider.label()
                )}
            </p>

            <div class="p-4 bg-gray-800 rounded-lg border border-gray-700">
                <h3 class="font-medium mb-2">{format!("{} Benefits", provider.label())}</h3>
                <ul class="text-sm text-gray-400 space-y-1">
                    {benefits(provider).into_iter().map(|benefit| view! {
                        <li class="flex items-center gap-2">
                            <span class="text-green-400">"✓"</span>
                            <span>{benefit}</span>
                        </li>
                    }).collect_view()}
                </ul>
            </div>

            {move || {
                if connected.get() {
                    view! {
                        <div class="p-3 bg-green-900/40 border border-green-700 rounded-lg
                                    text-green-400 text-sm text-center">
                            {match session.connected_at(provider).as_deref().and_then(connected_since) {
                                Some(date) => format!("{} connected since {}", provider.label(), date),
                                None => format!("{} is connected", provider.label()),
                            }}
                        </div>
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            <div class="flex gap-2 pt-2">
                <button
                    type="button"
                    on:click=move |_| on_back.call(())
                    class="w-1/3 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                >
                    "Back"
                </button>
                {move || {
                    if connected.get() {
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
                                on:click=connect
                                disabled=move || connecting.get()
                                class="flex-1 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                                       rounded-lg font-semibold transition-colors"
                            >
                                {move || {
                                    if connecting.get() {
                                        "Connecting...".to_string()
                                    } else {
                                        format!("Connect {}", provider.label())
                                    }
                                }}
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

    #[test]
    fn connection_timestamp_renders_as_short_date() {
        assert_eq!(
            connected_since("2026-03-14T10:30:00Z").as_deref(),
            Some("Mar 14, 2026")
        );
        assert_eq!(connected_since("yesterday"), None);
    }
}
