//! Dashboard Page
//!
//! Post-setup landing view. The live business data behind these cards is not
//! wired up yet; the page greets the owner and frames where the numbers will
//! appear.

use leptos::*;

use crate::state::session::SessionState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");

    // One-time welcome after finishing setup
    create_effect(move |_| {
        session.show_success("Welcome to your dashboard!");
    });

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Dashboard"</h1>
                <p class="text-gray-400 mt-1">
                    {move || {
                        session.profile.with(|p| match p {
                            Some(profile) => {
                                let who = profile
                                    .user
                                    .name
                                    .as_deref()
                                    .unwrap_or(&profile.user.email);
                                format!("Good to see you, {}", who)
                            }
                            None => "Your business at a glance".to_string(),
                        })
                    }}
                </p>
            </div>

            <div class="grid grid-cols-2 md:grid-cols-3 gap-4">
                <StatCard icon="👥" label="Clients" value="0" />
                <StatCard icon="📅" label="Appointments" value="0" />
                <StatCard icon="🤖" label="Bot Status" value="Active" />
            </div>

            <section class="bg-gray-800 rounded-xl p-6 text-center space-y-2">
                <div class="text-4xl">"🚧"</div>
                <h2 class="text-xl font-semibold">"Coming Soon"</h2>
                <p class="text-gray-400 text-sm">
                    "Client history, appointment calendar and revenue reports are on the way."
                </p>
            </section>
        </div>
    }
}

/// Single statistic card
#[component]
fn StatCard(icon: &'static str, label: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-4 text-center space-y-1">
            <div class="text-2xl">{icon}</div>
            <div class="text-2xl font-bold">{value}</div>
            <div class="text-gray-400 text-sm">{label}</div>
        </div>
    }
}
