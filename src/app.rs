//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::api::ApiClient;
use crate::auth::{self, provide_auth, AuthSession, AuthStatus};
use crate::components::Toast;
use crate::pages::{Booking, Dashboard, Index};
use crate::state::{provide_language, provide_session_state, SessionState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide the app-wide collaborators to all components
    provide_session_state();
    provide_language();
    provide_auth();
    provide_context(ApiClient::new());

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                <Header />

                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=Index />
                        <Route path="/dashboard" view=Dashboard />
                        <Route path="/booking" view=Booking />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Top navigation bar
#[component]
fn Header() -> impl IntoView {
    let auth_session = use_context::<AuthSession>().expect("AuthSession not found");
    let session = use_context::<SessionState>().expect("SessionState not found");

    view! {
        <header class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4 py-3 flex items-center justify-between">
                <A href="/" class="flex items-center gap-2 font-bold text-lg">
                    <span>"✂️"</span>
                    <span>"Trimly"</span>
                </A>

                {move || {
                    if auth_session.status.get() == AuthStatus::Authenticated {
                        view! {
                            <button
                                type="button"
                                on:click=move |_| {
                                    session.clear_profile();
                                    auth::logout(auth_session);
                                }
                                class="text-sm text-gray-400 hover:text-white transition-colors"
                            >
                                "Log Out"
                            </button>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </header>
    }
}

/// Footer component
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto text-center text-xs text-gray-500">
                "Trimly — bookings on autopilot"
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Back to Setup"
            </A>
        </div>
    }
}
