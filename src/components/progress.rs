//! Wizard Progress Component
//!
//! Progress bar and step counter shown above the active step.

use leptos::*;

use crate::wizard::step::{WizardStep, SETUP_STEP_COUNT};

/// Setup progress header
#[component]
pub fn WizardProgress(#[prop(into)] step: Signal<WizardStep>) -> impl IntoView {
    let percent = move || step.get().progress_percent();

    view! {
        <div class="space-y-2">
            <h2 class="text-center text-gray-400 font-medium">"Business Setup"</h2>
            <div class="h-2 bg-gray-700 rounded-full overflow-hidden">
                <div
                    class="h-full bg-primary-600 rounded-full transition-all duration-300"
                    style:width=move || format!("{}%", percent())
                />
            </div>
            <div class="flex justify-between text-xs text-gray-500">
                <span>
                    {move || match step.get().setup_number() {
                        Some(n) => format!("Step {} of {}", n, SETUP_STEP_COUNT),
                        None => "Setup complete".to_string(),
                    }}
                </span>
                <span>{move || format!("{}% Complete", percent())}</span>
            </div>
        </div>
    }
}
