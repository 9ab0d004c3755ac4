//! Booking Page
//!
//! Client-facing booking demo. Runs entirely on local component state with
//! sample services and a fixed slot grid; nothing here talks to the API or
//! survives a reload.

use leptos::*;

/// Sample services shown to the demo client
const DEMO_SERVICES: [(&str, &str, &str); 3] = [
    ("Haircut", "45 min", "$40"),
    ("Beard Trim", "20 min", "$15"),
    ("Color & Style", "90 min", "$85"),
];

/// Offered demo dates, relative labels only
const DEMO_DATES: [&str; 4] = ["Today", "Tomorrow", "Wednesday", "Thursday"];

const DEMO_SLOTS: [&str; 6] = ["9:00", "10:30", "12:00", "14:00", "15:30", "17:00"];

#[derive(Clone, Copy, PartialEq, Eq)]
enum BookingPhase {
    Service,
    Slot,
    Contact,
    Done,
}

/// Booking demo page component
#[component]
pub fn Booking() -> impl IntoView {
    let (phase, set_phase) = create_signal(BookingPhase::Service);
    let (service, set_service) = create_signal(Option::<usize>::None);
    let (date, set_date) = create_signal(Option::<usize>::None);
    let (slot, set_slot) = create_signal(Option::<usize>::None);
    let (name, set_name) = create_signal(String::new());
    let (phone, set_phone) = create_signal(String::new());

    let summary = move || {
        let service_name = service.get().map(|i| DEMO_SERVICES[i].0).unwrap_or("");
        let day = date.get().map(|i| DEMO_DATES[i]).unwrap_or("");
        let time = slot.get().map(|i| DEMO_SLOTS[i]).unwrap_or("");
        format!("{} · {} at {}", service_name, day, time)
    };

    view! {
        <div class="w-full max-w-md mx-auto space-y-4">
            <div class="text-center space-y-1">
                <h1 class="text-2xl font-bold">"Book an Appointment"</h1>
                <p class="text-gray-500 text-sm">"Demo preview of what your clients will see"</p>
            </div>

            <div class="bg-gray-800 rounded-xl p-6 space-y-4">
                {move || match phase.get() {
                    BookingPhase::Service => view! {
                        <h2 class="font-semibold">"Choose a service"</h2>
                        <div class="space-y-2">
                            {DEMO_SERVICES.iter().enumerate().map(|(i, (title, duration, price))| view! {
                                <button
                                    type="button"
                                    on:click=move |_| {
                                        set_service.set(Some(i));
                                        set_phase.set(BookingPhase::Slot);
                                    }
                                    class="w-full flex justify-between items-center px-4 py-3
                                           bg-gray-700 hover:bg-gray-600 rounded-lg transition-colors"
                                >
                                    <span>{*title}</span>
                                    <span class="text-gray-400 text-sm">{format!("{} · {}", duration, price)}</span>
                                </button>
                            }).collect_view()}
                        </div>
                    }.into_view(),
                    BookingPhase::Slot => view! {
                        <h2 class="font-semibold">"Pick a time"</h2>
                        <div class="flex gap-2 overflow-x-auto pb-1">
                            {DEMO_DATES.iter().enumerate().map(|(i, label)| view! {
                                <button
                                    type="button"
                                    on:click=move |_| set_date.set(Some(i))
                                    class=move || if date.get() == Some(i) {
                                        "px-3 py-2 bg-primary-600 rounded-lg text-sm whitespace-nowrap"
                                    } else {
                                        "px-3 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm whitespace-nowrap"
                                    }
                                >
                                    {*label}
                                </button>
                            }).collect_view()}
                        </div>
                        <div class="grid grid-cols-3 gap-2">
                            {DEMO_SLOTS.iter().enumerate().map(|(i, time)| view! {
                                <button
                                    type="button"
                                    on:click=move |_| set_slot.set(Some(i))
                                    class=move || if slot.get() == Some(i) {
                                        "py-2 bg-primary-600 rounded-lg text-sm"
                                    } else {
                                        "py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm"
                                    }
                                >
                                    {*time}
                                </button>
                            }).collect_view()}
                        </div>
                        <div class="flex gap-2 pt-2">
                            <button
                                type="button"
                                on:click=move |_| set_phase.set(BookingPhase::Service)
                                class="w-1/3 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg transition-colors"
                            >
                                "Back"
                            </button>
                            <button
                                type="button"
                                disabled=move || date.get().is_none() || slot.get().is_none()
                                on:click=move |_| set_phase.set(BookingPhase::Contact)
                                class="flex-1 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                                       rounded-lg font-medium transition-colors"
                            >
                                "Next"
                            </button>
                        </div>
                    }.into_view(),
                    BookingPhase::Contact => view! {
                        <h2 class="font-semibold">"Your details"</h2>
                        <p class="text-gray-400 text-sm">{summary()}</p>
                        <input
                            type="text"
                            placeholder="Name"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            class="w-full px-3 py-2 bg-gray-700 rounded-lg focus:outline-none
                                   focus:ring-2 focus:ring-primary-500"
                        />
                        <input
                            type="tel"
                            placeholder="Phone"
                            prop:value=move || phone.get()
                            on:input=move |ev| set_phone.set(event_target_value(&ev))
                            class="w-full px-3 py-2 bg-gray-700 rounded-lg focus:outline-none
                                   focus:ring-2 focus:ring-primary-500"
                        />
                        <div class="flex gap-2 pt-2">
                            <button
                                type="button"
                                on:click=move |_| set_phase.set(BookingPhase::Slot)
                                class="w-1/3 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg transition-colors"
                            >
                                "Back"
                            </button>
                            <button
                                type="button"
                                disabled=move || name.get().trim().is_empty() || phone.get().trim().is_empty()
                                on:click=move |_| set_phase.set(BookingPhase::Done)
                                class="flex-1 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                                       rounded-lg font-medium transition-colors"
                            >
                                "Confirm Booking"
                            </button>
                        </div>
                    }.into_view(),
                    BookingPhase::Done => view! {
                        <div class="text-center space-y-3 py-4">
                            <div class="text-5xl">"🎉"</div>
                            <h2 class="text-xl font-bold text-green-400">"Booking Confirmed"</h2>
                            <p class="text-gray-300">{summary()}</p>
                            <p class="text-gray-500 text-sm">
                                {move || format!("A confirmation will be sent to {}", phone.get())}
                            </p>
                        </div>
                    }.into_view(),
                }}
            </div>
        </div>
    }
}
