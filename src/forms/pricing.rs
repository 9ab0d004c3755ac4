//! Pricing Form
//!
//! Priced-service editor for the pricing step. Rows of service name,
//! duration and price plus a currency selector; at least one blank row is
//! always present so the user has something to fill in.

use leptos::*;

use crate::api::{ApiClient, BusinessInfoPatch};
use crate::forms::draft::FormDraft;
use crate::state::session::{Profile, Service, SessionState};

/// Currency data with symbols
pub const CURRENCIES: [(&str, &str, &str); 6] = [
    ("USD", "$", "US Dollar"),
    ("EUR", "€", "Euro"),
    ("RUB", "₽", "Russian Ruble"),
    ("ILS", "₪", "Israeli Shekel"),
    ("GBP", "£", "British Pound"),
    ("JPY", "¥", "Japanese Yen"),
];

/// Symbol for a currency code; defaults to "$" for unknown codes
pub fn currency_symbol(code: &str) -> &'static str {
    CURRENCIES
        .iter()
        .find(|(c, _, _)| *c == code)
        .map(|(_, symbol, _)| *symbol)
        .unwrap_or("$")
}

/// One editable service row; all fields are strings until save-time coercion
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PriceItem {
    pub service_name: String,
    pub duration: String,
    pub price: String,
}

/// Draft state of the pricing step
#[derive(Clone, Debug, PartialEq)]
pub struct PricingDraft {
    pub currency: String,
    pub items: Vec<PriceItem>,
}

impl PricingDraft {
    /// Seed from the session profile slice, or one blank row when no
    /// services exist yet
    pub fn seed(profile: Option<&Profile>) -> Self {
        let services = profile
            .map(|p| p.business_info.services.as_slice())
            .unwrap_or_default();

        if services.is_empty() {
            return Self {
                currency: "USD".to_string(),
                items: vec![PriceItem::default()],
            };
        }

        Self {
            currency: services[0].currency.clone(),
            items: services
                .iter()
                .map(|s| PriceItem {
                    service_name: s.name.clone(),
                    duration: s.duration.clone(),
                    price: format_price(s.price),
                })
                .collect(),
        }
    }
}

/// Keep only digits and the decimal point in a price input
pub fn sanitize_price(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

/// Render a stored price without a trailing ".0" for whole amounts
fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{}", price as i64)
    } else {
        format!("{}", price)
    }
}

/// Transform the draft into the API's service list.
///
/// A row counts as complete when all three fields are filled and the price
/// parses as a number; incomplete rows are skipped. Zero complete rows is a
/// validation error and must not reach the network.
pub fn validate_services(draft: &PricingDraft) -> Result<Vec<Service>, String> {
    let services: Vec<Service> = draft
        .items
        .iter()
        .filter_map(|item| {
            let name = item.service_name.trim();
            let duration = item.duration.trim();
            let price: f64 = item.price.trim().parse().ok()?;
            if name.is_empty() || duration.is_empty() {
                return None;
            }
            Some(Service {
                name: name.to_string(),
                duration: duration.to_string(),
                price,
                currency: draft.currency.clone(),
            })
        })
        .collect();

    if services.is_empty() {
        return Err("Fill out all the fields for at least one service".to_string());
    }
    Ok(services)
}

/// Pricing step form
#[component]
pub fn PricingForm(
    #[prop(into)] on_next: Callback<()>,
    #[prop(into)] on_back: Callback<()>,
) -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");
    let api = use_context::<ApiClient>().expect("ApiClient not found");

    let form = create_rw_signal(FormDraft::new(PricingDraft::seed(
        session.profile.get_untracked().as_ref(),
    )));
    let clean = create_memo(move |_| form.with(|f| f.is_clean()));
    let (saving, set_saving) = create_signal(false);

    let add_row = move |_| {
        form.update(|f| f.edit(|d| d.items.push(PriceItem::default())));
    };

    let save = move |_| {
        let draft = form.with_untracked(|f| f.draft.clone());
        let services = match validate_services(&draft) {
            Ok(services) => services,
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
                services: Some(services),
                ..Default::default()
            };
            match api.update_business_info(&user_id, &patch).await {
                Ok(()) => {
                    form.update(|f| f.commit_saved());
                    session.show_success("Pricing saved");
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
            // Currency selection
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Currency"</label>
                <select
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.edit(|d| d.currency = value));
                    }
                    prop:value=move || form.with(|f| f.draft.currency.clone())
                    class="w-full sm:w-52 bg-gray-700 rounded-lg px-4 py-3 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                >
                    {CURRENCIES.into_iter().map(|(code, symbol, name)| view! {
                        <option value=code>{format!("{} - {}", symbol, name)}</option>
                    }).collect_view()}
                </select>
            </div>

            // Service rows
            <div class="space-y-4">
                {move || {
                    let count = form.with(|f| f.draft.items.len());
                    form.with(|f| f.draft.items.clone())
                        .into_iter()
                        .enumerate()
                        .map(|(idx, item)| view! {
                            <ServiceRow item=item index=idx form=form removable={count > 1} />
                        })
                        .collect_view()
                }}
            </div>

            <button
                type="button"
                on:click=add_row
                class="w-full py-3 border border-dashed border-gray-600 hover:border-gray-400
                       rounded-lg text-gray-400 hover:text-white transition-colors"
            >
                "+ Add Service"
            </button>

            // Save while dirty, Next while clean; never both
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
                                {move || if saving.get() { "Saving..." } else { "Save Pricing" }}
                            </button>
                        }.into_view()
                    }
                }}
            </div>
        </div>
    }
}

/// One editable service row
#[component]
fn ServiceRow(
    item: PriceItem,
    index: usize,
    form: RwSignal<FormDraft<PricingDraft>>,
    removable: bool,
) -> impl IntoView {
    let symbol = move || form.with(|f| currency_symbol(&f.draft.currency));

    view! {
        <div class="p-4 bg-gray-800 rounded-lg border border-gray-700">
            <div class="grid grid-cols-1 gap-4 sm:grid-cols-3">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Service Name"</label>
                    <input
                        type="text"
                        placeholder="e.g. Haircut"
                        prop:value=item.service_name
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.edit(|d| d.items[index].service_name = value));
                        }
                        class="w-full bg-gray-700 rounded-lg px-3 py-2
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Duration"</label>
                    <input
                        type="text"
                        placeholder="e.g. 30 min"
                        prop:value=item.duration
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.edit(|d| d.items[index].duration = value));
                        }
                        class="w-full bg-gray-700 rounded-lg px-3 py-2
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Price"</label>
                    <div class="relative">
                        <span class="absolute left-3 top-2 text-gray-400">{symbol}</span>
                        <input
                            type="text"
                            inputmode="decimal"
                            placeholder="0.00"
                            prop:value=item.price
                            on:input=move |ev| {
                                let value = sanitize_price(&event_target_value(&ev));
                                form.update(|f| f.edit(|d| d.items[index].price = value));
                            }
                            class="w-full bg-gray-700 rounded-lg pl-8 pr-3 py-2
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>
                </div>
            </div>
            {removable.then(|| view! {
                <button
                    type="button"
                    on:click=move |_| {
                        form.update(|f| f.edit(|d| {
                            if d.items.len() > 1 {
                                d.items.remove(index);
                            }
                        }));
                    }
                    class="mt-2 text-sm text-red-400 hover:text-red-300"
                >
                    "Remove"
                </button>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::session::{BusinessInfo, UserAccount};

    fn profile_with_services(services: Vec<Service>) -> Profile {
        Profile {
            user: UserAccount {
                id: "u-1".to_string(),
                email: "owner@example.com".to_string(),
                name: None,
            },
            business_info: BusinessInfo {
                services,
                ..Default::default()
            },
        }
    }

    #[test]
    fn seed_without_profile_yields_one_blank_row() {
        let draft = PricingDraft::seed(None);
        assert_eq!(draft.items, vec![PriceItem::default()]);
        assert_eq!(draft.currency, "USD");
    }

    #[test]
    fn seed_from_profile_restores_rows_and_currency() {
        let profile = profile_with_services(vec![Service {
            name: "Haircut".to_string(),
            duration: "30 min".to_string(),
            price: 50.0,
            currency: "EUR".to_string(),
        }]);
        let draft = PricingDraft::seed(Some(&profile));
        assert_eq!(draft.currency, "EUR");
        assert_eq!(draft.items.len(), 1);
        assert_eq!(draft.items[0].price, "50");
    }

    #[test]
    fn sanitize_strips_everything_but_digits_and_dot() {
        assert_eq!(sanitize_price("$55.50"), "55.50");
        assert_eq!(sanitize_price("abc"), "");
        assert_eq!(sanitize_price("1 200"), "1200");
    }

    #[test]
    fn validate_rejects_when_no_row_is_complete() {
        let draft = PricingDraft {
            currency: "USD".to_string(),
            items: vec![
                PriceItem::default(),
                PriceItem {
                    service_name: "Haircut".to_string(),
                    duration: String::new(),
                    price: "50".to_string(),
                },
            ],
        };
        assert!(validate_services(&draft).is_err());
    }

    #[test]
    fn validate_coerces_price_and_attaches_currency() {
        let draft = PricingDraft {
            currency: "USD".to_string(),
            items: vec![PriceItem {
                service_name: "Haircut".to_string(),
                duration: "30 min".to_string(),
                price: "55".to_string(),
            }],
        };
        let services = validate_services(&draft).unwrap();
        assert_eq!(
            services,
            vec![Service {
                name: "Haircut".to_string(),
                duration: "30 min".to_string(),
                price: 55.0,
                currency: "USD".to_string(),
            }]
        );
    }

    #[test]
    fn validate_skips_incomplete_rows_but_keeps_complete_ones() {
        let draft = PricingDraft {
            currency: "ILS".to_string(),
            items: vec![
                PriceItem {
                    service_name: "Styling".to_string(),
                    duration: "45 min".to_string(),
                    price: "65".to_string(),
                },
                PriceItem::default(),
            ],
        };
        let services = validate_services(&draft).unwrap();
        assert_eq!(services.len(), 1);
        assert_eq!(services[0].name, "Styling");
    }

    #[test]
    fn unparsable_price_makes_a_row_incomplete() {
        let draft = PricingDraft {
            currency: "USD".to_string(),
            items: vec![PriceItem {
                service_name: "Haircut".to_string(),
                duration: "30 min".to_string(),
                price: "..".to_string(),
            }],
        };
        assert!(validate_services(&draft).is_err());
    }
}
