//! Schedule Form
//!
//! Weekly schedule editor: per-day working hours and break time, with a
//! day-off toggle. Times are half-hour options between 8:00 and 22:00.

use leptos::*;

use crate::api::{ApiClient, BusinessInfoPatch};
use crate::forms::draft::FormDraft;
use crate::state::session::{DaySchedule, Profile, SessionState, WeekSchedule};

/// Weekday keys in wizard order, matching the API's schedule object
pub const WEEKDAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Sentinel meaning "no break" in the break selectors
pub const NO_BREAK: &str = "Off";

/// Half-hour time options from 8:00 to 22:00
pub fn time_options() -> Vec<String> {
    let mut options = Vec::new();
    for hour in 8..=22 {
        options.push(format!("{}:00", hour));
        if hour < 22 {
            options.push(format!("{}:30", hour));
        }
    }
    options
}

/// One editable day of the week
#[derive(Clone, Debug, PartialEq)]
pub struct DayDraft {
    pub day_off: bool,
    pub work_start: String,
    pub work_end: String,
    /// `NO_BREAK` when the day has no break
    pub break_start: String,
    pub break_end: String,
}

impl Default for DayDraft {
    fn default() -> Self {
        Self {
            day_off: false,
            work_start: "9:00".to_string(),
            work_end: "18:00".to_string(),
            break_start: "13:00".to_string(),
            break_end: "14:00".to_string(),
        }
    }
}

/// Draft state of the schedule step: seven days aligned with `WEEKDAYS`
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduleDraft {
    pub days: Vec<DayDraft>,
}

impl ScheduleDraft {
    /// Seed from the profile's work schedule, or the default week
    pub fn seed(profile: Option<&Profile>) -> Self {
        let stored = profile.and_then(|p| p.business_info.work_schedule.as_ref());

        let days = WEEKDAYS
            .iter()
            .map(|weekday| {
                stored
                    .and_then(|schedule| schedule.get(*weekday))
                    .map(day_draft_from_stored)
                    .unwrap_or_default()
            })
            .collect();

        Self { days }
    }
}

fn day_draft_from_stored(day: &DaySchedule) -> DayDraft {
    let defaults = DayDraft::default();
    DayDraft {
        day_off: day.day_off,
        work_start: day.work_start.clone().unwrap_or(defaults.work_start),
        work_end: day.work_end.clone().unwrap_or(defaults.work_end),
        break_start: day
            .break_start
            .clone()
            .unwrap_or_else(|| NO_BREAK.to_string()),
        break_end: day.break_end.clone().unwrap_or(defaults.break_end),
    }
}

/// Parse "H:MM" into minutes since midnight
pub fn parse_time(time: &str) -> Option<u32> {
    let (hours, minutes) = time.split_once(':')?;
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// Transform the draft into the API's schedule object.
///
/// Every working day must have start before end (same for a configured
/// break), and at least one day must be a work day.
pub fn validate_schedule(draft: &ScheduleDraft) -> Result<WeekSchedule, String> {
    let mut schedule = WeekSchedule::new();
    let mut work_days = 0;

    for (weekday, day) in WEEKDAYS.iter().zip(&draft.days) {
        if day.day_off {
            schedule.insert(
                weekday.to_string(),
                DaySchedule {
                    day_off: true,
                    ..Default::default()
                },
            );
            continue;
        }
        work_days += 1;

        let start = parse_time(&day.work_start)
            .ok_or_else(|| format!("Invalid start time on {}", weekday))?;
        let end =
            parse_time(&day.work_end).ok_or_else(|| format!("Invalid end time on {}", weekday))?;
        if start >= end {
            return Err(format!("Working hours on {} must start before they end", weekday));
        }

        let (break_start, break_end) = if day.break_start == NO_BREAK {
            (None, None)
        } else {
            let bs = parse_time(&day.break_start)
                .ok_or_else(|| format!("Invalid break start on {}", weekday))?;
            let be = parse_time(&day.break_end)
                .ok_or_else(|| format!("Invalid break end on {}", weekday))?;
            if bs >= be {
                return Err(format!("Break on {} must start before it ends", weekday));
            }
            (Some(day.break_start.clone()), Some(day.break_end.clone()))
        };

        schedule.insert(
            weekday.to_string(),
            DaySchedule {
                day_off: false,
                work_start: Some(day.work_start.clone()),
                work_end: Some(day.work_end.clone()),
                break_start,
                break_end,
            },
        );
    }

    if work_days == 0 {
        return Err("Mark at least one day as a work day".to_string());
    }
    Ok(schedule)
}

/// Schedule step form
#[component]
pub fn ScheduleForm(
    #[prop(into)] on_next: Callback<()>,
    #[prop(into)] on_back: Callback<()>,
) -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");
    let api = use_context::<ApiClient>().expect("ApiClient not found");

    let form = create_rw_signal(FormDraft::new(ScheduleDraft::seed(
        session.profile.get_untracked().as_ref(),
    )));
    let clean = create_memo(move |_| form.with(|f| f.is_clean()));
    let (saving, set_saving) = create_signal(false);

    let save = move |_| {
        let draft = form.with_untracked(|f| f.draft.clone());
        let schedule = match validate_schedule(&draft) {
            Ok(schedule) => schedule,
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
                work_schedule: Some(schedule),
                ..Default::default()
            };
            match api.update_business_info(&user_id, &patch).await {
                Ok(()) => {
                    form.update(|f| f.commit_saved());
                    session.show_success("Schedule saved");
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
            <div class="space-y-4">
                {WEEKDAYS.iter().enumerate().map(|(idx, weekday)| view! {
                    <DayRow weekday=weekday index=idx form=form />
                }).collect_view()}
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
                                {move || if saving.get() { "Saving..." } else { "Save Schedule" }}
                            </button>
                        }.into_view()
                    }
                }}
            </div>
        </div>
    }
}

/// One day's schedule controls
#[component]
fn DayRow(
    weekday: &'static str,
    index: usize,
    form: RwSignal<FormDraft<ScheduleDraft>>,
) -> impl IntoView {
    let day = create_memo(move |_| form.with(|f| f.draft.days[index].clone()));

    let label = {
        let mut chars = weekday.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    };

    view! {
        <div class="p-4 bg-gray-800 rounded-lg border border-gray-700">
            <div class="flex items-center justify-between">
                <span class="font-medium">{label}</span>
                <button
                    type="button"
                    on:click=move |_| {
                        form.update(|f| f.edit(|d| d.days[index].day_off = !d.days[index].day_off));
                    }
                    class=move || {
                        if day.get().day_off {
                            "px-3 py-1 bg-red-600 hover:bg-red-500 rounded text-sm transition-colors"
                        } else {
                            "px-3 py-1 bg-gray-700 hover:bg-gray-600 text-red-400 rounded text-sm transition-colors"
                        }
                    }
                >
                    {move || if day.get().day_off { "Day Off" } else { "Set Day Off" }}
                </button>
            </div>

            {move || {
                if day.get().day_off {
                    view! {}.into_view()
                } else {
                    view! {
                        <div class="mt-3 grid grid-cols-1 gap-4 sm:grid-cols-2">
                            <div>
                                <span class="block text-sm text-gray-400 mb-2">"Working Hours"</span>
                                <div class="flex items-center space-x-2">
                                    <TimeSelect
                                        value=Signal::derive(move || day.get().work_start)
                                        allow_no_break=false
                                        on_change=move |v| form.update(|f| f.edit(|d| d.days[index].work_start = v))
                                    />
                                    <span>"-"</span>
                                    <TimeSelect
                                        value=Signal::derive(move || day.get().work_end)
                                        allow_no_break=false
                                        on_change=move |v| form.update(|f| f.edit(|d| d.days[index].work_end = v))
                                    />
                                </div>
                            </div>
                            <div>
                                <span class="block text-sm text-gray-400 mb-2">"Break Time"</span>
                                <div class="flex items-center space-x-2">
                                    <TimeSelect
                                        value=Signal::derive(move || day.get().break_start)
                                        allow_no_break=true
                                        on_change=move |v| form.update(|f| f.edit(|d| d.days[index].break_start = v))
                                    />
                                    {move || {
                                        if day.get().break_start == NO_BREAK {
                                            view! {}.into_view()
                                        } else {
                                            view! {
                                                <span>"-"</span>
                                                <TimeSelect
                                                    value=Signal::derive(move || day.get().break_end)
                                                    allow_no_break=false
                                                    on_change=move |v| form.update(|f| f.edit(|d| d.days[index].break_end = v))
                                                />
                                            }.into_view()
                                        }
                                    }}
                                </div>
                            </div>
                        </div>
                    }.into_view()
                }
            }}
        </div>
    }
}

/// Half-hour time selector; optionally offers the "no break" sentinel
#[component]
fn TimeSelect(
    #[prop(into)] value: Signal<String>,
    allow_no_break: bool,
    on_change: impl Fn(String) + 'static,
) -> impl IntoView {
    view! {
        <select
            on:change=move |ev| on_change(event_target_value(&ev))
            prop:value=move || value.get()
            class="bg-gray-700 rounded-lg px-3 py-2 text-sm
                   border border-gray-600 focus:border-primary-500 focus:outline-none"
        >
            {allow_no_break.then(|| view! {
                <option value=NO_BREAK>"No break"</option>
            })}
            {time_options().into_iter().map(|time| view! {
                <option value=time.clone()>{time.clone()}</option>
            }).collect_view()}
        </select>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::session::{BusinessInfo, UserAccount};

    fn working_week() -> ScheduleDraft {
        ScheduleDraft {
            days: vec![DayDraft::default(); 7],
        }
    }

    #[test]
    fn time_options_cover_the_working_day() {
        let options = time_options();
        assert_eq!(options.first().map(String::as_str), Some("8:00"));
        assert_eq!(options.last().map(String::as_str), Some("22:00"));
        assert_eq!(options.len(), 29);
    }

    #[test]
    fn parse_time_handles_half_hours() {
        assert_eq!(parse_time("9:00"), Some(540));
        assert_eq!(parse_time("13:30"), Some(810));
        assert_eq!(parse_time("Off"), None);
        assert_eq!(parse_time("25:00"), None);
    }

    #[test]
    fn default_week_validates() {
        let schedule = validate_schedule(&working_week()).unwrap();
        assert_eq!(schedule.len(), 7);
        let monday = &schedule["monday"];
        assert!(!monday.day_off);
        assert_eq!(monday.work_start.as_deref(), Some("9:00"));
        assert_eq!(monday.break_start.as_deref(), Some("13:00"));
    }

    #[test]
    fn day_off_entries_carry_no_hours() {
        let mut draft = working_week();
        draft.days[6].day_off = true;
        let schedule = validate_schedule(&draft).unwrap();
        let sunday = &schedule["sunday"];
        assert!(sunday.day_off);
        assert!(sunday.work_start.is_none());
        assert!(sunday.break_start.is_none());
    }

    #[test]
    fn no_break_clears_break_fields() {
        let mut draft = working_week();
        draft.days[5].break_start = NO_BREAK.to_string();
        let schedule = validate_schedule(&draft).unwrap();
        let saturday = &schedule["saturday"];
        assert!(saturday.break_start.is_none());
        assert!(saturday.break_end.is_none());
        assert_eq!(saturday.work_start.as_deref(), Some("9:00"));
    }

    #[test]
    fn inverted_hours_are_rejected() {
        let mut draft = working_week();
        draft.days[0].work_start = "18:00".to_string();
        draft.days[0].work_end = "9:00".to_string();
        assert!(validate_schedule(&draft).is_err());
    }

    #[test]
    fn a_week_of_days_off_is_rejected() {
        let mut draft = working_week();
        for day in &mut draft.days {
            day.day_off = true;
        }
        assert!(validate_schedule(&draft).is_err());
    }

    #[test]
    fn seed_roundtrips_through_the_wire_shape() {
        let mut draft = working_week();
        draft.days[2].break_start = NO_BREAK.to_string();
        draft.days[6].day_off = true;
        let schedule = validate_schedule(&draft).unwrap();

        let profile = Profile {
            user: UserAccount::default(),
            business_info: BusinessInfo {
                work_schedule: Some(schedule),
                ..Default::default()
            },
        };
        let reseeded = ScheduleDraft::seed(Some(&profile));
        assert_eq!(reseeded.days[2].break_start, NO_BREAK);
        assert!(reseeded.days[6].day_off);
        assert_eq!(reseeded.days[0], DayDraft::default());
    }
}
