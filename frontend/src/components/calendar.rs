//! Day-grid month calendar.
//!
//! The widget knows nothing about sponsors: it asks its `events` source for
//! the visible range and renders whatever comes back. Each request carries a
//! generation ticket, so a slow response for a month the user already left
//! is dropped instead of overwriting the newer render.

use chrono::{Datelike, Local, NaiveDate};
use shared::calendar::{events_on, first_of_month, shift_month, WEEKDAY_LABELS};
use shared::{ApiError, CalendarEvent, RequestGeneration, VisibleRange};
use yew::prelude::*;

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load sponsors.";

/// One request from the calendar to its event source.
pub struct EventSourceRequest {
    pub range: VisibleRange,
    pub success: Callback<Vec<CalendarEvent>>,
    pub failure: Callback<ApiError>,
}

#[derive(Properties, PartialEq)]
pub struct CalendarProps {
    pub events: Callback<EventSourceRequest>,
    pub on_event_click: Callback<CalendarEvent>,
    #[prop_or_default]
    pub initial_date: Option<NaiveDate>,
}

#[derive(Clone, Copy, PartialEq)]
enum LoadState {
    Loading,
    Ready,
    Failed,
}

#[function_component(Calendar)]
pub fn calendar(props: &CalendarProps) -> Html {
    let today = Local::now().date_naive();
    let focus = {
        let initial = props.initial_date.unwrap_or(today);
        use_state(move || first_of_month(initial))
    };
    let events = use_state(Vec::<CalendarEvent>::new);
    let load_state = use_state(|| LoadState::Loading);
    let generation = use_mut_ref(RequestGeneration::default);

    // Request events whenever the visible month changes
    {
        let events = events.clone();
        let load_state = load_state.clone();
        let generation = generation.clone();
        let source = props.events.clone();

        use_effect_with(*focus, move |focus| {
            let range = VisibleRange::month_grid(*focus);
            let ticket = generation.borrow_mut().issue();
            load_state.set(LoadState::Loading);

            let success = {
                let generation = generation.clone();
                let events = events.clone();
                let load_state = load_state.clone();
                Callback::from(move |fetched: Vec<CalendarEvent>| {
                    if !generation.borrow().is_current(ticket) {
                        tracing::debug!("Discarding stale calendar response");
                        return;
                    }
                    events.set(fetched);
                    load_state.set(LoadState::Ready);
                })
            };

            let failure = Callback::from(move |_: ApiError| {
                if !generation.borrow().is_current(ticket) {
                    return;
                }
                events.set(Vec::new());
                load_state.set(LoadState::Failed);
            });

            source.emit(EventSourceRequest {
                range,
                success,
                failure,
            });
            || ()
        });
    }

    let on_prev = {
        let focus = focus.clone();
        Callback::from(move |_| focus.set(shift_month(*focus, -1)))
    };

    let on_next = {
        let focus = focus.clone();
        Callback::from(move |_| focus.set(shift_month(*focus, 1)))
    };

    let on_today = {
        let focus = focus.clone();
        Callback::from(move |_| focus.set(first_of_month(today)))
    };

    let range = VisibleRange::month_grid(*focus);
    let month = focus.month();

    html! {
        <div class="calendar">
            <div class="calendar-toolbar">
                <div class="calendar-nav">
                    <button type="button" class="btn btn-secondary" onclick={on_prev}>{ "<" }</button>
                    <button type="button" class="btn btn-secondary" onclick={on_today}>{ "Today" }</button>
                    <button type="button" class="btn btn-secondary" onclick={on_next}>{ ">" }</button>
                </div>
                <h2 class="calendar-title">{ focus.format("%B %Y").to_string() }</h2>
            </div>
            if *load_state == LoadState::Loading {
                <div class="loading">
                    <div class="spinner"></div>
                </div>
            }
            if *load_state == LoadState::Failed {
                <p class="error">{ LOAD_FAILED_MESSAGE }</p>
            }
            <table class="calendar-grid">
                <thead>
                    <tr>
                        { for WEEKDAY_LABELS.iter().map(|label| html! { <th>{ *label }</th> }) }
                    </tr>
                </thead>
                <tbody>
                    { for range.weeks().into_iter().map(|week| html! {
                        <tr>
                            { for week.into_iter().map(|day| {
                                render_day(day, month, today, &events, &props.on_event_click)
                            })}
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}

fn render_day(
    day: NaiveDate,
    month: u32,
    today: NaiveDate,
    events: &[CalendarEvent],
    on_event_click: &Callback<CalendarEvent>,
) -> Html {
    let class = classes!(
        "calendar-day",
        (day.month() != month).then_some("calendar-day-other"),
        (day == today).then_some("calendar-day-today")
    );

    html! {
        <td class={class}>
            <div class="calendar-day-number">{ day.day().to_string() }</div>
            { for events_on(events, day).map(|event| {
                let on_click = {
                    let event = event.clone();
                    let on_event_click = on_event_click.clone();
                    Callback::from(move |_: MouseEvent| on_event_click.emit(event.clone()))
                };

                html! {
                    <button type="button" class="calendar-event" title={event.title.clone()} onclick={on_click}>
                        { &event.title }
                    </button>
                }
            })}
        </td>
    }
}
