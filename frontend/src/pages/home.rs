use shared::CalendarEvent;
use yew::prelude::*;

use crate::adapter::{open_event_detail, sponsor_event_source};
use crate::components::calendar::Calendar;
use crate::components::search_panel::SearchPanel;
use crate::components::sponsor_modal::SponsorModal;
use crate::context::use_app_context;

#[function_component(Home)]
pub fn home() -> Html {
    let context = use_app_context();
    let selected = use_state(|| None::<CalendarEvent>);

    let events = sponsor_event_source(context.api.clone());
    let on_event_click = open_event_detail(selected.clone());

    let close_modal = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };

    html! {
        <div class="container">
            <div id="calendar">
                <Calendar events={events} on_event_click={on_event_click} />
            </div>
            <SearchPanel capability={context.capability} api={context.api.clone()} />
            if let Some(event) = (*selected).clone() {
                <SponsorModal event={event} capability={context.capability} on_close={close_modal} />
            }
        </div>
    }
}
