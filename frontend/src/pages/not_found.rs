use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

/// Fallback for unknown client routes. Sponsors live on the calendar, so
/// both ways back lead there or to the add form.
#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="container empty-state">
            <h2>{ "No such sponsor page" }</h2>
            <p>{ "Sponsors are listed on the calendar by date." }</p>
            <ul class="not-found-links">
                <li>
                    <Link<Route> to={Route::Home}>{ "Open the sponsor calendar" }</Link<Route>>
                </li>
                <li>
                    <Link<Route> to={Route::AddSponsor}>{ "Add a new sponsor" }</Link<Route>>
                </li>
            </ul>
        </section>
    }
}
