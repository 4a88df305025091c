use std::rc::Rc;

use shared::detail::or_missing;
use shared::models::DATE_FORMAT;
use shared::search::{normalize_query, SearchResults};
use shared::{ApiError, Capability, RequestGeneration, Sponsor};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::api::ApiService;

#[derive(Properties, PartialEq)]
pub struct SearchPanelProps {
    pub capability: Capability,
    pub api: ApiService,
}

/// Sponsor search for privileged sessions. For everyone else nothing is
/// rendered, so the panel is absent from the page.
#[function_component(SearchPanel)]
pub fn search_panel(props: &SearchPanelProps) -> Html {
    if !props.capability.can_search() {
        tracing::debug!("Search panel not rendered for this session");
        return html! {};
    }

    html! { <SponsorSearch api={props.api.clone()} /> }
}

struct SearchState(SearchResults);

impl Reducible for SearchState {
    type Action = Result<Vec<Sponsor>, ApiError>;

    fn reduce(self: Rc<Self>, outcome: Self::Action) -> Rc<Self> {
        Rc::new(Self(self.0.clone().apply(outcome)))
    }
}

#[derive(Properties, PartialEq)]
struct SponsorSearchProps {
    api: ApiService,
}

#[function_component(SponsorSearch)]
fn sponsor_search(props: &SponsorSearchProps) -> Html {
    let query = use_state(String::new);
    let results = use_reducer(|| SearchState(SearchResults::Idle));
    let generation = use_mut_ref(RequestGeneration::default);

    let on_input = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let on_submit = {
        let query = query.clone();
        let results = results.clone();
        let api = props.api.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(query) = normalize_query(&query) else {
                return;
            };

            let ticket = generation.borrow_mut().issue();
            let generation = generation.clone();
            let results = results.clone();
            let api = api.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = api.search_sponsors(&query).await;
                if !generation.borrow().is_current(ticket) {
                    tracing::debug!(query = %query, "Discarding superseded search response");
                    return;
                }
                results.dispatch(outcome);
            });
        })
    };

    html! {
        <section id="searchSection" class="search-section">
            <h2>{ "Search Sponsors" }</h2>
            <form id="searchForm" class="search-form" onsubmit={on_submit}>
                <input
                    id="searchInput"
                    type="text"
                    placeholder="Name, phone or email"
                    value={(*query).clone()}
                    oninput={on_input}
                />
                <button type="submit" class="btn btn-primary">{ "Search" }</button>
            </form>
            <div id="searchResults" class="search-results">
                { render_results(&results.0) }
            </div>
        </section>
    }
}

fn render_results(results: &SearchResults) -> Html {
    if let Some(message) = results.message() {
        return html! { <p>{ message }</p> };
    }

    match results {
        SearchResults::Found(sponsors) => html! {
            <ul class="list-group">
                { for sponsors.iter().map(render_card) }
            </ul>
        },
        _ => html! {},
    }
}

fn render_card(sponsor: &Sponsor) -> Html {
    html! {
        <li class="list-group-item" key={sponsor.id.to_string()}>
            <h5>{ &sponsor.name }</h5>
            <p>{ format!("Date: {}", sponsor.date.format(DATE_FORMAT)) }</p>
            <p>{ format!("Phone: {}", or_missing(sponsor.phone.as_deref())) }</p>
            <p>{ format!("Email: {}", or_missing(sponsor.email.as_deref())) }</p>
        </li>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use std::time::Duration;

    use shared::AppConfig;
    use wasm_bindgen_test::*;
    use web_sys::Element;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    async fn render_panel(capability: Capability) -> Element {
        let root = gloo::utils::document().create_element("div").unwrap();
        let props = SearchPanelProps {
            capability,
            api: ApiService::new(Rc::new(AppConfig::default())),
        };
        yew::Renderer::<SearchPanel>::with_root_and_props(root.clone(), props).render();
        yew::platform::time::sleep(Duration::ZERO).await;
        root
    }

    #[wasm_bindgen_test]
    async fn test_panel_absent_for_standard_session() {
        let root = render_panel(Capability::STANDARD).await;
        assert!(root.query_selector("#searchSection").unwrap().is_none());
        assert!(root.query_selector("#searchForm").unwrap().is_none());
    }

    #[wasm_bindgen_test]
    async fn test_panel_present_for_privileged_session() {
        let root = render_panel(Capability::PRIVILEGED).await;
        assert!(root.query_selector("#searchSection").unwrap().is_some());
        assert!(root.query_selector("#searchInput").unwrap().is_some());
    }
}
