use shared::detail::detail_fields;
use shared::{CalendarEvent, Capability};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SponsorModalProps {
    pub event: CalendarEvent,
    pub capability: Capability,
    pub on_close: Callback<()>,
}

/// Detail dialog for an activated sponsor event. Contact fields are only
/// rendered when the capability allows them.
#[function_component(SponsorModal)]
pub fn sponsor_modal(props: &SponsorModalProps) -> Html {
    let close_modal = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-overlay" onclick={close_modal.clone()}>
            <div class="modal-content" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <div class="modal-header">
                    <h3>{ "Sponsor Details" }</h3>
                    <button class="modal-close" onclick={close_modal}>{ "x" }</button>
                </div>
                <div class="modal-body" id="sponsorModalBody">
                    { for detail_fields(&props.event, props.capability).into_iter().map(|field| html! {
                        <p>
                            <strong>{ format!("{}:", field.label) }</strong>
                            { " " }
                            { field.value }
                        </p>
                    })}
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use std::time::Duration;

    use chrono::NaiveDate;
    use shared::EventProps;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn acme_event() -> CalendarEvent {
        CalendarEvent {
            title: "Acme".to_string(),
            start: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            extended_props: EventProps {
                id: 1,
                phone: Some("555-1234".to_string()),
                email: Some("a@acme.com".to_string()),
            },
        }
    }

    async fn render_dialog(capability: Capability) -> String {
        let root = gloo::utils::document().create_element("div").unwrap();
        let props = SponsorModalProps {
            event: acme_event(),
            capability,
            on_close: Callback::noop(),
        };
        yew::Renderer::<SponsorModal>::with_root_and_props(root.clone(), props).render();
        yew::platform::time::sleep(Duration::ZERO).await;
        root.inner_html()
    }

    #[wasm_bindgen_test]
    async fn test_privileged_dialog_shows_contact() {
        let html = render_dialog(Capability::PRIVILEGED).await;
        assert!(html.contains("Acme"));
        assert!(html.contains("2024-01-15"));
        assert!(html.contains("555-1234"));
        assert!(html.contains("a@acme.com"));
    }

    #[wasm_bindgen_test]
    async fn test_standard_dialog_hides_contact() {
        let html = render_dialog(Capability::STANDARD).await;
        assert!(html.contains("Acme"));
        assert!(html.contains("2024-01-15"));
        assert!(!html.contains("555-1234"));
        assert!(!html.contains("a@acme.com"));
    }
}
