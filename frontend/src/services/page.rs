use shared::Capability;
use wasm_bindgen::JsValue;

/// Reads the privilege flag from the page `<body>`.
pub fn read_capability(attribute: &str) -> Capability {
    let value = gloo::utils::document()
        .body()
        .and_then(|body| body.get_attribute(attribute));
    let capability = Capability::from_attribute(value.as_deref());

    tracing::debug!(
        attribute,
        value = ?value,
        privileged = capability.is_privileged(),
        "Read capability flag"
    );

    capability
}

/// Full-page navigation, leaving the single page app.
pub fn navigate(path: &str) {
    tracing::info!(path, "Navigating away from the calendar");
    let result: Result<(), JsValue> = gloo::utils::window().location().set_href(path);
    if let Err(e) = result {
        tracing::error!("Failed to navigate to {}: {:?}", path, e);
    }
}
