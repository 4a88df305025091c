use crate::models::CalendarEvent;
use crate::permissions::Capability;

pub const MISSING_VALUE: &str = "N/A";

/// One labelled line of the event detail dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
}

impl DetailField {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Lines shown for an activated event. Name and date are always present;
/// contact details only when the capability allows them.
pub fn detail_fields(event: &CalendarEvent, capability: Capability) -> Vec<DetailField> {
    let mut fields = vec![
        DetailField::new("Name", event.title.clone()),
        DetailField::new("Date", event.start_str()),
    ];

    if capability.can_view_contact() {
        let props = &event.extended_props;
        fields.push(DetailField::new("Phone", or_missing(props.phone.as_deref())));
        fields.push(DetailField::new("Email", or_missing(props.email.as_deref())));
    }

    fields
}

pub fn or_missing(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => MISSING_VALUE,
    }
}
