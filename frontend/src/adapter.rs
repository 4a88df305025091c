//! Glue between the sponsor data client and the calendar widget.

use shared::calendar::to_calendar_events;
use shared::{ApiError, CalendarEvent, Sponsor};
use yew::prelude::*;

use crate::components::calendar::EventSourceRequest;
use crate::services::api::ApiService;

/// Event source for the calendar widget backed by `/get_sponsors`.
pub fn sponsor_event_source(api: ApiService) -> Callback<EventSourceRequest> {
    Callback::from(move |request: EventSourceRequest| {
        let api = api.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = api.fetch_events_in_range(&request.range).await;
            tracing::debug!(
                start = %request.range.start,
                end = %request.range.end,
                ok = result.is_ok(),
                "Sponsor range fetch finished"
            );
            deliver(result, &request.success, &request.failure);
        });
    })
}

/// Hands a finished range fetch to exactly one of the widget callbacks.
pub fn deliver(
    result: Result<Vec<Sponsor>, ApiError>,
    success: &Callback<Vec<CalendarEvent>>,
    failure: &Callback<ApiError>,
) {
    match result {
        Ok(sponsors) => success.emit(to_calendar_events(sponsors)),
        Err(e) => {
            tracing::error!("Error fetching sponsors: {}", e);
            failure.emit(e);
        }
    }
}

/// Activation handler that opens the detail dialog for the clicked event.
pub fn open_event_detail(selected: UseStateHandle<Option<CalendarEvent>>) -> Callback<CalendarEvent> {
    Callback::from(move |event: CalendarEvent| {
        tracing::debug!(sponsor_id = event.extended_props.id, "Event activated");
        selected.set(Some(event));
    })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use chrono::NaiveDate;
    use shared::api::Endpoint;
    use shared::AppConfig;

    use super::*;
    use crate::services::api::handle_status;

    type Recorded<T> = Rc<RefCell<Vec<T>>>;

    fn recording<T: 'static>() -> (Recorded<T>, Callback<T>) {
        let seen: Recorded<T> = Rc::default();
        let callback = {
            let seen = seen.clone();
            Callback::from(move |value: T| seen.borrow_mut().push(value))
        };
        (seen, callback)
    }

    fn acme() -> Sponsor {
        Sponsor {
            id: 1,
            name: "Acme".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            phone: Some("555-1234".to_string()),
            email: Some("a@acme.com".to_string()),
        }
    }

    #[test]
    fn test_success_maps_every_sponsor() {
        let (delivered, success) = recording::<Vec<CalendarEvent>>();
        let (failed, failure) = recording::<ApiError>();

        deliver(Ok(vec![acme()]), &success, &failure);

        let delivered = delivered.borrow();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].len(), 1);
        assert_eq!(delivered[0][0].title, "Acme");
        assert_eq!(delivered[0][0].start_str(), "2024-01-15");
        assert!(failed.borrow().is_empty());
    }

    #[test]
    fn test_unauthorized_redirects_and_only_fails() {
        let config = AppConfig::default();
        let navigated = RefCell::new(Vec::<String>::new());

        let status = handle_status(&config, Endpoint::SponsorsInRange, 401, |path| {
            navigated.borrow_mut().push(path.to_string())
        });
        assert_eq!(status, Err(ApiError::Unauthorized));
        assert_eq!(*navigated.borrow(), vec!["/login".to_string()]);

        let (delivered, success) = recording::<Vec<CalendarEvent>>();
        let (failed, failure) = recording::<ApiError>();
        deliver(status.map(|()| vec![acme()]), &success, &failure);

        assert!(delivered.borrow().is_empty());
        assert_eq!(*failed.borrow(), vec![ApiError::Unauthorized]);
    }

    #[test]
    fn test_generic_failure_does_not_redirect() {
        let config = AppConfig::default();
        let navigated = RefCell::new(Vec::<String>::new());

        let status = handle_status(&config, Endpoint::SponsorsInRange, 500, |path| {
            navigated.borrow_mut().push(path.to_string())
        });

        assert_eq!(status, Err(ApiError::Status(500)));
        assert!(navigated.borrow().is_empty());
    }

    #[test]
    fn test_forbidden_search_does_not_redirect() {
        let config = AppConfig::default();
        let navigated = RefCell::new(Vec::<String>::new());

        let status = handle_status(&config, Endpoint::SearchSponsors, 403, |path| {
            navigated.borrow_mut().push(path.to_string())
        });

        assert_eq!(status, Err(ApiError::Forbidden));
        assert!(navigated.borrow().is_empty());
    }
}
