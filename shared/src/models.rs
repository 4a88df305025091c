use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::ApiError;

/// Date format used on the wire and in form bodies.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Sponsor record as returned by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sponsor {
    pub id: i64,
    pub name: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Fields of a sponsor that ride along with a calendar event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventProps {
    pub id: i64,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Calendar event derived from a sponsor record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub title: String,
    pub start: NaiveDate,
    pub extended_props: EventProps,
}

impl CalendarEvent {
    pub fn start_str(&self) -> String {
        self.start.format(DATE_FORMAT).to_string()
    }
}

impl From<Sponsor> for CalendarEvent {
    fn from(sponsor: Sponsor) -> Self {
        Self {
            title: sponsor.name,
            start: sponsor.date,
            extended_props: EventProps {
                id: sponsor.id,
                phone: sponsor.phone,
                email: sponsor.email,
            },
        }
    }
}

/// Payload of the add-sponsor form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewSponsor {
    #[validate(length(min = 1, max = 100, message = "Name must be 1 to 100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 20, message = "Phone must be 1 to 20 characters"))]
    pub phone: String,

    #[validate(
        email(message = "Email must be a valid address"),
        length(max = 120, message = "Email must be at most 120 characters")
    )]
    pub email: String,

    pub date: NaiveDate,
}

impl NewSponsor {
    const FIELDS: [&'static str; 3] = ["name", "phone", "email"];

    /// Human readable validation failures, in form field order.
    pub fn validation_messages(&self) -> Vec<String> {
        let Err(errors) = self.validate() else {
            return Vec::new();
        };
        let field_errors = errors.field_errors();
        Self::FIELDS
            .iter()
            .filter_map(|field| field_errors.get(field))
            .flat_map(|errs| errs.iter())
            .map(|err| match &err.message {
                Some(message) => message.to_string(),
                None => err.code.to_string(),
            })
            .collect()
    }

    pub fn check(&self) -> Result<(), ApiError> {
        let messages = self.validation_messages();
        if messages.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Validation(messages.join("; ")))
        }
    }

    /// Encodes the sponsor as an `application/x-www-form-urlencoded` body.
    pub fn to_form_body(&self) -> String {
        let date = self.date.format(DATE_FORMAT).to_string();
        [
            ("name", self.name.as_str()),
            ("phone", self.phone.as_str()),
            ("email", self.email.as_str()),
            ("date", date.as_str()),
        ]
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_sponsor_deserialize() {
        let json = r#"{"id":1,"name":"Acme","date":"2024-01-15","phone":"555-1234","email":"a@acme.com"}"#;
        let sponsor: Sponsor = serde_json::from_str(json).unwrap();
        assert_eq!(sponsor, acme());
    }

    #[test]
    fn test_sponsor_missing_contact_fields() {
        let json = r#"{"id":7,"name":"Quiet","date":"2024-03-02","phone":null}"#;
        let sponsor: Sponsor = serde_json::from_str(json).unwrap();
        assert_eq!(sponsor.phone, None);
        assert_eq!(sponsor.email, None);
    }

    #[test]
    fn test_event_from_sponsor_carries_every_field() {
        let event = CalendarEvent::from(acme());
        assert_eq!(event.title, "Acme");
        assert_eq!(event.start_str(), "2024-01-15");
        assert_eq!(event.extended_props.id, 1);
        assert_eq!(event.extended_props.phone.as_deref(), Some("555-1234"));
        assert_eq!(event.extended_props.email.as_deref(), Some("a@acme.com"));
    }

    #[test]
    fn test_event_serializes_widget_schema() {
        let json = serde_json::to_value(CalendarEvent::from(acme())).unwrap();
        assert_eq!(json["title"], "Acme");
        assert_eq!(json["start"], "2024-01-15");
        assert_eq!(json["extendedProps"]["phone"], "555-1234");
    }

    fn new_sponsor() -> NewSponsor {
        NewSponsor {
            name: "Acme & Sons".to_string(),
            phone: "555-1234".to_string(),
            email: "a@acme.com".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        }
    }

    #[test]
    fn test_new_sponsor_form_body() {
        assert_eq!(
            new_sponsor().to_form_body(),
            "name=Acme%20%26%20Sons&phone=555-1234&email=a%40acme.com&date=2024-01-15"
        );
    }

    #[test]
    fn test_new_sponsor_validation() {
        assert!(new_sponsor().validate().is_ok());

        let mut blank_name = new_sponsor();
        blank_name.name = String::new();
        assert!(blank_name.validate().is_err());

        let mut bad_email = new_sponsor();
        bad_email.email = "not-an-email".to_string();
        assert!(bad_email.validate().is_err());

        let mut long_phone = new_sponsor();
        long_phone.phone = "5".repeat(21);
        assert!(long_phone.validate().is_err());
    }

    #[test]
    fn test_validation_messages_in_field_order() {
        assert!(new_sponsor().validation_messages().is_empty());
        assert!(new_sponsor().check().is_ok());

        let mut sponsor = new_sponsor();
        sponsor.name = String::new();
        sponsor.email = "nope".to_string();
        assert_eq!(
            sponsor.validation_messages(),
            vec![
                "Name must be 1 to 100 characters".to_string(),
                "Email must be a valid address".to_string(),
            ]
        );
        assert_eq!(
            sponsor.check(),
            Err(ApiError::Validation(
                "Name must be 1 to 100 characters; Email must be a valid address".to_string()
            ))
        );
    }
}
