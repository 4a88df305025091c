pub mod calendar;
pub mod header;
pub mod search_panel;
pub mod sponsor_modal;
