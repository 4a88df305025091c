pub mod add_sponsor;
pub mod home;
pub mod not_found;
