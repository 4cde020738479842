pub mod about;
pub mod auth_modal;
pub mod boats;
pub mod captains;
pub mod contact;
pub mod footer;
pub mod header;
pub mod hero;
pub mod icons;
