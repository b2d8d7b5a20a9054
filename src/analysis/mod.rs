pub mod champions;
pub mod views;
