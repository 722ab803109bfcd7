pub mod badge;
pub mod icons;
pub mod logo;
pub mod navbar;
