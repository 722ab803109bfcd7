pub mod basket;
pub mod home;
pub mod orders;
pub mod staff;
pub mod tools;
