//! Page components, one per client-side route

pub mod about;
pub mod chat;
pub mod home;
pub mod trends;
pub mod verify;
