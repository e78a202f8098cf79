pub mod cart;
pub mod error;
pub mod health;
pub mod notification;
pub mod tags;
