pub mod address;
pub mod cart;
pub mod credential;
pub mod user;
