pub mod address_usecase;
pub mod cart_usecase;
pub mod user_usecase;
