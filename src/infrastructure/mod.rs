pub mod mongo_address_repository;
pub mod mongo_cart_repository;
pub mod mysql_user_repository;
pub mod sha256_password_hasher;
