mod domain;
mod entity;
mod infrastructure;
mod presentation;
mod usecase;

use std::net::SocketAddr;
use std::time::Duration;

use mongodb::{Client, bson::doc, options::ClientOptions};
use sea_orm::{ConnectOptions, Database};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{
    infrastructure::{
        mongo_address_repository::MongoAddressRepository,
        mongo_cart_repository::MongoCartRepository, mysql_user_repository::MysqlUserRepository,
        sha256_password_hasher::Sha256PasswordHasher,
    },
    presentation::handlers::user_handler::create_user_router,
    usecase::{
        address_usecase::AddressUsecase, cart_usecase::CartUsecase, user_usecase::UserUsecase,
    },
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut opt = ConnectOptions::new(dotenvy::var("DATABASE_URL")?);
    opt.max_connections(10)
        .min_connections(1)
        .sqlx_logging(true);
    let db = Database::connect(opt).await?;
    info!("connected to the profile store");

    let mongo_uri = dotenvy::var("MONGODB_URI")
        .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    let mongo_db_name =
        dotenvy::var("MONGODB_DATABASE").unwrap_or_else(|_| "users".to_string());
    let mut client_options = ClientOptions::parse(&mongo_uri).await?;
    client_options.app_name = Some("commerce-users-api".to_string());
    client_options.server_selection_timeout = Some(Duration::from_secs(10));
    let mongo_client = Client::with_options(client_options)?;
    let mongo_db = mongo_client.database(&mongo_db_name);
    mongo_db.run_command(doc! { "ping": 1 }).await?;
    info!(database = %mongo_db_name, "connected to the document store");

    let user_repository = MysqlUserRepository::new(db.clone());
    let address_repository = MongoAddressRepository::new(&mongo_db);
    let cart_repository = MongoCartRepository::new(&mongo_db);
    let password_hasher = Sha256PasswordHasher::new();

    let user_service = UserUsecase::new(user_repository, password_hasher);
    let address_service = AddressUsecase::new(address_repository);
    let cart_service = CartUsecase::new(cart_repository);

    let app = create_user_router(user_service, address_service, cart_service);

    let bind_addr = dotenvy::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let addr: SocketAddr = bind_addr.parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "listening");
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
