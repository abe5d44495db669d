use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        error::{DomainError, RepositoryError},
        models::{address::Address, cart::CartItem, user::{ProfileChanges, User}},
        repositories::{
            address_repository::AddressRepository, cart_repository::CartRepository,
            user_repository::UserRepository,
        },
        services::password_service::PasswordHasher,
    },
    usecase::{
        address_usecase::AddressUsecase,
        cart_usecase::CartUsecase,
        user_usecase::{NewUser, UserUsecase},
    },
};

// Request

/// json for user creation
#[derive(Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
}

/// json for profile update; absent fields keep their stored value
#[derive(Serialize, Deserialize, Default)]
pub struct UpdateUserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// json for login request
#[derive(Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
pub struct StatusQuery {
    pub status: String,
}

// Response

/// json for a user payload; the password digest never leaves the service
#[derive(Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_created: String,
    pub status: String,
    pub phone: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id().as_i32(),
            first_name: user.first_name().to_string(),
            last_name: user.last_name().to_string(),
            email: user.email().to_string(),
            date_created: user.date_created().to_string(),
            status: user.status().to_string(),
            phone: user.phone().to_string(),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    pub status: u16,
}

/// Translate a domain failure into the transport response. Store details
/// behind an internal failure are logged, not returned.
fn error_response(err: DomainError) -> Response {
    let (status, message) = match err {
        DomainError::Repository(RepositoryError::NotFound) => {
            (StatusCode::NOT_FOUND, "not found".to_string())
        }
        DomainError::Repository(RepositoryError::AlreadyExists(message)) => {
            (StatusCode::BAD_REQUEST, message)
        }
        DomainError::Repository(RepositoryError::DatabaseError(message)) => {
            tracing::error!(error = %message, "store failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error".to_string(),
            )
        }
        DomainError::InvalidUserId => (
            StatusCode::BAD_REQUEST,
            "user id must be a positive integer".to_string(),
        ),
    };

    (
        status,
        Json(ErrorResponse {
            message,
            status: status.as_u16(),
        }),
    )
        .into_response()
}

/* Router Function and Handler Function */

/// function returning the service Router, generic over the store
/// implementations so tests can inject in-memory stand-ins
pub fn create_user_router<U, A, C, P>(
    user_service: UserUsecase<U, P>,
    address_service: AddressUsecase<A>,
    cart_service: CartUsecase<C>,
) -> Router
where
    U: UserRepository + Send + Sync + 'static,
    A: AddressRepository + Send + Sync + 'static,
    C: CartRepository + Send + Sync + 'static,
    P: PasswordHasher + Send + Sync + 'static,
{
    let state = AppState {
        user_service: Arc::new(user_service),
        address_service: Arc::new(address_service),
        cart_service: Arc::new(cart_service),
    };

    Router::new()
        .route("/ping", get(ping))
        .route("/users", post(create_user::<U, A, C, P>))
        .route("/users/login", post(login::<U, A, C, P>))
        .route(
            "/users/{user_id}",
            get(get_user::<U, A, C, P>)
                .patch(update_user::<U, A, C, P>)
                .delete(delete_user::<U, A, C, P>),
        )
        .route("/internal/users/search", get(search_users::<U, A, C, P>))
        .route(
            "/users/{user_id}/addresses",
            get(get_addresses::<U, A, C, P>).post(add_address::<U, A, C, P>),
        )
        .route("/users/{user_id}/cart", post(add_cart_item::<U, A, C, P>))
        .route(
            "/users/{user_id}/cart/{item_id}",
            delete(remove_cart_item::<U, A, C, P>),
        )
        .with_state(state)
}

pub struct AppState<U, A, C, P>
where
    U: UserRepository,
    A: AddressRepository,
    C: CartRepository,
    P: PasswordHasher,
{
    pub user_service: Arc<UserUsecase<U, P>>,
    pub address_service: Arc<AddressUsecase<A>>,
    pub cart_service: Arc<CartUsecase<C>>,
}

impl<U, A, C, P> Clone for AppState<U, A, C, P>
where
    U: UserRepository,
    A: AddressRepository,
    C: CartRepository,
    P: PasswordHasher,
{
    fn clone(&self) -> Self {
        Self {
            user_service: Arc::clone(&self.user_service),
            address_service: Arc::clone(&self.address_service),
            cart_service: Arc::clone(&self.cart_service),
        }
    }
}

// handler function

async fn ping() -> &'static str {
    "pong"
}

/// handler function for user creation
async fn create_user<U, A, C, P>(
    State(state): State<AppState<U, A, C, P>>,
    Json(payload): Json<CreateUserRequest>,
) -> impl IntoResponse
where
    U: UserRepository + Send + Sync,
    A: AddressRepository + Send + Sync,
    C: CartRepository + Send + Sync,
    P: PasswordHasher + Send + Sync,
{
    let new_user = NewUser {
        first_name: payload.first_name,
        last_name: payload.last_name,
        email: payload.email,
        password: payload.password,
        phone: payload.phone,
    };

    match state.user_service.save(new_user).await {
        Ok(user) => (StatusCode::CREATED, Json(UserResponse::from(user))).into_response(),
        Err(err) => error_response(err),
    }
}

async fn get_user<U, A, C, P>(
    State(state): State<AppState<U, A, C, P>>,
    Path(user_id): Path<i32>,
) -> impl IntoResponse
where
    U: UserRepository + Send + Sync,
    A: AddressRepository + Send + Sync,
    C: CartRepository + Send + Sync,
    P: PasswordHasher + Send + Sync,
{
    match state.user_service.get(user_id).await {
        Ok(user) => (StatusCode::OK, Json(UserResponse::from(user))).into_response(),
        Err(err) => error_response(err),
    }
}

async fn update_user<U, A, C, P>(
    State(state): State<AppState<U, A, C, P>>,
    Path(user_id): Path<i32>,
    Json(payload): Json<UpdateUserRequest>,
) -> impl IntoResponse
where
    U: UserRepository + Send + Sync,
    A: AddressRepository + Send + Sync,
    C: CartRepository + Send + Sync,
    P: PasswordHasher + Send + Sync,
{
    let changes = ProfileChanges {
        first_name: payload.first_name,
        last_name: payload.last_name,
        email: payload.email,
        phone: payload.phone,
    };

    match state.user_service.update(user_id, changes).await {
        Ok(user) => (StatusCode::OK, Json(UserResponse::from(user))).into_response(),
        Err(err) => error_response(err),
    }
}

async fn delete_user<U, A, C, P>(
    State(state): State<AppState<U, A, C, P>>,
    Path(user_id): Path<i32>,
) -> impl IntoResponse
where
    U: UserRepository + Send + Sync,
    A: AddressRepository + Send + Sync,
    C: CartRepository + Send + Sync,
    P: PasswordHasher + Send + Sync,
{
    match state.user_service.delete(user_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(StatusResponse {
                status: "deleted".to_string(),
            }),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

async fn search_users<U, A, C, P>(
    State(state): State<AppState<U, A, C, P>>,
    Query(query): Query<StatusQuery>,
) -> impl IntoResponse
where
    U: UserRepository + Send + Sync,
    A: AddressRepository + Send + Sync,
    C: CartRepository + Send + Sync,
    P: PasswordHasher + Send + Sync,
{
    match state.user_service.find_by_status(&query.status).await {
        Ok(users) => {
            let users: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
            (StatusCode::OK, Json(users)).into_response()
        }
        Err(err) => error_response(err),
    }
}

/// handler function for login; a credential miss is reported as not found
/// without saying which half was wrong
async fn login<U, A, C, P>(
    State(state): State<AppState<U, A, C, P>>,
    Json(payload): Json<LoginRequest>,
) -> impl IntoResponse
where
    U: UserRepository + Send + Sync,
    A: AddressRepository + Send + Sync,
    C: CartRepository + Send + Sync,
    P: PasswordHasher + Send + Sync,
{
    match state
        .user_service
        .authenticate(&payload.email, &payload.password)
        .await
    {
        Ok(user) => (StatusCode::OK, Json(UserResponse::from(user))).into_response(),
        Err(err) => error_response(err),
    }
}

async fn get_addresses<U, A, C, P>(
    State(state): State<AppState<U, A, C, P>>,
    Path(user_id): Path<i32>,
) -> impl IntoResponse
where
    U: UserRepository + Send + Sync,
    A: AddressRepository + Send + Sync,
    C: CartRepository + Send + Sync,
    P: PasswordHasher + Send + Sync,
{
    match state.address_service.get_address(user_id).await {
        Ok(book) => (StatusCode::OK, Json(book)).into_response(),
        Err(err) => error_response(err),
    }
}

async fn add_address<U, A, C, P>(
    State(state): State<AppState<U, A, C, P>>,
    Path(user_id): Path<i32>,
    Json(payload): Json<Address>,
) -> impl IntoResponse
where
    U: UserRepository + Send + Sync,
    A: AddressRepository + Send + Sync,
    C: CartRepository + Send + Sync,
    P: PasswordHasher + Send + Sync,
{
    match state.address_service.add_address(user_id, payload).await {
        Ok(()) => (
            StatusCode::CREATED,
            Json(StatusResponse {
                status: "created".to_string(),
            }),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

async fn add_cart_item<U, A, C, P>(
    State(state): State<AppState<U, A, C, P>>,
    Path(user_id): Path<i32>,
    Json(payload): Json<CartItem>,
) -> impl IntoResponse
where
    U: UserRepository + Send + Sync,
    A: AddressRepository + Send + Sync,
    C: CartRepository + Send + Sync,
    P: PasswordHasher + Send + Sync,
{
    match state.cart_service.add_item(user_id, payload).await {
        Ok(()) => (
            StatusCode::CREATED,
            Json(StatusResponse {
                status: "created".to_string(),
            }),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

async fn remove_cart_item<U, A, C, P>(
    State(state): State<AppState<U, A, C, P>>,
    Path((user_id, item_id)): Path<(i32, String)>,
) -> impl IntoResponse
where
    U: UserRepository + Send + Sync,
    A: AddressRepository + Send + Sync,
    C: CartRepository + Send + Sync,
    P: PasswordHasher + Send + Sync,
{
    match state.cart_service.remove_item(user_id, &item_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(StatusResponse {
                status: "removed".to_string(),
            }),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}
