//! HTTP route handlers for the camera shop API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /                     - Liveness string
//! GET    /health               - Health check
//! GET    /health/ready         - Readiness check (pings MongoDB)
//!
//! # Session
//! POST   /jwt                  - Issue a signed session token
//!
//! # Users
//! POST   /users                - Create account (duplicate email is a no-op)
//! GET    /users                - List accounts                    [admin]
//! GET    /users/admin/:email   - Is this email an admin?          [auth, self-only]
//! PATCH  /users/admin/:id      - Promote to admin                 [admin]
//! GET    /users/seller/:email  - Is this email a seller?          [auth, self-only]
//! PATCH  /users/seller/:id     - Promote to seller                [admin]
//! DELETE /users/:id            - Delete account
//!
//! # Products
//! POST   /product?email=       - Create listing (creator forced from query)
//! GET    /product              - List products
//! GET    /product/:id          - Fetch one product
//! PUT    /product/:id          - Replace listing fields
//! DELETE /product/:id          - Delete product
//!
//! # Cart
//! POST   /cart                 - Add item
//! GET    /cart?email=          - List items for an email
//! DELETE /cart/:id             - Remove item
//!
//! # Locations
//! POST   /location             - Upsert by email (400 without email)
//! GET    /location?email=      - List for an email (400 without email)
//! GET    /location/:id         - Fetch one location
//! PUT    /location/:id         - Replace shipping fields
//! DELETE /location/:id         - Delete location
//!
//! # Orders
//! POST   /manageorder          - Place order
//! GET    /manageorder          - List orders
//! ```
//!
//! Mutating product, cart, and location routes (and user delete) carry no
//! access control; that matches the deployed frontend's expectations and is
//! a known gap, not an invitation to add gates here.

pub mod cart;
pub mod locations;
pub mod orders;
pub mod products;
pub mod session;
pub mod users;

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use mongodb::bson::doc;

use crate::state::AppState;

/// Create the user routes router.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(users::create).get(users::list))
        .route("/{id}", delete(users::remove))
        .route(
            "/admin/{key}",
            get(users::check_admin).patch(users::promote_admin),
        )
        .route(
            "/seller/{key}",
            get(users::check_seller).patch(users::promote_seller),
        )
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(products::create).get(products::list))
        .route(
            "/{id}",
            get(products::get)
                .put(products::update)
                .delete(products::remove),
        )
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(cart::add).get(cart::list))
        .route("/{id}", delete(cart::remove))
}

/// Create the location routes router.
pub fn location_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(locations::upsert).get(locations::list))
        .route(
            "/{id}",
            get(locations::get)
                .put(locations::update)
                .delete(locations::remove),
        )
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new().route("/", post(orders::create).get(orders::list))
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .route("/jwt", post(session::issue))
        .nest("/users", user_routes())
        .nest("/product", product_routes())
        .nest("/cart", cart_routes())
        .nest("/location", location_routes())
        .nest("/manageorder", order_routes())
}

/// Liveness string for the root endpoint.
async fn root() -> &'static str {
    "Camera shop API is running"
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies MongoDB connectivity before returning OK.
/// Returns 503 Service Unavailable if the database is not reachable.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.database().run_command(doc! { "ping": 1 }).await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
