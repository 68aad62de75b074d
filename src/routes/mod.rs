pub mod users;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/users", post(users::create))
        .route(
            "/users/{id}",
            get(users::get)
                .put(users::replace)
                .patch(users::partial_update)
                .delete(users::delete),
        )
}
