//! API module

mod handlers;
mod routes;
mod state;

pub use handlers::{get_index, health_check, post_index};
pub use routes::{create_router, run_server};
pub use state::AppState;
