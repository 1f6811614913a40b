mod page;
mod routes;

pub use page::render;
pub use routes::{router, ApiError, AppState};
