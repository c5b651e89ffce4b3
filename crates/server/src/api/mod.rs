pub mod export;
pub mod favorites;
pub mod handlers;
pub mod middleware;
pub mod preferences;
pub mod proxy;
pub mod routes;
pub mod search;
pub mod shared;

pub use routes::create_router;
