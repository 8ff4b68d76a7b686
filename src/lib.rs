pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod store;
pub mod types;

pub use config::Config;
pub use error::{ApiError, StoreError};
pub use router::{AppState, message_router};
pub use store::MessageStore;
