pub mod messages;

pub use messages::{create_message, delete_message, list_messages, parse_id, update_message};
