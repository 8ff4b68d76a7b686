pub mod message_body;

pub use message_body::{BodyRejection, MessageBody};
