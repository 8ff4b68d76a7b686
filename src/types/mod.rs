pub mod envelope;
pub mod message;

pub use envelope::{Envelope, EnvelopeStatus};
pub use message::{Message, MessageId, MessagePayload, PayloadError};
