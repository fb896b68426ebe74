pub mod dispatcher;
pub mod render;
pub mod sender;

pub use dispatcher::{BroadcastDispatcher, BroadcastReport, DeliveryFailure};
pub use sender::{MessageSender, SendError};
