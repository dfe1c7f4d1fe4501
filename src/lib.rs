pub mod cli;
pub mod error;
pub mod listener;
pub mod logging;
pub mod message;
pub mod publish;
pub mod target;

pub use error::{ProbeError, Result};
pub use listener::{listen, run};
pub use message::{InboundMessage, Notification};
pub use publish::{simulate_publish, PublishRequest};
pub use target::ConnectionTarget;
