mod outbound_policy;

pub use outbound_policy::{DEFAULT_RETRY_JITTER, OutboundPolicy};
