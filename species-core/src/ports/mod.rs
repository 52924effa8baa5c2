mod outbound;

pub use outbound::*;
