pub mod types;

pub use types::GatewayError;
