//! Upstream API clients

pub mod dogechain;
pub mod nomics;

pub use dogechain::DogechainClient;
pub use nomics::NomicsProvider;
