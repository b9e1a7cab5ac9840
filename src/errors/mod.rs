pub mod types;

pub use types::KillchainError;
