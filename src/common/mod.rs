// Shared configuration for TreeVec.

pub mod config;

pub use config::EncodeConfig;
