pub mod config;
pub mod error;
pub mod locale;
pub mod persist;
pub mod pipeline;
pub mod record;
pub mod title;
pub mod types;
