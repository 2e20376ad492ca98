// Library surface for headless/integration tests and reuse.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod classify;
pub mod config;
pub mod matcher;
pub mod runtime;
pub mod score;
pub mod session;
pub mod timer;
pub mod words;
