//! Backends for the generative model.

pub mod gemini_api_agent;

pub use gemini_api_agent::GeminiApiAgent;
