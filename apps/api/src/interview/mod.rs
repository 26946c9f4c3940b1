//! Interview preparation: résumé parsing, question generation, answer
//! evaluation, and the per-session state behind them.

pub mod extraction;
pub mod handlers;
pub mod prompts;
pub mod questions;
pub mod session;
