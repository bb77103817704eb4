//! Khulasa - Extractive Blog Digests with Urdu Translation
//!
//! Turns a plain-text document into a short extractive English summary and
//! an Urdu rendering of that summary, produced by a cascade of remote
//! translation services with a deterministic rule-based local fallback.

pub mod cli;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod summarize;
pub mod translate;
pub mod workflow;
