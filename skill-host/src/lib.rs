//! # skill-host
//!
//! Hosting layer for the sound board skill: [`SkillAdapter`] (envelope in, envelope out), minimal
//! [`SkillConfig`], and [`build_soundboard_chain`]. No transport; the caller supplies the JSON.

mod adapter;
mod assembly;
mod config;

pub use adapter::SkillAdapter;
pub use assembly::build_soundboard_chain;
pub use config::{SkillConfig, DEFAULT_LOCALE, DEFAULT_USER_AGENT};
