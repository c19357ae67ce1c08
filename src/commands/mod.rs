//! CLI commands for edgewise

pub mod connected;
pub mod dispatch;
pub mod neighbors;
pub mod path;
pub mod show;
pub mod walk;
