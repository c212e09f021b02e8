//! CLI commands for campusnet

pub mod connected;
pub mod dispatch;
pub mod info;
pub mod path;
pub mod run;
pub mod status;
pub mod zone;
