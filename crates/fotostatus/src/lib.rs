pub mod cli;
pub mod commands;
pub mod context;
pub mod logging;
pub mod presentation;
pub mod settings;

pub use crate::context::AppContext;
pub use crate::settings::Settings;
