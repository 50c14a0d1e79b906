pub mod config;
pub mod endpoint;
pub mod logging;
pub mod panel;
pub mod preferences;
pub mod render;
pub mod theme;
pub mod types;

#[cfg(feature = "ui")]
pub mod styles;
#[cfg(feature = "ui")]
pub mod ui;
#[cfg(feature = "ui")]
pub mod views;
