//! Domain services.

pub mod plugin;

pub use plugin::PluginService;
