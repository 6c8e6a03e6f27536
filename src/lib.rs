//! `sensor-template` library.
//!
//! The binary (`src/main.rs`) is responsible for CLI parsing and process exit
//! codes. The component logic lives in [`crate::app`] where it can be tested
//! deterministically with an injected measurement source + settings store.

pub mod app;
pub mod measurement;
pub mod source;
pub mod store;
pub mod template;

pub mod test_utils;

// Re-export commonly used types at the crate root
pub use app::{ACTION_GET_DATA, ConfigError, DEFAULT_CONFIG_FILE, DataTemplate, Descriptor};
pub use measurement::{Measurement, parse_measurements};
pub use source::{MeasurementSource, StaticSource};
pub use store::{FileStore, SettingsStore, StoreError};
pub use template::TemplateConfig;
