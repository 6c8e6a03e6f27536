//! The data-template component (business logic).
//!
//! [`DataTemplate`] owns the active [`TemplateConfig`] and drives rendering,
//! configuration and bootstrap. The measurement source and the settings store
//! are injected as trait objects so the component can be tested
//! deterministically without sensors or a filesystem.

use crate::measurement;
use crate::source::MeasurementSource;
use crate::store::{SettingsStore, StoreError};
use crate::template::TemplateConfig;
use thiserror::Error;
use tracing::warn;

/// Action id understood by [`DataTemplate::receive_action`].
pub const ACTION_GET_DATA: i32 = 0;

/// Settings file name used when the host does not pick one.
pub const DEFAULT_CONFIG_FILE: &str = "DataTemplate.json";

/// Actions directory prefix shared by all actor settings.
const SETTINGS_PREFIX: &str = "/settings/act/";

const ACTIONS: &[(&str, i32)] = &[("Get Data", ACTION_GET_DATA)];

/// Errors returned by configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The supplied configuration document is not well-formed.
    #[error("malformed configuration: {0}")]
    Malformed(#[from] serde_json::Error),
    /// The settings store failed to read or write the configuration.
    #[error("configuration store failure: {0}")]
    Persist(#[from] StoreError),
}

/// Metadata describing the component to the host's discovery mechanism.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    /// Human-readable component name.
    pub name: &'static str,
    /// Component category as seen by the host.
    pub kind: &'static str,
    /// Supported actions as `(name, id)` pairs.
    pub actions: &'static [(&'static str, i32)],
}

impl Descriptor {
    pub fn action_count(&self) -> usize {
        self.actions.len()
    }
}

/// Renders sensor measurements through a user-configurable template.
pub struct DataTemplate {
    config: TemplateConfig,
    config_path: String,
    source: Box<dyn MeasurementSource>,
    store: Box<dyn SettingsStore>,
}

impl DataTemplate {
    /// Create a component persisting its settings as `config_file` under the
    /// shared actor settings directory.
    ///
    /// The configuration starts out with all fragments empty; call
    /// [`begin`](Self::begin) to load the persisted template or seed the
    /// factory default.
    pub fn new(
        config_file: &str,
        source: Box<dyn MeasurementSource>,
        store: Box<dyn SettingsStore>,
    ) -> Self {
        DataTemplate {
            config: TemplateConfig {
                start: String::new(),
                end: String::new(),
                body: String::new(),
            },
            config_path: format!("{SETTINGS_PREFIX}{config_file}"),
            source,
            store,
        }
    }

    /// Discovery metadata: one action, "Get Data" (id 0).
    pub fn describe(&self) -> Descriptor {
        Descriptor {
            name: "Data Template",
            kind: "dataformat",
            actions: ACTIONS,
        }
    }

    /// Bootstrap the configuration.
    ///
    /// If no document exists at the derived store path, the factory default
    /// template is seeded in memory and persisted. Otherwise the persisted
    /// document is loaded and parsed without being written back.
    pub fn begin(&mut self) -> Result<(), ConfigError> {
        if self.store.exists(&self.config_path) {
            let persisted = self.store.read(&self.config_path)?;
            self.set_config(&persisted, false)
        } else {
            self.config = TemplateConfig::default();
            let serialized = self.get_config();
            self.store.write(&self.config_path, &serialized)?;
            Ok(())
        }
    }

    /// Dispatch entry point for the host.
    ///
    /// Action [`ACTION_GET_DATA`] triggers a fresh measurement, renders the
    /// resulting document and returns `(false, rendered_text)`. If the
    /// measurement document cannot be parsed the reply is `(false, "ERROR")`;
    /// the error flag stays unset there because existing hosts match on the
    /// literal `ERROR` body. Any other action id yields
    /// `(true, {"Response": "FAIL"})`.
    pub fn receive_action(&mut self, action: i32, _payload: &str) -> (bool, String) {
        if action == ACTION_GET_DATA {
            self.source.take_measurement();
            let payload = self.source.last_measurement();
            return match measurement::parse_measurements(&payload) {
                Ok(records) => (false, self.config.render(&records)),
                Err(error) => {
                    warn!(%error, "measurement deserialization failed");
                    (false, "ERROR".to_string())
                }
            };
        }
        (true, r#"{"Response": "FAIL"}"#.to_string())
    }

    /// Serialize the active configuration to its three-key JSON form.
    pub fn get_config(&self) -> String {
        serde_json::to_string(&self.config).expect("string-only struct serializes")
    }

    /// Replace the active configuration with the parsed form of `config`.
    ///
    /// On a parse error the active configuration is left untouched. All
    /// three fragments are replaced together; keys missing from the document
    /// become empty fragments. With `save` set, the canonical serialized form
    /// is also written through the store; a failed write is reported but the
    /// in-memory replacement stands.
    pub fn set_config(&mut self, config: &str, save: bool) -> Result<(), ConfigError> {
        let parsed: TemplateConfig = match serde_json::from_str(config) {
            Ok(parsed) => parsed,
            Err(error) => {
                warn!(%error, "configuration deserialization failed");
                return Err(error.into());
            }
        };
        self.config = parsed;
        if save {
            let serialized = self.get_config();
            self.store.write(&self.config_path, &serialized)?;
        }
        Ok(())
    }
}
