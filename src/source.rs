//! Measurement acquisition boundary.
//!
//! The renderer never talks to sensors directly; it asks a
//! [`MeasurementSource`] for the latest measurement document. Hosts plug in
//! their own acquisition subsystem, the CLI uses [`StaticSource`] around a
//! document it has already read.

/// Source abstraction for the sensor subsystem.
///
/// `take_measurement` triggers a fresh reading; `last_measurement` returns
/// the resulting document as JSON text. Acquisition is assumed synchronous:
/// after `take_measurement` returns, `last_measurement` reflects the new
/// reading.
pub trait MeasurementSource {
    /// Trigger a fresh reading.
    fn take_measurement(&mut self);

    /// The most recent measurement document, as JSON text.
    fn last_measurement(&self) -> String;
}

/// A source backed by a fixed, pre-acquired document.
///
/// `take_measurement` is a no-op; the document never changes.
#[derive(Debug, Clone)]
pub struct StaticSource {
    payload: String,
}

impl StaticSource {
    pub fn new(payload: String) -> Self {
        StaticSource { payload }
    }
}

impl MeasurementSource for StaticSource {
    fn take_measurement(&mut self) {}

    fn last_measurement(&self) -> String {
        self.payload.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_source_returns_its_payload_unchanged() {
        let mut source = StaticSource::new(r#"{"measurements":[]}"#.to_string());
        source.take_measurement();
        assert_eq!(source.last_measurement(), r#"{"measurements":[]}"#);
    }
}
