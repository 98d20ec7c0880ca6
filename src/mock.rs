//! Mock platform collaborators for testing without hardware.

use std::collections::HashMap;

use crate::platform::{
    PlatformError, PropertySource, SensorClock, PROP_CSI_ID, PROP_MCLK, PROP_MCLK_SOURCE,
};

/// Mock sensor clock counting enable/disable calls.
#[derive(Debug, Default)]
pub struct MockClock {
    enabled: bool,
    enable_count: u32,
    disable_count: u32,
    fail_enable: bool,
}

impl MockClock {
    /// Create a new mock clock.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `prepare_enable` fail, for attach error-path tests.
    #[must_use]
    pub fn with_enable_failure(mut self) -> Self {
        self.fail_enable = true;
        self
    }

    /// Whether the clock is currently enabled.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// How many times the clock was enabled.
    #[must_use]
    pub const fn enable_count(&self) -> u32 {
        self.enable_count
    }

    /// How many times the clock was disabled.
    #[must_use]
    pub const fn disable_count(&self) -> u32 {
        self.disable_count
    }
}

impl SensorClock for MockClock {
    fn prepare_enable(&mut self) -> Result<(), PlatformError> {
        if self.fail_enable {
            return Err(PlatformError::Clock);
        }
        self.enabled = true;
        self.enable_count += 1;
        Ok(())
    }

    fn disable_unprepare(&mut self) {
        self.enabled = false;
        self.disable_count += 1;
    }
}

/// Mock device-tree property source.
///
/// [`MockProperties::new`] seeds the three integers attach reads; builders
/// override individual values and [`MockProperties::empty`] starts with no
/// properties at all, so reads fail like a sparse device-tree node.
#[derive(Debug)]
pub struct MockProperties {
    values: HashMap<&'static str, u32>,
}

impl Default for MockProperties {
    fn default() -> Self {
        Self::new()
    }
}

impl MockProperties {
    /// Create a property source with the standard sensor node contents:
    /// a 24 MHz master clock from source 0, feeding capture interface 0.
    #[must_use]
    pub fn new() -> Self {
        Self::empty()
            .with_u32(PROP_MCLK, 24_000_000)
            .with_u32(PROP_MCLK_SOURCE, 0)
            .with_u32(PROP_CSI_ID, 0)
    }

    /// Create a property source with no properties.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Set a `u32` property.
    #[must_use]
    pub fn with_u32(mut self, name: &'static str, value: u32) -> Self {
        self.values.insert(name, value);
        self
    }
}

impl PropertySource for MockProperties {
    fn read_u32(&self, name: &'static str) -> Result<u32, PlatformError> {
        self.values
            .get(name)
            .copied()
            .ok_or(PlatformError::Property(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_counts_transitions() {
        let mut clock = MockClock::new();
        assert!(!clock.is_enabled());

        clock.prepare_enable().expect("enable should succeed");
        assert!(clock.is_enabled());
        assert_eq!(clock.enable_count(), 1);

        clock.disable_unprepare();
        assert!(!clock.is_enabled());
        assert_eq!(clock.disable_count(), 1);
    }

    #[test]
    fn clock_failure_injection() {
        let mut clock = MockClock::new().with_enable_failure();
        assert_eq!(clock.prepare_enable(), Err(PlatformError::Clock));
        assert!(!clock.is_enabled());
    }

    #[test]
    fn default_properties_cover_the_sensor_node() {
        let props = MockProperties::new();
        assert_eq!(props.read_u32(PROP_MCLK), Ok(24_000_000));
        assert_eq!(props.read_u32(PROP_MCLK_SOURCE), Ok(0));
        assert_eq!(props.read_u32(PROP_CSI_ID), Ok(0));
    }

    #[test]
    fn missing_property_reports_its_name() {
        let props = MockProperties::empty();
        assert_eq!(
            props.read_u32(PROP_CSI_ID),
            Err(PlatformError::Property(PROP_CSI_ID))
        );
    }
}
