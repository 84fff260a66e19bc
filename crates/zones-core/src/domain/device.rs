//! Device identity: the key applied layouts are stored under.

use std::fmt;

/// Identifies one physical monitor within one virtual desktop.
///
/// Two identities are equal only when all five fields match exactly.  The same
/// monitor on a different virtual desktop is a different device as far as
/// applied layouts are concerned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeviceIdentity {
    monitor_name: String,
    monitor_instance_id: String,
    monitor_serial_number: String,
    monitor_number: i32,
    virtual_desktop_id: String,
}

impl DeviceIdentity {
    pub fn new(
        monitor_name: impl Into<String>,
        monitor_instance_id: impl Into<String>,
        monitor_serial_number: impl Into<String>,
        monitor_number: i32,
        virtual_desktop_id: impl Into<String>,
    ) -> Self {
        Self {
            monitor_name: monitor_name.into(),
            monitor_instance_id: monitor_instance_id.into(),
            monitor_serial_number: monitor_serial_number.into(),
            monitor_number,
            virtual_desktop_id: virtual_desktop_id.into(),
        }
    }

    pub fn monitor_name(&self) -> &str {
        &self.monitor_name
    }

    pub fn monitor_instance_id(&self) -> &str {
        &self.monitor_instance_id
    }

    pub fn monitor_serial_number(&self) -> &str {
        &self.monitor_serial_number
    }

    pub fn monitor_number(&self) -> i32 {
        self.monitor_number
    }

    pub fn virtual_desktop_id(&self) -> &str {
        &self.virtual_desktop_id
    }
}

impl fmt::Display for DeviceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}#{} ({}) on {}",
            self.monitor_name, self.monitor_number, self.monitor_instance_id, self.virtual_desktop_id
        )
    }
}
