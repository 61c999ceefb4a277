use std::fmt::Display;

use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DeviceId(pub String);

impl Display for DeviceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SignalQuality {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl SignalQuality {
    pub fn from_rssi(rssi_dbm: i16) -> Self {
        match rssi_dbm {
            r if r >= -60 => SignalQuality::Excellent,
            r if r >= -70 => SignalQuality::Good,
            r if r >= -80 => SignalQuality::Fair,
            _ => SignalQuality::Poor,
        }
    }
}

impl Display for SignalQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignalQuality::Excellent => write!(f, "excellent"),
            SignalQuality::Good => write!(f, "good"),
            SignalQuality::Fair => write!(f, "fair"),
            SignalQuality::Poor => write!(f, "poor"),
        }
    }
}

/// A device seen during a scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiscoveredDevice {
    pub id: DeviceId,
    pub name: String,
    pub rssi_dbm: i16,
}

impl DiscoveredDevice {
    pub fn signal(&self) -> SignalQuality {
        SignalQuality::from_rssi(self.rssi_dbm)
    }
}

/// Live connection to a device, returned by a successful connect.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConnectionHandle {
    pub id: Uuid,
    pub device: DeviceId,
}

impl ConnectionHandle {
    pub fn new(device: DeviceId) -> Self {
        Self {
            id: Uuid::new_v4(),
            device,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_quality_thresholds() {
        assert_eq!(SignalQuality::from_rssi(-45), SignalQuality::Excellent);
        assert_eq!(SignalQuality::from_rssi(-60), SignalQuality::Excellent);
        assert_eq!(SignalQuality::from_rssi(-61), SignalQuality::Good);
        assert_eq!(SignalQuality::from_rssi(-75), SignalQuality::Fair);
        assert_eq!(SignalQuality::from_rssi(-81), SignalQuality::Poor);
    }
}
