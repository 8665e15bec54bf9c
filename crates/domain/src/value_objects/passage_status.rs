//! Passage status value object
//!
//! Where a vehicle stands relative to a stop for one scheduled visit.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Status of a single passage, as reported by the tracking service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PassageStatus {
    /// Arrival time predicted from the live vehicle position
    Predicted,
    /// Only the timetable is known
    Planned,
    /// Vehicle is at the stop
    Stopping,
    /// Vehicle has left the stop
    Departed,
}

impl PassageStatus {
    /// The wire value used by the service
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Predicted => "PREDICTED",
            Self::Planned => "PLANNED",
            Self::Stopping => "STOPPING",
            Self::Departed => "DEPARTED",
        }
    }

    /// Whether the time of this passage comes from live tracking
    #[must_use]
    pub const fn is_realtime(&self) -> bool {
        matches!(self, Self::Predicted | Self::Stopping)
    }
}

impl fmt::Display for PassageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match against the closed set; anything else is an error.
impl std::str::FromStr for PassageStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PREDICTED" => Ok(Self::Predicted),
            "PLANNED" => Ok(Self::Planned),
            "STOPPING" => Ok(Self::Stopping),
            "DEPARTED" => Ok(Self::Departed),
            other => Err(DomainError::InvalidPassageStatus(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_wire_value() {
        for status in [
            PassageStatus::Predicted,
            PassageStatus::Planned,
            PassageStatus::Stopping,
            PassageStatus::Departed,
        ] {
            assert_eq!(status.as_str().parse::<PassageStatus>(), Ok(status));
        }
    }

    #[test]
    fn rejects_unknown_value() {
        assert_eq!(
            "DELAYED".parse::<PassageStatus>(),
            Err(DomainError::InvalidPassageStatus("DELAYED".to_string()))
        );
    }

    #[test]
    fn rejects_lowercase() {
        assert!("planned".parse::<PassageStatus>().is_err());
    }

    #[test]
    fn realtime_flag() {
        assert!(PassageStatus::Predicted.is_realtime());
        assert!(PassageStatus::Stopping.is_realtime());
        assert!(!PassageStatus::Planned.is_realtime());
        assert!(!PassageStatus::Departed.is_realtime());
    }

    #[test]
    fn serialization() {
        let json = serde_json::to_string(&PassageStatus::Departed).unwrap();
        assert_eq!(json, r#""DEPARTED""#);

        let parsed: PassageStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, PassageStatus::Departed);
    }
}
