//! Availability monitor domain entity

use chrono::{DateTime, Utc};

use crate::domain::parking_space::ParkingSpace;

/// Uptime bookkeeping for a parking space
#[derive(Debug, Clone, PartialEq)]
pub struct AvailabilityMonitor {
    pub id: i32,
    pub status: String,
    /// Stamped by the store on insert and on every update
    pub last_checked_time: DateTime<Utc>,
    pub up_time: DateTime<Utc>,
    pub down_time: DateTime<Utc>,
    pub check_interval: DateTime<Utc>,
    /// Unique across monitors, fixed at creation
    pub parking_space_id: i32,
}

impl AvailabilityMonitor {
    /// Name used in not-found and confirmation messages
    pub const ENTITY: &'static str = "AvailabilityMonitor";

    pub fn new(
        status: impl Into<String>,
        up_time: DateTime<Utc>,
        down_time: DateTime<Utc>,
        check_interval: DateTime<Utc>,
        parking_space_id: i32,
    ) -> Self {
        Self {
            id: 0,
            status: status.into(),
            last_checked_time: Utc::now(),
            up_time,
            down_time,
            check_interval,
            parking_space_id,
        }
    }
}

/// Monitor with the parking space it watches
#[derive(Debug, Clone)]
pub struct AvailabilityMonitorDetails {
    pub monitor: AvailabilityMonitor,
    pub parking_space: Option<ParkingSpace>,
}
