//! Availability monitor DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{AvailabilityMonitor, AvailabilityMonitorDetails};
use crate::interfaces::http::modules::parking_spaces::ParkingSpaceResponse;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityMonitorResponse {
    pub id: i32,
    pub status: String,
    pub last_checked_time: DateTime<Utc>,
    pub up_time: DateTime<Utc>,
    pub down_time: DateTime<Utc>,
    pub check_interval: DateTime<Utc>,
    pub parking_space_id: i32,
}

impl From<AvailabilityMonitor> for AvailabilityMonitorResponse {
    fn from(m: AvailabilityMonitor) -> Self {
        Self {
            id: m.id,
            status: m.status,
            last_checked_time: m.last_checked_time,
            up_time: m.up_time,
            down_time: m.down_time,
            check_interval: m.check_interval,
            parking_space_id: m.parking_space_id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityMonitorDetailsResponse {
    pub id: i32,
    pub status: String,
    pub last_checked_time: DateTime<Utc>,
    pub up_time: DateTime<Utc>,
    pub down_time: DateTime<Utc>,
    pub check_interval: DateTime<Utc>,
    pub parking_space_id: i32,
    pub parking_space: Option<ParkingSpaceResponse>,
}

impl From<AvailabilityMonitorDetails> for AvailabilityMonitorDetailsResponse {
    fn from(d: AvailabilityMonitorDetails) -> Self {
        let m = d.monitor;
        Self {
            id: m.id,
            status: m.status,
            last_checked_time: m.last_checked_time,
            up_time: m.up_time,
            down_time: m.down_time,
            check_interval: m.check_interval,
            parking_space_id: m.parking_space_id,
            parking_space: d.parking_space.map(Into::into),
        }
    }
}

/// Body for Create and Update. `lastCheckedTime` is stamped by the server;
/// `parkingSpaceId` is ignored on Update.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityMonitorRequest {
    #[validate(length(max = 50))]
    pub status: String,
    pub up_time: DateTime<Utc>,
    pub down_time: DateTime<Utc>,
    pub check_interval: DateTime<Utc>,
    pub parking_space_id: i32,
}

impl AvailabilityMonitorRequest {
    pub fn into_domain(self, id: i32) -> AvailabilityMonitor {
        let mut monitor = AvailabilityMonitor::new(
            self.status,
            self.up_time,
            self.down_time,
            self.check_interval,
            self.parking_space_id,
        );
        monitor.id = id;
        monitor
    }
}
