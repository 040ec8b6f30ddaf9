//! HTTP resources, one module per aggregate, plus the operational endpoints

pub mod availability_monitors;
pub mod health;
pub mod invoices;
pub mod logs;
pub mod metrics;
pub mod parking_reservation_managers;
pub mod parking_space_managers;
pub mod parking_spaces;
pub mod parking_spots;
pub mod payment_methods;
pub mod payments;
pub mod request_id;
pub mod reservations;
