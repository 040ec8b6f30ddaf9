//! Entity model → domain conversions shared by the repositories

use crate::domain::{
    AvailabilityMonitor, Invoice, LogEntry, ParkingReservationManager, ParkingSpace,
    ParkingSpaceManager, ParkingSpot, Payment, PaymentMethod, Reservation,
};
use crate::infrastructure::database::entities::{
    audit_log, availability_monitor, invoice, parking_reservation_manager, parking_space,
    parking_space_manager, parking_spot, payment, payment_method, reservation,
};

impl From<parking_space::Model> for ParkingSpace {
    fn from(m: parking_space::Model) -> Self {
        Self {
            id: m.id,
            location: m.location,
            size: m.size,
            status: m.status,
            price_per_hour: m.price_per_hour,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

impl From<parking_spot::Model> for ParkingSpot {
    fn from(m: parking_spot::Model) -> Self {
        Self {
            id: m.id,
            location: m.location,
            size: m.size,
            status: m.status,
            price_per_hour: m.price_per_hour,
        }
    }
}

impl From<parking_space_manager::Model> for ParkingSpaceManager {
    fn from(m: parking_space_manager::Model) -> Self {
        Self {
            id: m.id,
            status: m.status,
            payment_amount: m.payment_amount,
            contact: m.contact,
            parking_space_id: m.parking_space_id,
        }
    }
}

impl From<parking_reservation_manager::Model> for ParkingReservationManager {
    fn from(m: parking_reservation_manager::Model) -> Self {
        Self {
            id: m.id,
            manager_name: m.manager_name,
            manager_contact: m.manager_contact,
        }
    }
}

impl From<availability_monitor::Model> for AvailabilityMonitor {
    fn from(m: availability_monitor::Model) -> Self {
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

impl From<reservation::Model> for Reservation {
    fn from(m: reservation::Model) -> Self {
        Self {
            id: m.id,
            start_date: m.start_date,
            end_date: m.end_date,
            status: m.status,
            total_amount: m.total_amount,
            created_at: m.created_at,
            updated_at: m.updated_at,
            parking_spot_id: m.parking_spot_id,
            parking_reservation_manager_id: m.parking_reservation_manager_id,
        }
    }
}

impl From<payment_method::Model> for PaymentMethod {
    fn from(m: payment_method::Model) -> Self {
        Self {
            id: m.id,
            method_type: m.method_type,
            details: m.details,
        }
    }
}

impl From<payment::Model> for Payment {
    fn from(m: payment::Model) -> Self {
        Self {
            id: m.id,
            amount: m.amount,
            date: m.date,
            status: m.status,
            payment_method_id: m.payment_method_id,
            invoice_id: m.invoice_id,
        }
    }
}

impl From<invoice::Model> for Invoice {
    fn from(m: invoice::Model) -> Self {
        Self {
            id: m.id,
            date_generated: m.date_generated,
            total_amount: m.total_amount,
        }
    }
}

impl From<audit_log::Model> for LogEntry {
    fn from(m: audit_log::Model) -> Self {
        Self {
            id: m.id,
            user_name: m.user_name,
            description: m.description,
            created_at: m.created_at,
        }
    }
}
