// File: src/checkin.rs
// Purpose: Reservation-code check-in with optional location verification

use std::sync::Arc;

use mediform::domain::geolocation::{verify_location_for_checkin, LocationProvider};
use mediform::domain::AppointmentStatus;

use crate::booking::BookingService;

/// Outcome shown to the patient at the check-in desk
#[derive(Debug, Clone, PartialEq)]
pub struct CheckInResult {
    pub success: bool,
    pub message: String,
}

impl CheckInResult {
    fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Check-in over the booking table.
///
/// Accepts a reservation code (case-insensitive) or an appointment id;
/// a scanned QR code resolves to the same reservation code and goes
/// through the same path. When a [`LocationProvider`] is supplied, the
/// patient must be within check-in range of the facility before the
/// appointment transitions to checked-in.
pub struct CheckInService {
    booking: Arc<BookingService>,
}

impl CheckInService {
    pub fn new(booking: Arc<BookingService>) -> Self {
        Self { booking }
    }

    pub fn check_in(
        &self,
        input: &str,
        location: Option<&dyn LocationProvider>,
    ) -> CheckInResult {
        if input.trim().is_empty() {
            return CheckInResult::error("Please enter a reservation code or scan QR code");
        }

        let Some(appointment) = self.booking.find_by_code(input.trim()) else {
            return CheckInResult::error("Invalid reservation code. Please check and try again.");
        };

        if appointment.status == AppointmentStatus::CheckedIn {
            return CheckInResult::error("This appointment has already been checked in");
        }

        if let Some(provider) = location {
            let verification = verify_location_for_checkin(provider);
            if !verification.success {
                tracing::debug!(
                    code = %appointment.reservation_code,
                    distance_m = ?verification.distance_m,
                    "check-in blocked by location gate"
                );
                return CheckInResult::error(verification.message);
            }
        }

        self.booking
            .set_status(&appointment.id, AppointmentStatus::CheckedIn);
        tracing::info!(code = %appointment.reservation_code, "patient checked in");

        CheckInResult {
            success: true,
            message: format!(
                "Welcome {}! Check-in successful for your appointment.",
                appointment.patient_name
            ),
        }
    }
}
