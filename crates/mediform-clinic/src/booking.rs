// File: src/booking.rs
// Purpose: In-memory appointment booking over the seeded tables

use std::sync::Mutex;

use anyhow::bail;
use chrono::NaiveDate;
use mediform::domain::{
    seed, Appointment, AppointmentStatus, BookingRequest, Doctor, TimeSlot,
};
use uuid::Uuid;

/// In-memory appointment table plus the doctor directory.
///
/// There is no real scheduling here: one table, one process, no conflict
/// resolution beyond refusing a slot that is already taken in this table.
pub struct BookingService {
    appointments: Mutex<Vec<Appointment>>,
    doctors: Vec<Doctor>,
}

impl Default for BookingService {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingService {
    pub fn new() -> Self {
        Self {
            appointments: Mutex::new(seed::appointments()),
            doctors: seed::doctors(),
        }
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn doctor(&self, id: &str) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id == id)
    }

    /// Doctors filtered by specialization; "All Specializations" returns
    /// everyone
    pub fn doctors_by_specialization(&self, specialization: &str) -> Vec<&Doctor> {
        self.doctors
            .iter()
            .filter(|d| {
                specialization == "All Specializations" || d.specialization == specialization
            })
            .collect()
    }

    /// The daily time grid for one doctor and date, with slots already
    /// booked (and not cancelled) marked unavailable
    pub fn slots_for(&self, doctor_id: &str, date: NaiveDate) -> Vec<TimeSlot> {
        let appointments = self.appointments.lock().unwrap();
        seed::TIME_SLOTS
            .iter()
            .map(|time| TimeSlot {
                time: time.to_string(),
                available: !appointments.iter().any(|a| {
                    a.doctor_id == doctor_id
                        && a.date == date
                        && a.time_slot == *time
                        && a.status != AppointmentStatus::Cancelled
                }),
            })
            .collect()
    }

    /// Book an appointment from a validated request.
    ///
    /// Reservation codes continue the seeded `APT001...` sequence.
    pub fn book(&self, request: BookingRequest) -> anyhow::Result<Appointment> {
        if self.doctor(&request.doctor_id).is_none() {
            bail!("Unknown doctor: {}", request.doctor_id);
        }

        let mut appointments = self.appointments.lock().unwrap();
        let taken = appointments.iter().any(|a| {
            a.doctor_id == request.doctor_id
                && a.date == request.date
                && a.time_slot == request.time_slot
                && a.status != AppointmentStatus::Cancelled
        });
        if taken {
            bail!(
                "Time slot {} on {} is no longer available",
                request.time_slot,
                request.date
            );
        }

        let appointment = Appointment {
            id: Uuid::new_v4().to_string(),
            patient_name: request.full_name,
            email: request.email,
            doctor_id: request.doctor_id,
            date: request.date,
            time_slot: request.time_slot,
            status: AppointmentStatus::Scheduled,
            reservation_code: format!("APT{:03}", appointments.len() + 1),
        };
        appointments.push(appointment.clone());

        tracing::info!(code = %appointment.reservation_code, "appointment booked");
        Ok(appointment)
    }

    /// Find an appointment by reservation code (case-insensitive) or by id
    pub fn find_by_code(&self, input: &str) -> Option<Appointment> {
        self.appointments
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.reservation_code.eq_ignore_ascii_case(input) || a.id == input)
            .cloned()
    }

    /// All appointments booked under the given email
    pub fn appointments_for(&self, email: &str) -> Vec<Appointment> {
        self.appointments
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.email == email)
            .cloned()
            .collect()
    }

    pub(crate) fn set_status(&self, id: &str, status: AppointmentStatus) {
        let mut appointments = self.appointments.lock().unwrap();
        if let Some(appointment) = appointments.iter_mut().find(|a| a.id == id) {
            tracing::debug!(id, from = %appointment.status, to = %status, "appointment status change");
            appointment.status = status;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn request() -> BookingRequest {
        BookingRequest {
            full_name: "Alice Walker".to_string(),
            email: "alice@example.com".to_string(),
            doctor_id: "1".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            time_slot: "09:30".to_string(),
        }
    }

    #[test]
    fn test_book_assigns_next_reservation_code() {
        let booking = BookingService::new();
        let appointment = booking.book(request()).unwrap();
        assert_eq!(appointment.reservation_code, "APT004");
        assert_eq!(appointment.status, AppointmentStatus::Scheduled);
    }

    #[test]
    fn test_booked_slot_becomes_unavailable() {
        let booking = BookingService::new();
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();

        let before = booking.slots_for("1", date);
        assert!(before.iter().all(|slot| slot.available));

        booking.book(request()).unwrap();

        let after = booking.slots_for("1", date);
        let slot = after.iter().find(|s| s.time == "09:30").unwrap();
        assert!(!slot.available);
        // Other slots and other doctors are untouched
        assert!(after.iter().filter(|s| s.time != "09:30").all(|s| s.available));
        assert!(booking.slots_for("2", date).iter().all(|s| s.available));
    }

    #[test]
    fn test_double_booking_is_refused() {
        let booking = BookingService::new();
        booking.book(request()).unwrap();
        assert!(booking.book(request()).is_err());
    }

    #[test]
    fn test_unknown_doctor_is_refused() {
        let booking = BookingService::new();
        let mut bad = request();
        bad.doctor_id = "99".to_string();
        assert!(booking.book(bad).is_err());
    }

    #[test]
    fn test_find_by_code_is_case_insensitive() {
        let booking = BookingService::new();
        let found = booking.find_by_code("apt001").unwrap();
        assert_eq!(found.patient_name, "John Doe");
        // Lookup by id works too
        assert!(booking.find_by_code("2").is_some());
        assert!(booking.find_by_code("APT999").is_none());
    }

    #[test]
    fn test_doctor_directory_filter() {
        let booking = BookingService::new();

        // The first entry of the specialization list means "no filter"
        let all = booking.doctors_by_specialization(seed::SPECIALIZATIONS[0]);
        assert_eq!(all.len(), booking.doctors().len());

        let cardiologists = booking.doctors_by_specialization("Cardiology");
        assert_eq!(cardiologists.len(), 1);
        assert_eq!(cardiologists[0].name, "Dr. Sarah Johnson");
    }

    #[test]
    fn test_appointments_for_email() {
        let booking = BookingService::new();
        booking.book(request()).unwrap();
        let mine = booking.appointments_for("alice@example.com");
        assert_eq!(mine.len(), 1);
        assert_eq!(booking.appointments_for("nobody@example.com").len(), 0);
    }
}
