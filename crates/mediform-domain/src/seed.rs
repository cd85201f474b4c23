// File: src/seed.rs
// Purpose: Compiled-in mock tables standing in for a backend

use chrono::NaiveDate;

use crate::models::{
    Appointment, AppointmentStatus, Doctor, EmergencyContact, Patient,
};

/// Daily time grid offered for every doctor
pub const TIME_SLOTS: &[&str] = &[
    "09:00", "09:30", "10:00", "10:30", "11:00", "11:30", "14:00", "14:30", "15:00", "15:30",
    "16:00", "16:30", "17:00",
];

pub const SPECIALIZATIONS: &[&str] = &[
    "All Specializations",
    "Cardiology",
    "Neurology",
    "Dermatology",
    "Orthopedics",
    "Pediatrics",
];

pub fn doctors() -> Vec<Doctor> {
    let weekdays = |days: &[&str]| days.iter().map(|d| d.to_string()).collect();

    vec![
        Doctor {
            id: "1".to_string(),
            name: "Dr. Sarah Johnson".to_string(),
            specialization: "Cardiology".to_string(),
            photo: "https://images.pexels.com/photos/559831/pexels-photo-559831.jpeg".to_string(),
            availability: weekdays(&["monday", "tuesday", "wednesday", "thursday", "friday"]),
            email: "sarah.johnson@hospital.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
        },
        Doctor {
            id: "2".to_string(),
            name: "Dr. Michael Chen".to_string(),
            specialization: "Neurology".to_string(),
            photo: "https://images.pexels.com/photos/612608/pexels-photo-612608.jpeg".to_string(),
            availability: weekdays(&["tuesday", "wednesday", "thursday", "friday", "saturday"]),
            email: "michael.chen@hospital.com".to_string(),
            phone: "+1 (555) 234-5678".to_string(),
        },
        Doctor {
            id: "3".to_string(),
            name: "Dr. Emily Davis".to_string(),
            specialization: "Dermatology".to_string(),
            photo: "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg".to_string(),
            availability: weekdays(&["monday", "wednesday", "thursday", "friday"]),
            email: "emily.davis@hospital.com".to_string(),
            phone: "+1 (555) 345-6789".to_string(),
        },
        Doctor {
            id: "4".to_string(),
            name: "Dr. Robert Wilson".to_string(),
            specialization: "Orthopedics".to_string(),
            photo: "https://images.pexels.com/photos/582750/pexels-photo-582750.jpeg".to_string(),
            availability: weekdays(&["monday", "tuesday", "thursday", "friday"]),
            email: "robert.wilson@hospital.com".to_string(),
            phone: "+1 (555) 456-7890".to_string(),
        },
        Doctor {
            id: "5".to_string(),
            name: "Dr. Lisa Thompson".to_string(),
            specialization: "Pediatrics".to_string(),
            photo: "https://images.pexels.com/photos/5327585/pexels-photo-5327585.jpeg".to_string(),
            availability: weekdays(&["monday", "tuesday", "wednesday", "friday", "saturday"]),
            email: "lisa.thompson@hospital.com".to_string(),
            phone: "+1 (555) 567-8901".to_string(),
        },
    ]
}

pub fn appointments() -> Vec<Appointment> {
    vec![
        Appointment {
            id: "1".to_string(),
            patient_name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            doctor_id: "1".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            time_slot: "09:00".to_string(),
            status: AppointmentStatus::Scheduled,
            reservation_code: "APT001".to_string(),
        },
        Appointment {
            id: "2".to_string(),
            patient_name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
            doctor_id: "2".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            time_slot: "10:00".to_string(),
            status: AppointmentStatus::CheckedIn,
            reservation_code: "APT002".to_string(),
        },
        Appointment {
            id: "3".to_string(),
            patient_name: "Mike Johnson".to_string(),
            email: "mike@example.com".to_string(),
            doctor_id: "3".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 14).unwrap(),
            time_slot: "14:30".to_string(),
            status: AppointmentStatus::Completed,
            reservation_code: "APT003".to_string(),
        },
    ]
}

pub fn patients() -> Vec<Patient> {
    vec![
        Patient {
            id: "1".to_string(),
            email: "john.doe@email.com".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1985, 6, 15).unwrap(),
            address: "123 Main St, City, State 12345".to_string(),
            emergency_contact: EmergencyContact {
                name: "Jane Doe".to_string(),
                phone: "+1 (555) 987-6543".to_string(),
                relationship: "Spouse".to_string(),
            },
            medical_history: vec!["Hypertension".to_string(), "Diabetes Type 2".to_string()],
            allergies: vec!["Penicillin".to_string(), "Shellfish".to_string()],
            created_at: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        },
        Patient {
            id: "2".to_string(),
            email: "jane.smith@email.com".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Smith".to_string(),
            phone: "+1 (555) 234-5678".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 3, 22).unwrap(),
            address: "456 Oak Ave, City, State 12345".to_string(),
            emergency_contact: EmergencyContact {
                name: "Robert Smith".to_string(),
                phone: "+1 (555) 876-5432".to_string(),
                relationship: "Father".to_string(),
            },
            medical_history: vec!["Asthma".to_string()],
            allergies: vec!["Pollen".to_string()],
            created_at: NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
        },
        Patient {
            id: "3".to_string(),
            email: "mike.johnson@email.com".to_string(),
            first_name: "Mike".to_string(),
            last_name: "Johnson".to_string(),
            phone: "+1 (555) 345-6789".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1978, 11, 8).unwrap(),
            address: "789 Pine St, City, State 12345".to_string(),
            emergency_contact: EmergencyContact {
                name: "Sarah Johnson".to_string(),
                phone: "+1 (555) 765-4321".to_string(),
                relationship: "Sister".to_string(),
            },
            medical_history: vec!["High Cholesterol".to_string()],
            allergies: vec![],
            created_at: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_tables_are_consistent() {
        let doctors = doctors();
        assert_eq!(doctors.len(), 5);

        // Every seeded appointment points at a seeded doctor and uses a
        // slot from the grid
        for appointment in appointments() {
            assert!(doctors.iter().any(|d| d.id == appointment.doctor_id));
            assert!(TIME_SLOTS.contains(&appointment.time_slot.as_str()));
        }
    }

    #[test]
    fn test_reservation_codes_are_sequential() {
        let codes: Vec<String> = appointments()
            .iter()
            .map(|a| a.reservation_code.clone())
            .collect();
        assert_eq!(codes, vec!["APT001", "APT002", "APT003"]);
    }

    #[test]
    fn test_one_seed_appointment_already_checked_in() {
        let checked_in: Vec<Appointment> = appointments()
            .into_iter()
            .filter(|a| a.status == AppointmentStatus::CheckedIn)
            .collect();
        assert_eq!(checked_in.len(), 1);
        assert_eq!(checked_in[0].reservation_code, "APT002");
    }
}
