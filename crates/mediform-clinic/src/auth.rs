// File: src/auth.rs
// Purpose: Mock authentication over the seeded patient registry

use std::sync::Mutex;
use std::time::Duration;

use chrono::Local;
use mediform::domain::{seed, EmergencyContact, Patient, RegisterData};

use crate::session::SessionStore;

// Mock credential check; every seeded patient shares this password
const MOCK_PASSWORD: &str = "password123";

/// Mock authentication service.
///
/// Keeps the patient registry in memory and writes the signed-in patient
/// through the [`SessionStore`]. The optional latency simulates a network
/// round-trip; tests construct the service with zero latency.
pub struct AuthService {
    patients: Mutex<Vec<Patient>>,
    session: SessionStore,
    latency: Duration,
}

impl AuthService {
    pub fn new(session: SessionStore) -> Self {
        Self {
            patients: Mutex::new(seed::patients()),
            session,
            latency: Duration::from_millis(1000),
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Attempt to sign in. Returns false for an unknown email or a wrong
    /// password; errors only on session persistence failure.
    pub async fn login(&self, email: &str, password: &str) -> anyhow::Result<bool> {
        tokio::time::sleep(self.latency).await;

        let found = self
            .patients
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.email == email)
            .cloned();

        match found {
            Some(patient) if password == MOCK_PASSWORD => {
                self.session.save(&patient)?;
                tracing::info!(email, "patient signed in");
                Ok(true)
            }
            _ => {
                tracing::debug!(email, "login rejected");
                Ok(false)
            }
        }
    }

    /// Create an account and sign it in. Returns false when the email is
    /// already registered.
    pub async fn register(&self, data: RegisterData) -> anyhow::Result<bool> {
        tokio::time::sleep(self.latency).await;

        let patient = {
            let mut patients = self.patients.lock().unwrap();
            if patients.iter().any(|p| p.email == data.email) {
                tracing::debug!(email = %data.email, "registration rejected: email taken");
                return Ok(false);
            }

            let patient = Patient {
                id: (patients.len() + 1).to_string(),
                email: data.email,
                first_name: data.first_name,
                last_name: data.last_name,
                phone: data.phone,
                date_of_birth: data.date_of_birth,
                address: String::new(),
                emergency_contact: EmergencyContact::default(),
                medical_history: Vec::new(),
                allergies: Vec::new(),
                created_at: Local::now().date_naive(),
            };
            patients.push(patient.clone());
            patient
        };

        self.session.save(&patient)?;
        tracing::info!(email = %patient.email, "patient registered");
        Ok(true)
    }

    pub fn logout(&self) {
        self.session.clear();
    }

    pub fn current_patient(&self) -> Option<Patient> {
        self.session.load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn service() -> AuthService {
        AuthService::new(SessionStore::in_memory()).with_latency(Duration::ZERO)
    }

    fn register_data(email: &str) -> RegisterData {
        RegisterData {
            first_name: "Alice".to_string(),
            last_name: "Walker".to_string(),
            email: email.to_string(),
            password: "Secret123".to_string(),
            phone: "(555) 111-2222".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1992, 4, 3).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_login_success_creates_session() {
        let auth = service();
        assert!(auth.login("john.doe@email.com", "password123").await.unwrap());

        let patient = auth.current_patient().unwrap();
        assert_eq!(patient.first_name, "John");
    }

    #[tokio::test]
    async fn test_login_rejects_wrong_password_and_unknown_email() {
        let auth = service();
        assert!(!auth.login("john.doe@email.com", "wrong").await.unwrap());
        assert!(!auth.login("nobody@email.com", "password123").await.unwrap());
        assert!(auth.current_patient().is_none());
    }

    #[tokio::test]
    async fn test_register_creates_and_signs_in() {
        let auth = service();
        assert!(auth.register(register_data("alice@example.com")).await.unwrap());

        let patient = auth.current_patient().unwrap();
        assert_eq!(patient.email, "alice@example.com");
        // Seeded registry has three patients, so the new id continues it
        assert_eq!(patient.id, "4");
        assert_eq!(patient.address, "");
        assert!(patient.medical_history.is_empty());
    }

    #[tokio::test]
    async fn test_register_rejects_duplicate_email() {
        let auth = service();
        assert!(!auth.register(register_data("jane.smith@email.com")).await.unwrap());
        assert!(auth.current_patient().is_none());
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let auth = service();
        auth.login("john.doe@email.com", "password123").await.unwrap();
        auth.logout();
        assert!(auth.current_patient().is_none());
    }
}
