// File: src/geolocation.rs
// Purpose: Location-based check-in verification

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Medical facility coordinates (example values)
pub const FACILITY_LOCATION: Coordinates = Coordinates {
    latitude: 40.7128,
    longitude: -74.0060,
};

/// Maximum distance allowed for check-in, in meters
pub const MAX_CHECKIN_DISTANCE_M: f64 = 100.0;

const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two coordinates in meters (haversine)
pub fn distance_m(a: Coordinates, b: Coordinates) -> f64 {
    let phi1 = a.latitude.to_radians();
    let phi2 = b.latitude.to_radians();
    let delta_phi = (b.latitude - a.latitude).to_radians();
    let delta_lambda = (b.longitude - a.longitude).to_radians();

    let h = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

/// Whether the user is close enough to the facility to check in
pub fn is_within_checkin_range(user_location: Coordinates) -> bool {
    distance_m(user_location, FACILITY_LOCATION) <= MAX_CHECKIN_DISTANCE_M
}

/// Format a distance for display: meters under 1 km, otherwise kilometers
/// with one decimal
pub fn format_distance(meters: f64) -> String {
    if meters < 1000.0 {
        format!("{}m", meters.round() as i64)
    } else {
        format!("{:.1}km", meters / 1000.0)
    }
}

/// Why a position could not be acquired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationError {
    PermissionDenied,
    Unavailable,
    Timeout,
}

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationError::PermissionDenied => write!(
                f,
                "Location access denied. Please enable location services and try again."
            ),
            LocationError::Unavailable => write!(
                f,
                "Location information is unavailable. Please try again."
            ),
            LocationError::Timeout => {
                write!(f, "Location request timed out. Please try again.")
            }
        }
    }
}

impl std::error::Error for LocationError {}

/// Source of the user's current position.
///
/// The platform positioning API sits behind this seam; tests and the mock
/// application use [`FixedLocation`].
pub trait LocationProvider: Send + Sync {
    fn current_location(&self) -> Result<Coordinates, LocationError>;
}

/// Provider that always reports the same position
pub struct FixedLocation(pub Coordinates);

impl LocationProvider for FixedLocation {
    fn current_location(&self) -> Result<Coordinates, LocationError> {
        Ok(self.0)
    }
}

/// Provider that always fails with the given error
pub struct UnavailableLocation(pub LocationError);

impl LocationProvider for UnavailableLocation {
    fn current_location(&self) -> Result<Coordinates, LocationError> {
        Err(self.0)
    }
}

/// Outcome of a proximity verification attempt
#[derive(Debug, Clone, PartialEq)]
pub struct CheckInVerification {
    pub success: bool,
    pub message: String,
    /// Rounded distance to the facility, when a position was acquired
    pub distance_m: Option<u32>,
}

/// Verify the user is within check-in range of the facility
pub fn verify_location_for_checkin(provider: &dyn LocationProvider) -> CheckInVerification {
    let user_location = match provider.current_location() {
        Ok(coordinates) => coordinates,
        Err(error) => {
            return CheckInVerification {
                success: false,
                message: error.to_string(),
                distance_m: None,
            }
        }
    };

    let distance = distance_m(user_location, FACILITY_LOCATION);
    let rounded = distance.round() as u32;

    if distance <= MAX_CHECKIN_DISTANCE_M {
        CheckInVerification {
            success: true,
            message: "Location verified successfully. You can proceed with check-in.".to_string(),
            distance_m: Some(rounded),
        }
    } else {
        CheckInVerification {
            success: false,
            message: format!(
                "You must be within {}m of the medical facility to check in. You are currently {}m away.",
                MAX_CHECKIN_DISTANCE_M as u32, rounded
            ),
            distance_m: Some(rounded),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_zero_distance() {
        assert!(distance_m(FACILITY_LOCATION, FACILITY_LOCATION) < 1e-6);
    }

    #[test]
    fn test_known_distance_new_york_to_los_angeles() {
        let los_angeles = Coordinates {
            latitude: 34.0522,
            longitude: -118.2437,
        };
        let distance = distance_m(FACILITY_LOCATION, los_angeles);
        // ~3936 km; allow a generous tolerance for the spherical model
        assert!((3_920_000.0..3_950_000.0).contains(&distance), "{distance}");
    }

    #[test]
    fn test_checkin_range_gate() {
        // ~89m north of the facility
        let near = Coordinates {
            latitude: FACILITY_LOCATION.latitude + 0.0008,
            longitude: FACILITY_LOCATION.longitude,
        };
        // ~222m north of the facility
        let far = Coordinates {
            latitude: FACILITY_LOCATION.latitude + 0.002,
            longitude: FACILITY_LOCATION.longitude,
        };
        assert!(is_within_checkin_range(near));
        assert!(!is_within_checkin_range(far));
    }

    #[test]
    fn test_verify_in_range() {
        let provider = FixedLocation(FACILITY_LOCATION);
        let verification = verify_location_for_checkin(&provider);
        assert!(verification.success);
        assert_eq!(
            verification.message,
            "Location verified successfully. You can proceed with check-in."
        );
        assert_eq!(verification.distance_m, Some(0));
    }

    #[test]
    fn test_verify_out_of_range_reports_distance() {
        let provider = FixedLocation(Coordinates {
            latitude: FACILITY_LOCATION.latitude + 0.002,
            longitude: FACILITY_LOCATION.longitude,
        });
        let verification = verify_location_for_checkin(&provider);
        assert!(!verification.success);
        assert!(verification.message.starts_with("You must be within 100m"));
        let distance = verification.distance_m.unwrap();
        assert!((215..230).contains(&distance), "{distance}");
    }

    #[test]
    fn test_verify_provider_failure() {
        let provider = UnavailableLocation(LocationError::PermissionDenied);
        let verification = verify_location_for_checkin(&provider);
        assert!(!verification.success);
        assert_eq!(
            verification.message,
            "Location access denied. Please enable location services and try again."
        );
        assert_eq!(verification.distance_m, None);
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(87.4), "87m");
        assert_eq!(format_distance(999.4), "999m");
        assert_eq!(format_distance(1500.0), "1.5km");
    }
}
