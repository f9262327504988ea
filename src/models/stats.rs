// ============================================================================
// PARKING STATS - Estadísticas devueltas por el servicio de análisis
// ============================================================================
// El backend manda las estadísticas en un header con sintaxis de dict de
// Python: {'total_spaces': 15, 'occupied': 3, 'vacant': 12}
// ============================================================================

use serde::{Deserialize, Serialize};
use crate::services::error::UploadError;

/// Resumen de plazas del último frame analizado
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkingStats {
    pub total_spaces: u32,
    pub occupied: u32,
    pub vacant: u32,
}

impl ParkingStats {
    /// Parsear el valor crudo del header de estadísticas.
    /// Las comillas simples se normalizan a dobles antes de parsear como JSON.
    pub fn from_header(raw: &str) -> Result<Self, UploadError> {
        let normalized = raw.trim().replace('\'', "\"");
        let stats = serde_json::from_str::<ParkingStats>(&normalized)?;
        Ok(stats)
    }

    /// occupied + vacant == total_spaces
    pub fn is_consistent(&self) -> bool {
        self.occupied.checked_add(self.vacant) == Some(self.total_spaces)
    }

    /// Porcentaje de ocupación (0 si no hay plazas)
    pub fn occupancy_percent(&self) -> f64 {
        if self.total_spaces == 0 {
            return 0.0;
        }
        f64::from(self.occupied) * 100.0 / f64::from(self.total_spaces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_quoted_header_matches_double_quoted() {
        let single = ParkingStats::from_header("{'total_spaces': 10, 'occupied': 4, 'vacant': 6}").unwrap();
        let double = ParkingStats::from_header(r#"{"total_spaces": 10, "occupied": 4, "vacant": 6}"#).unwrap();
        assert_eq!(single, double);
        assert_eq!(single, ParkingStats { total_spaces: 10, occupied: 4, vacant: 6 });
    }

    #[test]
    fn python_none_is_a_metadata_error() {
        let err = ParkingStats::from_header("None").unwrap_err();
        assert!(matches!(err, UploadError::MetadataParse(_)));
        assert!(err.user_message().is_none());
    }

    #[test]
    fn missing_field_is_rejected() {
        assert!(ParkingStats::from_header("{'total_spaces': 10, 'occupied': 4}").is_err());
        assert!(ParkingStats::from_header("").is_err());
    }

    #[test]
    fn consistency_and_occupancy() {
        let stats = ParkingStats { total_spaces: 15, occupied: 3, vacant: 12 };
        assert!(stats.is_consistent());
        assert!((stats.occupancy_percent() - 20.0).abs() < f64::EPSILON);

        let skewed = ParkingStats { total_spaces: 15, occupied: 3, vacant: 3 };
        assert!(!skewed.is_consistent());

        let empty = ParkingStats { total_spaces: 0, occupied: 0, vacant: 0 };
        assert_eq!(empty.occupancy_percent(), 0.0);
    }
}
