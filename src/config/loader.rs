//! Rate table loading functionality.
//!
//! This module provides the [`RateTableLoader`] type for loading the
//! statutory rate snapshot from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::RateTable;

/// Loads and provides access to the statutory rate table.
///
/// # Directory Structure
///
/// The configuration directory holds a single snapshot file:
/// ```text
/// config/antigua/
/// └── rates.yaml    # SS, Medical Benefits, Education Levy, nurse shifts
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::RateTableLoader;
///
/// let loader = RateTableLoader::load("./config/antigua").unwrap();
/// let rates = loader.table();
/// println!("Snapshot {}", rates.version);
/// ```
#[derive(Debug, Clone)]
pub struct RateTableLoader {
    table: RateTable,
}

impl RateTableLoader {
    /// Loads the rate snapshot from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g. "./config/antigua")
    ///
    /// # Returns
    ///
    /// Returns a `RateTableLoader` on success, or an error if the snapshot
    /// file is missing (`ConfigNotFound`) or malformed (`ConfigParseError`).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let rates_path = path.as_ref().join("rates.yaml");
        let table = Self::load_yaml::<RateTable>(&rates_path)?;
        Ok(Self { table })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded rate table.
    pub fn table(&self) -> &RateTable {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::fs;

    fn write_snapshot(dir: &Path, content: &str) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join("rates.yaml"), content).unwrap();
    }

    fn valid_yaml() -> &'static str {
        r#"
version: "2025-01"
effective_date: 2025-01-01
social_security:
  employee_rate: "0.07"
  employer_rate: "0.09"
  monthly_insurable_ceiling: "6500.00"
medical_benefits:
  employee_rate: "0.035"
  employer_rate: "0.035"
  senior_employee_rate: "0.025"
  senior_age: 60
  max_age: 70
education_levy:
  low_rate: "0.025"
  high_rate: "0.05"
  monthly_threshold: "5416.67"
  monthly_exemption: "541.67"
nurse_shifts:
  weekday_day_rate: "30.00"
  weekday_night_rate: "35.00"
  weekend_rate: "40.00"
  day_start: "07:00:00"
  day_end: "19:00:00"
  shifts_per_week: 5
"#
    }

    #[test]
    fn test_load_valid_snapshot() {
        let dir = std::env::temp_dir().join("payroll_engine_loader_valid");
        write_snapshot(&dir, valid_yaml());

        let loader = RateTableLoader::load(&dir).unwrap();
        assert_eq!(loader.table().version, "2025-01");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_returns_config_not_found() {
        let dir = std::env::temp_dir().join("payroll_engine_loader_missing");
        let _ = fs::remove_dir_all(&dir);

        let result = RateTableLoader::load(&dir);
        assert!(matches!(
            result,
            Err(EngineError::ConfigNotFound { .. })
        ));
    }

    #[test]
    fn test_malformed_yaml_returns_parse_error() {
        let dir = std::env::temp_dir().join("payroll_engine_loader_malformed");
        write_snapshot(&dir, "version: [unterminated");

        let result = RateTableLoader::load(&dir);
        assert!(matches!(
            result,
            Err(EngineError::ConfigParseError { .. })
        ));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_shipped_snapshot_loads() {
        let loader = RateTableLoader::load("./config/antigua").unwrap();
        let table = loader.table();
        assert!(table.social_security.employee_rate > Decimal::ZERO);
        assert!(table.medical_benefits.senior_age < table.medical_benefits.max_age);
    }
}
