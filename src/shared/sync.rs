use serde::{Deserialize, Serialize};

use crate::shared::{ConfigError, DbConnectionConfig};

/// Fallback concurrency bound used when `max_routines` is absent or zero.
pub const DEFAULT_MAX_ROUTINES: usize = 5;

/// Root configuration for a dump-and-sync run.
///
/// Decoded from a single flat JSON file. Every field uses its zero value
/// when the key is absent, so an incomplete document decodes successfully
/// and is rejected by [`SyncConfig::validate`] with a consolidated report
/// instead of a decode error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "snake_case")]
pub struct SyncConfig {
    /// Tables to dump and transfer, in order. Must be non-empty.
    pub tables: Vec<String>,
    /// Username for the SSH tunnel to the remote server.
    pub ssh_user: String,
    /// Hostname or IP address of the remote server the tunnel connects to.
    pub remote_server: String,
    /// Connection parameters for the local database.
    pub local_db: DbConnectionConfig,
    /// Connection parameters for the remote database.
    pub remote_db: DbConnectionConfig,
    /// Filesystem path to the SSH private key. Existence is not checked here.
    pub ssh_key_path: String,
    /// Upper bound on concurrent transfer workers.
    pub max_routines: usize,
    /// Whether dump output should be compressed.
    pub compress_dump: bool,
}

/// Required parameters in report order.
///
/// Each entry maps a parameter's display name to a predicate that is true
/// when the field is empty. The port fields are deliberately absent: they
/// are part of the schema but have never been enforced as mandatory.
const REQUIRED_FIELDS: &[(&str, fn(&SyncConfig) -> bool)] = &[
    ("Tables", |cfg| cfg.tables.is_empty()),
    ("SSHUser", |cfg| cfg.ssh_user.is_empty()),
    ("RemoteServer", |cfg| cfg.remote_server.is_empty()),
    ("SSHKeyPath", |cfg| cfg.ssh_key_path.is_empty()),
    ("LocalDB.Name", |cfg| cfg.local_db.name.is_empty()),
    ("LocalDB.User", |cfg| cfg.local_db.user.is_empty()),
    ("LocalDB.Password", |cfg| {
        cfg.local_db.password.expose_secret().is_empty()
    }),
    ("LocalDB.Address", |cfg| cfg.local_db.address.is_empty()),
    ("RemoteDB.Name", |cfg| cfg.remote_db.name.is_empty()),
    ("RemoteDB.User", |cfg| cfg.remote_db.user.is_empty()),
    ("RemoteDB.Password", |cfg| {
        cfg.remote_db.password.expose_secret().is_empty()
    }),
    ("RemoteDB.Address", |cfg| cfg.remote_db.address.is_empty()),
];

impl SyncConfig {
    /// Returns the display names of every required parameter that is empty,
    /// in report order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        REQUIRED_FIELDS
            .iter()
            .filter(|(_, is_empty)| is_empty(self))
            .map(|(name, _)| *name)
            .collect()
    }

    /// Validates that every required parameter is populated.
    ///
    /// Checks the whole table rather than stopping at the first violation and
    /// returns [`ConfigError::MissingRequiredFields`] naming all of them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ConfigError::MissingRequiredFields(missing));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated_config() -> SyncConfig {
        SyncConfig {
            tables: vec!["users".to_string()],
            ssh_user: "deploy".to_string(),
            remote_server: "10.0.0.5".to_string(),
            local_db: DbConnectionConfig {
                name: "app".to_string(),
                user: "postgres".to_string(),
                password: "local-pass".into(),
                address: "127.0.0.1".to_string(),
                port: "5432".to_string(),
            },
            remote_db: DbConnectionConfig {
                name: "app".to_string(),
                user: "postgres".to_string(),
                password: "remote-pass".into(),
                address: "10.0.0.5".to_string(),
                port: "5432".to_string(),
            },
            ssh_key_path: "/keys/id_rsa".to_string(),
            max_routines: DEFAULT_MAX_ROUTINES,
            compress_dump: false,
        }
    }

    #[test]
    fn test_validate_passes_for_populated_config() {
        assert!(populated_config().validate().is_ok());
    }

    #[test]
    fn test_missing_fields_follow_report_order() {
        let mut config = populated_config();
        config.remote_db.user = String::new();
        config.ssh_user = String::new();
        config.local_db.address = String::new();

        assert_eq!(
            config.missing_fields(),
            vec!["SSHUser", "LocalDB.Address", "RemoteDB.User"]
        );
    }

    #[test]
    fn test_empty_config_reports_every_required_field() {
        let config = SyncConfig::default();

        assert_eq!(
            config.missing_fields(),
            vec![
                "Tables",
                "SSHUser",
                "RemoteServer",
                "SSHKeyPath",
                "LocalDB.Name",
                "LocalDB.User",
                "LocalDB.Password",
                "LocalDB.Address",
                "RemoteDB.Name",
                "RemoteDB.User",
                "RemoteDB.Password",
                "RemoteDB.Address",
            ]
        );
    }

    #[test]
    fn test_ports_are_not_required() {
        let mut config = populated_config();
        config.local_db.port = String::new();
        config.remote_db.port = String::new();

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_error_joins_names_with_commas() {
        let mut config = populated_config();
        config.local_db.password = "".into();
        config.remote_db.name = String::new();

        let error = config.validate().unwrap_err();

        assert!(
            error
                .to_string()
                .ends_with("missing required parameters: LocalDB.Password, RemoteDB.Name")
        );
    }
}
