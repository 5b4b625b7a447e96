use serde::{Deserialize, Serialize};

use crate::SerializableSecretString;

/// Configuration for connecting to one database instance, local or remote.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "snake_case")]
pub struct DbConnectionConfig {
    /// Name of the database to dump from or restore into.
    pub name: String,
    /// Username for authenticating with the database server.
    pub user: String,
    /// Password for the specified user. This field is sensitive and redacted in debug output.
    pub password: SerializableSecretString,
    /// Hostname or IP address of the database server.
    pub address: String,
    /// Port number on which the database server is listening.
    pub port: String,
}
