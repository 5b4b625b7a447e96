use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Deref;

/// Wrapper around [`Secret<String>`] that implements [`Serialize`] and [`Deserialize`].
///
/// Database passwords are stored in plaintext in the configuration file but
/// must stay redacted once decoded, so the wrapper delegates `Debug` to the
/// inner secret.
#[derive(Clone)]
pub struct SerializableSecretString(Secret<String>);

impl SerializableSecretString {
    /// Returns the wrapped plaintext value.
    pub fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }
}

impl Deref for SerializableSecretString {
    type Target = Secret<String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Default for SerializableSecretString {
    fn default() -> Self {
        Self(Secret::new(String::new()))
    }
}

impl From<String> for SerializableSecretString {
    fn from(value: String) -> Self {
        Self(Secret::new(value))
    }
}

impl From<&str> for SerializableSecretString {
    fn from(value: &str) -> Self {
        Self(Secret::new(value.to_owned()))
    }
}

impl From<SerializableSecretString> for Secret<String> {
    fn from(value: SerializableSecretString) -> Self {
        value.0
    }
}

// Equality compares the exposed values. Configuration records are compared
// as a whole in tests and by callers, which a [`Secret`] alone does not allow.
impl PartialEq for SerializableSecretString {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for SerializableSecretString {}

impl Serialize for SerializableSecretString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0.expose_secret())
    }
}

impl<'de> Deserialize<'de> for SerializableSecretString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;

        Ok(Self(Secret::new(string)))
    }
}

impl fmt::Debug for SerializableSecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
