//! User account and profile models

use serde::{Deserialize, Serialize};

use super::null_as_default;
use crate::client::form::FormFields;

/// Username/password pair sent to register and login
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub(crate) fn to_form(&self) -> FormFields {
        FormFields::new()
            .field("username", &self.username)
            .field("password", &self.password)
    }
}

/// Payload of a successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginData {
    /// Bearer token for subsequent requests
    #[serde(alias = "access_token")]
    pub token: String,
}

/// User profile as returned by the service.
///
/// Fields the service leaves unset (missing or `null`) read as empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub nickname: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub department: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
}

/// Editable subset of the profile
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub nickname: Option<String>,
    pub name: Option<String>,
    pub department: Option<String>,
}

impl ProfileUpdate {
    pub(crate) fn to_form(&self) -> FormFields {
        FormFields::new()
            .optional("nickname", self.nickname.as_deref())
            .optional("name", self.name.as_deref())
            .optional("department", self.department.as_deref())
    }
}

impl From<&Profile> for ProfileUpdate {
    fn from(profile: &Profile) -> Self {
        Self {
            nickname: Some(profile.nickname.clone()),
            name: Some(profile.name.clone()),
            department: Some(profile.department.clone()),
        }
    }
}
