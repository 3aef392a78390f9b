// Payloads exchanged with the backend. Field names follow the backend's JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Body sent to `login`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    #[serde(rename = "clientType")]
    pub client_type: DeviceType,
}

/// Body returned by a successful login.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TokenData {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    /// ID of the logged in user.
    pub user: String,
}

impl TokenData {
    /// Value of the `Authorization` header, e.g. `Bearer abc`.
    #[must_use]
    pub fn authorization(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    Desktop,
    Phone,
    Tablet,
    LegalHold,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Desktop => "desktop",
            Self::Phone => "phone",
            Self::Tablet => "tablet",
            Self::LegalHold => "legalhold",
            Self::Unknown => "unknown",
        })
    }
}

/// Lifetime of a device. Also used as `clientType` on login.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Permanent,
    Temporary,
    LegalHold,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Permanent => "permanent",
            Self::Temporary => "temporary",
            Self::LegalHold => "legalhold",
            Self::Unknown => "unknown",
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

/// A device ("client") registered to the account, as reported by the backend.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Device {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// ISO 8601 registration time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// IP address the device was registered from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<DeviceClass>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<DeviceType>,
    /// Label of the cookie the device was registered with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookie: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PreKey {
    pub id: u16,
    /// Base64 encoded public key.
    pub key: String,
}

/// Partial device record for `PUT clients/{id}`. Absent fields are left as
/// they are on the server.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prekeys: Option<Vec<PreKey>>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct DeleteDeviceRequest<'a> {
    pub password: &'a str,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AssetSize {
    Preview,
    Complete,
}

/// Profile picture asset.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub key: String,
    pub size: AssetSize,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Asset {
    pub fn image(key: impl Into<String>, size: AssetSize) -> Self {
        Self {
            key: key.into(),
            size,
            kind: "image".to_string(),
        }
    }
}

/// Body for `PUT self`.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SelfUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assets: Option<Vec<Asset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl SelfUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.accent_id.is_none() && self.assets.is_none() && self.name.is_none()
    }
}
