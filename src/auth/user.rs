use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A user record as supplied by the identity provider.
///
/// Fields this layer does not know about are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Partial user record carried by a profile update.
///
/// Each typed field distinguishes "absent" (`None`, keep the current value)
/// from "present" (`Some`, overwrite), so an explicit `null` clears the
/// field just like it does for `extra` entries.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfilePatch {
    #[serde(with = "::serde_with::rust::double_option", skip_serializing_if = "Option::is_none")]
    pub uid: Option<Option<String>>,
    #[serde(with = "::serde_with::rust::double_option", skip_serializing_if = "Option::is_none")]
    pub email: Option<Option<String>>,
    #[serde(with = "::serde_with::rust::double_option", skip_serializing_if = "Option::is_none")]
    pub name: Option<Option<String>>,
    #[serde(with = "::serde_with::rust::double_option", skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<Option<String>>,
    #[serde(with = "::serde_with::rust::double_option", skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<Option<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserRecord {
    /// Shallow merge: every field present in `patch` overwrites the one in
    /// `self`, including with `null`; absent fields keep their current value.
    pub fn merged_with(self, patch: ProfilePatch) -> UserRecord {
        let mut extra = self.extra;
        extra.extend(patch.extra);

        UserRecord {
            uid: patch.uid.unwrap_or(self.uid),
            email: patch.email.unwrap_or(self.email),
            name: patch.name.unwrap_or(self.name),
            photo_url: patch.photo_url.unwrap_or(self.photo_url),
            phone_number: patch.phone_number.unwrap_or(self.phone_number),
            extra,
        }
    }
}
