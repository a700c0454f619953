use crate::error::DecodingError;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use std::str::FromStr;

/// Export/import shape of a tool.
///
/// Every field is optional. Absent fields are left out of the encoding and
/// missing or `null` fields decode as absent, so `None` and `Some("")` survive
/// a round trip as distinct values. Unknown fields are ignored on decode.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToolExportRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Avatar image reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Object storage address prefix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_point: Option<String>,
    /// HTTP method name, not validated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// Protocol schema as raw JSON text, never parsed here
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_schema: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_type: Option<i32>,
    /// Opaque authentication payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_color: Option<String>,
}

impl ToolExportRecord {
    /// Create a record carrying only a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_end_point(mut self, end_point: impl Into<String>) -> Self {
        self.end_point = Some(end_point.into());
        self
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn with_web_schema(mut self, web_schema: impl Into<String>) -> Self {
        self.web_schema = Some(web_schema.into());
        self
    }

    pub fn with_auth_type(mut self, auth_type: i32) -> Self {
        self.auth_type = Some(auth_type);
        self
    }

    pub fn with_auth_info(mut self, auth_info: impl Into<String>) -> Self {
        self.auth_info = Some(auth_info.into());
        self
    }

    pub fn with_avatar_color(mut self, avatar_color: impl Into<String>) -> Self {
        self.avatar_color = Some(avatar_color.into());
        self
    }

    /// Wire names of every field, in declaration order
    pub const FIELD_NAMES: [&'static str; 10] = [
        "name",
        "description",
        "icon",
        "address",
        "endPoint",
        "method",
        "webSchema",
        "authType",
        "authInfo",
        "avatarColor",
    ];

    /// Wire names of the fields that are present, in declaration order
    pub fn present_fields(&self) -> Vec<&'static str> {
        let present = [
            self.name.is_some(),
            self.description.is_some(),
            self.icon.is_some(),
            self.address.is_some(),
            self.end_point.is_some(),
            self.method.is_some(),
            self.web_schema.is_some(),
            self.auth_type.is_some(),
            self.auth_info.is_some(),
            self.avatar_color.is_some(),
        ];
        Self::FIELD_NAMES
            .into_iter()
            .zip(present)
            .filter_map(|(field, present)| present.then_some(field))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_json_vec(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    pub fn write_json<W: Write>(&self, writer: W) -> serde_json::Result<()> {
        serde_json::to_writer(writer, self)
    }

    pub fn from_json(input: &str) -> Result<Self, DecodingError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn from_json_slice(input: &[u8]) -> Result<Self, DecodingError> {
        Ok(serde_json::from_slice(input)?)
    }

    /// Decode from a reader. The whole input must be a single record;
    /// trailing non-whitespace is an error.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, DecodingError> {
        Ok(serde_json::from_reader(reader)?)
    }
}

impl FromStr for ToolExportRecord {
    type Err = DecodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json(s)
    }
}
