//! Wire models for the Leads service.
//!
//! Field names follow the service's JSON contract (camelCase). All models
//! are request/response scoped: built for one exchange, then discarded.

use serde::{Deserialize, Serialize};

/// A geographic subdivision identified by id and postal pin code.
///
/// Returned by the service and referenced by Leads; never mutated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubArea {
    /// Service-assigned identifier.
    pub id: i64,
    /// Postal pin code of the subdivision.
    pub pin_code: String,
}

/// Outbound payload for creating a Lead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLead {
    /// Contact name.
    pub name: String,
    /// Pin code of the referenced SubArea.
    pub pin_code: String,
    /// Identifier of the referenced SubArea.
    pub sub_area_id: i64,
    /// Postal address.
    pub address: String,
    /// Contact phone number.
    pub mobile_number: String,
    /// Contact e-mail address.
    pub email: String,
}

/// Full Lead record as returned by the service, including the resolved
/// SubArea reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRecord {
    /// Service-generated identifier.
    pub id: String,
    /// Contact name.
    pub name: String,
    /// Pin code of the referenced SubArea.
    pub pin_code: String,
    /// Identifier of the referenced SubArea.
    pub sub_area_id: i64,
    /// Postal address.
    pub address: String,
    /// Contact phone number.
    pub mobile_number: String,
    /// Contact e-mail address.
    pub email: String,
    /// The SubArea the Lead belongs to.
    pub sub_area: SubArea,
}

/// Identifier mapping returned by a successful create.
///
/// The service responds with a JSON object carrying at least an `id` field;
/// any other fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedLead {
    /// Identifier of the newly created Lead.
    pub id: String,
}

/// Error body returned on a non-success status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseError {
    /// Human-readable validation message.
    pub message: String,
}
