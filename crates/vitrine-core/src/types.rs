// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Vitrine client.
//
// Wire types accept the loose JSON the PHP API produces: numeric ids, nulls
// in place of strings, and alternative field names for the same value.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Stable identifier of a service offering (`service_menu_id`).
///
/// The server sends it either as a string or as a number; it is always kept
/// in its stringified form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ServiceId(pub String);

impl ServiceId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ServiceId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl std::fmt::Display for ServiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ServiceId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        scalar_to_string(&value)
            .map(Self)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid service id: {value}")))
    }
}

/// Whether a service is currently offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    #[default]
    Active,
    Inactive,
}

impl ServiceStatus {
    fn from_wire(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Active,
            Some(Value::Bool(b)) => {
                if *b {
                    Self::Active
                } else {
                    Self::Inactive
                }
            }
            Some(Value::Number(n)) => {
                if n.as_i64() == Some(1) {
                    Self::Active
                } else {
                    Self::Inactive
                }
            }
            Some(Value::String(s)) => {
                if s == "1" || s.eq_ignore_ascii_case("active") {
                    Self::Active
                } else {
                    Self::Inactive
                }
            }
            Some(_) => Self::Inactive,
        }
    }
}

/// One entry of the service catalog.  Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WireServiceItem")]
pub struct ServiceItem {
    pub id: ServiceId,
    pub name: String,
    pub description: String,
    /// File name of the service image, relative to the `service/` upload dir.
    pub icon_path: String,
    pub status: ServiceStatus,
}

/// Raw catalog record as sent by the server.
#[derive(Deserialize)]
struct WireServiceItem {
    service_menu_id: Option<Value>,
    service_menu_name: Option<Value>,
    service_name: Option<Value>,
    description: Option<Value>,
    service_img: Option<Value>,
    service_icon: Option<Value>,
    status: Option<Value>,
}

impl TryFrom<WireServiceItem> for ServiceItem {
    type Error = String;

    fn try_from(wire: WireServiceItem) -> Result<Self, Self::Error> {
        let id = wire
            .service_menu_id
            .as_ref()
            .and_then(scalar_to_string)
            .ok_or_else(|| "service record without service_menu_id".to_string())?;

        let name = first_string([&wire.service_name, &wire.service_menu_name]);
        let icon_path = first_string([&wire.service_img, &wire.service_icon]);
        let description = wire
            .description
            .as_ref()
            .and_then(scalar_to_string)
            .unwrap_or_default();

        Ok(Self {
            id: ServiceId(id),
            name,
            description,
            icon_path,
            status: ServiceStatus::from_wire(wire.status.as_ref()),
        })
    }
}

/// Transient context attached to one search invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchContext {
    pub query: String,
    pub user_id: Option<String>,
    pub location: Option<String>,
}

/// Home-screen carousel image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    #[serde(rename = "slider_img", deserialize_with = "lenient_string")]
    pub image: String,
    #[serde(rename = "slider_title", default, deserialize_with = "lenient_string")]
    pub title: String,
}

/// A showcased project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioEntry {
    #[serde(rename = "portfolio_title", default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(rename = "portfolio_img", default, deserialize_with = "lenient_string")]
    pub image: String,
    /// HTML as authored in the website CMS.
    #[serde(rename = "portfolio_desc", default, deserialize_with = "lenient_string")]
    pub description_html: String,
    #[serde(rename = "portfolio_link", default, deserialize_with = "lenient_string")]
    pub link: String,
}

impl PortfolioEntry {
    /// Description with markup removed, suitable for a text label.
    pub fn plain_description(&self) -> String {
        let text = strip_markup(&self.description_html);
        if text.is_empty() {
            "No description available.".into()
        } else {
            text
        }
    }
}

/// A push-style announcement shown on the notifications screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(rename = "notification_img", default, deserialize_with = "lenient_string")]
    pub image: String,
    /// Submission date as formatted by the server.
    #[serde(rename = "sub_date", default, deserialize_with = "lenient_string")]
    pub submitted: String,
}

/// Profile of a logged-in user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, deserialize_with = "lenient_string")]
    pub registration_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub mobile_no: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub address: String,
}

/// How the user identifies themselves at login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginIdentifier {
    Email(String),
    Mobile(String),
}

impl LoginIdentifier {
    /// Form field name the login endpoint expects for this identifier.
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Email(_) => "email",
            Self::Mobile(_) => "mobile_no",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::Email(v) | Self::Mobile(v) => v,
        }
    }
}

/// Contact-screen enquiry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EnquiryForm {
    pub name: String,
    pub email: String,
    pub mobile_no: String,
    pub subject: String,
    pub query: String,
}

/// "Who are you?" choice on the quotation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientKind {
    BusinessOrg,
    CollegeSchool,
    Firm,
    Other,
}

impl ClientKind {
    pub const ALL: [ClientKind; 4] = [
        Self::BusinessOrg,
        Self::CollegeSchool,
        Self::Firm,
        Self::Other,
    ];

    /// Label shown to the user and sent as `who_you_are`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::BusinessOrg => "Business/Org",
            Self::CollegeSchool => "College/School",
            Self::Firm => "Firm",
            Self::Other => "Other",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.label() == label)
    }
}

/// Products a quotation can be requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QuotationProduct {
    Website,
    AndroidApp,
    Software,
    Other,
}

impl QuotationProduct {
    pub const ALL: [QuotationProduct; 4] = [
        Self::Website,
        Self::AndroidApp,
        Self::Software,
        Self::Other,
    ];

    /// Key sent to the server inside the `products` list.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::AndroidApp => "androidApp",
            Self::Software => "software",
            Self::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Website => "Website",
            Self::AndroidApp => "Android App",
            Self::Software => "Software",
            Self::Other => "Other",
        }
    }
}

/// Quotation request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuotationRequest {
    pub client_kind: Option<ClientKind>,
    pub client_description: String,
    pub products: Vec<QuotationProduct>,
    pub product_description: String,
    pub email: String,
    pub user_id: String,
}

impl QuotationRequest {
    /// Comma-separated product keys, in the order the user ticked them.
    pub fn products_field(&self) -> String {
        self.products
            .iter()
            .map(|p| p.key())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Upper bound on an attached résumé.
pub const MAX_RESUME_BYTES: u64 = 5 * 1024 * 1024;

/// Résumé attached to a job application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resume {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl Resume {
    /// MIME type for a résumé file extension.
    pub fn mime_for_extension(ext: &str) -> &'static str {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => "application/pdf",
            "doc" => "application/msword",
            "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            _ => "application/octet-stream",
        }
    }
}

/// Careers-screen job application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CareerApplication {
    pub name: String,
    pub email: String,
    pub contact: String,
    pub address: String,
    pub experience: String,
    pub expected_salary: String,
    pub qualification: String,
    pub job_title: String,
    pub current_employer: String,
    pub resume: Option<Resume>,
}

impl CareerApplication {
    /// Text fields paired with the form keys the server expects.
    pub fn text_fields(&self) -> [(&'static str, &str); 9] {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("contact", &self.contact),
            ("address", &self.address),
            ("experience", &self.experience),
            ("esalary", &self.expected_salary),
            ("qualification", &self.qualification),
            ("job", &self.job_title),
            ("cemp", &self.current_employer),
        ]
    }
}

// -- Wire helpers -------------------------------------------------------------

/// Deserialize a string field that may arrive as a number or `null`.
pub fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(scalar_to_string).unwrap_or_default())
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn first_string<const N: usize>(candidates: [&Option<Value>; N]) -> String {
    candidates
        .into_iter()
        .filter_map(|v| v.as_ref().and_then(scalar_to_string))
        .find(|s| !s.is_empty())
        .unwrap_or_default()
}

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("static regex"));
static ENTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&[^;]+;").expect("static regex"));

/// Remove HTML tags and replace character entities with a space.
pub fn strip_markup(html: &str) -> String {
    let without_tags = TAG_RE.replace_all(html, "");
    ENTITY_RE.replace_all(&without_tags, " ").into_owned()
}
