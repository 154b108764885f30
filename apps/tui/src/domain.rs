use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identity of a single form field. Variant order is the order fields
/// appear on the entry screen and the order errors are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Username,
    Email,
    Password,
    DialCode,
    Mobile,
    Country,
    City,
    PanCard,
    AadharCard,
}

impl Field {
    pub const ALL: [Self; 11] = [
        Self::FirstName,
        Self::LastName,
        Self::Username,
        Self::Email,
        Self::Password,
        Self::DialCode,
        Self::Mobile,
        Self::Country,
        Self::City,
        Self::PanCard,
        Self::AadharCard,
    ];

    /// Wire key, matching the serialized form of the field set.
    pub const fn key(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
            Self::DialCode => "dialCode",
            Self::Mobile => "mobile",
            Self::Country => "country",
            Self::City => "city",
            Self::PanCard => "panCard",
            Self::AadharCard => "aadharCard",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Username => "Username",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::DialCode => "Dial Code",
            Self::Mobile => "Mobile",
            Self::Country => "Country",
            Self::City => "City",
            Self::PanCard => "PAN Card",
            Self::AadharCard => "Aadhar Card",
        }
    }
}

/// The complete set of current form field values. Every field is always
/// present; "unset" is the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldSet {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub dial_code: String,
    pub mobile: String,
    pub country: String,
    pub city: String,
    pub pan_card: String,
    pub aadhar_card: String,
}

impl Default for FieldSet {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            username: String::new(),
            email: String::new(),
            password: String::new(),
            dial_code: "+91".to_string(),
            mobile: String::new(),
            country: String::new(),
            city: String::new(),
            pan_card: String::new(),
            aadhar_card: String::new(),
        }
    }
}

impl FieldSet {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::DialCode => &self.dial_code,
            Field::Mobile => &self.mobile,
            Field::Country => &self.country,
            Field::City => &self.city,
            Field::PanCard => &self.pan_card,
            Field::AadharCard => &self.aadhar_card,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Username => &mut self.username,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::DialCode => &mut self.dial_code,
            Field::Mobile => &mut self.mobile,
            Field::Country => &mut self.country,
            Field::City => &mut self.city,
            Field::PanCard => &mut self.pan_card,
            Field::AadharCard => &mut self.aadhar_card,
        };
        *slot = value.into();
    }
}

/// Current validation failures, keyed by field. Recomputed from scratch on
/// every validation pass; a missing key means the field passes.
pub type ErrorSet = BTreeMap<Field, String>;

/// Static country to city options, injected at startup and immutable for
/// the lifetime of the app.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryCityTable(BTreeMap<String, Vec<String>>);

impl CountryCityTable {
    pub fn builtin() -> Self {
        let mut table = BTreeMap::new();
        table.insert(
            "India".to_string(),
            vec![
                "New Delhi".to_string(),
                "Mumbai".to_string(),
                "Bangalore".to_string(),
            ],
        );
        table.insert(
            "USA".to_string(),
            vec![
                "New York".to_string(),
                "Chicago".to_string(),
                "Los Angeles".to_string(),
            ],
        );
        Self(table)
    }

    pub const fn from_map(map: BTreeMap<String, Vec<String>>) -> Self {
        Self(map)
    }

    pub fn countries(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }

    /// City options for a country. Unknown countries have no cities.
    pub fn cities(&self, country: &str) -> &[String] {
        self.0.get(country).map_or(&[], Vec::as_slice)
    }
}

impl Default for CountryCityTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Immutable copy of the field set taken at submit time. The confirmation
/// screen reads this, never the live form state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub fields: FieldSet,
    pub submitted_at: String,
}

impl Snapshot {
    pub fn take(fields: &FieldSet) -> Self {
        Self {
            fields: fields.clone(),
            submitted_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}
