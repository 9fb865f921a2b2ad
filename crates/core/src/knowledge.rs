//! Hospital knowledge base document
//!
//! Mirrors the JSON layout of the static knowledge file. Every field is
//! optional; a missing section deserializes to its default and the resolver
//! substitutes placeholder text when rendering it.

use std::fmt;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::KnowledgeError;

/// The full knowledge base, loaded once at startup and never mutated
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HospitalRecord {
    /// Departments keyed by display name, in document order
    pub departments: IndexMap<String, Department>,
    pub hospital_info: HospitalInfo,
    pub insurance_partners: Vec<String>,
    pub payment_methods: Vec<String>,
    pub facilities: Facilities,
    pub visiting_hours: VisitingHours,
}

/// A clinical department
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Department {
    pub description: Option<String>,
    pub services: Vec<String>,
}

/// General hospital details
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HospitalInfo {
    pub contact: Contact,
    pub location: Option<String>,
    pub values: Vec<String>,
}

/// Phone numbers
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Contact {
    pub general: Option<String>,
    pub emergency: Option<String>,
    pub ambulance: Option<String>,
}

/// Physical facilities
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Facilities {
    pub beds: Option<Scalar>,
    pub ambulances: Option<Scalar>,
    pub pharmacy: Option<String>,
    pub radiology: Vec<String>,
}

/// Visiting schedule and rules
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct VisitingHours {
    pub morning: Option<String>,
    pub evening: Option<String>,
    pub rules: Vec<String>,
}

/// A value the document may write either as a string or as a number
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Scalar {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl HospitalRecord {
    /// Parse a knowledge document from JSON text
    pub fn from_json_str(json: &str) -> Result<Self, KnowledgeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a knowledge document from disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, KnowledgeError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| KnowledgeError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// True when the document carried no usable data at all
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
