//! PII labels

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Label attached to a detected span
///
/// The first group comes from the entity recognizer, the second from the
/// pattern catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PiiLabel {
    // Recognizer labels
    /// Person name (PER)
    Person,
    /// Organization (ORG)
    Organization,
    /// Location (LOC)
    Location,
    /// Geo-political entity: state, country (GPE)
    GeoPoliticalEntity,
    /// Anything else the recognizer tags (MISC); never accepted by default
    Miscellaneous,

    // Pattern catalog labels
    /// CPF, punctuated form
    TaxIdPrimary,
    /// CPF, bare eleven digits
    TaxIdAlternate,
    /// CNPJ
    CompanyId,
    /// RG
    IdDocument,
    /// Telephone number
    Phone,
    /// Email address
    Email,
    /// Passport number
    Passport,
    /// Payment card number
    PaymentCard,
}

impl PiiLabel {
    /// Every label, recognizer labels first
    pub const ALL: [PiiLabel; 13] = [
        Self::Person,
        Self::Organization,
        Self::Location,
        Self::GeoPoliticalEntity,
        Self::Miscellaneous,
        Self::TaxIdPrimary,
        Self::TaxIdAlternate,
        Self::CompanyId,
        Self::IdDocument,
        Self::Phone,
        Self::Email,
        Self::Passport,
        Self::PaymentCard,
    ];

    /// Labels accepted from the recognizer unless configured otherwise
    pub const DEFAULT_ACCEPTED: [PiiLabel; 4] = [
        Self::Person,
        Self::Organization,
        Self::Location,
        Self::GeoPoliticalEntity,
    ];

    /// Short display tag
    pub fn label(&self) -> &'static str {
        match self {
            Self::Person => "PER",
            Self::Organization => "ORG",
            Self::Location => "LOC",
            Self::GeoPoliticalEntity => "GPE",
            Self::Miscellaneous => "MISC",
            Self::TaxIdPrimary | Self::TaxIdAlternate => "CPF",
            Self::CompanyId => "CNPJ",
            Self::IdDocument => "RG",
            Self::Phone => "TELEFONE",
            Self::Email => "EMAIL",
            Self::Passport => "PASSAPORTE",
            Self::PaymentCard => "CARTAO_CREDITO",
        }
    }

    /// Kebab-case identifier used in configuration files
    pub fn key(&self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::Organization => "organization",
            Self::Location => "location",
            Self::GeoPoliticalEntity => "geo-political-entity",
            Self::Miscellaneous => "miscellaneous",
            Self::TaxIdPrimary => "tax-id-primary",
            Self::TaxIdAlternate => "tax-id-alternate",
            Self::CompanyId => "company-id",
            Self::IdDocument => "id-document",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Passport => "passport",
            Self::PaymentCard => "payment-card",
        }
    }

    /// Check if this label is produced by the entity recognizer
    pub fn is_recognizer_label(&self) -> bool {
        matches!(
            self,
            Self::Person
                | Self::Organization
                | Self::Location
                | Self::GeoPoliticalEntity
                | Self::Miscellaneous
        )
    }

    /// Check if this label is produced by the pattern catalog
    pub fn is_pattern_label(&self) -> bool {
        !self.is_recognizer_label()
    }
}

impl fmt::Display for PiiLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PiiLabel {
    type Err = String;

    /// Accepts the kebab-case key or the short tag, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        match normalized.as_str() {
            "person" | "per" => Ok(Self::Person),
            "organization" | "org" => Ok(Self::Organization),
            "location" | "loc" => Ok(Self::Location),
            "geo-political-entity" | "gpe" => Ok(Self::GeoPoliticalEntity),
            "miscellaneous" | "misc" => Ok(Self::Miscellaneous),
            "tax-id-primary" | "cpf" => Ok(Self::TaxIdPrimary),
            "tax-id-alternate" => Ok(Self::TaxIdAlternate),
            "company-id" | "cnpj" => Ok(Self::CompanyId),
            "id-document" | "rg" => Ok(Self::IdDocument),
            "phone" | "telefone" => Ok(Self::Phone),
            "email" => Ok(Self::Email),
            "passport" | "passaporte" => Ok(Self::Passport),
            "payment-card" | "cartao-credito" => Ok(Self::PaymentCard),
            _ => Err(format!("Unknown PII label: {s}")),
        }
    }
}
