//! Prospect module - the canonical output of the extraction engine

use crate::{ExtraData, ProspectStatus, QualityScore};

/// A prospect - one company found in an agent report
///
/// Records carry no durable identity: the persistence collaborator assigns
/// one when it stores them. Construction goes through the extractor's
/// cleaner, which guarantees a non-empty `company_name` and trimmed,
/// non-empty optional strings.
#[derive(Debug, Clone, PartialEq)]
pub struct ProspectRecord {
    /// Company name
    pub company_name: String,

    /// Company website
    pub website: Option<String>,

    /// Contact email
    pub email: Option<String>,

    /// Contact phone
    pub phone: Option<String>,

    /// WhatsApp number
    pub whatsapp: Option<String>,

    /// Primary contact name
    pub contact_name: Option<String>,

    /// Primary contact position
    pub contact_position: Option<String>,

    /// Location, or the `unspecified` sentinel
    pub location: Option<String>,

    /// Business sector
    pub sector: Option<String>,

    /// Short description
    pub description: Option<String>,

    /// Plausibility score in [0, 100]
    pub quality_score: QualityScore,

    /// Vetting status
    pub status: ProspectStatus,

    /// Informational payload
    pub extra_data: ExtraData,
}

impl ProspectRecord {
    /// Create a record with only a name and extra data; everything else empty
    pub fn new(company_name: impl Into<String>, extra_data: ExtraData) -> Self {
        Self {
            company_name: company_name.into(),
            website: None,
            email: None,
            phone: None,
            whatsapp: None,
            contact_name: None,
            contact_position: None,
            location: None,
            sector: None,
            description: None,
            quality_score: QualityScore::default(),
            status: ProspectStatus::default(),
            extra_data,
        }
    }

    /// Whether any direct contact channel is known
    pub fn has_contact_channel(&self) -> bool {
        self.email.is_some() || self.phone.is_some() || self.whatsapp.is_some()
    }

    /// Whether the record is qualified
    pub fn is_qualified(&self) -> bool {
        self.status == ProspectStatus::Qualified
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Provenance;

    #[test]
    fn test_new_record_defaults() {
        let record = ProspectRecord::new("Farfetch", ExtraData::new(Provenance::new("emphasis", 0)));
        assert_eq!(record.company_name, "Farfetch");
        assert_eq!(record.status, ProspectStatus::Identified);
        assert_eq!(record.quality_score.value(), 50.0);
        assert!(!record.has_contact_channel());
        assert!(!record.is_qualified());
    }

    #[test]
    fn test_contact_channel() {
        let mut record = ProspectRecord::new("SSENSE", ExtraData::new(Provenance::new("emphasis", 1)));
        record.phone = Some("+1 514 555 0100".to_string());
        assert!(record.has_contact_channel());
    }
}
