//! Location of a prospect

/// Sentinel stored when no location could be found
pub const UNSPECIFIED_LOCATION: &str = "unspecified";

/// Result of looking for a location
///
/// `Unspecified` means extraction ran and found nothing. A field that was
/// never extracted is represented by `Option::None` around this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// A place named in the report
    Found(String),

    /// Extraction ran but found no place
    Unspecified,
}

impl Location {
    /// Get the location as stored on a record
    pub fn as_str(&self) -> &str {
        match self {
            Location::Found(place) => place,
            Location::Unspecified => UNSPECIFIED_LOCATION,
        }
    }

    /// Whether a place was found
    pub fn is_found(&self) -> bool {
        matches!(self, Location::Found(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_rendering() {
        assert_eq!(Location::Found("Paris".to_string()).as_str(), "Paris");
        assert_eq!(Location::Unspecified.as_str(), "unspecified");
        assert!(!Location::Unspecified.is_found());
    }
}
