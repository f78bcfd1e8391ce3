//! DTOs for document type management.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::entities::{DocumentType, NewDocumentType};

/// Short codes are letters and digits only.
static SHORT_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("short code regex is valid"));

/// Request body for `POST /api/document-types`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDocumentTypeRequest {
    #[validate(length(min = 1, max = 5))]
    #[validate(regex(path = *SHORT_CODE_REGEX))]
    pub short_code: String,

    #[validate(length(min = 1, max = 50))]
    pub long_name: String,

    #[validate(length(min = 1))]
    pub description: String,
}

impl CreateDocumentTypeRequest {
    /// Trims every field, so whitespace-only input counts as empty.
    pub fn normalized(self) -> Self {
        Self {
            short_code: self.short_code.trim().to_string(),
            long_name: self.long_name.trim().to_string(),
            description: self.description.trim().to_string(),
        }
    }
}

impl From<CreateDocumentTypeRequest> for NewDocumentType {
    fn from(r: CreateDocumentTypeRequest) -> Self {
        NewDocumentType {
            short_code: r.short_code,
            long_name: r.long_name,
            description: r.description,
        }
    }
}

/// Individual document type information.
#[derive(Debug, Serialize)]
pub struct DocumentTypeItem {
    pub id: i64,
    pub short_code: String,
    pub long_name: String,
    pub description: String,
    pub display_name: String,
}

impl From<DocumentType> for DocumentTypeItem {
    fn from(t: DocumentType) -> Self {
        let display_name = t.to_string();
        Self {
            id: t.id,
            short_code: t.short_code,
            long_name: t.long_name,
            description: t.description,
            display_name,
        }
    }
}

/// Response containing list of document types.
#[derive(Debug, Serialize)]
pub struct DocumentTypeListResponse {
    pub items: Vec<DocumentTypeItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::{FieldErrors, Violation};

    fn request(short_code: &str) -> CreateDocumentTypeRequest {
        CreateDocumentTypeRequest {
            short_code: short_code.to_string(),
            long_name: "Test Document".to_string(),
            description: "test description".to_string(),
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request("TST").validate().is_ok());
        assert!(request("SPEC1").validate().is_ok());
    }

    #[test]
    fn test_short_code_rules() {
        assert!(request("").validate().is_err());
        assert!(request("TOOLONG").validate().is_err());
        assert!(request("A-B").validate().is_err());
        assert!(request("A B").validate().is_err());
    }

    #[test]
    fn test_violation_kinds() {
        let request = CreateDocumentTypeRequest {
            short_code: "A-B".to_string(),
            long_name: String::new(),
            description: String::new(),
        };

        let errors = FieldErrors::from(request.validate().unwrap_err());

        assert_eq!(errors.get("short_code"), Some(&[Violation::InvalidFormat][..]));
        assert_eq!(errors.get("long_name"), Some(&[Violation::Required][..]));
        assert_eq!(errors.get("description"), Some(&[Violation::Required][..]));
    }

    #[test]
    fn test_long_name_too_long() {
        let mut request = request("TST");
        request.long_name = "x".repeat(51);

        let errors = FieldErrors::from(request.validate().unwrap_err());

        assert_eq!(errors.get("long_name"), Some(&[Violation::TooLong { max: 50 }][..]));
    }

    #[test]
    fn test_blank_fields_are_required_after_trimming() {
        let request = CreateDocumentTypeRequest {
            short_code: "  TST ".to_string(),
            long_name: "   ".to_string(),
            description: "\t".to_string(),
        }
        .normalized();

        assert_eq!(request.short_code, "TST");

        let errors = FieldErrors::from(request.validate().unwrap_err());

        assert!(!errors.contains("short_code"));
        assert_eq!(errors.get("long_name"), Some(&[Violation::Required][..]));
        assert_eq!(errors.get("description"), Some(&[Violation::Required][..]));
    }
}
