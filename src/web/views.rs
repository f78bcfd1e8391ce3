//! View models shared by the registration and edit pages.

use askama::Template;
use askama_web::WebTemplate;

use crate::api::dto::document::DocumentForm;
use crate::domain::entities::DocumentType;
use crate::domain::validation::FieldErrors;

/// One input of the document form with its submitted value and messages.
pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    /// `text`, `email`, `url`, `textarea` or `select`.
    pub input: &'static str,
    pub value: String,
    pub errors: Vec<String>,
}

/// An `<option>` of the document type select.
pub struct TypeOption {
    pub id: i64,
    pub label: String,
    pub selected: bool,
}

/// Template for `templates/register.html`, used for both registering and
/// editing a document.
#[derive(Template, WebTemplate)]
#[template(path = "register.html")]
pub struct DocumentFormTemplate {
    pub heading: String,
    pub action: String,
    pub submit_label: &'static str,
    pub fields: Vec<FieldView>,
    pub document_types: Vec<TypeOption>,
    pub has_errors: bool,
}

const FIELDS: [(&str, &str, &str); 6] = [
    ("title", "Title", "text"),
    ("document_type", "Document type", "select"),
    ("description", "Description", "textarea"),
    ("author_name", "Author name", "text"),
    ("author_email", "Author email", "email"),
    ("link", "Link", "url"),
];

impl DocumentFormTemplate {
    /// Blank registration form.
    pub fn register(document_types: &[DocumentType]) -> Self {
        Self::build(
            "Register a document".to_string(),
            "/".to_string(),
            "Register",
            &DocumentForm::default(),
            &FieldErrors::new(),
            document_types,
        )
    }

    /// Edit form for the document at `/edit/{id}`, pre-filled from `form`.
    pub fn edit(
        id: i64,
        full_title: &str,
        form: &DocumentForm,
        errors: &FieldErrors,
        document_types: &[DocumentType],
    ) -> Self {
        Self::build(
            format!("Edit {full_title}"),
            format!("/edit/{id}"),
            "Save",
            form,
            errors,
            document_types,
        )
    }

    /// Registration form re-rendered with the submitted values and messages.
    pub fn register_with_errors(
        form: &DocumentForm,
        errors: &FieldErrors,
        document_types: &[DocumentType],
    ) -> Self {
        Self::build(
            "Register a document".to_string(),
            "/".to_string(),
            "Register",
            form,
            errors,
            document_types,
        )
    }

    fn build(
        heading: String,
        action: String,
        submit_label: &'static str,
        form: &DocumentForm,
        errors: &FieldErrors,
        document_types: &[DocumentType],
    ) -> Self {
        let fields = FIELDS
            .iter()
            .map(|&(name, label, input)| FieldView {
                name,
                label,
                input,
                value: form_value(form, name),
                errors: errors
                    .get(name)
                    .map(|violations| violations.iter().map(|v| v.message()).collect())
                    .unwrap_or_default(),
            })
            .collect();

        let selected = form.document_type.as_deref().map(str::trim);
        let document_types = document_types
            .iter()
            .map(|t| TypeOption {
                id: t.id,
                label: t.to_string(),
                selected: selected == Some(t.id.to_string().as_str()),
            })
            .collect();

        Self {
            heading,
            action,
            submit_label,
            fields,
            document_types,
            has_errors: !errors.is_empty(),
        }
    }
}

fn form_value(form: &DocumentForm, name: &str) -> String {
    let value = match name {
        "title" => &form.title,
        "document_type" => &form.document_type,
        "description" => &form.description,
        "author_name" => &form.author_name,
        "author_email" => &form.author_email,
        "link" => &form.link,
        _ => &None,
    };
    value.clone().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::Violation;

    fn types() -> Vec<DocumentType> {
        vec![
            DocumentType::new(1, "SPEC".into(), "Specification".into(), "".into()),
            DocumentType::new(2, "TST".into(), "Test Document".into(), "".into()),
        ]
    }

    #[test]
    fn test_blank_register_form() {
        let page = DocumentFormTemplate::register(&types());
        assert_eq!(page.fields.len(), 6);
        assert!(!page.has_errors);
        assert!(page.document_types.iter().all(|t| !t.selected));
        assert_eq!(page.action, "/");
    }

    #[test]
    fn test_rejected_form_keeps_values_and_messages() {
        let form = DocumentForm {
            title: Some("test".into()),
            document_type: Some("2".into()),
            link: Some("invalid_link".into()),
            ..Default::default()
        };
        let mut errors = FieldErrors::new();
        errors.add("link", Violation::InvalidUrl);

        let page = DocumentFormTemplate::register_with_errors(&form, &errors, &types());

        assert!(page.has_errors);
        let link = page.fields.iter().find(|f| f.name == "link").unwrap();
        assert_eq!(link.value, "invalid_link");
        assert_eq!(link.errors, vec!["Enter a valid URL.".to_string()]);
        let title = page.fields.iter().find(|f| f.name == "title").unwrap();
        assert!(title.errors.is_empty());
        assert!(page.document_types[1].selected);
        assert!(!page.document_types[0].selected);
    }

    #[test]
    fn test_edit_form_targets_document() {
        let page = DocumentFormTemplate::edit(
            7,
            "TST00007 test",
            &DocumentForm::default(),
            &FieldErrors::new(),
            &types(),
        );
        assert_eq!(page.action, "/edit/7");
        assert_eq!(page.heading, "Edit TST00007 test");
    }
}
