//! Registration, detail and edit pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};

use crate::api::dto::document::DocumentForm;
use crate::domain::entities::Document;
use crate::domain::validation::FieldErrors;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::error::{WebError, parse_id};
use crate::web::views::DocumentFormTemplate;

/// Template for the document detail page.
#[derive(Template, WebTemplate)]
#[template(path = "detail.html")]
pub struct DetailTemplate {
    pub document: Document,
}

/// Renders the blank registration form.
///
/// # Endpoint
///
/// `GET /`
pub async fn register_form_handler(
    State(state): State<AppState>,
) -> Result<DocumentFormTemplate, WebError> {
    let document_types = state.document_type_service.list().await?;
    Ok(DocumentFormTemplate::register(&document_types))
}

/// Registers a document from the submitted form.
///
/// # Endpoint
///
/// `POST /`
///
/// Redirects (303) to the new document's detail page. Invalid input
/// re-renders the form with the submitted values and a message per field.
pub async fn register_handler(
    State(state): State<AppState>,
    Form(form): Form<DocumentForm>,
) -> Result<Response, WebError> {
    let document_types = state.document_type_service.list().await?;

    let input = match form.into_input(&document_types) {
        Ok(input) => input,
        Err(errors) => {
            return Ok(
                DocumentFormTemplate::register_with_errors(&form, &errors, &document_types)
                    .into_response(),
            );
        }
    };

    match state.document_service.register(input).await {
        Ok(document) => Ok(Redirect::to(&format!("/document/{}", document.id)).into_response()),
        Err(AppError::Validation { fields, .. }) => Ok(
            DocumentFormTemplate::register_with_errors(&form, &fields, &document_types)
                .into_response(),
        ),
        Err(e) => Err(e.into()),
    }
}

/// Renders a document with its full title.
///
/// # Endpoint
///
/// `GET /document/{id}`
pub async fn detail_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<DetailTemplate, WebError> {
    let id = parse_id(&id, "Document")?;
    let document = state.document_service.get(id).await?;
    Ok(DetailTemplate { document })
}

/// Renders the edit form pre-filled with the document's current values.
///
/// # Endpoint
///
/// `GET /edit/{id}`
pub async fn edit_form_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<DocumentFormTemplate, WebError> {
    let id = parse_id(&id, "Document")?;
    let (document, document_types) = tokio::try_join!(
        state.document_service.get(id),
        state.document_type_service.list(),
    )?;

    Ok(DocumentFormTemplate::edit(
        document.id,
        &document.full_title(),
        &DocumentForm::from_document(&document),
        &FieldErrors::new(),
        &document_types,
    ))
}

/// Applies the submitted form to an existing document.
///
/// # Endpoint
///
/// `POST /edit/{id}`
///
/// Redirects (303) to the detail page. The id is kept, so the tag only
/// changes when the document type does.
pub async fn edit_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Form(form): Form<DocumentForm>,
) -> Result<Response, WebError> {
    let id = parse_id(&id, "Document")?;
    let (document, document_types) = tokio::try_join!(
        state.document_service.get(id),
        state.document_type_service.list(),
    )?;

    let rejected = |errors: &FieldErrors| {
        DocumentFormTemplate::edit(
            document.id,
            &document.full_title(),
            &form,
            errors,
            &document_types,
        )
        .into_response()
    };

    let input = match form.into_input(&document_types) {
        Ok(input) => input,
        Err(errors) => return Ok(rejected(&errors)),
    };

    match state.document_service.update(id, input).await {
        Ok(updated) => Ok(Redirect::to(&format!("/document/{}", updated.id)).into_response()),
        Err(AppError::Validation { fields, .. }) => Ok(rejected(&fields)),
        Err(e) => Err(e.into()),
    }
}
