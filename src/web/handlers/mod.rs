//! HTML page handlers.

mod documents;
mod search;

pub use documents::{
    detail_handler, edit_form_handler, edit_handler, register_form_handler, register_handler,
};
pub use search::search_handler;
