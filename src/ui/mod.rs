//! Callback layer behind the summarizer form. Widget layout lives with
//! whatever toolkit hosts the form.

pub mod form;

pub use form::{
    FormRequest, FormResponse, summarize_form, summarize_form_with_status, write_summary_download,
};
