pub mod form_lifecycle;
pub mod list_store;
pub mod remote_list;
pub mod selection;
pub mod upload_form;
