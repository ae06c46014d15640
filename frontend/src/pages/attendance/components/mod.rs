pub mod filters;
pub mod mark_form;
pub mod table;
