pub mod contact_form;
pub mod navbar;
pub mod sections;
