pub mod enquiry;
pub mod validation;
