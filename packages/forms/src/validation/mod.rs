pub mod email;
pub mod errors;
pub mod form;
pub mod source;
pub mod values;

// Re-export common types and functions
pub use email::is_valid_email;
pub use errors::Errors;
pub use form::Form;
pub use source::FormSource;
pub use values::Values;
