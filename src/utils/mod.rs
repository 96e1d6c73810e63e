pub mod date;
pub mod extractor;
pub mod jwt;
pub mod parameter_error_handler;
pub mod password;

pub use extractor::SafeIDI64;
pub use parameter_error_handler::form_error_handler;
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
