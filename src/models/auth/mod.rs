pub mod entities;
pub mod requests;
pub mod responses;

pub use entities::AdminPrincipal;
pub use requests::LoginRequest;
pub use responses::{LoginResponse, PrincipalResponse};
