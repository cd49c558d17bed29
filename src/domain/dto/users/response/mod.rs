pub mod auth_response;
pub mod user_response;

pub use auth_response::{AuthenticationResult, LoginResponse, ProviderOutcome, SignupResponse};
pub use user_response::UserResponse;
