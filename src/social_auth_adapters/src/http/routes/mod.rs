pub mod error;
pub mod facebook_sign_in;

pub use error::{AuthApiError, ErrorResponse};
pub use facebook_sign_in::{FacebookSignInRequest, SignInResponse, facebook_sign_in};
