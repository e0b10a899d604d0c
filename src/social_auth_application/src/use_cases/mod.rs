pub mod social_sign_in;

// Re-export for convenience
pub use social_sign_in::{
    AccountOrigin, AuthRequest, SignInErrorKind, SignInOutcome, SocialSignInError,
    SocialSignInUseCase,
};
