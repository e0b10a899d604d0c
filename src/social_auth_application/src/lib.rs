pub mod use_cases;

pub use use_cases::{
    AccountOrigin, AuthRequest, SignInErrorKind, SignInOutcome, SocialSignInError,
    SocialSignInUseCase,
};
