pub mod facebook_identity_resolver;

pub use facebook_identity_resolver::FacebookIdentityResolver;
