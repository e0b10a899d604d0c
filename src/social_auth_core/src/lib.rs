pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    email::{Email, EmailError},
    local_account::{AccountId, LocalAccount},
    provider_token::{ProviderToken, ProviderTokenError},
    remote_identity::RemoteIdentity,
};

pub use ports::{
    repositories::{AccountReader, AccountStoreError, AccountWriter},
    services::{IdentityResolver, IdentityResolverError},
};
