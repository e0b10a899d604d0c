//! # Social Auth - Third-Party Sign-In Library
//!
//! This is a facade crate that re-exports all public APIs from the social auth components.
//! Use this crate to get access to all sign-in functionality in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! social_auth = { path = "../social_auth" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `ProviderToken`, `RemoteIdentity`, `LocalAccount`
//! - **Ports**: `IdentityResolver`, `AccountReader`, `AccountWriter`
//! - **Use cases**: `SocialSignInUseCase`
//! - **Adapters**: `FacebookIdentityResolver`, `PostgresAccountStore`, `HashMapAccountStore`
//! - **Service**: `AuthService` - The main entry point for the HTTP service

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use social_auth_core::*;
}

// Re-export most commonly used core types at the root level
pub use social_auth_core::{
    AccountId, Email, EmailError, LocalAccount, ProviderToken, ProviderTokenError, RemoteIdentity,
};

// ============================================================================
// Ports
// ============================================================================

/// Port trait definitions
pub mod ports {
    pub use social_auth_core::{
        AccountReader, AccountStoreError, AccountWriter, IdentityResolver, IdentityResolverError,
    };
}

// Re-export port traits at root level
pub use ports::{
    AccountReader, AccountStoreError, AccountWriter, IdentityResolver, IdentityResolverError,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use social_auth_application::*;
}

// Re-export use cases at root level
pub use social_auth_application::{
    AccountOrigin, AuthRequest, SignInErrorKind, SignInOutcome, SocialSignInError,
    SocialSignInUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers
    pub mod http {
        pub use social_auth_adapters::http::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use social_auth_adapters::persistence::*;
    }

    /// Identity provider clients
    pub mod identity {
        pub use social_auth_adapters::identity::*;
    }

    /// Configuration
    pub mod config {
        pub use social_auth_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use social_auth_adapters::{
    identity::FacebookIdentityResolver,
    persistence::{HashMapAccountStore, PostgresAccountStore},
};

// ============================================================================
// Auth Service (Main Entry Point)
// ============================================================================

/// Main auth service
pub use social_auth_service::{AuthService, configure_postgresql, get_postgres_pool};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
