pub mod email;
pub mod local_account;
pub mod provider_token;
pub mod remote_identity;
