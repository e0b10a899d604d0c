use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use social_auth_core::{
    AccountReader, AccountStoreError, AccountWriter, Email, LocalAccount, RemoteIdentity,
};

#[derive(Default, Clone)]
pub struct HashMapAccountStore {
    accounts: Arc<RwLock<HashMap<Email, LocalAccount>>>,
}

impl HashMapAccountStore {
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl AccountReader for HashMapAccountStore {
    async fn find_by_email(&self, email: &Email) -> Result<Option<LocalAccount>, AccountStoreError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(email).cloned())
    }
}

#[async_trait::async_trait]
impl AccountWriter for HashMapAccountStore {
    async fn create_from_remote_identity(
        &self,
        identity: &RemoteIdentity,
    ) -> Result<LocalAccount, AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(identity.email()) {
            return Err(AccountStoreError::DuplicateEmail);
        }

        let account = LocalAccount::from_remote_identity(identity);
        accounts.insert(account.email().clone(), account.clone());
        Ok(account)
    }
}
