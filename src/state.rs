use crate::auth::{CredentialVault, TokenService};
use crate::store::TodoStore;

#[derive(Clone)]
pub struct AppState {
    pub vault: CredentialVault,
    pub tokens: TokenService,
    pub store: TodoStore,
}

impl AppState {
    pub fn new(jwt_secret: &str) -> Self {
        Self {
            vault: CredentialVault::new(),
            tokens: TokenService::new(jwt_secret),
            store: TodoStore::new(),
        }
    }
}
