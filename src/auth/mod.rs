pub mod extract;
pub mod tokens;
pub mod vault;

pub use extract::AuthUser;
pub use tokens::{TokenError, TokenService};
pub use vault::{CredentialVault, VaultError};
