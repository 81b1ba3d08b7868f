pub mod claims;
pub mod error;
pub mod factory;
pub mod issuer;
pub mod policy;
pub mod role;
pub mod verifier;

pub use claims::Claims;
pub use error::{AuthError, VerifyError};
pub use factory::build_token_verifier;
pub use issuer::TokenIssuer;
pub use policy::{HandlerRef, PolicyTable, RoleRequirement};
pub use role::Role;
pub use verifier::TokenVerifier;
