pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::{connect, migrate};
pub use error::{DbError, Result};
pub use repositories::membership_repository::MembershipRepository;
pub use repositories::role_repository::RoleRepository;
pub use repositories::tenant_repository::TenantRepository;
