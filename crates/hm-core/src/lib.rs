pub mod error;
pub mod models;
pub mod ports;
pub mod slug;

#[cfg(test)]
mod tests;

pub use error::{IdentityError, StoreError};
pub use models::identity::{Identity, NewIdentity};
pub use models::role::{ADMIN_ROLE, DEFAULT_ROLE, Role};
pub use models::role_assignment::RoleAssignment;
pub use models::session::SessionDescriptor;
pub use models::staff_profile::StaffProfile;
pub use models::tenant::Tenant;
pub use ports::{IdentityProvider, Membership, MembershipStore, RoleCatalog, SignInOutcome, TenantDirectory};
pub use slug::{RandomSuffixSource, SuffixSource, TenantIdentifiers};
