mod common;

use common::{create_test_pool, sample_tenant};

use hm_core::{ADMIN_ROLE, RoleAssignment, StaffProfile};
use hm_db::{MembershipRepository, RoleRepository, TenantRepository};

use sqlx::SqlitePool;
use uuid::Uuid;

async fn setup_tenant(pool: &SqlitePool) -> hm_core::Tenant {
    let tenant = sample_tenant("Le Grand Hotel", "x7k2");
    TenantRepository::new(pool.clone())
        .create(&tenant)
        .await
        .unwrap();
    tenant
}

#[tokio::test]
async fn staff_profile_roundtrip() {
    let pool = create_test_pool().await;
    let tenant = setup_tenant(&pool).await;
    let repo = MembershipRepository::new(pool.clone());

    let identity_id = Uuid::new_v4();
    let profile = StaffProfile::new(
        tenant.id,
        identity_id,
        "Alice Martin".to_string(),
        "alice@example.com".to_string(),
    );

    repo.create_staff_profile(&profile).await.unwrap();
    repo.delete_staff_profile(profile.id).await.unwrap();
}

#[tokio::test]
async fn staff_profile_requires_existing_tenant() {
    let pool = create_test_pool().await;
    let repo = MembershipRepository::new(pool);

    let profile = StaffProfile::new(
        Uuid::new_v4(), // no such tenant
        Uuid::new_v4(),
        "Alice Martin".to_string(),
        "alice@example.com".to_string(),
    );

    assert!(repo.create_staff_profile(&profile).await.is_err());
}

#[tokio::test]
async fn duplicate_staff_profile_is_a_unique_violation() {
    let pool = create_test_pool().await;
    let tenant = setup_tenant(&pool).await;
    let repo = MembershipRepository::new(pool);

    let identity_id = Uuid::new_v4();
    let first = StaffProfile::new(
        tenant.id,
        identity_id,
        "Alice Martin".to_string(),
        "alice@example.com".to_string(),
    );
    let second = StaffProfile::new(
        tenant.id,
        identity_id,
        "Alice M.".to_string(),
        "alice@example.com".to_string(),
    );

    repo.create_staff_profile(&first).await.unwrap();
    let err = repo.create_staff_profile(&second).await.unwrap_err();

    assert!(err.into_store_error().is_conflict());
}

#[tokio::test]
async fn membership_joins_role_code() {
    let pool = create_test_pool().await;
    let tenant = setup_tenant(&pool).await;
    let repo = MembershipRepository::new(pool.clone());

    let admin = RoleRepository::new(pool.clone())
        .find_by_code(ADMIN_ROLE)
        .await
        .unwrap()
        .expect("admin role is seeded");

    let identity_id = Uuid::new_v4();
    repo.create_role_assignment(&RoleAssignment::new(tenant.id, identity_id, admin.id))
        .await
        .unwrap();

    let membership = repo
        .find_membership(tenant.id, identity_id)
        .await
        .unwrap()
        .expect("assignment should exist");

    assert_eq!(membership.role_id, admin.id);
    assert_eq!(membership.role_code.as_deref(), Some(ADMIN_ROLE));
}

#[tokio::test]
async fn missing_membership_returns_none() {
    let pool = create_test_pool().await;
    let tenant = setup_tenant(&pool).await;
    let repo = MembershipRepository::new(pool);

    let membership = repo
        .find_membership(tenant.id, Uuid::new_v4())
        .await
        .unwrap();

    assert!(membership.is_none());
}

#[tokio::test]
async fn second_assignment_for_same_pair_conflicts() {
    let pool = create_test_pool().await;
    let tenant = setup_tenant(&pool).await;
    let repo = MembershipRepository::new(pool.clone());
    let roles = RoleRepository::new(pool);

    let admin = roles.find_by_code("admin").await.unwrap().unwrap();
    let staff = roles.find_by_code("staff").await.unwrap().unwrap();

    let identity_id = Uuid::new_v4();
    repo.create_role_assignment(&RoleAssignment::new(tenant.id, identity_id, admin.id))
        .await
        .unwrap();

    let err = repo
        .create_role_assignment(&RoleAssignment::new(tenant.id, identity_id, staff.id))
        .await
        .unwrap_err();

    assert!(err.into_store_error().is_conflict());
}

#[tokio::test]
async fn deleted_assignment_is_gone() {
    let pool = create_test_pool().await;
    let tenant = setup_tenant(&pool).await;
    let repo = MembershipRepository::new(pool.clone());

    let admin = RoleRepository::new(pool)
        .find_by_code(ADMIN_ROLE)
        .await
        .unwrap()
        .unwrap();

    let identity_id = Uuid::new_v4();
    repo.create_role_assignment(&RoleAssignment::new(tenant.id, identity_id, admin.id))
        .await
        .unwrap();
    repo.delete_role_assignment(tenant.id, identity_id)
        .await
        .unwrap();

    let membership = repo.find_membership(tenant.id, identity_id).await.unwrap();
    assert!(membership.is_none());
}
