mod common;

use common::create_test_pool;

use hm_db::RoleRepository;

#[tokio::test]
async fn seeded_roles_are_present() {
    let pool = create_test_pool().await;
    let repo = RoleRepository::new(pool);

    for code in ["admin", "manager", "staff"] {
        let role = repo
            .find_by_code(code)
            .await
            .unwrap()
            .unwrap_or_else(|| panic!("role {} should be seeded", code));
        assert_eq!(role.code, code);
    }
}

#[tokio::test]
async fn unknown_role_returns_none() {
    let pool = create_test_pool().await;
    let repo = RoleRepository::new(pool);

    let role = repo.find_by_code("owner").await.unwrap();

    assert!(role.is_none());
}
