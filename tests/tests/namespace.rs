use docmigrate::{ColumnSpec, Migrate, NamespaceOptions};
use pretty_assertions::assert_eq;
use tests::{setup, DriverOp, DEFAULT, MIGRATIONS};

#[tokio::test]
async fn builder_activates_configured_namespace() {
    let t = setup().await;

    assert_eq!(t.driver.active_namespace_name(), Some(DEFAULT));
    assert_eq!(t.driver.migration_namespace_name(), MIGRATIONS);
}

#[tokio::test]
async fn create_collection_becomes_active() {
    let mut t = setup().await;

    t.driver.create_collection("other").await.unwrap();
    assert_eq!(t.driver.active_namespace_name(), Some("other"));

    t.driver
        .add_column("Test", "a", &ColumnSpec::new("string"))
        .await
        .unwrap();

    assert!(t.log.any(|op| matches!(op, DriverOp::CreateNamespace(name) if name == "other")));
    assert_eq!(
        t.log.statements(),
        ["UPDATE `other` SET `a` = NULL WHERE `_type` = 'Test'"]
    );

    let mut names = t.driver.list_namespaces().await.unwrap();
    names.sort();
    assert_eq!(names, [DEFAULT, MIGRATIONS, "other"]);
}

#[tokio::test]
async fn create_namespace_with_options() {
    let mut t = setup().await;

    let options = NamespaceOptions {
        ram_quota_mb: 256,
        ..NamespaceOptions::default()
    };
    t.driver.create_namespace("big", &options).await.unwrap();

    assert_eq!(t.driver.active_namespace_name(), Some("big"));
}

#[tokio::test]
async fn creating_an_existing_namespace_keeps_the_active_one() {
    let mut t = setup().await;

    let err = t.driver.create_collection(MIGRATIONS).await.unwrap_err();
    assert!(err.is_namespace());
    assert_eq!(t.driver.active_namespace_name(), Some(DEFAULT));
}

#[tokio::test]
async fn dropping_active_namespace_leaves_none_active() {
    let mut t = setup().await;

    t.driver.drop_collection(DEFAULT).await.unwrap();
    assert_eq!(t.driver.active_namespace_name(), None);

    let err = t
        .driver
        .add_column("Test", "a", &ColumnSpec::new("string"))
        .await
        .unwrap_err();
    assert!(err.is_no_active_namespace());

    let err = t.driver.list_indexes().await.unwrap_err();
    assert!(err.is_no_active_namespace());

    assert!(!t.log.any(|op| matches!(op, DriverOp::Exec { .. })));
}

#[tokio::test]
async fn dropping_another_namespace_keeps_the_active_one() {
    let mut t = setup().await;

    t.driver.create_collection("other").await.unwrap();
    t.driver.switch_namespace(DEFAULT).await.unwrap();
    t.driver.drop_namespace("other").await.unwrap();

    assert_eq!(t.driver.active_namespace_name(), Some(DEFAULT));
}

#[tokio::test]
async fn with_namespace_chains() {
    let mut t = setup().await;
    t.driver.create_collection("other").await.unwrap();
    t.log.clear();

    t.driver
        .with_namespace(DEFAULT)
        .await
        .unwrap()
        .add_column("Test", "a", &ColumnSpec::new("string"))
        .await
        .unwrap();

    assert_eq!(
        t.log.statements(),
        ["UPDATE `default` SET `a` = NULL WHERE `_type` = 'Test'"]
    );
}

#[tokio::test]
async fn switching_to_a_missing_namespace_fails() {
    let mut t = setup().await;

    let err = t.driver.switch_namespace("nope").await.unwrap_err();
    assert!(err.is_namespace());
    assert_eq!(t.driver.active_namespace_name(), Some(DEFAULT));
}

#[tokio::test]
async fn close_clears_active_namespace() {
    let mut t = setup().await;

    t.driver.close().await.unwrap();
    assert_eq!(t.driver.active_namespace_name(), None);
}
