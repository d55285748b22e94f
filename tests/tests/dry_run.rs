use docmigrate::{ColumnSpec, Migrate};
use pretty_assertions::assert_eq;
use tests::{setup_with, DriverOp, DEFAULT};

#[tokio::test]
async fn dry_run_never_executes() {
    let mut t = setup_with(|builder| {
        builder.dry_run(true);
    })
    .await;
    t.seed_test_model().await;
    let before = t.memory.documents(DEFAULT).unwrap();

    assert!(t.driver.is_dry_run());

    t.driver
        .add_column("Test", "extra", &ColumnSpec::new("string"))
        .await
        .unwrap();
    t.driver
        .rename_column("Test", "renameMe", "renamed")
        .await
        .unwrap();
    t.driver
        .change_type("Test", "name", "string", "number")
        .await
        .unwrap();
    t.driver.add_index("Test", "idxA", "name".into()).await.unwrap();

    let record = t.driver.add_migration_record("001").await.unwrap();
    assert_eq!(record.name, "001");

    assert!(t.driver.all_loaded_migrations().await.unwrap().is_empty());
    assert_eq!(t.driver.delete_migration("001").await.unwrap(), 0);

    assert!(!t.log.any(|op| matches!(op, DriverOp::Exec { .. })));
    assert_eq!(t.memory.documents(DEFAULT).unwrap(), before);
}

#[tokio::test]
async fn dry_run_still_validates() {
    let t = setup_with(|builder| {
        builder.dry_run(true);
    })
    .await;

    let err = t
        .driver
        .change_type("Test", "name", "boolean", "number")
        .await
        .unwrap_err();
    assert!(err.is_conversion());
}
