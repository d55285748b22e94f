use docmigrate::{ColumnSpec, Migrate};
use docmigrate_core::stmt::{Filter, Statement};
use pretty_assertions::assert_eq;
use serde_json::json;
use tests::{setup, DriverOp, DEFAULT};

#[tokio::test]
async fn add_column_sets_null_on_model_documents() {
    let mut t = setup().await;
    t.seed_test_model().await;
    t.insert("Other|1", "Other", json!({ "name": "other" }));

    let response = t
        .driver
        .add_column("Test", "address.city", &ColumnSpec::new("string"))
        .await
        .unwrap();

    assert_eq!(response.meta.mutation_count, 1);
    assert_eq!(
        t.log.statements(),
        ["UPDATE `default` SET `address`.`city` = NULL WHERE `_type` = 'Test'"]
    );
    assert_eq!(t.count_present("Test", "address.city"), 1);
    assert_eq!(t.count_present("Other", "address.city"), 0);
}

#[tokio::test]
async fn add_then_remove_column_keeps_documents() {
    let mut t = setup().await;
    t.seed_test_model().await;

    let before = t.memory.documents(DEFAULT).unwrap();
    let count = t.driver.count("Test", None).await.unwrap();

    t.driver
        .add_column("Test", "extra", &ColumnSpec::new("int"))
        .await
        .unwrap();
    assert_eq!(t.count_present("Test", "extra"), 1);

    t.driver.remove_column("Test", "extra").await.unwrap();
    assert_eq!(t.count_present("Test", "extra"), 0);

    assert_eq!(t.driver.count("Test", None).await.unwrap(), count);
    assert_eq!(t.memory.documents(DEFAULT).unwrap(), before);
    assert!(t
        .log
        .statements()
        .contains(&"UPDATE `default` UNSET `extra` WHERE `_type` = 'Test'".to_string()));
}

#[tokio::test]
async fn rename_column_round_trip() {
    let mut t = setup().await;
    t.seed_test_model().await;

    t.driver
        .rename_column("Test", "renameMe", "renamed")
        .await
        .unwrap();

    assert_eq!(
        t.log.statements(),
        ["UPDATE `default` SET `renamed` = `renameMe` UNSET `renameMe` WHERE `_type` = 'Test'"]
    );

    let moved = Filter::is_not_missing("renamed").and(Filter::is_missing("renameMe"));
    assert_eq!(t.driver.count("Test", Some(moved)).await.unwrap(), 1);

    let renamed = t
        .driver
        .count("Test", Some(Filter::is_not_missing("renamed")))
        .await
        .unwrap();
    let leftover = t
        .driver
        .count("Test", Some(Filter::is_not_missing("renameMe")))
        .await
        .unwrap();
    assert_eq!((renamed, leftover), (1, 0));

    assert_eq!(
        t.memory.documents(DEFAULT).unwrap()[0]["renamed"],
        json!("value")
    );
}

#[tokio::test]
async fn rename_column_onto_itself_or_a_descendant_is_rejected() {
    let mut t = setup().await;
    t.seed_test_model().await;
    t.log.clear();

    for to in ["renameMe", "renameMe.inner"] {
        let err = t
            .driver
            .rename_column("Test", "renameMe", to)
            .await
            .unwrap_err();
        assert!(err.is_validation(), "{to}");
    }

    let err = t
        .driver
        .rename_column("Test", "renameMe.inner", "renameMe")
        .await
        .unwrap_err();
    assert!(err.is_validation());

    assert!(t.log.is_empty());
    assert_eq!(
        t.memory.documents(DEFAULT).unwrap()[0]["renameMe"],
        json!("value")
    );
}

#[tokio::test]
async fn missing_arguments_never_reach_the_store() {
    let t = setup().await;

    let err = t
        .driver
        .add_column("", "a", &ColumnSpec::new("string"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "missing model name");

    let err = t
        .driver
        .add_column("Test", "", &ColumnSpec::new("string"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "missing model path");

    let err = t.driver.remove_column("Test", "").await.unwrap_err();
    assert!(err.is_validation());

    let err = t.driver.rename_column("Test", "a", "").await.unwrap_err();
    assert!(err.is_validation());

    assert!(t.log.is_empty());
}

#[tokio::test]
async fn store_errors_carry_the_statement() {
    let t = setup().await;

    let err = t.driver.run_n1ql("SELECT 1", vec![]).await.unwrap_err();

    assert!(err.is_query());
    assert_eq!(err.query_statement(), Some("SELECT 1"));
    assert!(err.to_string().starts_with("query failed: SELECT 1: "));
    assert!(t.log.any(|op| matches!(
        op,
        DriverOp::Exec { query, response: None, .. } if matches!(query.stmt, Statement::Raw(_))
    )));
}

#[tokio::test]
async fn create_table_registers_model() {
    let mut t = setup().await;
    t.seed_test_model().await;

    let model = t.driver.get_model("Test").unwrap();
    assert_eq!(model.namespace.as_deref(), Some(DEFAULT));
    assert_eq!(model.schema.len(), 2);
    assert!(t.driver.get_model("Missing").is_none());

    // Model creation does not touch the store
    assert!(t.log.is_empty());
}

#[tokio::test]
async fn create_table_reserved_names_return_ledger_models() {
    let mut t = setup().await;

    for name in ["migration", "migrations"] {
        let model = t
            .driver
            .create_table(name, Default::default())
            .await
            .unwrap();
        assert_eq!(model.name, "MigrationRun");
    }

    let model = t
        .driver
        .create_table("seeds", Default::default())
        .await
        .unwrap();
    assert_eq!(model.name, "MigrationSeed");
    assert!(model.field("ifNotExists").is_some());

    assert!(t.driver.get_model("migrations").is_none());
    assert!(t.driver.get_model("MigrationRun").is_some());
}

#[tokio::test]
async fn map_data_type() {
    let t = setup().await;

    for (ty, expected) in [
        ("string", "string"),
        ("text", "string"),
        ("int", "integer"),
        ("smallint", "integer"),
        ("bigint", "string"),
        ("decimal", "number"),
        ("boolean", "boolean"),
        ("datetime", "Date"),
        ("blob", "string"),
        ("Mixed", "Mixed"),
        ("geometry", "string"),
    ] {
        assert_eq!(
            t.driver.map_data_type(&ColumnSpec::new(ty)).name(),
            expected,
            "{ty}"
        );
    }
}

#[tokio::test]
async fn migration_bracket_is_a_no_op() {
    let t = setup().await;

    t.driver.start_migration().await.unwrap();
    t.driver.end_migration().await.unwrap();

    assert!(t.log.is_empty());
}
