use docmigrate::FieldType;
use pretty_assertions::assert_eq;
use serde_json::json;
use tests::{setup, DEFAULT};

#[tokio::test]
async fn string_to_number_casts_in_place() {
    let t = setup().await;
    t.insert("Test|1", "Test", json!({ "age": "42" }));
    t.insert("Test|2", "Test", json!({ "age": "1.5" }));
    t.insert("Other|1", "Other", json!({ "age": "7" }));

    let response = t
        .driver
        .change_type("Test", "age", "string", "number")
        .await
        .unwrap();

    assert_eq!(response.meta.mutation_count, 2);
    assert_eq!(
        t.log.statements(),
        ["UPDATE `default` SET `age` = TONUMBER(`age`) WHERE `_type` = 'Test'"]
    );

    let ages: Vec<_> = t
        .memory
        .documents(DEFAULT)
        .unwrap()
        .into_iter()
        .map(|doc| doc["age"].clone())
        .collect();
    assert_eq!(ages, [json!("7"), json!(42), json!(1.5)]);
}

#[tokio::test]
async fn nested_paths_are_cast() {
    let t = setup().await;
    t.insert("Test|1", "Test", json!({ "flags": { "active": 1 } }));

    t.driver
        .change_type("Test", "flags.active", "number", "boolean")
        .await
        .unwrap();

    assert_eq!(
        t.log.statements(),
        ["UPDATE `default` SET `flags`.`active` = TOBOOLEAN(`flags`.`active`) WHERE `_type` = 'Test'"]
    );
    assert_eq!(
        t.memory.documents(DEFAULT).unwrap()[0]["flags"]["active"],
        json!(true)
    );
}

#[tokio::test]
async fn boolean_to_string() {
    let t = setup().await;
    t.insert("Test|1", "Test", json!({ "done": false }));

    t.driver
        .change_type("Test", "done", "boolean", "string")
        .await
        .unwrap();

    assert_eq!(
        t.memory.documents(DEFAULT).unwrap()[0]["done"],
        json!("false")
    );
}

#[tokio::test]
async fn self_conversions_never_reach_the_store() {
    let t = setup().await;

    for ty in FieldType::ALL {
        let err = t
            .driver
            .change_type("Test", "field", ty.name(), ty.name())
            .await
            .unwrap_err();

        assert!(err.is_conversion());
        assert_eq!(err.to_string(), "Cannot convert from one type to itself");
    }

    assert!(t.log.is_empty());
}

#[tokio::test]
async fn rejected_pairs_carry_their_reason() {
    let t = setup().await;

    for (from, to, message) in [
        (
            "Date",
            "string",
            "Can't convert Date to string: Dates and strings are already interchangeable",
        ),
        (
            "string",
            "Date",
            "Can't convert string to Date: Dates and strings are already interchangeable",
        ),
        ("Date", "number", "Can't convert Date to number: not supported"),
        ("number", "Date", "Can't convert number to Date: not supported"),
        (
            "boolean",
            "number",
            "Can't convert boolean to number: Converting booleans to numbers doesn't really make sense",
        ),
    ] {
        let err = t
            .driver
            .change_type("Test", "field", from, to)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), message);
    }

    assert!(t.log.is_empty());
}

#[tokio::test]
async fn unknown_conversions() {
    let t = setup().await;

    let err = t
        .driver
        .change_type("Test", "field", "Mixed", "string")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Conversion of type Mixed is not supported");

    let err = t
        .driver
        .change_type("Test", "field", "integer", "string")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Conversion of type integer is not supported");

    let err = t
        .driver
        .change_type("Test", "field", "boolean", "Date")
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Type boolean does not have a supported conversion to Date"
    );

    assert!(t.log.is_empty());
}

#[tokio::test]
async fn missing_arguments() {
    let t = setup().await;

    for args in [
        ["", "field", "string", "number"],
        ["Test", "", "string", "number"],
        ["Test", "field", "", "number"],
        ["Test", "field", "string", ""],
    ] {
        let [model, path, from, to] = args;
        let err = t
            .driver
            .change_type(model, path, from, to)
            .await
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Missing required argument");
    }

    assert!(t.log.is_empty());
}
