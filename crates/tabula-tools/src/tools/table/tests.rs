//! Tests for the table tools

use super::*;
use serde_json::json;
use std::collections::HashMap;
use tabula_core::config::StoreConfig;
use tabula_core::tools::types::ToolCall;
use tempfile::TempDir;

fn create_tool_call(id: &str, name: &str, args: serde_json::Value) -> ToolCall {
    let arguments = if let serde_json::Value::Object(map) = args {
        map.into_iter().collect()
    } else {
        HashMap::new()
    };

    ToolCall {
        id: id.to_string(),
        name: name.to_string(),
        arguments,
        call_id: None,
    }
}

fn store() -> (TempDir, TableStore) {
    let temp_dir = TempDir::new().unwrap();
    let store = TableStore::new(StoreConfig::new(temp_dir.path().join("tools.db")));
    store.bootstrap().unwrap();
    (temp_dir, store)
}

fn output_json(result: &tabula_core::tools::ToolResult) -> serde_json::Value {
    serde_json::from_str(result.output.as_deref().unwrap()).unwrap()
}

#[tokio::test]
async fn test_insert_tool_returns_row_id() {
    let (_dir, store) = store();
    let tool = InsertToTableTool::new(store);

    let call = create_tool_call(
        "test-1",
        "insert_to_table",
        json!({
            "table_name": "students",
            "data": {"name": "Enes", "parent_name": "Gönül", "profession": "Engineer"}
        }),
    );

    let result = tool.execute(&call).await.unwrap();
    assert!(result.success);
    assert_eq!(result.call_id, "test-1");
    let json = output_json(&result);
    assert_eq!(json["success"], json!(true));
    assert!(json["row_id"].as_i64().unwrap() > 0);
    assert_eq!(json["inserted_data"]["parent_name"], json!("Gönül"));
    assert_eq!(result.metadata.get("operation"), Some(&json!("insert")));
}

#[tokio::test]
async fn test_insert_tool_nested_value_is_validation_failure() {
    let (_dir, store) = store();
    let tool = InsertToTableTool::new(store);

    let call = create_tool_call(
        "test-2",
        "insert_to_table",
        json!({"table_name": "students", "data": {"name": ["not", "scalar"]}}),
    );

    let result = tool.execute(&call).await.unwrap();
    assert!(!result.success);
    assert_eq!(result.metadata.get("error_code"), Some(&json!("VALIDATION_ERROR")));
    assert_eq!(output_json(&result)["success"], json!(false));
}

#[tokio::test]
async fn test_insert_tool_empty_data_fails_in_store() {
    let (_dir, store) = store();
    let tool = InsertToTableTool::new(store);

    let call = create_tool_call(
        "test-3",
        "insert_to_table",
        json!({"table_name": "students", "data": {}}),
    );

    let result = tool.execute_with_timing(&call).await;
    assert!(!result.success);
    assert_eq!(result.error.as_deref(), Some("no fields supplied"));
}

#[tokio::test]
async fn test_insert_tool_missing_data_is_invalid_arguments() {
    let (_dir, store) = store();
    let tool = InsertToTableTool::new(store);

    let call = create_tool_call("test-4", "insert_to_table", json!({"table_name": "students"}));
    assert!(tool.validate(&call).is_err());

    let result = tool.execute_with_timing(&call).await;
    assert!(!result.success);
    assert_eq!(result.metadata.get("error_code"), Some(&json!("TOOL_INVALID_ARGS")));
    assert!(result.error.unwrap().contains("'data'"));
    assert!(result.output.is_none());
}

#[tokio::test]
async fn test_insert_tool_rejects_integer_beyond_i64() {
    let (_dir, store) = store();
    let tool = InsertToTableTool::new(store.clone());

    let call = create_tool_call(
        "test-4b",
        "insert_to_table",
        json!({"table_name": "teachers", "data": {"name": "Ada", "experience_years": u64::MAX}}),
    );
    let result = tool.execute(&call).await.unwrap();
    assert!(!result.success);
    assert_eq!(result.metadata.get("error_code"), Some(&json!("VALIDATION_ERROR")));
    assert!(result.error.unwrap().contains("experience_years"));
    assert_eq!(store.query_recent("teachers", 10).unwrap().count, 0);
}

#[tokio::test]
async fn test_insert_tool_echoes_fields_in_supplied_order() {
    let (_dir, store) = store();
    let tool = InsertToTableTool::new(store);

    let call = create_tool_call(
        "test-4c",
        "insert_to_table",
        json!({"table_name": "products", "data": {"price": 2.5, "name": "Pen", "category": "office"}}),
    );
    let json = output_json(&tool.execute(&call).await.unwrap());
    let keys: Vec<&str> = json["inserted_data"]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, vec!["price", "name", "category"]);
}

#[tokio::test]
async fn test_get_table_info_tool() {
    let (_dir, store) = store();
    let tool = GetTableInfoTool::new(store);

    let call = create_tool_call("test-5", "get_table_info", json!({"table_name": "teachers"}));
    let result = tool.execute(&call).await.unwrap();
    assert!(result.success);

    let json = output_json(&result);
    assert_eq!(json["table"], json!("teachers"));
    assert_eq!(
        json["columns"][3],
        json!({"name": "experience_years", "type": "INTEGER", "not_null": false, "primary_key": false})
    );

    let call = create_tool_call("test-6", "get_table_info", json!({"table_name": "nope"}));
    let result = tool.execute(&call).await.unwrap();
    assert!(!result.success);
    assert!(result.error.unwrap().contains("not found"));
}

#[tokio::test]
async fn test_list_all_tables_tool() {
    let (_dir, store) = store();
    let tool = ListAllTablesTool::new(store);

    let call = create_tool_call("test-7", "list_all_tables", json!({}));
    let result = tool.execute(&call).await.unwrap();
    assert!(result.success);

    let json = output_json(&result);
    assert_eq!(json["count"], json!(4));
    assert_eq!(
        json["tables"],
        json!(["employees", "products", "students", "teachers"])
    );
    assert!(tool.is_read_only());
}

#[tokio::test]
async fn test_query_table_tool_default_and_explicit_limit() {
    let (_dir, store) = store();
    for i in 0..12 {
        store
            .insert(
                "products",
                &serde_json::from_value(json!({"name": format!("p{}", i)})).unwrap(),
            )
            .unwrap();
    }
    let tool = QueryTableTool::new(store);

    let call = create_tool_call("test-8", "query_table", json!({"table_name": "products"}));
    let json = output_json(&tool.execute(&call).await.unwrap());
    assert_eq!(json["count"], json!(10));
    assert_eq!(json["records"][0]["name"], json!("p11"));

    let call = create_tool_call(
        "test-9",
        "query_table",
        json!({"table_name": "products", "limit": 2}),
    );
    let json = output_json(&tool.execute(&call).await.unwrap());
    assert_eq!(json["count"], json!(2));
    assert_eq!(json["records"][1]["name"], json!("p10"));

    let call = create_tool_call(
        "test-10",
        "query_table",
        json!({"table_name": "products", "limit": 0}),
    );
    let json = output_json(&tool.execute(&call).await.unwrap());
    assert_eq!(json["count"], json!(0));
}

#[tokio::test]
async fn test_query_table_tool_uses_configured_default_limit() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = StoreConfig::new(temp_dir.path().join("tools.db"));
    config.default_query_limit = 3;
    let store = TableStore::new(config);
    store.bootstrap().unwrap();
    for i in 0..5 {
        store
            .insert(
                "products",
                &serde_json::from_value(json!({"name": format!("p{}", i)})).unwrap(),
            )
            .unwrap();
    }
    let tool = QueryTableTool::new(store);

    assert_eq!(tool.schema().parameters["properties"]["limit"]["default"], json!(3));

    let call = create_tool_call(
        "test-10b",
        "query_table",
        json!({"table_name": "products", "limit": null}),
    );
    let json = output_json(&tool.execute(&call).await.unwrap());
    assert_eq!(json["count"], json!(3));
    let columns: Vec<&str> = json["records"][0]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(columns, vec!["id", "name", "price", "category", "created_at"]);
}

#[tokio::test]
async fn test_query_table_tool_rejects_fractional_limit() {
    let (_dir, store) = store();
    let tool = QueryTableTool::new(store);

    let call = create_tool_call(
        "test-11",
        "query_table",
        json!({"table_name": "products", "limit": 2.5}),
    );
    let err = tool.validate(&call).unwrap_err();
    assert!(err.to_string().contains("limit"));
}

#[tokio::test]
async fn test_delete_record_tool_not_found_is_structured() {
    let (_dir, store) = store();
    let row_id = store
        .insert(
            "employees",
            &serde_json::from_value(json!({"name": "Zeynep"})).unwrap(),
        )
        .unwrap()
        .row_id;
    let tool = DeleteRecordTool::new(store);

    let call = create_tool_call(
        "test-12",
        "delete_record",
        json!({"table_name": "employees", "record_id": row_id}),
    );
    assert!(tool.execute(&call).await.unwrap().success);

    let result = tool.execute(&call).await.unwrap();
    assert!(!result.success);
    let json = output_json(&result);
    assert_eq!(json["error_code"], json!("NOT_FOUND"));
    assert!(json["message"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn test_update_record_tool_partial_update() {
    let (_dir, store) = store();
    let row_id = store
        .insert(
            "employees",
            &serde_json::from_value(json!({"name": "Zeynep", "department": "R&D", "salary": 100.0}))
                .unwrap(),
        )
        .unwrap()
        .row_id;
    let tool = UpdateRecordTool::new(store.clone());

    let call = create_tool_call(
        "test-13",
        "update_record",
        json!({"table_name": "employees", "record_id": row_id, "data": {"salary": 150.5}}),
    );
    let result = tool.execute(&call).await.unwrap();
    assert!(result.success);
    assert_eq!(output_json(&result)["updated_fields"], json!({"salary": 150.5}));

    let record = &store.query_recent("employees", 1).unwrap().records[0];
    assert_eq!(record.get("department").and_then(|v| v.as_str()), Some("R&D"));
    assert_eq!(
        record.get("salary"),
        Some(&tabula_core::store::SqlValue::Real(150.5))
    );
}

#[test]
fn test_tool_set() {
    let (_dir, store) = store();
    let tools = get_table_tools(store);
    let mut names: Vec<&str> = tools.iter().map(|t| t.name()).collect();
    names.sort();
    assert_eq!(
        names,
        vec![
            "delete_record",
            "get_table_info",
            "insert_to_table",
            "list_all_tables",
            "query_table",
            "update_record"
        ]
    );

    for tool in &tools {
        let schema = tool.schema();
        assert_eq!(schema.name, tool.name());
        assert_eq!(schema.parameters["type"], json!("object"));
        // Mutating tools must not run alongside each other
        assert_eq!(tool.is_read_only(), tool.supports_parallel_execution());
    }
}
