//! Unit tests for schema module.

use super::*;
use chrono::NaiveDate;
use std::collections::HashSet;

fn ts(y: i32, m: u32, d: u32) -> Timestamp {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(12, 0, 0))
        .expect("valid timestamp")
}

fn json_keys<T: serde::Serialize>(row: &T) -> Vec<String> {
    match serde_json::to_value(row).unwrap() {
        serde_json::Value::Object(map) => map.keys().cloned().collect(),
        other => panic!("expected object, got {other}"),
    }
}

fn sorted(mut names: Vec<String>) -> Vec<String> {
    names.sort();
    names
}

// ============================================================================
// Registry Tests
// ============================================================================

#[test]
fn test_registry_has_every_table() {
    assert_eq!(TABLES.len(), 31);
}

#[test]
fn test_registry_sorted_and_unique() {
    for pair in TABLES.windows(2) {
        assert!(
            pair[0].name < pair[1].name,
            "{} must sort before {}",
            pair[0].name,
            pair[1].name
        );
    }
}

#[test]
fn test_lookup_every_registered_table() {
    for def in TABLES {
        assert_eq!(table(def.name), Some(def));
    }
}

#[test]
fn test_lookup_unknown_table() {
    assert!(table("robot").is_none());
    assert!(table("ROBOTS").is_none());
    assert!(table("").is_none());
}

#[test]
fn test_lookup_returns_row_type() {
    assert_eq!(table("robots").map(|def| def.row), Some("Robot"));
    assert_eq!(
        table("exa_file_upload_and_downloads").map(|def| def.row),
        Some("ExaFileUploadAndDownload")
    );
    assert_eq!(table("casbin_rule").map(|def| def.row), Some("CasbinRule"));
}

#[test]
fn test_column_names_unique_per_table() {
    for def in TABLES {
        let names: HashSet<_> = def.column_names().collect();
        assert_eq!(names.len(), def.columns.len(), "duplicate column in {}", def.name);
        assert!(!def.columns.is_empty(), "{} has no columns", def.name);
    }
}

// ============================================================================
// Column Descriptor Tests
// ============================================================================

#[test]
fn test_renamed_columns_keep_sql_names() {
    let account = table("accounts").unwrap();
    assert!(account.column("type").is_some());
    assert!(account.column("account_type").is_none());

    let email = table("email_codes").unwrap();
    assert_eq!(email.column("failCount"), Some(&Column::nullable("failCount")));
    assert_eq!(email.column("expiredAt"), Some(&Column::required("expiredAt")));

    let history = table("sys_auto_code_histories").unwrap();
    assert!(history.column("Injections").is_some());
}

#[test]
fn test_column_kinds() {
    let robot = Robot::DEF;
    assert_eq!(robot.column("id"), Some(&Column::required("id")));
    assert_eq!(robot.column("status"), Some(&Column::generated("status")));
    assert_eq!(robot.column("device_id"), Some(&Column::nullable("device_id")));

    let users = SysUser::DEF;
    assert_eq!(
        users.column("enable"),
        Some(&Column::generated_nullable("enable"))
    );
}

#[test]
fn test_insertable_columns_skip_defaults() {
    let insertable: Vec<_> = Customer::DEF
        .insertable_columns()
        .map(|c| c.name)
        .collect();
    assert!(insertable.contains(&"auth_user_id"));
    assert!(insertable.contains(&"plan"));
    assert!(!insertable.contains(&"id"));
    assert!(!insertable.contains(&"is_canceled"));
    assert!(!insertable.contains(&"created_at"));

    let joins: Vec<_> = SysUserAuthority::DEF
        .insertable_columns()
        .map(|c| c.name)
        .collect();
    assert_eq!(joins, vec!["sys_user_id", "sys_authority_authority_id"]);
}

#[test]
fn test_join_tables_have_no_defaults() {
    for name in [
        "sys_authority_menus",
        "sys_data_authority_id",
        "sys_user_authority",
    ] {
        let def = table(name).unwrap();
        assert!(def.columns.iter().all(|c| !c.nullable && !c.has_default));
    }
}

// ============================================================================
// Row Shape Tests
// ============================================================================

#[test]
fn test_account_serializes_sql_names() {
    let account = Account {
        id: "acc_1".to_string(),
        user_id: "usr_1".to_string(),
        account_type: "oauth".to_string(),
        provider: "github".to_string(),
        provider_account_id: "42".to_string(),
        refresh_token: None,
        access_token: Some("token".to_string()),
        expires_at: Some(Int(1_760_000_000)),
        token_type: Some("bearer".to_string()),
        scope: None,
        id_token: None,
        session_state: None,
        rolitt_is_setup: Int(0),
        rolitt_account_id: None,
        rolitt_account_username: None,
        rolitt_account_email: None,
        rolitt_account_password: None,
    };

    let keys = sorted(json_keys(&account));
    let columns = sorted(Account::DEF.column_names().map(str::to_string).collect());
    assert_eq!(keys, columns);
}

#[test]
fn test_email_code_serializes_sql_names() {
    let code = EmailCode {
        id: "ec_1".to_string(),
        email: "a@example.com".to_string(),
        code: "123456".to_string(),
        ip: None,
        fail_count: Some(Int(1)),
        expired_at: ts(2026, 1, 1),
        created_at: ts(2025, 12, 31),
        updated_at: ts(2025, 12, 31),
        deleted_at: None,
    };

    let keys = sorted(json_keys(&code));
    let columns = sorted(EmailCode::DEF.column_names().map(str::to_string).collect());
    assert_eq!(keys, columns);
}

#[test]
fn test_robot_deserializes_enum_labels() {
    let json = r#"{
        "id": "rb_1",
        "name": "Mochi",
        "auth_user_id": "usr_1",
        "location": "CN",
        "language": "ZH",
        "status": "RUNNING",
        "device_id": null,
        "device_code": null,
        "instructions": "Be kind.",
        "rolitt_robot_id": null,
        "rolitt_robot_code": null,
        "rolitt_robot_api_key": null,
        "created_at": "2025-06-01T08:00:00",
        "updated_at": "2025-06-02T08:00:00"
    }"#;

    let robot: Robot = serde_json::from_str(json).unwrap();
    assert_eq!(robot.location, Location::Cn);
    assert_eq!(robot.language, Language::Zh);
    assert_eq!(robot.status, Status::Running);
    assert_eq!(robot.instructions.as_deref(), Some("Be kind."));
    assert!(robot.device_id.is_none());
}

#[test]
fn test_required_column_rejects_null() {
    let json = r#"{"identifier": "a@example.com", "token": null, "expires": "2026-01-01T00:00:00"}"#;
    assert!(serde_json::from_str::<VerificationToken>(json).is_err());
}

#[test]
fn test_keyword_columns_serialize_as_is() {
    let join = SysExportTemplateJoin {
        id: Int(1),
        created_at: None,
        updated_at: None,
        deleted_at: None,
        template_id: Some("tpl".to_string()),
        joins: Some("LEFT JOIN".to_string()),
        table: Some("sys_users".to_string()),
        on: Some("a.id = b.id".to_string()),
    };

    let keys = sorted(json_keys(&join));
    let columns = sorted(
        SysExportTemplateJoin::DEF
            .column_names()
            .map(str::to_string)
            .collect(),
    );
    assert_eq!(keys, columns);
}
