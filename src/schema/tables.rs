//! Table row types.
//!
//! Column kinds:
//! - `required`: NOT NULL, no default
//! - `nullable`: NULL allowed, no default
//! - `generated`: NOT NULL with a default or auto-increment
//! - `generated_nullable`: NULL allowed with a default
//!
//! Integer columns are [`Int`], which decodes from any integer width.

use super::{Column, Int, Language, Location, Status, SubscriptionPlan, Table, TableDef, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

macro_rules! column_name {
    ($field:ident) => {
        stringify!($field)
    };
    ($field:ident, $column:literal) => {
        $column
    };
}

/// Declares row structs, their descriptors and the [`TABLES`] registry.
///
/// `field as "sqlName"` keeps a SQL column name that is not a valid or
/// idiomatic Rust field name.
macro_rules! tables {
    ($(
        $(#[$meta:meta])*
        $table:literal => $row:ident {
            $(
                $(#[doc = $doc:literal])*
                $field:ident $(as $column:literal)?: $ty:ty = $kind:ident
            ),* $(,)?
        }
    )*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
            pub struct $row {
                $(
                    $(#[doc = $doc])*
                    $(#[sqlx(rename = $column)] #[serde(rename = $column)])?
                    pub $field: $ty,
                )*
            }

            impl Table for $row {
                const NAME: &'static str = $table;
                const ROW: &'static str = stringify!($row);
                const COLUMNS: &'static [Column] = &[
                    $(Column::$kind(column_name!($field $(, $column)?)),)*
                ];
            }
        )*

        /// Every registered table, sorted by SQL name.
        pub static TABLES: &[TableDef] = &[$(<$row as Table>::DEF,)*];
    };
}

tables! {
    /// OAuth provider account linked to a [`User`].
    "accounts" => Account {
        id: String = required,
        user_id: String = required,
        account_type as "type": String = required,
        provider: String = required,
        provider_account_id: String = required,
        refresh_token: Option<String> = nullable,
        access_token: Option<String> = nullable,
        /// Unix seconds.
        expires_at: Option<Int> = nullable,
        token_type: Option<String> = nullable,
        scope: Option<String> = nullable,
        id_token: Option<String> = nullable,
        session_state: Option<String> = nullable,
        rolitt_is_setup: Int = generated,
        rolitt_account_id: Option<String> = nullable,
        rolitt_account_username: Option<String> = nullable,
        rolitt_account_email: Option<String> = nullable,
        rolitt_account_password: Option<String> = nullable,
    }

    /// Casbin policy rule.
    "casbin_rule" => CasbinRule {
        id: Int = generated,
        ptype: Option<String> = nullable,
        v0: Option<String> = nullable,
        v1: Option<String> = nullable,
        v2: Option<String> = nullable,
        v3: Option<String> = nullable,
        v4: Option<String> = nullable,
        v5: Option<String> = nullable,
    }

    /// Billing customer and its Stripe subscription.
    "customers" => Customer {
        id: Int = generated,
        auth_user_id: String = required,
        name: Option<String> = nullable,
        plan: Option<SubscriptionPlan> = nullable,
        stripe_customer_id: Option<String> = nullable,
        stripe_subscription_id: Option<String> = nullable,
        stripe_price_id: Option<String> = nullable,
        stripe_current_period_start: Option<Timestamp> = nullable,
        stripe_current_period_end: Option<Timestamp> = nullable,
        is_canceled: Option<Int> = generated_nullable,
        created_at: Timestamp = generated,
        updated_at: Timestamp = generated,
    }

    /// One-time email login code.
    "email_codes" => EmailCode {
        id: String = required,
        email: String = required,
        code: String = required,
        ip: Option<String> = nullable,
        fail_count as "failCount": Option<Int> = nullable,
        expired_at as "expiredAt": Timestamp = required,
        created_at: Timestamp = generated,
        updated_at: Timestamp = generated,
        deleted_at: Option<Timestamp> = generated_nullable,
    }

    "exa_customers" => ExaCustomer {
        id: Int = generated,
        created_at: Option<Timestamp> = nullable,
        updated_at: Option<Timestamp> = nullable,
        deleted_at: Option<Timestamp> = nullable,
        customer_name: Option<String> = nullable,
        customer_phone_data: Option<String> = nullable,
        sys_user_id: Option<Int> = nullable,
        sys_user_authority_id: Option<Int> = nullable,
    }

    /// Uploaded chunk of an [`ExaFile`].
    "exa_file_chunks" => ExaFileChunk {
        id: Int = generated,
        created_at: Option<Timestamp> = nullable,
        updated_at: Option<Timestamp> = nullable,
        deleted_at: Option<Timestamp> = nullable,
        exa_file_id: Option<Int> = nullable,
        file_chunk_number: Option<Int> = nullable,
        file_chunk_path: Option<String> = nullable,
    }

    "exa_file_upload_and_downloads" => ExaFileUploadAndDownload {
        id: Int = generated,
        created_at: Option<Timestamp> = nullable,
        updated_at: Option<Timestamp> = nullable,
        deleted_at: Option<Timestamp> = nullable,
        name: Option<String> = nullable,
        url: Option<String> = nullable,
        tag: Option<String> = nullable,
        key: Option<String> = nullable,
    }

    /// Chunked upload in progress or completed.
    "exa_files" => ExaFile {
        id: Int = generated,
        created_at: Option<Timestamp> = nullable,
        updated_at: Option<Timestamp> = nullable,
        deleted_at: Option<Timestamp> = nullable,
        file_name: Option<String> = nullable,
        file_md5: Option<String> = nullable,
        file_path: Option<String> = nullable,
        chunk_total: Option<Int> = nullable,
        is_finish: Option<Int> = nullable,
    }

    /// Revoked JWT.
    "jwt_blacklists" => JwtBlacklist {
        id: Int = generated,
        created_at: Option<Timestamp> = nullable,
        updated_at: Option<Timestamp> = nullable,
        deleted_at: Option<Timestamp> = nullable,
        jwt: Option<String> = nullable,
    }

    /// Robot owned by a user and its Rolitt device binding.
    "robots" => Robot {
        id: String = required,
        name: String = required,
        auth_user_id: String = required,
        location: Location = generated,
        language: Language = generated,
        status: Status = generated,
        device_id: Option<String> = nullable,
        device_code: Option<String> = nullable,
        instructions: Option<String> = nullable,
        rolitt_robot_id: Option<String> = nullable,
        rolitt_robot_code: Option<String> = nullable,
        rolitt_robot_api_key: Option<String> = nullable,
        created_at: Timestamp = generated,
        updated_at: Timestamp = generated,
    }

    /// Login session.
    "sessions" => Session {
        id: String = required,
        session_token: String = required,
        user_id: String = required,
        expires: Timestamp = required,
    }

    "sys_apis" => SysApi {
        id: Int = generated,
        created_at: Option<Timestamp> = nullable,
        updated_at: Option<Timestamp> = nullable,
        deleted_at: Option<Timestamp> = nullable,
        path: Option<String> = nullable,
        description: Option<String> = nullable,
        api_group: Option<String> = nullable,
        method: Option<String> = generated_nullable,
    }

    /// Admin role.
    "sys_authorities" => SysAuthority {
        created_at: Option<Timestamp> = nullable,
        updated_at: Option<Timestamp> = nullable,
        deleted_at: Option<Timestamp> = nullable,
        authority_id: Int = generated,
        authority_name: Option<String> = nullable,
        parent_id: Option<Int> = nullable,
        default_router: Option<String> = generated_nullable,
    }

    /// Role to menu join.
    "sys_authority_menus" => SysAuthorityMenu {
        sys_base_menu_id: Int = required,
        sys_authority_authority_id: Int = required,
    }

    "sys_auto_code_histories" => SysAutoCodeHistory {
        id: Int = generated,
        created_at: Option<Timestamp> = nullable,
        updated_at: Option<Timestamp> = nullable,
        deleted_at: Option<Timestamp> = nullable,
        table_name: Option<String> = nullable,
        package: Option<String> = nullable,
        request: Option<String> = nullable,
        struct_name: Option<String> = nullable,
        business_db: Option<String> = nullable,
        description: Option<String> = nullable,
        templates: Option<String> = nullable,
        injections as "Injections": Option<String> = nullable,
        flag: Option<Int> = nullable,
        api_ids: Option<String> = nullable,
        menu_id: Option<Int> = nullable,
        package_id: Option<Int> = nullable,
    }

    "sys_auto_code_packages" => SysAutoCodePackage {
        id: Int = generated,
        created_at: Option<Timestamp> = nullable,
        updated_at: Option<Timestamp> = nullable,
        deleted_at: Option<Timestamp> = nullable,
        desc: Option<String> = nullable,
        label: Option<String> = nullable,
        template: Option<String> = nullable,
        package_name: Option<String> = nullable,
    }

    "sys_base_menu_btns" => SysBaseMenuBtn {
        id: Int = generated,
        created_at: Option<Timestamp> = nullable,
        updated_at: Option<Timestamp> = nullable,
        deleted_at: Option<Timestamp> = nullable,
        name: Option<String> = nullable,
        desc: Option<String> = nullable,
        sys_base_menu_id: Option<Int> = nullable,
    }

    "sys_base_menu_parameters" => SysBaseMenuParameter {
        id: Int = generated,
        created_at: Option<Timestamp> = nullable,
        updated_at: Option<Timestamp> = nullable,
        deleted_at: Option<Timestamp> = nullable,
        sys_base_menu_id: Option<Int> = nullable,
        param_type as "type": Option<String> = nullable,
        key: Option<String> = nullable,
        value: Option<String> = nullable,
    }

    /// Admin navigation menu entry.
    "sys_base_menus" => SysBaseMenu {
        id: Int = generated,
        created_at: Option<Timestamp> = nullable,
        updated_at: Option<Timestamp> = nullable,
        deleted_at: Option<Timestamp> = nullable,
        menu_level: Option<Int> = nullable,
        parent_id: Option<Int> = nullable,
        path: Option<String> = nullable,
        name: Option<String> = nullable,
        hidden: Option<Int> = nullable,
        component: Option<String> = nullable,
        sort: Option<Int> = nullable,
        active_name: Option<String> = nullable,
        keep_alive: Option<Int> = nullable,
        default_menu: Option<Int> = nullable,
        title: Option<String> = nullable,
        icon: Option<String> = nullable,
        close_tab: Option<Int> = nullable,
    }

    /// Role to data-scope role join.
    "sys_data_authority_id" => SysDataAuthorityId {
        sys_authority_authority_id: Int = required,
        data_authority_id_authority_id: Int = required,
    }

    "sys_dictionaries" => SysDictionary {
        id: Int = generated,
        created_at: Option<Timestamp> = nullable,
        updated_at: Option<Timestamp> = nullable,
        deleted_at: Option<Timestamp> = nullable,
        name: Option<String> = nullable,
        dictionary_type as "type": Option<String> = nullable,
        status: Option<Int> = nullable,
        desc: Option<String> = nullable,
    }

    "sys_dictionary_details" => SysDictionaryDetail {
        id: Int = generated,
        created_at: Option<Timestamp> = nullable,
        updated_at: Option<Timestamp> = nullable,
        deleted_at: Option<Timestamp> = nullable,
        label: Option<String> = nullable,
        value: Option<String> = nullable,
        extend: Option<String> = nullable,
        status: Option<Int> = nullable,
        sort: Option<Int> = nullable,
        sys_dictionary_id: Option<Int> = nullable,
    }

    "sys_export_template_condition" => SysExportTemplateCondition {
        id: Int = generated,
        created_at: Option<Timestamp> = nullable,
        updated_at: Option<Timestamp> = nullable,
        deleted_at: Option<Timestamp> = nullable,
        template_id: Option<String> = nullable,
        from: Option<String> = nullable,
        column: Option<String> = nullable,
        operator: Option<String> = nullable,
    }

    "sys_export_template_join" => SysExportTemplateJoin {
        id: Int = generated,
        created_at: Option<Timestamp> = nullable,
        updated_at: Option<Timestamp> = nullable,
        deleted_at: Option<Timestamp> = nullable,
        template_id: Option<String> = nullable,
        joins: Option<String> = nullable,
        table: Option<String> = nullable,
        on: Option<String> = nullable,
    }

    "sys_export_templates" => SysExportTemplate {
        id: Int = generated,
        created_at: Option<Timestamp> = nullable,
        updated_at: Option<Timestamp> = nullable,
        deleted_at: Option<Timestamp> = nullable,
        db_name: Option<String> = nullable,
        name: Option<String> = nullable,
        table_name: Option<String> = nullable,
        template_id: Option<String> = nullable,
        template_info: Option<String> = nullable,
        limit: Option<Int> = nullable,
        order: Option<String> = nullable,
    }

    "sys_ignore_apis" => SysIgnoreApi {
        id: Int = generated,
        created_at: Option<Timestamp> = nullable,
        updated_at: Option<Timestamp> = nullable,
        deleted_at: Option<Timestamp> = nullable,
        path: Option<String> = nullable,
        method: Option<String> = generated_nullable,
    }

    /// Audit record of an admin API request.
    "sys_operation_records" => SysOperationRecord {
        id: Int = generated,
        created_at: Option<Timestamp> = nullable,
        updated_at: Option<Timestamp> = nullable,
        deleted_at: Option<Timestamp> = nullable,
        ip: Option<String> = nullable,
        method: Option<String> = nullable,
        path: Option<String> = nullable,
        /// HTTP status code.
        status: Option<Int> = nullable,
        /// Request latency in nanoseconds.
        latency: Option<Int> = nullable,
        agent: Option<String> = nullable,
        error_message: Option<String> = nullable,
        body: Option<String> = nullable,
        resp: Option<String> = nullable,
        user_id: Option<Int> = nullable,
    }

    /// Admin user to role join.
    "sys_user_authority" => SysUserAuthority {
        sys_user_id: Int = required,
        sys_authority_authority_id: Int = required,
    }

    /// Admin console user.
    "sys_users" => SysUser {
        id: Int = generated,
        created_at: Option<Timestamp> = nullable,
        updated_at: Option<Timestamp> = nullable,
        deleted_at: Option<Timestamp> = nullable,
        uuid: Option<String> = nullable,
        username: Option<String> = nullable,
        password: Option<String> = nullable,
        nick_name: Option<String> = generated_nullable,
        side_mode: Option<String> = generated_nullable,
        header_img: Option<String> = generated_nullable,
        base_color: Option<String> = generated_nullable,
        authority_id: Option<Int> = generated_nullable,
        phone: Option<String> = nullable,
        email: Option<String> = nullable,
        enable: Option<Int> = generated_nullable,
    }

    /// Application user.
    "users" => User {
        id: String = required,
        name: Option<String> = nullable,
        email: String = required,
        email_verified: Option<Timestamp> = nullable,
        password: Option<String> = nullable,
        image: Option<String> = nullable,
    }

    /// Email sign-in verification token.
    "verification_tokens" => VerificationToken {
        identifier: String = required,
        token: String = required,
        expires: Timestamp = required,
    }
}
