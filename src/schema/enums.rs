//! Enumerated column types, stored as their upper-case label.

use serde::{Deserialize, Serialize};
use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::mysql::{MySql, MySqlTypeInfo, MySqlValueRef};
use sqlx::postgres::{PgTypeInfo, PgValueRef, Postgres};
use sqlx::{Decode, Encode, Type, TypeInfo};
use std::fmt;
use std::str::FromStr;

/// A label that does not name any variant of the target enum.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {type_name} value: {value}")]
pub struct ParseEnumError {
    /// SQL type name of the target enum.
    pub type_name: &'static str,
    /// The rejected label.
    pub value: String,
}

/// Declares a label-backed enum with sqlx support for both backends.
///
/// MySQL stores the label in an ENUM or text column. PostgreSQL uses a native
/// enum type named `$sql`, text columns are accepted as well. The PostgreSQL
/// type name is quoted so the case-sensitive name survives the OID lookup.
macro_rules! label_enum {
    (
        $(#[$meta:meta])*
        $name:ident as $sql:literal {
            $( $(#[doc = $doc:literal])* $variant:ident = $label:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[doc = $doc])*
                #[serde(rename = $label)]
                $variant,
            )*
        }

        impl $name {
            /// SQL type name.
            pub const SQL_TYPE: &'static str = $sql;

            /// Quoted PostgreSQL type name.
            pub const PG_TYPE: &'static str = concat!("\"", $sql, "\"");

            /// Every variant in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// Stored label.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)*
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok(Self::$variant),)*
                    other => Err(ParseEnumError {
                        type_name: $sql,
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl Type<MySql> for $name {
            fn type_info() -> MySqlTypeInfo {
                <str as Type<MySql>>::type_info()
            }

            fn compatible(ty: &MySqlTypeInfo) -> bool {
                <str as Type<MySql>>::compatible(ty)
            }
        }

        impl Type<Postgres> for $name {
            fn type_info() -> PgTypeInfo {
                PgTypeInfo::with_name(Self::PG_TYPE)
            }

            fn compatible(ty: &PgTypeInfo) -> bool {
                let name = ty.name();
                name == Self::SQL_TYPE
                    || name == Self::PG_TYPE
                    || <str as Type<Postgres>>::compatible(ty)
            }
        }

        impl<'r> Decode<'r, MySql> for $name {
            fn decode(value: MySqlValueRef<'r>) -> Result<Self, BoxDynError> {
                Ok(<&str as Decode<'r, MySql>>::decode(value)?.parse()?)
            }
        }

        impl<'r> Decode<'r, Postgres> for $name {
            fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
                Ok(<&str as Decode<'r, Postgres>>::decode(value)?.parse()?)
            }
        }

        impl<'q> Encode<'q, MySql> for $name {
            fn encode_by_ref(
                &self,
                buf: &mut <MySql as sqlx::Database>::ArgumentBuffer<'q>,
            ) -> Result<IsNull, BoxDynError> {
                <&str as Encode<'q, MySql>>::encode_by_ref(&self.as_str(), buf)
            }
        }

        impl<'q> Encode<'q, Postgres> for $name {
            fn encode_by_ref(
                &self,
                buf: &mut <Postgres as sqlx::Database>::ArgumentBuffer<'q>,
            ) -> Result<IsNull, BoxDynError> {
                <&str as Encode<'q, Postgres>>::encode_by_ref(&self.as_str(), buf)
            }
        }
    };
}

label_enum! {
    /// Billing plan of a customer.
    SubscriptionPlan as "SubscriptionPlan" {
        /// Free tier.
        Free = "FREE",
        /// Paid individual plan.
        Pro = "PRO",
        /// Paid team plan.
        Business = "BUSINESS",
    }
}

label_enum! {
    /// Provisioning state of a robot.
    Status as "Status" {
        Pending = "PENDING",
        Creating = "CREATING",
        Initing = "INITING",
        Running = "RUNNING",
        Stopped = "STOPPED",
        Deleted = "DELETED",
    }
}

label_enum! {
    /// Deployment region of a robot.
    Location as "LOCATION" {
        Cn = "CN",
        Us = "US",
        Eu = "EU",
        Jp = "JP",
    }
}

label_enum! {
    /// Conversation language of a robot.
    Language as "LANGUAGE" {
        En = "EN",
        Zh = "ZH",
        Ja = "JA",
    }
}
