//! Integer column type that decodes from any integer width.
//!
//! The same schema declares `INT`/`SERIAL` columns on PostgreSQL and signed or
//! unsigned `INT`/`BIGINT` columns on MySQL. [`Int`] widens all of them to
//! `i64` and binds as a 64-bit integer.

use serde::{Deserialize, Serialize};
use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::mysql::{MySql, MySqlTypeInfo, MySqlValueRef};
use sqlx::postgres::{PgTypeInfo, PgValueRef, Postgres};
use sqlx::{Decode, Encode, Type, ValueRef};
use std::fmt;

/// Integer column value.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Int(pub i64);

impl Int {
    /// Returns the value as `i64`.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for Int {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<i32> for Int {
    fn from(value: i32) -> Self {
        Self(i64::from(value))
    }
}

impl From<Int> for i64 {
    fn from(value: Int) -> Self {
        value.0
    }
}

impl PartialEq<i64> for Int {
    fn eq(&self, other: &i64) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Type<MySql> for Int {
    fn type_info() -> MySqlTypeInfo {
        <i64 as Type<MySql>>::type_info()
    }

    fn compatible(ty: &MySqlTypeInfo) -> bool {
        <i64 as Type<MySql>>::compatible(ty) || <u64 as Type<MySql>>::compatible(ty)
    }
}

impl Type<Postgres> for Int {
    fn type_info() -> PgTypeInfo {
        <i64 as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <i64 as Type<Postgres>>::compatible(ty)
            || <i32 as Type<Postgres>>::compatible(ty)
            || <i16 as Type<Postgres>>::compatible(ty)
    }
}

impl<'r> Decode<'r, MySql> for Int {
    fn decode(value: MySqlValueRef<'r>) -> Result<Self, BoxDynError> {
        let unsigned = <u64 as Type<MySql>>::compatible(&value.type_info());
        if unsigned {
            let raw = <u64 as Decode<'r, MySql>>::decode(value)?;
            return Ok(Self(i64::try_from(raw)?));
        }
        Ok(Self(<i64 as Decode<'r, MySql>>::decode(value)?))
    }
}

impl<'r> Decode<'r, Postgres> for Int {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        let ty = value.type_info().into_owned();
        if <i32 as Type<Postgres>>::compatible(&ty) {
            return Ok(Self::from(<i32 as Decode<'r, Postgres>>::decode(value)?));
        }
        if <i16 as Type<Postgres>>::compatible(&ty) {
            let raw = <i16 as Decode<'r, Postgres>>::decode(value)?;
            return Ok(Self(i64::from(raw)));
        }
        Ok(Self(<i64 as Decode<'r, Postgres>>::decode(value)?))
    }
}

impl<'q> Encode<'q, MySql> for Int {
    fn encode_by_ref(
        &self,
        buf: &mut <MySql as sqlx::Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, BoxDynError> {
        <i64 as Encode<'q, MySql>>::encode_by_ref(&self.0, buf)
    }
}

impl<'q> Encode<'q, Postgres> for Int {
    fn encode_by_ref(
        &self,
        buf: &mut <Postgres as sqlx::Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, BoxDynError> {
        <i64 as Encode<'q, Postgres>>::encode_by_ref(&self.0, buf)
    }
}
