/// Implements the sea-orm traits needed to store a uuid *newtype* as a string column
/// and to use it as a primary key.
macro_rules! impls_for_seaorm_newtype {
    ($newtype: ty) => {
        impl std::convert::From<$newtype> for sea_orm::Value {
            fn from(source: $newtype) -> Self {
                source.0.to_string().into()
            }
        }

        // needed for sea-orm `eq` filters
        impl std::convert::From<&$newtype> for sea_orm::Value {
            fn from(source: &$newtype) -> Self {
                source.0.to_string().into()
            }
        }

        impl sea_orm::TryGetable for $newtype {
            fn try_get_by<I: sea_orm::ColIdx>(
                res: &sea_orm::QueryResult,
                idx: I,
            ) -> Result<Self, sea_orm::TryGetError> {
                let value: String = <String as sea_orm::TryGetable>::try_get_by(res, idx)?;

                value.parse().map_err(|error| {
                    sea_orm::TryGetError::DbErr(sea_orm::error::DbErr::Type(format!(
                        "Failed to parse {}: {error}",
                        stringify!($newtype)
                    )))
                })
            }
        }

        impl sea_orm::sea_query::ValueType for $newtype {
            fn try_from(v: sea_orm::Value) -> Result<Self, sea_orm::sea_query::ValueTypeErr> {
                <String as sea_orm::sea_query::ValueType>::try_from(v)?
                    .parse()
                    .map_err(|_| sea_orm::sea_query::ValueTypeErr)
            }

            fn type_name() -> String {
                stringify!($newtype).to_owned()
            }

            fn array_type() -> sea_orm::sea_query::ArrayType {
                sea_orm::sea_query::ArrayType::String
            }

            fn column_type() -> sea_orm::sea_query::ColumnType {
                sea_orm::sea_query::ColumnType::String(sea_orm::sea_query::StringLen::None)
            }
        }

        // needed for `find_by_id`
        impl std::convert::From<&$newtype> for $newtype {
            fn from(source: &$newtype) -> Self {
                *source
            }
        }

        impl sea_orm::sea_query::value::Nullable for $newtype {
            fn null() -> sea_orm::Value {
                sea_orm::Value::String(None)
            }
        }

        impl sea_orm::TryFromU64 for $newtype {
            fn try_from_u64(_n: u64) -> Result<Self, sea_orm::DbErr> {
                Err(sea_orm::DbErr::ConvertFromU64(stringify!($newtype)))
            }
        }
    };
}
#[cfg(feature = "sea-orm")]
pub(crate) use impls_for_seaorm_newtype;

/// Implements `FromStr`, `Display` and conversions from and into [`uuid::Uuid`]
/// for a newtype wrapping an uuid.
macro_rules! impls_for_uuid_newtype {
    ($newtype: ty) => {
        impl std::str::FromStr for $newtype {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }

        impl std::fmt::Display for $newtype {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl std::convert::From<uuid::Uuid> for $newtype {
            fn from(value: uuid::Uuid) -> Self {
                Self(value)
            }
        }

        impl std::convert::From<$newtype> for uuid::Uuid {
            fn from(value: $newtype) -> Self {
                value.0
            }
        }
    };
}
pub(crate) use impls_for_uuid_newtype;
