//! Addresses Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::{
    employees::{
        data::NewAddress,
        records::{AddressId, AddressRecord},
    },
    status::try_get_status,
};

const CREATE_ADDRESS_SQL: &str = include_str!("../sql/create_address.sql");
const UPDATE_ADDRESS_SQL: &str = include_str!("../sql/update_address.sql");
const DELETE_ADDRESS_SQL: &str = include_str!("../sql/delete_address.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgAddressesRepository;

impl PgAddressesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_address(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        address: &NewAddress,
    ) -> Result<AddressRecord, sqlx::Error> {
        query_as::<Postgres, AddressRecord>(CREATE_ADDRESS_SQL)
            .bind(address.street.as_deref())
            .bind(address.city.as_deref())
            .bind(address.state.as_deref())
            .bind(address.postal_code.as_deref())
            .fetch_one(&mut **tx)
            .await
    }

    /// Rewrites the address in place and marks it active.
    pub(crate) async fn update_address(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: AddressId,
        address: &NewAddress,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(UPDATE_ADDRESS_SQL)
            .bind(id.into_i64())
            .bind(address.street.as_deref())
            .bind(address.city.as_deref())
            .bind(address.state.as_deref())
            .bind(address.postal_code.as_deref())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn delete_address(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: AddressId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_ADDRESS_SQL)
            .bind(id.into_i64())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

/// Decode an address from columns sharing `prefix`.
pub(super) fn read_address(row: &PgRow, prefix: &str) -> sqlx::Result<AddressRecord> {
    let column = |name: &str| format!("{prefix}{name}");

    Ok(AddressRecord {
        id: AddressId::from_i64(row.try_get(column("id").as_str())?),
        street: row.try_get(column("street").as_str())?,
        city: row.try_get(column("city").as_str())?,
        state: row.try_get(column("state").as_str())?,
        postal_code: row.try_get(column("postal_code").as_str())?,
        status: try_get_status(row, &column("status"))?,
    })
}

impl<'r> FromRow<'r, PgRow> for AddressRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        read_address(row, "")
    }
}
