use heapless::String as HeaplessString;
use sqlx::query_builder::Separated;
use sqlx::{postgres::PgRow, Postgres, QueryBuilder, Row};
use std::error::Error;
use std::str::FromStr;

use crate::unit_of_work::Executor;

/// A trait for converting a database row into a model.
pub trait TryFromRow<R>: Sized {
    /// Performs the conversion.
    fn try_from_row(row: &R) -> Result<Self, Box<dyn Error + Send + Sync>>;
}

/// Retrieves a required `HeaplessString` from a row.
pub fn get_heapless_string<const N: usize>(
    row: &PgRow,
    col_name: &str,
) -> Result<HeaplessString<N>, Box<dyn Error + Send + Sync>> {
    let s: String = row.try_get(col_name)?;
    HeaplessString::from_str(&s).map_err(|_| {
        format!("Value for column '{col_name}' is too long (max {N} chars)").into()
    })
}

/// Retrieves a text column and parses it into one of the closed value sets.
pub fn get_value_set<T: FromStr>(
    row: &PgRow,
    col_name: &str,
) -> Result<T, Box<dyn Error + Send + Sync>> {
    let s: String = row.try_get(col_name)?;
    T::from_str(&s).map_err(|_| format!("Unknown value '{s}' for column '{col_name}'").into())
}

/// Rows per `INSERT` statement.
///
/// Seven columns at most per row keeps every page far below the 65535
/// bind-parameter limit of the Postgres protocol.
pub const INSERT_PAGE_SIZE: usize = 100;

/// Bulk-inserts `items` with `ON CONFLICT DO NOTHING` and returns the number of rows written.
///
/// `insert_head` is the statement up to the `VALUES` keyword, e.g.
/// `INSERT INTO commerce.customers (id, name) `. `push_row` binds one item's
/// columns in the same order.
pub async fn insert_ignoring_conflicts<'a, T, F>(
    executor: &Executor,
    insert_head: &str,
    items: &'a [T],
    mut push_row: F,
) -> Result<u64, Box<dyn Error + Send + Sync>>
where
    T: Sync,
    F: FnMut(Separated<'_, 'a, Postgres, &'static str>, &'a T) + Send,
{
    if items.is_empty() {
        return Ok(0);
    }

    let mut inserted = 0;
    let mut tx = executor.tx.lock().await;
    let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;

    for page in items.chunks(INSERT_PAGE_SIZE) {
        let mut builder: QueryBuilder<'a, Postgres> = QueryBuilder::new(insert_head);
        builder.push_values(page, &mut push_row);
        builder.push(" ON CONFLICT DO NOTHING");

        let result = builder.build().execute(&mut **transaction).await?;
        inserted += result.rows_affected();
    }

    Ok(inserted)
}
