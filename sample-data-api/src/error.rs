use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Invalid value {value:?} for setting {name}")]
    InvalidSetting { name: &'static str, value: String },

    #[error("Database not reachable after waiting {waited_secs}s")]
    DatabaseUnreachable { waited_secs: u64 },

    #[error("Cannot generate orders: no {0} available to reference")]
    EmptyReferencePool(&'static str),

    #[error("Transaction has been consumed")]
    TransactionConsumed,

    #[error("Database error: {0}")]
    Database(String),
}

pub type SeedResult<T> = Result<T, SeedError>;

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for SeedError {
    fn from(err: sqlx::Error) -> Self {
        SeedError::Database(err.to_string())
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for SeedError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        match err.downcast::<SeedError>() {
            Ok(seed_err) => *seed_err,
            Err(other) => SeedError::Database(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boxed_seed_error_keeps_its_variant() {
        let boxed: Box<dyn std::error::Error + Send + Sync> =
            Box::new(SeedError::EmptyReferencePool("customers"));
        let err = SeedError::from(boxed);
        assert!(matches!(err, SeedError::EmptyReferencePool("customers")));
    }

    #[test]
    fn foreign_boxed_error_becomes_database_error() {
        let boxed: Box<dyn std::error::Error + Send + Sync> = "Transaction has been consumed".into();
        let err = SeedError::from(boxed);
        assert_eq!(err.to_string(), "Database error: Transaction has been consumed");
    }
}
