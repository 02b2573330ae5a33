pub mod alert;
pub mod common_enums;
pub mod log_entry;
pub mod metric;

pub use alert::*;
pub use common_enums::*;
pub use log_entry::*;
pub use metric::*;
