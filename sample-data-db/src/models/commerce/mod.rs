pub mod common_enums;
pub mod customer;
pub mod order;
pub mod order_item;
pub mod product;

pub use common_enums::*;
pub use customer::*;
pub use order::*;
pub use order_item::*;
pub use product::*;
