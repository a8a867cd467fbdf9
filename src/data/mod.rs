pub mod record;
pub mod source;
pub mod store;

pub use record::{display_scalar, DistributorRecord};
pub use source::DataSource;
pub use store::DataStore;
