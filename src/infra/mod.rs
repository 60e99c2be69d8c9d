pub mod id_adapter;
pub mod status_adapter;

pub use id_adapter::SpiderId;
pub use status_adapter::ConventionalStatus;
