pub mod confirmation;
pub mod entry;
