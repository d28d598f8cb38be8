pub mod entry;
pub mod field;
pub mod slot;

pub use entry::ClassEntry;
pub use field::Field;
pub use slot::TimeSlot;
