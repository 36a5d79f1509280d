pub mod mood_entry;
pub mod quote;
