pub mod aggregate;
pub mod dates;
pub mod quotes;
pub mod streak;
pub mod text_gen;
