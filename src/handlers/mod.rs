pub mod health;
pub mod moods;
pub mod quotes;
pub mod stats;
