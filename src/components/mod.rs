pub mod card;
pub mod recap;
