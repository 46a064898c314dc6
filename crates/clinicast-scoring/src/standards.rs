pub mod mews;
pub mod news2;
