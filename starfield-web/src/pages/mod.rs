//! Pages

pub mod showcase;

pub use showcase::ShowcasePage;
