pub mod belt;
pub mod loader;

pub use belt::BeltRank;
pub use loader::GlossaryLoader;
