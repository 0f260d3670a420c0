pub mod priority;

pub use priority::Priority;
