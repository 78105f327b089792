// Adapters layer: turning a finished report into something a user reads.

pub mod render;

pub use render::render;
