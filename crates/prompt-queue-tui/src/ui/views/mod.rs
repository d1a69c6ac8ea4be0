pub mod queue;

pub use queue::render_queue;
