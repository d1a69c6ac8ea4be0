pub mod statusbar;

pub use statusbar::render_statusbar;
