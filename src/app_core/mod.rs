mod app;
mod player;

pub use app::Encore;
