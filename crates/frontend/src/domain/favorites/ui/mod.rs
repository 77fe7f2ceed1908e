mod panel;
mod star;

pub use panel::FavoritesPanel;
pub use star::StarButton;
