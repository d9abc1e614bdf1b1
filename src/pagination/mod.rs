mod strip;
mod window;

pub use strip::{PageLink, page_strip};
pub use window::PageWindow;
