pub mod color;
pub mod date;
pub mod text;

pub use color::{DEFAULT_AVATAR_COLOR, avatar_color, parse_css_color};
pub use date::{DATE_PLACEHOLDER, DateDisplay};
pub use text::{display_width, initials, pad_to_width, truncate_text};
