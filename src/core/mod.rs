pub mod contact;
pub mod layout;
pub mod lod;
pub mod motion;

pub use contact::*;
pub use layout::*;
pub use lod::*;
pub use motion::*;

// Page stylesheet bundled as a string constant
pub static STYLES_CSS: &str = include_str!("../styles.css");
