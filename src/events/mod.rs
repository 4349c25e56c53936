pub mod anchor;
pub mod pointer;

pub use anchor::wire_smooth_anchors;
pub use pointer::{client_xy, on_click, on_pointer_leave, on_pointer_move, on_scroll};
