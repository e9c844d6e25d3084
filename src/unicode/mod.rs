//! Unicode utilities: ASCII whitespace classes and display width.

mod whitespace;
mod width;

pub use whitespace::Whitespace;
pub use width::{
    WidthMethod, char_width_with_method, display_width, display_width_with_method,
    set_width_method, width_method,
};
