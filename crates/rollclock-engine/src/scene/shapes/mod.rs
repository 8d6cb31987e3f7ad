mod rounded_rect;
mod text;

pub use rounded_rect::RoundedRectCmd;
pub use text::TextCmd;
