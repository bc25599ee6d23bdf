pub mod export;
pub mod highlight;
pub mod view;

pub use export::export_text;
pub use highlight::{highlight_line, CommandToken, TokenKind};
pub use view::{ResponseView, StepView};
