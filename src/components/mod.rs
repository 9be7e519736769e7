mod chat_line;
mod source_list;

pub use chat_line::{ChatLine, ChatLineData, ChatLineView, LinkDecorator, MessageRole};

pub use source_list::{SourceItem, source_label};
