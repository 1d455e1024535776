//! Value objects - immutable domain primitives

mod emoji_key;
mod snowflake;

pub use emoji_key::{EmojiKey, EmojiKeyError};
pub use snowflake::{Snowflake, SnowflakeParseError};
