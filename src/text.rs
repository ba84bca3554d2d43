//! # 单字节文本转换
//!
//! 编解码器只处理字节。命令行直接输入的消息按 Latin-1 映射：
//! 每个字符的码位必须在 0–255 之间，超出范围时立即报错，而不是静默截断。

use crate::error::{Result, StegoError};

/// 把文本转换为逐字符的单字节序列。
///
/// # Errors
///
/// 遇到码位大于 255 的字符时返回 [`StegoError::UnsupportedCharacter`]，
/// `index` 为该字符在文本中的字符位置 (不是字节偏移)。
pub fn to_latin1(text: &str) -> Result<Vec<u8>> {
    text.chars()
        .enumerate()
        .map(|(index, character)| {
            u8::try_from(character)
                .map_err(|_| StegoError::UnsupportedCharacter { character, index })
        })
        .collect()
}

/// 把每个字节映射为码位相同的字符。
pub fn from_latin1(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}
