//! # 隐写核心错误类型
//!
//! 编解码器只返回值级别的错误，不打印、不记录日志，由调用方决定如何呈现。

use thiserror::Error;

/// 隐写核心操作的结果别名。
pub type Result<T, E = StegoError> = std::result::Result<T, E>;

/// 编解码器和文本转换可能产生的错误。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StegoError {
    /// 比特流 (消息比特 + 结束标记) 比像素样本数更长，缓冲区未被修改。
    #[error("message needs {required} samples but the image only has {available}")]
    InsufficientCapacity { required: usize, available: usize },

    /// 扫描完整个缓冲区也没有遇到结束标记。
    #[error("no end-of-message marker found in {scanned} samples")]
    NoMarkerFound { scanned: usize },

    /// 字符的码位超出单字节范围 (0–255)，无法按 8 位写入。
    #[error("character {character:?} at position {index} does not fit in a single byte")]
    UnsupportedCharacter { character: char, index: usize },
}
