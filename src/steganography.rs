//! # LSB 编解码核心
//!
//! 比特流 = 消息的每个字节 (8 位，MSB 在前) + 16 位结束标记 `0xFFFE`，
//! 依次写入每个像素样本的最低位。样本缓冲区被视为一个扁平序列，
//! 不关心宽、高或通道顺序。
//!
//! 结束标记是定界符而不是长度前缀：如果消息末尾的比特恰好和随后写入的比特
//! 拼出 `1111111111111110`，解码器会提前停止。例如消息 `[0xFF, 0xFE]`
//! 会被解码为空消息。

use crate::constants::{BITS_PER_BYTE, END_MARKER, END_MARKER_BITS};
use crate::error::{Result, StegoError};

/// 解码扫描的终止状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan {
    /// 在结束标记处停止；`message_bits` 是标记之前的比特数。
    Matched { message_bits: usize },
    /// 读完整个缓冲区也没有遇到结束标记。
    Exhausted { bits: usize },
}

impl Scan {
    /// 用于重组字节的比特数：匹配时不含标记，耗尽时为全部比特。
    pub fn payload_bits(self) -> usize {
        match self {
            Scan::Matched { message_bits } => message_bits,
            Scan::Exhausted { bits } => bits,
        }
    }
}

/// 长度为 `message_len` 字节的消息所需的样本数。溢出时返回 `None`。
pub fn bitstream_len(message_len: usize) -> Option<usize> {
    message_len
        .checked_mul(BITS_PER_BYTE)?
        .checked_add(END_MARKER_BITS)
}

/// `samples` 个样本最多能容纳的消息字节数。
pub fn max_message_len(samples: usize) -> usize {
    samples.saturating_sub(END_MARKER_BITS) / BITS_PER_BYTE
}

fn bitstream(message: &[u8]) -> impl Iterator<Item = u8> + '_ {
    message
        .iter()
        .copied()
        .chain(END_MARKER.to_be_bytes())
        .flat_map(|byte| (0..BITS_PER_BYTE).rev().map(move |shift| (byte >> shift) & 1))
}

/// 把 `message` 和结束标记写入 `pix` 的最低位，返回被占用的样本数。
///
/// 写入前先检查容量，失败时 `pix` 保持原样。只修改每个样本的第 0 位，
/// 比特流之后的样本不会被触碰。
///
/// # Errors
///
/// 比特流长于 `pix` 时返回 [`StegoError::InsufficientCapacity`]。
pub fn encode(pix: &mut [u8], message: &[u8]) -> Result<usize> {
    let required = bitstream_len(message.len()).unwrap_or(usize::MAX);
    if required > pix.len() {
        return Err(StegoError::InsufficientCapacity {
            required,
            available: pix.len(),
        });
    }

    for (sample, bit) in pix.iter_mut().zip(bitstream(message)) {
        *sample = (*sample & 0xFE) | bit;
    }

    Ok(required)
}

/// 按顺序读取样本最低位，直到末尾 16 位等于结束标记或缓冲区耗尽。
pub fn scan(pix: &[u8]) -> Scan {
    let mut window: u16 = 0;

    for (i, &sample) in pix.iter().enumerate() {
        window = (window << 1) | u16::from(sample & 1);
        let seen = i + 1;
        if seen >= END_MARKER_BITS && window == END_MARKER {
            return Scan::Matched {
                message_bits: seen - END_MARKER_BITS,
            };
        }
    }

    Scan::Exhausted { bits: pix.len() }
}

// 不足 8 位的尾部分组被丢弃。
fn pack(pix: &[u8]) -> Vec<u8> {
    pix.chunks_exact(BITS_PER_BYTE)
        .map(|group| group.iter().fold(0u8, |byte, &sample| (byte << 1) | (sample & 1)))
        .collect()
}

/// 从 `pix` 中恢复结束标记之前的消息。
///
/// # Errors
///
/// 没有找到结束标记时返回 [`StegoError::NoMarkerFound`]。
pub fn decode(pix: &[u8]) -> Result<Vec<u8>> {
    match scan(pix) {
        Scan::Matched { message_bits } => Ok(pack(&pix[..message_bits])),
        Scan::Exhausted { bits } => Err(StegoError::NoMarkerFound { scanned: bits }),
    }
}

/// 与 [`decode`] 相同，但缺少结束标记时把整个最低位流重组为字节，从不失败。
pub fn decode_lossy(pix: &[u8]) -> Vec<u8> {
    pack(&pix[..scan(pix).payload_bits()])
}
