//! # lsb_mark 库
//!
//! 本库包含以结束标记定界的 LSB 隐写工具的核心逻辑。
//!
//! [`steganography`] 是纯内存的编解码器，只接收样本缓冲区和字节序列；
//! 图像读写、命令行和文件处理都在其外层模块中。

// 声明库包含的所有模块。

pub mod cli;
pub mod constants;
pub mod error;
pub mod handler;
pub mod image_io;
pub mod steganography;
pub mod text;

pub use error::{Result, StegoError};
