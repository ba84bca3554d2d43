/// 消息结束标记 (`1111111111111110`)。
/// 紧跟在最后一个消息比特之后写入，解码器在比特流的末尾 16 位与之相等时停止扫描。
pub const END_MARKER: u16 = 0xFFFE;

/// 结束标记占用的比特数，也就是占用的像素样本数。
pub const END_MARKER_BITS: usize = u16::BITS as usize;

/// 每个消息字节按 8 位大端 (MSB 在前) 写入，需要 8 个像素样本。
pub const BITS_PER_BYTE: usize = u8::BITS as usize;

/// 隐写结果图像的默认文件名前缀。
pub const ENCODED_PREFIX: &str = "encoded_";

/// 恢复出的文本文件的默认文件名前缀。
pub const RECOVERED_PREFIX: &str = "recovered_";

/// 未指定输出路径时，隐写结果图像使用的扩展名。
pub const DEFAULT_IMAGE_EXTENSION: &str = "png";
