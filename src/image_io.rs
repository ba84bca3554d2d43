//! # 图像读写模块
//!
//! 把任意支持的图像解码为扁平的 8 位样本缓冲区，每个像素按 B, G, R 顺序排列
//! (与 OpenCV 读取的顺序一致，保证和其他工具生成的隐写图像互通)，
//! 并把修改后的缓冲区以无损格式写回。隐藏的消息只存在于样本最低位，任何有损压缩 (如 JPEG)
//! 都会破坏它，因此输出格式必须是无损的。

use anyhow::{Context, Result};
use colored::Colorize;
use image::{ColorType, ImageFormat};
use log::debug;
use std::path::Path;

/// 允许作为隐写输出的无损格式。
pub const LOSSLESS_FORMATS: [ImageFormat; 5] = [
    ImageFormat::Png,
    ImageFormat::Bmp,
    ImageFormat::Tiff,
    ImageFormat::Qoi,
    ImageFormat::WebP,
];

/// 每个像素的通道数。
const CHANNELS: usize = 3;

/// 解码后的图像：尺寸加上按行优先排列的 B, G, R 样本。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carrier {
    width: u32,
    height: u32,
    samples: Vec<u8>,
}

impl Carrier {
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    pub fn samples_mut(&mut self) -> &mut [u8] {
        &mut self.samples
    }
}

// R, G, B 与 B, G, R 互换，自身即逆操作。
fn swap_red_blue(samples: &mut [u8]) {
    for pixel in samples.chunks_exact_mut(CHANNELS) {
        pixel.swap(0, 2);
    }
}

/// 读取并解码图像文件，转换为 8 位 BGR 样本 (丢弃 Alpha 通道)。
///
/// # Errors
///
/// 文件无法打开或格式无法识别时返回错误。
pub fn load_samples(path: &Path) -> Result<Carrier> {
    let img = image::open(path).with_context(|| {
        format!(
            "Failed to read the image: {}. \nPlease try another format (e.g., PNG, BMP).",
            path.to_string_lossy().red().bold()
        )
    })?;

    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    debug!(
        "decoded {} as {}x{} BGR ({} samples)",
        path.display(),
        width,
        height,
        rgb.as_raw().len()
    );

    let mut samples = rgb.into_raw();
    swap_red_blue(&mut samples);

    Ok(Carrier {
        width,
        height,
        samples,
    })
}

/// 根据扩展名推断输出格式，并确认它是无损的。
///
/// # Errors
///
/// 扩展名无法识别，或对应的格式是有损的。
pub fn lossless_format(path: &Path) -> Result<ImageFormat> {
    let format = ImageFormat::from_path(path).with_context(|| {
        format!(
            "Unable to determine the output image format from: {}",
            path.to_string_lossy().red().bold()
        )
    })?;

    anyhow::ensure!(
        LOSSLESS_FORMATS.contains(&format),
        "Output format {:?} is lossy and would destroy the hidden message. \nUse a lossless format such as {}.",
        format,
        "PNG or BMP".green().bold()
    );

    Ok(format)
}

/// 把样本缓冲区以无损格式写入 `path`。
///
/// # Errors
///
/// 输出格式不是无损格式，或写入失败。
pub fn save_samples(carrier: &Carrier, path: &Path) -> Result<()> {
    let format = lossless_format(path)?;

    let mut rgb = carrier.samples.clone();
    swap_red_blue(&mut rgb);

    image::save_buffer_with_format(
        path,
        &rgb,
        carrier.width,
        carrier.height,
        ColorType::Rgb8,
        format,
    )
    .with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            path.to_string_lossy().red().bold()
        )
    })?;

    debug!("wrote {} as {:?}", path.display(), format);
    Ok(())
}
