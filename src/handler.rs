//! # 命令处理逻辑模块
//!
//! 包含处理 `hide`、`recover` 和 `capacity` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用核心隐写算法以及向用户报告结果。

use crate::cli::{CapacityArgs, HideArgs, RecoverArgs};
use crate::constants::{DEFAULT_IMAGE_EXTENSION, ENCODED_PREFIX, RECOVERED_PREFIX};
use crate::error::StegoError;
use crate::image_io::{load_samples, lossless_format, save_samples};
use crate::steganography::{decode, decode_lossy, encode, max_message_len};
use crate::text::{from_latin1, to_latin1};
use anyhow::{Context, Result, anyhow};
use colored::Colorize;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// 处理 'Hide' 命令的执行逻辑。
///
/// 负责读取消息和图像、检查隐写空间是否足够、调用隐写核心函数写入消息和结束标记，
/// 最后将结果以无损格式写入目标图像文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径的 `HideArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 没有提供消息，或消息为空。
/// * 命令行消息包含码位超过 255 的字符。
/// * 目标文件已存在且未指定 `--force`，或目标格式不是无损格式。
/// * 无法读取或解码输入的图像。
/// * 图像文件没有足够的空间来隐藏文本。
/// * 无法写入到目标图像文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let message = read_message(&args)?;
    anyhow::ensure!(!message.is_empty(), "No message provided for hiding.");

    let dest = args
        .dest
        .clone()
        .unwrap_or_else(|| default_image_dest(&args.image));
    ensure_writable(&dest, args.force)?;
    lossless_format(&dest)?;

    let mut carrier = load_samples(&args.image)?;

    let used = encode(carrier.samples_mut(), &message).map_err(|err| match err {
        StegoError::InsufficientCapacity {
            required,
            available,
        } => anyhow!(
            "Not enough space in the image to hide the text. \nRequired: {}, Available: {}",
            required.to_string().red().bold(),
            available.to_string().green().bold()
        ),
        other => anyhow::Error::new(other).context("Failed to hide the message in the image."),
    })?;
    info!(
        "embedded {} bytes into {} of {} samples",
        message.len(),
        used,
        carrier.samples().len()
    );

    save_samples(&carrier, &dest)?;

    println!(
        "The text has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Recover' 命令的执行逻辑。
///
/// 负责读取经过隐写的图像文件、扫描样本最低位直到结束标记，
/// 最后将恢复的文本写入目标文本文件或打印到标准输出。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径的 `RecoverArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取或解码输入的图像。
/// * 图像中没有隐藏的消息 (找不到结束标记，或 `--lossy` 模式下结果为空)。
/// * 目标文件已存在且未指定 `--force`。
/// * 无法写入到目标文本文件。
pub fn handle_recover(args: RecoverArgs) -> Result<()> {
    let carrier = load_samples(&args.image)?;

    let message = if args.lossy {
        decode_lossy(carrier.samples())
    } else {
        decode(carrier.samples()).map_err(|err| match err {
            StegoError::NoMarkerFound { scanned } => {
                debug!("scanned {scanned} samples without an end marker");
                no_message_found(&args.image)
            }
            other => anyhow::Error::new(other).context("Failed to recover the message."),
        })?
    };

    if message.is_empty() {
        return Err(no_message_found(&args.image));
    }
    info!("recovered {} bytes", message.len());

    if args.stdout {
        println!("{}", from_latin1(&message));
        return Ok(());
    }

    let dest = args
        .text
        .clone()
        .unwrap_or_else(|| default_text_dest(&args.image));
    ensure_writable(&dest, args.force)?;

    fs::write(&dest, message).with_context(|| {
        format!(
            "Unable to write to target text file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The text has been successfully recovered and saved: {}",
        dest.to_string_lossy().green().bold()
    );
    Ok(())
}

/// 处理 'Capacity' 命令：报告图像的样本数和最多能隐藏的字节数，并返回该字节数。
///
/// # Errors
///
/// 无法读取或解码输入的图像时返回错误。
pub fn handle_capacity(args: CapacityArgs) -> Result<usize> {
    let carrier = load_samples(&args.image)?;
    let (width, height) = carrier.dimensions();
    let samples = carrier.samples().len();
    let capacity = max_message_len(samples);

    println!(
        "{}x{} image, {} samples: up to {} bytes can be hidden.",
        width,
        height,
        samples,
        capacity.to_string().green().bold()
    );
    Ok(capacity)
}

fn read_message(args: &HideArgs) -> Result<Vec<u8>> {
    match (&args.text, &args.message) {
        (Some(path), _) => fs::read(path).with_context(|| {
            format!(
                "Unable to read text file: {}",
                path.to_string_lossy().red().bold()
            )
        }),
        (None, Some(text)) => to_latin1(text).context(
            "The message can only contain characters in the single-byte range (0-255). \nUse --text to hide arbitrary bytes.",
        ),
        (None, None) => Err(anyhow!("No message provided for hiding.")),
    }
}

fn no_message_found(image: &Path) -> anyhow::Error {
    anyhow!(
        "No hidden message found in the image: {}",
        image.to_string_lossy().red().bold()
    )
}

fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn default_image_dest(image: &Path) -> PathBuf {
    image.with_file_name(format!(
        "{ENCODED_PREFIX}{}.{DEFAULT_IMAGE_EXTENSION}",
        file_stem(image)
    ))
}

fn default_text_dest(image: &Path) -> PathBuf {
    image.with_file_name(format!("{RECOVERED_PREFIX}{}.txt", file_stem(image)))
}
