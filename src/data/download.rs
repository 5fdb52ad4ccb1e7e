//! 数据文件的下载与MD5校验

use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use md5::{Digest, Md5};
use tracing::info;

use super::error::DataError;

/// 把`url`下载到`dest_path`。
///
/// 内容先写入同目录下的`.part`临时文件，边写边计算MD5；给定`expected_md5`且不一致时删除临时文件并报错，
/// 全部成功后才重命名为`dest_path`，因此中断的下载不会留下看似完整的文件。
pub fn download_file(
    url: &str,
    dest_path: &Path,
    expected_md5: Option<&str>,
) -> Result<(), DataError> {
    info!("正在下载 {url}");
    let download_error = |reason: String| DataError::Download {
        url: url.to_string(),
        reason,
    };

    let response = ureq::get(url)
        .call()
        .map_err(|e| download_error(e.to_string()))?;
    if response.status() != 200 {
        return Err(download_error(format!("HTTP状态码{}", response.status())));
    }

    if let Some(parent) = dest_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let part_path = dest_path.with_extension("part");
    let mut reader = response.into_reader();
    let mut writer = BufWriter::new(File::create(&part_path)?);
    let digest = copy_with_md5(&mut reader, &mut writer).map_err(|e| download_error(e.to_string()))?;
    writer.flush()?;
    drop(writer);

    if let Some(expected) = expected_md5.filter(|e| !digest.eq_ignore_ascii_case(e)) {
        fs::remove_file(&part_path)?;
        return Err(DataError::ChecksumMismatch {
            file: dest_path.display().to_string(),
            expected: expected.to_string(),
            got: digest,
        });
    }

    fs::rename(&part_path, dest_path)?;
    info!("已下载到 {}", dest_path.display());
    Ok(())
}

/// 把`reader`中的全部内容写入`writer`，返回内容的MD5（小写十六进制）
pub fn copy_with_md5<R: Read, W: Write>(reader: &mut R, writer: &mut W) -> io::Result<String> {
    let mut hasher = Md5::new();
    let mut buffer = [0u8; 64 * 1024];
    loop {
        let n = reader.read(&mut buffer)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
        writer.write_all(&buffer[..n])?;
    }
    Ok(format!("{:x}", hasher.finalize()))
}
