//! MNIST 手写数字数据集
//!
//! 从本地的 IDX 文件（可为 `.gz` 压缩）读入，缺失时可选择下载（带 MD5 校验）。
//! 图像统一保存为 `[N, 1, 28, 28]`、取值 [0, 1]，标签为类别索引。

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use ndarray::{Array, IxDyn};
use rand::Rng;
use tracing::debug;

use crate::data::download::download_file;
use crate::data::error::DataError;
use crate::data::transforms::normalize_pixels;
use crate::tensor::Tensor;

/// 下载镜像（原官网不稳定）
const MNIST_BASE_URL: &str = "https://ossci-datasets.s3.amazonaws.com/mnist/";

const IMAGE_SIDE: usize = 28;
const NUM_CLASSES: usize = 10;

// IDX 文件头的魔数：前两字节为0，第3字节0x08表示无符号字节，第4字节为维度数
const IDX_IMAGES_MAGIC: u32 = 0x0000_0803;
const IDX_LABELS_MAGIC: u32 = 0x0000_0801;

/// 数据集的划分
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MnistSplit {
    /// 60000 个训练样本
    Train,
    /// 10000 个测试样本
    Test,
}

impl MnistSplit {
    fn images_file(&self) -> &'static str {
        match self {
            MnistSplit::Train => "train-images-idx3-ubyte",
            MnistSplit::Test => "t10k-images-idx3-ubyte",
        }
    }

    fn labels_file(&self) -> &'static str {
        match self {
            MnistSplit::Train => "train-labels-idx1-ubyte",
            MnistSplit::Test => "t10k-labels-idx1-ubyte",
        }
    }
}

/// 压缩文件的MD5
fn expected_md5(gz_name: &str) -> Option<&'static str> {
    match gz_name {
        "train-images-idx3-ubyte.gz" => Some("f68b3c2dcbeaaa9fbdd348bbdeb94873"),
        "train-labels-idx1-ubyte.gz" => Some("d53e105ee54ea40749a09fcbcd1e9432"),
        "t10k-images-idx3-ubyte.gz" => Some("9fb629c4189551a2d022fa330f9573f3"),
        "t10k-labels-idx1-ubyte.gz" => Some("ec29112dd5afa0611ce80d1b7f02629c"),
        _ => None,
    }
}

#[derive(Debug, Clone)]
pub struct MnistDataset {
    /// `[N, 1, 28, 28]`，展平后为`[N, 784]`；取值[0, 1]
    images: Tensor,
    classes: Vec<usize>,
}

impl MnistDataset {
    /// * `root` - 存放 IDX 文件的目录，为`None`时使用`default_data_dir()/mnist`
    /// * `download` - 本地缺失时是否下载
    pub fn load(root: Option<&Path>, split: MnistSplit, download: bool) -> Result<Self, DataError> {
        let data_dir = root
            .map(Path::to_path_buf)
            .unwrap_or_else(|| default_data_dir().join("mnist"));

        let images_path = locate_file(&data_dir, split.images_file(), download)?;
        let labels_path = locate_file(&data_dir, split.labels_file(), download)?;
        debug!("读取 {} 与 {}", images_path.display(), labels_path.display());

        let (image_dims, pixels) = read_idx(&images_path, IDX_IMAGES_MAGIC)?;
        if image_dims[1..] != [IMAGE_SIDE, IMAGE_SIDE] {
            return Err(DataError::InvalidIdx {
                path: images_path,
                reason: format!("图像尺寸为{:?}，而不是28×28", &image_dims[1..]),
            });
        }
        let (_, labels) = read_idx(&labels_path, IDX_LABELS_MAGIC)?;

        // 直接在字节缓冲上构造数组，只在转为[0, 1]的浮点数时复制一次
        let images = Array::from_shape_vec(IxDyn(&image_dims), pixels)
            .map_err(|e| DataError::InvalidIdx {
                path: images_path.clone(),
                reason: e.to_string(),
            })?
            .mapv(|p| f32::from(p) / 255.0);
        let classes = labels.into_iter().map(usize::from).collect();
        Self::from_normalized(Tensor::from_array(images), classes)
    }

    /// 默认目录下的训练集，缺失时自动下载
    pub fn train() -> Result<Self, DataError> {
        Self::load(None, MnistSplit::Train, true)
    }

    /// 默认目录下的测试集，缺失时自动下载
    pub fn test() -> Result<Self, DataError> {
        Self::load(None, MnistSplit::Test, true)
    }

    /// 由内存中的数据构造数据集。
    /// * `images` - 像素值在[0, 255]的图像，形状为`[N, 784]`、`[N, 28, 28]`或`[N, 1, 28, 28]`
    /// * `classes` - 每张图像的类别（0-9）
    pub fn from_raw(images: &Tensor, classes: Vec<usize>) -> Result<Self, DataError> {
        Self::from_normalized(normalize_pixels(images), classes)
    }

    /// 同`from_raw`，但`images`的取值已在[0, 1]
    fn from_normalized(images: Tensor, classes: Vec<usize>) -> Result<Self, DataError> {
        let len = images.batch_len();
        if images.size() != len * IMAGE_SIDE * IMAGE_SIDE {
            return Err(DataError::ShapeMismatch {
                expected: vec![len, IMAGE_SIDE * IMAGE_SIDE],
                got: images.shape().to_vec(),
            });
        }
        if classes.len() != len {
            return Err(DataError::ShapeMismatch {
                expected: vec![len],
                got: vec![classes.len()],
            });
        }
        if let Some(&bad) = classes.iter().find(|&&c| c >= NUM_CLASSES) {
            return Err(DataError::InvalidLabel(bad));
        }

        Ok(Self {
            images: images.into_reshape(&[len, 1, IMAGE_SIDE, IMAGE_SIDE]),
            classes,
        })
    }

    /// 把图像展平为`[N, 784]`
    pub fn flatten(mut self) -> Self {
        let len = self.len();
        self.images = self.images.into_reshape(&[len, IMAGE_SIDE * IMAGE_SIDE]);
        self
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    fn out_of_bounds(&self, index: usize) -> DataError {
        DataError::IndexOutOfBounds {
            index,
            len: self.len(),
        }
    }

    pub fn class_of(&self, index: usize) -> Result<usize, DataError> {
        self.classes
            .get(index)
            .copied()
            .ok_or_else(|| self.out_of_bounds(index))
    }

    /// 有放回地均匀抽取`n`个样本，返回图像（首维为`n`）及其类别
    pub fn sample<R: Rng + ?Sized>(
        &self,
        n: usize,
        rng: &mut R,
    ) -> Result<(Tensor, Vec<usize>), DataError> {
        if self.is_empty() {
            return Err(self.out_of_bounds(0));
        }
        let indices = (0..n)
            .map(|_| rng.gen_range(0..self.len()))
            .collect::<Vec<_>>();
        let images = self
            .images
            .select(&indices)
            .map_err(|_| self.out_of_bounds(n))?;
        let classes = indices.iter().map(|&i| self.classes[i]).collect();
        Ok((images, classes))
    }

    pub fn images(&self) -> &Tensor {
        &self.images
    }

    pub fn classes(&self) -> &[usize] {
        &self.classes
    }
}

/// 数据集的默认缓存目录
pub fn default_data_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gan_visual")
        .join("datasets")
}

/// 依次查找未压缩的文件与`.gz`文件；都不存在时按需下载`.gz`文件
fn locate_file(data_dir: &Path, base_name: &str, download: bool) -> Result<PathBuf, DataError> {
    let plain = data_dir.join(base_name);
    if plain.is_file() {
        return Ok(plain);
    }
    let gz_name = format!("{base_name}.gz");
    let gz = data_dir.join(&gz_name);
    if gz.is_file() {
        return Ok(gz);
    }
    if !download {
        return Err(DataError::FileNotFound(plain));
    }
    download_file(
        &format!("{MNIST_BASE_URL}{gz_name}"),
        &gz,
        expected_md5(&gz_name),
    )?;
    Ok(gz)
}

/// 读取一个无符号字节类型的 IDX 文件，返回各维度的长度与全部数据。
/// 文件头：4字节魔数、每个维度4字节的长度（均为大端序），之后是数据。
fn read_idx(path: &Path, magic: u32) -> Result<(Vec<usize>, Vec<u8>), DataError> {
    let invalid = |reason: String| DataError::InvalidIdx {
        path: path.to_path_buf(),
        reason,
    };
    let file = File::open(path).map_err(|_| DataError::FileNotFound(path.to_path_buf()))?;
    let mut reader: Box<dyn Read> = if path.extension().is_some_and(|ext| ext == "gz") {
        Box::new(GzDecoder::new(BufReader::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    let mut word = [0u8; 4];
    reader
        .read_exact(&mut word)
        .map_err(|e| invalid(format!("无法读取魔数: {e}")))?;
    let found = u32::from_be_bytes(word);
    if found != magic {
        return Err(invalid(format!("魔数为{found:#010x}，期望{magic:#010x}")));
    }

    let ndim = (magic & 0xff) as usize;
    let mut dims = Vec::with_capacity(ndim);
    for _ in 0..ndim {
        reader
            .read_exact(&mut word)
            .map_err(|e| invalid(format!("文件头不完整: {e}")))?;
        dims.push(u32::from_be_bytes(word) as usize);
    }
    let len = dims
        .iter()
        .try_fold(1usize, |acc, &d| acc.checked_mul(d))
        .ok_or_else(|| invalid(format!("文件头中的尺寸{dims:?}溢出")))?;

    // 不按文件头预先分配，实际读到多少就占用多少内存
    let mut data = Vec::new();
    reader
        .take(len as u64)
        .read_to_end(&mut data)
        .map_err(|e| invalid(format!("读取数据失败: {e}")))?;
    if data.len() != len {
        return Err(invalid(format!(
            "数据不足：尺寸{dims:?}需要{len}字节，实际只有{}字节",
            data.len()
        )));
    }
    Ok((dims, data))
}
