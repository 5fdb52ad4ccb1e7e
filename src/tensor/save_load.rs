use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use ndarray::ArrayD;
use ndarray_npy::{read_npy, write_npy};

use super::Tensor;
use crate::errors::VisualError;

// 保存和加载张量
impl Tensor {
    /// 将单个Tensor以bincode格式写入本地文件
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), VisualError> {
        let writer = BufWriter::new(File::create(path)?);
        bincode::serialize_into(writer, &self.data)
            .map_err(|e| VisualError::Persist(e.to_string()))
    }

    /// 从本地文件加载单个（由`save`写入的）Tensor
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, VisualError> {
        let reader = BufReader::new(File::open(path)?);
        let data = bincode::deserialize_from(reader)
            .map_err(|e| VisualError::Persist(e.to_string()))?;
        Ok(Self { data })
    }

    /// 加载NumPy的`.npy`文件（元素类型须为`float32`），便于渲染其它框架导出的生成结果
    pub fn load_npy<P: AsRef<Path>>(path: P) -> Result<Self, VisualError> {
        let data: ArrayD<f32> =
            read_npy(path).map_err(|e| VisualError::Persist(e.to_string()))?;
        Ok(Self { data })
    }

    /// 保存为NumPy的`.npy`文件
    pub fn save_npy<P: AsRef<Path>>(&self, path: P) -> Result<(), VisualError> {
        write_npy(path, &self.data).map_err(|e| VisualError::Persist(e.to_string()))
    }
}
