use super::Tensor;
use crate::errors::TensorError;
use ndarray::{Axis, IxDyn, Slice};

impl Tensor {
    pub fn reshape(&self, shape: &[usize]) -> Self {
        let total_elements: usize = self.data.len();
        let new_total_elements: usize = shape.iter().product();
        assert!(
            total_elements == new_total_elements,
            "{}",
            TensorError::IncompatibleShape
        );
        Self::new(&self.to_vec(), shape)
    }

    /// 同`reshape`，但消耗自身；内存连续时不复制数据
    pub fn into_reshape(self, shape: &[usize]) -> Self {
        if !self.data.is_standard_layout() {
            return self.reshape(shape);
        }
        match self.data.into_shape(IxDyn(shape)) {
            Ok(data) => Self::from_array(data),
            Err(_) => panic!("{}", TensorError::IncompatibleShape),
        }
    }

    /// 将多个张量沿着首个维度堆叠起来，返回一个新的张量。
    /// * `tensors` - 一个包含多个张量的数组的引用。
    /// * `new_dim` - 布尔值，指示是否增加一个新的维度来堆叠。
    ///
    /// 当 `new_dim` 为 `true` 时，确保所有张量具有相同的形状，结果形状为`[tensors.len(), ...]`；
    /// 当 `new_dim` 为 `false`，每个张量的第一个维度可以不同，但其余维度应相同，结果在首维上拼接。
    /// 否则panic。
    pub fn stack(tensors: &[&Self], new_dim: bool) -> Self {
        assert!(!tensors.is_empty(), "{}", TensorError::EmptyList);

        let first_shape = tensors[0].shape();
        let skip = if new_dim { 0 } else { 1 };
        let compatible_shapes = |t: &Self| {
            let t_shape = t.shape();
            t_shape.len() == first_shape.len()
                && t_shape
                    .iter()
                    .skip(skip)
                    .zip(first_shape.iter().skip(skip))
                    .all(|(a, b)| a == b)
        };
        assert!(
            tensors.iter().all(|t| compatible_shapes(t)),
            "{}",
            TensorError::InconsitentShape
        );

        let data = tensors.iter().flat_map(|t| t.to_vec()).collect::<Vec<_>>();

        let shape = if new_dim {
            let mut shape = first_shape.to_vec();
            shape.insert(0, tensors.len());
            shape
        } else {
            let mut shape = first_shape.to_vec();
            shape[0] = tensors.iter().map(|t| t.shape()[0]).sum();
            shape
        };

        Self::new(&data, &shape)
    }

    /// 交换张量的维度，并将其返回（不影响原张量）
    pub fn permute(&self, axes: &[usize]) -> Self {
        let mut sorted = axes.to_vec();
        sorted.sort_unstable();
        assert!(
            sorted == (0..self.dimension()).collect::<Vec<_>>(),
            "{}",
            TensorError::IncompatibleShape
        );
        Self::from_array(
            self.data
                .clone()
                .permuted_axes(axes)
                .as_standard_layout()
                .to_owned(),
        )
    }
}

/*↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓批（batch）操作↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓*/
impl Tensor {
    /// 按索引（可重复）从首维中挑选样本，返回形状为`[indices.len(), ...]`的新张量
    pub fn select(&self, indices: &[usize]) -> Result<Self, TensorError> {
        let len = self.batch_len();
        if let Some(&index) = indices.iter().find(|&&i| i >= len) {
            return Err(TensorError::BatchIndexOutOfBounds { index, len });
        }
        Ok(Self::from_array(self.data.select(Axis(0), indices)))
    }

    /// 取首维中的前`n`个样本；若不足`n`个，则全部返回。标量原样返回
    pub fn take(&self, n: usize) -> Self {
        if self.dimension() == 0 {
            return self.clone();
        }
        let end = n.min(self.batch_len());
        Self::from_array(
            self.data
                .slice_axis(Axis(0), Slice::from(0..end))
                .to_owned(),
        )
    }

    /// 取出首维上第`index`个样本（去掉批维度）
    pub fn item(&self, index: usize) -> Result<Self, TensorError> {
        let len = self.batch_len();
        if self.dimension() == 0 || index >= len {
            return Err(TensorError::BatchIndexOutOfBounds { index, len });
        }
        Ok(Self::from_array(
            self.data.index_axis(Axis(0), index).to_owned(),
        ))
    }

    /// 沿首维拼接多个张量，等价于`Tensor::stack(tensors, false)`
    pub fn concat(tensors: &[&Self]) -> Self {
        Self::stack(tensors, false)
    }
}
/*↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑批（batch）操作↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑*/
