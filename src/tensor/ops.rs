//! 张量与纯数的逐元素加法、乘法

use std::ops::{Add, Mul};

use super::Tensor;

macro_rules! impl_scalar_op {
    ($trait:ident, $method:ident) => {
        impl $trait<f32> for &Tensor {
            type Output = Tensor;

            fn $method(self, scalar: f32) -> Tensor {
                Tensor::from_array(self.data.mapv(|x| x.$method(scalar)))
            }
        }

        impl $trait<f32> for Tensor {
            type Output = Tensor;

            fn $method(mut self, scalar: f32) -> Tensor {
                self.data.mapv_inplace(|x| x.$method(scalar));
                self
            }
        }
    };
}

impl_scalar_op!(Add, add);
impl_scalar_op!(Mul, mul);
