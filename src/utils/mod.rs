//! # 常用接口模块
//!
//! 本模块提供图像与张量之间的转换接口，以及单元测试用的断言宏


pub mod traits {
    pub mod dynamic_image;
    pub mod image;
}
