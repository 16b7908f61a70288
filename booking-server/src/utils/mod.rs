//! 工具模块 - 通用工具函数和类型

pub mod error;
pub mod logger;
pub mod result;
pub mod validation;

pub use error::{AppError, AppResponse};
pub use result::AppResult;
