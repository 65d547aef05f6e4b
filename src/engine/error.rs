// ==========================================
// 水产养殖绩效指标引擎 - 引擎层错误类型
// ==========================================
// 职责: 定义引擎层错误类型,错误信息必须包含显式原因
// 红线: 畸形记录快速失败,不做静默强转 - 静默强转会污染聚合总量
// ==========================================

use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    // ==========================================
    // 数据校验错误
    // ==========================================
    /// 记录缺失/非法数值字段: 指明字段名与记录 ID
    #[error("数据验证失败: field={field}, record_id={record_id}, {message}")]
    ValidationError {
        field: String,
        record_id: String,
        message: String,
    },

    // ==========================================
    // 业务规则错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EngineError {
    /// 构造校验错误
    ///
    /// # 参数
    /// - `field`: 违规字段名
    /// - `record_id`: 违规记录标识
    /// - `message`: 可解释原因
    pub fn validation(
        field: impl Into<String>,
        record_id: impl std::fmt::Display,
        message: impl Into<String>,
    ) -> Self {
        EngineError::ValidationError {
            field: field.into(),
            record_id: record_id.to_string(),
            message: message.into(),
        }
    }
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;
