//! `error` 模块定义跨 crate 共享的稳定错误域。
//!
//! # 角色定位（Why）
//! - 编解码扩展各自持有细粒度错误枚举，但对外观测（日志、指标、告警）需要
//!   统一的错误码形态，避免调用方解析字符串推断语义；
//! - 核心容器本身的区域操作一律截断、不报错（见 `ByteBlock` 文档），
//!   因此错误域主要服务于文本导入路径。
//!
//! # 设计要求（What）
//! - 错误码为 `'static` 字符串，遵循 `<域>.<语义>` 命名并集中登记在 [`codes`]；
//! - [`BlockError`] 满足 `Send + Sync + 'static`，可安全跨线程传播；
//! - 通过 `cause` 保留底层原因链，`core::error::Error::source` 可逐层下钻。

use alloc::{borrow::Cow, boxed::Box};
use core::error::Error;
use core::fmt;

/// 稳定错误码常量表。
///
/// # 约定（What）
/// - 命名遵循 `<域>.<语义>`，一经发布不得变更拼写；
/// - 新增错误码时应同步补充文档注释，说明触发条件与处置建议。
pub mod codes {
    /// radix-64 导入文本缺少 `.` 分隔符，找不到长度前缀。
    pub const RADIX64_PREFIX_MISSING: &str = "codec.radix64.prefix_missing";
    /// radix-64 长度前缀存在但无法解析为十进制字节数。
    pub const RADIX64_PREFIX_INVALID: &str = "codec.radix64.prefix_invalid";
    /// radix-64 符号区出现字母表之外的非空白字符。
    pub const RADIX64_SYMBOL_INVALID: &str = "codec.radix64.symbol_invalid";
}

/// `BlockError` 是本工作区所有可观察错误的最终形态。
///
/// # 设计背景（Why）
/// - 编解码扩展在各自 crate 内使用细粒度枚举表达失败原因，
///   汇入核心错误域后才进入日志与指标链路；
/// - 需要兼容 `no_std + alloc` 场景，因此建立在 `core::error::Error` 之上，
///   不依赖 `std` 专属设施。
///
/// # 契约说明（What）
/// - `code`：稳定错误码，建议取自 [`codes`]；
/// - `message`：面向排障人员的描述，避免包含敏感信息；
/// - `cause`：可选底层原因，经由 [`Error::source`] 暴露。
///
/// # 取舍（Trade-offs）
/// - `message` 使用 `Cow<'static, str>`，静态文案零分配、动态描述按需堆分配。
#[derive(Debug)]
pub struct BlockError {
    code: &'static str,
    message: Cow<'static, str>,
    cause: Option<Box<dyn Error + Send + Sync>>,
}

impl BlockError {
    /// 构造核心错误。
    ///
    /// # 契约定义（What）
    /// - **输入**：`code` 为已登记的稳定错误码；`message` 为人类可读描述；
    /// - **后置条件**：返回的错误不含底层原因，可通过 [`with_cause`](Self::with_cause) 追加。
    ///
    /// # 示例（Examples）
    /// ```rust
    /// use octet_core::BlockError;
    /// use octet_core::error::codes;
    ///
    /// let err = BlockError::new(codes::RADIX64_PREFIX_MISSING, "no `.` separator");
    /// assert_eq!(err.code(), codes::RADIX64_PREFIX_MISSING);
    /// assert!(err.cause().is_none());
    /// ```
    pub fn new(code: &'static str, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code,
            message: message.into(),
            cause: None,
        }
    }

    /// 附带底层原因并返回新的错误实例。
    pub fn with_cause(mut self, cause: impl Error + Send + Sync + 'static) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// 获取稳定错误码。
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// 获取人类可读描述。
    pub fn message(&self) -> &str {
        &self.message
    }

    /// 获取底层原因。
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync)> {
        self.cause.as_deref()
    }
}

impl fmt::Display for BlockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl Error for BlockError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_renders_code_and_message() {
        let err = BlockError::new(codes::RADIX64_PREFIX_INVALID, "prefix `x` is not decimal");
        assert_eq!(
            err.to_string(),
            "codec.radix64.prefix_invalid: prefix `x` is not decimal"
        );
    }

    #[test]
    fn cause_chain_is_reachable_via_source() {
        let inner = BlockError::new(codes::RADIX64_SYMBOL_INVALID, "symbol `!`");
        let outer =
            BlockError::new(codes::RADIX64_PREFIX_INVALID, "import failed").with_cause(inner);
        let source = outer.cause().expect("应保留底层原因");
        assert!(source.to_string().contains("symbol_invalid"));
    }
}
