//! `codec` 模块定义 [`ByteBlock`] 的文本编解码契约。
//!
//! # 模块定位（Why）
//! - 核心 crate 只声明契约、不落地任何具体线格式，
//!   十六进制与 radix-64 等实现由扩展 crate 提供并各自管理依赖；
//! - 统一的 trait 让调用方可以以对象安全的方式在运行期选择文本格式。
//!
//! # 契约说明（What）
//! - 实现必须无状态且满足 `Send + Sync`，可在线程间自由共享；
//! - [`BlockCodec::decode_into`] 要求原子性：任何错误返回时目标块保持原状；
//! - 编码侧不设失败路径——块内容对文本格式而言总是合法输入。

use alloc::string::String;

use crate::block::ByteBlock;
use crate::error::BlockError;

/// 文本编解码契约。
///
/// # 实现约定（What）
/// - `name` 返回稳定标识（如 `"hex"`、`"radix64"`），用于日志与注册表场景；
/// - `encode` 产出该格式的完整文本表示；
/// - `decode_into` 解析文本并覆写目标块，失败时目标块必须保持原状；
/// - `decode` 为便捷封装，默认基于 `decode_into` 构造新块。
pub trait BlockCodec: Send + Sync {
    /// 返回格式的稳定标识。
    fn name(&self) -> &'static str;

    /// 将块编码为文本。
    fn encode(&self, block: &ByteBlock) -> String;

    /// 解析文本并覆写 `block`；出错时 `block` 保持原状。
    fn decode_into(&self, text: &str, block: &mut ByteBlock) -> Result<(), BlockError>;

    /// 解析文本为新块。
    fn decode(&self, text: &str) -> Result<ByteBlock, BlockError> {
        let mut block = ByteBlock::new();
        self.decode_into(text, &mut block)?;
        Ok(block)
    }
}
