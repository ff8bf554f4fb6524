use alloc::string::String;

use octet_core::codec::BlockCodec;
use octet_core::{BlockError, ByteBlock};

/// 十六进制文本编解码器，实现 `octet-core` 的 [`BlockCodec`] 契约。
///
/// # 设计动机（Why）
/// - 导入侧面向人工粘贴的文本：协议抓包、日志片段常夹带分隔符或被截断，
///   宽容解析（到首个非法字符为止）比报错更贴合调用习惯；
/// - 导出侧复用 `hex` crate 的成熟实现，统一输出小写数字对。
///
/// # 行为概览（How）
/// - `decode_into`：先按 `文本长度 / 2` 预留尺寸，逐字符配对解析，
///   遇到首个非十六进制字符（含文本结束）即停，块截断为已解出的完整字节数；
/// - `encode`：每字节两位小写十六进制，无分隔符。
///
/// # 契约说明（What）
/// - **输入**：任意 `&str`；残缺的尾部单数字被静默丢弃；
/// - **后置条件**：`decode_into` 恒返回 `Ok`，块尺寸等于解出的字节数；
/// - **往返律**：对任意块 `b`，`decode(encode(b)) == b`。
///
/// # 权衡与风险（Trade-offs）
/// - 宽容语义意味着 `"xyz"` 会安静地解出空块；需要强校验的调用方
///   应改用显式报错的格式（参见 radix-64 扩展）。
#[derive(Debug, Clone, Copy, Default)]
pub struct HexCodec;

impl HexCodec {
    /// 构建新的十六进制编解码器实例；无状态，可任意复制共享。
    pub const fn new() -> Self {
        Self
    }
}

impl BlockCodec for HexCodec {
    fn name(&self) -> &'static str {
        "hex"
    }

    fn encode(&self, block: &ByteBlock) -> String {
        hex::encode(block.as_slice())
    }

    fn decode_into(&self, text: &str, block: &mut ByteBlock) -> Result<(), BlockError> {
        // 与导入契约一致：先按上限预留，结束时截断到实际字节数。
        block.ensure_size(text.len() / 2);

        let mut decoded = 0usize;
        let mut pending: Option<u8> = None;
        for raw in text.bytes() {
            let Some(digit) = (raw as char).to_digit(16) else {
                break;
            };
            match pending.take() {
                None => pending = Some(digit as u8),
                Some(high) => {
                    block.as_mut_slice()[decoded] = (high << 4) | digit as u8;
                    decoded += 1;
                }
            }
        }
        block.set_size(decoded);

        #[cfg(feature = "std")]
        tracing::trace!(codec = self.name(), decoded_bytes = decoded, "hex decode complete");
        Ok(())
    }
}
