#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

//! `octet-codec-hex` 提供 [`ByteBlock`](octet_core::ByteBlock) 的十六进制文本编解码扩展。
//!
//! # 模块定位（Why）
//! - 十六进制是人工录入与日志粘贴最常见的字节表示，导入侧必须容忍
//!   粗糙输入：遇到首个非十六进制字符即停止，残缺的单个尾数静默丢弃；
//! - 作为 `octet-core` 编解码契约的最小实现，同时示范扩展 crate 的组织方式。
//!
//! # 使用概览（How）
//! - 实例化 [`HexCodec`] 后可直接作为 [`BlockCodec`](octet_core::codec::BlockCodec)
//!   使用：`encode` 输出小写数字对，`decode_into` 宽容解析；
//! - 导入语义是**文档化的截断**而非错误：调用方依赖“解析到哪算哪”的行为，
//!   需要严格校验时应在调用前自行检查文本。
//!
//! # 合约说明（What）
//! - 大小写不敏感，任意两个连续合法十六进制数字构成一个字节；
//! - 导入前按 `文本长度 / 2` 预留容量，结束时块被截断为实际解出的完整字节数；
//! - 导入永不失败，`decode_into` 恒返回 `Ok`。

extern crate alloc;

mod hex_codec;

pub use crate::hex_codec::HexCodec;
