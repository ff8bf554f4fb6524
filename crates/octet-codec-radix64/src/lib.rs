#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

//! `octet-codec-radix64` 提供长度前缀 radix-64 文本格式的编解码扩展。
//!
//! # 模块定位（Why）
//! - 该格式自描述（前缀内嵌解码后字节数）、字母表经过挑选可安全嵌入
//!   URL 片段与配置文件，是 [`ByteBlock`](octet_core::ByteBlock) 的紧凑文本载体；
//! - 与标准 Base64 **不兼容**：字母表、前缀与位序均不同，互相替换会得到乱码。
//!
//! # 线格式（What）
//! - 文本形如 `"<十进制字节数>.<符号序列>"`；
//! - 64 个符号 `.A–Za–z0–9+` 依次对应索引 0–63，每个符号承载 6 位；
//! - 位打包与 `ByteBlock` 的位域访问一致：小端位序，自位 0 连续递增；
//! - 符号数为 `ceil(字节数 × 8 / 6)`。
//!
//! # 失败语义（How）
//! - 缺失 `.` 分隔符或前缀无法解析为十进制 ⇒ 返回错误，目标块保持原状；
//! - 符号区允许 ASCII 空白（支持换行折行的文本），其余非法字符 ⇒ 返回错误，
//!   目标块保持原状——解码在改写目标前完成全部校验；
//! - 超出声明长度的多余符号落在块末尾之外，由位写入的截断语义静默吸收。

extern crate alloc;

mod radix64;

pub use crate::radix64::{Radix64Codec, Radix64Error};
