#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

//! `octet-core` 提供独占所有权的可变长字节块 [`ByteBlock`] 及其核心契约。
//!
//! # 模块定位（Why）
//! - 为需要“单块连续内存 + 位级字段访问”的调用方提供一个所有权语义清晰的容器：
//!   克隆即深拷贝、移动即转移，不引入引用计数或共享视图；
//! - 将文本序列化抽象为 [`codec::BlockCodec`] 契约，具体格式（十六进制、radix-64）
//!   由扩展 crate 落地，核心不绑定任何一种线格式；
//! - 统一错误域 [`BlockError`]，以稳定错误码支撑日志与指标聚合。
//!
//! # 设计概要（How）
//! - `block` 模块实现容器本体：构造、调整尺寸、区域拷贝（越界一律截断而非报错）、
//!   区段删除与相等性比较；
//! - `bits` 模块补充位域读写：跨字节的小端位序编号，读越界补零、写越界静默截断；
//! - `codec` 模块定义无状态、对象安全的文本编解码契约；
//! - `error` 模块给出带稳定错误码的 [`BlockError`] 与 [`error::codes`] 常量表。
//!
//! # 并发与资源（What）
//! - 容器内部不含任何锁或内部可变性，所有操作同步完成；
//! - 跨线程共享同一实例需由调用方自行互斥；类型本身满足 `Send + Sync`；
//! - 每个实例至多持有一块堆分配，尺寸归零时释放存储。
//!
//! # 取舍说明（Trade-offs）
//! - 区域拷贝的“越界截断”语义牺牲了显式报错，换取调用端无需前置边界检查；
//!   需要严格校验的场景应在调用前比较 `len()`。

extern crate alloc;

mod bits;
mod block;
pub mod codec;
pub mod error;

pub use block::ByteBlock;
pub use error::BlockError;

/// crate 级 `Result` 别名，默认错误类型为 [`BlockError`]。
pub type Result<T, E = BlockError> = core::result::Result<T, E>;
