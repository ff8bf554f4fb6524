use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write as _;

#[cfg(not(feature = "std"))]
use core::fmt;

use octet_core::codec::BlockCodec;
use octet_core::error::codes;
use octet_core::{BlockError, ByteBlock};

#[cfg(feature = "std")]
use thiserror::Error;

/// 64 符号字母表，索引 0–63 恰好覆盖 6 位码空间。
///
/// 顺序即索引：`.`(0)、`A`–`Z`(1–26)、`a`–`z`(27–52)、`0`–`9`(53–62)、`+`(63)。
/// 该表是线格式的一部分，任何改动都会破坏既有文本的解码。
const ALPHABET: &[u8; 64] = b".ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+";

/// 每符号承载的位数。
const BITS_PER_SYMBOL: usize = 6;

/// 按字母表位置反查符号索引；不在表内返回 `None`。
fn symbol_index(symbol: char) -> Option<u32> {
    match symbol {
        '.' => Some(0),
        'A'..='Z' => Some(1 + (symbol as u32 - 'A' as u32)),
        'a'..='z' => Some(27 + (symbol as u32 - 'a' as u32)),
        '0'..='9' => Some(53 + (symbol as u32 - '0' as u32)),
        '+' => Some(63),
        _ => None,
    }
}

/// radix-64 导入失败的细粒度原因。
///
/// # 教案式说明
/// - **意图 (Why)**：导入是本工作区唯一的显式失败路径，细粒度枚举帮助调用方
///   区分“文本根本不是该格式”与“文本被污染”两类场景；
/// - **契约 (What)**：所有变体满足 `Send + Sync + 'static`；启用 `std` 时派生
///   [`thiserror::Error`]，并经 [`From`] 汇入 [`BlockError`] 以便 `?` 传播；
/// - **风险 (Trade-offs)**：`InvalidPrefix` 克隆前缀文本用于排障，
///   牺牲一次堆分配换取错误自包含。
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Radix64Error {
    /// 文本中不存在 `.` 分隔符，找不到长度前缀。
    #[cfg_attr(feature = "std", error("radix-64 text has no `.` separator"))]
    MissingSeparator,

    /// 长度前缀无法解析为十进制字节数。
    #[cfg_attr(
        feature = "std",
        error("length prefix `{prefix}` is not a decimal byte count")
    )]
    InvalidPrefix {
        /// 原始前缀文本。
        prefix: String,
    },

    /// 符号区出现字母表之外的非空白字符。
    #[cfg_attr(
        feature = "std",
        error("character `{symbol}` at symbol offset {position} is not in the radix-64 alphabet")
    )]
    InvalidSymbol {
        /// 非法字符。
        symbol: char,
        /// 该字符在符号区内的序号（按字符计）。
        position: usize,
    },
}

#[cfg(not(feature = "std"))]
impl fmt::Display for Radix64Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Radix64Error::MissingSeparator => {
                write!(f, "radix-64 text has no `.` separator")
            }
            Radix64Error::InvalidPrefix { prefix } => {
                write!(f, "length prefix `{prefix}` is not a decimal byte count")
            }
            Radix64Error::InvalidSymbol { symbol, position } => write!(
                f,
                "character `{symbol}` at symbol offset {position} is not in the radix-64 alphabet"
            ),
        }
    }
}

impl From<Radix64Error> for BlockError {
    /// 将细粒度导入错误汇入统一错误域。
    ///
    /// # 教案式说明
    /// - **意图 (Why)**：[`BlockCodec`] 契约以 [`BlockError`] 为统一出口，
    ///   `From` 实现让内部逻辑直接用 `?` 传播；
    /// - **执行 (How)**：按变体选取 `codec.radix64.*` 稳定错误码并拼装描述。
    fn from(value: Radix64Error) -> Self {
        match value {
            Radix64Error::MissingSeparator => BlockError::new(
                codes::RADIX64_PREFIX_MISSING,
                "radix-64 text has no `.` separator",
            ),
            Radix64Error::InvalidPrefix { ref prefix } => BlockError::new(
                codes::RADIX64_PREFIX_INVALID,
                format!("length prefix `{prefix}` is not a decimal byte count"),
            ),
            Radix64Error::InvalidSymbol { symbol, position } => BlockError::new(
                codes::RADIX64_SYMBOL_INVALID,
                format!(
                    "character `{symbol}` at symbol offset {position} is not in the radix-64 alphabet"
                ),
            ),
        }
    }
}

/// 长度前缀 radix-64 文本编解码器，实现 `octet-core` 的 [`BlockCodec`] 契约。
///
/// # 设计动机（Why）
/// - 格式自描述：前缀声明解码后的字节数，接收方无需带外元数据即可校验；
/// - 位打包直接复用 [`ByteBlock`] 的位域访问，编码器与解码器共享同一套
///   小端位序定义，杜绝两侧实现漂移。
///
/// # 行为概览（How）
/// - `encode`：写出 `"<len>."`，随后对每个 6 位组查表输出符号，
///   符号数为 `ceil(len × 8 / 6)`；
/// - `decode_into`：解析前缀 → 全量校验符号 → 构造清零新块并逐组写位 →
///   与目标块交换。任何错误都发生在改写目标之前，导入因此是原子的。
///
/// # 契约说明（What）
/// - **往返律**：对任意块 `b`，`decode(encode(b)) == b`；
/// - **输出兼容**：编码产物与既有文本位级兼容（字母表与位序固定）；
/// - **空白容忍**：符号区内的 ASCII 空白被跳过且不推进位游标，
///   其余非法字符一律报错（见 [`Radix64Error::InvalidSymbol`]）。
///
/// # 权衡与风险（Trade-offs）
/// - 校验与写入分两趟扫描符号区，多付一次遍历换取目标块的原子性；
/// - 超出声明长度的多余符号被位写入的末端截断静默吸收，
///   与“前缀为准”的自描述语义保持一致。
#[derive(Debug, Clone, Copy, Default)]
pub struct Radix64Codec;

impl Radix64Codec {
    /// 构建新的 radix-64 编解码器实例；无状态，可任意复制共享。
    pub const fn new() -> Self {
        Self
    }
}

impl BlockCodec for Radix64Codec {
    fn name(&self) -> &'static str {
        "radix64"
    }

    fn encode(&self, block: &ByteBlock) -> String {
        let num_symbols = (block.len() * 8).div_ceil(BITS_PER_SYMBOL);
        let mut out = String::with_capacity(num_symbols + 12);
        // 前缀：十进制字节数 + 分隔符。写入 String 不会失败。
        let _ = write!(out, "{}.", block.len());
        for group in 0..num_symbols {
            let index = block.get_bit_range(group * BITS_PER_SYMBOL, BITS_PER_SYMBOL);
            out.push(ALPHABET[index as usize] as char);
        }
        out
    }

    fn decode_into(&self, text: &str, block: &mut ByteBlock) -> Result<(), BlockError> {
        let (prefix, symbols) = match text.split_once('.') {
            Some(parts) => parts,
            None => return Err(reject(Radix64Error::MissingSeparator)),
        };
        let byte_count: usize = match prefix.parse() {
            Ok(count) => count,
            Err(_) => {
                return Err(reject(Radix64Error::InvalidPrefix {
                    prefix: prefix.into(),
                }));
            }
        };

        // 第一趟：全量校验符号区，保证出错时目标块未被触碰。
        let mut indices = Vec::with_capacity(symbols.len());
        for (position, symbol) in symbols.chars().enumerate() {
            if symbol.is_ascii_whitespace() {
                continue;
            }
            match symbol_index(symbol) {
                Some(index) => indices.push(index),
                None => {
                    return Err(reject(Radix64Error::InvalidSymbol { symbol, position }));
                }
            }
        }

        // 第二趟：在清零的新块上写位，末端截断吸收多余符号。
        let mut fresh = ByteBlock::zeroed(byte_count);
        let mut cursor = 0usize;
        for index in indices {
            fresh.set_bit_range(cursor, BITS_PER_SYMBOL, index);
            cursor += BITS_PER_SYMBOL;
        }
        block.swap_with(&mut fresh);

        #[cfg(feature = "std")]
        tracing::trace!(
            codec = self.name(),
            decoded_bytes = block.len(),
            "radix-64 decode complete"
        );
        Ok(())
    }
}

/// 统一的拒绝出口：记录观测事件后转换为核心错误。
fn reject(error: Radix64Error) -> BlockError {
    #[cfg(feature = "std")]
    tracing::debug!(error = %error, "radix-64 decode rejected");
    error.into()
}
