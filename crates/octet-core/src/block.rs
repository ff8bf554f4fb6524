use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::mem;
use core::ops::{Deref, DerefMut};

use bytes::{Bytes, BytesMut};

/// `ByteBlock` 是独占所有权的可变长连续字节块。
///
/// # 设计背景（Why）
/// - 位级协议字段、寄存器镜像等场景需要一块“可整体调整尺寸、可按位读写”的
///   连续内存，且所有权必须清晰：克隆即深拷贝，移动即转移，绝不共享；
/// - 区域拷贝与区段删除的越界输入在这类调用端十分常见（偏移由上游协议计算得出），
///   因此契约选择“截断到合法范围”而非返回错误，调用端无需层层传播 `Result`。
///
/// # 行为概览（How）
/// - 内部以单个 `Vec<u8>` 承载数据，`len()` 即块尺寸；
/// - [`set_size`](Self::set_size) 增长时保留既有字节并将新增区域清零，
///   收缩时截断，归零时释放存储；
/// - [`copy_from`](Self::copy_from) / [`copy_to`](Self::copy_to) 支持负偏移：
///   负数部分被跳过（写入侧）或以零补齐（读取侧）；
/// - 位域访问见 [`get_bit_range`](Self::get_bit_range) 与
///   [`set_bit_range`](Self::set_bit_range)。
///
/// # 契约说明（What）
/// - **不变量**：可读写区间恰为 `0..len()`；`len() == 0` 时可以不持有分配；
/// - **并发**：无内部锁，跨线程共享同一实例需调用方自行互斥；
/// - **失败语义**：所有区域操作越界一律截断，唯一会报错的路径在编解码扩展中。
///
/// # 取舍（Trade-offs）
/// - 增长一律清零：安全 Rust 无法暴露未初始化内容，“内容不确定”的快速路径
///   退化为确定性清零，换取全部操作免 `unsafe`。
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct ByteBlock {
    data: Vec<u8>,
}

impl ByteBlock {
    /// 创建空块，不产生堆分配。
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// 创建 `len` 个零字节的块。
    pub fn zeroed(len: usize) -> Self {
        Self {
            data: alloc::vec![0; len],
        }
    }

    /// 拷贝给定字节范围构造新块。
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self {
            data: bytes.to_vec(),
        }
    }

    /// 返回块尺寸（字节数）。
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// 块是否为空。
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// 只读字节视图。
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// 可变字节视图。
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// 原地调整块尺寸。
    ///
    /// # 契约定义（What）
    /// - 增长：保留既有字节，新增区域清零，绝不改写既有内容；
    /// - 收缩：截断，丢弃 `new_len` 之后的字节；
    /// - `new_len == 0`：释放存储，块回到未分配状态。
    pub fn set_size(&mut self, new_len: usize) {
        if new_len == 0 {
            self.data = Vec::new();
        } else if new_len <= self.data.len() {
            self.data.truncate(new_len);
        } else {
            self.data.resize(new_len, 0);
        }
    }

    /// 保证块尺寸不小于 `min_len`，已满足时不做任何事。幂等。
    pub fn ensure_size(&mut self, min_len: usize) {
        if self.data.len() < min_len {
            self.set_size(min_len);
        }
    }

    /// 与另一个块常数时间交换存储与尺寸，不拷贝任何字节。
    pub fn swap_with(&mut self, other: &mut Self) {
        mem::swap(&mut self.data, &mut other.data);
    }

    /// 将每个字节设置为 `value`。
    pub fn fill_with(&mut self, value: u8) {
        self.data.fill(value);
    }

    /// 在尾部追加整个切片；空切片为空操作。
    pub fn append(&mut self, src: &[u8]) {
        self.data.extend_from_slice(src);
    }

    /// 从 `offset` 起以 `src` 覆写块内字节，越界部分截断，绝不改变块尺寸。
    ///
    /// # 行为细则（What）
    /// - `offset < 0`：源切片开头 `-offset` 个字节被跳过，剩余部分从 0 写起；
    /// - 落在 `len()` 之外的目标字节不写入；
    /// - 完全越界时整体为空操作。
    pub fn copy_from(&mut self, src: &[u8], offset: isize) {
        let (src, dst_start) = if offset < 0 {
            let skip = offset.unsigned_abs();
            if skip >= src.len() {
                return;
            }
            (&src[skip..], 0)
        } else {
            (src, offset as usize)
        };
        if dst_start >= self.data.len() {
            return;
        }
        let count = src.len().min(self.data.len() - dst_start);
        self.data[dst_start..dst_start + count].copy_from_slice(&src[..count]);
    }

    /// 从 `offset` 起读取块内字节填充 `dst`，该操作是全函数：
    /// 总是写满 `dst`，映射到块外（负偏移或越过末尾）的位置以零补齐。
    pub fn copy_to(&self, dst: &mut [u8], offset: isize) {
        let mut written = 0usize;
        let src_start = if offset < 0 {
            let lead = offset.unsigned_abs().min(dst.len());
            dst[..lead].fill(0);
            written = lead;
            0
        } else {
            offset as usize
        };
        let avail = self
            .data
            .len()
            .saturating_sub(src_start)
            .min(dst.len() - written);
        dst[written..written + avail]
            .copy_from_slice(&self.data[src_start..src_start + avail]);
        dst[written + avail..].fill(0);
    }

    /// 删除 `start..start + count` 的字节区段，尾部左移补位，块相应收缩。
    ///
    /// # 边界（What）
    /// - 区段到达或越过末尾：等价于在 `start` 处截断；
    /// - `start` 不小于块尺寸或 `count == 0`：空操作（截断语义，绝不增长）。
    pub fn remove_section(&mut self, start: usize, count: usize) {
        if start >= self.data.len() || count == 0 {
            return;
        }
        if start.saturating_add(count) >= self.data.len() {
            self.data.truncate(start);
        } else {
            self.data.drain(start..start + count);
        }
    }

    /// 与外部字节范围比较相等性，无需构造新块。
    pub fn matches(&self, other: &[u8]) -> bool {
        self.data.as_slice() == other
    }

    /// 以 UTF-8 宽松解码返回文本视图，非法序列替换为 U+FFFD。
    pub fn to_utf8_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.data)
    }

    /// 放弃独占所有权，冻结为只读共享视图。
    ///
    /// # 说明（Why）
    /// - 与零拷贝流水线对接时，下游常要求 `bytes::Bytes`；
    ///   冻结是单向门：此后不再有独占可写语义。
    pub fn freeze(self) -> Bytes {
        Bytes::from(self.data)
    }
}

impl fmt::Debug for ByteBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 只预览前 16 字节，避免大块内存刷屏日志。
        const PREVIEW: usize = 16;
        write!(f, "ByteBlock {{ len: {}, data: 0x", self.data.len())?;
        for byte in self.data.iter().take(PREVIEW) {
            write!(f, "{byte:02x}")?;
        }
        if self.data.len() > PREVIEW {
            write!(f, "..")?;
        }
        write!(f, " }}")
    }
}

impl Deref for ByteBlock {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl DerefMut for ByteBlock {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

impl AsRef<[u8]> for ByteBlock {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl From<Vec<u8>> for ByteBlock {
    fn from(data: Vec<u8>) -> Self {
        Self { data }
    }
}

impl From<&[u8]> for ByteBlock {
    fn from(bytes: &[u8]) -> Self {
        Self::from_slice(bytes)
    }
}

impl From<BytesMut> for ByteBlock {
    fn from(buffer: BytesMut) -> Self {
        Self {
            data: Vec::from(buffer),
        }
    }
}

impl From<ByteBlock> for Vec<u8> {
    fn from(block: ByteBlock) -> Self {
        block.data
    }
}

impl From<ByteBlock> for Bytes {
    fn from(block: ByteBlock) -> Self {
        block.freeze()
    }
}
