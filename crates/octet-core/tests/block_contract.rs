//! `block_contract` 集成测试：聚焦 [`ByteBlock`] 对外契约的组合行为。
//!
//! # 测试总览（Why）
//! - 单元测试覆盖单个操作的边界，这里验证操作序列之间的约定：
//!   增长/收缩的保留区不变性、交换与克隆的所有权语义、区域拷贝的全函数性；
//! - 断言场景均围绕容器的公开契约展开，不依赖任何文本格式。

use octet_core::ByteBlock;

/// 增长后收缩回原尺寸，保留区字节逐一不变。
#[test]
fn grow_then_shrink_preserves_retained_region() {
    let original = [0x11u8, 0x22, 0x33, 0x44, 0x55];
    let mut block = ByteBlock::from_slice(&original);
    block.set_size(64);
    assert_eq!(&block.as_slice()[..5], &original);
    assert!(block.as_slice()[5..].iter().all(|&b| b == 0), "新增区域必须清零");
    block.set_size(5);
    assert_eq!(block.as_slice(), &original);
}

/// 从零尺寸出发的清零构造场景。
#[test]
fn zero_sized_block_grows_into_zeroed_bytes() {
    let mut block = ByteBlock::new();
    assert!(block.is_empty());
    block.set_size(5);
    assert_eq!(block.as_slice(), &[0, 0, 0, 0, 0]);
}

/// `copy_to` 在源块收缩后仍然写满目标（全函数性质不受尺寸变化影响）。
#[test]
fn copy_to_stays_total_across_resizes() {
    let mut block = ByteBlock::from_slice(&[1, 2, 3, 4]);
    block.remove_section(0, 3);
    let mut dst = [0xaau8; 4];
    block.copy_to(&mut dst, 0);
    assert_eq!(dst, [4, 0, 0, 0]);
}

/// 交换后再写入，确认两个块互不别名。
#[test]
fn swap_with_leaves_independent_blocks() {
    let mut a = ByteBlock::from_slice(&[1, 1]);
    let mut b = ByteBlock::from_slice(&[2, 2, 2]);
    a.swap_with(&mut b);
    a.fill_with(9);
    assert_eq!(a.as_slice(), &[9, 9, 9]);
    assert_eq!(b.as_slice(), &[1, 1], "交换后的写入不得影响对方");
}

/// 追加与区段删除的组合：先拼接再剔除中段。
#[test]
fn append_then_remove_section_splices() {
    let mut block = ByteBlock::from_slice(&[0x10, 0x20]);
    block.append(&[0x30, 0x40]);
    block.remove_section(1, 2);
    assert_eq!(block.as_slice(), &[0x10, 0x40]);
}

/// `matches` 与 `PartialEq` 对同一内容给出一致判断。
#[test]
fn matches_agrees_with_equality() {
    let block = ByteBlock::from_slice(b"abc");
    let other = ByteBlock::from_slice(b"abc");
    assert_eq!(block, other);
    assert!(block.matches(other.as_slice()));
    assert!(!block.matches(b"ab"));
}

/// 负偏移写入与负偏移读取互为镜像。
#[test]
fn negative_offset_write_and_read_mirror_each_other() {
    let mut block = ByteBlock::zeroed(3);
    block.copy_from(&[7, 8, 9], -1);
    assert_eq!(block.as_slice(), &[8, 9, 0]);

    let mut out = [0xffu8; 5];
    block.copy_to(&mut out, -2);
    assert_eq!(out, [0, 0, 8, 9, 0]);
}

/// UTF-8 视图与冻结视图共享同一份字节语义。
#[test]
fn utf8_view_and_freeze_expose_same_bytes() {
    let block = ByteBlock::from_slice(b"text view");
    assert_eq!(block.to_utf8_lossy(), "text view");
    assert_eq!(block.freeze().as_ref(), b"text view");
}
