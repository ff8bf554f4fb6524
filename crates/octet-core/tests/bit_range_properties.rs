//! 位域访问的性质验证。
//!
//! # 测试总览（Why）
//! - 位域读写是文本编解码正确性的根基，逐点断言无法覆盖
//!   “任意起点 × 任意宽度 × 任意值”的组合空间；
//! - 使用 Proptest 随机化三项参数，验证两条核心性质：
//!   1. 写后读回恰为按宽度掩码后的值（位往返律）；
//!   2. 写入只影响目标区间，区间外的位保持原样。
//!
//! # 合同与边界（What）
//! - 生成的区间保证完全落在块内，性质 1 才有精确断言；
//! - 越界行为（读补零、写截断）由确定性用例覆盖。

use octet_core::ByteBlock;
use proptest::prelude::*;

fn mask(num_bits: usize) -> u32 {
    if num_bits >= 32 {
        u32::MAX
    } else {
        (1u32 << num_bits) - 1
    }
}

proptest! {
    /// 性质 1：块内区间的写后读回等于掩码后的写入值。
    #[test]
    fn set_then_get_roundtrips(
        len in 5usize..64,
        bit_start in 0usize..256,
        num_bits in 1usize..=32,
        value in any::<u32>(),
    ) {
        prop_assume!(bit_start + num_bits <= len * 8);
        let mut block = ByteBlock::zeroed(len);
        block.set_bit_range(bit_start, num_bits, value);
        prop_assert_eq!(block.get_bit_range(bit_start, num_bits), value & mask(num_bits));
    }

    /// 性质 2：写入不得波及目标区间之外的位。
    #[test]
    fn set_does_not_disturb_neighbours(
        len in 5usize..32,
        bit_start in 0usize..128,
        num_bits in 1usize..=32,
        value in any::<u32>(),
        seed in any::<u64>(),
    ) {
        prop_assume!(bit_start + num_bits <= len * 8);
        // 以确定性伪随机内容铺底，使“区间外不变”有非平凡的观察对象。
        let mut backing = vec![0u8; len];
        let mut state = seed;
        for byte in backing.iter_mut() {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            *byte = (state >> 56) as u8;
        }
        let before = ByteBlock::from_slice(&backing);
        let mut block = before.clone();
        block.set_bit_range(bit_start, num_bits, value);
        for bit in 0..len * 8 {
            if bit >= bit_start && bit < bit_start + num_bits {
                continue;
            }
            prop_assert_eq!(
                block.get_bit_range(bit, 1),
                before.get_bit_range(bit, 1),
                "位 {} 在区间外却发生了变化", bit
            );
        }
    }

    /// 全函数性质：任意参数下读取都不 panic，越界位读作 0。
    #[test]
    fn get_is_total(
        len in 0usize..16,
        bit_start in 0usize..512,
        num_bits in 0usize..=40,
    ) {
        let block = ByteBlock::zeroed(len);
        prop_assert_eq!(block.get_bit_range(bit_start, num_bits), 0);
    }
}

/// 越界写入的确定性边界：在块末尾静默截断且不扩容。
#[test]
fn set_truncates_at_end_without_growth() {
    let mut block = ByteBlock::zeroed(2);
    block.set_bit_range(12, 32, u32::MAX);
    assert_eq!(block.len(), 2);
    assert_eq!(block.as_slice(), &[0x00, 0xf0]);
}
