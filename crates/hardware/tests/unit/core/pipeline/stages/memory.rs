//! Memory Stage Unit Tests.
//!
//! Verifies that `MemoryStage` correctly performs:
//!   1. Load operations: all widths, with both unsigned-load fill policies
//!   2. Store operations: all widths, with both narrow-store policies
//!   3. Non-memory instructions: forward the ALU value, leave the store alone
//!   4. Unrecognized bundles: every latch and the address bus hold
//!   5. Timing: outputs change only at the clock edge; stores land one edge later
//!   6. Address reduction, wrapping, and field masking
//!   7. Synchronous reset

use crate::common::builder::instruction::InstructionBuilder;
use crate::common::builder::pipeline_state::ExMemBuilder;
use crate::common::harness::TestContext;
use pretty_assertions::assert_eq;
use rstest::rstest;
use rvmem_core::config::{Config, NarrowStorePolicy, UnsignedLoadExtension};
use rvmem_core::core::pipeline::latches::{ExMemEntry, MemWbEntry};
use rvmem_core::core::pipeline::signals::MemOp;
use rvmem_core::core::pipeline::traits::PipelineStage;
use rvmem_core::isa::category::{CAT_BRANCH, CAT_IMM_MEM, CAT_REG_REG, CAT_UPPER};
use rvmem_core::isa::{ext1, ext2, ext3};

// ══════════════════════════════════════════════════════════
// Helpers
// ══════════════════════════════════════════════════════════

/// Address whose bit 31 is set and whose low bits select index 1.
const HIGH_ADDR_BASE: u32 = 0x8000_0000;

fn inst() -> InstructionBuilder {
    InstructionBuilder::new()
}

fn ctx_with(unsigned: UnsignedLoadExtension, narrow: NarrowStorePolicy) -> TestContext {
    let mut config = Config::default();
    config.stage.unsigned_load_extension = unsigned;
    config.stage.narrow_store = narrow;
    TestContext::with_config(&config)
}

/// Puts known values in every output latch so a hold is observable.
fn prime_outputs(tc: &mut TestContext) -> MemWbEntry {
    tc.stage
        .store_mut()
        .preload(0, 0x1111_1111)
        .expect("index 0 exists");
    tc.run(&[inst().lw(4, 0, 0).build(), inst().addi(9, 0x2222_2222).build()]);
    let primed = tc.outputs();
    assert_eq!(
        primed,
        MemWbEntry {
            forwarded_dest_register: 4,
            forwarded_result: 0x2222_2222,
            loaded_data: 0x1111_1111,
        }
    );
    primed
}

// ══════════════════════════════════════════════════════════
// 1. Load operations
// ══════════════════════════════════════════════════════════

#[test]
fn load_word_concrete_scenario() {
    let mut tc = TestContext::new().preload(6, 0x0000_0006);
    tc.tick(&inst().lw(13, 5, 1).build());

    assert_eq!(tc.stage.address(), 6);
    assert_eq!(tc.stage.store_index(), Some(6));
    assert_eq!(tc.outputs().loaded_data, 0x0000_0006);
    assert_eq!(tc.outputs().forwarded_dest_register, 13);
}

#[test]
fn load_word_returns_full_word() {
    let mut tc = TestContext::new().preload(3, 0xDEAD_BEEF);
    tc.tick(&inst().lw(1, 3, 0).build());
    assert_eq!(tc.outputs().loaded_data, 0xDEAD_BEEF);
}

#[rstest]
#[case::byte(ext2::LB, 0x0000_00EF)]
#[case::half(ext2::LH, 0x0000_BEEF)]
#[case::word(ext2::LW, 0xDEAD_BEEF)]
fn signed_loads_keep_low_bits_zero_extended(#[case] code: u16, #[case] expected: u32) {
    let mut tc = TestContext::new().preload(1, 0xDEAD_BEEF);
    tc.tick(&inst().load(code, 2, 1, 0).build());
    assert_eq!(tc.outputs().loaded_data, expected);
}

#[test]
fn load_byte_does_not_sign_extend_data() {
    let mut tc = TestContext::new().preload(1, 0x0000_0080);
    tc.tick(&inst().lb(2, 1, 0).build());
    assert_eq!(tc.outputs().loaded_data, 0x80, "LB leaves bit 7 unextended");
}

#[rstest]
#[case::lbu_low_address(ext2::LBU, 1, 0x0000_0080)]
#[case::lhu_low_address(ext2::LHU, 1, 0x0000_8080)]
#[case::lbu_high_address(ext2::LBU, HIGH_ADDR_BASE + 1, 0xFFFF_FF80)]
#[case::lhu_high_address(ext2::LHU, HIGH_ADDR_BASE + 1, 0xFFFF_8080)]
fn unsigned_loads_fill_from_address_bit(
    #[case] code: u16,
    #[case] base: u32,
    #[case] expected: u32,
) {
    let mut tc = TestContext::new().preload(1, 0x1234_8080);
    tc.tick(&inst().load(code, 2, base, 0).build());
    assert_eq!(tc.stage.store_index(), Some(1));
    assert_eq!(tc.outputs().loaded_data, expected);
}

#[test]
fn unsigned_load_fill_ignores_data_sign_bit() {
    let mut tc = TestContext::new().preload(1, 0x0000_007F);
    tc.tick(&inst().lbu(2, HIGH_ADDR_BASE + 1, 0).build());
    assert_eq!(tc.outputs().loaded_data, 0xFFFF_FF7F);
}

#[rstest]
#[case(ext2::LBU, 0x0000_0080)]
#[case(ext2::LHU, 0x0000_8080)]
fn unsigned_loads_zero_fill_under_zero_policy(#[case] code: u16, #[case] expected: u32) {
    let mut tc = ctx_with(UnsignedLoadExtension::Zero, NarrowStorePolicy::Overwrite)
        .preload(1, 0x1234_8080);
    tc.tick(&inst().load(code, 2, HIGH_ADDR_BASE + 1, 0).build());
    assert_eq!(tc.outputs().loaded_data, expected);
}

#[test]
fn load_latches_destination_register() {
    let mut tc = TestContext::new();
    tc.tick(&inst().lh(27, 0, 0).build());
    assert_eq!(tc.outputs().forwarded_dest_register, 27);
}

#[test]
fn load_leaves_forwarded_result_alone() {
    let mut tc = TestContext::new();
    tc.run(&[inst().add(1, 0xABCD).build(), inst().lw(2, 0, 0).build()]);
    assert_eq!(tc.outputs().forwarded_result, 0xABCD);
}

// ══════════════════════════════════════════════════════════
// 2. Store operations
// ══════════════════════════════════════════════════════════

#[test]
fn store_byte_concrete_scenario() {
    let mut tc = TestContext::new();
    tc.tick(&inst().sb(2, 0, 0x0000_00FF).build());
    assert_eq!(tc.stage.address(), 2);
    assert_eq!(tc.word(2), 0x0000_00FF);
}

#[rstest]
#[case::byte(ext2::SB, 0x0000_00AB)]
#[case::half(ext2::SH, 0x0000_56AB)]
#[case::word(ext2::SW, 0x1234_56AB)]
fn stores_overwrite_whole_word(#[case] code: u16, #[case] expected: u32) {
    let mut tc = TestContext::new().preload(2, 0xFFFF_FFFF);
    tc.tick(&inst().store(code, 2, 0, 0x1234_56AB).build());
    assert_eq!(tc.word(2), expected);
}

#[rstest]
#[case::byte(ext2::SB, 0xAABB_CC11)]
#[case::half(ext2::SH, 0xAABB_2211)]
#[case::word(ext2::SW, 0x4433_2211)]
fn stores_merge_under_merge_policy(#[case] code: u16, #[case] expected: u32) {
    let mut tc = ctx_with(UnsignedLoadExtension::AddressBit, NarrowStorePolicy::Merge)
        .preload(2, 0xAABB_CCDD);
    tc.tick(&inst().store(code, 2, 0, 0x4433_2211).build());
    assert_eq!(tc.word(2), expected);
}

#[test]
fn store_changes_no_output_latch() {
    let mut tc = TestContext::new();
    let primed = prime_outputs(&mut tc);
    tc.tick(&inst().sw(5, 0, 0xFEED).build());
    assert_eq!(tc.outputs(), primed);
    assert_eq!(tc.word(5), 0xFEED);
}

#[test]
fn store_touches_only_its_word() {
    let mut tc = TestContext::new();
    tc.tick(&inst().sw(7, 0, 0xFFFF_FFFF).build());
    for (index, &word) in tc.stage.store().words().iter().enumerate() {
        let expected = if index == 7 { 0xFFFF_FFFF } else { 0 };
        assert_eq!(word, expected, "word {index}");
    }
}

// ══════════════════════════════════════════════════════════
// 3. Non-memory instructions
// ══════════════════════════════════════════════════════════

#[rstest]
#[case::add(inst().add(1, 0x1357_9BDF).build())]
#[case::sub(inst().sub(1, 0x1357_9BDF).build())]
#[case::addi(inst().addi(1, 0x1357_9BDF).build())]
#[case::srai(inst().op_imm(ext2::SRAI, 1, 0x1357_9BDF).build())]
fn passthrough_forwards_result(#[case] entry: ExMemEntry) {
    let mut tc = TestContext::new();
    tc.tick(&entry);
    assert_eq!(tc.stage.op(), Some(MemOp::Passthrough));
    assert_eq!(tc.outputs().forwarded_result, 0x1357_9BDF);
}

#[test]
fn passthrough_leaves_store_unmodified() {
    let mut tc = TestContext::new();
    for index in 0u32..16 {
        tc.stage
            .store_mut()
            .preload(index as usize, 0x100 + index)
            .expect("index within store");
    }
    let before = tc.stage.store().clone();

    tc.run(&[
        inst().add(3, 0).build(),
        inst().addi(3, 0xFFFF_FFFF).build(),
        inst().op_reg(ext1::AND, 3, 7).build(),
    ]);

    assert_eq!(tc.stage.store(), &before);
}

#[test]
fn passthrough_does_not_latch_destination_register() {
    let mut tc = TestContext::new();
    let primed = prime_outputs(&mut tc);
    tc.tick(&inst().add(30, 0x5555).build());
    assert_eq!(tc.outputs().forwarded_dest_register, primed.forwarded_dest_register);
    assert_eq!(tc.outputs().loaded_data, primed.loaded_data);
    assert_eq!(tc.outputs().forwarded_result, 0x5555);
}

#[test]
fn passthrough_holds_address_bus() {
    let mut tc = TestContext::new();
    tc.tick(&inst().lw(1, 3, 4).build());
    assert_eq!(tc.stage.address(), 7);

    tc.tick(&inst().addi(2, 100).imm(50).build());
    assert_eq!(tc.stage.address(), 7);
    assert_eq!(tc.stage.store_index(), None);
}

#[test]
fn unlisted_register_immediate_code_forwards() {
    let mut tc = TestContext::new();
    tc.tick(&inst().op_imm(ext2::JALR, 1, 0x0040_0000).build());
    assert_eq!(tc.stage.op(), Some(MemOp::Passthrough));
    assert_eq!(tc.outputs().forwarded_result, 0x0040_0000);
}

// ══════════════════════════════════════════════════════════
// 4. Unrecognized bundles
// ══════════════════════════════════════════════════════════

#[rstest]
#[case::zero_category(inst().unknown(0b000, 0xDEAD).build())]
#[case::reserved_category(inst().unknown(0b010, 0xDEAD).build())]
#[case::branch(inst().unknown(CAT_BRANCH, 0xDEAD).build())]
#[case::store_category(inst().unknown(0b011, 0xDEAD).build())]
#[case::upper(ExMemBuilder::new().category(CAT_UPPER).ext3(ext3::LUI).arith(0xDEAD).build())]
#[case::unlisted_reg_reg(ExMemBuilder::new().category(CAT_REG_REG).ext1(0x7FF).arith(0xDEAD).build())]
fn unrecognized_bundle_holds_outputs(#[case] entry: ExMemEntry) {
    let mut tc = TestContext::new();
    let primed = prime_outputs(&mut tc);
    let store_before = tc.stage.store().clone();
    let address_before = tc.stage.address();

    tc.tick(&entry);

    assert_eq!(tc.stage.op(), None);
    assert_eq!(tc.outputs(), primed);
    assert_eq!(tc.stage.store(), &store_before);
    assert_eq!(tc.stage.address(), address_before);
}

#[test]
fn reg_reg_category_ignores_ext2() {
    let entry = ExMemBuilder::new()
        .category(CAT_REG_REG)
        .ext1(ext1::ADD)
        .ext2(ext2::SW)
        .arith(9)
        .build();
    let mut tc = TestContext::new();
    tc.tick(&entry);
    assert_eq!(tc.stage.op(), Some(MemOp::Passthrough));
    assert!(tc.stage.store().words().iter().all(|&w| w == 0));
}

#[test]
fn unrecognized_bundle_still_advances_cycle() {
    let mut tc = TestContext::new();
    tc.tick(&ExMemBuilder::new().build());
    assert_eq!(tc.stage.cycle(), 1);
    assert_eq!(tc.stage.stats().idle, 1);
}

// ══════════════════════════════════════════════════════════
// 5. Timing
// ══════════════════════════════════════════════════════════

#[test]
fn outputs_change_only_at_edge() {
    let mut tc = TestContext::new().preload(6, 0x66);
    let entry = inst().lw(3, 6, 0).build();

    tc.stage.drive(&entry);
    assert_eq!(tc.stage.address(), 6, "address settles combinationally");
    assert_eq!(tc.outputs(), MemWbEntry::default(), "no bypass to outputs");

    tc.stage.edge();
    assert_eq!(tc.outputs().loaded_data, 0x66);
}

#[test]
fn store_lands_at_edge_not_at_drive() {
    let mut tc = TestContext::new();
    tc.stage.drive(&inst().sw(4, 0, 0xAB).build());
    assert_eq!(tc.word(4), 0);
    tc.stage.edge();
    assert_eq!(tc.word(4), 0xAB);
}

#[test]
fn redriving_before_edge_uses_last_inputs() {
    let mut tc = TestContext::new().preload(1, 0x11).preload(2, 0x22);
    tc.stage.drive(&inst().lw(5, 1, 0).build());
    tc.stage.drive(&inst().lw(6, 2, 0).build());
    tc.stage.edge();
    assert_eq!(tc.outputs().loaded_data, 0x22);
    assert_eq!(tc.outputs().forwarded_dest_register, 6);
}

#[test]
fn store_then_load_sees_value_next_cycle() {
    let mut tc = TestContext::new();
    tc.run(&[
        inst().sw(9, 0, 0xCAFE_F00D).build(),
        inst().lw(1, 9, 0).build(),
    ]);
    assert_eq!(tc.outputs().loaded_data, 0xCAFE_F00D);
}

#[test]
fn edge_without_new_drive_repeats_operation() {
    let mut tc = TestContext::new();
    tc.tick(&inst().addi(1, 5).build());
    tc.stage.edge();
    assert_eq!(tc.stage.cycle(), 2);
    assert_eq!(tc.stage.stats().passthroughs, 2);
    assert_eq!(tc.outputs().forwarded_result, 5);
}

// ══════════════════════════════════════════════════════════
// 6. Addressing
// ══════════════════════════════════════════════════════════

#[test]
fn address_reduces_modulo_store_size() {
    let mut tc = TestContext::new().preload(3, 0x33);
    tc.tick(&inst().lw(1, 0x10, 0x3).build());
    assert_eq!(tc.stage.address(), 0x13);
    assert_eq!(tc.stage.store_index(), Some(3));
    assert_eq!(tc.outputs().loaded_data, 0x33);
}

#[test]
fn address_sum_wraps_at_32_bits() {
    let mut tc = TestContext::new().preload(1, 0x77);
    tc.tick(&inst().lw(1, 0xFFFF_FFFF, 2).build());
    assert_eq!(tc.stage.address(), 1);
    assert_eq!(tc.outputs().loaded_data, 0x77);
}

#[test]
fn wider_store_changes_reduction() {
    let mut config = Config::default();
    config.memory.store_words = 10;
    let mut tc = TestContext::with_config(&config);
    tc.tick(&inst().sw(20, 3, 0x5A).build());
    assert_eq!(tc.stage.store_index(), Some(3));
    assert_eq!(tc.word(3), 0x5A);
}

#[test]
fn oversized_category_bits_are_ignored() {
    let entry = ExMemBuilder::new()
        .category(0b1111_1000 | CAT_IMM_MEM)
        .ext2(ext2::SW)
        .arith(8)
        .store_value(0x88)
        .build();
    let mut tc = TestContext::new();
    tc.tick(&entry);
    assert_eq!(tc.word(8), 0x88);
    assert_eq!(tc.stage.inputs().category, CAT_IMM_MEM);
}

#[test]
fn destination_register_is_truncated_to_five_bits() {
    let mut tc = TestContext::new();
    tc.tick(&inst().lw(0x3F, 0, 0).build());
    assert_eq!(tc.outputs().forwarded_dest_register, 0x1F);
}

// ══════════════════════════════════════════════════════════
// 7. Reset
// ══════════════════════════════════════════════════════════

#[test]
fn reset_clears_store_latches_and_counters() {
    let mut tc = TestContext::new();
    let _ = prime_outputs(&mut tc);
    tc.tick(&inst().sw(3, 0, 1).build());

    tc.stage.reset();

    assert_eq!(tc.outputs(), MemWbEntry::default());
    assert!(tc.stage.store().words().iter().all(|&w| w == 0));
    assert_eq!(tc.stage.cycle(), 0);
    assert_eq!(tc.stage.address(), 0);
    assert_eq!(tc.stage.op(), None);
    assert_eq!(tc.stage.stats().edges, 0);
    assert_eq!(tc.stage.store().capacity(), 16);
}

#[test]
fn new_rejects_zero_capacity() {
    let mut config = Config::default();
    config.memory.store_words = 0;
    assert!(rvmem_core::MemoryStage::new(&config).is_err());
}

#[test]
fn stage_reports_configured_policy() {
    let tc = ctx_with(UnsignedLoadExtension::Zero, NarrowStorePolicy::Merge);
    assert_eq!(tc.stage.policy().unsigned_load_extension, UnsignedLoadExtension::Zero);
    assert_eq!(tc.stage.policy().narrow_store, NarrowStorePolicy::Merge);
}
