pub mod stage1_fetch;
pub mod stage2_annotate;
pub mod stage3_assign;
pub mod stage4_advisory;
pub mod stage5_report;
