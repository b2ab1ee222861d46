//! ユースケース層

pub mod crashes_util;

pub use crashes_util::CrashesUtil;
