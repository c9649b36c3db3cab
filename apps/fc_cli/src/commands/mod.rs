// apps/fc_cli/src/commands/mod.rs

//! 命令实现模块

pub mod channel;
pub mod cylinder;
pub mod info;
pub mod validate;
