//! Dumpsys support for the Bluetooth stack
//!
//! Each module contributes one typed record to the dump; the caller owns the
//! buffer the records are built into and hands the finished dump to the
//! out-of-process consumer.

/// Init flag snapshot
pub mod init_flags;
/// Typed record model for dump snapshots
pub mod record;
