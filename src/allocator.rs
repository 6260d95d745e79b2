//! Memory Allocator Configuration
//!
//! The binary uses mimalloc as its global allocator.

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;
