#![no_std]
// Boot crate — placeholder for the stage-2 bootloader.
// The actual bootloader will:
// 1. Load the flat kernel image from disk to 0x10000
// 2. Leave the CPU in whatever mode it runs in, interrupts disabled,
//    no stack handed over
// 3. Jump to kernel_entry at 0x10000
