#![no_main]

use std::alloc::{alloc, dealloc, Layout};
use std::ptr::NonNull;

use arbitrary::Arbitrary;
use buddy_heap::{Heap, MIN_SIZE};
use libfuzzer_sys::fuzz_target;

const POOL_SIZE: usize = 1 << 20;
const MAX_ALLOC: usize = 1 << 18;

#[derive(Clone, Debug, Arbitrary)]
enum HeapOp {
    Allocate(usize),
    Free(usize),
}

#[derive(Clone, Debug, Arbitrary)]
struct Args {
    mem_size: usize,
    ops: Vec<HeapOp>,
}

fuzz_target!(|args: Args| {
    let layout = Layout::from_size_align(POOL_SIZE, MIN_SIZE).unwrap();
    let pool = NonNull::new(unsafe { alloc(layout) }).unwrap();

    // Pools of at most two leaves run without bitmaps and reject every
    // free; keep the driver on sizes where frees must succeed.
    let mem_size = 64 + args.mem_size % (POOL_SIZE - 63);
    let mut heap = match unsafe { Heap::new(pool, mem_size) } {
        Ok(heap) => heap,
        Err(_) => {
            unsafe { dealloc(pool.as_ptr(), layout) };
            return;
        }
    };

    let mut outstanding = Vec::new();

    for op in args.ops {
        match op {
            HeapOp::Allocate(size) => {
                if let Some(block) = heap.allocate(size % (MAX_ALLOC + 1)) {
                    outstanding.push(block);
                }
            }

            HeapOp::Free(raw_idx) => {
                if outstanding.is_empty() {
                    continue;
                }

                let idx = raw_idx % outstanding.len();
                let block = outstanding.swap_remove(idx);
                unsafe { heap.free(block).unwrap() };
            }
        }
    }

    assert_eq!(heap.pending_blocks(), outstanding.len());

    drop(heap);
    unsafe { dealloc(pool.as_ptr(), layout) };
});
