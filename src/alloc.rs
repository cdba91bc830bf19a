use std::alloc;
use std::alloc::Layout;
use std::io;
use std::io::Write;
use std::process;
use std::ptr::NonNull;

// The language's one data type is int64, so every allocation is aligned
// for it, matching malloc's suitable-for-any-object guarantee.
const ALIGN: usize = align_of::<i64>();

/// Allocates `len` bytes, or terminates the process if the allocation
/// fails.
///
/// Allocation failure is never a recoverable condition in this runtime:
/// on exhaustion the platform's out-of-memory diagnostic is printed to
/// stderr and the process exits with status 1. Any future generator kind
/// needing heap storage goes through this guarantee.
///
/// The returned pointer is aligned for `i64`, so generated code can store
/// the language's values through it directly.
///
/// A zero-length request returns a dangling pointer with the same
/// alignment that must not be read through or written through.
pub fn checked_alloc(len: usize) -> NonNull<u8> {
    if len == 0 {
        return NonNull::<i64>::dangling().cast();
    }
    let Ok(layout) = Layout::from_size_align(len, ALIGN) else {
        oom_abort();
    };
    // SAFETY: layout has non-zero size.
    let ptr = unsafe { alloc::alloc(layout) };
    match NonNull::new(ptr) {
        Some(ptr) => ptr,
        None => oom_abort(),
    }
}

/// Releases an allocation obtained from [`checked_alloc`].
///
/// # Safety
///
/// `ptr` must have been returned by a `checked_alloc(len)` call with this
/// exact `len`, and must not have been released already.
pub unsafe fn checked_dealloc(ptr: NonNull<u8>, len: usize) {
    if len == 0 {
        return;
    }
    // SAFETY: per this function's contract, checked_alloc accepted this
    // len, and ptr was allocated with this layout.
    unsafe {
        let layout = Layout::from_size_align_unchecked(len, ALIGN);
        alloc::dealloc(ptr.as_ptr(), layout)
    }
}

#[cold]
fn oom_abort() -> ! {
    // ENOMEM's strerror text on the platforms this runtime targets.
    let _ = writeln!(io::stderr(), "Cannot allocate memory");
    process::exit(1);
}
