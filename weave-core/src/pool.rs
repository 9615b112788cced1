//! Reusable text buffers.

use std::{
    fmt,
    thread::{self, ThreadId},
};

use dashmap::DashMap;

/// Buffers above this capacity are never kept.
pub const DEFAULT_CEILING: usize = 360;

/// A pool holding one reusable `String` per calling thread.
///
/// [`acquire`](Self::acquire) takes the calling thread's slot, so a nested
/// render on the same thread gets a fresh buffer instead of clobbering the
/// outer one. Requests above the ceiling, and released buffers that grew past
/// it, bypass the pool.
pub struct BufferPool {
    slots: DashMap<ThreadId, String>,
    ceiling: usize,
}

impl BufferPool {
    pub fn new() -> Self {
        Self::with_ceiling(DEFAULT_CEILING)
    }

    pub fn with_ceiling(ceiling: usize) -> Self {
        Self {
            slots: DashMap::new(),
            ceiling,
        }
    }

    pub fn ceiling(&self) -> usize {
        self.ceiling
    }

    /// Get an empty buffer with at least `capacity` bytes reserved.
    pub fn acquire(&self, capacity: usize) -> String {
        if capacity > self.ceiling {
            return String::with_capacity(capacity);
        }

        match self.slots.remove(&thread::current().id()) {
            Some((_, mut buf)) if buf.capacity() >= capacity => {
                buf.clear();
                buf
            }
            _ => String::with_capacity(capacity),
        }
    }

    /// Return a buffer to the calling thread's slot.
    pub fn release(&self, mut buf: String) {
        if buf.capacity() > self.ceiling {
            return;
        }
        buf.clear();
        self.slots.insert(thread::current().id(), buf);
    }

    /// Copy out the contents of `buf` and release it.
    ///
    /// The copy is sized to the text, not the scratch capacity. Callers that
    /// only need to read the text should use [`with_joined`](Self::with_joined),
    /// which does not copy.
    pub fn finish(&self, buf: String) -> String {
        let out = buf.as_str().to_owned();
        self.release(buf);
        out
    }

    /// Join lines with `\n`, terminating the last one.
    pub fn join_lines<S: AsRef<str>>(&self, lines: &[S]) -> String {
        let (buf, size) = self.fill(lines);
        if size > self.ceiling {
            buf
        } else {
            self.finish(buf)
        }
    }

    /// Join lines as [`join_lines`](Self::join_lines) does and hand the text
    /// to `f`, then return the buffer to the pool.
    pub fn with_joined<S, R>(&self, lines: &[S], f: impl FnOnce(&str) -> R) -> R
    where
        S: AsRef<str>,
    {
        let (buf, _) = self.fill(lines);
        let out = f(&buf);
        self.release(buf);
        out
    }

    fn fill<S: AsRef<str>>(&self, lines: &[S]) -> (String, usize) {
        let size = lines.iter().map(|l| l.as_ref().len() + 1).sum();
        let mut buf = self.acquire(size);
        for line in lines {
            buf.push_str(line.as_ref());
            buf.push('\n');
        }
        (buf, size)
    }
}

impl Default for BufferPool {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BufferPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferPool")
            .field("ceiling", &self.ceiling)
            .field("slots", &self.slots.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, thread};

    use super::*;

    #[test]
    fn test_release_then_acquire_is_empty() {
        let pool = BufferPool::new();
        let mut buf = pool.acquire(16);
        buf.push_str("public class Foo { }");
        pool.release(buf);

        let again = pool.acquire(16);
        assert_eq!(again.len(), 0);
        assert!(again.capacity() >= 16);
    }

    #[test]
    fn test_released_buffer_is_reused() {
        let pool = BufferPool::new();
        let buf = pool.acquire(64);
        let ptr = buf.as_ptr();
        pool.release(buf);

        let again = pool.acquire(32);
        assert_eq!(again.as_ptr(), ptr);
    }

    #[test]
    fn test_oversized_buffer_not_pooled() {
        let pool = BufferPool::with_ceiling(32);
        let mut big = pool.acquire(8);
        big.push_str(&"x".repeat(200));
        assert!(big.capacity() > 32);
        pool.release(big);

        let small = pool.acquire(8);
        assert_eq!(small.len(), 0);
        assert!(small.capacity() <= 32);
    }

    #[test]
    fn test_oversized_request_bypasses_pool() {
        let pool = BufferPool::with_ceiling(32);
        let small = pool.acquire(8);
        let ptr = small.as_ptr();
        pool.release(small);

        let big = pool.acquire(1024);
        assert!(big.capacity() >= 1024);
        assert_ne!(big.as_ptr(), ptr);

        // the pooled small buffer is still there
        let small = pool.acquire(8);
        assert_eq!(small.as_ptr(), ptr);
    }

    #[test]
    fn test_nested_acquire_gets_distinct_buffers() {
        let pool = BufferPool::new();
        let mut outer = pool.acquire(16);
        outer.push_str("outer");

        let mut inner = pool.acquire(16);
        inner.push_str("inner");
        let inner = pool.finish(inner);

        assert_eq!(outer, "outer");
        assert_eq!(inner, "inner");
    }

    #[test]
    fn test_join_lines() {
        let pool = BufferPool::new();
        let text = pool.join_lines(&["a", "", "    b"]);
        assert_eq!(text, "a\n\n    b\n");
        assert_eq!(pool.join_lines::<&str>(&[]), "");
    }

    #[test]
    fn test_with_joined_lends_the_pooled_buffer() {
        let pool = BufferPool::new();

        let (text, first) = pool.with_joined(&["namespace Shop;", "", "class A { }"], |text| {
            (text.to_string(), text.as_ptr())
        });
        assert_eq!(text, "namespace Shop;\n\nclass A { }\n");

        let second = pool.with_joined(&["class B { }"], |text| {
            assert_eq!(text, "class B { }\n");
            text.as_ptr()
        });
        assert_eq!(first, second);

        let scratch = pool.acquire(8);
        assert_eq!(scratch.as_ptr(), first);
    }

    #[test]
    fn test_one_slot_per_thread() {
        let pool = Arc::new(BufferPool::new());

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let pool = Arc::clone(&pool);
                thread::spawn(move || {
                    let mut buf = pool.acquire(32);
                    buf.push_str(&i.to_string());
                    let out = pool.finish(buf);
                    assert_eq!(out, i.to_string());
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert!(pool.slots.len() <= 4);
    }
}
