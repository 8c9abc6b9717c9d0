//! Hand out the sub-blocks of one [`Range`] to several workers.
//!
//! [`Range`] has no locking of its own; this wrapper serializes access so
//! each sub-block is claimed exactly once.

use super::Range;
use crate::models::Cidr;
use std::sync::Mutex;

#[derive(Debug)]
struct Cursor {
    range: Range,
    exhausted: bool,
    started: bool,
}

/// A [`Range`] behind a mutex.
#[derive(Debug)]
pub struct SharedRange {
    inner: Mutex<Cursor>,
}

impl SharedRange {
    /// Wrap `range`; blocks are handed out from its first sub-block whatever
    /// the cursor position.
    pub fn new(mut range: Range) -> Self {
        range.reset();
        SharedRange {
            inner: Mutex::new(Cursor {
                range,
                exhausted: false,
                started: false,
            }),
        }
    }

    /// Claim the next unclaimed sub-block, or `None` once all are handed out.
    pub fn next_block(&self) -> Option<Cidr> {
        // a poisoned lock only means another worker panicked mid-claim;
        // the cursor itself is always consistent
        let mut cursor = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        if cursor.exhausted {
            return None;
        }
        if !cursor.started {
            cursor.started = true;
        } else if !cursor.range.advance() {
            cursor.exhausted = true;
            log::debug!("SharedRange exhausted at {}", cursor.range.current_block());
            return None;
        }
        Some(cursor.range.current_block())
    }

    /// Give back the wrapped cursor.
    pub fn into_inner(self) -> Range {
        self.inner
            .into_inner()
            .unwrap_or_else(|e| e.into_inner())
            .range
    }
}
