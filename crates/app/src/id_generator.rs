//! Identifier generators: random for serving, sequential for reproducible runs.

use std::sync::atomic::{AtomicUsize, Ordering};

use catsapi_domain::id::CatId;

use crate::ports::IdGenerator;

/// Generates random v4 UUID identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self) -> CatId {
        CatId::random()
    }
}

/// Hands out `{prefix}0`, `{prefix}1`, … in order.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: &'static str,
    next: AtomicUsize,
}

impl SequentialIdGenerator {
    #[must_use]
    pub fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            next: AtomicUsize::new(0),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> CatId {
        let n = self.next.fetch_add(1, Ordering::SeqCst);
        CatId::new(format!("{}{n}", self.prefix))
    }
}
