//! Mock register bus for testing

use super::RegisterBus;
use crate::error::Result;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock register bus for unit testing.
///
/// Register blocks are keyed by their start register; a block read copies
/// from the stored bytes (zero-filled when nothing was stored). Clones
/// share state, so a test can keep one handle while the driver owns
/// another.
#[derive(Clone)]
pub struct MockBus {
    inner: Arc<Mutex<MockBusInner>>,
}

struct MockBusInner {
    blocks: HashMap<u8, Vec<u8>>,
    writes: Vec<(u8, u8)>,
}

impl MockBus {
    /// Create a new mock bus
    pub fn new() -> Self {
        MockBus {
            inner: Arc::new(Mutex::new(MockBusInner {
                blocks: HashMap::new(),
                writes: Vec::new(),
            })),
        }
    }

    /// Store raw bytes to be returned for reads starting at `register`
    pub fn set_block(&self, register: u8, data: &[u8]) {
        let mut inner = self.inner.lock().unwrap();
        inner.blocks.insert(register, data.to_vec());
    }

    /// Store three big-endian signed words starting at `register`
    pub fn set_words(&self, register: u8, words: [i16; 3]) {
        let mut data = Vec::with_capacity(6);
        for w in words {
            data.extend_from_slice(&w.to_be_bytes());
        }
        self.set_block(register, &data);
    }

    /// Get all register writes performed so far
    pub fn writes(&self) -> Vec<(u8, u8)> {
        let inner = self.inner.lock().unwrap();
        inner.writes.clone()
    }
}

impl RegisterBus for MockBus {
    fn read_register_block(&mut self, start_register: u8, buffer: &mut [u8]) -> Result<()> {
        let inner = self.inner.lock().unwrap();
        buffer.fill(0);
        if let Some(block) = inner.blocks.get(&start_register) {
            let n = block.len().min(buffer.len());
            buffer[..n].copy_from_slice(&block[..n]);
        }
        Ok(())
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.writes.push((register, value));
        Ok(())
    }
}

impl Default for MockBus {
    fn default() -> Self {
        Self::new()
    }
}
