//! Master key material addressed by key slot

use std::collections::HashMap;
use std::fmt;

use zeroize::Zeroize;

/// AES-128 key size in bytes
pub const KEY_SIZE: usize = 16;

/// Source of per-device master keys.
///
/// Implemented by whatever holds the console key material; the data-frame
/// key derivation only ever asks for one fixed slot.
pub trait KeyStore: Send + Sync {
    /// Normal key stored in `slot`, if the slot has been provisioned
    fn get_key(&self, slot: u8) -> Option<[u8; KEY_SIZE]>;
}

/// In-memory key store
#[derive(Clone, Default)]
pub struct StaticKeyStore {
    keys: HashMap<u8, [u8; KEY_SIZE]>,
}

impl StaticKeyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding a single key
    pub fn with_key(slot: u8, key: [u8; KEY_SIZE]) -> Self {
        let mut store = Self::new();
        store.insert(slot, key);
        store
    }

    /// Provision `slot`, replacing any previous key
    pub fn insert(&mut self, slot: u8, key: [u8; KEY_SIZE]) {
        if let Some(mut old) = self.keys.insert(slot, key) {
            old.zeroize();
        }
    }

    pub fn remove(&mut self, slot: u8) -> bool {
        match self.keys.remove(&slot) {
            Some(mut old) => {
                old.zeroize();
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, slot: u8) -> bool {
        self.keys.contains_key(&slot)
    }
}

impl KeyStore for StaticKeyStore {
    fn get_key(&self, slot: u8) -> Option<[u8; KEY_SIZE]> {
        self.keys.get(&slot).copied()
    }
}

impl Drop for StaticKeyStore {
    fn drop(&mut self) {
        for key in self.keys.values_mut() {
            key.zeroize();
        }
    }
}

impl fmt::Debug for StaticKeyStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut slots: Vec<_> = self.keys.keys().copied().collect();
        slots.sort_unstable();
        f.debug_struct("StaticKeyStore")
            .field("slots", &slots)
            .finish()
    }
}
