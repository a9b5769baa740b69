use std::collections::HashMap;
use std::sync::Mutex;

/// Key under which the session cart blob is stored. The cart has no
/// identity beyond the session, so the key is a constant.
pub const CART_KEY: &str = "cart";

/// Keyed text-blob store backing the cart. The cart engine serializes the
/// whole cart into one blob per save; swapping this for a server-side
/// session store only means implementing these two methods.
pub trait CartStore: Send + Sync {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, blob: String);
}

/// In-process store for the single-session setup.
pub struct MemoryCartStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryCartStore {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for MemoryCartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CartStore for MemoryCartStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn save(&self, key: &str, blob: String) {
        self.entries.lock().unwrap().insert(key.to_owned(), blob);
    }
}
