//! # Reasoning Cache
//!
//! Memoização das análises semânticas por assinatura de perfil.
//!
//! - TTL contado a partir da inserção; entradas vencidas **nunca** são
//!   devolvidas (checagem na leitura) e também são varridas periodicamente
//!   por [`ReasoningCache::purge_expired`].
//! - Cada entrada guarda a geração do grafo que a produziu. Geração
//!   diferente da atual é tratada como miss.
//! - Limpar o cache só afeta latência, nunca o resultado.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

struct CacheEntry<V> {
    value: Arc<V>,
    generation: u64,
    inserted_at: Instant,
}

pub struct ReasoningCache<V> {
    entries: Mutex<HashMap<String, CacheEntry<V>>>,
    ttl: Duration,
}

impl<V> ReasoningCache<V> {
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Valor válido para a chave e a geração informadas.
    pub fn get(&self, key: &str, generation: u64) -> Option<Arc<V>> {
        let mut entries = self.entries.lock();
        let entry = entries.get(key)?;
        if entry.generation != generation || entry.inserted_at.elapsed() >= self.ttl {
            entries.remove(key);
            return None;
        }
        Some(Arc::clone(&entry.value))
    }

    pub fn put(&self, key: impl Into<String>, generation: u64, value: Arc<V>) {
        self.entries.lock().insert(
            key.into(),
            CacheEntry {
                value,
                generation,
                inserted_at: Instant::now(),
            },
        );
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    /// Remove as entradas vencidas; retorna quantas saíram.
    pub fn purge_expired(&self) -> usize {
        let mut entries = self.entries.lock();
        let before = entries.len();
        entries.retain(|_, entry| entry.inserted_at.elapsed() < self.ttl);
        before - entries.len()
    }

    /// Entradas armazenadas (podem incluir vencidas ainda não varridas).
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V> Default for ReasoningCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn hit_after_put() {
        let cache = ReasoningCache::new();
        cache.put("oily|acne|", 1, Arc::new(42));
        assert_eq!(cache.get("oily|acne|", 1).as_deref(), Some(&42));
        assert!(cache.get("dry||", 1).is_none());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn generation_mismatch_is_a_miss() {
        let cache = ReasoningCache::new();
        cache.put("k", 1, Arc::new("old"));
        assert!(cache.get("k", 2).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn expired_entries_are_never_returned() {
        let cache = ReasoningCache::with_ttl(Duration::from_millis(20));
        cache.put("k", 1, Arc::new(1));
        thread::sleep(Duration::from_millis(40));
        assert!(cache.get("k", 1).is_none());
    }

    #[test]
    fn purge_removes_only_expired() {
        let cache = ReasoningCache::with_ttl(Duration::from_millis(30));
        cache.put("old", 1, Arc::new(1));
        thread::sleep(Duration::from_millis(50));
        cache.put("fresh", 1, Arc::new(2));
        assert_eq!(cache.purge_expired(), 1);
        assert_eq!(cache.get("fresh", 1).as_deref(), Some(&2));
    }

    #[test]
    fn clear_empties_everything() {
        let cache = ReasoningCache::new();
        cache.put("a", 1, Arc::new(()));
        cache.put("b", 1, Arc::new(()));
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn concurrent_put_and_get() {
        let cache = Arc::new(ReasoningCache::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    for j in 0..100 {
                        let key = format!("{i}-{j}");
                        cache.put(key.clone(), 1, Arc::new(j));
                        assert_eq!(cache.get(&key, 1).as_deref(), Some(&j));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(cache.len(), 800);
    }
}
