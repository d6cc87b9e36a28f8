//! Pools de referencias compartidas entre etiquetas
//!
//! Miles de etiquetas repiten las mismas referencias (`<Account/>`,
//! `<New/>`…). El pool devuelve un único `Arc` por valor; la igualdad sigue
//! siendo estructural, de modo que compartir o no una instancia no cambia
//! ningún resultado.

use std::hash::Hash;
use std::sync::Arc;

use dashmap::DashMap;

/// Pool concurrente de valores inmutables
#[derive(Debug)]
pub struct Interner<T: Eq + Hash> {
    pool: DashMap<Arc<T>, ()>,
}

impl<T: Eq + Hash> Default for Interner<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> Interner<T> {
    pub fn new() -> Self {
        Self {
            pool: DashMap::new(),
        }
    }

    /// Instancia compartida igual a `value`
    pub fn unique(&self, value: T) -> Arc<T> {
        if let Some(entry) = self.pool.get(&value) {
            return Arc::clone(entry.key());
        }
        let entry = self.pool.entry(Arc::new(value)).or_insert(());
        Arc::clone(entry.key())
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_unique_shares_equal_values() {
        let interner = Interner::new();
        let a = interner.unique("account".to_string());
        let b = interner.unique("account".to_string());
        let c = interner.unique("contact".to_string());
        assert!(Arc::ptr_eq(&a, &b));
        assert!(!Arc::ptr_eq(&a, &c));
        assert_eq!(interner.len(), 2);
    }

    #[test]
    fn test_concurrent_unique() {
        let interner = Arc::new(Interner::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let interner = Arc::clone(&interner);
                thread::spawn(move || interner.unique(42u32))
            })
            .collect();
        let values: Vec<Arc<u32>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(values.iter().all(|v| Arc::ptr_eq(v, &values[0])));
        assert_eq!(interner.len(), 1);
    }
}
