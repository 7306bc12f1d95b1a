//! Algorithm registry: one shared generator instance per variant.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::algorithm::FibonacciAlgorithm;
use crate::error::FibError;
use crate::fastdoubling::{FastDoubling, FastDoublingFused};
use crate::iterative::{DigitStringCopying, DigitStringSwapping, Linear, SegmentedLinear};
use crate::variant::Variant;

/// Lookup of generators by variant.
pub trait AlgorithmRegistry: Send + Sync {
    /// Get or create the generator for a variant.
    fn get(&self, variant: Variant) -> Arc<dyn FibonacciAlgorithm>;

    /// List all variants this registry can serve.
    fn available(&self) -> Vec<Variant>;

    /// Generator selected by a write-request selector code.
    fn by_code(&self, code: usize) -> Result<Arc<dyn FibonacciAlgorithm>, FibError> {
        Variant::from_code(code)
            .map(|v| self.get(v))
            .ok_or(FibError::InvalidVariant(code))
    }
}

/// Default registry with lazy creation and cache.
pub struct DefaultRegistry {
    cache: RwLock<HashMap<Variant, Arc<dyn FibonacciAlgorithm>>>,
}

impl DefaultRegistry {
    /// Create a new default registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create(variant: Variant) -> Arc<dyn FibonacciAlgorithm> {
        match variant {
            Variant::Linear => Arc::new(Linear),
            Variant::SegmentedLinear => Arc::new(SegmentedLinear),
            Variant::FastDoubling => Arc::new(FastDoubling),
            Variant::FastDoublingFused => Arc::new(FastDoublingFused),
            Variant::DigitStringCopying => Arc::new(DigitStringCopying),
            Variant::DigitStringSwapping => Arc::new(DigitStringSwapping),
        }
    }
}

impl Default for DefaultRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl AlgorithmRegistry for DefaultRegistry {
    fn get(&self, variant: Variant) -> Arc<dyn FibonacciAlgorithm> {
        if let Some(algo) = self.cache.read().get(&variant) {
            return Arc::clone(algo);
        }

        let mut cache = self.cache.write();
        Arc::clone(cache.entry(variant).or_insert_with(|| Self::create(variant)))
    }

    fn available(&self) -> Vec<Variant> {
        Variant::ALL.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_serves_every_variant() {
        let registry = DefaultRegistry::new();
        for variant in registry.available() {
            assert_eq!(registry.get(variant).variant(), variant);
        }
    }

    #[test]
    fn registry_caches() {
        let registry = DefaultRegistry::new();
        let a = registry.get(Variant::FastDoubling);
        let b = registry.get(Variant::FastDoubling);
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn registry_by_code() {
        let registry = DefaultRegistry::new();
        assert_eq!(registry.by_code(5).unwrap().name(), "DigitStringSwapping");
        assert!(matches!(registry.by_code(6), Err(FibError::InvalidVariant(6))));
    }

    #[test]
    fn registry_base_cases() {
        let registry = DefaultRegistry::new();
        for variant in registry.available() {
            let algo = registry.get(variant);
            for k in 0..=2u64 {
                let expected = if k == 0 { "0" } else { "1" };
                assert_eq!(algo.compute(k).unwrap().to_decimal(), expected, "{variant} F({k})");
            }
        }
    }
}
