use std::borrow::Borrow;
use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};
use std::ops::Bound;
use std::sync::{Arc, Weak};

use log::{debug, trace};
use parking_lot::RwLock;

use crate::value::f32_key;

/// Entries checked for liveness on each insert into a stripe.
const SWEEP_BATCH: usize = 8;

struct Stripe<K, T: ?Sized> {
    entries: BTreeMap<K, Weak<T>>,
    // Last key checked by the previous sweep, None to start from the front.
    cursor: Option<K>,
}

impl<K: Ord + Clone, T: ?Sized> Stripe<K, T> {
    fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            cursor: None,
        }
    }

    /// Check up to `budget` entries following the cursor and remove the dead
    /// ones, wrapping to the front once the end is reached. Returns the number
    /// removed.
    fn sweep(&mut self, budget: usize) -> usize {
        let range = match &self.cursor {
            Some(after) => self
                .entries
                .range::<K, _>((Bound::Excluded(after), Bound::Unbounded)),
            None => self.entries.range::<K, _>(..),
        };

        let mut dead = Vec::new();
        let mut checked = 0;
        let mut last = None;
        for (key, weak) in range.take(budget) {
            checked += 1;
            if weak.strong_count() == 0 {
                dead.push(key.clone());
            }
            last = Some(key);
        }
        let cursor = if checked < budget { None } else { last.cloned() };

        for key in &dead {
            self.entries.remove(key);
        }
        self.cursor = cursor;
        dead.len()
    }

    fn purge(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, weak| weak.strong_count() > 0);
        self.cursor = None;
        before - self.entries.len()
    }
}

/// A concurrent pool handing out one shared [`Arc`] per distinct key.
///
/// The pool only holds [`Weak`] references, so a canonical value lives for
/// exactly as long as something outside the pool holds it.
///
/// Entries are spread over independently locked stripes. There is no lock
/// covering the whole pool. A dead entry is replaced in place when its key is
/// interned again, and every insert into a stripe also checks the next few
/// entries of that stripe and removes any that have died. The cost of an
/// insert therefore doesn't grow with the number of live entries, and dead
/// entries can't pile up while the pool is in use.
pub struct InternPool<K, T: ?Sized> {
    stripes: Box<[RwLock<Stripe<K, T>>]>,
}

/// Pool of boxed ints, see [`intern_i32`][super::intern_i32].
pub type IntegerInternPool = InternPool<i32, i32>;

/// Pool of boxed floats keyed by their bit pattern, with every NaN sharing one
/// key. See [`intern_f32`][super::intern_f32].
pub type FloatInternPool = InternPool<u32, f32>;

/// Pool of shared strings, see [`intern_str`][super::intern_str].
pub type StringInternPool = InternPool<String, str>;

fn hash_of<Q: Hash + ?Sized>(key: &Q) -> u64 {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    hasher.finish()
}

impl<K: Ord + Hash + Clone, T: ?Sized> InternPool<K, T> {
    /// A pool with four stripes per available core.
    pub fn new() -> Self {
        let n = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        Self::with_stripes(n * 4)
    }

    /// A pool with `stripes` independently locked stripes, rounded up to a
    /// power of two. Zero is treated as one.
    pub fn with_stripes(stripes: usize) -> Self {
        let stripes = stripes.max(1).next_power_of_two();
        Self {
            stripes: (0..stripes).map(|_| RwLock::new(Stripe::new())).collect(),
        }
    }

    fn stripe<Q: Hash + ?Sized>(&self, key: &Q) -> &RwLock<Stripe<K, T>> {
        // Stripe count is a power of two.
        let index = hash_of(key) as usize & (self.stripes.len() - 1);
        &self.stripes[index]
    }

    /// Return the canonical value for `key`, calling `make` to create it if
    /// there is no live one. `make` is called at most once, and its result is
    /// only returned if it became the canonical value.
    pub fn intern_with<Q, F>(&self, key: &Q, make: F) -> Arc<T>
    where
        K: Borrow<Q>,
        Q: Ord + Hash + ToOwned<Owned = K> + ?Sized,
        F: FnOnce() -> Arc<T>,
    {
        let stripe = self.stripe(key);

        // Fast path, shared lock only.
        let found = stripe.read().entries.get(key).and_then(Weak::upgrade);
        if let Some(live) = found {
            return live;
        }

        let mut stripe = stripe.write();
        // Someone else inserted first, theirs wins.
        if let Some(live) = stripe.entries.get(key).and_then(Weak::upgrade) {
            return live;
        }

        let value = make();
        match stripe.entries.get_mut(key) {
            Some(dead) => *dead = Arc::downgrade(&value),
            None => {
                stripe.entries.insert(key.to_owned(), Arc::downgrade(&value));
            }
        }

        let removed = stripe.sweep(SWEEP_BATCH);
        if removed > 0 {
            trace!("intern pool: swept {} dead entries", removed);
        }
        value
    }

    /// Remove every dead entry.
    pub fn purge(&self) {
        let removed: usize = self.stripes.iter().map(|s| s.write().purge()).sum();
        debug!("intern pool purged {} dead entries", removed);
    }

    /// Number of entries in the pool, including dead ones not yet swept.
    pub fn len(&self) -> usize {
        self.stripes.iter().map(|s| s.read().entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.stripes.iter().all(|s| s.read().entries.is_empty())
    }
}

impl<K: Ord + Hash + Clone, T: ?Sized> Default for InternPool<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl IntegerInternPool {
    pub fn intern(&self, v: i32) -> Arc<i32> {
        self.intern_with(&v, || Arc::new(v))
    }
}

impl FloatInternPool {
    pub fn intern(&self, v: f32) -> Arc<f32> {
        self.intern_with(&f32_key(v), || Arc::new(v))
    }
}

impl StringInternPool {
    pub fn intern(&self, s: &str) -> Arc<str> {
        self.intern_with(s, || Arc::from(s))
    }
}
