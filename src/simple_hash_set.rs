use std::fmt;

/// A fixed-capacity set of `i32` built from chained buckets. Keys are stored unboxed in the
/// chain entries, and the bucket count never changes after construction.
pub struct SimpleHashSet {
    table: Vec<Option<Box<Entry>>>,
    size: usize,
}

struct Entry {
    key: i32,
    next: Option<Box<Entry>>,
}

impl Entry {
    fn new(key: i32) -> Entry {
        Entry { key, next: None }
    }
}

impl SimpleHashSet {
    /// Creates a table with `capacity` buckets. A capacity of zero still gets one bucket.
    pub fn with_capacity(capacity: usize) -> SimpleHashSet {
        let mut table = Vec::with_capacity(capacity.max(1));
        table.resize_with(capacity.max(1), || None);
        SimpleHashSet { table, size: 0 }
    }

    /// Number of distinct keys stored across all chains.
    pub fn len(&self) -> usize {
        self.size
    }

    /// True when no key has been added.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of buckets, fixed at construction.
    pub fn bucket_count(&self) -> usize {
        self.table.len()
    }

    fn index_of(&self, value: i32) -> usize {
        // Clear the sign bit so negative keys land in range.
        (value & 0x7FFF_FFFF) as usize % self.table.len()
    }

    /// Adds `value` to the set. Returns true if it was not present before.
    pub fn add(&mut self, value: i32) -> bool {
        let index = self.index_of(value);
        let mut link: &mut Option<Box<Entry>> = &mut self.table[index];
        while let Some(entry) = link {
            if entry.key == value {
                return false;
            }
            link = &mut entry.next;
        }
        *link = Some(Box::new(Entry::new(value)));
        self.size += 1;
        log::trace!("added {} to bucket {}", value, index);
        true
    }

    /// Returns true if `value` is somewhere in its bucket's chain.
    pub fn contains(&self, value: i32) -> bool {
        let mut current: &Option<Box<Entry>> = &self.table[self.index_of(value)];
        while let Some(entry) = current {
            if entry.key == value {
                return true;
            }
            current = &entry.next;
        }
        false
    }

    #[cfg(test)]
    fn chain_len(&self, bucket: usize) -> usize {
        let mut current = &self.table[bucket];
        let mut count = 0;
        while let Some(entry) = current {
            count += 1;
            current = &entry.next;
        }
        count
    }
}

impl fmt::Debug for SimpleHashSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        for bucket in &self.table {
            let mut current = bucket;
            while let Some(entry) = current {
                set.entry(&entry.key);
                current = &entry.next;
            }
        }
        set.finish()
    }
}

impl Drop for SimpleHashSet {
    fn drop(&mut self) {
        for bucket in self.table.iter_mut() {
            let mut current = bucket.take();
            while let Some(mut entry) = current {
                current = entry.next.take();
            }
        }
    }
}
