use std::thread;

use lrukit::policy::lru::SharedLruCache;

fn main() {
    let cache: SharedLruCache<u64, u64> = SharedLruCache::new(64);

    let handles: Vec<_> = (0..4u64)
        .map(|tid| {
            let cache = cache.clone();
            thread::spawn(move || {
                for i in 0..16 {
                    let key = tid * 16 + i;
                    cache.put(key, key * key);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    println!("entries: {}", cache.len());
    println!("get 9 -> {:?}", cache.get(&9).map(|v| *v));

    cache.check_invariants().expect("structures agree");
    println!("invariants ok");
}

// Expected output:
// entries: 64
// get 9 -> Some(81)
// invariants ok
