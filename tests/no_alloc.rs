use alloc_counter::{deny_alloc, AllocCounterSystem};
use ring_buf_float::{DefaultPool, RingBuf};

#[global_allocator]
static A: AllocCounterSystem = AllocCounterSystem;

#[test]
fn ring_operations_do_not_allocate() {
    let mut storage = [0.0; 16];
    let mut out = [0.0; 8];

    deny_alloc(|| {
        let mut ring = RingBuf::new(&mut storage);
        for v in 0..64 {
            ring.put(v as f32);
            let _ = ring.try_put(-(v as f32));
        }
        ring.peek_into(&mut out).unwrap();
        let sum: f32 = ring.peek(8).unwrap().sum();
        assert_eq!(sum, out.iter().sum::<f32>());
        while ring.get().is_ok() {}
        ring.reset();
    });
}

#[test]
fn static_pool_does_not_allocate() {
    let mut a = [0.0; 4];
    let mut b = [0.0; 4];
    let mut c = [0.0; 4];

    deny_alloc(|| {
        let pool = DefaultPool::new();
        let ra = pool.init(&mut a).unwrap();
        let rb = pool.init(&mut b).unwrap();
        assert!(pool.init(&mut c).is_err());

        ra.put(1.0);
        rb.put(2.0);
        assert_eq!(ra.get(), Ok(1.0));
        assert_eq!(rb.get(), Ok(2.0));
    });
}

#[cfg(feature = "heap")]
#[test]
fn heap_allocates_only_the_control_structure() {
    use alloc_counter::count_alloc;
    use ring_buf_float::{Allocator, Heap};

    let mut storage = [0.0; 1024];

    let ((allocs, _, deallocs), ()) = count_alloc(|| {
        let mut ring = Heap.init(&mut storage).unwrap();
        ring.put_slice(&[1.0; 2048]);
        assert!(ring.is_full());
        Heap.release(ring);
    });

    assert_eq!(allocs, 1);
    assert_eq!(deallocs, 1);
}
