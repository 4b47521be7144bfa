use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ring_buf_float::{DefaultPool, RingBuf};

const SIZE: usize = 4096;

fn overwrite_put(c: &mut Criterion) {
    let mut storage = vec![0.0f32; SIZE];
    let mut ring = RingBuf::new(&mut storage);
    c.bench_function("put overwrite", |b| {
        b.iter(|| {
            for i in 0..SIZE * 2 {
                ring.put(black_box(i as f32));
            }
        })
    });
}

fn try_put_get(c: &mut Criterion) {
    let mut storage = vec![0.0f32; SIZE];
    let pool = DefaultPool::new();
    let ring = pool.init(&mut storage).unwrap();
    c.bench_function("try_put then get", |b| {
        b.iter(|| {
            for i in 0..SIZE {
                let _ = ring.try_put(black_box(i as f32));
            }
            while let Ok(v) = ring.get() {
                black_box(v);
            }
        })
    });
}

fn peek(c: &mut Criterion) {
    let mut storage = vec![0.0f32; SIZE];
    let mut ring = RingBuf::new(&mut storage);
    // leave tail mid-storage so every peek wraps
    ring.put_slice(&vec![1.0; SIZE + SIZE / 2]);
    let mut out = vec![0.0f32; SIZE];
    c.bench_function("peek_into full ring", |b| {
        b.iter(|| {
            ring.peek_into(black_box(&mut out)).unwrap();
        })
    });
}

criterion_group!(ring_bench, overwrite_put, try_put_get, peek);
criterion_main!(ring_bench);
