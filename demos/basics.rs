use ring_buf_float::{DefaultPool, Error};

fn main() -> Result<(), Error> {
    env_logger::init();

    let mut samples = [0.0; 4];
    let pool = DefaultPool::new();
    let ring = pool.init(&mut samples)?;

    for i in 0..3 {
        ring.try_put(i as f32 * 0.5)?;
    }
    println!("size = {}, full = {}", ring.len(), ring.is_full());

    let ahead: Vec<f32> = ring.peek(2)?.collect();
    println!("next two = {:?}", ahead);

    // overwrite keeps going once the ring is full
    for i in 3..6 {
        ring.put(i as f32 * 0.5);
    }

    while let Ok(v) = ring.get() {
        println!("got = {}", v);
    }

    Ok(())
}
