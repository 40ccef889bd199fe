use criterion::{criterion_group, criterion_main, Criterion};
use multihashing::hash;
use rand::{rngs::StdRng, RngCore, SeedableRng};

fn benchmark_hash_message(c: &mut Criterion) {
    let mut sampler = StdRng::seed_from_u64(0);
    for message_length in [100, 1000, 10000].into_iter() {
        let mut msg = vec![0u8; message_length];
        sampler.fill_bytes(msg.as_mut_slice());
        let msg = msg.as_slice();
        for algorithm in ["sha2-256", "sha2-512", "blake2b"] {
            c.bench_function(
                &format!("{}/algorithm={} msg_len={}", module_path!(), algorithm, msg.len()),
                |b| {
                    b.iter(|| hash(algorithm, msg, None).unwrap());
                },
            );
        }
    }
}

criterion_group!(benches, benchmark_hash_message);
criterion_main!(benches);
