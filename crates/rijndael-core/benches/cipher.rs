use criterion::{criterion_group, criterion_main, Criterion};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use rijndael_core::{Aes, BlockCipher, KeySchedule};

fn bench_key_schedule(c: &mut Criterion) {
    let mut group = c.benchmark_group("key_schedule");
    for key_len in [16usize, 24, 32] {
        let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
        let mut key = vec![0u8; key_len];
        rng.fill_bytes(&mut key);
        group.bench_function(format!("expand_{}", key_len * 8), |b| {
            b.iter(|| KeySchedule::expand(&key).unwrap());
        });
    }
    group.finish();
}

fn bench_block(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([2u8; 32]);
    let mut key = [0u8; 16];
    let mut block = [0u8; 16];
    rng.fill_bytes(&mut key);
    rng.fill_bytes(&mut block);
    let aes = Aes::new(&key).unwrap();
    let ct = aes.encrypt_block(&block).unwrap();

    let mut group = c.benchmark_group("block");
    group.bench_function("encrypt_block_128", |b| {
        b.iter(|| aes.encrypt_block(&block).unwrap());
    });
    group.bench_function("decrypt_block_128", |b| {
        b.iter(|| aes.decrypt_block(&ct).unwrap());
    });
    group.finish();
}

criterion_group!(benches, bench_key_schedule, bench_block);
criterion_main!(benches);
