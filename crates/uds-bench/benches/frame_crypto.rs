//! Benchmarks for UDS data frame cryptography

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use uds_bench::{
    bench_config, bench_crypto, bench_key_store, CLIENT_MAC, HOST_MAC, PAYLOAD_SIZES,
};
use uds_core::NodeId;
use uds_crypto::{decrypt_payload, derive_ccmp_key, encrypt_payload};

fn bench_key_derivation(c: &mut Criterion) {
    let config = bench_config();
    let store = bench_key_store();

    c.bench_function("derive_ccmp_key", |b| {
        b.iter(|| {
            derive_ccmp_key(
                black_box(&config.passphrase),
                black_box(&config.network),
                &store,
            )
            .unwrap()
        })
    });
}

fn bench_encrypt_by_size(c: &mut Criterion) {
    let config = bench_config();
    let key = derive_ccmp_key(&config.passphrase, &config.network, &bench_key_store()).unwrap();

    let mut group = c.benchmark_group("encrypt_payload");

    for size in PAYLOAD_SIZES {
        let payload = vec![0u8; size];

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(format!("{}_bytes", size), |b| {
            b.iter(|| {
                encrypt_payload(black_box(&payload), &key, HOST_MAC, CLIENT_MAC, black_box(7))
                    .unwrap()
            })
        });
    }

    group.finish();
}

fn bench_decrypt_by_size(c: &mut Criterion) {
    let config = bench_config();
    let key = derive_ccmp_key(&config.passphrase, &config.network, &bench_key_store()).unwrap();

    let mut group = c.benchmark_group("decrypt_payload");

    for size in PAYLOAD_SIZES {
        let encrypted = encrypt_payload(&vec![0u8; size], &key, HOST_MAC, CLIENT_MAC, 7).unwrap();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(format!("{}_bytes", size), |b| {
            b.iter(|| {
                decrypt_payload(black_box(&encrypted), &key, HOST_MAC, CLIENT_MAC, 7).unwrap()
            })
        });
    }

    group.finish();
}

fn bench_seal_open(c: &mut Criterion) {
    let crypto = bench_crypto();
    let payload = vec![0u8; 256];
    let sealed = crypto
        .seal(&payload, HOST_MAC, CLIENT_MAC, NodeId::BROADCAST, NodeId::HOST, 1)
        .unwrap();

    let mut group = c.benchmark_group("secure_data_frame");
    group.throughput(Throughput::Bytes(256));

    group.bench_function("seal_256_bytes", |b| {
        b.iter(|| {
            crypto
                .seal(
                    black_box(&payload),
                    HOST_MAC,
                    CLIENT_MAC,
                    NodeId::BROADCAST,
                    NodeId::HOST,
                    1,
                )
                .unwrap()
        })
    });

    group.bench_function("open_256_bytes", |b| {
        b.iter(|| crypto.open(black_box(&sealed), HOST_MAC, CLIENT_MAC).unwrap())
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_key_derivation,
    bench_encrypt_by_size,
    bench_decrypt_by_size,
    bench_seal_open,
);
criterion_main!(benches);
