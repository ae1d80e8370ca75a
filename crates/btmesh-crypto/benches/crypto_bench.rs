use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use btmesh_crypto::beacon::create_secure_network_beacon;
use btmesh_crypto::ccm::{decrypt_ccm, encrypt_ccm};
use btmesh_crypto::cmac::{calculate_cmac, calculate_salt};
use btmesh_crypto::identity::calculate_hash;
use btmesh_crypto::kdf::{calculate_k1, calculate_k2, calculate_k3, calculate_k4};

fn bench_cmac(c: &mut Criterion) {
    let mut group = c.benchmark_group("cmac");

    let key = [0x42u8; 16];
    let data_16 = vec![0xABu8; 16];
    let data_64 = vec![0xABu8; 64];
    let data_1k = vec![0xABu8; 1024];

    for (label, data) in [("16B", &data_16), ("64B", &data_64), ("1KB", &data_1k)] {
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("aes_cmac", label), data, |b, d| {
            b.iter(|| calculate_cmac(d, &key));
        });
    }

    group.bench_function("salt", |b| {
        b.iter(|| calculate_salt(b"smk2"));
    });

    group.finish();
}

fn bench_ccm(c: &mut Criterion) {
    let mut group = c.benchmark_group("ccm");

    let key = [0x42u8; 16];
    let nonce = [0x13u8; 13];
    let data_11 = vec![0xABu8; 11];
    let data_380 = vec![0xABu8; 380];

    for (label, data) in [("11B", &data_11), ("380B", &data_380)] {
        group.throughput(Throughput::Bytes(data.len() as u64));
        for mic_size in [4usize, 8] {
            let id = format!("{label}/mic{mic_size}");
            group.bench_with_input(BenchmarkId::new("encrypt", &id), data, |b, d| {
                b.iter(|| encrypt_ccm(d, &key, &nonce, None, mic_size).unwrap());
            });

            let ct = encrypt_ccm(data, &key, &nonce, None, mic_size).unwrap();
            group.bench_with_input(BenchmarkId::new("decrypt", &id), &ct, |b, d| {
                b.iter(|| decrypt_ccm(d, &key, &nonce, None, mic_size).unwrap());
            });
        }
    }

    group.finish();
}

fn bench_kdf(c: &mut Criterion) {
    let mut group = c.benchmark_group("kdf");

    let net_key = [0x7Du8; 16];
    let salt = calculate_salt(b"nkik");

    group.bench_function("k1", |b| {
        b.iter(|| calculate_k1(&net_key, &salt, b"id128\x01"));
    });
    group.bench_function("k2", |b| {
        b.iter(|| calculate_k2(&net_key, &[0x00]));
    });
    group.bench_function("k3", |b| {
        b.iter(|| calculate_k3(&net_key));
    });
    group.bench_function("k4", |b| {
        b.iter(|| calculate_k4(&net_key).unwrap());
    });
    group.bench_function("secure_network_beacon", |b| {
        b.iter(|| create_secure_network_beacon(&net_key, 0x00, &[0x3E; 8], 0x1234_5678));
    });
    group.bench_function("node_identity_hash", |b| {
        b.iter(|| calculate_hash(&net_key, &[0x34; 8], &[0x12, 0x01]));
    });

    group.finish();
}

criterion_group!(benches, bench_cmac, bench_ccm, bench_kdf);
criterion_main!(benches);
