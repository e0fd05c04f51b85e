use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::{Deserialize, Serialize};
use serde_xini::{decode, encode, from_str, to_string, Parser, Value};

#[derive(Serialize, Deserialize, Clone)]
struct Server {
    host: String,
    port: u16,
    workers: u32,
    debug: bool,
}

#[derive(Serialize, Deserialize, Clone)]
struct Database {
    url: String,
    pool_size: u32,
    timeout: f64,
    replicas: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone)]
struct Config {
    name: String,
    version: String,
    tags: Vec<String>,
    server: Server,
    database: Database,
}

fn sample_config() -> Config {
    Config {
        name: "inventory".to_string(),
        version: "2.4.1".to_string(),
        tags: vec!["prod".to_string(), "eu-west".to_string()],
        server: Server {
            host: "0.0.0.0".to_string(),
            port: 8080,
            workers: 16,
            debug: false,
        },
        database: Database {
            url: "postgres://db.internal/inventory".to_string(),
            pool_size: 32,
            timeout: 2.5,
            replicas: vec!["r1.internal".to_string(), "r2.internal".to_string()],
        },
    }
}

/// A document with `sections` sections of ten mixed entries each.
fn generated_document(sections: usize) -> String {
    let mut text = String::from("name = generated\ncount = 42\n");
    for s in 0..sections {
        text.push_str(&format!("\n[section_{}]\n", s));
        for k in 0..10 {
            match k % 5 {
                0 => text.push_str(&format!("int_{} = {}\n", k, s * k)),
                1 => text.push_str(&format!("float_{} = {}.5\n", k, k)),
                2 => text.push_str(&format!("list_{} = [a, {}, 3.5, true]\n", k, k)),
                3 => text.push_str(&format!("map[key_{}] = \"value {}\"\n", k, k)),
                _ => text.push_str(&format!("items[] = item {}\n", k)),
            }
        }
    }
    text
}

fn benchmark_serialize_struct(c: &mut Criterion) {
    let config = sample_config();

    c.bench_function("serialize_struct", |b| {
        b.iter(|| to_string(black_box(&config)))
    });
}

fn benchmark_deserialize_struct(c: &mut Criterion) {
    let ini = to_string(&sample_config()).unwrap();

    c.bench_function("deserialize_struct", |b| {
        b.iter(|| from_str::<Config>(black_box(&ini)))
    });
}

fn benchmark_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for size in [1, 10, 100, 500].iter() {
        let text = generated_document(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| decode(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for size in [1, 10, 100, 500].iter() {
        let doc = decode(&generated_document(*size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            b.iter(|| encode(black_box(doc)))
        });
    }
    group.finish();
}

fn benchmark_multiline(c: &mut Criterion) {
    let body: Vec<String> = (0..200).map(|i| format!("  line number {}", i)).collect();
    let text = format!("text = '''\n{}\n'''\nafter = 1", body.join("\n"));

    c.bench_function("decode_multiline", |b| b.iter(|| decode(black_box(&text))));
}

fn benchmark_interceptors(c: &mut Criterion) {
    let text = generated_document(50);
    let plain = Parser::new();
    let mut intercepted = Parser::new();
    intercepted.add_interceptor(|value, _| {
        Ok(match value {
            Value::String(s) => Value::String(s.to_uppercase()),
            other => other,
        })
    });

    let mut group = c.benchmark_group("interceptors");
    group.bench_function("none", |b| b.iter(|| plain.parse(black_box(&text))));
    group.bench_function("uppercase", |b| {
        b.iter(|| intercepted.parse(black_box(&text)))
    });
    group.finish();
}

fn benchmark_comparison_with_json(c: &mut Criterion) {
    let config = sample_config();

    let mut group = c.benchmark_group("comparison");

    group.bench_function("ini_serialize", |b| {
        b.iter(|| serde_xini::to_string(black_box(&config)))
    });

    group.bench_function("json_serialize", |b| {
        b.iter(|| serde_json::to_string(black_box(&config)))
    });

    let ini_str = serde_xini::to_string(&config).unwrap();
    let json_str = serde_json::to_string(&config).unwrap();

    group.bench_function("ini_deserialize", |b| {
        b.iter(|| serde_xini::from_str::<Config>(black_box(&ini_str)))
    });

    group.bench_function("json_deserialize", |b| {
        b.iter(|| serde_json::from_str::<Config>(black_box(&json_str)))
    });

    group.finish();
}

fn benchmark_roundtrip(c: &mut Criterion) {
    let config = sample_config();

    c.bench_function("roundtrip_struct", |b| {
        b.iter(|| {
            let serialized = to_string(black_box(&config)).unwrap();
            let _deserialized: Config = from_str(black_box(&serialized)).unwrap();
        })
    });
}

criterion_group!(
    benches,
    benchmark_serialize_struct,
    benchmark_deserialize_struct,
    benchmark_decode,
    benchmark_encode,
    benchmark_multiline,
    benchmark_interceptors,
    benchmark_comparison_with_json,
    benchmark_roundtrip
);
criterion_main!(benches);
