//! Benchmarks for wiredis codec operations

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use wiredis::{encode_command, encode_value, ResponseDecoder, Value};

fn codec_benchmarks(c: &mut Criterion) {
    c.bench_function("encode_command_small", |b| {
        b.iter(|| encode_command(black_box(&["set", "user:1000", "some value payload"])))
    });

    // A flat 64-element array of short bulk strings.
    let flat: Vec<Value> = (0..64)
        .map(|i| Value::BulkString(format!("field-{i}")))
        .collect();
    let flat_wire = encode_value(&Value::Array(flat));

    c.bench_function("decode_flat_array", |b| {
        b.iter(|| {
            let mut decoder = ResponseDecoder::new();
            decoder.feed(black_box(&flat_wire)).unwrap();
            decoder.take().unwrap()
        })
    });

    // The same reply fed one CRLF-terminated unit per call, the way a
    // drip-feeding transport would deliver it.
    let mut flat_lines: Vec<Vec<u8>> = Vec::new();
    let mut rest = flat_wire.as_slice();
    while let Some(pos) = rest.windows(2).position(|w| w == b"\r\n") {
        let (line, tail) = rest.split_at(pos + 2);
        flat_lines.push(line.to_vec());
        rest = tail;
    }

    c.bench_function("decode_flat_array_line_at_a_time", |b| {
        b.iter(|| {
            let mut decoder = ResponseDecoder::new();
            for line in &flat_lines {
                decoder.feed(black_box(line)).unwrap();
            }
            decoder.take().unwrap()
        })
    });

    // Sixteen levels of nesting to exercise the closure chain.
    let mut nested = Value::Integer(0);
    for _ in 0..16 {
        nested = Value::Array(vec![Value::SimpleString("level".to_string()), nested]);
    }
    let nested_wire = encode_value(&nested);

    c.bench_function("decode_nested_array", |b| {
        b.iter(|| {
            let mut decoder = ResponseDecoder::new();
            decoder.feed(black_box(&nested_wire)).unwrap();
            decoder.take().unwrap()
        })
    });
}

criterion_group!(benches, codec_benchmarks);
criterion_main!(benches);
