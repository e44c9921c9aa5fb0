use cwl_decoder::LogsDecoder;
use cwl_driver::TextReporter;
use cwl_encoder::LogBatchEncoder;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

fn payload_with_events(count: i64) -> String {
    let mut encoder = LogBatchEncoder::new(
        "/aws/lambda/orders",
        "2024/01/15/[$LATEST]0f1e2d3c4b5a69788796a5b4c3d2e1f0",
        "123456789012",
    );
    encoder.add_subscription_filter("LambdaStream_orders");
    for i in 0..count {
        encoder.add_event(
            1_705_312_800_000 + i,
            format!(r#"{{"level":"info","msg":"order created","orderId":{i}}}"#),
            format!("{:056}", i),
        );
    }
    encoder.encode().unwrap()
}

fn bench_decode_small(c: &mut Criterion) {
    let payload = payload_with_events(1);
    let decoder = LogsDecoder::new();

    c.bench_function("decode_small", |b| {
        b.iter(|| decoder.decode(&payload).unwrap());
    });
}

fn bench_decode_scaling(c: &mut Criterion) {
    let decoder = LogsDecoder::new();
    let mut group = c.benchmark_group("decode_scaling");

    for count in [10_i64, 100, 1_000, 10_000] {
        let payload = payload_with_events(count);
        group.throughput(Throughput::Bytes(payload.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &payload, |b, p| {
            b.iter(|| decoder.decode(p).unwrap());
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let batch = LogsDecoder::new()
        .decode(&payload_with_events(1_000))
        .unwrap()
        .batch;

    c.bench_function("render_1000_events", |b| {
        b.iter(|| TextReporter::render(&batch));
    });
}

criterion_group!(benches, bench_decode_small, bench_decode_scaling, bench_render);
criterion_main!(benches);
