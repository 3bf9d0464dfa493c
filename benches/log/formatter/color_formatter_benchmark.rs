use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use logx::log::{ColorFormatter, ColorFormatterConfig, LogFormatter, LogLevel, LogRecord};

fn benchmark_formatter(c: &mut Criterion) {
    let formatter_colored = ColorFormatter::new(ColorFormatterConfig {
        truncate_width: Some(15),
        colored: true,
    });
    let formatter_plain = ColorFormatter::new(ColorFormatterConfig {
        truncate_width: None,
        colored: false,
    });

    // 基础记录
    let basic_record = LogRecord::new(
        LogLevel::Info,
        "app.main".to_string(),
        "This is a test message".to_string(),
    );

    // 长名称记录，触发控制台截断
    let record_with_long_name = LogRecord::new(
        LogLevel::Error,
        "very.deep.hierarchy.of.modules.leaf".to_string(),
        "Error occurred in module".to_string(),
    );

    // 长消息记录
    let long_message = "A".repeat(1000);
    let record_with_long_message =
        LogRecord::new(LogLevel::Warning, "app.main".to_string(), long_message);

    let mut group = c.benchmark_group("color_formatter");

    // Baseline: 什么都不做的基准测试
    group.bench_function("baseline", |b| {
        b.iter(|| {
            black_box(());
        })
    });

    // 测试不同场景
    let cases: [(&str, &LogRecord); 3] = [
        ("basic", &basic_record),
        ("with_long_name", &record_with_long_name),
        ("with_long_message", &record_with_long_message),
    ];

    for (name, record) in cases {
        group.bench_with_input(
            BenchmarkId::new("plain", name),
            record,
            |b, record: &LogRecord| {
                b.iter(|| black_box(formatter_plain.format(black_box(record)).unwrap()))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("colored", name),
            record,
            |b, record: &LogRecord| {
                b.iter(|| black_box(formatter_colored.format(black_box(record)).unwrap()))
            },
        );
    }

    group.finish();
}

fn benchmark_throughput(c: &mut Criterion) {
    let formatter = ColorFormatter::new(ColorFormatterConfig {
        truncate_width: Some(15),
        colored: true,
    });

    let mut group = c.benchmark_group("throughput");
    group.throughput(criterion::Throughput::Elements(1));

    // Baseline: 什么都不做的基准测试
    group.bench_function("baseline", |b| {
        b.iter(|| {
            black_box(());
        })
    });

    // 测试不同级别的吞吐量
    for level in [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Critical,
    ] {
        let record = LogRecord::new(
            level,
            "app.bench".to_string(),
            "Benchmark message".to_string(),
        );

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:?}", level)),
            &record,
            |b, record| b.iter(|| black_box(formatter.format(black_box(record)).unwrap())),
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_formatter, benchmark_throughput);
criterion_main!(benches);
