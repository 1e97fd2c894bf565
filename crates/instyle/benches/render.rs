use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use instyle::Styler;

const NO_STYLE: &str = "[tag] sending request 3.2 second ago... log id: 10298402358";
const WITH_STYLE: &str = "[~bold][tag][/] sending request [~faint]3.2 seconds ago...[/] [~bold][~cyan]log id:[/] [~magenta]10298402358[/][/]";

fn generate_nested(size: usize) -> String {
    let fragments = [
        "[~italic]this text is ",
        "[~bold]bold ",
        "[~red+underline]red[/]",
        "-ish[/]",
        " and italic[/] ",
        "[~38+5+208]orange[/] plain ",
    ];

    let mut text = String::with_capacity(size);
    let mut i = 0;
    while text.len() < size {
        text.push_str(fragments[i % fragments.len()]);
        i += 1;
    }
    text
}

fn bench_baseline(c: &mut Criterion) {
    let mut group = c.benchmark_group("baseline");

    // A plain copy into a pre-sized buffer, the floor for rendering.
    group.bench_function("copy", |b| {
        b.iter(|| {
            let input = black_box(NO_STYLE);
            let mut out = String::with_capacity(input.len());
            out.push_str(input);
            out
        });
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let styler = Styler::new();
    let mut group = c.benchmark_group("render");

    group.bench_function("no_style", |b| {
        b.iter(|| styler.render(black_box(NO_STYLE)));
    });

    group.bench_function("with_style", |b| {
        b.iter(|| styler.render(black_box(WITH_STYLE)));
    });

    group.bench_function("with_style_owned_input", |b| {
        b.iter(|| {
            let input = black_box(WITH_STYLE).to_string();
            styler.render(&input)
        });
    });

    group.bench_function("apply", |b| {
        b.iter(|| styler.apply(black_box("[~bold]%s[/] took %dms"), &[&"request", &42]));
    });

    group.finish();
}

fn bench_render_throughput(c: &mut Criterion) {
    let styler = Styler::new();
    let mut group = c.benchmark_group("render_throughput");

    for size in [1024, 10 * 1024, 100 * 1024] {
        let nested = generate_nested(size);
        group.throughput(Throughput::Bytes(nested.len() as u64));
        group.bench_function(format!("nested_{size}"), |b| {
            b.iter(|| styler.render(black_box(&nested)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_baseline, bench_render, bench_render_throughput);
criterion_main!(benches);
