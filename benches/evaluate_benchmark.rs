use bumpalo::Bump;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use exprtool::config::{Associativity, EvalConfig};
use exprtool::engine::{Evaluator, evaluate};
use exprtool::eval::compute_with;
use exprtool::source::{Bindings, NoVariables};

fn bench_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluation");

    let expressions = vec![
        "2 + 3 * 4",
        "(1.5 + 2.5) * (3.25 - 1.75) / 2",
        "((((1 + 2) * 3) - 4) / 5) + 6 * 7 - 8 / 9",
        "10 / 2 / 5 + 100 - 50 - 25 * 2 * 3",
    ];

    group.bench_function("evaluate_numeric", |b| {
        b.iter(|| {
            for expr in &expressions {
                black_box(evaluate(black_box(expr), &mut NoVariables).unwrap());
            }
        });
    });

    group.bench_function("evaluator_reused_arena", |b| {
        let config = EvalConfig::new().with_associativity(Associativity::Left);
        let mut evaluator = Evaluator::new(config);
        b.iter(|| {
            for expr in &expressions {
                black_box(evaluator.evaluate(black_box(expr), &mut NoVariables).unwrap());
            }
        });
    });

    group.bench_function("compute_only_shared_arena", |b| {
        let mut arena = Bump::with_capacity(4 * 1024);
        b.iter(|| {
            arena.reset();
            let expr = black_box("((1+2)*3-4)/5+6*7-8/9");
            black_box(compute_with(expr, Associativity::Stack, &arena).unwrap());
        });
    });

    group.bench_function("evaluate_with_variables", |b| {
        let mut vars = Bindings::new();
        for (i, name) in ["a", "b", "c", "d", "e", "f"].iter().enumerate() {
            vars.set(name, (i + 1) as f64).unwrap();
        }
        b.iter(|| {
            black_box(evaluate(black_box("a*b + c/d - (e+f)*a"), &mut vars).unwrap());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_evaluation);
criterion_main!(benches);
