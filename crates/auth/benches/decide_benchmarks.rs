use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use warden_auth::{AccessControlConfiguration, AccessRuleConfiguration, Authorizer};

/// Rule set with `n` exact rules followed by one wildcard rule.
fn authorizer_with_rules(n: usize) -> Authorizer {
    let mut rules: Vec<AccessRuleConfiguration> = (0..n)
        .map(|i| AccessRuleConfiguration::new(format!("app{i}.example.com"), "single_factor"))
        .collect();
    rules.push(AccessRuleConfiguration::new("*.example.com", "two_factor"));

    Authorizer::from_config(&AccessControlConfiguration {
        default_policy: "deny".to_string(),
        rules,
    })
    .unwrap()
}

fn bench_decide(c: &mut Criterion) {
    let mut group = c.benchmark_group("decide");

    for n in [10usize, 100, 1_000] {
        let authorizer = authorizer_with_rules(n);

        group.bench_with_input(BenchmarkId::new("first_rule", n), &n, |b, _| {
            b.iter(|| authorizer.rule_set().decide(black_box("app0.example.com")))
        });

        group.bench_with_input(BenchmarkId::new("wildcard_tail", n), &n, |b, _| {
            b.iter(|| authorizer.rule_set().decide(black_box("other.example.com")))
        });

        group.bench_with_input(BenchmarkId::new("default_policy", n), &n, |b, _| {
            b.iter(|| authorizer.rule_set().decide(black_box("unmatched.org")))
        });
    }

    group.finish();
}

fn bench_requires_second_factor(c: &mut Criterion) {
    let authorizer = authorizer_with_rules(1_000);
    c.bench_function("requires_second_factor_anywhere/1000", |b| {
        b.iter(|| black_box(&authorizer).requires_second_factor_anywhere())
    });
}

criterion_group!(benches, bench_decide, bench_requires_second_factor);
criterion_main!(benches);
