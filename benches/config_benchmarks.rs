use criterion::{black_box, criterion_group, criterion_main, Criterion};
use odoodev::config::{aggregate_paths, parse_config, ADDONS_SUFFIX, ODOO_REPO};
use odoodev::settings::{build_settings, to_pretty_json};

const CONFIG_YAML: &str = r#"
repos:
  odoo: /src/odoo
  enterprise: /src/enterprise
  oca:
    - /src/oca/web
    - /src/oca/server-tools
    - /src/oca/account-financial-tools
  custom: /src/custom
python: "3.11"
"#;

fn bench_config_parse(c: &mut Criterion) {
    c.bench_function("config_from_yaml", |b| {
        b.iter(|| parse_config(black_box(CONFIG_YAML)))
    });
}

fn bench_aggregate(c: &mut Criterion) {
    let config = parse_config(CONFIG_YAML).unwrap();

    c.bench_function("aggregate_paths", |b| {
        b.iter(|| aggregate_paths(black_box(&config), ODOO_REPO, ADDONS_SUFFIX))
    });
}

fn bench_settings(c: &mut Criterion) {
    let config = parse_config(CONFIG_YAML).unwrap();
    let paths = aggregate_paths(&config, ODOO_REPO, ADDONS_SUFFIX).unwrap();

    c.bench_function("build_settings", |b| {
        b.iter(|| build_settings(black_box(&paths), "/src/odoo"))
    });

    let settings = build_settings(&paths, "/src/odoo");
    c.bench_function("settings_to_pretty_json", |b| {
        b.iter(|| to_pretty_json(black_box(&settings)))
    });
}

criterion_group!(benches, bench_config_parse, bench_aggregate, bench_settings);
criterion_main!(benches);
