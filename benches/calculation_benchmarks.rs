//! Performance benchmarks for the payroll engine.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use kenya_payroll::calculation::TaxCalculator;
use kenya_payroll::config::ConfigLoader;
use kenya_payroll::models::Employee;

fn create_calculator() -> TaxCalculator {
    TaxCalculator::kenya().expect("Failed to load statutory rates")
}

/// Builds `count` employees with salaries spread across every PAYE band.
fn create_employees(count: usize) -> Vec<Employee> {
    (0..count)
        .map(|i| {
            let basic = Decimal::from(5_000 + (i as i64 * 7_919) % 1_200_000);
            Employee::new(format!("E{:05}", i), "Bench", basic, Decimal::from(2_500))
        })
        .collect()
}

/// Benchmark: loading the embedded rate tables.
fn bench_config_load(c: &mut Criterion) {
    c.bench_function("config_load", |b| {
        b.iter(|| black_box(ConfigLoader::kenya().unwrap()))
    });
}

/// Benchmark: PAYE alone at a salary in each band.
fn bench_paye(c: &mut Criterion) {
    let calculator = create_calculator();
    let mut group = c.benchmark_group("paye");

    for taxable in [10_000i64, 40_000, 250_000, 650_000, 2_000_000] {
        let taxable = Decimal::from(taxable);
        group.bench_with_input(BenchmarkId::from_parameter(taxable), &taxable, |b, t| {
            b.iter(|| black_box(calculator.compute_paye(*t).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark: a full payroll computation for one employee.
fn bench_single_payroll(c: &mut Criterion) {
    let calculator = create_calculator();
    let basic = Decimal::from(80_000);
    let allowances = Decimal::from(10_000);

    c.bench_function("single_payroll", |b| {
        b.iter(|| black_box(calculator.compute_payroll(basic, allowances).unwrap()))
    });
}

/// Benchmark: payslips for batches of employees.
fn bench_batch_payslips(c: &mut Criterion) {
    let calculator = create_calculator();
    let mut group = c.benchmark_group("batch_payslips");

    for size in [100usize, 1000] {
        let employees = create_employees(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &employees, |b, employees| {
            b.iter(|| {
                let payslips: Vec<_> = employees
                    .iter()
                    .map(|e| calculator.payslip(e).unwrap())
                    .collect();
                black_box(payslips)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_config_load,
    bench_paye,
    bench_single_payroll,
    bench_batch_payslips
);
criterion_main!(benches);
