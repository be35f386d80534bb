use std::sync::Arc;
use std::thread;

use account_service::{Account, BankAccount};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn bench_deposit_withdraw(c: &mut Criterion) {
    let account = Account::new();
    account.deposit(1_000_000).unwrap();

    c.bench_function("deposit_then_withdraw", |b| {
        b.iter(|| {
            account.deposit(black_box(10)).unwrap();
            account.withdraw(black_box(10)).unwrap();
        })
    });
}

fn bench_contended_deposits(c: &mut Criterion) {
    let mut group = c.benchmark_group("contended_deposits");
    let per_thread = 1_000;

    for threads in [1usize, 4, 8] {
        group.throughput(Throughput::Elements((threads * per_thread) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(threads), &threads, |b, &threads| {
            b.iter(|| {
                let account = Arc::new(Account::new());
                let handles: Vec<_> = (0..threads)
                    .map(|_| {
                        let account = Arc::clone(&account);
                        thread::spawn(move || {
                            for _ in 0..per_thread {
                                account.deposit(1).unwrap();
                            }
                        })
                    })
                    .collect();
                for handle in handles {
                    handle.join().unwrap();
                }
                black_box(account.balance())
            })
        });
    }
    group.finish();
}

fn bench_print_statement(c: &mut Criterion) {
    let account = Account::new();
    for i in 1..=1_000 {
        account.deposit(i).unwrap();
    }

    c.bench_function("print_statement_1000_rows", |b| {
        b.iter(|| black_box(account.print_statement()))
    });
}

criterion_group!(benches, bench_deposit_withdraw, bench_contended_deposits, bench_print_statement);
criterion_main!(benches);
