use recurseq::fibonacci::{self, FibCache};
use recurseq::recurrence;
use recurseq::report::Reporter;
use recurseq::sort::sort_by_fractional_part;

fn main() {
    let mut reporter = Reporter::stdout();
    let mut cache = FibCache::new();

    for n in (10..=510).step_by(50) {
        reporter.observe("fibonacci", &[&n], || cache.get(n));
    }
    println!();

    let naive: Vec<_> = (0..10).map(fibonacci::naive).collect();
    println!("Naive     : {naive:?}");
    println!("Eager(1)  : {:?}", fibonacci::sequence(1));
    println!("Eager(2)  : {:?}", fibonacci::sequence(2));
    println!("Eager(10) : {:?}", fibonacci::sequence(10));
    println!();

    let spam = [(2, 2.1), (3, 3.3), (1, 1.4), (4, 4.2)];
    let eggs = [
        ("foo", 42.6942),
        ("bar", 42.9000),
        ("qux", 69.4269),
        ("yeet", 420.1337),
    ];
    println!("By fraction: {:?}", sort_by_fractional_part(&spam));
    println!("By fraction: {:?}", sort_by_fractional_part(&eggs));
    println!();

    let fibo: Vec<_> = recurrence::fibonacci().take(10).collect();
    println!("Fibonacci    : {fibo:?}");
    let lucas: Vec<_> = recurrence::lucas().take(10).collect();
    println!("Lucas        : {lucas:?}");
    let perrin: Vec<_> = recurrence::perrin().take(10).collect();
    println!("Perrin       : {perrin:?}");
    let hofstadter: Vec<_> = recurrence::hofstadter_q().take(10).collect();
    println!("Hofstadter-Q : {hofstadter:?}");
}
