//! Runs every seed fixture through a traced binary search and prints the steps.
//!
//! Set `RUST_LOG=halving_observers=trace` to also see the structured log
//! records emitted by `LogObserver`.

use halving_observers::LogObserver;
use halving_search::binary_search::{self, Event, Recorder, SearchResult};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let info = binary_search::complexity_info();
    println!(
        "binary search: {} time, {} space (best {}, worst {})\n",
        info.time_complexity, info.space_complexity, info.best_case, info.worst_case
    );

    for case in binary_search::fixtures() {
        let mut observers = (Recorder::for_len(case.data.len()), LogObserver::new(case.name));

        let searched = binary_search::search_observed(&case.data, case.target, &mut observers);
        let outcome = match searched {
            Ok(outcome) => outcome,
            Err(err) => {
                eprintln!("{}: {err}", case.name);
                continue;
            }
        };

        let (recorder, _) = observers;
        let result = SearchResult::assemble(outcome, recorder.into_events());
        let verdict = if case.accepts(result.index) {
            "ok"
        } else {
            "UNEXPECTED"
        };

        println!(
            "{} {:?} target={} -> index={:?} comparisons={} [{verdict}]",
            case.name, case.data, case.target, result.index, result.comparison_count
        );
        for step in &result.trace {
            println!("  {:>2}. {}", step.sequence_number(), step.description());
        }
        println!();
    }

    // Observers can also be plain closures.
    let data = [2.0, 4.0, 8.0, 16.0];
    let mut compares = 0;
    let mut count_compares = |event: &Event| {
        if matches!(event, Event::Compare { .. }) {
            compares += 1;
        }
    };
    if let Ok(outcome) = binary_search::search_observed(&data, 16.0, &mut count_compares) {
        println!(
            "closure saw {compares} comparisons, search reported {}",
            outcome.comparisons
        );
    }
}
