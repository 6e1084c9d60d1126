use slicewise::{Operation, Slicewise};
use slicewise_demos::common::{init_tracing, print_series};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=info,slicewise=debug,slicewise_core=trace
    init_tracing();

    let (a, b) = slicewise_mock::scenario();
    let sw = Slicewise::builder().build();

    let (sum, report) = sw.combine_with_report(Operation::Add, &a, &b)?;
    tracing::info!(?report, "demo finished");

    print_series(&sum);
    Ok(())
}
