use slicewise::{Operation, Slicewise, SlicewiseConfig};
use slicewise_core::{coalesce, combine_slices};
use slicewise_demos::common::print_series;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg: SlicewiseConfig = serde_json::from_str(r#"{ "bounds": "Legacy" }"#)?;
    let sw = Slicewise::builder().config(cfg).build();
    println!("config: {:?}", sw.config());

    let step = slicewise_mock::series("STEP").ok_or("missing STEP fixture")?;
    let flat = slicewise_mock::series("FLAT").ok_or("missing FLAT fixture")?;

    // Engine view: the passes before and after merging abutting equal values.
    let raw = combine_slices(&step, &flat, Operation::Subtract);
    let raw_len = raw.len();
    let merged = coalesce(raw);
    println!("engine: {raw_len} raw slices, {} coalesced", merged.len());

    let (diff, report) = sw.combine_with_report(Operation::Subtract, &step, &flat)?;
    println!(
        "{} -> {} raw slices, {} after coalescing ({} merged away)",
        report.operation,
        report.raw_slices,
        report.result_slices,
        report.merged_away()
    );
    print_series(&diff);
    Ok(())
}
