use slicewise::Slicewise;
use slicewise_demos::common::print_series;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (a, b) = slicewise_mock::scenario();
    let sw = Slicewise::builder().build();

    println!("## A - B");
    print_series(&sw.subtract(&a, &b)?);
    println!("\n## B - A");
    print_series(&sw.subtract(&b, &a)?);
    Ok(())
}
