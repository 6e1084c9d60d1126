use slicewise::Slicewise;
use slicewise_demos::common::print_series;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (a, b) = slicewise_mock::scenario();
    let sw = Slicewise::builder().build();

    let sum = sw.add(&a, &b)?;

    println!("## A");
    print_series(&a);
    println!("\n## B");
    print_series(&b);
    println!("\n## A + B");
    print_series(&sum);
    Ok(())
}
