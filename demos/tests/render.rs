use slicewise_demos::common::{Rendered, render};

#[test]
fn renders_fixture_a_in_time_order() {
    let a = slicewise_mock::series("A").unwrap();
    let expected = "\
Time series from 03.01.2023 00:00 to 08.01.2023 00:00
Start: 03.01.2023 00:00, End: 05.01.2023 00:00, Value: 2.0
Start: 06.01.2023 00:00, End: 07.01.2023 00:00, Value: 3.0
";
    assert_eq!(render(&a), expected);
}

#[test]
fn renders_empty_series_as_header_only() {
    let empty = slicewise_mock::series("EMPTY").unwrap();
    assert_eq!(
        render(&empty),
        "Time series from 01.01.2023 00:00 to 31.01.2023 00:00\n"
    );
}

#[test]
fn display_adapter_matches_render() {
    let step = slicewise_mock::series("STEP").unwrap();
    let shown = format!("{}", Rendered(&step));
    assert_eq!(shown, render(&step));
    assert_eq!(shown.lines().count(), 1 + step.len());
}
