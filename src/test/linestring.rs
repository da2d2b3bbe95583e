use geo::{line_string, LineString};

pub(crate) fn ls0() -> LineString {
    line_string![
        (x: 42., y: 42.),
        (x: 1., y: 1.),
    ]
}

pub(crate) fn ls1() -> LineString {
    line_string![
        (x: 1., y: 1.),
        (x: 2., y: 2.),
    ]
}
