use crate::Fixture;

/// Small hand-written series addressed by name.
pub fn by_name(name: &str) -> Option<Fixture> {
    match name {
        "two_segments" => Some(build(&[
            (0.0, 1.0, 0.1),
            (1.0, 1.2, 0.1),
            (2.0, 0.9, 0.1),
            (10.0, 2.0, 0.2),
            (11.0, 2.1, 0.2),
            (12.0, 1.9, 0.2),
        ])),
        "constant" => Some(build(&[
            (0.0, 5.0, 0.5),
            (1.0, 5.0, 0.5),
            (2.0, 5.0, 0.5),
            (3.0, 5.0, 0.5),
            (4.0, 5.0, 0.5),
        ])),
        "spike" => Some(build(&[
            (0.0, 1.0, 0.1),
            (1.0, 1.1, 0.1),
            (2.0, 0.9, 0.1),
            (3.0, 1.0, 0.1),
            (4.0, 10.0, 0.1),
            (5.0, 1.0, 0.1),
            (6.0, 1.1, 0.1),
            (7.0, 0.9, 0.1),
            (8.0, 1.0, 0.1),
        ])),
        "clustered" => Some(build(&[
            (0.00, 1.0, 0.1),
            (0.05, 1.2, 0.2),
            (0.10, 1.1, 0.1),
            (3.00, 2.0, 0.1),
            (3.02, 2.2, 0.1),
            (7.50, 3.0, 0.3),
        ])),
        _ => None,
    }
}

fn build(rows: &[(f64, f64, f64)]) -> Fixture {
    Fixture {
        times: rows.iter().map(|r| r.0).collect(),
        values: rows.iter().map(|r| r.1).collect(),
        uncertainties: rows.iter().map(|r| r.2).collect(),
    }
}
