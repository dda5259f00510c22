//! Box construction and text output

use asciibox::{Axis, BoxError, BoxGrid, ProjectionConfig};

#[test]
fn accepts_every_size_from_two_up() {
    for w in 2..12 {
        for h in 2..12 {
            let grid = BoxGrid::create(w, h).unwrap();
            assert_eq!(grid.rows().len(), h);
            assert!(grid.rows().iter().all(|row| row.len() == w));
        }
    }
}

#[test]
fn rejects_invalid_dimensions() {
    assert!(BoxGrid::create(0, 0).is_err());
    assert!(BoxGrid::create(1, 2).is_err());
    assert!(BoxGrid::create(-9, 20.2).is_err());
    assert!(BoxGrid::create("hi", 2).is_err());
    assert!(BoxGrid::create(13, 16).is_ok());
}

#[test]
fn errors_are_distinguishable() {
    assert_eq!(
        BoxGrid::create("hi", 2).unwrap_err(),
        BoxError::InvalidDimensionType {
            axis: Axis::Width,
            value: "hi".to_string(),
        }
    );
    assert_eq!(
        BoxGrid::create(5, 1).unwrap_err(),
        BoxError::InvalidDimensionRange {
            axis: Axis::Height,
            value: 1,
        }
    );
    assert!(matches!(
        BoxGrid::create(-9, 20.2),
        Err(BoxError::InvalidDimensionType { axis: Axis::Height, .. })
    ));
}

#[test]
fn numeric_text_is_accepted() {
    let from_text = BoxGrid::create("4", " 3 ").unwrap();
    assert_eq!(from_text, BoxGrid::new(4, 3).unwrap());
    assert_eq!(BoxGrid::create(4.0, 3.0).unwrap(), from_text);
}

#[test]
fn three_by_three_text() {
    let grid = BoxGrid::create(3, 3).unwrap();
    assert_eq!(grid.to_text(), "┌ - ┐\n|   |\n└ - ┘\n");
}

#[test]
fn flat_box_text() {
    let grid = BoxGrid::create(10, 2).unwrap();
    assert_eq!(
        grid.to_text(),
        "┌ - - - - - - - - ┐\n└ - - - - - - - - ┘\n"
    );
}

#[test]
fn taller_box_snapshot() {
    let grid = BoxGrid::create(5, 4).unwrap();
    insta::assert_snapshot!(grid.to_text(), @r"
    ┌ - - - ┐
    |       |
    |       |
    └ - - - ┘
    ");
}

#[test]
fn narrowest_box_has_no_fill() {
    let grid = BoxGrid::create(2, 5).unwrap();
    for row in grid.rows() {
        assert_eq!(row.len(), 2);
    }
    assert_eq!(grid.rows()[0], vec!['┌', '┐']);
    assert_eq!(grid.rows()[2], vec!['|', '|']);
    assert_eq!(grid.rows()[4], vec!['└', '┘']);
}

#[test]
fn display_matches_to_text() {
    let grid = BoxGrid::create(6, 3).unwrap();
    assert_eq!(format!("{grid}"), grid.to_text());
}

#[test]
fn output_is_stable_across_calls() {
    let grid = BoxGrid::create(7, 5).unwrap();
    assert_eq!(grid.to_text(), grid.to_text());
    let config = ProjectionConfig::default();
    assert_eq!(grid.project(&config), grid.project(&config));
}

#[test]
fn oversized_text_input_is_an_error() {
    assert!(matches!(
        BoxGrid::create("1e18", 2),
        Err(BoxError::TooManyCells { .. })
    ));
    assert!(matches!(
        BoxGrid::new(usize::MAX, usize::MAX),
        Err(BoxError::TooManyCells { .. })
    ));
}

#[test]
fn blank_text_reads_as_zero() {
    assert_eq!(
        BoxGrid::create("", 2).unwrap_err(),
        BoxError::InvalidDimensionRange {
            axis: Axis::Width,
            value: 0,
        }
    );
}
