use mrarray::range::{AxisSelection, Bound};
use mrarray::{RangeErrorKind, Selection};

fn resolve(expr: &str, shape: &[usize]) -> Vec<Vec<usize>> {
    expr.parse::<Selection>().unwrap().resolve(shape).unwrap()
}

fn error(expr: &str, shape: &[usize]) -> (RangeErrorKind, usize) {
    let e = expr
        .parse::<Selection>()
        .and_then(|s| s.resolve(shape))
        .unwrap_err();
    (e.kind(), e.pos())
}

#[test]
fn stepped_slice() {
    assert_eq!(resolve("0:2:5", &[6]), vec![vec![0, 2, 4]]);
    assert_eq!(resolve("1:3:end", &[8]), vec![vec![1, 4, 7]]);
    assert_eq!(resolve("2:2", &[3]), vec![vec![2]]);
}

#[test]
fn items() {
    let sel: Selection = " : , end , [3 1 end] , 1:end ".parse().unwrap();
    assert_eq!(
        sel.axes(),
        &[
            AxisSelection::All,
            AxisSelection::Index(Bound::End),
            AxisSelection::List(vec![Bound::Index(3), Bound::Index(1), Bound::End]),
            AxisSelection::Slice {
                start: Bound::Index(1),
                step: 1,
                end: Bound::End,
            },
        ]
    );
    assert_eq!(
        sel.resolve(&[2, 3, 4, 3, 2]).unwrap(),
        vec![vec![0, 1], vec![2], vec![3, 1, 3], vec![1, 2], vec![0, 1]]
    );
}

#[test]
fn comma_separated_lists() {
    assert_eq!(resolve("[0, 2]", &[3]), vec![vec![0, 2]]);
    assert_eq!(resolve("[2 2 0]", &[3]), vec![vec![2, 2, 0]]);
}

#[test]
fn syntax_errors() {
    assert_eq!(error("", &[3]), (RangeErrorKind::Empty, 0));
    assert_eq!(error("   ", &[3]), (RangeErrorKind::Empty, 0));
    assert_eq!(error("1 x", &[3]), (RangeErrorKind::UnexpectedChar, 2));
    assert_eq!(error("1:", &[3]), (RangeErrorKind::UnexpectedEnd, 2));
    assert_eq!(error("0:0:2", &[3]), (RangeErrorKind::ZeroStep, 2));
    assert_eq!(error("[]", &[3]), (RangeErrorKind::EmptyList, 0));
    assert_eq!(error("[1", &[3]), (RangeErrorKind::UnexpectedEnd, 2));
    assert_eq!(error("1 2", &[3]), (RangeErrorKind::UnexpectedToken, 2));
    assert_eq!(error("endx", &[3]), (RangeErrorKind::UnexpectedChar, 3));
    let many = vec!["0"; 17].join(",");
    assert_eq!(error(&many, &[1; 16]).0, RangeErrorKind::TooManyAxes);
}

#[test]
fn resolve_errors() {
    assert_eq!(error("0, 0", &[3]), (RangeErrorKind::TooManyAxes, 1));
    assert_eq!(error(":, 3", &[3, 3]), (RangeErrorKind::OutOfBounds, 1));
    assert_eq!(error("[0 5]", &[3]), (RangeErrorKind::OutOfBounds, 0));
    assert_eq!(error("2:1", &[3]), (RangeErrorKind::EmptySlice, 0));
}

#[test]
fn display() {
    let e = "1:".parse::<Selection>().unwrap_err();
    assert_eq!(
        e.to_string(),
        "RangeError/UnexpectedEnd at offset 2: unexpected end of expression"
    );
}

#[test]
fn unit_step_slice() {
    let sel: Selection = "1:4".parse().unwrap();
    assert_eq!(
        sel.axes(),
        &[AxisSelection::Slice {
            start: Bound::Index(1),
            step: 1,
            end: Bound::Index(4),
        }]
    );
    assert_eq!(sel.resolve(&[6]).unwrap(), vec![vec![1, 2, 3, 4]]);
    assert_eq!(resolve("end:end, 0:1", &[4, 2]), vec![vec![3], vec![0, 1]]);
}

#[test]
fn integer_overflow() {
    let e = "0, 123456789012345678901234567890".parse::<Selection>().unwrap_err();
    assert_eq!((e.kind(), e.pos()), (RangeErrorKind::Overflow, 3));
    assert_eq!(
        e.to_string(),
        "RangeError/Overflow at offset 3: integer too large for an index"
    );
}
