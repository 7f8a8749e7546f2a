#![cfg(feature = "enabled")]

use std::thread;

use cpdiag::{
    Failure,
    capture,
    catch,
    config::ColorChoice,
    cp_assert,
    cp_debug,
    cp_unreachable,
    cp_warning,
    flags::with_color,
    location,
};
use pretty_assertions::assert_eq;

fn plain<R>(f: impl FnOnce() -> R) -> (R, String) {
    with_color(ColorChoice::Never, || capture(f))
}

#[test]
fn location_is_file_and_line() {
    assert_eq!(location!(), concat!("tests/macros.rs:", line!()));
}

#[test]
fn passing_assertion_is_silent() {
    let (caught, out) = plain(|| catch(|| cp_assert!(2 + 2 == 4)));
    assert!(caught.is_ok());
    assert!(out.is_empty());
}

#[test]
fn failing_assertion_reports_and_raises() {
    let (caught, out) = plain(|| catch(|| cp_assert!(2 + 2 == 5, "math is broken")));
    let line = line!() - 1;

    assert_eq!(out, format!("tests/macros.rs:{line}: assertion check failed: math is broken\n"));
    let failure = caught.unwrap_err();
    assert_eq!(failure.to_string(), format!("tests/macros.rs:{line}: math is broken"));
    assert_eq!(failure.location(), Some(format!("tests/macros.rs:{line}").as_str()));
}

#[test]
fn colored_assertion_line() {
    let (_, out) = with_color(ColorChoice::Always, || capture(|| catch(|| cp_assert!(false, "x"))));
    let line = line!() - 1;

    assert_eq!(
        out,
        format!("\x1b[1;1mtests/macros.rs:{line}: \x1b[0m\x1b[1;31massertion check failed: \x1b[0mx\n")
    );
}

#[test]
fn warning_on_non_empty_list() {
    let list = vec![1];
    let (caught, out) = plain(|| catch(|| cp_warning!(list.is_empty())));
    let line = line!() - 1;

    assert!(caught.is_ok());
    assert_eq!(out, format!("tests/macros.rs:{line}: warning check failed: list.is_empty()\n"));
}

#[test]
fn debug_prints_sum() {
    let (x, y) = (3, 4);
    let ((), out) = plain(|| cp_debug!(x + y));
    let line = line!() - 1;

    assert_eq!(out, format!("tests/macros.rs:{line}: debug: x + y = 7\n"));
}

#[test]
fn colored_debug_and_unreachable_labels() {
    let ((), out) = with_color(ColorChoice::Always, || capture(|| cp_debug!(1)));
    assert!(out.contains("\x1b[1;33mdebug: \x1b[0m1 = 1\n"), "{out:?}");

    let (_, out) = with_color(ColorChoice::Always, || capture(|| catch(|| -> () { cp_unreachable!("gone") })));
    assert!(out.contains("\x1b[1;31munreachable code. \x1b[0mgone\n"), "{out:?}");
}

#[test]
fn unreachable_raises_every_time() {
    for _ in 0..3 {
        let (caught, out) = plain(|| catch(|| -> () { cp_unreachable!() }));
        assert_eq!(out.lines().count(), 1);
        assert!(caught.unwrap_err().to_string().ends_with(": Failure"));
    }
}

#[test]
fn failure_is_a_std_error() {
    let (caught, _) = plain(|| catch(|| cp_assert!(1 > 2)));
    let err: Box<dyn std::error::Error> = Box::new(caught.unwrap_err());
    assert!(err.to_string().ends_with(": 1 > 2"));
}

#[test]
fn raised_failure_propagates_through_frames() {
    fn inner(n: u32) -> u32 {
        cp_assert!(n != 0, "zero reached");
        inner(n - 1) + 1
    }

    let (caught, out) = plain(|| catch(|| inner(5)));
    assert_eq!(caught.unwrap_err().message(), "zero reached");
    assert_eq!(out.lines().count(), 1);
}

#[test]
fn threads_capture_their_own_lines() {
    let handles = (0..4)
        .map(|i| {
            thread::spawn(move || {
                let ((), out) = plain(|| {
                    for _ in 0..10 {
                        cp_debug!(i);
                    }
                });
                out
            })
        })
        .collect::<Vec<_>>();

    for (i, handle) in handles.into_iter().enumerate() {
        let out = handle.join().unwrap();
        assert_eq!(out.lines().count(), 10);
        assert!(out.lines().all(|l| l.ends_with(&format!("debug: i = {i}"))));
    }
}

#[test]
fn manual_failure_matches_macro_payload() {
    let (caught, _) = plain(|| catch(|| -> () { cp_unreachable!("same") }));
    let caught = caught.unwrap_err();
    assert_eq!(caught, Failure::new("same", caught.location()));
}
