//! Global installation runs in its own test binary so no other test
//! shares the process-wide subscriber.

use rolling_logger::{init, InitError};

#[test]
fn second_init_is_an_error_and_keeps_the_first_layer() {
    let buffer = init(16, None).expect("first init installs the layer");

    let second = init(16, None);
    assert!(matches!(second, Err(InitError::AlreadyInitialized(_))));

    tracing::info!(target: "novilist::test", attempt = 2, "still logging");
    let records = buffer.snapshot();
    assert!(records
        .iter()
        .any(|r| r.target == "novilist::test" && r.message == "still logging attempt=2"));
}
