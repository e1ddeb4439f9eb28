use carp_core::errors::{CarpError, ErrorInfo};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("id", "1")
        .with_context("reason", "example")
}

#[test]
fn invalid_input_error_surface() {
    let err = CarpError::InvalidInput(sample_info("I001", "burn_in >= max_iter"));
    assert_eq!(err.info().code, "I001");
    assert!(err.info().context.contains_key("id"));
}

#[test]
fn linalg_error_surface() {
    let err = CarpError::LinAlg(sample_info("L001", "factorization failed"));
    assert_eq!(err.info().code, "L001");
    assert!(err.info().context.contains_key("reason"));
}

#[test]
fn numerical_overflow_error_surface() {
    let err = CarpError::NumericalOverflow(sample_info("N001", "non-finite entry"));
    assert_eq!(err.info().code, "N001");
}
