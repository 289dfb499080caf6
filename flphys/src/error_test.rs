use super::*;

#[test]
fn codes_are_stable() {
    assert_eq!(PhysError::NullPtr.code(), -1);
    assert_eq!(PhysError::ZeroDist.code(), -2);
    assert_eq!(PhysError::ZeroMass.code(), -3);
}

#[test]
fn from_code_inverts_code() {
    for err in [PhysError::NullPtr, PhysError::ZeroDist, PhysError::ZeroMass] {
        assert_eq!(PhysError::from_code(err.code()), Some(err));
    }
}

#[test]
fn from_code_rejects_success_and_unknown() {
    assert_eq!(PhysError::from_code(RES_OK), None);
    assert_eq!(PhysError::from_code(-42), None);
}

#[test]
fn strerror_matches_display() {
    for err in [PhysError::NullPtr, PhysError::ZeroDist, PhysError::ZeroMass] {
        assert_eq!(strerror(err.code()), err.to_string());
    }
}

#[test]
fn strerror_success_and_unknown() {
    assert_eq!(strerror(RES_OK), "Success");
    assert_eq!(strerror(7), "Unknown error code");
}
