use floatchat_auth::{
    AuthError, AuthSession, FakeAuthApi, KeyValueStorage, ManualWallClock, MemoryStorage,
    SessionIdentity, DEMO_EMAIL, DEMO_PASSWORD,
};
use std::rc::Rc;

fn open(storage: &Rc<MemoryStorage>) -> AuthSession {
    let clock = Rc::new(ManualWallClock::new(0));
    let api = FakeAuthApi::new(storage.clone(), clock).expect("seed");
    AuthSession::new(api, storage.clone())
}

#[test]
fn login_survives_reopen_and_logout_clears_it() {
    let storage = Rc::new(MemoryStorage::new());

    let mut session = open(&storage);
    assert!(!session.is_authenticated());
    session.login(DEMO_EMAIL, DEMO_PASSWORD).expect("login");

    let mut reopened = open(&storage);
    assert_eq!(
        reopened.current_user().map(|user| user.email),
        Some(DEMO_EMAIL.to_owned())
    );

    reopened.logout();
    assert!(open(&storage).current_user().is_none());
}

#[test]
fn failed_login_keeps_session_signed_out() {
    let storage = Rc::new(MemoryStorage::new());
    let mut session = open(&storage);

    let err = session.login(DEMO_EMAIL, "nope").expect_err("bad password");
    assert!(matches!(err, AuthError::InvalidCredentials));
    assert!(session.user().is_none());
    assert!(storage.get_item("auth_user").is_none());
}

#[test]
fn corrupt_session_record_is_discarded() {
    let storage = Rc::new(MemoryStorage::new());
    storage.set_item("auth_user", "not-json".to_owned());

    let session = open(&storage);
    assert!(session.current_user().is_none());
    assert!(storage.get_item("auth_user").is_none());
}

#[test]
fn corrupt_user_table_surfaces_storage_error() {
    let storage = Rc::new(MemoryStorage::new());
    storage.set_item("demo_users", "{".to_owned());
    let clock = Rc::new(ManualWallClock::new(0));

    let err = FakeAuthApi::new(storage.clone(), clock).expect_err("corrupt");
    assert!(matches!(err, AuthError::Storage(_)));
    assert!(err.to_string().contains("demo_users"));
}

#[test]
fn reset_flow_changes_login_password() {
    let storage = Rc::new(MemoryStorage::new());
    let mut session = open(&storage);

    let token = session
        .api()
        .request_password_reset(DEMO_EMAIL)
        .expect("token");
    floatchat_auth::validate_new_password("hunter22", "hunter22").expect("valid");
    session
        .api()
        .reset_password(&token, "hunter22")
        .expect("reset");

    assert!(session.login(DEMO_EMAIL, DEMO_PASSWORD).is_err());
    assert!(session.login(DEMO_EMAIL, "hunter22").is_ok());
}
