use sanctuary_domain::journey::JourneyStage;
use sanctuary_platform::error::PlatformError;
use sanctuary_platform::usecase::account::{
    SignInUseCase, SignOutUseCase, SignUpInput, SignUpUseCase,
};

use crate::helpers::MockAuthService;

fn sign_up_form() -> SignUpInput {
    SignUpInput {
        email: " mary@example.com ".to_owned(),
        password: "magdala".to_owned(),
        repeat_password: "magdala".to_owned(),
        display_name: "Mary".to_owned(),
        bio: Some("  ".to_owned()),
        journey_stage: "beginning".to_owned(),
    }
}

// ── SignUpUseCase ────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_forward_profile_metadata_on_sign_up() {
    let auth = MockAuthService::default();
    let uc = SignUpUseCase {
        auth: auth.clone(),
        email_redirect_to: Some("https://app.example.com/auth/confirm".to_owned()),
    };

    uc.execute(sign_up_form()).await.unwrap();

    let sign_ups = auth.sign_ups.lock().unwrap();
    assert_eq!(sign_ups.len(), 1);
    let request = &sign_ups[0];
    assert_eq!(request.email, "mary@example.com");
    assert_eq!(request.display_name, "Mary");
    assert_eq!(request.bio, None);
    assert_eq!(request.journey_stage, JourneyStage::EarlyJourney);
    assert_eq!(
        request.email_redirect_to.as_deref(),
        Some("https://app.example.com/auth/confirm")
    );
}

#[tokio::test]
async fn should_reject_mismatched_passwords() {
    let auth = MockAuthService::default();
    let uc = SignUpUseCase {
        auth: auth.clone(),
        email_redirect_to: None,
    };
    let mut form = sign_up_form();
    form.repeat_password = "magdalA".to_owned();

    let result = uc.execute(form).await;

    assert!(matches!(result, Err(PlatformError::PasswordMismatch)));
    assert!(auth.sign_ups.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_reject_short_password() {
    let uc = SignUpUseCase {
        auth: MockAuthService::default(),
        email_redirect_to: None,
    };
    let mut form = sign_up_form();
    form.password = "amen".to_owned();
    form.repeat_password = "amen".to_owned();

    let result = uc.execute(form).await;

    assert!(matches!(result, Err(PlatformError::PasswordTooShort)));
}

#[tokio::test]
async fn should_accept_password_of_exactly_minimum_length() {
    let uc = SignUpUseCase {
        auth: MockAuthService::default(),
        email_redirect_to: None,
    };
    let mut form = sign_up_form();
    form.password = "shalom".to_owned();
    form.repeat_password = "shalom".to_owned();

    assert!(uc.execute(form).await.is_ok());
}

#[tokio::test]
async fn should_require_journey_stage() {
    let uc = SignUpUseCase {
        auth: MockAuthService::default(),
        email_redirect_to: None,
    };
    let mut form = sign_up_form();
    form.journey_stage = String::new();

    let result = uc.execute(form).await;

    assert!(matches!(result, Err(PlatformError::MissingField("journey_stage"))));
}

// ── SignInUseCase ────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_sign_in_with_matching_credentials() {
    let uc = SignInUseCase {
        auth: MockAuthService {
            account: Some(("mary@example.com".to_owned(), "magdala".to_owned())),
            ..Default::default()
        },
    };

    let tokens = uc.execute("mary@example.com", "magdala").await.unwrap();

    assert_eq!(tokens.access_token, "access");
    assert_eq!(tokens.refresh_token, "refresh");
}

#[tokio::test]
async fn should_reject_wrong_password() {
    let uc = SignInUseCase {
        auth: MockAuthService {
            account: Some(("mary@example.com".to_owned(), "magdala".to_owned())),
            ..Default::default()
        },
    };

    let result = uc.execute("mary@example.com", "wrong").await;

    assert!(matches!(result, Err(PlatformError::InvalidCredentials)));
}

// ── SignOutUseCase ───────────────────────────────────────────────────────────

#[tokio::test]
async fn should_swallow_sign_out_failure() {
    let auth = MockAuthService {
        fail_sign_out: true,
        ..Default::default()
    };
    let uc = SignOutUseCase { auth: auth.clone() };

    uc.execute(Some("access")).await;

    assert_eq!(*auth.sign_outs.lock().unwrap(), ["access"]);
}

#[tokio::test]
async fn should_skip_sign_out_call_without_token() {
    let auth = MockAuthService::default();
    let uc = SignOutUseCase { auth: auth.clone() };

    uc.execute(None).await;

    assert!(auth.sign_outs.lock().unwrap().is_empty());
}
