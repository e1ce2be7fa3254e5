use chrono::Utc;

use sanctuary_domain::journey::JourneyStage;
use sanctuary_platform::error::PlatformError;
use sanctuary_platform::usecase::profile::{
    GetOwnProfileUseCase, MemberDashboardUseCase, UpdateProfileInput, UpdateProfileUseCase,
};

use crate::helpers::{MockPostRepo, MockProfileRepo, test_post, test_profile, user};

fn edit(journey_stage: Option<&str>) -> UpdateProfileInput {
    UpdateProfileInput {
        display_name: Some(" Lydia ".to_owned()),
        bio: Some("".to_owned()),
        journey_stage: journey_stage.map(str::to_owned),
        location: Some("Thyatira".to_owned()),
        interests: None,
    }
}

#[tokio::test]
async fn should_count_own_posts_on_profile() {
    let me = user();
    let uc = GetOwnProfileUseCase {
        profiles: MockProfileRepo::new(vec![test_profile(me, "Lydia")]),
        posts: MockPostRepo::new(vec![
            test_post(me, "one", Utc::now()),
            test_post(me, "two", Utc::now()),
            test_post(user(), "not mine", Utc::now()),
        ]),
    };

    let own = uc.execute(me).await.unwrap();

    assert_eq!(own.profile.id, me);
    assert_eq!(own.posts_count, 2);
}

#[tokio::test]
async fn should_update_profile_and_stamp_updated_at() {
    let me = user();
    let before = test_profile(me, "Old name");
    let previous_update = before.updated_at;
    let uc = UpdateProfileUseCase {
        profiles: MockProfileRepo::new(vec![before]),
    };

    let updated = uc.execute(me, edit(Some("progressing"))).await.unwrap();

    assert_eq!(updated.display_name.as_deref(), Some("Lydia"));
    assert_eq!(updated.bio, None);
    assert_eq!(updated.journey_stage, Some(JourneyStage::ActiveTransition));
    assert_eq!(updated.location.as_deref(), Some("Thyatira"));
    assert!(!updated.is_mentor);
    assert!(updated.updated_at > previous_update);
}

#[tokio::test]
async fn should_reject_unknown_journey_stage() {
    let me = user();
    let uc = UpdateProfileUseCase {
        profiles: MockProfileRepo::new(vec![test_profile(me, "Lydia")]),
    };

    let result = uc.execute(me, edit(Some("enlightened"))).await;

    assert!(matches!(result, Err(PlatformError::InvalidValue(_))));
}

#[tokio::test]
async fn should_report_missing_profile_on_update() {
    let uc = UpdateProfileUseCase {
        profiles: MockProfileRepo::empty(),
    };

    let result = uc.execute(user(), edit(None)).await;

    assert!(matches!(result, Err(PlatformError::ProfileNotFound)));
}

#[tokio::test]
async fn should_show_five_most_recent_posts_on_dashboard() {
    let me = user();
    let now = Utc::now();
    let posts = (0..8)
        .map(|i| test_post(user(), &format!("post {i}"), now - chrono::Duration::minutes(i)))
        .collect();
    let uc = MemberDashboardUseCase {
        profiles: MockProfileRepo::new(vec![test_profile(me, "Lydia")]),
        posts: MockPostRepo::new(posts),
    };

    let dashboard = uc.execute(me).await.unwrap();

    assert!(dashboard.profile.is_some());
    assert_eq!(dashboard.recent_posts.len(), 5);
    assert_eq!(dashboard.recent_posts[0].post.content, "post 0");
}
