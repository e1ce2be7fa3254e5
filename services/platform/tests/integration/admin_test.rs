use chrono::{Duration, Utc};

use sanctuary_domain::admin_role::AdminRole;
use sanctuary_platform::domain::types::{BibleStudy, Resource, Testimonial};
use sanctuary_platform::usecase::admin::{AdminDashboardUseCase, UsersAndRolesUseCase};
use sanctuary_platform::usecase::content::{SubmitContentUseCase, SubmitMode};

use crate::helpers::{
    MockProfileRepo, MockRoleDirectory, MockStore, grant, resource_draft, stored_grant,
    test_profile, user,
};

#[tokio::test]
async fn should_count_content_on_admin_dashboard() {
    let admin = user();
    let resources = MockStore::<Resource>::empty();
    let submit = SubmitContentUseCase {
        store: resources.clone(),
    };
    for title in ["One", "Two"] {
        submit
            .execute(
                &grant(admin, AdminRole::ContentAdmin),
                SubmitMode::Insert,
                resource_draft(title),
            )
            .await
            .unwrap();
    }

    let uc = AdminDashboardUseCase {
        profiles: MockProfileRepo::new(vec![
            test_profile(admin, "Priscilla"),
            test_profile(user(), "Aquila"),
        ]),
        resources,
        testimonials: MockStore::<Testimonial>::empty(),
        bible_studies: MockStore::<BibleStudy>::empty(),
    };

    let dashboard = uc.execute(admin).await.unwrap();

    assert_eq!(dashboard.display_name.as_deref(), Some("Priscilla"));
    assert_eq!(dashboard.counts.resources, 2);
    assert_eq!(dashboard.counts.testimonials, 0);
    assert_eq!(dashboard.counts.bible_studies, 0);
    assert_eq!(dashboard.counts.profiles, 2);
}

#[tokio::test]
async fn should_list_members_newest_first_with_roles_and_totals() {
    let (older, newer, moderator) = (user(), user(), user());
    let mut older_profile = test_profile(older, "Older");
    older_profile.created_at = Utc::now() - Duration::days(365);
    let mut newer_profile = test_profile(newer, "Newer");
    newer_profile.created_at = Utc::now() - Duration::days(1);
    let mut mod_profile = test_profile(moderator, "Moderator");
    mod_profile.created_at = Utc::now() - Duration::days(100);

    let uc = UsersAndRolesUseCase {
        profiles: MockProfileRepo::new(vec![older_profile, newer_profile, mod_profile]),
        roles: MockRoleDirectory {
            grants: vec![
                stored_grant(older, AdminRole::SuperAdmin),
                stored_grant(moderator, AdminRole::Moderator),
            ],
        },
    };

    let overview = uc.execute().await.unwrap();

    let ids: Vec<_> = overview.members.iter().map(|m| m.profile.id).collect();
    assert_eq!(ids, [newer, moderator, older]);
    assert!(overview.members[0].grant.is_none());
    assert_eq!(
        overview.members[2].grant.as_ref().map(|g| g.role),
        Some(AdminRole::SuperAdmin)
    );
    assert_eq!(
        overview.role_totals,
        [
            (AdminRole::Moderator, 1),
            (AdminRole::ContentAdmin, 0),
            (AdminRole::SuperAdmin, 1),
        ]
    );
}

#[tokio::test]
async fn should_keep_highest_of_duplicate_grants() {
    let member = user();
    let uc = UsersAndRolesUseCase {
        profiles: MockProfileRepo::new(vec![test_profile(member, "Timothy")]),
        roles: MockRoleDirectory {
            grants: vec![
                stored_grant(member, AdminRole::ContentAdmin),
                stored_grant(member, AdminRole::Moderator),
            ],
        },
    };

    let overview = uc.execute().await.unwrap();

    assert_eq!(
        overview.members[0].grant.as_ref().map(|g| g.role),
        Some(AdminRole::ContentAdmin)
    );
}
