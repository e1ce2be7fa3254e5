use chrono::{Duration, Utc};
use uuid::Uuid;

use sanctuary_domain::content::PostType;
use sanctuary_domain::pagination::PageRequest;
use sanctuary_platform::domain::types::Comment;
use sanctuary_platform::error::PlatformError;
use sanctuary_platform::usecase::community::{
    AddCommentUseCase, CreatePostInput, CreatePostUseCase, FeedUseCase, PostDetailUseCase,
    ToggleLikeUseCase,
};

use crate::helpers::{MockCommentRepo, MockLikeRepo, MockPostRepo, test_post, user};

// ── CreatePostUseCase ────────────────────────────────────────────────────────

#[tokio::test]
async fn should_store_true_author_for_anonymous_post() {
    let posts = MockPostRepo::empty();
    let author = user();
    let uc = CreatePostUseCase {
        posts: posts.clone(),
    };

    let post = uc
        .execute(
            author,
            CreatePostInput {
                title: Some("   ".to_owned()),
                content: "  Please pray for my family  ".to_owned(),
                post_type: PostType::PrayerRequest,
                is_anonymous: true,
            },
        )
        .await
        .unwrap();

    assert_eq!(post.author_id, author);
    assert!(post.is_anonymous);
    assert_eq!(post.title, None);
    assert_eq!(post.content, "Please pray for my family");
    assert_eq!(posts.posts.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_reject_blank_post_content() {
    let posts = MockPostRepo::empty();
    let uc = CreatePostUseCase {
        posts: posts.clone(),
    };

    let result = uc
        .execute(
            user(),
            CreatePostInput {
                title: Some("Title".to_owned()),
                content: "\n\t ".to_owned(),
                post_type: PostType::Question,
                is_anonymous: false,
            },
        )
        .await;

    assert!(matches!(result, Err(PlatformError::MissingField("content"))));
    assert!(posts.posts.lock().unwrap().is_empty());
}

// ── FeedUseCase ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_list_feed_newest_first_in_pages() {
    let author = user();
    let now = Utc::now();
    let posts: Vec<_> = (0..25)
        .map(|i| test_post(author, &format!("post {i}"), now - Duration::minutes(i)))
        .collect();
    let uc = FeedUseCase {
        posts: MockPostRepo::new(posts),
    };

    let first = uc
        .execute(PageRequest {
            per_page: 20,
            page: 1,
        })
        .await
        .unwrap();
    assert_eq!(first.len(), 20);
    assert_eq!(first[0].post.content, "post 0");
    assert!(first.windows(2).all(|w| w[0].post.created_at >= w[1].post.created_at));

    let second = uc
        .execute(PageRequest {
            per_page: 20,
            page: 2,
        })
        .await
        .unwrap();
    assert_eq!(second.len(), 5);
    assert_eq!(second[4].post.content, "post 24");
}

// ── ToggleLikeUseCase ────────────────────────────────────────────────────────

#[tokio::test]
async fn should_restore_like_count_after_like_then_unlike() {
    let post = test_post(user(), "Grateful today", Utc::now());
    let post_id = post.id;
    let likes = MockLikeRepo::empty();
    let uc = ToggleLikeUseCase {
        posts: MockPostRepo::new(vec![post]),
        likes: likes.clone(),
    };
    likes.likes.lock().unwrap().insert((post_id, user()));
    let me = user();

    let liked = uc.execute(me, post_id).await.unwrap();
    assert!(liked.liked);
    assert_eq!(liked.like_count, 2);

    let unliked = uc.execute(me, post_id).await.unwrap();
    assert!(!unliked.liked);
    assert_eq!(unliked.like_count, 1);
}

#[tokio::test]
async fn should_not_toggle_like_on_missing_post() {
    let likes = MockLikeRepo::empty();
    let uc = ToggleLikeUseCase {
        posts: MockPostRepo::empty(),
        likes: likes.clone(),
    };

    let result = uc.execute(user(), Uuid::new_v4()).await;

    assert!(matches!(result, Err(PlatformError::PostNotFound)));
    assert!(likes.likes.lock().unwrap().is_empty());
}

// ── AddCommentUseCase / PostDetailUseCase ────────────────────────────────────

#[tokio::test]
async fn should_show_comments_oldest_first_with_counts() {
    let post = test_post(user(), "How do I start reading the Bible?", Utc::now());
    let post_id = post.id;
    let posts = MockPostRepo::new(vec![post]);
    let comments = MockCommentRepo::empty();
    let likes = MockLikeRepo::empty();
    let viewer = user();
    likes.likes.lock().unwrap().insert((post_id, viewer));

    let earlier = Comment {
        id: Uuid::new_v4(),
        post_id,
        author_id: user(),
        content: "Start with John".to_owned(),
        created_at: Utc::now() - Duration::hours(2),
    };
    comments.comments.lock().unwrap().push(earlier);

    let add = AddCommentUseCase {
        posts: posts.clone(),
        comments: comments.clone(),
    };
    let added = add
        .execute(viewer, post_id, "  Psalms helped me  ")
        .await
        .unwrap();
    assert_eq!(added.content, "Psalms helped me");

    let detail = PostDetailUseCase {
        posts,
        comments,
        likes,
    };
    let view = detail.execute(viewer, post_id).await.unwrap();

    assert_eq!(view.comment_count, 2);
    assert_eq!(view.comments[0].comment.content, "Start with John");
    assert_eq!(view.comments[1].comment.content, "Psalms helped me");
    assert_eq!(view.like_count, 1);
    assert!(view.user_liked);
}

#[tokio::test]
async fn should_not_comment_on_missing_post() {
    let comments = MockCommentRepo::empty();
    let uc = AddCommentUseCase {
        posts: MockPostRepo::empty(),
        comments: comments.clone(),
    };

    let result = uc.execute(user(), Uuid::new_v4(), "Hello").await;

    assert!(matches!(result, Err(PlatformError::PostNotFound)));
    assert!(comments.comments.lock().unwrap().is_empty());
}
