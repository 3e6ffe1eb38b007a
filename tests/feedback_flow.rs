use camerashop_api::{
    db::{create_pool, run_migrations},
    dto::{
        cart::AddToCartRequest,
        feedback::{CreateFeedbackRequest, UpdateFeedbackRequest},
        image::ImageDto,
    },
    entity::{Users, products::ActiveModel as ProductActive, users::ActiveModel as UserActive},
    error::AppError,
    models::{Feedback, User},
    repository::{self, OrmFeedbackStore},
    routes::params::{FeedbackQuery, Pagination},
    services::{cart_service, feedback_service, image_service},
    state::AppState,
};
use chrono::NaiveDate;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Set, Statement};
use std::sync::{Mutex, MutexGuard};

// Every test here truncates the same tables, so they run one at a time.
static DB_LOCK: Mutex<()> = Mutex::new(());

// Integration flow against Postgres: feedback lifecycle including the cascade to users,
// then cart and image handling for a product.
#[tokio::test]
async fn feedback_cart_and_image_flow() -> anyhow::Result<()> {
    let Some((_guard, state)) = test_state().await? else {
        return Ok(());
    };
    let author_id = create_user(&state, "author", "author@example.com").await?;
    let shopper_id = create_user(&state, "shopper", "shopper@example.com").await?;

    // Submit feedback
    let created = feedback_service::create_feedback(
        &state,
        CreateFeedbackRequest {
            title: "Delivery".into(),
            comment: "Tripod box was dented".into(),
            user_id: author_id,
            date_created: NaiveDate::from_ymd_opt(2024, 7, 1),
        },
    )
    .await?
    .data
    .unwrap();
    let feedback_id = created.id.expect("identity assigned");
    assert!(!created.is_read);
    assert_eq!(created.user_id(), Some(author_id));

    // Blank comments are rejected before touching storage
    let blank = feedback_service::create_feedback(
        &state,
        CreateFeedbackRequest {
            title: "x".into(),
            comment: "   ".into(),
            user_id: author_id,
            date_created: None,
        },
    )
    .await;
    assert!(matches!(blank, Err(AppError::BadRequest(_))));

    // Mark read, then list unread
    let read = feedback_service::mark_read(&state, feedback_id, true)
        .await?
        .data
        .unwrap();
    assert!(read.is_read);
    assert!(read.same_identity(&created));

    let unread = feedback_service::list_feedback(
        &state,
        FeedbackQuery {
            is_read: Some(false),
            ..FeedbackQuery::default()
        },
    )
    .await?;
    assert!(unread.data.unwrap().items.is_empty());

    // Full replacement
    let replaced = feedback_service::update_feedback(
        &state,
        feedback_id,
        UpdateFeedbackRequest {
            title: "Delivery (resolved)".into(),
            comment: "Replacement shipped".into(),
            date_created: NaiveDate::from_ymd_opt(2024, 7, 2).unwrap(),
            is_read: true,
            user_id: author_id,
        },
    )
    .await?
    .data
    .unwrap();
    assert_eq!(replaced.title, "Delivery (resolved)");

    // Deleting the feedback also deletes its author
    feedback_service::delete_feedback(&state, feedback_id).await?;
    assert!(Users::find_by_id(author_id).one(&state.orm).await?.is_none());
    assert!(matches!(
        feedback_service::get_feedback(&state, feedback_id).await,
        Err(AppError::NotFound)
    ));

    // Cart and images for a product
    let product = ProductActive {
        id: NotSet,
        name: Set("Sony FE 50mm f/1.8".into()),
        description: Set(None),
        price: Set(5_490_000),
    }
    .insert(&state.orm)
    .await?;

    let zero = cart_service::add_to_cart(
        &state,
        shopper_id,
        AddToCartRequest {
            product_id: product.id,
            quantity: 0,
        },
    )
    .await;
    assert!(matches!(zero, Err(AppError::BadRequest(_))));

    // Unknown users are reported the same way when listing and when adding
    let stranger = cart_service::add_to_cart(
        &state,
        shopper_id + 1000,
        AddToCartRequest {
            product_id: product.id,
            quantity: 1,
        },
    )
    .await;
    assert!(matches!(stranger, Err(AppError::NotFound)));
    assert!(matches!(
        cart_service::list_cart(&state, shopper_id + 1000, Pagination::default()).await,
        Err(AppError::NotFound)
    ));

    let line = cart_service::add_to_cart(
        &state,
        shopper_id,
        AddToCartRequest {
            product_id: product.id,
            quantity: 2,
        },
    )
    .await?
    .data
    .unwrap();
    assert_eq!(line.quantity, 2);
    assert_eq!(line.product.id, product.id);
    assert_eq!(line.user.id, shopper_id);

    let cart = cart_service::list_cart(&state, shopper_id, Pagination::default())
        .await?
        .data
        .unwrap();
    assert_eq!(cart.items, vec![line]);

    let uploads = [
        ("http://example.com/back.png", Some(2)),
        ("http://example.com/front.png", Some(1)),
        ("http://example.com/extra.png", None),
    ];
    for (url, order) in uploads {
        let image = ImageDto::new(Some(999), url, order, None);
        image_service::add_image(&state, product.id, image).await?;
    }
    let images = image_service::list_images(&state, product.id)
        .await?
        .data
        .unwrap()
        .items;
    let urls: Vec<&str> = images.iter().map(|i| i.url.as_str()).collect();
    assert_eq!(
        urls,
        [
            "http://example.com/front.png",
            "http://example.com/back.png",
            "http://example.com/extra.png",
        ]
    );
    assert!(
        images
            .iter()
            .all(|i| i.product_id == Some(product.id) && i.id != Some(999))
    );

    Ok(())
}

// A user first seen through a feedback must get its id from storage, so later
// sign-ups keep drawing fresh ids.
#[tokio::test]
async fn cascade_persisted_user_leaves_identity_sequence_usable() -> anyhow::Result<()> {
    let Some((_guard, state)) = test_state().await? else {
        return Ok(());
    };
    let first_id = create_user(&state, "first", "first@example.com").await?;

    let newcomer = User {
        id: first_id + 1,
        username: "newcomer".into(),
        email: "newcomer@example.com".into(),
        full_name: None,
    };
    let feedback = Feedback::builder()
        .title("Hello")
        .comment("First order went well")
        .date_created(NaiveDate::from_ymd_opt(2024, 8, 1).unwrap())
        .user(newcomer.clone())
        .build();

    let store = OrmFeedbackStore::new(&state.orm);
    let saved = repository::insert(&store, feedback).await?;
    let linked = saved.user.clone().expect("user linked");
    assert_eq!(linked.email, newcomer.email);
    assert!(Users::find_by_id(linked.id).one(&state.orm).await?.is_some());

    let next_id = create_user(&state, "second", "second@example.com").await?;
    assert_ne!(next_id, linked.id);
    assert_ne!(next_id, first_id);

    // Same email under an unknown id collides with the unique index
    let duplicate = Feedback {
        id: None,
        user: Some(User {
            id: 9_999,
            ..newcomer
        }),
        ..saved
    };
    let err = repository::insert(&store, duplicate).await.unwrap_err();
    assert!(matches!(err, AppError::Constraint(_)), "got {err:?}");

    Ok(())
}

async fn test_state() -> anyhow::Result<Option<(MutexGuard<'static, ()>, AppState)>> {
    // Allow skipping when no DB is configured in the environment.
    let database_url = match std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!(
                "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration flow tests."
            );
            return Ok(None);
        }
    };

    let guard = DB_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let state = setup_state(&database_url).await?;
    Ok(Some((guard, state)))
}

async fn setup_state(database_url: &str) -> anyhow::Result<AppState> {
    let pool = create_pool(database_url, 5).await?;
    run_migrations(&pool).await?;
    let state = AppState::new(pool);

    // Clean tables between runs
    let backend = state.orm.get_database_backend();
    state
        .orm
        .execute(Statement::from_string(
            backend,
            "TRUNCATE TABLE product_images, cart_items, feedback, products, users RESTART IDENTITY CASCADE",
        ))
        .await?;

    Ok(state)
}

async fn create_user(state: &AppState, username: &str, email: &str) -> anyhow::Result<i32> {
    let user = UserActive {
        id: NotSet,
        username: Set(username.to_string()),
        email: Set(email.to_string()),
        full_name: Set(None),
    }
    .insert(&state.orm)
    .await?;

    Ok(user.id)
}
