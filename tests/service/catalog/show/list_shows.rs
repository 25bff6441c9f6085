//! Tests for ShowService::list_shows.
//!
//! Covers unfiltered listings, case-insensitive title matching with literal
//! wildcard handling, theme set membership with deduplication, and read
//! idempotence.

use orrery::{model::catalog::ShowFilter, service::catalog::ShowService};
use orrery_test_utils::prelude::*;

/// Expect all shows ordered by title with their theme names attached
#[tokio::test]
async fn returns_all_shows_ordered_by_title() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;

    let nebulae = test.catalog().insert_theme("Nebulae").await?;
    test.catalog()
        .insert_show("Wonders of the Deep Sky", &[nebulae.id])
        .await?;
    test.catalog().insert_show("A Tour of Mars", &[]).await?;

    let show_service = ShowService::new(&test.db);
    let shows = show_service.list_shows(&ShowFilter::default()).await.unwrap();

    assert_eq!(shows.len(), 2);
    assert_eq!(shows[0].title, "A Tour of Mars");
    assert!(shows[0].themes.is_empty());
    assert_eq!(shows[1].title, "Wonders of the Deep Sky");
    assert_eq!(shows[1].themes, vec!["Nebulae".to_string()]);

    Ok(())
}

/// Expect the title filter to match substrings regardless of case
#[tokio::test]
async fn filters_by_title_case_insensitively() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;

    test.catalog().insert_show("Cosmic Voyage", &[]).await?;
    test.catalog().insert_show("Black Holes", &[]).await?;

    let show_service = ShowService::new(&test.db);

    let filter = ShowFilter {
        title_contains: Some("cosmic".to_string()),
        theme_ids: None,
    };
    let shows = show_service.list_shows(&filter).await.unwrap();

    assert_eq!(shows.len(), 1);
    assert_eq!(shows[0].title, "Cosmic Voyage");

    let filter = ShowFilter {
        title_contains: Some("VOYAGE".to_string()),
        theme_ids: None,
    };
    let shows = show_service.list_shows(&filter).await.unwrap();

    assert_eq!(shows.len(), 1);
    assert_eq!(shows[0].title, "Cosmic Voyage");

    Ok(())
}

/// Expect LIKE wildcard characters in the title filter to match literally
#[tokio::test]
async fn treats_wildcards_in_title_filter_as_literal() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;

    test.catalog().insert_show("Mars", &[]).await?;
    test.catalog().insert_show("Secrets_Of_Saturn", &[]).await?;

    let show_service = ShowService::new(&test.db);

    // "_" must not match an arbitrary character
    let filter = ShowFilter {
        title_contains: Some("_ars".to_string()),
        theme_ids: None,
    };
    let shows = show_service.list_shows(&filter).await.unwrap();
    assert!(shows.is_empty());

    // "%" must not match everything
    let filter = ShowFilter {
        title_contains: Some("%".to_string()),
        theme_ids: None,
    };
    let shows = show_service.list_shows(&filter).await.unwrap();
    assert!(shows.is_empty());

    // A literal underscore in the title is still matchable
    let filter = ShowFilter {
        title_contains: Some("s_of_s".to_string()),
        theme_ids: None,
    };
    let shows = show_service.list_shows(&filter).await.unwrap();
    assert_eq!(shows.len(), 1);
    assert_eq!(shows[0].title, "Secrets_Of_Saturn");

    Ok(())
}

/// Expect the theme filter to match shows with at least one theme in the set
#[tokio::test]
async fn filters_by_theme_membership() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;

    let planets = test.catalog().insert_theme("Planets").await?;
    let galaxies = test.catalog().insert_theme("Galaxies").await?;

    let show1 = test.catalog().insert_show("Show 1", &[planets.id]).await?;
    let show2 = test.catalog().insert_show("Show 2", &[galaxies.id]).await?;
    let show3 = test.catalog().insert_show("Show 3", &[]).await?;

    let show_service = ShowService::new(&test.db);

    let filter = ShowFilter {
        title_contains: None,
        theme_ids: Some(vec![planets.id, galaxies.id]),
    };
    let shows = show_service.list_shows(&filter).await.unwrap();

    let ids: Vec<i32> = shows.iter().map(|show| show.id).collect();
    assert!(ids.contains(&show1.id));
    assert!(ids.contains(&show2.id));
    assert!(!ids.contains(&show3.id));

    Ok(())
}

/// Expect a show matching several filtered themes to appear exactly once
#[tokio::test]
async fn deduplicates_shows_matching_multiple_themes() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;

    let planets = test.catalog().insert_theme("Planets").await?;
    let galaxies = test.catalog().insert_theme("Galaxies").await?;
    test.catalog()
        .insert_show("Everything Everywhere", &[planets.id, galaxies.id])
        .await?;

    let show_service = ShowService::new(&test.db);

    let filter = ShowFilter {
        title_contains: None,
        theme_ids: Some(vec![planets.id, galaxies.id]),
    };
    let shows = show_service.list_shows(&filter).await.unwrap();

    assert_eq!(shows.len(), 1);

    Ok(())
}

/// Expect repeated unfiltered listings to return the same set absent writes
#[tokio::test]
async fn repeated_listing_is_idempotent() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;

    test.catalog().insert_show("Cosmic Voyage", &[]).await?;
    test.catalog().insert_show("Black Holes", &[]).await?;

    let show_service = ShowService::new(&test.db);

    let first = show_service.list_shows(&ShowFilter::default()).await.unwrap();
    let second = show_service.list_shows(&ShowFilter::default()).await.unwrap();

    let first_ids: Vec<i32> = first.iter().map(|show| show.id).collect();
    let second_ids: Vec<i32> = second.iter().map(|show| show.id).collect();
    assert_eq!(first_ids, second_ids);

    Ok(())
}

/// Expect Error when listing shows without required tables being created
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let show_service = ShowService::new(&test.db);
    let result = show_service.list_shows(&ShowFilter::default()).await;

    assert!(result.is_err());

    Ok(())
}
