//! Catalog DTOs: shows, themes, domes, and scheduled show sessions.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Filter for listing astronomy shows.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct ShowFilter {
    /// Case-insensitive substring match on the show title.
    pub title_contains: Option<String>,
    /// Shows having at least one theme whose id is in this set.
    pub theme_ids: Option<Vec<i32>>,
}

/// Filter for listing show sessions.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct SessionFilter {
    /// Sessions whose show time falls on this calendar date.
    pub date: Option<NaiveDate>,
    /// Exact match on the astronomy show.
    pub show_id: Option<i32>,
}

/// An astronomy show with its theme names, as returned by show listings.
#[derive(Clone, Serialize, Deserialize)]
pub struct ShowDto {
    /// Show identifier.
    pub id: i32,
    /// Show title.
    pub title: String,
    /// Show description.
    pub description: String,
    /// Names of the show's themes.
    pub themes: Vec<String>,
}

/// A show theme.
#[derive(Clone, Serialize, Deserialize)]
pub struct ThemeDto {
    /// Theme identifier.
    pub id: i32,
    /// Theme name.
    pub name: String,
}

/// An astronomy show with full theme records, as returned by show detail reads.
#[derive(Clone, Serialize, Deserialize)]
pub struct ShowDetailDto {
    /// Show identifier.
    pub id: i32,
    /// Show title.
    pub title: String,
    /// Show description.
    pub description: String,
    /// The show's themes.
    pub themes: Vec<ThemeDto>,
}

/// A planetarium dome with its derived capacity.
#[derive(Clone, Serialize, Deserialize)]
pub struct DomeDto {
    /// Dome identifier.
    pub id: i32,
    /// Dome name.
    pub name: String,
    /// Number of rows in the dome.
    pub rows: i32,
    /// Number of seats per row.
    pub seats_in_row: i32,
    /// Total seats, rows * seats_in_row.
    pub capacity: i32,
}

/// A scheduled show session as returned by session listings.
///
/// `tickets_available` is recomputed on every read as dome capacity minus the
/// session's booked ticket count; it is never a cached counter.
#[derive(Clone, Serialize, Deserialize)]
pub struct SessionDto {
    /// Session identifier.
    pub id: i32,
    /// When the show is scheduled.
    pub show_time: NaiveDateTime,
    /// Title of the scheduled show.
    pub astronomy_show_title: String,
    /// Name of the hosting dome.
    pub planetarium_dome_name: String,
    /// Total seat capacity of the hosting dome.
    pub planetarium_dome_capacity: i32,
    /// Seats still available for booking.
    pub tickets_available: i64,
}

/// A booked seat within a session.
#[derive(Clone, Serialize, Deserialize)]
pub struct SeatDto {
    /// Row of the booked seat.
    pub row: i32,
    /// Seat number within the row.
    pub seat: i32,
}

/// A scheduled show session with embedded show, dome, and taken seats.
#[derive(Clone, Serialize, Deserialize)]
pub struct SessionDetailDto {
    /// Session identifier.
    pub id: i32,
    /// When the show is scheduled.
    pub show_time: NaiveDateTime,
    /// The scheduled show.
    pub astronomy_show: ShowDetailDto,
    /// The hosting dome.
    pub planetarium_dome: DomeDto,
    /// Seats already booked for this session.
    pub taken_places: Vec<SeatDto>,
}
