//! Database model types for Diesel ORM.

use diesel::prelude::*;

use super::schema::{match_state, players, subscriptions};

/// Database row for a player's last committed match.
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = match_state)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MatchStateRow {
    pub puuid: String,
    pub match_id: String,
    pub updated_at: String,
}

/// Database row for a tracked player.
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = players)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PlayerRow {
    pub puuid: String,
    pub label: String,
    pub created_at: String,
}

/// Database row for a player's subscription in one context.
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = subscriptions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SubscriptionRow {
    pub puuid: String,
    pub context: String,
    pub created_at: String,
}
