//! SQLite match state and roster store.
//!
//! Compare-and-set is a single conditional statement, so SQLite's write
//! lock arbitrates between concurrent writers: an insert that ignores an
//! existing row for the first commit, an `UPDATE ... WHERE match_id = ?`
//! for later ones.

use std::collections::BTreeMap;

use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use tracing::debug;

use crate::adapter::outbound::sqlite::database::connection::DbPool;
use crate::adapter::outbound::sqlite::database::model::{
    MatchStateRow, PlayerRow, SubscriptionRow,
};
use crate::adapter::outbound::sqlite::database::schema::{match_state, players, subscriptions};
use crate::domain::id::{MatchId, PlayerId};
use crate::domain::player::TrackedPlayer;
use crate::error::{Error, Result};
use crate::port::outbound::store::{MatchStateStore, RosterStore, Unsubscribed};

type Conn = PooledConnection<ConnectionManager<SqliteConnection>>;

/// SQLite-backed store for match state and the roster.
#[derive(Clone)]
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> Result<Conn> {
        self.pool.get().map_err(|e| Error::Connection(e.to_string()))
    }
}

fn db_err(e: diesel::result::Error) -> Error {
    Error::Database(e.to_string())
}

impl MatchStateStore for SqliteStore {
    async fn get_last_seen(&self, player_id: &PlayerId) -> Result<Option<MatchId>> {
        let mut conn = self.conn()?;
        let match_id: Option<String> = match_state::table
            .find(player_id.as_str())
            .select(match_state::match_id)
            .first(&mut conn)
            .optional()
            .map_err(db_err)?;
        Ok(match_id.map(MatchId::new))
    }

    async fn compare_and_set(
        &self,
        player_id: &PlayerId,
        expected: Option<&MatchId>,
        new: &MatchId,
    ) -> Result<bool> {
        let mut conn = self.conn()?;
        let now = Utc::now().to_rfc3339();

        let written = match expected {
            None => diesel::insert_into(match_state::table)
                .values(&MatchStateRow {
                    puuid: player_id.to_string(),
                    match_id: new.to_string(),
                    updated_at: now,
                })
                .on_conflict_do_nothing()
                .execute(&mut conn),
            Some(previous) => diesel::update(
                match_state::table
                    .filter(match_state::puuid.eq(player_id.as_str()))
                    .filter(match_state::match_id.eq(previous.as_str())),
            )
            .set((
                match_state::match_id.eq(new.as_str()),
                match_state::updated_at.eq(now),
            ))
            .execute(&mut conn),
        }
        .map_err(db_err)?;

        if written == 0 {
            debug!(puuid = %player_id, match_id = %new, "Compare-and-set lost");
        }
        Ok(written == 1)
    }

    async fn list_all(&self) -> Result<BTreeMap<PlayerId, MatchId>> {
        let mut conn = self.conn()?;
        let rows: Vec<MatchStateRow> = match_state::table
            .select(MatchStateRow::as_select())
            .load(&mut conn)
            .map_err(db_err)?;
        Ok(rows
            .into_iter()
            .map(|row| (PlayerId::new(row.puuid), MatchId::new(row.match_id)))
            .collect())
    }
}

impl RosterStore for SqliteStore {
    async fn subscribe(&self, player_id: &PlayerId, label: &str, context: &str) -> Result<bool> {
        let mut conn = self.conn()?;
        let now = Utc::now().to_rfc3339();

        conn.immediate_transaction::<_, diesel::result::Error, _>(|conn| {
            diesel::insert_into(players::table)
                .values(&PlayerRow {
                    puuid: player_id.to_string(),
                    label: label.to_string(),
                    created_at: now.clone(),
                })
                .on_conflict_do_nothing()
                .execute(conn)?;

            let added = diesel::insert_into(subscriptions::table)
                .values(&SubscriptionRow {
                    puuid: player_id.to_string(),
                    context: context.to_string(),
                    created_at: now,
                })
                .on_conflict_do_nothing()
                .execute(conn)?;
            Ok(added == 1)
        })
        .map_err(db_err)
    }

    async fn unsubscribe(&self, player_id: &PlayerId, context: &str) -> Result<Unsubscribed> {
        let mut conn = self.conn()?;

        conn.immediate_transaction::<_, diesel::result::Error, _>(|conn| {
            let removed = diesel::delete(
                subscriptions::table
                    .filter(subscriptions::puuid.eq(player_id.as_str()))
                    .filter(subscriptions::context.eq(context)),
            )
            .execute(conn)?;
            if removed == 0 {
                return Ok(Unsubscribed::NotSubscribed);
            }

            let remaining: i64 = subscriptions::table
                .filter(subscriptions::puuid.eq(player_id.as_str()))
                .count()
                .get_result(conn)?;
            if remaining > 0 {
                return Ok(Unsubscribed::Context);
            }

            diesel::delete(players::table.find(player_id.as_str())).execute(conn)?;
            diesel::delete(match_state::table.find(player_id.as_str())).execute(conn)?;
            Ok(Unsubscribed::Player)
        })
        .map_err(db_err)
    }

    async fn list_players(&self) -> Result<Vec<TrackedPlayer>> {
        let mut conn = self.conn()?;

        let rows: Vec<(PlayerRow, Option<String>)> = players::table
            .left_join(match_state::table.on(match_state::puuid.eq(players::puuid)))
            .select((PlayerRow::as_select(), match_state::match_id.nullable()))
            .order(players::puuid.asc())
            .load(&mut conn)
            .map_err(db_err)?;

        let subs: Vec<SubscriptionRow> = subscriptions::table
            .select(SubscriptionRow::as_select())
            .order((subscriptions::puuid.asc(), subscriptions::context.asc()))
            .load(&mut conn)
            .map_err(db_err)?;

        let mut contexts: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for sub in subs {
            contexts.entry(sub.puuid).or_default().push(sub.context);
        }

        Ok(rows
            .into_iter()
            .map(|(player, last_seen)| TrackedPlayer {
                contexts: contexts.remove(&player.puuid).unwrap_or_default(),
                player_id: PlayerId::new(player.puuid),
                label: player.label,
                last_seen_match_id: last_seen.map(MatchId::new),
            })
            .collect())
    }
}
